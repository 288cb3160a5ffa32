//! TIFF header and IFD reading over the slice that follows the Exif identifier.
//! Operates on borrowed slices; every read is bounds-checked.

use std::borrow::Cow;

use crate::error::ExifError;
use crate::types::{
    ByteOrder, IfdEntry, TAG_EXIF_IFD_POINTER, TYPE_ASCII, TYPE_IFD, TYPE_LONG,
};

pub const TIFF_MAGIC: u16 = 0x002A;

/// Byte order marker, magic number and first IFD offset.
pub const TIFF_HEADER_LEN: usize = 8;
pub const IFD_ENTRY_LEN: usize = 12;

/// Bytes of value data an entry can hold in its own value/offset field.
pub const INLINE_VALUE_LEN: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TiffHeader {
    pub byte_order: ByteOrder,
    /// Relative to the start of the header.
    pub ifd0_offset: u32,
}

/// Size in bytes of one value of a TIFF field type.
#[inline]
pub fn type_unit_size(field_type: u16) -> Option<usize> {
    match field_type {
        1 | TYPE_ASCII | 6 | 7 => Some(1),
        3 | 8 => Some(2),
        TYPE_LONG | 9 | 11 | TYPE_IFD => Some(4),
        5 | 10 | 12 => Some(8),
        _ => None,
    }
}

pub fn read_tiff_header(tiff: &[u8]) -> Result<TiffHeader, ExifError> {
    if tiff.len() < TIFF_HEADER_LEN {
        return Err(ExifError::Truncated { offset: tiff.len() });
    }

    let byte_order =
        ByteOrder::from_marker([tiff[0], tiff[1]]).ok_or(ExifError::BadByteOrder)?;

    let magic = byte_order
        .read_u16(tiff, 2)
        .ok_or(ExifError::Truncated { offset: 2 })?;
    if magic != TIFF_MAGIC {
        return Err(ExifError::BadMagic(magic));
    }

    let ifd0_offset = byte_order
        .read_u32(tiff, 4)
        .ok_or(ExifError::Truncated { offset: 4 })?;

    Ok(TiffHeader {
        byte_order,
        ifd0_offset,
    })
}

#[inline]
pub fn read_ifd_entry(bo: ByteOrder, tiff: &[u8], offset: usize) -> Option<IfdEntry> {
    Some(IfdEntry {
        tag: bo.read_u16(tiff, offset)?,
        field_type: bo.read_u16(tiff, offset.checked_add(2)?)?,
        count: bo.read_u32(tiff, offset.checked_add(4)?)?,
        value_offset: bo.read_u32(tiff, offset.checked_add(8)?)?,
    })
}

/// A directory whose entry table is known to lie within the TIFF slice.
#[derive(Debug, Clone, Copy)]
pub struct Ifd<'a> {
    byte_order: ByteOrder,
    tiff: &'a [u8],
    entries_start: usize,
    len: usize,
}

impl<'a> Ifd<'a> {
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn entries(&self) -> impl Iterator<Item = IfdEntry> + 'a {
        let Ifd {
            byte_order,
            tiff,
            entries_start,
            len,
        } = *self;

        (0..len).filter_map(move |i| {
            read_ifd_entry(byte_order, tiff, entries_start + i * IFD_ENTRY_LEN)
        })
    }
}

/// Reads the entry count at `ifd_offset` and checks the whole entry table fits.
pub fn read_ifd(bo: ByteOrder, tiff: &[u8], ifd_offset: u32) -> Result<Ifd<'_>, ExifError> {
    let offset = ifd_offset as usize;
    let len = bo
        .read_u16(tiff, offset)
        .ok_or(ExifError::Truncated { offset })? as usize;

    let entries_start = offset + 2;
    let entries_end = entries_start + len * IFD_ENTRY_LEN;
    if entries_end > tiff.len() {
        return Err(ExifError::Truncated {
            offset: tiff.len(),
        });
    }

    Ok(Ifd {
        byte_order: bo,
        tiff,
        entries_start,
        len,
    })
}

/// First `len` bytes of an entry's value.
///
/// Values of at most four bytes live in the entry itself; longer ones at
/// `value_offset`, relative to the TIFF header.
pub fn value_bytes<'a>(
    bo: ByteOrder,
    tiff: &'a [u8],
    entry: &IfdEntry,
    len: usize,
) -> Option<Cow<'a, [u8]>> {
    let unit = type_unit_size(entry.field_type)?;
    let total = unit.checked_mul(entry.count as usize)?;
    if len > total {
        return None;
    }

    if total <= INLINE_VALUE_LEN {
        let inline = bo.u32_bytes(entry.value_offset);
        return Some(Cow::Owned(inline[..len].to_vec()));
    }

    let start = entry.value_offset as usize;
    tiff.get(start..start.checked_add(len)?).map(Cow::Borrowed)
}

/// Offset of the Exif private IFD when `entry` is its pointer.
#[inline]
pub fn exif_ifd_offset(entry: &IfdEntry) -> Option<u32> {
    (entry.tag == TAG_EXIF_IFD_POINTER
        && matches!(entry.field_type, TYPE_LONG | TYPE_IFD)
        && entry.count == 1)
        .then_some(entry.value_offset)
}
