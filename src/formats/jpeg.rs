use crate::error::ExifError;

pub const JPEG_SOI: [u8; 2] = [0xFF, 0xD8];
pub const EXIF_IDENTIFIER: &[u8; 6] = b"Exif\x00\x00";

pub const MARKER_TEM: u8 = 0x01;
pub const MARKER_SOI: u8 = 0xD8;
pub const MARKER_EOI: u8 = 0xD9;
pub const MARKER_SOS: u8 = 0xDA;
pub const MARKER_APP1: u8 = 0xE1;

/// A marker segment: `FF <marker> <len hi> <len lo> <payload>`.
#[derive(Debug, Clone, Copy)]
pub struct Segment<'a> {
    pub marker: u8,
    /// Position of the `FF` byte in the buffer.
    pub offset: usize,
    /// Bytes after the length field, `length - 2` of them.
    pub payload: &'a [u8],
}

impl Segment<'_> {
    #[inline]
    pub fn total_size(&self) -> usize {
        4 + self.payload.len()
    }
}

#[inline]
pub fn is_jpeg(data: &[u8]) -> bool {
    data.len() >= 2 && data[0..2] == JPEG_SOI
}

/// Markers that are not followed by a length field.
#[inline]
pub fn is_standalone_marker(marker: u8) -> bool {
    matches!(marker, MARKER_TEM | 0xD0..=0xD7)
}

/// Walks the marker segments from SOI up to the first APP1.
///
/// The walk stops without a result at SOS or EOI: Exif metadata never
/// follows the start of scan data.
pub fn find_app1_segment(data: &[u8]) -> Result<Segment<'_>, ExifError> {
    if !is_jpeg(data) {
        return Err(ExifError::NotJpeg);
    }

    let mut pos = 2;

    loop {
        if pos >= data.len() {
            return Err(ExifError::NoExifSegment);
        }

        if pos + 1 >= data.len() {
            return Err(ExifError::Truncated { offset: pos });
        }

        if data[pos] != 0xFF {
            return Err(ExifError::NoExifSegment);
        }

        let marker = data[pos + 1];

        // fill byte
        if marker == 0xFF {
            pos += 1;
            continue;
        }

        if is_standalone_marker(marker) {
            pos += 2;
            continue;
        }

        if matches!(marker, 0x00 | MARKER_SOI | MARKER_EOI | MARKER_SOS) {
            return Err(ExifError::NoExifSegment);
        }

        if pos + 3 >= data.len() {
            return Err(ExifError::Truncated { offset: pos + 2 });
        }

        // The length field counts itself but not the marker.
        let seg_len = u16::from_be_bytes([data[pos + 2], data[pos + 3]]) as usize;
        if seg_len < 2 {
            return Err(ExifError::Truncated { offset: pos + 2 });
        }

        let seg_end = pos + 2 + seg_len;
        if seg_end > data.len() {
            return Err(ExifError::Truncated { offset: pos });
        }

        if marker == MARKER_APP1 {
            return Ok(Segment {
                marker,
                offset: pos,
                payload: &data[pos + 4..seg_end],
            });
        }

        pos = seg_end;
    }
}

/// Returns the TIFF structure carried by the first APP1 segment.
///
/// Offsets inside the returned slice are relative to its first byte, the
/// byte order marker.
pub fn exif_tiff_block(data: &[u8]) -> Result<&[u8], ExifError> {
    let segment = find_app1_segment(data)?;

    match segment.payload.strip_prefix(EXIF_IDENTIFIER.as_slice()) {
        Some(tiff) => Ok(tiff),
        None => Err(ExifError::MissingIdentifier),
    }
}
