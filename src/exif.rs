//! Capture-date extraction from the Exif APP1 segment of a JPEG.
//!
//! The extractor is a pure function over a byte buffer. It reads the first
//! APP1 segment, checks the `Exif\0\0` identifier and the TIFF header that
//! follows, then scans IFD0 for the DateTime tag (0x0132). With
//! [`TagScope::WithExifSubIfd`] it falls back to DateTimeOriginal (0x9003) and
//! DateTimeDigitized (0x9004) in the Exif private IFD.
//!
//! Malformed input never panics. [`extract_capture_date`] reports every
//! failure as `None`; [`inspect_capture_date`] says which check failed.

use tracing::debug;

use crate::config::ExtractOptions;
use crate::error::ExifError;
use crate::formats::{jpeg, tiff};
use crate::types::{
    ByteOrder, CaptureDate, DATE_TIME_CHARS, IfdEntry, TAG_DATE_TIME, TAG_DATE_TIME_DIGITIZED,
    TAG_DATE_TIME_ORIGINAL,
};

/// Capture date of a JPEG, with default options.
#[inline]
pub fn extract_capture_date(data: &[u8]) -> Option<CaptureDate> {
    extract_capture_date_with(data, &ExtractOptions::default())
}

pub fn extract_capture_date_with(data: &[u8], options: &ExtractOptions) -> Option<CaptureDate> {
    match inspect_capture_date(data, options) {
        Ok(date) => Some(date),
        Err(reason) => {
            debug!(%reason, len = data.len(), "no capture date");
            None
        }
    }
}

pub fn inspect_capture_date(
    data: &[u8],
    options: &ExtractOptions,
) -> Result<CaptureDate, ExifError> {
    let data = &data[..data.len().min(options.read_limit)];

    let block = jpeg::exif_tiff_block(data)?;
    let header = tiff::read_tiff_header(block)?;
    let bo = header.byte_order;

    let ifd0 = tiff::read_ifd(bo, block, header.ifd0_offset)?;
    let mut exif_ifd = None;

    for entry in ifd0.entries() {
        if entry.tag == TAG_DATE_TIME && entry.is_date_time_field() {
            return read_date_value(bo, block, &entry);
        }
        if exif_ifd.is_none() {
            exif_ifd = tiff::exif_ifd_offset(&entry);
        }
    }

    if !options.scope.follows_exif_ifd() {
        return Err(ExifError::NoDateTag);
    }

    let Some(offset) = exif_ifd else {
        return Err(ExifError::NoDateTag);
    };

    let sub_ifd = tiff::read_ifd(bo, block, offset)?;
    for entry in sub_ifd.entries() {
        if matches!(entry.tag, TAG_DATE_TIME_ORIGINAL | TAG_DATE_TIME_DIGITIZED)
            && entry.is_date_time_field()
        {
            return read_date_value(bo, block, &entry);
        }
    }

    Err(ExifError::NoDateTag)
}

fn read_date_value(bo: ByteOrder, block: &[u8], entry: &IfdEntry) -> Result<CaptureDate, ExifError> {
    let raw = tiff::value_bytes(bo, block, entry, DATE_TIME_CHARS).ok_or(ExifError::Truncated {
        offset: entry.value_offset as usize,
    })?;

    parse_exif_datetime(&raw).ok_or(ExifError::MalformedDate)
}

/// Parses the leading `YYYY:MM:DD` of an Exif date-time value.
///
/// Only the shape is checked, not calendar ranges; the time part is ignored.
pub fn parse_exif_datetime(raw: &[u8]) -> Option<CaptureDate> {
    if raw.get(4) != Some(&b':') || raw.get(7) != Some(&b':') {
        return None;
    }

    let year = ascii_number(raw.get(0..4)?)?;
    let month = ascii_number(raw.get(5..7)?)?;
    let day = ascii_number(raw.get(8..10)?)?;

    Some(CaptureDate::new(year as u16, month as u8, day as u8))
}

#[inline]
fn ascii_number(digits: &[u8]) -> Option<u32> {
    digits.iter().try_fold(0u32, |acc, &b| {
        b.is_ascii_digit().then(|| acc * 10 + u32::from(b - b'0'))
    })
}
