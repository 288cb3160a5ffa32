use thiserror::Error;

/// Why a buffer yielded no capture date.
///
/// The `extract_*` functions collapse all of these into `None`; only
/// [`crate::exif::inspect_capture_date`] hands them out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ExifError {
    #[error("not a JPEG: missing SOI marker")]
    NotJpeg,

    #[error("no Exif APP1 segment before image data")]
    NoExifSegment,

    #[error("APP1 segment does not carry the Exif identifier")]
    MissingIdentifier,

    #[error("structure truncated at offset {offset}")]
    Truncated { offset: usize },

    #[error("invalid TIFF byte order marker")]
    BadByteOrder,

    #[error("invalid TIFF magic number: {0:#06x}")]
    BadMagic(u16),

    #[error("no DateTime tag in the scanned directories")]
    NoDateTag,

    #[error("DateTime value is not YYYY:MM:DD")]
    MalformedDate,
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid config: {0}")]
    Config(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
