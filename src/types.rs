use std::fmt;

use serde::{Deserialize, Serialize, Serializer};

pub const KB: usize = 1024;

/// Exif metadata always sits near the start of a JPEG; this many leading
/// bytes are enough to reach it.
pub const EXIF_READ_LIMIT: usize = 128 * KB;

pub const TAG_DATE_TIME: u16 = 0x0132;
pub const TAG_EXIF_IFD_POINTER: u16 = 0x8769;
pub const TAG_DATE_TIME_ORIGINAL: u16 = 0x9003;
pub const TAG_DATE_TIME_DIGITIZED: u16 = 0x9004;

pub const TYPE_ASCII: u16 = 2;
pub const TYPE_LONG: u16 = 4;
pub const TYPE_IFD: u16 = 13;

/// `"YYYY:MM:DD HH:MM:SS\0"`
pub const DATE_TIME_COUNT: u32 = 20;
pub const DATE_TIME_CHARS: usize = 19;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ByteOrder {
    Little,
    Big,
}

impl ByteOrder {
    /// `II` or `MM`, anything else is not a TIFF header.
    #[inline]
    pub fn from_marker(marker: [u8; 2]) -> Option<Self> {
        match &marker {
            b"II" => Some(Self::Little),
            b"MM" => Some(Self::Big),
            _ => None,
        }
    }

    #[inline]
    pub fn read_u16(self, data: &[u8], offset: usize) -> Option<u16> {
        let bytes: [u8; 2] = data.get(offset..offset.checked_add(2)?)?.try_into().ok()?;
        Some(match self {
            Self::Little => u16::from_le_bytes(bytes),
            Self::Big => u16::from_be_bytes(bytes),
        })
    }

    #[inline]
    pub fn read_u32(self, data: &[u8], offset: usize) -> Option<u32> {
        let bytes: [u8; 4] = data.get(offset..offset.checked_add(4)?)?.try_into().ok()?;
        Some(match self {
            Self::Little => u32::from_le_bytes(bytes),
            Self::Big => u32::from_be_bytes(bytes),
        })
    }

    /// Bytes of a u32 as they appear on the wire in this byte order.
    #[inline]
    pub fn u32_bytes(self, value: u32) -> [u8; 4] {
        match self {
            Self::Little => value.to_le_bytes(),
            Self::Big => value.to_be_bytes(),
        }
    }
}

impl fmt::Display for ByteOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Little => write!(f, "little-endian"),
            Self::Big => write!(f, "big-endian"),
        }
    }
}

/// One 12-byte record of an Image File Directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IfdEntry {
    pub tag: u16,
    pub field_type: u16,
    pub count: u32,
    pub value_offset: u32,
}

impl IfdEntry {
    /// ASCII, 20 bytes including the terminator.
    #[inline]
    pub fn is_date_time_field(&self) -> bool {
        self.field_type == TYPE_ASCII && self.count == DATE_TIME_COUNT
    }
}

/// Which directories are consulted for a date tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TagScope {
    /// DateTime (0x0132) in the first IFD only.
    #[default]
    Ifd0,
    /// Falls back to DateTimeOriginal/DateTimeDigitized in the Exif private IFD.
    WithExifSubIfd,
}

impl TagScope {
    #[inline]
    pub fn follows_exif_ifd(self) -> bool {
        matches!(self, Self::WithExifSubIfd)
    }
}

/// A calendar date with no time-zone semantics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CaptureDate {
    pub year: u16,
    pub month: u8,
    pub day: u8,
}

impl CaptureDate {
    pub const fn new(year: u16, month: u8, day: u8) -> Self {
        Self { year, month, day }
    }
}

impl fmt::Display for CaptureDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

impl Serialize for CaptureDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
