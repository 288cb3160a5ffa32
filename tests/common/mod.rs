#![allow(dead_code)]

use exifdate::ByteOrder;

pub const SAMPLE_DATE_TIME: &str = "2024:12:14 10:30:00";

pub const TAG_MAKE: u16 = 0x010F;
pub const TAG_ORIENTATION: u16 = 0x0112;
pub const TAG_DATE_TIME: u16 = 0x0132;
pub const TAG_DATE_TIME_ORIGINAL: u16 = 0x9003;
pub const TAG_DATE_TIME_DIGITIZED: u16 = 0x9004;

const TAG_EXIF_IFD_POINTER: u16 = 0x8769;

pub fn u16_bytes(order: ByteOrder, value: u16) -> [u8; 2] {
    match order {
        ByteOrder::Little => value.to_le_bytes(),
        ByteOrder::Big => value.to_be_bytes(),
    }
}

pub fn u32_bytes(order: ByteOrder, value: u32) -> [u8; 4] {
    match order {
        ByteOrder::Little => value.to_le_bytes(),
        ByteOrder::Big => value.to_be_bytes(),
    }
}

#[derive(Debug, Clone)]
pub enum Value {
    Bytes(Vec<u8>),
    Short(u16),
    Long(u32),
}

#[derive(Debug, Clone)]
pub struct RawEntry {
    pub tag: u16,
    pub field_type: u16,
    pub count: u32,
    pub value: Value,
}

impl RawEntry {
    /// NUL-terminated ASCII, count includes the terminator.
    pub fn ascii(tag: u16, text: &str) -> Self {
        let mut data = text.as_bytes().to_vec();
        data.push(0);
        Self {
            tag,
            field_type: 2,
            count: data.len() as u32,
            value: Value::Bytes(data),
        }
    }

    pub fn date_time(tag: u16, text: &str) -> Self {
        Self::ascii(tag, text)
    }

    pub fn short(tag: u16, value: u16) -> Self {
        Self {
            tag,
            field_type: 3,
            count: 1,
            value: Value::Short(value),
        }
    }

    pub fn long(tag: u16, value: u32) -> Self {
        Self {
            tag,
            field_type: 4,
            count: 1,
            value: Value::Long(value),
        }
    }

    pub fn with_type(mut self, field_type: u16) -> Self {
        self.field_type = field_type;
        self
    }

    pub fn with_count(mut self, count: u32) -> Self {
        self.count = count;
        self
    }

    fn encode_value(&self, order: ByteOrder) -> Vec<u8> {
        match &self.value {
            Value::Bytes(data) => data.clone(),
            Value::Short(v) => u16_bytes(order, *v).to_vec(),
            Value::Long(v) => u32_bytes(order, *v).to_vec(),
        }
    }
}

/// Builds the TIFF structure that follows `Exif\0\0`.
///
/// Layout: header, IFD0, optional Exif IFD, then out-of-line values.
#[derive(Debug, Clone)]
pub struct TiffBuilder {
    order: ByteOrder,
    ifd0: Vec<RawEntry>,
    exif_ifd: Option<Vec<RawEntry>>,
}

impl TiffBuilder {
    pub fn new(order: ByteOrder) -> Self {
        Self {
            order,
            ifd0: Vec::new(),
            exif_ifd: None,
        }
    }

    pub fn entry(mut self, entry: RawEntry) -> Self {
        self.ifd0.push(entry);
        self
    }

    pub fn exif_entry(mut self, entry: RawEntry) -> Self {
        self.exif_ifd.get_or_insert_with(Vec::new).push(entry);
        self
    }

    pub fn build(&self) -> Vec<u8> {
        let order = self.order;
        let ifd_len = |n: usize| 2 + n * 12 + 4;

        let mut ifd0 = self.ifd0.clone();
        let exif_ifd_offset = 8 + ifd_len(ifd0.len() + usize::from(self.exif_ifd.is_some()));
        if self.exif_ifd.is_some() {
            ifd0.push(RawEntry::long(TAG_EXIF_IFD_POINTER, exif_ifd_offset as u32));
        }

        let exif_entries = self.exif_ifd.clone().unwrap_or_default();
        let exif_len = if self.exif_ifd.is_some() {
            ifd_len(exif_entries.len())
        } else {
            0
        };
        let data_start = exif_ifd_offset + exif_len;

        let mut out = Vec::new();
        out.extend_from_slice(match order {
            ByteOrder::Little => b"II",
            ByteOrder::Big => b"MM",
        });
        out.extend_from_slice(&u16_bytes(order, 0x002A));
        out.extend_from_slice(&u32_bytes(order, 8));

        let mut data = Vec::new();
        write_ifd(&mut out, &mut data, order, &ifd0, data_start);
        if self.exif_ifd.is_some() {
            write_ifd(&mut out, &mut data, order, &exif_entries, data_start);
        }
        assert_eq!(out.len(), data_start);

        out.extend_from_slice(&data);
        out
    }
}

fn write_ifd(
    out: &mut Vec<u8>,
    data: &mut Vec<u8>,
    order: ByteOrder,
    entries: &[RawEntry],
    data_start: usize,
) {
    out.extend_from_slice(&u16_bytes(order, entries.len() as u16));
    for entry in entries {
        out.extend_from_slice(&u16_bytes(order, entry.tag));
        out.extend_from_slice(&u16_bytes(order, entry.field_type));
        out.extend_from_slice(&u32_bytes(order, entry.count));

        let value = entry.encode_value(order);
        if value.len() <= 4 {
            let mut inline = [0u8; 4];
            inline[..value.len()].copy_from_slice(&value);
            out.extend_from_slice(&inline);
        } else {
            let offset = (data_start + data.len()) as u32;
            out.extend_from_slice(&u32_bytes(order, offset));
            data.extend_from_slice(&value);
        }
    }
    out.extend_from_slice(&[0u8; 4]);
}

/// `FF E1 <len> Exif\0\0 <tiff>`
pub fn exif_app1(tiff: &[u8]) -> Vec<u8> {
    segment(0xE1, &[b"Exif\x00\x00".as_slice(), tiff].concat())
}

pub fn segment(marker: u8, payload: &[u8]) -> Vec<u8> {
    let mut out = vec![0xFF, marker];
    out.extend_from_slice(&((payload.len() + 2) as u16).to_be_bytes());
    out.extend_from_slice(payload);
    out
}

pub fn jfif_app0() -> Vec<u8> {
    segment(0xE0, b"JFIF\x00\x01\x01\x00\x00\x48\x00\x48\x00\x00")
}

/// SOI, the given segments, then a tiny scan and EOI.
pub fn jpeg(segments: &[Vec<u8>]) -> Vec<u8> {
    let mut out = vec![0xFF, 0xD8];
    for seg in segments {
        out.extend_from_slice(seg);
    }
    out.extend_from_slice(&[0xFF, 0xDA, 0x00, 0x08, 0x01, 0x01, 0x00, 0x00, 0x3F, 0x00]);
    out.extend_from_slice(&[0x12, 0x34, 0x56, 0x78]);
    out.extend_from_slice(&[0xFF, 0xD9]);
    out
}

pub fn jpeg_with_date(order: ByteOrder, date_time: &str) -> Vec<u8> {
    let tiff = TiffBuilder::new(order)
        .entry(RawEntry::short(TAG_ORIENTATION, 1))
        .entry(RawEntry::date_time(TAG_DATE_TIME, date_time))
        .build();
    jpeg(&[jfif_app0(), exif_app1(&tiff)])
}
