//! # exifdate
//!
//! Reads the capture date of a photo from the Exif metadata of a JPEG.
//!
//! ```no_run
//! let bytes = exifdate::io::read_prefix("photo.jpg", exifdate::EXIF_READ_LIMIT)?;
//! if let Some(date) = exifdate::extract_capture_date(&bytes) {
//!     println!("taken on {date}");
//! }
//! # Ok::<(), exifdate::Error>(())
//! ```

pub mod batch;
pub mod config;
mod error;
pub mod exif;
pub mod formats;
pub mod io;
pub mod prefill;
pub mod types;

pub use batch::{BatchItem, BatchReport, BatchSummary, extract_batch};
pub use config::ExtractOptions;
pub use error::{Error, ExifError, Result};
pub use exif::{extract_capture_date, extract_capture_date_with, inspect_capture_date};
pub use prefill::{prefill_date, prefill_from_selection};
pub use types::{ByteOrder, CaptureDate, EXIF_READ_LIMIT, IfdEntry, TagScope};
