//! Date-field pre-fill for the timeline entry form.
//!
//! When photos are attached to an entry, the first one's capture date fills
//! the entry's date field, but only while that field is still blank. A photo
//! without a date, or one that cannot be read, leaves the field alone.

use std::path::Path;

use tracing::warn;

use crate::config::ExtractOptions;
use crate::exif::extract_capture_date_with;
use crate::io::{read_prefix, read_prefix_async};

#[inline]
fn is_blank(current: &str) -> bool {
    current.trim().is_empty()
}

/// The `YYYY-MM-DD` value to put into the field, if any.
pub fn prefill_date(current: &str, first_image: &[u8], options: &ExtractOptions) -> Option<String> {
    if !is_blank(current) {
        return None;
    }
    extract_capture_date_with(first_image, options).map(|date| date.to_string())
}

/// Applies [`prefill_date`] to the first file of a selection.
pub fn prefill_from_selection<P: AsRef<Path>>(
    current: &str,
    selection: &[P],
    options: &ExtractOptions,
) -> Option<String> {
    if !is_blank(current) {
        return None;
    }
    let first: &Path = selection.first()?.as_ref();

    match read_prefix(first, options.read_limit) {
        Ok(data) => prefill_date(current, &data, options),
        Err(err) => {
            warn!(path = %first.display(), error = %err, "could not read image for date pre-fill");
            None
        }
    }
}

pub async fn prefill_from_selection_async<P: AsRef<Path>>(
    current: &str,
    selection: &[P],
    options: &ExtractOptions,
) -> Option<String> {
    if !is_blank(current) {
        return None;
    }
    let first: &Path = selection.first()?.as_ref();

    match read_prefix_async(first, options.read_limit).await {
        Ok(data) => prefill_date(current, &data, options),
        Err(err) => {
            warn!(path = %first.display(), error = %err, "could not read image for date pre-fill");
            None
        }
    }
}
