use std::fs::File;
use std::io::Read;
use std::path::Path;

use tokio::io::AsyncReadExt;
use tracing::debug;

use crate::config::ExtractOptions;
use crate::error::Result;
use crate::exif::extract_capture_date_with;
use crate::types::{CaptureDate, EXIF_READ_LIMIT};

/// Reads at most `limit` bytes from the start of the file.
pub fn read_prefix(path: impl AsRef<Path>, limit: usize) -> Result<Vec<u8>> {
    let file = File::open(path)?;
    let mut buffer = Vec::with_capacity(limit.min(EXIF_READ_LIMIT));
    file.take(limit as u64).read_to_end(&mut buffer)?;
    Ok(buffer)
}

pub async fn read_prefix_async(path: impl AsRef<Path>, limit: usize) -> Result<Vec<u8>> {
    let file = tokio::fs::File::open(path).await?;
    let mut buffer = Vec::with_capacity(limit.min(EXIF_READ_LIMIT));
    file.take(limit as u64).read_to_end(&mut buffer).await?;
    Ok(buffer)
}

/// `Ok(None)` for a readable file that carries no usable date.
pub fn extract_from_path(
    path: impl AsRef<Path>,
    options: &ExtractOptions,
) -> Result<Option<CaptureDate>> {
    let path = path.as_ref();
    let data = read_prefix(path, options.read_limit)?;
    let date = extract_capture_date_with(&data, options);
    debug!(path = %path.display(), bytes = data.len(), found = date.is_some(), "extracted");
    Ok(date)
}

pub async fn extract_from_path_async(
    path: impl AsRef<Path>,
    options: &ExtractOptions,
) -> Result<Option<CaptureDate>> {
    let path = path.as_ref();
    let data = read_prefix_async(path, options.read_limit).await?;
    let date = extract_capture_date_with(&data, options);
    debug!(path = %path.display(), bytes = data.len(), found = date.is_some(), "extracted");
    Ok(date)
}
