use std::path::{Path, PathBuf};

use rayon::prelude::*;
use serde::Serialize;
use tracing::{info, warn};

use crate::config::ExtractOptions;
use crate::io::extract_from_path;
use crate::types::CaptureDate;

/// Outcome for one file of a batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BatchItem {
    pub path: PathBuf,
    pub date: Option<CaptureDate>,
    /// Set when the file could not be read at all.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BatchSummary {
    pub dated: usize,
    pub undated: usize,
    pub unreadable: usize,
}

impl BatchSummary {
    pub fn from_items(items: &[BatchItem]) -> Self {
        items.iter().fold(Self::default(), |mut acc, item| {
            match (&item.error, item.date) {
                (Some(_), _) => acc.unreadable += 1,
                (None, Some(_)) => acc.dated += 1,
                (None, None) => acc.undated += 1,
            }
            acc
        })
    }

    #[inline]
    pub fn total(&self) -> usize {
        self.dated + self.undated + self.unreadable
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct BatchReport {
    pub items: Vec<BatchItem>,
    pub summary: BatchSummary,
}

impl BatchReport {
    pub fn new(items: Vec<BatchItem>) -> Self {
        let summary = BatchSummary::from_items(&items);
        Self { items, summary }
    }
}

fn extract_one(path: &Path, options: &ExtractOptions) -> BatchItem {
    match extract_from_path(path, options) {
        Ok(date) => BatchItem {
            path: path.to_path_buf(),
            date,
            error: None,
        },
        Err(err) => {
            warn!(path = %path.display(), error = %err, "unreadable");
            BatchItem {
                path: path.to_path_buf(),
                date: None,
                error: Some(err.to_string()),
            }
        }
    }
}

/// Extracts dates from every path in parallel. Output order follows input order.
pub fn extract_batch<P>(paths: &[P], options: &ExtractOptions) -> Vec<BatchItem>
where
    P: AsRef<Path> + Sync,
{
    let items: Vec<BatchItem> = paths
        .par_iter()
        .map(|path| extract_one(path.as_ref(), options))
        .collect();

    let summary = BatchSummary::from_items(&items);
    info!(
        total = summary.total(),
        dated = summary.dated,
        undated = summary.undated,
        unreadable = summary.unreadable,
        "batch complete"
    );

    items
}
