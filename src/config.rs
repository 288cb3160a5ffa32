use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::types::{EXIF_READ_LIMIT, TagScope};

/// Knobs for a single extraction.
///
/// Loaded from JSON with every field optional:
///
/// ```json
/// { "read_limit": 65536, "scope": "with_exif_sub_ifd" }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractOptions {
    /// Leading bytes of a file that are read and parsed.
    pub read_limit: usize,
    pub scope: TagScope,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            read_limit: EXIF_READ_LIMIT,
            scope: TagScope::Ifd0,
        }
    }
}

impl ExtractOptions {
    #[inline]
    pub fn with_scope(mut self, scope: TagScope) -> Self {
        self.scope = scope;
        self
    }

    #[inline]
    pub fn with_read_limit(mut self, read_limit: usize) -> Self {
        self.read_limit = read_limit;
        self
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let json = fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }
}
