//! Archive sizing limits.

use serde::{Deserialize, Serialize};

use crate::error::{ArchiveError, Result};

/// Hard upper bound on the number of materials an archive can hold.
pub const MAX_CAPACITY: usize = 100;

/// Default limit, in characters, for titles and creator names.
pub const MAX_TEXT_LEN: usize = 49;

/// Limits applied by an [`Archive`](crate::Archive).
///
/// Missing fields fall back to the defaults when deserialized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArchiveConfig {
    pub capacity: usize,
    pub max_text_len: usize,
}

impl Default for ArchiveConfig {
    fn default() -> Self {
        Self {
            capacity: MAX_CAPACITY,
            max_text_len: MAX_TEXT_LEN,
        }
    }
}

impl ArchiveConfig {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity,
            ..Self::default()
        }
    }

    /// Check that the limits are usable. Capacity must be in `1..=MAX_CAPACITY`.
    pub fn validate(&self) -> Result<()> {
        if self.capacity == 0 || self.capacity > MAX_CAPACITY {
            return Err(ArchiveError::InvalidConfig(format!(
                "capacity must be between 1 and {}, got {}",
                MAX_CAPACITY, self.capacity
            )));
        }
        if self.max_text_len == 0 {
            return Err(ArchiveError::InvalidConfig(
                "max_text_len must be at least 1".into(),
            ));
        }
        Ok(())
    }
}
