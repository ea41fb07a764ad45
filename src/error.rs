use thiserror::Error;

use crate::material::MaterialType;

/// Errors returned by archive operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ArchiveError {
    /// The archive already holds `capacity` materials.
    #[error("archive capacity exceeded ({capacity} materials)")]
    CapacityExceeded { capacity: usize },

    /// Another material already uses this title.
    #[error("duplicate title: {0}")]
    DuplicateTitle(String),

    /// A text field is longer than the configured limit.
    #[error("{field} is {len} characters long (max {max})")]
    FieldTooLong {
        field: &'static str,
        len: usize,
        max: usize,
    },

    /// No material with this title exists.
    #[error("material not found: {0}")]
    NotFound(String),

    #[error("invalid archive")]
    InvalidArchive,

    #[error("invalid title")]
    InvalidTitle,

    #[error("invalid book subtype")]
    InvalidBookSubtype,

    #[error("invalid journal subtype")]
    InvalidJournalSubtype,

    #[error("invalid newspaper subtype")]
    InvalidNewspaperSubtype,

    #[error("invalid material type")]
    InvalidMaterialType,

    #[error("invalid archive configuration: {0}")]
    InvalidConfig(String),

    /// Snapshot encoding/decoding error.
    #[error("snapshot error: {0}")]
    Snapshot(String),
}

impl ArchiveError {
    /// The subtype error matching a material kind.
    pub(crate) fn invalid_subtype(kind: MaterialType) -> Self {
        match kind {
            MaterialType::Book => ArchiveError::InvalidBookSubtype,
            MaterialType::Journal => ArchiveError::InvalidJournalSubtype,
            MaterialType::Newspaper => ArchiveError::InvalidNewspaperSubtype,
        }
    }
}

pub type Result<T> = std::result::Result<T, ArchiveError>;
