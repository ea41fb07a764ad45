//! Materials - the records stored in an [`Archive`](crate::Archive).
//!
//! A material is identified by its title. Its `kind` tag and its `details`
//! payload are separate fields: the convenience constructors always keep them
//! in agreement, but [`Material::with_kind`] stores whatever it is given.
//!
//! ## Example
//!
//! ```
//! use material_archive::{BookSubtype, Material, MaterialType};
//!
//! let dune = Material::book("Dune", 412, "Frank Herbert", BookSubtype::Novel);
//! assert_eq!(dune.kind, MaterialType::Book);
//! assert_eq!(dune.creator(), Some("Frank Herbert"));
//! ```

mod details;
mod kind;

use serde::{Deserialize, Serialize};

pub use details::{BookDetails, JournalDetails, MaterialDetails, NewspaperDetails};
pub use kind::{BookSubtype, JournalSubtype, MaterialType, NewspaperSubtype};

/// A single catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Material {
    pub title: String,
    pub kind: MaterialType,
    pub details: MaterialDetails,
}

impl Material {
    /// Create a material whose kind is taken from its details.
    pub fn new(title: impl Into<String>, details: impl Into<MaterialDetails>) -> Self {
        let details = details.into();
        Material {
            title: title.into(),
            kind: details.kind(),
            details,
        }
    }

    /// Create a material with an explicit kind tag. The tag is not checked
    /// against the details.
    pub fn with_kind(
        title: impl Into<String>,
        kind: MaterialType,
        details: impl Into<MaterialDetails>,
    ) -> Self {
        Material {
            title: title.into(),
            kind,
            details: details.into(),
        }
    }

    pub fn book(
        title: impl Into<String>,
        pages: i32,
        author: impl Into<String>,
        subtype: BookSubtype,
    ) -> Self {
        Self::new(
            title,
            BookDetails {
                pages,
                author: author.into(),
                subtype,
            },
        )
    }

    pub fn journal(
        title: impl Into<String>,
        issue: i32,
        publisher: impl Into<String>,
        subtype: JournalSubtype,
    ) -> Self {
        Self::new(
            title,
            JournalDetails {
                issue,
                publisher: publisher.into(),
                subtype,
            },
        )
    }

    pub fn newspaper(
        title: impl Into<String>,
        editor: impl Into<String>,
        subtype: NewspaperSubtype,
    ) -> Self {
        Self::new(
            title,
            NewspaperDetails {
                editor: editor.into(),
                subtype,
            },
        )
    }

    /// True when the details variant agrees with the kind tag.
    pub fn is_consistent(&self) -> bool {
        self.kind == self.details.kind()
    }

    /// The author, publisher or editor selected by the kind tag.
    ///
    /// Returns `None` when the details variant does not agree with the tag.
    pub fn creator(&self) -> Option<&str> {
        self.is_consistent().then(|| self.details.creator())
    }
}
