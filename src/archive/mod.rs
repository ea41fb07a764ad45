//! Archive - a bounded, title-keyed collection of materials.
//!
//! Materials are kept in insertion order. Titles are unique and compared
//! exactly (case-sensitive). Removing a material shifts every later material
//! down by one slot, so the remaining order never changes.
//!
//! ## Example
//!
//! ```
//! use material_archive::{Archive, BookSubtype, Material};
//!
//! let mut archive = Archive::new();
//! archive.add(Material::book("Dune", 412, "Frank Herbert", BookSubtype::Novel))?;
//!
//! assert_eq!(archive.len(), 1);
//! assert!(archive.find("Dune").is_some());
//! assert!(archive.find("dune").is_none());
//! # Ok::<(), material_archive::ArchiveError>(())
//! ```

mod filter;
mod update;

use tracing::{debug, warn};

use crate::config::ArchiveConfig;
use crate::error::{ArchiveError, Result};
use crate::material::Material;

pub use filter::filter_by_creator;
pub use update::update_material;

/// Bounded ordered collection of [`Material`] records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Archive {
    config: ArchiveConfig,
    materials: Vec<Material>,
}

impl Default for Archive {
    fn default() -> Self {
        Self::new()
    }
}

impl Archive {
    /// Create an empty archive with the default limits.
    pub fn new() -> Self {
        Self::from_parts(ArchiveConfig::default(), Vec::new())
    }

    /// Create an empty archive with custom limits.
    pub fn with_config(config: ArchiveConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::from_parts(config, Vec::new()))
    }

    /// Assemble an archive without checking invariants.
    pub(crate) fn from_parts(config: ArchiveConfig, materials: Vec<Material>) -> Self {
        Self { config, materials }
    }

    pub fn config(&self) -> &ArchiveConfig {
        &self.config
    }

    pub fn capacity(&self) -> usize {
        self.config.capacity
    }

    pub fn len(&self) -> usize {
        self.materials.len()
    }

    pub fn is_empty(&self) -> bool {
        self.materials.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.materials.len() >= self.config.capacity
    }

    /// Materials in archive order.
    pub fn materials(&self) -> &[Material] {
        &self.materials
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Material> {
        self.materials.iter()
    }

    /// Material at `index`, if the slot is occupied.
    pub fn get(&self, index: usize) -> Option<&Material> {
        self.materials.get(index)
    }

    /// Append a material.
    ///
    /// Fails when the archive is full, when the title is already taken, or
    /// when the title or creator name exceeds the text limit. The kind tag is
    /// not checked against the details.
    pub fn add(&mut self, material: Material) -> Result<()> {
        if self.is_full() {
            warn!(
                title = %material.title,
                capacity = self.config.capacity,
                "archive full, material rejected"
            );
            return Err(ArchiveError::CapacityExceeded {
                capacity: self.config.capacity,
            });
        }

        if self.position(&material.title).is_some() {
            debug!(title = %material.title, "duplicate title rejected");
            return Err(ArchiveError::DuplicateTitle(material.title));
        }

        self.check_text("title", &material.title)?;
        self.check_text(material.details.creator_field(), material.details.creator())?;

        debug!(
            title = %material.title,
            kind = ?material.kind,
            len = self.materials.len() + 1,
            "material added"
        );
        self.materials.push(material);
        Ok(())
    }

    /// Index of the first material with exactly this title.
    pub fn position(&self, title: &str) -> Option<usize> {
        self.materials.iter().position(|m| m.title == title)
    }

    /// First material with exactly this title.
    pub fn find(&self, title: &str) -> Option<&Material> {
        if self.materials.is_empty() {
            return None;
        }
        self.materials.iter().find(|m| m.title == title)
    }

    pub fn contains(&self, title: &str) -> bool {
        self.position(title).is_some()
    }

    /// Remove the material with this title, shifting later materials down.
    ///
    /// Returns the removed material, or `None` (archive untouched) when no
    /// material has the title.
    pub fn remove(&mut self, title: &str) -> Option<Material> {
        let Some(index) = self.position(title) else {
            debug!(title, "remove: no such material");
            return None;
        };

        let removed = self.materials.remove(index);
        debug!(title, index, len = self.materials.len(), "material removed");
        Some(removed)
    }

    pub(crate) fn check_text(&self, field: &'static str, value: &str) -> Result<()> {
        let len = value.chars().count();
        if len > self.config.max_text_len {
            return Err(ArchiveError::FieldTooLong {
                field,
                len,
                max: self.config.max_text_len,
            });
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a Archive {
    type Item = &'a Material;
    type IntoIter = std::slice::Iter<'a, Material>;

    fn into_iter(self) -> Self::IntoIter {
        self.materials.iter()
    }
}
