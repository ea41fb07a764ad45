use tracing::debug;

use super::Archive;
use crate::material::{Material, MaterialType};

impl Archive {
    /// A new archive holding copies of every material of `kind`, in order.
    ///
    /// The source archive is left untouched. The result carries the same
    /// limits and is empty when nothing matches.
    pub fn filter_by_type(&self, kind: MaterialType) -> Archive {
        let materials = self
            .materials
            .iter()
            .filter(|m| m.kind == kind)
            .cloned()
            .collect();
        Archive::from_parts(self.config, materials)
    }

    /// Copies of every material created by `name`: books by author, journals
    /// by publisher, newspapers by editor.
    ///
    /// Returns `None` for an empty name and when nothing matches, never an
    /// empty vector.
    pub fn filter_by_creator(&self, name: &str) -> Option<Vec<Material>> {
        if name.is_empty() {
            return None;
        }

        let mut matches: Vec<Material> = self
            .materials
            .iter()
            .filter(|m| m.creator() == Some(name))
            .cloned()
            .collect();

        if matches.is_empty() {
            debug!(name, "no materials for creator");
            return None;
        }

        matches.shrink_to_fit();
        Some(matches)
    }
}

/// [`Archive::filter_by_creator`] for callers holding optional arguments.
///
/// An absent archive or name yields `None`.
pub fn filter_by_creator(archive: Option<&Archive>, name: Option<&str>) -> Option<Vec<Material>> {
    archive?.filter_by_creator(name?)
}
