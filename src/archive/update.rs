use tracing::debug;

use super::Archive;
use crate::error::{ArchiveError, Result};
use crate::material::MaterialDetails;

impl Archive {
    /// Replace the details of the material titled `title`.
    ///
    /// The new details must be of the variant matching the material's kind
    /// tag; otherwise the call fails with the subtype error for that kind.
    /// On success every detail field is overwritten. Title and kind never
    /// change, and a failed update leaves the material as it was.
    pub fn update(&mut self, title: &str, details: MaterialDetails) -> Result<()> {
        let Some(index) = self.position(title) else {
            debug!(title, "update: no such material");
            return Err(ArchiveError::NotFound(title.to_string()));
        };

        let kind = self.materials[index].kind;
        if details.kind() != kind {
            debug!(title, ?kind, given = ?details.kind(), "update: details do not match kind");
            return Err(ArchiveError::invalid_subtype(kind));
        }
        self.check_text(details.creator_field(), details.creator())?;

        self.materials[index].details = details;
        debug!(title, ?kind, "material updated");
        Ok(())
    }
}

/// [`Archive::update`] for callers holding optional arguments.
///
/// An absent archive fails with [`ArchiveError::InvalidArchive`] and an
/// absent title with [`ArchiveError::InvalidTitle`], both before any lookup.
pub fn update_material(
    archive: Option<&mut Archive>,
    title: Option<&str>,
    details: MaterialDetails,
) -> Result<()> {
    let archive = archive.ok_or(ArchiveError::InvalidArchive)?;
    let title = title.ok_or(ArchiveError::InvalidTitle)?;
    archive.update(title, details)
}
