use serde::{Deserialize, Serialize};
use tracing::debug;

use super::Snapshottable;
use crate::archive::Archive;
use crate::config::ArchiveConfig;
use crate::error::Result;
use crate::material::Material;

/// Point-in-time copy of an archive's limits and contents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArchiveSnapshot {
    pub config: ArchiveConfig,
    pub materials: Vec<Material>,
}

impl ArchiveSnapshot {
    /// Rebuild an archive, re-checking every invariant.
    ///
    /// Materials are re-added in order, so an oversized or duplicated
    /// snapshot fails exactly as the equivalent sequence of adds would.
    pub fn into_archive(self) -> Result<Archive> {
        let mut archive = Archive::with_config(self.config)?;
        for material in self.materials {
            archive.add(material)?;
        }
        Ok(archive)
    }
}

impl Snapshottable for Archive {
    type Snapshot = ArchiveSnapshot;

    fn create_snapshot(&self) -> ArchiveSnapshot {
        ArchiveSnapshot {
            config: *self.config(),
            materials: self.materials().to_vec(),
        }
    }

    fn restore_from_snapshot(&mut self, snapshot: ArchiveSnapshot) -> Result<()> {
        let restored = snapshot.into_archive()?;
        debug!(len = restored.len(), "archive restored from snapshot");
        *self = restored;
        Ok(())
    }
}
