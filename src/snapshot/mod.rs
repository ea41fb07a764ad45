//! Snapshots - capture an archive's state and restore it later.
//!
//! ## Example
//!
//! ```
//! use material_archive::{Archive, Material, NewspaperSubtype, SnapshotRecord, Snapshottable};
//!
//! let mut archive = Archive::new();
//! archive.add(Material::newspaper("The Times", "Tony Gallagher", NewspaperSubtype::Daily))?;
//!
//! let record = SnapshotRecord::encode(&archive.create_snapshot())?;
//! let restored = record.decode()?.into_archive()?;
//! assert_eq!(restored, archive);
//! # Ok::<(), material_archive::ArchiveError>(())
//! ```

mod archive;
mod record;
mod snapshottable;

pub use archive::ArchiveSnapshot;
pub use record::SnapshotRecord;
pub use snapshottable::Snapshottable;
