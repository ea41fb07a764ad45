//! A bounded in-memory catalog of library materials.
//!
//! An [`Archive`] holds up to 100 [`Material`] records (books, journals and
//! newspapers) keyed by title, and supports add, find, filter by type,
//! update, remove and search by creator.

mod archive;
mod config;
#[cfg(feature = "emitter")]
mod emitter;
mod error;
mod material;
mod snapshot;

pub use archive::{filter_by_creator, update_material, Archive};
pub use config::{ArchiveConfig, MAX_CAPACITY, MAX_TEXT_LEN};
#[cfg(feature = "emitter")]
pub use emitter::{ArchiveEmitter, ArchiveEvent, EmittableArchive};
pub use error::{ArchiveError, Result};
pub use material::{
    BookDetails, BookSubtype, JournalDetails, JournalSubtype, Material, MaterialDetails,
    MaterialType, NewspaperDetails, NewspaperSubtype,
};
pub use snapshot::{ArchiveSnapshot, SnapshotRecord, Snapshottable};

// Re-export the EventEmitter from the event_emitter_rs crate
#[cfg(feature = "emitter")]
pub use event_emitter_rs::EventEmitter;
