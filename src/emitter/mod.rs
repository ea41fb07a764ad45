//! Change notifications for archives, backed by `event_emitter_rs`.

mod archive_ext;

pub use archive_ext::{ArchiveEmitter, ArchiveEvent, EmittableArchive};
