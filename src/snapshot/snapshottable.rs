use serde::{de::DeserializeOwned, Serialize};

use crate::error::Result;

/// Types whose state can be captured and restored wholesale.
///
/// The associated `Snapshot` type is a plain serializable struct
/// (e.g. [`ArchiveSnapshot`](super::ArchiveSnapshot)).
pub trait Snapshottable {
    type Snapshot: Serialize + DeserializeOwned;

    /// Capture the current state.
    fn create_snapshot(&self) -> Self::Snapshot;

    /// Replace the current state with a snapshot.
    ///
    /// On error the current state is left unchanged.
    fn restore_from_snapshot(&mut self, snapshot: Self::Snapshot) -> Result<()>;
}
