use serde::{Deserialize, Serialize};

use super::ArchiveSnapshot;
use crate::error::{ArchiveError, Result};

/// An encoded archive snapshot: material count plus compact binary data.
///
/// `data` holds the bitcode encoding of an [`ArchiveSnapshot`]. In JSON it
/// is written as a base64 string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnapshotRecord {
    pub len: usize,
    #[serde(with = "data_serde")]
    pub data: Vec<u8>,
}

mod data_serde {
    use base64::{engine::general_purpose::STANDARD, Engine};
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S>(data: &[u8], serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        STANDARD.encode(data).serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Vec<u8>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s: String = String::deserialize(deserializer)?;
        STANDARD.decode(&s).map_err(serde::de::Error::custom)
    }
}

impl SnapshotRecord {
    pub fn encode(snapshot: &ArchiveSnapshot) -> Result<Self> {
        let data = bitcode::serialize(snapshot)
            .map_err(|e| ArchiveError::Snapshot(format!("encode: {e}")))?;
        Ok(SnapshotRecord {
            len: snapshot.materials.len(),
            data,
        })
    }

    /// Decode the snapshot. Fails if the data is corrupt or its material
    /// count disagrees with `len`.
    pub fn decode(&self) -> Result<ArchiveSnapshot> {
        let snapshot: ArchiveSnapshot = bitcode::deserialize(&self.data)
            .map_err(|e| ArchiveError::Snapshot(format!("decode: {e}")))?;
        if snapshot.materials.len() != self.len {
            return Err(ArchiveError::Snapshot(format!(
                "record says {} materials, data holds {}",
                self.len,
                snapshot.materials.len()
            )));
        }
        Ok(snapshot)
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| ArchiveError::Snapshot(e.to_string()))
    }

    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| ArchiveError::Snapshot(e.to_string()))
    }
}
