use chrono::{FixedOffset, Offset, Utc};

pub const VOLUME_ID: &str = "vol-0a1b2c3d4e5f67890";
pub const SNAPSHOT_DESCRIPTION: &str = "My EC2 Snapshot";
pub const TAG_KEY: &str = "Name";
pub const TAG_RESOURCE_TYPE: &str = "snapshot";

#[derive(Debug, Clone, PartialEq)]
pub struct SnapshotConfig {
    pub volume_id: String,
    pub description: String,
    /// Zone the tag date is computed in. Defaults to UTC, the Lambda clock.
    pub utc_offset: FixedOffset,
}

impl Default for SnapshotConfig {
    fn default() -> Self {
        Self {
            volume_id: VOLUME_ID.to_string(),
            description: SNAPSHOT_DESCRIPTION.to_string(),
            utc_offset: Utc.fix(),
        }
    }
}
