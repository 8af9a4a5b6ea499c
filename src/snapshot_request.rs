use rusoto_ec2::{CreateSnapshotRequest, Tag, TagSpecification};

use crate::config::{SnapshotConfig, TAG_KEY, TAG_RESOURCE_TYPE};
use crate::snapshot_date::SnapshotDate;

#[derive(Debug, Clone, PartialEq)]
pub struct SnapshotRequest {
    pub volume_id: String,
    pub description: String,
    pub tag_value: String,
}

impl SnapshotRequest {
    pub fn new(config: &SnapshotConfig, date: SnapshotDate) -> Self {
        SnapshotRequest {
            volume_id: config.volume_id.clone(),
            description: config.description.clone(),
            tag_value: format!("{} {}", config.description, date),
        }
    }
}

impl From<&SnapshotRequest> for CreateSnapshotRequest {
    fn from(request: &SnapshotRequest) -> Self {
        CreateSnapshotRequest {
            volume_id: request.volume_id.clone(),
            description: Some(request.description.clone()),
            tag_specifications: Some(vec![TagSpecification {
                resource_type: Some(TAG_RESOURCE_TYPE.to_string()),
                tags: Some(vec![Tag {
                    key: Some(TAG_KEY.to_string()),
                    value: Some(request.tag_value.clone()),
                }]),
            }]),
            ..CreateSnapshotRequest::default()
        }
    }
}
