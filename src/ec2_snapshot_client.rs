use async_trait::async_trait;
use rusoto_ec2::{CreateSnapshotRequest, Ec2, Ec2Client, Snapshot};

use crate::error::SnapshotTriggerError;
use crate::snapshot_request::SnapshotRequest;

pub struct Ec2SnapshotClient {
    client: Ec2Client,
}

#[async_trait]
pub trait CreateVolumeSnapshot {
    async fn create_volume_snapshot(
        &self,
        request: &SnapshotRequest,
    ) -> Result<Snapshot, SnapshotTriggerError>;
}

#[async_trait]
impl CreateVolumeSnapshot for Ec2SnapshotClient {
    async fn create_volume_snapshot(
        &self,
        request: &SnapshotRequest,
    ) -> Result<Snapshot, SnapshotTriggerError> {
        let snapshot = self
            .client
            .create_snapshot(CreateSnapshotRequest::from(request))
            .await?;
        Ok(snapshot)
    }
}

impl Ec2SnapshotClient {
    pub fn new_with_client(client: Ec2Client) -> Self {
        Ec2SnapshotClient { client }
    }
}
