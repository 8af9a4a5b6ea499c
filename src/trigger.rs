use chrono::{DateTime, Utc};
use serde_json::{json, Value};
use tracing::{error, info};

use crate::config::SnapshotConfig;
use crate::ec2_snapshot_client::CreateVolumeSnapshot;
use crate::error::SnapshotTriggerError;
use crate::snapshot_date::SnapshotDate;
use crate::snapshot_request::SnapshotRequest;

/// Takes one snapshot of the configured volume per invocation.
///
/// Every outcome ends up in the log: one `info` line carrying the provider
/// response, or one `error` line carrying the failure message. Nothing is
/// retried and no error leaves [`SnapshotTrigger::invoke`].
pub struct SnapshotTrigger<C> {
    client: C,
    config: SnapshotConfig,
    now: fn() -> DateTime<Utc>,
}

impl<C: CreateVolumeSnapshot> SnapshotTrigger<C> {
    pub fn new(client: C, config: SnapshotConfig) -> Self {
        Self::new_with_clock(client, config, Utc::now)
    }

    pub fn new_with_clock(client: C, config: SnapshotConfig, now: fn() -> DateTime<Utc>) -> Self {
        SnapshotTrigger {
            client,
            config,
            now,
        }
    }

    /// Runs one invocation. The scheduler event carries nothing we use.
    pub async fn handle(&self, _event: Value) -> Value {
        self.invoke().await;
        json!({})
    }

    pub async fn invoke(&self) {
        match self.create_snapshot().await {
            Ok(response) => info!("Snapshot created: {}", response),
            Err(e) => error!("Error creating snapshot: {}", e),
        }
    }

    async fn create_snapshot(&self) -> Result<String, SnapshotTriggerError> {
        let date = SnapshotDate::in_zone((self.now)(), &self.config.utc_offset);
        let request = SnapshotRequest::new(&self.config, date);
        let snapshot = self.client.create_volume_snapshot(&request).await?;
        Ok(serde_json::to_string(&snapshot)?)
    }
}
