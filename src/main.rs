mod config;
mod ec2_snapshot_client;
mod error;
mod snapshot_date;
mod snapshot_request;
mod trigger;

use lambda_runtime::{handler_fn, Context, Error};
use once_cell::sync::Lazy;
use rusoto_core::Region;
use rusoto_ec2::Ec2Client;
use serde_json::Value;
use tracing::Level;

use crate::config::SnapshotConfig;
use crate::ec2_snapshot_client::Ec2SnapshotClient;
use crate::trigger::SnapshotTrigger;

static TRIGGER: Lazy<SnapshotTrigger<Ec2SnapshotClient>> = Lazy::new(|| {
    SnapshotTrigger::new(
        Ec2SnapshotClient::new_with_client(Ec2Client::new(Region::default())),
        SnapshotConfig::default(),
    )
});

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .json()
        .with_max_level(Level::INFO)
        .with_target(false)
        .without_time()
        .init();

    lambda_runtime::run(handler_fn(snapshot_handler))
        .await
        .map_err(|e| anyhow::anyhow!(e))?;
    Ok(())
}

async fn snapshot_handler(event: Value, _: Context) -> Result<Value, Error> {
    Ok(TRIGGER.handle(event).await)
}
