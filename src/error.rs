use std::error::Error;

use rusoto_core::RusotoError;
use rusoto_ec2::CreateSnapshotError;
use std::fmt;
use std::fmt::{Display, Formatter};

#[derive(Debug, PartialEq)]
pub enum SnapshotTriggerError {
    CreateSnapshot(RusotoError<CreateSnapshotError>),
    SerializeResponse(String),
}

impl Display for SnapshotTriggerError {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match *self {
            SnapshotTriggerError::CreateSnapshot(ref error) => Display::fmt(error, f),
            SnapshotTriggerError::SerializeResponse(ref message) => {
                write!(f, "Failed to serialize snapshot response: {}", message)
            }
        }
    }
}

impl Error for SnapshotTriggerError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match *self {
            SnapshotTriggerError::CreateSnapshot(ref error) => Some(error),
            _ => None,
        }
    }
}

impl From<RusotoError<CreateSnapshotError>> for SnapshotTriggerError {
    fn from(e: RusotoError<CreateSnapshotError>) -> SnapshotTriggerError {
        SnapshotTriggerError::CreateSnapshot(e)
    }
}

impl From<serde_json::Error> for SnapshotTriggerError {
    fn from(e: serde_json::Error) -> SnapshotTriggerError {
        SnapshotTriggerError::SerializeResponse(e.to_string())
    }
}
