use crate::model::ClientId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;

/// Identifier of a history row. Allocated independently of client ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HistoryId(pub u32);

impl From<u32> for HistoryId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for HistoryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Lifecycle event recorded in the history log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HistoryStatus {
    ClientCreated,
    ClientEdited,
    ClientDeleted,
}

impl HistoryStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            HistoryStatus::ClientCreated => "ClientCreated",
            HistoryStatus::ClientEdited => "ClientEdited",
            HistoryStatus::ClientDeleted => "ClientDeleted",
        }
    }
}

impl Display for HistoryStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HistoryStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ClientCreated" => Ok(HistoryStatus::ClientCreated),
            "ClientEdited" => Ok(HistoryStatus::ClientEdited),
            "ClientDeleted" => Ok(HistoryStatus::ClientDeleted),
            other => Err(format!("unknown history status: {other}")),
        }
    }
}

/// One append-only audit entry.
///
/// `client_id` is not a foreign key: records outlive the client they describe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryRecord {
    pub id: HistoryId,
    pub client_id: ClientId,
    pub status: HistoryStatus,
    pub timestamp: DateTime<Utc>,
}

/// Payload for appending a history record.
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryAppend {
    pub client_id: ClientId,
    pub status: HistoryStatus,
    pub timestamp: DateTime<Utc>,
}
