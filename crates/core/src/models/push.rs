use serde::{Deserialize, Serialize};

use crate::models::spot::ApiSpot;

/// A message on the shared parking-updates topic.
///
/// The broker publishes either a full spot-array snapshot or a single updated
/// record on the same topic, so consumers must accept both shapes. Messages
/// carry no sequence number; they are applied in receipt order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PushUpdate {
    /// Replacement snapshot of every spot.
    Snapshot(Vec<ApiSpot>),
    /// One updated spot record.
    Spot(ApiSpot),
}
