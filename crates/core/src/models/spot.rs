use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::reservation::Reservation;

/// Backend-reported state of a parking spot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SpotStatus {
    Available,
    Reserved,
    Occupied,
    Vip,
    UnderMaintenance,
    PersonalUse,
}

/// Which class of vehicle a spot is designated for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SpotCategory {
    Normal,
    Vip,
    Personal,
}

/// One element of the spot listing response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiSpot {
    pub id: i64,
    pub label: String,
    pub category: SpotCategory,
    pub status: SpotStatus,
    #[serde(default)]
    pub occupied: bool,
}

/// Internal spot record held by the dashboard session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpotRecord {
    pub id: i64,
    pub label: String,
    pub category: SpotCategory,
    pub status: SpotStatus,
    /// True when the spot is physically in use, as detected by the backend.
    pub occupied: bool,
    /// Reservation history attached by the occupancy refresh.
    #[serde(default)]
    pub reservations: Vec<Reservation>,
}

impl From<ApiSpot> for SpotRecord {
    fn from(spot: ApiSpot) -> Self {
        Self {
            id: spot.id,
            label: spot.label,
            category: spot.category,
            status: spot.status,
            occupied: spot.occupied,
            reservations: Vec::new(),
        }
    }
}

impl SpotRecord {
    /// The status to display at `now`: a base `Available` spot with a
    /// reservation ending in the future is shown as `Reserved`.
    ///
    /// This is a point-in-time display heuristic evaluated when the data is
    /// loaded, not a guarantee re-checked against a running clock.
    pub fn effective_status(&self, now: DateTime<Utc>) -> SpotStatus {
        if self.status == SpotStatus::Available
            && self.reservations.iter().any(|r| r.end_time > now)
        {
            return SpotStatus::Reserved;
        }
        self.status
    }
}
