use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::interval::TimeInterval;

/// The spot a reservation is attached to, as embedded on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpotRef {
    pub id: i64,
    pub label: String,
}

/// The owning user, present on admin-visible history records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRef {
    pub id: i64,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reservation {
    pub id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<UserRef>,
    pub parking_spot: SpotRef,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
}

/// Body of the reservation creation call. There is no batch endpoint; the
/// caller issues one of these per interval.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateReservationRequest {
    pub parking_spot_id: i64,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
}

/// Where a reservation sits relative to a reference instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeStatus {
    Upcoming,
    Active,
    Past,
}

impl Reservation {
    pub fn time_status(&self, now: DateTime<Utc>) -> TimeStatus {
        if self.start_time > now {
            TimeStatus::Upcoming
        } else if self.end_time > now {
            TimeStatus::Active
        } else {
            TimeStatus::Past
        }
    }

    /// Duration in fractional hours.
    pub fn duration_hours(&self) -> f64 {
        (self.end_time - self.start_time).num_seconds() as f64 / 3600.0
    }

    /// The reserved time range, e.g. for seeding a picker's busy intervals.
    pub fn interval(&self) -> TimeInterval {
        TimeInterval {
            start: self.start_time,
            end: self.end_time,
        }
    }
}
