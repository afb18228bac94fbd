use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::{ParkError, ParkResult};

/// A half-open time range `[start, end)` with `start < end`.
///
/// All interval arithmetic in the dashboard is half-open so that adjacent
/// ranges (e.g. `09:00-10:00` and `10:00-11:00`) neither overlap nor leave a
/// gap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeInterval {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

/// An externally reported time range during which a spot cannot be reserved.
pub type BusyInterval = TimeInterval;

impl TimeInterval {
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> ParkResult<Self> {
        if end <= start {
            return Err(ParkError::Validation(
                "End time must be after start time".to_string(),
            ));
        }
        Ok(Self { start, end })
    }

    /// The one-hour slot beginning at `slot_start`, the smallest selectable
    /// unit on the picker grid.
    pub fn slot(slot_start: DateTime<Utc>) -> Self {
        Self {
            start: slot_start,
            end: slot_start + Duration::hours(1),
        }
    }

    /// Half-open overlap test: `self.start < other.end && self.end > other.start`.
    pub fn overlaps(&self, other: &TimeInterval) -> bool {
        self.start < other.end && self.end > other.start
    }

    /// Half-open membership: `t >= start && t < end`.
    pub fn contains(&self, t: DateTime<Utc>) -> bool {
        t >= self.start && t < self.end
    }

    /// Duration in fractional hours, not rounded.
    pub fn duration_hours(&self) -> f64 {
        (self.end - self.start).num_seconds() as f64 / 3600.0
    }
}
