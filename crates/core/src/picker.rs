//! # Week-Grid Interval Picker
//!
//! The selection state machine behind the reservation time picker. A picker
//! session displays one week of hourly slots; the user clicks a start slot and
//! then an end slot to commit a half-open interval. Committed intervals are
//! validated against externally supplied busy intervals and against the
//! configured capacity limits (interval count and total hours).
//!
//! The machine has two states: `Idle` (no interval in progress) and a pending
//! start slot waiting for its end click. Rejections are advisory: the session
//! stays usable and the caller shows the message inline.

use chrono::{DateTime, Datelike, Duration, NaiveTime, Utc};
use thiserror::Error;

use crate::interval::{BusyInterval, TimeInterval};

/// Capacity limits applied to one picking session.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PickerLimits {
    /// Maximum number of committed intervals.
    pub max_intervals: usize,
    /// Maximum total selected duration, in hours.
    pub max_hours: f64,
}

impl Default for PickerLimits {
    fn default() -> Self {
        Self {
            max_intervals: 3,
            max_hours: 8.0,
        }
    }
}

/// A rejected pick. These are user-correctable and never abort the session.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PickError {
    #[error("End time must be after start time.")]
    EndNotAfterStart,

    #[error("At most {max} intervals can be selected.")]
    TooManyIntervals { max: usize },

    #[error("Selection exceeds the reservation hour budget: {remaining:.1} hours remaining.")]
    ExceedsHourBudget { remaining: f64 },
}

/// Outcome of an accepted click.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Click {
    /// A start slot is now pending; the next valid click commits an interval.
    Started,
    /// An interval was committed and the picker is idle again.
    Committed(TimeInterval),
    /// The click hit a busy slot and was dropped without a state change.
    Ignored,
}

type ChangeListener = Box<dyn FnMut(&[TimeInterval]) + Send>;

/// One reservation-picking session over a displayed week.
pub struct IntervalPicker {
    week_start: DateTime<Utc>,
    start_hour: u32,
    end_hour: u32,
    limits: PickerLimits,
    busy: Vec<BusyInterval>,
    selected: Vec<TimeInterval>,
    pending_start: Option<DateTime<Utc>>,
    on_change: Option<ChangeListener>,
}

impl IntervalPicker {
    /// Open a picker session on the ISO week containing `anchor`, with the
    /// given busy intervals and capacity limits. The display window defaults
    /// to 8:00-20:00.
    pub fn new(anchor: DateTime<Utc>, busy: Vec<BusyInterval>, limits: PickerLimits) -> Self {
        Self {
            week_start: start_of_iso_week(anchor),
            start_hour: 8,
            end_hour: 20,
            limits,
            busy,
            selected: Vec::new(),
            pending_start: None,
            on_change: None,
        }
    }

    /// Override the earliest and latest displayed hour of the day.
    pub fn with_display_hours(mut self, start_hour: u32, end_hour: u32) -> Self {
        self.start_hour = start_hour;
        self.end_hour = end_hour;
        self
    }

    /// Register a listener invoked with the full selection (insertion order)
    /// after every mutation of the selection set.
    pub fn set_on_change(&mut self, listener: impl FnMut(&[TimeInterval]) + Send + 'static) {
        self.on_change = Some(Box::new(listener));
    }

    /// Monday 00:00 of the displayed week.
    pub fn week_start(&self) -> DateTime<Utc> {
        self.week_start
    }

    /// Navigate to the previous week. Any pending start slot is discarded.
    pub fn prev_week(&mut self) {
        self.week_start -= Duration::days(7);
        self.pending_start = None;
    }

    /// Navigate to the next week. Any pending start slot is discarded.
    pub fn next_week(&mut self) {
        self.week_start += Duration::days(7);
        self.pending_start = None;
    }

    /// The seven day columns of the displayed week (Monday..Sunday).
    pub fn days_in_week(&self) -> Vec<DateTime<Utc>> {
        (0..7).map(|i| self.week_start + Duration::days(i)).collect()
    }

    /// The hourly slot starts of one day column, within the display window.
    pub fn day_slots(&self, day: DateTime<Utc>) -> Vec<DateTime<Utc>> {
        (self.start_hour..=self.end_hour)
            .map(|hour| day + Duration::hours(i64::from(hour)))
            .collect()
    }

    /// Whether the one-hour slot starting at `slot_start` overlaps any busy
    /// interval.
    pub fn is_slot_busy(&self, slot_start: DateTime<Utc>) -> bool {
        let slot = TimeInterval::slot(slot_start);
        self.busy.iter().any(|busy| slot.overlaps(busy))
    }

    /// Whether `t` falls inside a committed interval (used for highlighting).
    pub fn is_in_selection(&self, t: DateTime<Utc>) -> bool {
        self.selected.iter().any(|interval| interval.contains(t))
    }

    /// The pending start slot, if an interval is in progress.
    pub fn pending_start(&self) -> Option<DateTime<Utc>> {
        self.pending_start
    }

    /// Committed intervals in insertion order.
    pub fn selected(&self) -> &[TimeInterval] {
        &self.selected
    }

    /// Total committed duration in fractional hours, recomputed from scratch
    /// on every call so removal and re-selection never drift.
    pub fn total_hours(&self) -> f64 {
        self.selected
            .iter()
            .map(TimeInterval::duration_hours)
            .sum()
    }

    /// Handle a click on the slot starting at `slot_start`.
    ///
    /// Busy slots are ignored without a state change. Capacity rejections and
    /// end-before-start keep the machine where it was so the user can pick
    /// again.
    pub fn click(&mut self, slot_start: DateTime<Utc>) -> Result<Click, PickError> {
        match self.pending_start {
            None => {
                if self.is_slot_busy(slot_start) {
                    return Ok(Click::Ignored);
                }
                if self.selected.len() >= self.limits.max_intervals {
                    return Err(PickError::TooManyIntervals {
                        max: self.limits.max_intervals,
                    });
                }
                self.pending_start = Some(slot_start);
                Ok(Click::Started)
            }
            Some(start) => {
                if slot_start <= start {
                    return Err(PickError::EndNotAfterStart);
                }
                if self.is_slot_busy(slot_start) {
                    return Ok(Click::Ignored);
                }
                let candidate = TimeInterval {
                    start,
                    end: slot_start,
                };
                // A range that crosses a busy interval in the middle is
                // dropped the same way a busy click is.
                if self.busy.iter().any(|busy| candidate.overlaps(busy)) {
                    return Ok(Click::Ignored);
                }
                let remaining = self.limits.max_hours - self.total_hours();
                if candidate.duration_hours() > remaining {
                    return Err(PickError::ExceedsHourBudget { remaining });
                }
                self.selected.push(candidate);
                self.pending_start = None;
                self.notify();
                Ok(Click::Committed(candidate))
            }
        }
    }

    /// Remove the committed interval at `index`, keeping the rest in their
    /// original relative order. Always permitted; returns the removed
    /// interval, or `None` when the index is out of range.
    pub fn remove(&mut self, index: usize) -> Option<TimeInterval> {
        if index >= self.selected.len() {
            return None;
        }
        let removed = self.selected.remove(index);
        self.notify();
        Some(removed)
    }

    /// Clear the whole selection and any pending start. Used after a
    /// submission completes or the session is abandoned.
    pub fn clear(&mut self) {
        self.selected.clear();
        self.pending_start = None;
        self.notify();
    }

    fn notify(&mut self) {
        if let Some(listener) = self.on_change.as_mut() {
            listener(&self.selected);
        }
    }
}

/// Monday 00:00 of the ISO week containing `t`.
fn start_of_iso_week(t: DateTime<Utc>) -> DateTime<Utc> {
    let days_from_monday = i64::from(t.weekday().num_days_from_monday());
    let monday = t.date_naive() - Duration::days(days_from_monday);
    monday.and_time(NaiveTime::MIN).and_utc()
}
