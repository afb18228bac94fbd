//! # Dashboard Session
//!
//! The explicit application-state object behind the dashboard: the spot list,
//! the current selection and filters, per-spot reservation history, and, while
//! a reservation dialog is open, a week-grid picker session. Every transition
//! happens on a caller event ("on event E, perform operation O"); nothing here
//! reacts to a render cycle or a ticking clock.

use std::sync::Arc;

use chrono::Utc;
use tracing::{error, info, warn};

use parkview_core::errors::{ParkError, ParkResult};
use parkview_core::models::push::PushUpdate;
use parkview_core::models::reservation::{CreateReservationRequest, Reservation};
use parkview_core::models::spot::{SpotCategory, SpotRecord};
use parkview_core::picker::{IntervalPicker, PickerLimits};

use crate::api::ParkingApi;

/// Role of the signed-in user; routes cancellation to the matching endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    User,
    Admin,
}

/// Aggregate outcome of a multi-interval submission.
///
/// Individual failures are logged, not surfaced; the caller uses the counts
/// for a general error state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmissionReport {
    pub attempted: usize,
    pub succeeded: usize,
    pub failed: usize,
}

impl SubmissionReport {
    pub fn all_succeeded(&self) -> bool {
        self.failed == 0
    }
}

struct PickerSession {
    spot_id: i64,
    picker: IntervalPicker,
}

/// Client-side state of one dashboard session.
pub struct DashboardSession {
    api: Arc<dyn ParkingApi + Send + Sync>,
    role: Role,
    limits: PickerLimits,
    spots: Vec<SpotRecord>,
    selected_label: Option<String>,
    reservation: Option<PickerSession>,
}

impl DashboardSession {
    pub fn new(api: Arc<dyn ParkingApi + Send + Sync>, role: Role, limits: PickerLimits) -> Self {
        Self {
            api,
            role,
            limits,
            spots: Vec::new(),
            selected_label: None,
            reservation: None,
        }
    }

    /// All spot records in listing order.
    pub fn spots(&self) -> &[SpotRecord] {
        &self.spots
    }

    /// Fetch the spot listing and map it into internal records. Previously
    /// attached reservation history is discarded until the next occupancy
    /// refresh.
    pub async fn refresh_spots(&mut self) -> ParkResult<()> {
        let spots = self.api.list_spots().await?;
        self.spots = spots.into_iter().map(SpotRecord::from).collect();
        info!("Loaded {} parking spots", self.spots.len());
        Ok(())
    }

    /// Attach reservation history to every listed spot with one multi-spot
    /// call, then snapshot each spot's displayed status as of now.
    pub async fn refresh_occupancy(&mut self) -> ParkResult<()> {
        if self.spots.is_empty() {
            return Ok(());
        }
        let ids: Vec<i64> = self.spots.iter().map(|spot| spot.id).collect();
        let mut by_spot = self.api.multi_spot_reservations(ids).await?;

        let now = Utc::now();
        for spot in &mut self.spots {
            spot.reservations = by_spot.remove(&spot.id).unwrap_or_default();
            // Display-only upgrade, evaluated once at load time.
            spot.status = spot.effective_status(now);
        }
        Ok(())
    }

    /// Mark a spot as the current selection.
    pub fn select_spot(&mut self, label: &str) -> ParkResult<()> {
        if !self.spots.iter().any(|spot| spot.label == label) {
            return Err(ParkError::NotFound(format!("Unknown spot {label}")));
        }
        self.selected_label = Some(label.to_string());
        Ok(())
    }

    pub fn selected_spot(&self) -> Option<&SpotRecord> {
        let label = self.selected_label.as_deref()?;
        self.spots.iter().find(|spot| spot.label == label)
    }

    /// Spots whose label contains `filter_text` (case-insensitive) and whose
    /// category is in `categories` (empty = all).
    pub fn filtered_spots(
        &self,
        filter_text: &str,
        categories: &[SpotCategory],
    ) -> Vec<&SpotRecord> {
        let needle = filter_text.to_lowercase();
        self.spots
            .iter()
            .filter(|spot| spot.label.to_lowercase().contains(&needle))
            .filter(|spot| categories.is_empty() || categories.contains(&spot.category))
            .collect()
    }

    /// Open a reservation-picking session for one spot. The spot's current
    /// reservation history seeds the picker's busy intervals, so its ranges
    /// cannot be re-selected.
    pub fn begin_reservation(&mut self, label: &str) -> ParkResult<&mut IntervalPicker> {
        let spot = self
            .spots
            .iter()
            .find(|spot| spot.label == label)
            .ok_or_else(|| ParkError::NotFound(format!("Unknown spot {label}")))?;
        let spot_id = spot.id;
        let busy = spot.reservations.iter().map(Reservation::interval).collect();

        let session = self.reservation.insert(PickerSession {
            spot_id,
            picker: IntervalPicker::new(Utc::now(), busy, self.limits),
        });
        Ok(&mut session.picker)
    }

    /// The open picker session, if any.
    pub fn picker_mut(&mut self) -> Option<&mut IntervalPicker> {
        self.reservation.as_mut().map(|session| &mut session.picker)
    }

    /// Discard the open picker session without submitting. In-flight network
    /// calls are not cancelled; only local state is dropped.
    pub fn abandon_reservation(&mut self) {
        self.reservation = None;
    }

    /// Submit the finalized selection: one create call per interval, strictly
    /// sequential, so interval *i* completes (success or failure) before *i+1*
    /// is attempted. A failure is logged and counted, never blocks the rest,
    /// and nothing is rolled back. Afterwards, regardless of outcomes, the
    /// selection is cleared and the spot's history is refreshed.
    pub async fn submit_reservation(&mut self) -> ParkResult<SubmissionReport> {
        let Some(mut session) = self.reservation.take() else {
            return Err(ParkError::Validation(
                "No reservation session in progress".to_string(),
            ));
        };

        let intervals = session.picker.selected().to_vec();
        let mut report = SubmissionReport {
            attempted: intervals.len(),
            succeeded: 0,
            failed: 0,
        };

        for interval in &intervals {
            let request = CreateReservationRequest {
                parking_spot_id: session.spot_id,
                start_time: interval.start,
                end_time: interval.end,
            };
            match self.api.create_reservation(request).await {
                Ok(created) => {
                    info!(
                        "Created reservation {} on spot {} ({} - {})",
                        created.id, session.spot_id, interval.start, interval.end
                    );
                    report.succeeded += 1;
                }
                Err(err) => {
                    error!(
                        "Failed to reserve spot {} for {} - {}: {err}",
                        session.spot_id, interval.start, interval.end
                    );
                    report.failed += 1;
                }
            }
        }

        session.picker.clear();
        if let Err(err) = self.refresh_history(session.spot_id).await {
            warn!("Could not refresh history for spot {}: {err}", session.spot_id);
        }
        Ok(report)
    }

    /// Re-fetch the reservation history of one spot from the server.
    pub async fn refresh_history(&mut self, spot_id: i64) -> ParkResult<()> {
        let history = self.api.spot_history(spot_id).await?;
        if let Some(spot) = self.spots.iter_mut().find(|spot| spot.id == spot_id) {
            spot.reservations = history;
        }
        Ok(())
    }

    /// Cancel a reservation through the endpoint matching the session role,
    /// then return the refreshed list of the user's reservations.
    pub async fn cancel_reservation(&mut self, id: i64) -> ParkResult<Vec<Reservation>> {
        match self.role {
            Role::Admin => self.api.force_cancel_reservation(id).await?,
            Role::User => self.api.cancel_reservation(id).await?,
        }
        info!("Cancelled reservation {id}");
        self.api.my_reservations().await
    }

    /// Apply one push-channel message in receipt order. A snapshot replaces
    /// the whole list; a single-spot update replaces the matching record by
    /// label or appends an unknown one. There is no staleness check: a stale
    /// update arriving late overwrites a newer one.
    pub fn apply_update(&mut self, update: PushUpdate) {
        match update {
            PushUpdate::Snapshot(spots) => {
                self.spots = spots.into_iter().map(SpotRecord::from).collect();
                info!("Applied full snapshot of {} spots", self.spots.len());
            }
            PushUpdate::Spot(spot) => {
                let record = SpotRecord::from(spot);
                match self
                    .spots
                    .iter_mut()
                    .find(|existing| existing.label == record.label)
                {
                    Some(existing) => *existing = record,
                    None => self.spots.push(record),
                }
            }
        }
    }
}
