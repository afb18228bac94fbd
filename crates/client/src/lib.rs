//! # Parkview Client
//!
//! The async boundary layer of the Parkview dashboard: configuration from the
//! environment, the REST client for the parking backend, the push-channel
//! subscription, and the dashboard session state that ties them together.
//!
//! The backend itself (REST API, storage, the WebSocket broker) is an
//! external collaborator; this crate only consumes it.

/// REST client for the parking backend
pub mod api;
/// Environment-based configuration
pub mod config;
/// Mock API client for tests
pub mod mock;
/// WebSocket push-channel subscription
pub mod push;
/// Dashboard session state
pub mod session;

use std::sync::Arc;

use chrono::Utc;
use eyre::Result;
use tracing::info;
use tracing_subscriber::FmtSubscriber;

use parkview_core::models::spot::SpotStatus;

use crate::api::HttpParkingApi;
use crate::config::ClientConfig;
use crate::push::PushChannel;
use crate::session::{DashboardSession, Role};

/// Run the headless dashboard: load the spot map, subscribe to the push
/// channel and apply occupancy updates as they arrive, until the channel
/// closes.
pub async fn run_dashboard(config: ClientConfig) -> Result<()> {
    // Initialize tracing for logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(config.log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let role = if config.admin { Role::Admin } else { Role::User };
    let api = Arc::new(HttpParkingApi::connect(&config).await?);
    let mut session = DashboardSession::new(api, role, config.picker_limits());

    session.refresh_spots().await?;
    session.refresh_occupancy().await?;
    log_occupancy(&session);

    let mut channel = PushChannel::connect(&config.ws_url).await?;
    while let Some(update) = channel.next_update().await? {
        session.apply_update(update);
        log_occupancy(&session);
    }
    info!("Push channel closed, dashboard stopping");
    Ok(())
}

fn log_occupancy(session: &DashboardSession) {
    let now = Utc::now();
    let occupied = session.spots().iter().filter(|s| s.occupied).count();
    let reserved = session
        .spots()
        .iter()
        .filter(|s| s.effective_status(now) == SpotStatus::Reserved)
        .count();
    info!(
        occupied,
        reserved,
        total = session.spots().len(),
        "Occupancy updated"
    );
}
