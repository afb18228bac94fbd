//! # Parkview Core
//!
//! Domain types and logic for the Parkview parking dashboard. This crate is
//! pure: no network, no clock source of its own, no UI concerns.
//!
//! ## Layout
//!
//! - **Models**: wire-facing records for spots, reservations and push updates
//! - **Intervals**: half-open time ranges and the one-hour slot grid
//! - **Picker**: the week-grid interval selection state machine
//! - **Errors**: the shared error taxonomy for the dashboard

/// Shared error taxonomy
pub mod errors;
/// Half-open time intervals and slot helpers
pub mod interval;
/// Wire-facing data models
pub mod models;
/// Week-grid interval picker state machine
pub mod picker;
