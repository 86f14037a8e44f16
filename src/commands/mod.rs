//! Command handler layer.
//!
//! This module owns CLI-oriented orchestration and output wiring.
//!
//! ## Files
//! - `evacuation.rs` — routes/status/plan/villages/zones/blocks.
//! - `monitoring.rs` — lakes/lake/summary/alerts/simulate/infrastructure/map/validate.
//!
//! ## Principles
//! - Parse/match CLI inputs here.
//! - Delegate decision logic to `services/*`.
//! - Keep behavior and output schema stable.

pub mod evacuation;
pub mod monitoring;

pub use evacuation::handle_evacuation_commands;
pub use monitoring::handle_monitoring_commands;
