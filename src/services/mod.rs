//! Service layer containing decision logic and small side-effect helpers.
//!
//! ## Service map
//! - `evacuation.rs` — route recommendation, weather-aware route status, evacuation plans.
//! - `lakes.rs` — risk classification, lake listing/detail, analytics summary, map markers.
//! - `alerts.rs` — alert feed, relative timestamps, simulated SMS broadcast.
//! - `simulation.rs` — breach scenario playback cursor and frames.
//! - `infrastructure.rs` — assets at risk ordered by flood arrival.
//! - `config.rs` — TOML config + env overlay, weather/probability resolution.
//! - `output.rs` — JSON/text output helpers.
//!
//! ## Conventions
//! - Service functions borrow the `Dataset`; none of them mutate it.
//! - Keep command handlers thin; delegate to services.

pub mod alerts;
pub mod config;
pub mod evacuation;
pub mod infrastructure;
pub mod lakes;
pub mod output;
pub mod simulation;
