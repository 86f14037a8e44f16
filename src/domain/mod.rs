//! Shared data model layer (structs/constants only).
//!
//! ## Files
//! - `records.rs` — dataset records (routes, safe zones, lakes, alerts, ...) and their enums.
//! - `models.rs` — config file shape and report/output structs.
//! - `constants.rs` — thresholds, fixed user-facing messages, env var names.
//!
//! ## Rule of thumb
//! Domain types are data-only: no filesystem side effects, no decision logic.
//!
//! ## Compatibility note
//! Report structs are the `--json` output. Keep schema-impacting changes in sync
//! with `docs/contracts/*`.

pub mod constants;
pub mod models;
pub mod records;
