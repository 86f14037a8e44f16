/// Above this flood probability (percent) routes with a static `blocked`
/// status are dropped from recommendations.
pub const HIGH_FLOOD_PROBABILITY: u8 = 70;

/// Breach probability of the monitored Shishper lake; used when neither the
/// command line nor the config supplies one.
pub const DEFAULT_FLOOD_PROBABILITY: u8 = 78;

pub const NO_SAFE_ROUTE_MESSAGE: &str =
    "No safe evacuation route available. Move to the nearest high ground immediately.";

pub const ROUTE_BLOCKED_WARNING: &str = "Route blocked";
pub const HEAVY_RAIN_WARNING: &str = "Not recommended in heavy rain";
pub const POOR_VISIBILITY_WARNING: &str = "Poor visibility affects this trail";
pub const CAUTION_WARNING: &str = "Caution advised";

/// Upper bound on `simulate --frames`.
pub const MAX_SIMULATION_FRAMES: usize = 1000;

pub const MAP_TOKEN_ENV: &str = "MAPBOX_PUBLIC_TOKEN";
pub const MAP_TOKEN_REQUIRED_MESSAGE: &str =
    "Map token required. Set MAPBOX_PUBLIC_TOKEN or [map].token in the config file to enable the interactive map.";

pub const FLOOD_PROBABILITY_ENV: &str = "GLOFWATCH_FLOOD_PROBABILITY";
pub const LOG_FILTER_ENV: &str = "GLOFWATCH_LOG";
pub const CONFIG_ENV: &str = "GLOFWATCH_CONFIG";
