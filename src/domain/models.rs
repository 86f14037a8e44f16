use crate::domain::constants::DEFAULT_FLOOD_PROBABILITY;
use crate::domain::records::{
    AlertKind, EffectiveStatus, InfrastructureKind, RiskLevel, RouteStatus, RouteType, Severity,
    WeatherCondition,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Serialize)]
pub struct JsonOut<T: Serialize> {
    pub ok: bool,
    pub data: T,
}

#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub weather: WeatherCondition,
    #[serde(default)]
    pub map: MapConfig,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    pub flood_probability: u8,
    pub default_village: Option<String>,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            flood_probability: DEFAULT_FLOOD_PROBABILITY,
            default_village: None,
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct MapConfig {
    #[serde(default)]
    pub token: Option<String>,
}

/// Outcome of merging a route's static state with the current weather.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct RouteStatusReport {
    pub status: EffectiveStatus,
    pub warning: Option<String>,
}

#[derive(Serialize, Clone, Debug)]
pub struct RecommendedRoute {
    pub rank: usize,
    pub id: String,
    pub route_name: String,
    pub to_safe_zone: String,
    pub route_type: RouteType,
    pub distance_km: f64,
    pub estimated_minutes: u32,
    pub capacity: u32,
    pub vehicle_accessible: bool,
    pub safety_rating: u8,
    pub static_status: RouteStatus,
    pub status: EffectiveStatus,
    pub warning: Option<String>,
}

#[derive(Serialize)]
pub struct RecommendationReport {
    pub village: String,
    pub flood_probability: u8,
    pub weather: WeatherCondition,
    pub routes: Vec<RecommendedRoute>,
    /// Set only when no route survives filtering.
    pub fallback: Option<String>,
}

#[derive(Serialize, Clone)]
pub struct SafeZoneBrief {
    pub id: String,
    pub name: String,
    pub capacity: u32,
    pub elevation_m: u32,
    pub has_water: bool,
    pub has_shelter: bool,
    pub has_medical: bool,
}

#[derive(Serialize)]
pub struct PlannedRoute {
    #[serde(flatten)]
    pub route: RecommendedRoute,
    pub safe_zone: Option<SafeZoneBrief>,
    pub road_blocks: Vec<String>,
}

#[derive(Serialize)]
pub struct PlanReport {
    pub village: String,
    pub step: usize,
    pub scenario: String,
    pub minutes: u32,
    pub village_affected: bool,
    pub flood_probability: u8,
    pub weather: WeatherCondition,
    pub routes: Vec<PlannedRoute>,
    pub fallback: Option<String>,
}

#[derive(Serialize)]
pub struct VillageSummary {
    pub name: String,
    pub population: Option<u32>,
    pub route_count: usize,
    pub clear_routes: usize,
    pub blocked_routes: usize,
}

#[derive(Serialize)]
pub struct RiskBucket {
    pub level: RiskLevel,
    pub count: usize,
}

#[derive(Serialize)]
pub struct AnalyticsSummary {
    pub lake_count: usize,
    pub risk_distribution: Vec<RiskBucket>,
    pub total_volume_mcm: f64,
    pub mean_breach_probability: f64,
    pub total_downstream_population: u64,
    pub high_risk_lakes: usize,
}

#[derive(Serialize)]
pub struct LakeView {
    pub id: String,
    pub name: String,
    pub region: String,
    pub breach_probability: u8,
    pub risk_level: RiskLevel,
    pub volume_mcm: f64,
    pub downstream_population: u64,
    pub nearest_settlement: String,
}

#[derive(Serialize)]
pub struct LakeDetail {
    #[serde(flatten)]
    pub lake: LakeView,
    pub surface_area_km2: f64,
    pub elevation_m: u32,
    pub coordinates: [f64; 2],
    pub last_updated: String,
    pub derived_risk_level: RiskLevel,
    pub expansion_trend_pct: Option<f64>,
    pub alert_count: usize,
    pub unread_alerts: usize,
}

#[derive(Serialize)]
pub struct AlertView {
    pub id: String,
    pub lake_id: String,
    pub lake_name: String,
    pub kind: AlertKind,
    pub title: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub age: String,
    pub is_read: bool,
}

#[derive(Serialize)]
pub struct AlertFeed {
    pub unread: usize,
    pub alerts: Vec<AlertView>,
}

#[derive(Serialize)]
pub struct BroadcastNotice {
    pub lake_id: String,
    pub lake_name: String,
    pub recipients: u64,
    pub message: String,
    pub simulated: bool,
}

#[derive(Serialize)]
pub struct SimulationFrame {
    pub index: usize,
    pub total: usize,
    pub label: String,
    pub minutes: u32,
    pub progress: f64,
    pub breach_progress: u8,
    pub affected_area_km2: f64,
    pub flood_depth_m: f64,
    pub affected_settlements: Vec<String>,
    pub affected_population: u64,
}

#[derive(Serialize)]
pub struct InfrastructureView {
    pub id: String,
    pub kind: InfrastructureKind,
    pub name: String,
    pub criticality: Severity,
    pub population: Option<u32>,
    pub flood_arrival: Option<String>,
    pub arrival_minutes: Option<u32>,
    pub max_flood_depth_m: Option<f64>,
}

#[derive(Serialize)]
pub struct MapMarker {
    pub lake_id: String,
    pub name: String,
    pub lng: f64,
    pub lat: f64,
    pub risk_level: RiskLevel,
    pub breach_probability: u8,
}

#[derive(Serialize)]
pub struct MapReport {
    pub token_configured: bool,
    pub notice: Option<String>,
    pub markers: Vec<MapMarker>,
    pub critical_count: usize,
    pub high_count: usize,
}

#[derive(Serialize)]
pub struct CheckItem {
    pub name: String,
    pub count: usize,
}

#[derive(Serialize)]
pub struct ValidationReport {
    pub dataset: String,
    pub overall: String,
    pub checks: Vec<CheckItem>,
    pub warnings: Vec<String>,
}
