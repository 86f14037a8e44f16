use chrono::{DateTime, NaiveDate, Utc};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// `[x, z, elevation]` in valley-local scene coordinates.
pub type ScenePoint = [f64; 3];

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RouteType {
    Primary,
    Alternate,
    Emergency,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Accessibility {
    Easy,
    Moderate,
    Difficult,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoadCondition {
    Good,
    Fair,
    Poor,
}

/// Status recorded on the route itself, before weather is considered.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RouteStatus {
    Clear,
    Blocked,
    Warning,
    Unknown,
}

/// Status after merging the route's own state with the weather snapshot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EffectiveStatus {
    Clear,
    Warning,
    Blocked,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum WeatherKind {
    #[default]
    Clear,
    Rain,
    HeavyRain,
    Snow,
    Storm,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    #[default]
    Good,
    Moderate,
    Poor,
}

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Moderate,
    High,
    Critical,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum AlertKind {
    Critical,
    Warning,
    Info,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BlockKind {
    Landslide,
    Flood,
    BridgeCollapse,
    Debris,
    Weather,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum InfrastructureKind {
    Village,
    Road,
    Bridge,
    Power,
    Hospital,
    School,
}

macro_rules! impl_label {
    ($ty:ident { $($variant:ident => $label:literal),+ $(,)? }) => {
        impl $ty {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($ty::$variant => $label),+
                }
            }
        }

        impl std::fmt::Display for $ty {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

impl_label!(RouteType { Primary => "primary", Alternate => "alternate", Emergency => "emergency" });
impl_label!(RouteStatus { Clear => "clear", Blocked => "blocked", Warning => "warning", Unknown => "unknown" });
impl_label!(EffectiveStatus { Clear => "clear", Warning => "warning", Blocked => "blocked" });
impl_label!(WeatherKind { Clear => "clear", Rain => "rain", HeavyRain => "heavy-rain", Snow => "snow", Storm => "storm" });
impl_label!(Visibility { Good => "good", Moderate => "moderate", Poor => "poor" });
impl_label!(RiskLevel { Low => "low", Moderate => "moderate", High => "high", Critical => "critical" });
impl_label!(AlertKind { Critical => "critical", Warning => "warning", Info => "info" });
impl_label!(Severity { Low => "low", Medium => "medium", High => "high" });
impl_label!(Accessibility { Easy => "easy", Moderate => "moderate", Difficult => "difficult" });
impl_label!(RoadCondition { Good => "good", Fair => "fair", Poor => "poor" });
impl_label!(BlockKind {
    Landslide => "landslide",
    Flood => "flood",
    BridgeCollapse => "bridge-collapse",
    Debris => "debris",
    Weather => "weather",
});
impl_label!(InfrastructureKind {
    Village => "village",
    Road => "road",
    Bridge => "bridge",
    Power => "power",
    Hospital => "hospital",
    School => "school",
});

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct EvacuationRoute {
    pub id: String,
    pub from_village: String,
    /// Safe zone name, not id.
    pub to_safe_zone: String,
    pub route_name: String,
    pub distance_km: f64,
    pub estimated_minutes: u32,
    pub elevation_m: u32,
    pub route_type: RouteType,
    pub accessibility: Accessibility,
    pub road_condition: RoadCondition,
    #[serde(default)]
    pub waypoints: Vec<ScenePoint>,
    pub capacity: u32,
    pub vehicle_accessible: bool,
    pub weather_dependent: bool,
    pub status: RouteStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blockage_reason: Option<String>,
    /// 1 (worst) to 10 (best).
    pub safety_rating: u8,
    pub last_verified: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct SafeZone {
    pub id: String,
    pub name: String,
    pub coordinates: ScenePoint,
    pub capacity: u32,
    #[serde(default)]
    pub facilities: Vec<String>,
    pub elevation_m: u32,
    pub has_water: bool,
    pub has_shelter: bool,
    pub has_medical: bool,
    pub accessibility: Accessibility,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct RoadBlock {
    pub id: String,
    pub location: ScenePoint,
    pub kind: BlockKind,
    pub severity: Severity,
    pub affected_routes: Vec<String>,
    pub reported_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_clear_time: Option<String>,
    pub alternative_available: bool,
}

/// A single "current weather" snapshot. Not time-varying within a run.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct WeatherCondition {
    pub condition: WeatherKind,
    pub visibility: Visibility,
    pub recommended_route_type: RouteType,
    pub restrictions: Vec<String>,
}

impl Default for WeatherCondition {
    fn default() -> Self {
        Self {
            condition: WeatherKind::Clear,
            visibility: Visibility::Good,
            recommended_route_type: RouteType::Primary,
            restrictions: vec![],
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ExpansionSample {
    pub month: String,
    pub area_km2: f64,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct GlacialLake {
    pub id: String,
    pub name: String,
    pub region: String,
    /// `[lng, lat]`
    pub coordinates: [f64; 2],
    pub surface_area_km2: f64,
    /// Million cubic metres.
    pub volume_mcm: f64,
    pub breach_probability: u8,
    pub risk_level: RiskLevel,
    pub elevation_m: u32,
    pub last_updated: NaiveDate,
    #[serde(default)]
    pub expansion: Vec<ExpansionSample>,
    pub downstream_population: u64,
    pub nearest_settlement: String,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Alert {
    pub id: String,
    pub lake_id: String,
    pub lake_name: String,
    pub kind: AlertKind,
    pub title: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub is_read: bool,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Infrastructure {
    pub id: String,
    pub kind: InfrastructureKind,
    pub name: String,
    pub coordinates: ScenePoint,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub population: Option<u32>,
    pub criticality: Severity,
    /// Human label such as "45 min" or "1h 40m".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flood_arrival: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_flood_depth_m: Option<f64>,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct BreachModel {
    pub width_m: f64,
    pub depth_m: f64,
    pub minutes_to_full_breach: u32,
    /// Cubic metres per second.
    pub peak_discharge: f64,
    pub formation: String,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct FlowSegment {
    pub start: ScenePoint,
    pub end: ScenePoint,
    pub velocity_ms: f64,
    pub discharge: f64,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct AffectedCounts {
    pub villages: u32,
    pub roads: u32,
    pub bridges: u32,
    pub hospitals: u32,
    pub schools: u32,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct FloodScenario {
    pub label: String,
    pub minutes: u32,
    pub affected_area_km2: f64,
    pub flood_depth_m: f64,
    #[serde(default)]
    pub affected_settlements: Vec<String>,
    pub affected_population: u64,
    #[serde(default)]
    pub affected_infrastructure: AffectedCounts,
    #[serde(default)]
    pub flow_path: Vec<FlowSegment>,
    /// 0 to 100.
    pub breach_progress: u8,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct FloodSimulation {
    pub lake_id: String,
    pub lake_name: String,
    pub breach_model: BreachModel,
    pub total_volume_mcm: f64,
    pub valley_slope: f64,
    pub scenarios: Vec<FloodScenario>,
}
