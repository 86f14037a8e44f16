use crate::domain::records::{
    Alert, EvacuationRoute, FloodScenario, FloodSimulation, GlacialLake, Infrastructure,
    InfrastructureKind, RoadBlock, SafeZone,
};
use crate::services::lakes::risk_level_for;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

const BUNDLED_DATASET: &str = include_str!("../data/hunza_valley.json");

/// Everything the tool knows about. Loaded once, never mutated.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Dataset {
    pub name: String,
    pub villages: Vec<String>,
    pub safe_zones: Vec<SafeZone>,
    #[serde(default)]
    pub road_blocks: Vec<RoadBlock>,
    pub routes: Vec<EvacuationRoute>,
    #[serde(default)]
    pub lakes: Vec<GlacialLake>,
    #[serde(default)]
    pub alerts: Vec<Alert>,
    #[serde(default)]
    pub infrastructure: Vec<Infrastructure>,
    pub simulation: FloodSimulation,
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum DatasetError {
    #[error("unknown village: {0}")]
    UnknownVillage(String),
    #[error("route not found: {0}")]
    RouteNotFound(String),
    #[error("lake not found: {0}")]
    LakeNotFound(String),
    #[error("duplicate {kind} id: {id}")]
    DuplicateId { kind: &'static str, id: String },
    #[error("{owner} references unknown {kind}: {target}")]
    DanglingReference {
        owner: String,
        kind: &'static str,
        target: String,
    },
    #[error("{field} out of range for {id}: {value}")]
    OutOfRange {
        id: String,
        field: &'static str,
        value: i64,
    },
    #[error("simulation step out of order: {0}")]
    ScenarioOrder(String),
    #[error("simulation has no scenario steps")]
    EmptySimulation,
    #[error("simulation step {step} out of range (0..{len})")]
    StepOutOfRange { step: usize, len: usize },
}

pub fn bundled() -> anyhow::Result<Dataset> {
    Ok(serde_json::from_str(BUNDLED_DATASET)?)
}

pub fn load_dataset(path: Option<&Path>) -> anyhow::Result<Dataset> {
    let Some(path) = path else {
        return bundled();
    };
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("reading dataset {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("parsing dataset {}", path.display()))
}

impl Dataset {
    /// Case-insensitive village lookup returning the canonical spelling.
    pub fn resolve_village(&self, name: &str) -> Result<&str, DatasetError> {
        self.villages
            .iter()
            .find(|v| v.eq_ignore_ascii_case(name.trim()))
            .map(String::as_str)
            .ok_or_else(|| DatasetError::UnknownVillage(name.to_string()))
    }

    pub fn route(&self, id: &str) -> Result<&EvacuationRoute, DatasetError> {
        self.routes
            .iter()
            .find(|r| r.id == id)
            .ok_or_else(|| DatasetError::RouteNotFound(id.to_string()))
    }

    pub fn lake(&self, id: &str) -> Result<&GlacialLake, DatasetError> {
        self.lakes
            .iter()
            .find(|l| l.id == id)
            .ok_or_else(|| DatasetError::LakeNotFound(id.to_string()))
    }

    pub fn safe_zone_named(&self, name: &str) -> Option<&SafeZone> {
        self.safe_zones.iter().find(|z| z.name == name)
    }

    pub fn blocks_on_route<'a>(&'a self, route_id: &str) -> Vec<&'a RoadBlock> {
        self.road_blocks
            .iter()
            .filter(|b| b.affected_routes.iter().any(|r| r == route_id))
            .collect()
    }

    pub fn village_population(&self, name: &str) -> Option<u32> {
        self.infrastructure
            .iter()
            .find(|i| i.kind == InfrastructureKind::Village && i.name == name)
            .and_then(|i| i.population)
    }

    pub fn scenario(&self, step: usize) -> Result<&FloodScenario, DatasetError> {
        let len = self.simulation.scenarios.len();
        self.simulation
            .scenarios
            .get(step)
            .ok_or(DatasetError::StepOutOfRange { step, len })
    }
}

fn ensure_unique<'a>(
    kind: &'static str,
    ids: impl Iterator<Item = &'a String>,
) -> Result<(), DatasetError> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(DatasetError::DuplicateId {
                kind,
                id: id.clone(),
            });
        }
    }
    Ok(())
}

/// Structural checks. Hard violations are errors; a lake whose stored risk
/// level disagrees with its breach probability only yields a warning.
pub fn validate(d: &Dataset) -> Result<Vec<String>, DatasetError> {
    ensure_unique("village", d.villages.iter())?;
    ensure_unique("route", d.routes.iter().map(|r| &r.id))?;
    ensure_unique("safe zone", d.safe_zones.iter().map(|z| &z.id))?;
    ensure_unique("road block", d.road_blocks.iter().map(|b| &b.id))?;
    ensure_unique("lake", d.lakes.iter().map(|l| &l.id))?;
    ensure_unique("alert", d.alerts.iter().map(|a| &a.id))?;
    ensure_unique("infrastructure", d.infrastructure.iter().map(|i| &i.id))?;

    let zone_names: HashSet<&str> = d.safe_zones.iter().map(|z| z.name.as_str()).collect();
    let villages: HashSet<&str> = d.villages.iter().map(String::as_str).collect();
    for r in &d.routes {
        if !(1..=10).contains(&r.safety_rating) {
            return Err(DatasetError::OutOfRange {
                id: r.id.clone(),
                field: "safety_rating",
                value: i64::from(r.safety_rating),
            });
        }
        if !villages.contains(r.from_village.as_str()) {
            return Err(DatasetError::DanglingReference {
                owner: r.id.clone(),
                kind: "village",
                target: r.from_village.clone(),
            });
        }
        if !zone_names.contains(r.to_safe_zone.as_str()) {
            return Err(DatasetError::DanglingReference {
                owner: r.id.clone(),
                kind: "safe zone",
                target: r.to_safe_zone.clone(),
            });
        }
    }

    let route_ids: HashSet<&str> = d.routes.iter().map(|r| r.id.as_str()).collect();
    for b in &d.road_blocks {
        if let Some(missing) = b
            .affected_routes
            .iter()
            .find(|r| !route_ids.contains(r.as_str()))
        {
            return Err(DatasetError::DanglingReference {
                owner: b.id.clone(),
                kind: "route",
                target: missing.clone(),
            });
        }
    }

    let lake_ids: HashSet<&str> = d.lakes.iter().map(|l| l.id.as_str()).collect();
    for a in &d.alerts {
        if !lake_ids.contains(a.lake_id.as_str()) {
            return Err(DatasetError::DanglingReference {
                owner: a.id.clone(),
                kind: "lake",
                target: a.lake_id.clone(),
            });
        }
    }

    let mut warnings = Vec::new();
    for l in &d.lakes {
        if l.breach_probability > 100 {
            return Err(DatasetError::OutOfRange {
                id: l.id.clone(),
                field: "breach_probability",
                value: i64::from(l.breach_probability),
            });
        }
        let derived = risk_level_for(l.breach_probability);
        if derived != l.risk_level {
            warnings.push(format!(
                "lake {} is marked {} but a {}% breach probability classifies as {}",
                l.id, l.risk_level, l.breach_probability, derived
            ));
        }
    }

    let scenarios = &d.simulation.scenarios;
    if scenarios.is_empty() {
        return Err(DatasetError::EmptySimulation);
    }
    for pair in scenarios.windows(2) {
        if pair[1].minutes < pair[0].minutes {
            return Err(DatasetError::ScenarioOrder(pair[1].label.clone()));
        }
    }
    if let Some(s) = scenarios.iter().find(|s| s.breach_progress > 100) {
        return Err(DatasetError::OutOfRange {
            id: s.label.clone(),
            field: "breach_progress",
            value: i64::from(s.breach_progress),
        });
    }

    Ok(warnings)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_dataset_is_valid() {
        let d = bundled().expect("bundled dataset parses");
        let warnings = validate(&d).expect("bundled dataset validates");
        assert!(warnings.is_empty(), "unexpected warnings: {:?}", warnings);
        assert_eq!(d.routes.len(), 10);
        assert_eq!(d.villages.len(), 4);
        assert_eq!(d.simulation.scenarios.len(), 6);
    }

    #[test]
    fn village_lookup_is_case_insensitive() {
        let d = bundled().unwrap();
        assert_eq!(d.resolve_village("aliabad").unwrap(), "Aliabad");
        assert_eq!(
            d.resolve_village("Atlantis"),
            Err(DatasetError::UnknownVillage("Atlantis".to_string()))
        );
    }

    #[test]
    fn duplicate_route_id_is_rejected() {
        let mut d = bundled().unwrap();
        let dup = d.routes[0].clone();
        d.routes.push(dup);
        assert_eq!(
            validate(&d),
            Err(DatasetError::DuplicateId {
                kind: "route",
                id: "hassanabad-primary".to_string()
            })
        );
    }

    #[test]
    fn road_block_must_reference_known_route() {
        let mut d = bundled().unwrap();
        d.road_blocks[0].affected_routes = vec!["nowhere-road".to_string()];
        assert!(matches!(
            validate(&d),
            Err(DatasetError::DanglingReference { kind: "route", .. })
        ));
    }

    #[test]
    fn route_must_lead_to_known_safe_zone() {
        let mut d = bundled().unwrap();
        d.routes[3].to_safe_zone = "Lost Valley".to_string();
        assert!(matches!(
            validate(&d),
            Err(DatasetError::DanglingReference { kind: "safe zone", .. })
        ));
    }

    #[test]
    fn safety_rating_outside_scale_is_rejected() {
        let mut d = bundled().unwrap();
        d.routes[1].safety_rating = 11;
        assert!(matches!(
            validate(&d),
            Err(DatasetError::OutOfRange {
                field: "safety_rating",
                ..
            })
        ));
    }

    #[test]
    fn mislabelled_lake_risk_is_only_a_warning() {
        let mut d = bundled().unwrap();
        d.lakes[0].risk_level = crate::domain::records::RiskLevel::Low;
        let warnings = validate(&d).unwrap();
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("shishper"));
    }

    #[test]
    fn scenarios_must_be_time_ordered() {
        let mut d = bundled().unwrap();
        d.simulation.scenarios.swap(1, 2);
        assert!(matches!(validate(&d), Err(DatasetError::ScenarioOrder(_))));
    }

    #[test]
    fn blocks_on_route_follow_affected_routes() {
        let d = bundled().unwrap();
        let blocks = d.blocks_on_route("aliabad-alternate-1");
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].id, "block-2");
        assert!(d.blocks_on_route("aliabad-primary").is_empty());
    }
}
