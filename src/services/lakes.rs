use crate::dataset::Dataset;
use crate::domain::constants::MAP_TOKEN_REQUIRED_MESSAGE;
use crate::domain::models::{
    AnalyticsSummary, LakeDetail, LakeView, MapMarker, MapReport, RiskBucket,
};
use crate::domain::records::{GlacialLake, RiskLevel};

/// Risk-gauge thresholds: 70 critical, 50 high, 30 moderate.
pub fn risk_level_for(breach_probability: u8) -> RiskLevel {
    match breach_probability {
        70..=u8::MAX => RiskLevel::Critical,
        50..=69 => RiskLevel::High,
        30..=49 => RiskLevel::Moderate,
        _ => RiskLevel::Low,
    }
}

pub fn lake_view(l: &GlacialLake) -> LakeView {
    LakeView {
        id: l.id.clone(),
        name: l.name.clone(),
        region: l.region.clone(),
        breach_probability: l.breach_probability,
        risk_level: l.risk_level,
        volume_mcm: l.volume_mcm,
        downstream_population: l.downstream_population,
        nearest_settlement: l.nearest_settlement.clone(),
    }
}

/// Lakes at `risk` (all when `None`), most likely to breach first.
pub fn lakes_by_risk(dataset: &Dataset, risk: Option<RiskLevel>) -> Vec<&GlacialLake> {
    let mut out: Vec<&GlacialLake> = dataset
        .lakes
        .iter()
        .filter(|l| risk.map(|r| r == l.risk_level).unwrap_or(true))
        .collect();
    out.sort_by(|a, b| {
        b.breach_probability
            .cmp(&a.breach_probability)
            .then(a.id.cmp(&b.id))
    });
    out
}

/// Percent change in surface area from the first to the last sample.
pub fn expansion_trend(lake: &GlacialLake) -> Option<f64> {
    let first = lake.expansion.first()?.area_km2;
    let last = lake.expansion.last()?.area_km2;
    if first <= 0.0 {
        return None;
    }
    Some(((last - first) / first * 1000.0).round() / 10.0)
}

pub fn lake_detail(dataset: &Dataset, id: &str) -> anyhow::Result<LakeDetail> {
    let lake = dataset.lake(id)?;
    let alerts: Vec<_> = dataset.alerts.iter().filter(|a| a.lake_id == lake.id).collect();
    Ok(LakeDetail {
        lake: lake_view(lake),
        surface_area_km2: lake.surface_area_km2,
        elevation_m: lake.elevation_m,
        coordinates: lake.coordinates,
        last_updated: lake.last_updated.format("%Y-%m-%d").to_string(),
        derived_risk_level: risk_level_for(lake.breach_probability),
        expansion_trend_pct: expansion_trend(lake),
        alert_count: alerts.len(),
        unread_alerts: alerts.iter().filter(|a| !a.is_read).count(),
    })
}

pub fn analytics_summary(dataset: &Dataset) -> AnalyticsSummary {
    let lakes = &dataset.lakes;
    let risk_distribution = [
        RiskLevel::Critical,
        RiskLevel::High,
        RiskLevel::Moderate,
        RiskLevel::Low,
    ]
    .into_iter()
    .map(|level| RiskBucket {
        level,
        count: lakes.iter().filter(|l| l.risk_level == level).count(),
    })
    .collect();

    let mean_breach_probability = if lakes.is_empty() {
        0.0
    } else {
        let total: u32 = lakes.iter().map(|l| u32::from(l.breach_probability)).sum();
        (f64::from(total) / lakes.len() as f64 * 10.0).round() / 10.0
    };

    AnalyticsSummary {
        lake_count: lakes.len(),
        risk_distribution,
        total_volume_mcm: (lakes.iter().map(|l| l.volume_mcm).sum::<f64>() * 10.0).round() / 10.0,
        mean_breach_probability,
        total_downstream_population: lakes.iter().map(|l| l.downstream_population).sum(),
        high_risk_lakes: lakes
            .iter()
            .filter(|l| l.risk_level >= RiskLevel::High)
            .count(),
    }
}

/// Lake markers when a map token is available, otherwise the placeholder
/// notice. The counts are shown either way.
pub fn map_report(dataset: &Dataset, token: Option<&str>) -> MapReport {
    let token_configured = token.map(|t| !t.trim().is_empty()).unwrap_or(false);
    let markers = if token_configured {
        dataset
            .lakes
            .iter()
            .map(|l| MapMarker {
                lake_id: l.id.clone(),
                name: l.name.clone(),
                lng: l.coordinates[0],
                lat: l.coordinates[1],
                risk_level: l.risk_level,
                breach_probability: l.breach_probability,
            })
            .collect()
    } else {
        vec![]
    };
    MapReport {
        token_configured,
        notice: (!token_configured).then(|| MAP_TOKEN_REQUIRED_MESSAGE.to_string()),
        markers,
        critical_count: dataset
            .lakes
            .iter()
            .filter(|l| l.risk_level == RiskLevel::Critical)
            .count(),
        high_count: dataset
            .lakes
            .iter()
            .filter(|l| l.risk_level == RiskLevel::High)
            .count(),
    }
}
