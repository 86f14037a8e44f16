//! Route recommendation and weather-aware route status.
//!
//! Both entry points are pure: they borrow the dataset and the weather
//! snapshot and never mutate either.

use crate::dataset::Dataset;
use crate::domain::constants::{
    CAUTION_WARNING, HEAVY_RAIN_WARNING, HIGH_FLOOD_PROBABILITY, NO_SAFE_ROUTE_MESSAGE,
    POOR_VISIBILITY_WARNING, ROUTE_BLOCKED_WARNING,
};
use crate::domain::models::{
    PlanReport, PlannedRoute, RecommendationReport, RecommendedRoute, RouteStatusReport,
    SafeZoneBrief, VillageSummary,
};
use crate::domain::records::{
    EffectiveStatus, EvacuationRoute, RouteStatus, Visibility, WeatherCondition, WeatherKind,
};
use std::cmp::Ordering;

/// Viable routes out of `village`, best first.
///
/// An empty result means there is no safe route; callers show
/// [`NO_SAFE_ROUTE_MESSAGE`] instead of treating it as an error.
pub fn recommend_routes<'a>(
    dataset: &'a Dataset,
    village: &str,
    weather: &WeatherCondition,
    flood_probability: u8,
) -> Vec<&'a EvacuationRoute> {
    let mut out: Vec<&EvacuationRoute> = dataset
        .routes
        .iter()
        .filter(|r| r.from_village == village)
        .filter(|r| is_viable(r, weather, flood_probability))
        .collect();
    out.sort_by(|a, b| route_priority(a, b));
    out
}

fn is_viable(route: &EvacuationRoute, weather: &WeatherCondition, flood_probability: u8) -> bool {
    if flood_probability > HIGH_FLOOD_PROBABILITY && route.status == RouteStatus::Blocked {
        return false;
    }
    if weather.condition == WeatherKind::HeavyRain && route.weather_dependent {
        return false;
    }
    true
}

/// Clear first, then higher safety rating, then primary < alternate < emergency.
fn route_priority(a: &EvacuationRoute, b: &EvacuationRoute) -> Ordering {
    let a_clear = a.status == RouteStatus::Clear;
    let b_clear = b.status == RouteStatus::Clear;
    b_clear
        .cmp(&a_clear)
        .then(b.safety_rating.cmp(&a.safety_rating))
        .then(a.route_type.cmp(&b.route_type))
}

/// Blank reasons count as missing.
fn reason_or(route: &EvacuationRoute, fallback: &str) -> String {
    route
        .blockage_reason
        .as_deref()
        .map(str::trim)
        .filter(|r| !r.is_empty())
        .unwrap_or(fallback)
        .to_string()
}

/// First matching rule wins; a blocked route is never downgraded to a
/// weather warning.
pub fn route_status_with_weather(
    route: &EvacuationRoute,
    weather: &WeatherCondition,
) -> RouteStatusReport {
    if route.status == RouteStatus::Blocked {
        return RouteStatusReport {
            status: EffectiveStatus::Blocked,
            warning: Some(reason_or(route, ROUTE_BLOCKED_WARNING)),
        };
    }
    if weather.condition == WeatherKind::HeavyRain && route.weather_dependent {
        return RouteStatusReport {
            status: EffectiveStatus::Warning,
            warning: Some(HEAVY_RAIN_WARNING.to_string()),
        };
    }
    if weather.visibility == Visibility::Poor && !route.vehicle_accessible {
        return RouteStatusReport {
            status: EffectiveStatus::Warning,
            warning: Some(POOR_VISIBILITY_WARNING.to_string()),
        };
    }
    if route.status == RouteStatus::Warning {
        return RouteStatusReport {
            status: EffectiveStatus::Warning,
            warning: Some(reason_or(route, CAUTION_WARNING)),
        };
    }
    RouteStatusReport {
        status: EffectiveStatus::Clear,
        warning: None,
    }
}

fn recommended_view(
    rank: usize,
    route: &EvacuationRoute,
    weather: &WeatherCondition,
) -> RecommendedRoute {
    let assessed = route_status_with_weather(route, weather);
    RecommendedRoute {
        rank,
        id: route.id.clone(),
        route_name: route.route_name.clone(),
        to_safe_zone: route.to_safe_zone.clone(),
        route_type: route.route_type,
        distance_km: route.distance_km,
        estimated_minutes: route.estimated_minutes,
        capacity: route.capacity,
        vehicle_accessible: route.vehicle_accessible,
        safety_rating: route.safety_rating,
        static_status: route.status,
        status: assessed.status,
        warning: assessed.warning,
    }
}

fn fallback_for<T>(routes: &[T]) -> Option<String> {
    routes
        .is_empty()
        .then(|| NO_SAFE_ROUTE_MESSAGE.to_string())
}

pub fn recommendation_report(
    dataset: &Dataset,
    village: &str,
    weather: &WeatherCondition,
    flood_probability: u8,
) -> RecommendationReport {
    let routes: Vec<RecommendedRoute> = recommend_routes(dataset, village, weather, flood_probability)
        .into_iter()
        .enumerate()
        .map(|(i, r)| recommended_view(i + 1, r, weather))
        .collect();
    if routes.is_empty() {
        tracing::warn!(village, flood_probability, "no viable evacuation route");
    }
    RecommendationReport {
        village: village.to_string(),
        flood_probability,
        weather: weather.clone(),
        fallback: fallback_for(&routes),
        routes,
    }
}

/// Recommendations for one village at one step of the flood simulation,
/// with destinations and reported blockages attached.
pub fn build_plan(
    dataset: &Dataset,
    village: &str,
    step: usize,
    weather: &WeatherCondition,
    flood_probability: u8,
) -> anyhow::Result<PlanReport> {
    let scenario = dataset.scenario(step)?;
    let village_affected = scenario.affected_settlements.iter().any(|s| s == village);

    let routes: Vec<PlannedRoute> = recommend_routes(dataset, village, weather, flood_probability)
        .into_iter()
        .enumerate()
        .map(|(i, r)| PlannedRoute {
            route: recommended_view(i + 1, r, weather),
            safe_zone: dataset.safe_zone_named(&r.to_safe_zone).map(|z| SafeZoneBrief {
                id: z.id.clone(),
                name: z.name.clone(),
                capacity: z.capacity,
                elevation_m: z.elevation_m,
                has_water: z.has_water,
                has_shelter: z.has_shelter,
                has_medical: z.has_medical,
            }),
            road_blocks: dataset
                .blocks_on_route(&r.id)
                .into_iter()
                .map(|b| b.id.clone())
                .collect(),
        })
        .collect();

    tracing::debug!(
        village,
        step,
        village_affected,
        routes = routes.len(),
        "built evacuation plan"
    );

    Ok(PlanReport {
        village: village.to_string(),
        step,
        scenario: scenario.label.clone(),
        minutes: scenario.minutes,
        village_affected,
        flood_probability,
        weather: weather.clone(),
        fallback: fallback_for(&routes),
        routes,
    })
}

pub fn village_summaries(dataset: &Dataset) -> Vec<VillageSummary> {
    dataset
        .villages
        .iter()
        .map(|v| {
            let routes: Vec<&EvacuationRoute> = dataset
                .routes
                .iter()
                .filter(|r| &r.from_village == v)
                .collect();
            VillageSummary {
                name: v.clone(),
                population: dataset.village_population(v),
                route_count: routes.len(),
                clear_routes: routes
                    .iter()
                    .filter(|r| r.status == RouteStatus::Clear)
                    .count(),
                blocked_routes: routes
                    .iter()
                    .filter(|r| r.status == RouteStatus::Blocked)
                    .count(),
            }
        })
        .collect()
}
