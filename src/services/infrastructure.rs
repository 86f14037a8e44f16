use crate::dataset::Dataset;
use crate::domain::models::InfrastructureView;
use crate::domain::records::InfrastructureKind;

/// Parses arrival labels like "45 min", "1h 40m", "4 hours" into minutes.
pub fn parse_duration_label(raw: &str) -> Option<u32> {
    let mut total = 0u32;
    let mut matched = false;
    let mut tokens = raw.split_whitespace().peekable();
    while let Some(tok) = tokens.next() {
        let split = tok.find(|c: char| !c.is_ascii_digit()).unwrap_or(tok.len());
        let (num, unit) = tok.split_at(split);
        let value: u32 = num.parse().ok()?;
        // "4 hours": unit is the next token
        let unit = if unit.is_empty() {
            tokens.next()?
        } else {
            unit
        };
        let factor = match unit.to_ascii_lowercase().as_str() {
            "h" | "hr" | "hrs" | "hour" | "hours" => 60,
            "m" | "min" | "mins" | "minute" | "minutes" => 1,
            _ => return None,
        };
        total = total.checked_add(value.checked_mul(factor)?)?;
        matched = true;
    }
    matched.then_some(total)
}

/// Assets at risk, soonest flood arrival first; unknown arrivals last.
pub fn infrastructure_at_risk(
    dataset: &Dataset,
    kind: Option<InfrastructureKind>,
) -> Vec<InfrastructureView> {
    let mut out: Vec<InfrastructureView> = dataset
        .infrastructure
        .iter()
        .filter(|i| kind.map(|k| k == i.kind).unwrap_or(true))
        .map(|i| InfrastructureView {
            id: i.id.clone(),
            kind: i.kind,
            name: i.name.clone(),
            criticality: i.criticality,
            population: i.population,
            flood_arrival: i.flood_arrival.clone(),
            arrival_minutes: i.flood_arrival.as_deref().and_then(parse_duration_label),
            max_flood_depth_m: i.max_flood_depth_m,
        })
        .collect();
    out.sort_by_key(|v| (v.arrival_minutes.unwrap_or(u32::MAX), v.id.clone()));
    out
}
