use crate::cli::{AlertCommands, Cli, Commands};
use crate::dataset::Dataset;
use crate::domain::models::{CheckItem, ConfigFile, LakeView, ValidationReport};
use crate::services::alerts::{alert_feed, broadcast_notice};
use crate::services::infrastructure::infrastructure_at_risk;
use crate::services::lakes::{analytics_summary, lake_detail, lake_view, lakes_by_risk, map_report};
use crate::services::output::{print_one, print_out};
use crate::services::simulation::frames;

pub fn handle_monitoring_commands(
    cli: &Cli,
    cfg: &ConfigFile,
    data: &Dataset,
    warnings: &[String],
) -> anyhow::Result<bool> {
    match &cli.command {
        Commands::Lakes { risk } => {
            let items: Vec<LakeView> = lakes_by_risk(data, *risk)
                .into_iter()
                .map(lake_view)
                .collect();
            print_out(cli.json, &items, |l| {
                format!(
                    "{}\t{}\t{}\t{}%\t{} mcm\tdownstream={}",
                    l.id, l.name, l.risk_level, l.breach_probability, l.volume_mcm, l.downstream_population
                )
            })?;
        }
        Commands::Lake { id } => {
            let detail = lake_detail(data, id)?;
            print_one(cli.json, detail, |d| {
                let mut lines = vec![
                    format!("id: {}", d.lake.id),
                    format!("name: {}", d.lake.name),
                    format!("region: {}", d.lake.region),
                    format!(
                        "breach probability: {}% ({})",
                        d.lake.breach_probability, d.lake.risk_level
                    ),
                    format!("surface area: {} km2", d.surface_area_km2),
                    format!("volume: {} mcm", d.lake.volume_mcm),
                    format!("elevation: {} m", d.elevation_m),
                    format!("downstream population: {}", d.lake.downstream_population),
                    format!("nearest settlement: {}", d.lake.nearest_settlement),
                    format!("last updated: {}", d.last_updated),
                ];
                if let Some(t) = d.expansion_trend_pct {
                    lines.push(format!("expansion trend: {:+}%", t));
                }
                lines.push(format!("alerts: {} ({} unread)", d.alert_count, d.unread_alerts));
                lines.join("\n")
            })?;
        }
        Commands::Summary => {
            let summary = analytics_summary(data);
            print_one(cli.json, summary, |s| {
                let buckets: Vec<String> = s
                    .risk_distribution
                    .iter()
                    .map(|b| format!("{}={}", b.level, b.count))
                    .collect();
                format!(
                    "lakes: {}\nrisk: {}\ntotal volume: {} mcm\nmean breach probability: {}%\ndownstream population: {}\nhigh-risk lakes: {}",
                    s.lake_count,
                    buckets.join(" "),
                    s.total_volume_mcm,
                    s.mean_breach_probability,
                    s.total_downstream_population,
                    s.high_risk_lakes
                )
            })?;
        }
        Commands::Alerts { command } => match command {
            AlertCommands::List { kind, unread } => {
                let feed = alert_feed(data, *kind, *unread, chrono::Utc::now());
                print_one(cli.json, feed, |f| {
                    let mut lines = vec![format!("{} unread", f.unread)];
                    lines.extend(f.alerts.iter().map(|a| {
                        format!(
                            "{}{}\t{}\t{}\t{}\t{}",
                            if a.is_read { " " } else { "*" },
                            a.id,
                            a.kind,
                            a.age,
                            a.lake_name,
                            a.title
                        )
                    }));
                    lines.join("\n")
                })?;
            }
            AlertCommands::Broadcast { lake } => {
                let notice = broadcast_notice(data, lake)?;
                print_one(cli.json, notice, |n| format!("{} (simulated)", n.message))?;
            }
        },
        Commands::Simulate { step, frames: count } => {
            let items = frames(data, *step, *count)?;
            print_out(cli.json, &items, |f| {
                format!(
                    "[{}/{}] {}\t+{} min\tbreach {}%\tdepth {} m\tarea {} km2\tpopulation {}\t{}",
                    f.index + 1,
                    f.total,
                    f.label,
                    f.minutes,
                    f.breach_progress,
                    f.flood_depth_m,
                    f.affected_area_km2,
                    f.affected_population,
                    f.affected_settlements.join(", ")
                )
            })?;
        }
        Commands::Infrastructure { kind } => {
            let items = infrastructure_at_risk(data, *kind);
            print_out(cli.json, &items, |i| {
                format!(
                    "{}\t{}\t{}\t{}\tarrival={}\tdepth={}",
                    i.id,
                    i.kind,
                    i.name,
                    i.criticality,
                    i.flood_arrival.as_deref().unwrap_or("n/a"),
                    i.max_flood_depth_m
                        .map(|d| format!("{} m", d))
                        .unwrap_or_else(|| "n/a".to_string())
                )
            })?;
        }
        Commands::Map => {
            let report = map_report(data, cfg.map.token.as_deref());
            print_one(cli.json, report, |m| {
                let mut lines = Vec::new();
                if let Some(notice) = &m.notice {
                    lines.push(notice.clone());
                }
                lines.extend(m.markers.iter().map(|mk| {
                    format!(
                        "{}\t{}\t{:.4},{:.4}\t{}\t{}%",
                        mk.lake_id, mk.name, mk.lat, mk.lng, mk.risk_level, mk.breach_probability
                    )
                }));
                lines.push(format!(
                    "critical: {}  high: {}",
                    m.critical_count, m.high_count
                ));
                lines.join("\n")
            })?;
        }
        Commands::Validate => {
            // hard failures already stopped us in main; only counts and warnings remain
            let report = ValidationReport {
                dataset: data.name.clone(),
                overall: if warnings.is_empty() {
                    "valid".to_string()
                } else {
                    "valid_with_warnings".to_string()
                },
                checks: vec![
                    check("villages", data.villages.len()),
                    check("safe_zones", data.safe_zones.len()),
                    check("routes", data.routes.len()),
                    check("road_blocks", data.road_blocks.len()),
                    check("lakes", data.lakes.len()),
                    check("alerts", data.alerts.len()),
                    check("infrastructure", data.infrastructure.len()),
                    check("scenarios", data.simulation.scenarios.len()),
                ],
                warnings: warnings.to_vec(),
            };
            print_one(cli.json, report, |r| {
                let mut lines = vec![format!("dataset {}: {}", r.dataset, r.overall)];
                lines.extend(r.checks.iter().map(|c| format!("{}\t{}", c.name, c.count)));
                lines.extend(r.warnings.iter().map(|w| format!("warning: {}", w)));
                lines.join("\n")
            })?;
        }
        _ => return Ok(false),
    }

    Ok(true)
}

fn check(name: &str, count: usize) -> CheckItem {
    CheckItem {
        name: name.to_string(),
        count,
    }
}
