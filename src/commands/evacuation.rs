use crate::cli::{Cli, Commands};
use crate::dataset::Dataset;
use crate::domain::models::{ConfigFile, RecommendedRoute};
use crate::services::config::{resolve_flood_probability, resolve_weather};
use crate::services::evacuation::{
    build_plan, recommendation_report, route_status_with_weather, village_summaries,
};
use crate::services::output::{print_one, print_out, yes_no};

/// Picks the village argument, then `[general].default_village`, then the
/// first village in the dataset.
fn select_village<'a>(
    data: &'a Dataset,
    cfg: &ConfigFile,
    arg: Option<&str>,
) -> anyhow::Result<&'a str> {
    let requested = arg.or(cfg.general.default_village.as_deref());
    match requested {
        Some(name) => Ok(data.resolve_village(name)?),
        None => data
            .villages
            .first()
            .map(String::as_str)
            .ok_or_else(|| anyhow::anyhow!("dataset {} has no villages", data.name)),
    }
}

fn route_row(r: &RecommendedRoute) -> String {
    let mut row = format!(
        "{}\t{}\t{}\t-> {}\t{}\t{}/10\t{}",
        r.rank,
        r.id,
        r.route_name,
        r.to_safe_zone,
        r.route_type,
        r.safety_rating,
        r.status
    );
    if let Some(w) = &r.warning {
        row.push_str(&format!("\t({})", w));
    }
    row
}

pub fn handle_evacuation_commands(
    cli: &Cli,
    cfg: &ConfigFile,
    data: &Dataset,
) -> anyhow::Result<bool> {
    match &cli.command {
        Commands::Routes {
            village,
            weather,
            flood_probability,
        } => {
            let village = select_village(data, cfg, village.as_deref())?;
            let weather = resolve_weather(cfg, weather);
            let p = resolve_flood_probability(cfg, *flood_probability);
            let report = recommendation_report(data, village, &weather, p);
            print_one(cli.json, report, |r| {
                let mut lines = vec![format!(
                    "routes from {} (flood probability {}%, weather {}, visibility {})",
                    r.village, r.flood_probability, r.weather.condition, r.weather.visibility
                )];
                lines.extend(r.routes.iter().map(route_row));
                if let Some(msg) = &r.fallback {
                    lines.push(msg.clone());
                }
                lines.join("\n")
            })?;
        }
        Commands::Status { route, weather } => {
            let route = data.route(route)?;
            let weather = resolve_weather(cfg, weather);
            let report = route_status_with_weather(route, &weather);
            print_one(cli.json, report, |s| match &s.warning {
                Some(w) => format!("{}\t{}\t{}", route.id, s.status, w),
                None => format!("{}\t{}", route.id, s.status),
            })?;
        }
        Commands::Plan {
            village,
            step,
            weather,
            flood_probability,
        } => {
            let village = select_village(data, cfg, village.as_deref())?;
            let weather = resolve_weather(cfg, weather);
            let p = resolve_flood_probability(cfg, *flood_probability);
            let plan = build_plan(data, village, *step, &weather, p)?;
            print_one(cli.json, plan, |plan| {
                let mut lines = vec![format!(
                    "plan for {} at {} (+{} min){}",
                    plan.village,
                    plan.scenario,
                    plan.minutes,
                    if plan.village_affected {
                        ", village in flood zone"
                    } else {
                        ""
                    }
                )];
                for pr in &plan.routes {
                    lines.push(route_row(&pr.route));
                    if let Some(z) = &pr.safe_zone {
                        lines.push(format!(
                            "\tsafe zone {} ({} m, capacity {}, water {}, shelter {}, medical {})",
                            z.name,
                            z.elevation_m,
                            z.capacity,
                            yes_no(z.has_water),
                            yes_no(z.has_shelter),
                            yes_no(z.has_medical)
                        ));
                    }
                    if !pr.road_blocks.is_empty() {
                        lines.push(format!("\troad blocks: {}", pr.road_blocks.join(", ")));
                    }
                }
                if let Some(msg) = &plan.fallback {
                    lines.push(msg.clone());
                }
                lines.join("\n")
            })?;
        }
        Commands::Villages => {
            let items = village_summaries(data);
            print_out(cli.json, &items, |v| {
                format!(
                    "{}\t{}\troutes={}\tclear={}\tblocked={}",
                    v.name,
                    v.population
                        .map(|p| p.to_string())
                        .unwrap_or_else(|| "n/a".to_string()),
                    v.route_count,
                    v.clear_routes,
                    v.blocked_routes
                )
            })?;
        }
        Commands::Zones => {
            print_out(cli.json, &data.safe_zones, |z| {
                format!(
                    "{}\t{}\t{} m\tcapacity={}\twater={}\tshelter={}\tmedical={}",
                    z.id,
                    z.name,
                    z.elevation_m,
                    z.capacity,
                    yes_no(z.has_water),
                    yes_no(z.has_shelter),
                    yes_no(z.has_medical)
                )
            })?;
        }
        Commands::Blocks => {
            print_out(cli.json, &data.road_blocks, |b| {
                format!(
                    "{}\t{}\t{}\t{}\tclears={}",
                    b.id,
                    b.kind,
                    b.severity,
                    b.affected_routes.join(","),
                    b.estimated_clear_time.as_deref().unwrap_or("unknown")
                )
            })?;
        }
        _ => return Ok(false),
    }

    Ok(true)
}
