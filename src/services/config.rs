use crate::cli::WeatherArgs;
use crate::domain::constants::{CONFIG_ENV, FLOOD_PROBABILITY_ENV, MAP_TOKEN_ENV};
use crate::domain::models::ConfigFile;
use crate::domain::records::WeatherCondition;
use anyhow::Context;
use std::path::{Path, PathBuf};

fn default_config_path() -> Option<PathBuf> {
    if let Ok(p) = std::env::var(CONFIG_ENV) {
        if !p.is_empty() {
            return Some(PathBuf::from(p));
        }
    }
    let home = std::env::var("HOME").ok()?;
    Some(PathBuf::from(home).join(".config/glofwatch/config.toml"))
}

/// Reads the TOML config (explicit path, `GLOFWATCH_CONFIG`, then
/// `~/.config/glofwatch/config.toml`) and overlays environment variables.
/// A missing default file is not an error; a missing explicit file is.
pub fn load_config(explicit: Option<&Path>) -> anyhow::Result<ConfigFile> {
    let mut cfg = match explicit {
        Some(p) => parse_file(p)?,
        None => match default_config_path() {
            Some(p) if p.exists() => parse_file(&p)?,
            _ => {
                tracing::debug!("no config file found; using defaults");
                ConfigFile::default()
            }
        },
    };
    overlay_env(&mut cfg, |k| std::env::var(k).ok());
    if cfg.general.flood_probability > 100 {
        anyhow::bail!(
            "general.flood_probability must be 0-100, got {}",
            cfg.general.flood_probability
        );
    }
    Ok(cfg)
}

fn parse_file(path: &Path) -> anyhow::Result<ConfigFile> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    let cfg = toml::from_str(&raw).with_context(|| format!("parsing config {}", path.display()))?;
    tracing::debug!(path = %path.display(), "loaded config");
    Ok(cfg)
}

fn overlay_env(cfg: &mut ConfigFile, lookup: impl Fn(&str) -> Option<String>) {
    if let Some(token) = lookup(MAP_TOKEN_ENV).filter(|t| !t.trim().is_empty()) {
        cfg.map.token = Some(token);
    }
    if let Some(raw) = lookup(FLOOD_PROBABILITY_ENV) {
        match raw.trim().parse::<u8>() {
            Ok(p) if p <= 100 => cfg.general.flood_probability = p,
            _ => tracing::warn!(value = %raw, "ignoring invalid {}", FLOOD_PROBABILITY_ENV),
        }
    }
}

/// The config's weather snapshot with any command-line overrides applied.
pub fn resolve_weather(cfg: &ConfigFile, args: &WeatherArgs) -> WeatherCondition {
    let mut weather = cfg.weather.clone();
    if let Some(c) = args.weather {
        weather.condition = c;
    }
    if let Some(v) = args.visibility {
        weather.visibility = v;
    }
    weather
}

pub fn resolve_flood_probability(cfg: &ConfigFile, arg: Option<u8>) -> u8 {
    arg.unwrap_or(cfg.general.flood_probability)
}
