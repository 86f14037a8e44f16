use crate::domain::records::{AlertKind, InfrastructureKind, RiskLevel, Visibility, WeatherKind};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "glofwatch",
    version,
    about = "Glacial lake outburst flood monitoring and evacuation planning"
)]
pub struct Cli {
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    pub json: bool,
    #[arg(
        long,
        global = true,
        help = "Dataset JSON file to use instead of the bundled Hunza valley dataset"
    )]
    pub dataset: Option<PathBuf>,
    #[arg(
        long,
        global = true,
        help = "Config file (default: $GLOFWATCH_CONFIG or ~/.config/glofwatch/config.toml)"
    )]
    pub config: Option<PathBuf>,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Args, Debug, Clone, Default)]
pub struct WeatherArgs {
    #[arg(long, value_enum, help = "Override the configured weather condition")]
    pub weather: Option<WeatherKind>,
    #[arg(long, value_enum, help = "Override the configured visibility")]
    pub visibility: Option<Visibility>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Recommended evacuation routes for a village, best first
    Routes {
        village: Option<String>,
        #[command(flatten)]
        weather: WeatherArgs,
        #[arg(long, value_parser = clap::value_parser!(u8).range(0..=100))]
        flood_probability: Option<u8>,
    },
    /// Effective status of one route under the current weather
    Status {
        route: String,
        #[command(flatten)]
        weather: WeatherArgs,
    },
    /// Evacuation plan for a village at a flood simulation step
    Plan {
        village: Option<String>,
        #[arg(long, default_value_t = 0)]
        step: usize,
        #[command(flatten)]
        weather: WeatherArgs,
        #[arg(long, value_parser = clap::value_parser!(u8).range(0..=100))]
        flood_probability: Option<u8>,
    },
    /// Monitored villages and their route counts
    Villages,
    /// Safe zones
    Zones,
    /// Reported road blocks
    Blocks,
    /// Monitored glacial lakes
    Lakes {
        #[arg(long, value_enum)]
        risk: Option<RiskLevel>,
    },
    /// Details for one lake
    Lake { id: String },
    /// Risk analytics across all lakes
    Summary,
    Alerts {
        #[command(subcommand)]
        command: AlertCommands,
    },
    /// Step through the breach simulation
    Simulate {
        #[arg(long, default_value_t = 0)]
        step: usize,
        #[arg(long, default_value_t = 1)]
        frames: usize,
    },
    /// Infrastructure at risk, soonest flood arrival first
    Infrastructure {
        #[arg(long, value_enum)]
        kind: Option<InfrastructureKind>,
    },
    /// Lake markers for the map view
    Map,
    /// Check dataset integrity
    Validate,
}

#[derive(Subcommand, Debug)]
pub enum AlertCommands {
    /// Alert feed, newest first
    List {
        #[arg(long, value_enum)]
        kind: Option<AlertKind>,
        #[arg(long, default_value_t = false)]
        unread: bool,
    },
    /// Simulated SMS broadcast to a lake's downstream communities
    Broadcast { lake: String },
}
