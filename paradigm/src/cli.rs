use clap::{Parser, ValueEnum};
use once_cell::sync::Lazy;
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Markup to format. Read from stdin if not given
    pub markup: Option<String>,
    #[arg(short, long, env = "PARADIGM_CONFIG")]
    /// JSON file with the formatting config
    pub config: Option<PathBuf>,
    #[arg(short, long)]
    /// Render for an offline-mode player with this name
    pub player: Option<String>,
    #[arg(long)]
    /// World the player is in, for {player_world}
    pub world: Option<String>,
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,
    #[arg(long)]
    /// Downsample colors and actions for pre-1.16 clients
    pub legacy_client: bool,
    #[arg(long, env)]
    /// Save logs to the filesystem
    pub save_logs: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Compact chat component JSON
    Json,
    /// Indented chat component JSON
    Pretty,
    /// `§` formatted string
    Legacy,
    /// Text without any formatting
    Plain,
}

pub static OPT: Lazy<Cli> = Lazy::new(Cli::parse);
