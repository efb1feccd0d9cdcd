use anyhow::{Context, Result};
use chrono::{NaiveDateTime, NaiveTime};
use clap::Parser;
use std::path::{Path, PathBuf};
use tokio::time::Duration;
use tracing::info;

use deck_clocks::core::host::{HostConfig, PreviewHost};
use deck_clocks::locale::Locale;
use deck_clocks::plugin::{self, ClocksPlugin};
use deck_clocks::services::time_source::TimeSource;

#[derive(Parser, Debug)]
#[command(name = "deck-clocks", about = "Preview the deck clock actions")]
struct Args {
    /// Action to run: AnalogClock, DigitalClock or Date
    #[arg(short, long, default_value = "AnalogClock")]
    action: String,

    /// Number of ticks after the first draw (0 = until ctrl-c)
    #[arg(long, default_value_t = 0)]
    ticks: u64,

    /// Tick interval in milliseconds
    #[arg(long, default_value_t = 1000)]
    interval_ms: u64,

    /// PNG path for the analog clock face
    #[arg(short, long, default_value = "clock.png")]
    output: PathBuf,

    /// JSON file with the action's settings dictionary
    #[arg(long)]
    settings: Option<PathBuf>,

    /// JSON file overriding display strings
    #[arg(long)]
    locale: Option<PathBuf>,

    /// "local" or a fixed UTC offset such as +8:00
    #[arg(long, default_value = "local")]
    utc_offset: String,

    /// Draw a single frame at HH:MM[:SS] today and exit
    #[arg(long)]
    at: Option<String>,

    /// Log level
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn read_json(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

fn parse_at(time_source: &TimeSource, at: &str) -> Result<NaiveDateTime> {
    let time = NaiveTime::parse_from_str(at, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(at, "%H:%M"))
        .map_err(|_| deck_clocks::Error::InvalidTime(at.to_string()))?;
    Ok(time_source.now().date().and_time(time))
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| args.log_level.parse().unwrap_or_default()),
        )
        .init();

    info!(
        "deck-clocks v{} (plugin v{}, host >= {}, {})",
        env!("CARGO_PKG_VERSION"),
        plugin::PLUGIN_VERSION,
        plugin::APP_VERSION,
        plugin::REPOSITORY
    );

    let time_source: TimeSource = args.utc_offset.parse()?;

    let locale = match &args.locale {
        Some(path) => Locale::from_json(&read_json(path)?)
            .with_context(|| format!("Invalid locale file {}", path.display()))?,
        None => Locale::default(),
    };

    let settings = match &args.settings {
        Some(path) => Some(
            serde_json::from_str(&read_json(path)?)
                .with_context(|| format!("Invalid settings file {}", path.display()))?,
        ),
        None => None,
    };

    let plugin = ClocksPlugin::new(locale);
    let mut host = PreviewHost::new(
        &plugin,
        HostConfig {
            action_id: args.action.clone(),
            ticks: args.ticks,
            interval: Duration::from_millis(args.interval_ms.max(1)),
            output_path: Some(args.output.clone()),
            time_source,
            settings,
        },
    )?;

    match &args.at {
        Some(at) => host.ready(parse_at(&time_source, at)?)?,
        None => host.run().await?,
    }

    info!("deck-clocks shutdown");
    Ok(())
}
