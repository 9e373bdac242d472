use std::fs::File;

use clap::Parser;
use log::{LevelFilter, info};
use simplelog::{Config as LogConfig, WriteLogger};

use quotevault::core::config::{load_config, resolve};
use quotevault::tui;

#[derive(Parser, Debug)]
#[command(name = "quotevault", version, about = "Terminal client for the shared quotes service")]
struct Args {
    /// Base URL of the quotes service (overrides config and env)
    #[arg(long)]
    api_url: Option<String>,

    /// Log level: off, error, warn, info, debug, trace
    #[arg(long, default_value = "info")]
    log_level: LevelFilter,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();
    let args = Args::parse();

    // The terminal is taken over by the TUI, so logs go to a file.
    if args.log_level != LevelFilter::Off {
        WriteLogger::init(
            args.log_level,
            LogConfig::default(),
            File::create("quotevault.log")?,
        )?;
    }

    let config = load_config()?;
    let resolved = resolve(&config, args.api_url.as_deref());
    info!("Starting QuoteVault against {}", resolved.api_base_url);

    tui::run(resolved).await?;
    Ok(())
}
