//! Subvocab - Immersion vocabulary sets from YouTube subtitles
//!
//! Entry point: parses arguments, sets up logging and configuration, then
//! runs the subtitle-to-vocabulary workflow.

use anyhow::Result;
use clap::Parser;
use tracing::{info, warn, Level};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use tracing_appender::{non_blocking, rolling};

use subvocab::cli::{Args, Commands};
use subvocab::config::Config;
use subvocab::workflow::Workflow;

#[tokio::main]
async fn main() -> Result<()> {
    // Parse command line arguments
    let args = Args::parse();

    setup_logging(args.verbose)?;

    if let Err(e) = dotenvy::dotenv() {
        if !e.not_found() {
            warn!("Failed to load .env file: {}", e);
        }
    }

    let mut config = match &args.config {
        Some(config_path) => Config::from_file(config_path)?,
        None => {
            if std::path::Path::new("config.toml").exists() {
                info!("Found config.toml in current directory, loading...");
                Config::from_file("config.toml")?
            } else {
                Config::default()
            }
        }
    };

    match args.command {
        Commands::Run { input, max_videos, output_root } => {
            if let Some(max_videos) = max_videos {
                config.run.max_videos = Some(max_videos);
            }
            if let Some(output_root) = output_root {
                config.output.root = output_root;
            }

            let workflow = Workflow::new(&config)?;
            let summary = workflow.run(&input).await?;

            info!(
                "Processed {} of {} videos ({} skipped)",
                summary.videos_processed, summary.videos_listed, summary.videos_skipped
            );
        }
        Commands::InitConfig { output } => {
            config.save_to_file(&output)?;
            println!("Wrote configuration to {}", output.display());
        }
    }

    Ok(())
}

/// Setup logging to both console and file
fn setup_logging(verbose: bool) -> Result<()> {
    let log_dir = std::env::current_dir()?.join(".subvocab").join("log");
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = rolling::daily(&log_dir, "subvocab.log");
    let (non_blocking_file, guard) = non_blocking(file_appender);
    // Keep the writer alive for the whole process
    std::mem::forget(guard);

    let log_level = if verbose { Level::DEBUG } else { Level::INFO };

    let console_layer = fmt::layer()
        .with_target(false)
        .with_file(verbose)
        .with_line_number(verbose);

    let file_layer = fmt::layer()
        .with_writer(non_blocking_file)
        .with_target(false)
        .with_file(true)
        .with_line_number(true)
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env().add_directive(log_level.into()))
        .with(console_layer)
        .with(file_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    info!("Logging initialized - console: {}, file: {}",
          log_level, log_dir.join("subvocab.log").display());

    Ok(())
}
