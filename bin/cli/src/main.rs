mod errors;
mod logging;
mod replay;
mod script;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::info;
use tracker::{TrackerConfig, button_label_wire, estimate_progress_wire};
use types::{SigningProgress, TrackerContext};

use crate::{errors::CliError, logging::init_logging, replay::replay, script::CeremonyScript};

#[derive(Parser)]
#[command(name = "tss-tracker")]
#[command(about = "Replay and inspect TSS signing ceremony progress.")]
#[command(version = "0.1.0")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Replay a ceremony script and print the tracker state after every step
    Replay {
        script: PathBuf,
        #[arg(short, long)]
        config: Option<PathBuf>,
        #[arg(short, long)]
        json: bool,
        #[arg(short, long)]
        log_file: Option<PathBuf>,
    },
    /// Show label and progress for a single status value
    Inspect {
        status: String,
        #[arg(short = 'r', long, default_value_t = 0)]
        current_round: u32,
        #[arg(short = 't', long, default_value_t = 0)]
        total_rounds: u32,
        #[arg(long)]
        swap: bool,
    },
    /// Write the default config file
    InitConfig {
        #[arg(short, long)]
        path: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Replay {
            script,
            config,
            json,
            log_file,
        } => {
            let config_path = TrackerConfig::resolve_path(config)?;
            let config = TrackerConfig::load_or_default(&config_path)?;
            let log_dir = log_file.or_else(|| config.log_file_path.clone());
            init_logging(log_dir.as_deref())?;

            let script = CeremonyScript::load(&script)?;
            let views = replay(script, &config).await?;

            for view in &views {
                if json {
                    let line = serde_json::to_string(view)
                        .map_err(|e| CliError::Tracker(e.into()))?;
                    println!("{line}");
                } else {
                    println!("{}", replay::render_text(view));
                }
            }
        }
        Commands::Inspect {
            status,
            current_round,
            total_rounds,
            swap,
        } => {
            let context = swap.then_some(TrackerContext::SwapCrypto);
            let progress = SigningProgress::new(current_round, total_rounds);
            println!(
                "{}: {}%",
                button_label_wire(&status, context),
                estimate_progress_wire(&status, &progress)
            );
        }
        Commands::InitConfig { path } => {
            init_logging(None)?;
            let path = TrackerConfig::resolve_path(path)?;
            TrackerConfig::default().save(&path)?;
            info!("Wrote default config to {}", path.display());
        }
    }

    Ok(())
}
