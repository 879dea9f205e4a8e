//! BlockCAD CLI - Replay modeling command scripts headlessly

mod script;

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;

use bc_cad::ModelingSession;
use bc_core::ModelConfig;

#[derive(Parser)]
#[command(name = "blockcad")]
#[command(about = "Replay a modeling command script and export the mesh", long_about = None)]
#[command(version)]
struct Cli {
    /// Command script (RON list of commands)
    #[arg(short, long)]
    script: PathBuf,

    /// Model configuration file (RON)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Export destination, defaults to the configured file name
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "bc_cli=info,bc_cad=info,bc_core=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => ModelConfig::load(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => ModelConfig::default(),
    };
    let output = cli
        .output
        .unwrap_or_else(|| PathBuf::from(&config.export.file_name));

    let commands = script::load_script(&cli.script)?;
    tracing::info!(
        "Replaying {} commands from {}",
        commands.len(),
        cli.script.display()
    );

    let mut session = ModelingSession::new(config).context("Invalid model configuration")?;
    let report = script::run_script(&mut session, commands, &output)?;
    script::log_summary(&session, &report);

    Ok(())
}
