// GUI binary entry point for the AgroCylo wallet companion

use anyhow::Result;
use clap::Parser;

use agrocylo::config::Config;
use agrocylo::gui;

/// CLI arguments
#[derive(Parser)]
#[command(author, version, about)]
struct Args {
    /// Wallet agent bridge URL
    #[arg(long)]
    agent_url: Option<String>,

    /// Fixed Horizon endpoint (disables endpoint switching on network detection)
    #[arg(long)]
    horizon_url: Option<String>,

    /// Directory where session data is stored
    #[arg(long)]
    data_dir: Option<std::path::PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Reduced verbosity by default; RUST_LOG overrides
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn,agrocylo=info")),
        )
        .init();

    let mut config = Config::load().unwrap_or_else(|e| {
        eprintln!("⚠️  Failed to load config: {e:#}");
        eprintln!("    Using default configuration");
        Config::default()
    });
    if let Some(url) = args.agent_url {
        config.agent_url = url;
    }
    if let Some(url) = args.horizon_url {
        config.horizon_url = Some(url);
    }
    if let Some(dir) = args.data_dir {
        config.data_dir = dir;
    }
    config.validate()?;

    gui::run(config)?;
    Ok(())
}
