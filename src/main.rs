use std::path::Path;

use clap::Parser;
use tokio::signal;
use tracing::{error, info};

use nodepulse::adapter::inbound::cli::{check, Cli, CliCommand};
use nodepulse::app::App;
use nodepulse::config::Config;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    match cli.command.unwrap_or_default() {
        CliCommand::Run => run(&cli.config).await,
        CliCommand::Check(target) => {
            if let Err(err) = check::execute(target, &cli.config).await {
                eprintln!("Check failed: {err}");
                std::process::exit(1);
            }
        }
    }
}

async fn run(config_path: &Path) {
    let config = match Config::load(config_path) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Failed to load config: {err}");
            std::process::exit(1);
        }
    };

    config.init_logging();
    info!("nodepulse starting");

    tokio::select! {
        result = App::run(config) => {
            if let Err(err) = result {
                error!(error = %err, "Fatal error");
                std::process::exit(1);
            }
        }
        _ = signal::ctrl_c() => {
            info!("Shutdown signal received");
        }
    }

    info!("nodepulse stopped");
}
