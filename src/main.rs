//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `domain_recon` library that handles:
//! - Command-line argument parsing
//! - Environment variable loading (.env file)
//! - Logger initialization
//! - User-facing output formatting
//!
//! All core functionality is implemented in the library crate.

use std::process;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;

use domain_recon::config::{Cli, Command};
use domain_recon::initialization::init_logger_with;
use domain_recon::{run_recon, start_server, validate_domain, ReconContext};

#[tokio::main]
async fn main() -> Result<()> {
    // Try loading .env from the current directory first, then next to the executable
    if dotenvy::dotenv().is_err() {
        if let Ok(exe_path) = std::env::current_exe() {
            if let Some(exe_dir) = exe_path.parent() {
                let env_path = exe_dir.join(".env");
                if env_path.exists() {
                    let _ = dotenvy::from_path(&env_path);
                }
            }
        }
    }

    let cli = Cli::parse();

    init_logger_with(cli.log_level.clone().into(), cli.log_format.clone())
        .context("Failed to initialize logger")?;

    let ctx = Arc::new(
        ReconContext::new(cli.recon_config()).context("Failed to initialize network clients")?,
    );

    match cli.command {
        Command::Serve { bind } => start_server(bind, ctx).await,
        Command::Scan { domain } => {
            let domain = match validate_domain(&domain) {
                Ok(domain) => domain,
                Err(e) => {
                    eprintln!("domain_recon error: invalid domain: {e}");
                    process::exit(2);
                }
            };

            match run_recon(&domain, &ctx).await {
                Ok(result) => {
                    println!(
                        "{}",
                        serde_json::to_string_pretty(&result)
                            .context("Failed to serialize recon result")?
                    );
                    Ok(())
                }
                Err(e) => {
                    eprintln!("domain_recon error: {e}");
                    process::exit(1);
                }
            }
        }
    }
}
