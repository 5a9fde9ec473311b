use clap::Parser;
use compliance_checker::{load_server_config, ComplianceHttpServer, MockComplianceChecker};
use log::info;
use std::sync::Arc;

/// Command line options for the compliance checker server.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Path to the JSON configuration file (default: $CHECKER_CONFIG or config/server_config.json)
    #[arg(long)]
    config: Option<String>,

    /// Override the port of the configured bind address
    #[arg(long)]
    port: Option<u16>,
}

/// Main entry point for the compliance checker HTTP server.
///
/// Loads the configuration, installs the logger and serves the API until
/// the process is stopped.
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = load_server_config(cli.config.as_deref(), cli.port)?;
    compliance_checker::logging::init(&config.logging)?;

    info!("Starting Media Compliance Checker API...");
    let server = ComplianceHttpServer::new(config, Arc::new(MockComplianceChecker::new()));
    info!("API will be available at: http://{}", server.bind_address());

    server.run().await?;

    Ok(())
}
