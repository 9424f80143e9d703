mod cli_messages;
mod config;
mod consts;
mod environment;
mod error_classifier;
mod events;
mod logging;
mod report;
mod scan;
mod session;
mod ui;
mod workers;

use crate::config::{Config, get_config_path};
use crate::scan::client::normalize_base_url;
use crate::session::{
    SessionData, resolve_environment, run_headless_scan, run_status, run_tui_mode, setup_session,
};
use clap::{Parser, Subcommand};
use std::error::Error;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
/// Domain threat-intelligence dashboard
struct Args {
    /// Backend origin, e.g. http://localhost:8000. Overrides THREAT_INTEL_BACKEND_URL and the config file.
    #[arg(long, global = true, value_name = "URL")]
    backend_url: Option<String>,

    /// Command to execute. Opens the dashboard when omitted.
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Open the interactive scan dashboard
    Dashboard {
        /// Enable background colors
        #[arg(long = "with-background", action = clap::ArgAction::SetTrue)]
        with_background: bool,
    },
    /// Scan one domain and print the result
    Scan {
        /// Domain to look up, sent to the backend as typed
        #[arg(value_name = "DOMAIN")]
        domain: String,

        /// Print the raw backend response as JSON
        #[arg(long, action = clap::ArgAction::SetTrue)]
        json: bool,
    },
    /// Check that the backend is reachable
    Status,
    /// Save the backend origin to the config file
    SetBackend {
        #[arg(value_name = "URL")]
        url: String,
    },
    /// Delete the config file
    ResetConfig,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    let command = args.command.unwrap_or(Command::Dashboard {
        with_background: false,
    });

    match command {
        Command::Dashboard { with_background } => {
            let session = start_session(args.backend_url.as_deref())?;
            run_tui_mode(session, with_background).await
        }
        Command::Scan { domain, json } => {
            logging::init_headless_logger();
            let session = start_session(args.backend_url.as_deref())?;
            if run_headless_scan(session, &domain, json).await.is_err() {
                std::process::exit(1);
            }
            Ok(())
        }
        Command::Status => {
            logging::init_headless_logger();
            let session = start_session(args.backend_url.as_deref())?;
            if run_status(session).await.is_err() {
                std::process::exit(1);
            }
            Ok(())
        }
        Command::SetBackend { url } => {
            let url = match normalize_base_url(&url) {
                Ok(url) => url,
                Err(e) => {
                    print_cmd_error!("Invalid backend URL", e.to_string().as_str());
                    std::process::exit(1);
                }
            };
            let config_path = get_config_path()?;
            Config::new(url.clone())
                .save(&config_path)
                .map_err(|e| format!("Failed to save config: {}", e))?;
            print_cmd_success!("Backend saved", "{} -> {}", url, config_path.display());
            Ok(())
        }
        Command::ResetConfig => {
            let config_path = get_config_path()?;
            println!("Clearing configuration file {}...", config_path.display());
            Config::clear(&config_path).map_err(Into::into)
        }
    }
}

/// Resolve the backend origin and build the client, exiting on a bad origin.
fn start_session(flag: Option<&str>) -> Result<SessionData, Box<dyn Error>> {
    let environment = match resolve_environment(flag) {
        Ok(environment) => environment,
        Err(e) => {
            print_cmd_error!("Invalid backend configuration", e.to_string().as_str());
            std::process::exit(1);
        }
    };
    setup_session(environment)
}
