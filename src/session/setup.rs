//! Session setup and initialization

use crate::config::{Config, get_config_path};
use crate::consts::cli_consts::backend::BASE_URL_ENV_VAR;
use crate::environment::Environment;
use crate::scan::BackendClient;
use std::error::Error;
use std::sync::Arc;

/// Session data for both TUI and headless modes
#[derive(Debug)]
pub struct SessionData {
    /// Client bound to the resolved backend origin
    pub backend: Arc<BackendClient>,
    /// Where the origin came from, for display
    pub environment: Environment,
}

/// Resolve the backend origin from the flag, `THREAT_INTEL_BACKEND_URL`
/// and `~/.threat-intel/config.json`, in that order.
///
/// # Errors
/// Fails if the config file exists but is unreadable, or the chosen origin is invalid.
pub fn resolve_environment(flag: Option<&str>) -> Result<Environment, Box<dyn Error>> {
    let env_value = std::env::var(BASE_URL_ENV_VAR).ok();
    let config = match get_config_path() {
        Ok(path) => Config::load_if_exists(&path)
            .map_err(|e| format!("Failed to load config {}: {}", path.display(), e))?,
        Err(e) => {
            log::debug!("No config file: {}", e);
            None
        }
    };

    let environment = Environment::resolve(flag, env_value.as_deref(), config.as_ref())?;
    log::debug!("Backend resolved to {}", environment);
    Ok(environment)
}

/// Sets up a session against the resolved backend
///
/// # Returns
/// * `Ok(SessionData)` - Successfully set up session
/// * `Err` - The HTTP client could not be built
pub fn setup_session(environment: Environment) -> Result<SessionData, Box<dyn Error>> {
    let backend = BackendClient::new(&environment.backend_url)?;
    Ok(SessionData {
        backend: Arc::new(backend),
        environment,
    })
}
