use crate::config::Config;
use crate::consts::cli_consts::backend::DEFAULT_BASE_URL;
use crate::scan::client::normalize_base_url;
use crate::scan::error::ScanError;
use std::fmt::{Display, Formatter};

/// Where the backend origin was taken from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendSource {
    /// `--backend-url` on the command line.
    Flag,
    /// The `THREAT_INTEL_BACKEND_URL` environment variable.
    EnvVar,
    /// `backendBaseUrl` in the config file.
    ConfigFile,
    /// Built-in local development origin.
    Default,
}

impl Display for BackendSource {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            BackendSource::Flag => write!(f, "flag"),
            BackendSource::EnvVar => write!(f, "env"),
            BackendSource::ConfigFile => write!(f, "config"),
            BackendSource::Default => write!(f, "default"),
        }
    }
}

/// Backend origin resolved at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Environment {
    pub backend_url: String,
    pub source: BackendSource,
}

impl Environment {
    /// Resolve the backend origin. The first non-blank value wins, in order:
    /// command-line flag, environment variable, config file, built-in default.
    ///
    /// # Errors
    /// Returns [`ScanError::InvalidUrl`] if the winning value is not an http(s) URL.
    pub fn resolve(
        flag: Option<&str>,
        env_value: Option<&str>,
        config: Option<&Config>,
    ) -> Result<Self, ScanError> {
        let non_blank = |v: Option<&str>| v.filter(|s| !s.trim().is_empty()).map(str::to_string);

        let (raw, source) = if let Some(url) = non_blank(flag) {
            (url, BackendSource::Flag)
        } else if let Some(url) = non_blank(env_value) {
            (url, BackendSource::EnvVar)
        } else if let Some(url) = non_blank(config.map(|c| c.backend_base_url.as_str())) {
            (url, BackendSource::ConfigFile)
        } else {
            (DEFAULT_BASE_URL.to_string(), BackendSource::Default)
        };

        Ok(Self {
            backend_url: normalize_base_url(&raw)?,
            source,
        })
    }
}

impl Display for Environment {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.backend_url, self.source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_wins_over_everything() {
        let config = Config::new("http://config.example".to_string());
        let env = Environment::resolve(
            Some("http://flag.example/"),
            Some("http://env.example"),
            Some(&config),
        )
        .unwrap();
        assert_eq!(env.backend_url, "http://flag.example");
        assert_eq!(env.source, BackendSource::Flag);
    }

    #[test]
    fn test_env_var_wins_over_config() {
        let config = Config::new("http://config.example".to_string());
        let env = Environment::resolve(None, Some("http://env.example"), Some(&config)).unwrap();
        assert_eq!(env.backend_url, "http://env.example");
        assert_eq!(env.source, BackendSource::EnvVar);
    }

    #[test]
    fn test_blank_values_are_skipped() {
        let config = Config::new("http://config.example".to_string());
        let env = Environment::resolve(Some("  "), Some(""), Some(&config)).unwrap();
        assert_eq!(env.backend_url, "http://config.example");
        assert_eq!(env.source, BackendSource::ConfigFile);
    }

    #[test]
    fn test_default_origin() {
        let env = Environment::resolve(None, None, None).unwrap();
        assert_eq!(env.backend_url, "http://localhost:8000");
        assert_eq!(env.source, BackendSource::Default);
        assert_eq!(env.to_string(), "http://localhost:8000 (default)");
    }

    #[test]
    fn test_invalid_origin_is_rejected() {
        let result = Environment::resolve(Some("localhost"), None, None);
        assert!(matches!(result, Err(ScanError::InvalidUrl { .. })));
    }
}
