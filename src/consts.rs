pub mod cli_consts {
    //! Dashboard Configuration Constants
    //!
    //! This module contains the configuration constants for the dashboard,
    //! organized by functional area for clarity and maintainability.

    // =============================================================================
    // QUEUE CONFIGURATION
    // =============================================================================

    /// The maximum number of events to keep in the activity logs.
    pub const MAX_ACTIVITY_LOGS: usize = 100;

    /// Buffer size for events and scan outcomes sent back to the UI loop.
    pub const EVENT_QUEUE_SIZE: usize = 100;

    // =============================================================================
    // BACKEND CONFIGURATION
    // =============================================================================

    /// Backend contract: origin, routes and timeouts
    pub mod backend {
        use std::time::Duration;

        /// Origin used when neither flag, environment nor config file names one.
        pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

        /// Environment variable overriding the configured backend origin.
        pub const BASE_URL_ENV_VAR: &str = "THREAT_INTEL_BACKEND_URL";

        /// Domain scan route. Takes the domain as the `domain` query parameter.
        pub const SCAN_PATH: &str = "scan";

        /// Health route reporting database and upstream API key status.
        pub const STATUS_PATH: &str = "";

        /// Whole-request timeout (seconds)
        pub const REQUEST_TIMEOUT_SECS: u64 = 10;

        /// Connect timeout (seconds)
        pub const CONNECT_TIMEOUT_SECS: u64 = 10;

        pub const fn request_timeout() -> Duration {
            Duration::from_secs(REQUEST_TIMEOUT_SECS)
        }

        pub const fn connect_timeout() -> Duration {
            Duration::from_secs(CONNECT_TIMEOUT_SECS)
        }
    }

    // =============================================================================
    // DISPLAY TEXT
    // =============================================================================

    /// Text shown to the user by the dashboard
    pub mod display {
        /// WHOIS text shown when the backend has none for the domain.
        pub const WHOIS_UNAVAILABLE: &str = "No WHOIS data available";

        /// Marker the backend uses in place of missing WHOIS data.
        pub const BACKEND_WHOIS_MISSING: &str = "Not available";

        /// Prompt shown when a scan is submitted without a domain.
        pub const EMPTY_DOMAIN_PROMPT: &str = "Please enter a domain name";

        /// Message for connection failures, timeouts and unreadable bodies.
        pub const UNREACHABLE_MESSAGE: &str = "Unable to connect to backend";

        /// Message when an error response carries no usable text.
        pub const FALLBACK_ERROR_MESSAGE: &str = "Failed to fetch data";
    }

    // =============================================================================
    // UI CONFIGURATION
    // =============================================================================

    /// How long the splash screen stays up before the dashboard (milliseconds)
    pub const SPLASH_DURATION_MS: u64 = 1500;

    /// Poll interval for terminal key events (milliseconds)
    pub const UI_POLL_INTERVAL_MS: u64 = 100;

    /// Lines scrolled by PageUp / PageDown in the raw response panel
    pub const RAW_SCROLL_PAGE: u16 = 10;
}
