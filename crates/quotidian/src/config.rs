//! Configuration constants for quotidian

/// Application metadata
pub mod app {
    /// Application name (used for config directory, etc.)
    pub const NAME: &str = "quotidian";
}

/// Quote service configuration
pub mod api {
    /// Fixed host of the quotes15 service on RapidAPI
    pub const QUOTES15_HOST: &str = "quotes15.p.rapidapi.com";

    /// Base URL of the quotes15 service
    pub const QUOTES15_BASE_URL: &str = "https://quotes15.p.rapidapi.com";

    /// Path of the random-quote endpoint
    pub const RANDOM_QUOTE_PATH: &str = "/quotes/random/";

    /// Header carrying the RapidAPI credential
    pub const API_KEY_HEADER: &str = "x-rapidapi-key";

    /// Header carrying the RapidAPI host
    pub const API_HOST_HEADER: &str = "x-rapidapi-host";

    /// Language used when the caller does not pick one
    pub const DEFAULT_LANGUAGE: &str = "en";
}

/// Network-related configuration
pub mod network {
    /// User agent for HTTP requests
    pub const USER_AGENT: &str = concat!("Quotidian/", env!("CARGO_PKG_VERSION"));

    /// Connection timeout in seconds
    pub const CONNECT_TIMEOUT_SECS: u64 = 10;

    /// Read timeout in seconds
    pub const READ_TIMEOUT_SECS: u64 = 30;
}

/// UI-facing policy constants
pub mod ui {
    /// Minimum interval between consecutive fetch triggers (milliseconds)
    pub const FETCH_COOLDOWN_MS: u64 = 1000;
}
