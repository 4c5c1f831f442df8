//! Application-wide constants and configuration values
//!
//! This module centralizes all magic numbers and configuration constants
//! to improve maintainability and make the codebase more configurable.

/// Default timeout for HTTP requests in seconds
pub const DEFAULT_HTTP_TIMEOUT_SECONDS: u64 = 30;

/// Maximum number of connections per host in the HTTP client pool
pub const HTTP_POOL_MAX_IDLE_PER_HOST: usize = 10;

/// Site hosting the weekly weather listings
pub const DEFAULT_BASE_URL: &str = "http://www.nflweather.com";

/// User agent sent with every page request
pub const DEFAULT_USER_AGENT: &str = concat!("nfl_weather/", env!("CARGO_PKG_VERSION"));

/// Application directory name under the platform config directory
pub const APP_DIR_NAME: &str = "nfl_weather";

/// Default log file name
pub const LOG_FILE_NAME: &str = "nfl_weather.log";

/// Output file written next to the roster file
pub const OUTPUT_FILE_NAME: &str = "NFL Weather Data.csv";

/// Roster bundled with the crate
pub const DEFAULT_ROSTER_PATH: &str = "data/nfl_teams.csv";

/// Default sweep ranges. Both are half-open.
pub mod sweep {
    /// First season with weather listings
    pub const YEAR_START: i32 = 2009;

    /// Exclusive end of the default year range
    pub const YEAR_END: i32 = 2019;

    /// First regular season week
    pub const WEEK_START: u32 = 1;

    /// Exclusive end of the default week range (17 regular season weeks)
    pub const WEEK_END: u32 = 18;
}

/// Environment variable names
pub mod env_vars {
    /// Override base URL of the weather site
    pub const BASE_URL: &str = "NFL_WEATHER_BASE_URL";

    /// Override log file path
    pub const LOG_FILE: &str = "NFL_WEATHER_LOG_FILE";

    /// Override HTTP timeout in seconds
    pub const HTTP_TIMEOUT: &str = "NFL_WEATHER_HTTP_TIMEOUT";
}
