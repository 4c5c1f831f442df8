//! Historical NFL game weather scraper
//!
//! This library sweeps the weekly weather listings for a range of seasons and
//! weeks, rebuilds one record per game from each page's loosely structured
//! table cells, and writes the records to a CSV file.
//!
//! # Examples
//!
//! ```rust,no_run
//! use nfl_weather::config::Config;
//! use nfl_weather::data_fetcher::NflWeatherSource;
//! use nfl_weather::error::AppError;
//! use nfl_weather::output::write_records_to_path;
//! use nfl_weather::roster::Roster;
//! use nfl_weather::sweep::{SweepOptions, SweepRange, run_sweep};
//! use std::path::Path;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), AppError> {
//!     let config = Config::load().await?;
//!     let source = NflWeatherSource::from_config(&config)?;
//!     let roster = Roster::load(Path::new("data/nfl_teams.csv"))?;
//!
//!     let range = SweepRange::new(2015, 2016, 1, 18)?;
//!     let games = run_sweep(&source, &roster, &range, SweepOptions::default()).await?;
//!
//!     write_records_to_path(Path::new("weather.csv"), games.records())?;
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod constants;
pub mod data_fetcher;
pub mod error;
pub mod logging;
pub mod output;
pub mod roster;
pub mod sweep;
pub mod testing_utils;

// Re-export commonly used types for convenience
pub use config::Config;
pub use data_fetcher::models::{CSV_HEADERS, GameRecord};
pub use data_fetcher::processors::reconstruct_page;
pub use error::{AppError, ParseError};
pub use roster::Roster;
pub use sweep::{SweepOptions, SweepRange, WeatherCollection, run_sweep};

/// Current version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
