use crate::cli::Args;
use crate::config::Config;
use crate::constants::LOG_FILE_NAME;
use crate::error::AppError;
use std::io::stdout;
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::filter::Directive;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

const DEFAULT_DIRECTIVE: &str = "nfl_weather=info";

/// Resolves the log directory and file name.
///
/// `--log-file` wins over the configured path, which wins over the default
/// location under the platform config directory.
pub fn resolve_log_location(args: &Args, config: &Config) -> (String, String) {
    match args.log_file.as_ref().or(config.log_file_path.as_ref()) {
        Some(custom_path) => {
            let path = Path::new(custom_path);
            let parent = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .unwrap_or(Path::new("."));
            let file_name = path
                .file_name()
                .and_then(|n| n.to_str())
                .unwrap_or(LOG_FILE_NAME);
            (parent.to_string_lossy().to_string(), file_name.to_string())
        }
        None => (Config::get_log_dir_path(), LOG_FILE_NAME.to_string()),
    }
}

fn env_filter() -> Result<EnvFilter, AppError> {
    let directive = DEFAULT_DIRECTIVE
        .parse::<Directive>()
        .map_err(|e| AppError::log_setup_error(format!("Invalid log directive: {e}")))?;
    Ok(EnvFilter::from_default_env().add_directive(directive))
}

/// Sets up logging for the application.
///
/// - Logs go to a daily rolling file and, unless `--quiet` is set, to stdout
/// - Creates the log directory if it doesn't exist
///
/// Returns the path to the log file and the guard that must be kept alive
/// for the duration of the program to ensure proper log flushing.
pub async fn setup_logging(args: &Args, config: &Config) -> Result<(String, WorkerGuard), AppError> {
    let (log_dir, log_file_name) = resolve_log_location(args, config);

    if !Path::new(&log_dir).exists() {
        tokio::fs::create_dir_all(&log_dir).await.map_err(|e| {
            AppError::log_setup_error(format!("Failed to create log directory: {e}"))
        })?;
    }

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, &log_file_name);

    // The guard must outlive every log call or buffered lines are lost
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = fmt::Layer::new()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_filter(env_filter()?);

    let registry = tracing_subscriber::registry().with(file_layer);

    if args.quiet {
        registry.init();
    } else {
        registry
            .with(
                fmt::Layer::new()
                    .with_writer(stdout)
                    .with_ansi(true)
                    .with_filter(env_filter()?),
            )
            .init();
    }

    let log_file_path = format!("{log_dir}/{log_file_name}");
    Ok((log_file_path, guard))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_log_location_prefers_cli_argument() {
        let args = Args::parse_from(["nfl_weather", "--log-file", "/tmp/cli/run.log"]);
        let config = Config {
            log_file_path: Some("/tmp/config/weather.log".to_string()),
            ..Config::default()
        };

        let (dir, file) = resolve_log_location(&args, &config);
        assert_eq!(dir, "/tmp/cli");
        assert_eq!(file, "run.log");
    }

    #[test]
    fn test_log_location_uses_config_path() {
        let args = Args::parse_from(["nfl_weather"]);
        let config = Config {
            log_file_path: Some("/tmp/config/weather.log".to_string()),
            ..Config::default()
        };

        let (dir, file) = resolve_log_location(&args, &config);
        assert_eq!(dir, "/tmp/config");
        assert_eq!(file, "weather.log");
    }

    #[test]
    fn test_log_location_bare_file_name() {
        let args = Args::parse_from(["nfl_weather", "--log-file", "run.log"]);

        let (dir, file) = resolve_log_location(&args, &Config::default());
        assert_eq!(dir, ".");
        assert_eq!(file, "run.log");
    }

    #[test]
    fn test_log_location_default() {
        let args = Args::parse_from(["nfl_weather"]);

        let (dir, file) = resolve_log_location(&args, &Config::default());
        assert!(dir.contains("nfl_weather"));
        assert_eq!(file, "nfl_weather.log");
    }
}
