use clap::Parser;
use nfl_weather::cli::Args;
use nfl_weather::commands::{handle_list_config_command, handle_sweep_command, validate_args};
use nfl_weather::config::Config;
use nfl_weather::error::AppError;
use nfl_weather::logging::setup_logging;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let args = Args::parse();

    if args.list_config {
        return handle_list_config_command().await;
    }

    // Fail on bad ranges before touching the network or log files
    validate_args(&args)?;

    let config = Config::load().await?;

    // Keep the guard alive until main returns so file logs are flushed
    let (log_file_path, _guard) = setup_logging(&args, &config).await?;
    tracing::info!("Logs are being written to: {log_file_path}");

    handle_sweep_command(&args, &config).await
}
