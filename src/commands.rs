use crate::cli::Args;
use crate::config::Config;
use crate::data_fetcher::api::{FragmentSource, NflWeatherSource};
use crate::error::AppError;
use crate::output::{default_output_path, write_records_to_path};
use crate::roster::Roster;
use crate::sweep::{SweepOptions, SweepRange, SweepSummary, run_sweep};
use std::path::{Path, PathBuf};
use tracing::info;

/// Validates command line argument combinations.
///
/// Returns the sweep range, or an error if either range is empty.
pub fn validate_args(args: &Args) -> Result<SweepRange, AppError> {
    SweepRange::new(args.year_start, args.year_end, args.week_start, args.week_end)
}

/// Output location: `--output` if given, otherwise next to the roster file.
pub fn resolve_output_path(args: &Args) -> PathBuf {
    args.output
        .clone()
        .unwrap_or_else(|| default_output_path(&args.roster))
}

/// Handles the --list-config command.
pub async fn handle_list_config_command() -> Result<(), AppError> {
    Config::display().await
}

/// Runs a full sweep with `source` and writes the collected records.
///
/// The roster is loaded before anything is fetched so a bad roster path
/// fails fast.
pub async fn run_sweep_to_file<S: FragmentSource>(
    source: &S,
    roster_path: &Path,
    output_path: &Path,
    range: &SweepRange,
    options: SweepOptions,
) -> Result<SweepSummary, AppError> {
    let roster = Roster::load(roster_path)?;
    let collection = run_sweep(source, &roster, range, options).await?;
    let summary = collection.summary();
    write_records_to_path(output_path, collection.records())?;
    Ok(summary)
}

/// Handles the default command: sweep the site and write the CSV file.
pub async fn handle_sweep_command(args: &Args, config: &Config) -> Result<(), AppError> {
    let range = validate_args(args)?;
    let output_path = resolve_output_path(args);
    let source = NflWeatherSource::from_config(config)?;
    let options = SweepOptions {
        skip_malformed_pages: config.skip_malformed_pages,
    };

    info!("Fetching pages from {}", source.base_url());
    let summary = run_sweep_to_file(&source, &args.roster, &output_path, &range, options).await?;

    println!(
        "Wrote {} games to {} ({} pages fetched, {} failed, {} skipped)",
        summary.records,
        output_path.display(),
        summary.pages_fetched,
        summary.pages_failed,
        summary.pages_skipped
    );
    Ok(())
}
