//! CSV output of the collected game records.

use crate::constants::OUTPUT_FILE_NAME;
use crate::data_fetcher::models::{CSV_HEADERS, GameRecord};
use crate::error::AppError;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::info;

/// Output file placed in the same directory as the roster file
pub fn default_output_path(roster_path: &Path) -> PathBuf {
    roster_path
        .parent()
        .unwrap_or_else(|| Path::new(""))
        .join(OUTPUT_FILE_NAME)
}

/// Writes the header row followed by one row per record.
pub fn write_records<W: Write>(writer: W, records: &[GameRecord]) -> Result<(), AppError> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(CSV_HEADERS)?;
    for record in records {
        csv_writer.write_record(record.to_row())?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Writes the records to `path`, replacing any existing file.
pub fn write_records_to_path(path: &Path, records: &[GameRecord]) -> Result<(), AppError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        std::fs::create_dir_all(parent)?;
    }

    let file = std::fs::File::create(path)?;
    write_records(file, records)?;
    info!("Wrote {} records to {}", records.len(), path.display());
    Ok(())
}
