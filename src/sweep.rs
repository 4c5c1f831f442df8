//! Sequential sweep over the configured years and weeks.

use crate::data_fetcher::api::FragmentSource;
use crate::data_fetcher::models::GameRecord;
use crate::data_fetcher::processors::reconstruct_page;
use crate::error::AppError;
use crate::roster::Roster;
use tracing::{error, info, warn};

/// Half-open year and week ranges to sweep
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SweepRange {
    pub year_start: i32,
    pub year_end: i32,
    pub week_start: u32,
    pub week_end: u32,
}

impl SweepRange {
    /// # Errors
    /// `AppError::EmptyRange` when either range would cover nothing.
    pub fn new(year_start: i32, year_end: i32, week_start: u32, week_end: u32) -> Result<Self, AppError> {
        if year_start >= year_end {
            return Err(AppError::empty_range("year", year_start, year_end));
        }
        if week_start >= week_end {
            return Err(AppError::empty_range("week", week_start, week_end));
        }
        Ok(SweepRange {
            year_start,
            year_end,
            week_start,
            week_end,
        })
    }

    /// Every (year, week) pair, year-major
    pub fn pages(&self) -> impl Iterator<Item = (i32, u32)> + '_ {
        (self.year_start..self.year_end)
            .flat_map(move |year| (self.week_start..self.week_end).map(move |week| (year, week)))
    }

    pub fn page_count(&self) -> usize {
        let years = self.year_end.abs_diff(self.year_start) as usize;
        let weeks = self.week_end.abs_diff(self.week_start) as usize;
        years.saturating_mul(weeks)
    }
}

/// Counters reported at the end of a sweep
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SweepSummary {
    pub pages_fetched: usize,
    pub pages_failed: usize,
    pub pages_skipped: usize,
    pub records: usize,
}

/// Records collected across the sweep, in year, week and page order.
#[derive(Debug, Default)]
pub struct WeatherCollection {
    records: Vec<GameRecord>,
    summary: SweepSummary,
}

impl WeatherCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one page's records after those already collected
    pub fn extend_page(&mut self, records: Vec<GameRecord>) {
        self.summary.records += records.len();
        self.records.extend(records);
    }

    pub fn records(&self) -> &[GameRecord] {
        &self.records
    }

    pub fn into_records(self) -> Vec<GameRecord> {
        self.records
    }

    pub fn summary(&self) -> SweepSummary {
        self.summary
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Behavior switches for a sweep
#[derive(Debug, Clone, Copy, Default)]
pub struct SweepOptions {
    /// Log pages with malformed cells and keep going instead of failing
    pub skip_malformed_pages: bool,
}

/// Fetches and parses every page in `range`, one at a time.
///
/// A page that cannot be fetched adds no records and the sweep moves on.
/// Any other error from the source ends the sweep.
/// A page with a malformed forecast or wind cell fails the sweep unless
/// `options.skip_malformed_pages` is set.
///
/// # Errors
/// * `AppError::PageParse` - A page could not be parsed and skipping is off
pub async fn run_sweep<S: FragmentSource>(
    source: &S,
    roster: &Roster,
    range: &SweepRange,
    options: SweepOptions,
) -> Result<WeatherCollection, AppError> {
    let mut collection = WeatherCollection::new();
    info!(
        "Sweeping years {}..{} and weeks {}..{} ({} pages)",
        range.year_start,
        range.year_end,
        range.week_start,
        range.week_end,
        range.page_count()
    );

    for (year, week) in range.pages() {
        info!("Processing {year} week {week}");

        let fragments = match source.fetch(year, week).await {
            Ok(fragments) => {
                collection.summary.pages_fetched += 1;
                fragments
            }
            Err(e) if e.is_fetch_failure() => {
                error!("Error opening {year} week {week}: {e}");
                collection.summary.pages_failed += 1;
                continue;
            }
            Err(e) => return Err(e),
        };

        match reconstruct_page(roster, year, week, &fragments) {
            Ok(records) => {
                info!("Found {} games for {year} week {week}", records.len());
                collection.extend_page(records);
            }
            Err(e) if options.skip_malformed_pages => {
                warn!("Skipping {year} week {week}: {e}");
                collection.summary.pages_skipped += 1;
            }
            Err(e) => return Err(AppError::page_parse(year, week, e)),
        }
    }

    let summary = collection.summary();
    info!(
        "Sweep complete: {} pages fetched, {} failed, {} skipped, {} records",
        summary.pages_fetched, summary.pages_failed, summary.pages_skipped, summary.records
    );
    Ok(collection)
}
