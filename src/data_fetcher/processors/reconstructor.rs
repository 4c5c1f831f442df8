//! Rebuilds game records from the flat cell text of one weekly page.
//!
//! The page has no reliable row delimiter. In page order every matchup opens
//! with its two team names and is followed by whatever score and weather
//! cells exist for it, any of which may be missing. Scanning the fragments
//! from the end lets the team names close each record: data cells are
//! collected into a pending record, the first team name seen becomes the
//! home team and the second one, the away team, completes it.

use crate::data_fetcher::models::GameRecord;
use crate::error::ParseError;
use crate::roster::Roster;
use tracing::{debug, trace};

use super::classifiers::{FragmentKind, apply_forecast, apply_score, apply_wind, classify};

/// Which team slot the next team name fills
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanState {
    AwaitingHome,
    AwaitingAway,
}

/// State machine fed with a page's fragments in reverse order.
#[derive(Debug)]
pub struct RecordReconstructor<'a> {
    roster: &'a Roster,
    year: i32,
    week: u32,
    state: ScanState,
    pending: GameRecord,
    completed: Vec<GameRecord>,
}

impl<'a> RecordReconstructor<'a> {
    pub fn new(roster: &'a Roster, year: i32, week: u32) -> Self {
        RecordReconstructor {
            roster,
            year,
            week,
            state: ScanState::AwaitingHome,
            pending: GameRecord::new(year, week),
            completed: Vec::new(),
        }
    }

    pub fn state(&self) -> ScanState {
        self.state
    }

    /// The record that data fragments are currently written into
    pub fn pending(&self) -> &GameRecord {
        &self.pending
    }

    /// Records completed so far, most recently completed last
    pub fn completed(&self) -> &[GameRecord] {
        &self.completed
    }

    /// Consumes the next fragment of the reverse scan.
    ///
    /// # Errors
    /// Returns `ParseError` for a forecast or wind fragment without a
    /// numeric value. The pending record keeps whatever was set before.
    pub fn feed(&mut self, fragment: &str) -> Result<(), ParseError> {
        match classify(fragment, self.roster) {
            FragmentKind::Team => self.assign_team(fragment.trim()),
            FragmentKind::Score => apply_score(&mut self.pending, fragment),
            FragmentKind::Forecast => apply_forecast(&mut self.pending, fragment)?,
            FragmentKind::Wind => apply_wind(&mut self.pending, fragment)?,
            FragmentKind::Ignored => trace!("Ignoring fragment {fragment:?}"),
        }
        Ok(())
    }

    fn assign_team(&mut self, name: &str) {
        match self.state {
            ScanState::AwaitingHome => {
                self.pending.home = Some(name.to_string());
                self.state = ScanState::AwaitingAway;
            }
            ScanState::AwaitingAway => {
                self.pending.away = Some(name.to_string());
                let fresh = GameRecord::new(self.year, self.week);
                let record = std::mem::replace(&mut self.pending, fresh);
                trace!("Completed record {record:?}");
                self.completed.push(record);
                self.state = ScanState::AwaitingHome;
            }
        }
    }

    /// Ends the scan. An incomplete pending record is dropped and the
    /// completed records are returned in page order.
    pub fn finish(self) -> Vec<GameRecord> {
        if self.pending.home.is_some() {
            debug!(
                "Dropping incomplete record for {} week {} (home {:?} without away team)",
                self.year, self.week, self.pending.home
            );
        }
        let mut records = self.completed;
        records.reverse();
        records
    }
}

/// Reconstructs all complete game records of one page.
///
/// # Arguments
/// * `roster` - Valid team names
/// * `year`, `week` - The page the fragments came from
/// * `fragments` - Cell text in page order
///
/// # Errors
/// The first malformed forecast or wind fragment aborts the page.
pub fn reconstruct_page<S: AsRef<str>>(
    roster: &Roster,
    year: i32,
    week: u32,
    fragments: &[S],
) -> Result<Vec<GameRecord>, ParseError> {
    let mut reconstructor = RecordReconstructor::new(roster, year, week);
    for fragment in fragments.iter().rev() {
        reconstructor.feed(fragment.as_ref())?;
    }
    let records = reconstructor.finish();
    debug!(
        "Reconstructed {} records from {} fragments ({year} week {week})",
        records.len(),
        fragments.len()
    );
    Ok(records)
}
