//! The fixed set of team names used to find matchup boundaries on a page.

use crate::error::AppError;
use std::collections::HashSet;
use std::path::Path;
use tracing::{debug, info};

/// Valid team names, loaded once and only used for membership tests.
#[derive(Debug, Clone, Default)]
pub struct Roster {
    names: HashSet<String>,
}

impl Roster {
    /// Builds a roster from names. Surrounding whitespace is trimmed and
    /// blank names are skipped.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let names = names
            .into_iter()
            .map(|name| name.as_ref().trim().to_string())
            .filter(|name| !name.is_empty())
            .collect();
        Roster { names }
    }

    /// Loads a roster file. Every cell of every non-empty row is a team name,
    /// so the file may hold one name per line or several per line.
    ///
    /// # Errors
    /// * `AppError::Io` / `AppError::Csv` - The file could not be read
    /// * `AppError::EmptyRoster` - The file holds no names
    pub fn load(path: &Path) -> Result<Self, AppError> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_path(path)?;

        let mut cells = Vec::new();
        for row in reader.records() {
            let row = row?;
            cells.extend(row.iter().map(str::to_string));
        }

        let roster = Roster::from_names(cells);
        if roster.is_empty() {
            return Err(AppError::empty_roster(path.display().to_string()));
        }

        info!("Loaded {} team names from {}", roster.len(), path.display());
        debug!("Roster: {:?}", roster.names);
        Ok(roster)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
