use crate::data_fetcher::api::FragmentSource;
use crate::error::AppError;
use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

/// Builds a page's fragment list in page order, the way cells appear on a
/// weekly listing: two team names followed by that game's data cells.
#[derive(Debug, Default)]
pub struct PageBuilder {
    fragments: Vec<String>,
}

impl PageBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens a matchup. The away team is listed first.
    pub fn game(mut self, away: &str, home: &str) -> Self {
        self.fragments.push(away.to_string());
        self.fragments.push(home.to_string());
        self
    }

    pub fn score(mut self, away: i32, home: i32) -> Self {
        self.fragments.push(format!("Final {away} {home}"));
        self
    }

    pub fn forecast(mut self, temp: i32, description: &str) -> Self {
        self.fragments.push(format!("{temp}f {description}"));
        self
    }

    pub fn dome(mut self) -> Self {
        self.fragments.push("DOME".to_string());
        self
    }

    pub fn wind(mut self, speed: i32, direction: &str) -> Self {
        self.fragments.push(format!("{speed}m {direction}"));
        self
    }

    /// Adds a cell that no classifier recognizes
    pub fn noise(mut self, text: &str) -> Self {
        self.fragments.push(text.to_string());
        self
    }

    pub fn build(self) -> Vec<String> {
        self.fragments
    }
}

/// In-memory fragment source. Pages that were never added come back empty.
#[derive(Debug, Default)]
pub struct StaticFragmentSource {
    pages: HashMap<(i32, u32), Vec<String>>,
    failures: HashSet<(i32, u32)>,
    requests: Mutex<Vec<(i32, u32)>>,
}

impl StaticFragmentSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_page(mut self, year: i32, week: u32, fragments: Vec<String>) -> Self {
        self.pages.insert((year, week), fragments);
        self
    }

    /// Makes the page fail as if the site were unreachable
    pub fn with_failure(mut self, year: i32, week: u32) -> Self {
        self.failures.insert((year, week));
        self
    }

    /// Pages requested so far, in request order
    pub fn requests(&self) -> Vec<(i32, u32)> {
        self.requests
            .lock()
            .map(|requests| requests.clone())
            .unwrap_or_default()
    }
}

impl FragmentSource for StaticFragmentSource {
    async fn fetch(&self, year: i32, week: u32) -> Result<Vec<String>, AppError> {
        if let Ok(mut requests) = self.requests.lock() {
            requests.push((year, week));
        }

        if self.failures.contains(&(year, week)) {
            return Err(AppError::network_connection(
                format!("static://{year}/{week}"),
                "simulated failure",
            ));
        }

        Ok(self.pages.get(&(year, week)).cloned().unwrap_or_default())
    }
}
