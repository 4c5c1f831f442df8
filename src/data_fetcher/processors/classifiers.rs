//! Decoders for the score, forecast and wind cells of a weekly weather page.
//!
//! Each decoder reads one normalized fragment and writes what it recognizes
//! into the record currently being assembled.

use crate::data_fetcher::models::{DOME_FORECAST, DOME_TEMPERATURE, GameRecord};
use crate::error::ParseError;
use crate::roster::Roster;

/// Separator between temperature and forecast text, as in `"45f Cloudy"`
const FORECAST_MARKER: &str = "f ";

/// Separator between wind speed and direction, as in `"8m NW"`
const WIND_MARKER: &str = "m ";

/// Substrings that only appear in a game's score cell
const SCORE_MARKERS: [&str; 2] = ["Final", "Q4"];

/// What a fragment contributes to the record under construction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FragmentKind {
    Team,
    Score,
    Forecast,
    Wind,
    Ignored,
}

/// Classifies a fragment. Checks run in a fixed order: team name, score,
/// forecast, wind. The first match wins.
pub fn classify(fragment: &str, roster: &Roster) -> FragmentKind {
    if roster.contains(fragment.trim()) {
        FragmentKind::Team
    } else if is_score(fragment) {
        FragmentKind::Score
    } else if is_forecast(fragment) {
        FragmentKind::Forecast
    } else if is_wind(fragment) {
        FragmentKind::Wind
    } else {
        FragmentKind::Ignored
    }
}

pub fn is_score(fragment: &str) -> bool {
    SCORE_MARKERS.iter().any(|marker| fragment.contains(marker))
}

pub fn is_forecast(fragment: &str) -> bool {
    has_digit_marker(fragment, b'f') || fragment.contains(DOME_FORECAST)
}

pub fn is_wind(fragment: &str) -> bool {
    has_digit_marker(fragment, b'm')
}

/// True when the fragment contains a digit followed by `unit` and a space
fn has_digit_marker(fragment: &str, unit: u8) -> bool {
    fragment
        .as_bytes()
        .windows(3)
        .any(|w| w[0].is_ascii_digit() && w[1] == unit && w[2] == b' ')
}

/// Reads the last two tokens as away and home score.
///
/// Scores are set only if both tokens parse. Anything else leaves the record
/// unchanged; a missing score is not an error.
pub fn apply_score(record: &mut GameRecord, fragment: &str) {
    let tokens: Vec<&str> = fragment.split_whitespace().collect();
    if let [.., away, home] = tokens.as_slice()
        && let (Ok(away), Ok(home)) = (away.parse::<i32>(), home.parse::<i32>())
    {
        record.away_score = Some(away);
        record.home_score = Some(home);
    }
}

/// Reads temperature and forecast from a fragment such as `"45f Cloudy"`.
///
/// A fragment that is exactly `"DOME"` marks an indoor game with a fixed
/// temperature. Otherwise the two characters before the first `"f "` must be
/// a number.
pub fn apply_forecast(record: &mut GameRecord, fragment: &str) -> Result<(), ParseError> {
    let trimmed = fragment.trim();

    if trimmed == DOME_FORECAST {
        record.is_dome = true;
        record.temp = Some(DOME_TEMPERATURE);
        record.forecast = Some(DOME_FORECAST.to_string());
        return Ok(());
    }

    let (temp, forecast) = split_measurement(trimmed, FORECAST_MARKER)
        .ok_or_else(|| ParseError::malformed_forecast(trimmed))?;

    record.temp = Some(temp);
    record.forecast = Some(forecast.to_string());
    Ok(())
}

/// Reads wind speed and direction from a fragment such as `"8m NW"`.
pub fn apply_wind(record: &mut GameRecord, fragment: &str) -> Result<(), ParseError> {
    let trimmed = fragment.trim();

    let (speed, direction) = split_measurement(trimmed, WIND_MARKER)
        .ok_or_else(|| ParseError::malformed_wind(trimmed))?;

    record.wind_speed = Some(speed);
    record.wind_direct = Some(direction.to_string());
    Ok(())
}

/// Splits on the first `marker`. Returns the number formed by the last two
/// characters before it and the text after it.
fn split_measurement<'a>(fragment: &'a str, marker: &str) -> Option<(i32, &'a str)> {
    let (prefix, suffix) = fragment.split_once(marker)?;
    let value = last_two_chars(prefix).trim().parse::<i32>().ok()?;
    Some((value, suffix))
}

fn last_two_chars(s: &str) -> &str {
    let start = s
        .char_indices()
        .rev()
        .nth(1)
        .map(|(idx, _)| idx)
        .unwrap_or(0);
    &s[start..]
}
