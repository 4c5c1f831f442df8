/// Column names of the output file, in row order.
pub const CSV_HEADERS: [&str; 12] = [
    "game_id",
    "year",
    "week",
    "away",
    "home",
    "away_score",
    "home_score",
    "temp",
    "forecast",
    "is_dome",
    "wind_speed",
    "wind_direct",
];

/// Temperature recorded for games played indoors
pub const DOME_TEMPERATURE: i32 = 72;

/// Forecast text (and fragment) that marks an indoor game
pub const DOME_FORECAST: &str = "DOME";

/// One head-to-head matchup with its score and weather.
///
/// Every field other than the identity is optional because older weekly pages
/// leave scores, forecasts or wind out entirely.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameRecord {
    pub game_id: u32,
    pub year: i32,
    pub week: u32,
    pub away: Option<String>,
    pub home: Option<String>,
    pub away_score: Option<i32>,
    pub home_score: Option<i32>,
    pub temp: Option<i32>,
    pub forecast: Option<String>,
    pub is_dome: bool,
    pub wind_speed: Option<i32>,
    pub wind_direct: Option<String>,
}

impl GameRecord {
    /// Creates an empty record for the given page with a random identifier.
    /// Identifiers are not checked for uniqueness.
    pub fn new(year: i32, week: u32) -> Self {
        Self::with_id(rand::random(), year, week)
    }

    pub fn with_id(game_id: u32, year: i32, week: u32) -> Self {
        GameRecord {
            game_id,
            year,
            week,
            away: None,
            home: None,
            away_score: None,
            home_score: None,
            temp: None,
            forecast: None,
            is_dome: false,
            wind_speed: None,
            wind_direct: None,
        }
    }

    /// A record is complete once both teams are known
    pub fn is_complete(&self) -> bool {
        self.home.is_some() && self.away.is_some()
    }

    /// Compares every field except `game_id`
    pub fn same_game_as(&self, other: &GameRecord) -> bool {
        GameRecord {
            game_id: other.game_id,
            ..self.clone()
        } == *other
    }

    /// Converts the record into CSV cells ordered as [`CSV_HEADERS`].
    /// Unset fields become empty strings.
    pub fn to_row(&self) -> [String; 12] {
        [
            self.game_id.to_string(),
            self.year.to_string(),
            self.week.to_string(),
            text_cell(&self.away),
            text_cell(&self.home),
            number_cell(self.away_score),
            number_cell(self.home_score),
            number_cell(self.temp),
            text_cell(&self.forecast),
            self.is_dome.to_string(),
            number_cell(self.wind_speed),
            text_cell(&self.wind_direct),
        ]
    }
}

fn text_cell(value: &Option<String>) -> String {
    value.clone().unwrap_or_default()
}

fn number_cell(value: Option<i32>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_full_record() -> GameRecord {
        GameRecord {
            game_id: 4_000_000_001,
            year: 2015,
            week: 3,
            away: Some("Saints".to_string()),
            home: Some("Buccaneers".to_string()),
            away_score: Some(24),
            home_score: Some(27),
            temp: Some(85),
            forecast: Some("Partly Cloudy".to_string()),
            is_dome: false,
            wind_speed: Some(12),
            wind_direct: Some("NW".to_string()),
        }
    }

    #[test]
    fn test_new_record_is_empty() {
        let record = GameRecord::new(2010, 4);

        assert_eq!(record.year, 2010);
        assert_eq!(record.week, 4);
        assert!(record.home.is_none());
        assert!(record.away.is_none());
        assert!(!record.is_dome);
        assert!(!record.is_complete());
    }

    #[test]
    fn test_is_complete_requires_both_teams() {
        let mut record = GameRecord::with_id(1, 2010, 1);
        record.home = Some("Bears".to_string());
        assert!(!record.is_complete());

        record.away = Some("Packers".to_string());
        assert!(record.is_complete());
    }

    #[test]
    fn test_row_matches_header_order() {
        let row = create_full_record().to_row();

        assert_eq!(row.len(), CSV_HEADERS.len());
        assert_eq!(
            row,
            [
                "4000000001",
                "2015",
                "3",
                "Saints",
                "Buccaneers",
                "24",
                "27",
                "85",
                "Partly Cloudy",
                "false",
                "12",
                "NW",
            ]
        );
    }

    #[test]
    fn test_row_writes_unset_fields_as_empty() {
        let mut record = GameRecord::with_id(7, 2009, 17);
        record.home = Some("Lions".to_string());
        record.away = Some("Vikings".to_string());
        record.is_dome = true;

        let row = record.to_row();
        assert_eq!(row[5], "");
        assert_eq!(row[6], "");
        assert_eq!(row[7], "");
        assert_eq!(row[8], "");
        assert_eq!(row[9], "true");
        assert_eq!(row[10], "");
        assert_eq!(row[11], "");
    }

    #[test]
    fn test_same_game_ignores_identifier() {
        let first = create_full_record();
        let mut second = first.clone();
        second.game_id = 17;
        assert!(first.same_game_as(&second));

        second.wind_speed = Some(3);
        assert!(!first.same_game_as(&second));
    }
}
