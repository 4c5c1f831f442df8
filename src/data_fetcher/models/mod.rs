pub mod game_record;

pub use game_record::{CSV_HEADERS, DOME_FORECAST, DOME_TEMPERATURE, GameRecord};
