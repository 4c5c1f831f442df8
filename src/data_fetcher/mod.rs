pub mod api;
pub mod models;
pub mod processors;

pub use api::{FragmentSource, NflWeatherSource};
pub use models::{CSV_HEADERS, GameRecord};
pub use processors::reconstruct_page;
