pub mod fragment_source;
pub mod http_client;
pub mod urls;
mod fetch_utils;

// Re-export URL utilities
pub use urls::*;
// Re-export HTTP client utilities
pub use http_client::create_http_client;
// Re-export the fragment source seam
pub use fragment_source::{FragmentSource, NflWeatherSource};
