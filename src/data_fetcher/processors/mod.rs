pub mod classifiers;
pub mod fragments;
pub mod reconstructor;

// Re-export the page parsing entry points
pub use classifiers::{FragmentKind, apply_forecast, apply_score, apply_wind, classify};
pub use fragments::{extract_fragments, normalize_fragment};
pub use reconstructor::{RecordReconstructor, ScanState, reconstruct_page};
