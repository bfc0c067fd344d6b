pub mod commands;
pub mod config;
pub mod dashboard;
pub mod format;
pub mod loader;
pub mod logging;

use std::path::Path;

use optibid_core::BidValuator;

pub use loader::LoadError;

/// Loads the win-rate table once and wraps it in a shareable valuator.
pub fn build_valuator(data_path: &Path) -> Result<BidValuator, LoadError> {
    loader::load_table(data_path).map(BidValuator::new)
}
