//! Content loaders for reading arena data from files.
//!
//! Rosters are authored in RON, battle configuration in TOML.

pub mod config;
pub mod roster;

pub use config::ConfigLoader;
pub use roster::{RosterEntrySpec, RosterLoader};

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
