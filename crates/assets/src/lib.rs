#![warn(missing_docs)]
//! Model catalogs: the named layer stacks a viewer can select between.

mod builtin;
mod catalog;
mod loader;

pub use builtin::{builtin_catalog, osi_model, tcpip4_model, tcpip5_model};
pub use catalog::ModelCatalog;
pub use loader::{catalog_from_file, catalog_from_str};

use thiserror::Error;

/// Errors emitted while loading catalog files.
#[derive(Debug, Error)]
pub enum AssetError {
    /// Wrap IO errors when reading catalogs.
    #[error("failed to read model catalog: {0}")]
    Io(#[from] std::io::Error),
    /// Wrap serde parsing issues.
    #[error("failed to parse model catalog: {0}")]
    Parse(#[from] serde_json::Error),
}
