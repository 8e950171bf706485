//! Error types for the style engine.
//!
//! Only configuration loading can fail; painting and geometry report
//! unhandled requests through their return values instead of errors.

use std::path::PathBuf;

use thiserror::Error;

/// Errors produced while loading a style configuration.
#[derive(Debug, Error)]
pub enum StyleError {
    /// The configuration file does not exist.
    #[error("style config not found: {path}")]
    ConfigNotFound {
        /// Path that was probed.
        path: PathBuf,
    },

    /// The configuration file could not be read.
    #[error("failed to read style config {path}: {source}")]
    ConfigRead {
        /// Path that was read.
        path: PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// The configuration file is not valid TOML for [StyleConfig].
    ///
    /// [StyleConfig]: crate::config::StyleConfig
    #[error("failed to parse style config {path}: {details}")]
    ConfigParse {
        /// Path that was parsed.
        path: PathBuf,
        /// Parser diagnostic.
        details: String,
    },
}
