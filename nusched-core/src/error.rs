//! Error types for nusched.
//!
//! Extraction and course building never fail: odd payloads degrade to fewer
//! records. Errors here cover configuration, verification of generated
//! calendars, and writing the exported file.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur in nusched operations.
#[derive(Error, Debug)]
pub enum NuSchedError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The requested calendar file was not produced.
    #[error("Could not write calendar to {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("ICS verification error: {0}")]
    IcsVerify(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type alias for nusched operations.
pub type NuSchedResult<T> = Result<T, NuSchedError>;
