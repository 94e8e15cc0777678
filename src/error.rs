//! Error types
//!
//! The simulation itself never fails; errors only come from the edges
//! (settings files, the terminal host).

use std::path::PathBuf;

/// Crate-wide error type
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Terminal or file IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A settings or snapshot file could not be parsed or written
    #[error("Settings error in {path}: {source}")]
    Config {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A value could not be turned into JSON
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// A setting is out of its allowed range
    #[error("Invalid setting `{name}`: {reason}")]
    InvalidSetting { name: &'static str, reason: String },

    /// The frame handler refused to start
    #[error("Game initialisation was rejected for a {width}x{height} playfield")]
    InitRejected { width: u16, height: u16 },
}

pub type Result<T> = std::result::Result<T, Error>;
