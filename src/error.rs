//! Error types for Heritage

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Error finding `{file}`: file does not exist")]
    DataFileNotFound {
        file: String,
        searched: Vec<PathBuf>,
    },

    #[error("Error reading {file}: {source}")]
    Read {
        file: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Error parsing {file}: {source}")]
    Decode {
        file: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, Error>;
