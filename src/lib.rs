//! Heritage - read-only JSON API for museum exhibits and artefacts

pub mod config;
pub mod error;
pub mod filter;
pub mod types;

pub mod store;
pub mod api;

pub use config::Config;
pub use error::{Error, Result};
pub use types::*;
