//! Crate-wide error type.
//!
//! Playlist navigation never fails (it reports `None` instead); these errors
//! come from the edges: configuration, the filesystem and the terminal.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("configuration error: {0}")]
    Config(#[from] ::config::ConfigError),

    #[error("invalid configuration: {0}")]
    InvalidSettings(String),

    #[error("cannot serialize configuration: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("{} is not a directory", .0.display())]
    NotADirectory(PathBuf),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
