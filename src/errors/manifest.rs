use std::io;
use thiserror::Error;

/// Errors that can occur when loading or writing a `mod.toml` manifest
#[derive(Error, Debug)]
pub enum ManifestError {
    #[error("No mod.toml found in '{0}'")]
    NotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("TOML serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),
}
