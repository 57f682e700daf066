use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PatternError {
    #[error("Failed to write demo output: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to read config file {}: {source}", .path.display())]
    ConfigRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Unknown payment method: '{0}' (expected credit_card or upi)")]
    UnknownPaymentMethod(String),
}

impl PatternError {
    pub fn config_read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ConfigRead {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, PatternError>;
