use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, BufferError>;

#[derive(Error, Debug)]
pub enum BufferError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error("config error: {0}")]
    Config(String),
    #[error("io error: {path:?} {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl BufferError {
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }
}

impl From<toml::de::Error> for BufferError {
    fn from(e: toml::de::Error) -> Self {
        Self::Config(e.to_string())
    }
}
