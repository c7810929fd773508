use crate::config::ConfigError;
use thiserror::Error;

pub type AppResult<T> = std::result::Result<T, AppError>;
pub type StyleResult<T> = std::result::Result<T, StyleError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Style(#[from] StyleError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("failed to serialize style mapping")]
    Serialize(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum StyleError {
    #[error("invalid argument: {0}")]
    InvalidArgument(#[from] InvalidArgument),
    #[error("unknown preset: {name}")]
    UnknownPreset { name: String },
}

impl StyleError {
    pub const fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum InvalidArgument {
    #[error("box shorthand takes 1, 2 or 4 edge values, got {arity}")]
    Arity { arity: usize },
    #[error("edge value must be a finite number, got {value}")]
    NonFiniteEdge { value: f64 },
}
