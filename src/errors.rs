use crate::airfoil::Surface;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ParsecError {
    #[error("genome must have {expected} values, got {actual}")]
    Shape { expected: usize, actual: usize },

    #[error("station count must be at least 2, got {0}")]
    StationCount(usize),

    #[error("{quantity} out of domain: {value}")]
    Domain { quantity: &'static str, value: f64 },

    #[error("{surface} surface system is singular (condition number {condition:e})")]
    SingularSystem { surface: Surface, condition: f64 },

    #[error("Configuration error: {0}")]
    Config(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ParsecError>;
