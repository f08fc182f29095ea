use thiserror::Error;

#[derive(Error, Debug)]
pub enum CopperError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Negative parameter: {name} = {value}")]
    NegativeParameter { name: &'static str, value: f64 },

    #[error("Dimension mismatch in {context}: expected {expected}, found {found}")]
    DimensionMismatch {
        context: String,
        expected: usize,
        found: usize,
    },

    #[error("Unknown activation: '{0}'")]
    UnknownActivation(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type CopperResult<T> = Result<T, CopperError>;
