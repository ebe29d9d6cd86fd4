use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum PlaneError {
    #[error("Degenerate normal: length {length:e} is too small to normalize")]
    DegenerateNormal { length: f64 },

    #[error("Invalid plane state: {0}")]
    InvalidPlaneState(String),

    #[error("Non-finite value for {field}: {value}")]
    NonFiniteValue { field: &'static str, value: f64 },

    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, PlaneError>;
