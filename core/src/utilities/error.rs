use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq)]
pub enum ClusterError {
    #[error("invalid construction: {0}")]
    Construction(String),

    #[error("index {index} out of range for size {size}")]
    Index { index: usize, size: usize },

    #[error("expected a vector of length {expected}, got {actual}")]
    Shape { expected: usize, actual: usize },

    #[error("invalid argument: {0}")]
    Argument(String),
}

pub type Result<T> = std::result::Result<T, ClusterError>;
