use thiserror::Error;

#[derive(Error, Debug)]
pub enum DeskError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Terminal error: {0}")]
    Terminal(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
