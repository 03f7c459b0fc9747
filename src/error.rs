// src/error.rs - Error types shared by the store, the board and the CLI
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GpioError {
    #[error("Unknown pin {0}")]
    UnknownPin(String),
    #[error("Unknown pin id {0}")]
    UnknownPinId(u8),
    #[error("Unknown pin mode {0}")]
    InvalidMode(u8),
    #[error("Unknown pin pull {0}")]
    InvalidPull(u8),
    #[error("Unknown pin value {0}")]
    InvalidValue(u8),
    #[error("Invalid step '{0}', expected ACTION=PIN")]
    InvalidStep(String),
    #[error("Board lock poisoned")]
    LockPoisoned,
}

pub type Result<T> = std::result::Result<T, GpioError>;
