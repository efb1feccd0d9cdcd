/// Library error type.
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("unknown action id: {0}")]
    UnknownAction(String),

    #[error("invalid color '{0}', expected #rrggbb or #rrggbbaa")]
    InvalidColor(String),

    #[error("invalid UTC offset '{0}', expected [+-]H[:MM]")]
    InvalidUtcOffset(String),

    #[error("invalid time '{0}', expected HH:MM[:SS]")]
    InvalidTime(String),

    #[error("invalid date format '{0}'")]
    InvalidDateFormat(String),

    #[error("failed to parse settings: {0}")]
    Settings(#[from] serde_json::Error),

    #[error("failed to encode image: {0}")]
    Image(String),
}

pub type Result<T> = std::result::Result<T, Error>;
