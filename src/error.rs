use thiserror::Error;

pub type Result<T> = std::result::Result<T, ChargeError>;

/// Glue-level errors: reading request input and wiring up adapters.
///
/// The charge path itself never produces these; `Payment::attempt` reports
/// through `AttemptOutcome` instead.
#[derive(Error, Debug)]
pub enum ChargeError {
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("HTTP client error: {0}")]
    HttpError(#[from] reqwest::Error),
    #[error("Config error: {0}")]
    ConfigError(String),
}
