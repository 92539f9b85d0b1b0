use thiserror::Error;

pub type Result<T> = std::result::Result<T, PulseError>;

#[derive(Error, Debug)]
pub enum PulseError {
    #[error("Invalid decay rate: {0} (expected a value strictly between 0 and 1)")]
    InvalidDecayRate(f64),
    #[error("Invalid bucket count: {0} (expected at least one bucket)")]
    InvalidBucketCount(usize),
    #[error("Invalid lookback: {0}")]
    InvalidLookback(String),
    #[error("Invalid day count: {0} (expected at least one day)")]
    InvalidDayCount(u32),
    #[error("Invalid date: {0}")]
    InvalidDate(String),
    #[error("Invalid repository input: {0}")]
    InvalidRepoInput(String),
    #[error("Config error: {0}")]
    Config(#[from] toml::de::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
