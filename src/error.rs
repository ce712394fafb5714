// Error Types
// Analysis and configuration failures

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnalysisError {
    /// Raised when a ratio would divide by a zero count (empty or punctuation-only text).
    #[error("division by zero: {quantity} is 0")]
    DivisionByZero { quantity: &'static str },
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("config I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid config value for {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
    #[error("no config directory available on this platform")]
    MissingConfigDir,
}
