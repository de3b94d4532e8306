//! Error types for the tier list engine
//!
//! The engine itself has no fatal error conditions: malformed grades,
//! unknown difficulty labels and unknown sort parameters all degrade to
//! documented defaults. The variants below cover the few constructive
//! failures around configuration.

/// Result type alias for convenience
pub type Result<T> = anyhow::Result<T>;

/// Error types for configuration and alias-table construction
#[derive(Debug, thiserror::Error)]
pub enum TierBoardError {
    #[error("Invalid difficulty alias table: {reason}")]
    InvalidAliasTable { reason: String },

    #[error("Configuration error: {message}")]
    ConfigurationError { message: String },
}
