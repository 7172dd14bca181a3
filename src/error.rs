//! Error types for the reservation system.

use thiserror::Error;

/// Result type alias using ReservationError.
pub type Result<T> = std::result::Result<T, ReservationError>;

#[derive(Debug, Error)]
pub enum ReservationError {
    #[error("malformed date {input:?}: {source}")]
    MalformedDate {
        input: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
