//! Unified error type for the service.
//!
//! Every failure that can reach a request boundary is one of these variants.
//! The HTTP layer renders all of them the same way (status 500 with the
//! `Display` text), so the messages here are what clients see.

use thiserror::Error;

/// Application error type
#[derive(Debug, Error)]
pub enum Error {
    /// The seed source could not be reached, timed out, or answered with a non-2xx status
    #[error("Failed to fetch seed data: {message}")]
    Fetch {
        /// What went wrong while talking to the seed source
        message: String,
    },

    /// The seed payload was not a valid array of transaction records
    #[error("Failed to parse seed data: {message}")]
    Parse {
        /// Parser diagnostic
        message: String,
    },

    /// Any failure reported by the record store
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    /// Settings could not be read or are invalid
    #[error("Configuration error: {message}")]
    Config {
        /// Description of the configuration problem
        message: String,
    },

    /// Listener or socket failure
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<reqwest::Error> for Error {
    fn from(value: reqwest::Error) -> Self {
        if value.is_decode() {
            Self::Parse {
                message: value.to_string(),
            }
        } else {
            Self::Fetch {
                message: value.to_string(),
            }
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(value: serde_json::Error) -> Self {
        Self::Parse {
            message: value.to_string(),
        }
    }
}

/// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;
