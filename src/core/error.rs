//! Errors raised by weight validation and histogram output.

// std
use std::io;
use std::path::PathBuf;
// others
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SamplingError {
    /// The weight vector violates the pmf contract.
    #[error("invalid weights: {reason}")]
    InvalidWeights { reason: String },
    #[error("invalid options: {reason}")]
    InvalidOptions { reason: String },
    #[error("a sampling worker thread panicked")]
    WorkerPanicked,
    #[error("could not write {path:?}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

pub type Result<T> = std::result::Result<T, SamplingError>;

impl SamplingError {
    pub fn invalid_weights<S: Into<String>>(reason: S) -> Self {
        SamplingError::InvalidWeights {
            reason: reason.into(),
        }
    }
    pub fn invalid_options<S: Into<String>>(reason: S) -> Self {
        SamplingError::InvalidOptions {
            reason: reason.into(),
        }
    }
}
