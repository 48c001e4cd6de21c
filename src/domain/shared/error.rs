//! Probe errors

use crate::domain::status::StatusCode;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProbeError {
    /// The library's create call returned anything but the success sentinel
    #[error("Library initialization failed: {status}")]
    InitializationFailed { status: StatusCode },
}

impl ProbeError {
    /// Status reported by the library call that failed
    pub fn status(&self) -> StatusCode {
        match self {
            ProbeError::InitializationFailed { status } => *status,
        }
    }
}
