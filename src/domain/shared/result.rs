//! Probe result type

use super::error::ProbeError;

/// Standard result type for lifecycle operations
pub type Result<T> = std::result::Result<T, ProbeError>;
