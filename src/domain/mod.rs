//! Domain layer - Lifecycle rules independent of any concrete library
//!
//! This layer contains:
//! - Status codes reported by the library
//! - The library seam and the typed handle over an initialized library
//! - Lifecycle state and events

pub mod lifecycle;
pub mod shared;
pub mod status;

// Re-export commonly used types
pub use shared::{ProbeError, Result};
pub use status::StatusCode;
