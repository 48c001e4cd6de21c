//! Infrastructure layer - Technical implementations
//!
//! This layer contains:
//! - The bundled user-agent endpoint backing the library seam
//! - The native pjsua binding (`pjsua` feature)
//! - Logging setup

pub mod endpoint;
pub mod logging;
#[cfg(feature = "pjsua")]
pub mod native;
