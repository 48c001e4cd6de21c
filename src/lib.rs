//! uaprobe - SIP user-agent library lifecycle probe
//!
//! Creates a user-agent library instance, destroys it again, and reports the
//! outcome through the process exit code.
//!
//! - `domain`: status codes, the library seam and its typed handle
//! - `infrastructure`: the bundled endpoint and logging setup
//! - `application`: the probe use case and process entry point

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

// Re-export commonly used types
pub use application::{run, run_with_config};
pub use domain::shared::error::ProbeError;
pub use domain::shared::result::Result;
pub use domain::status::StatusCode;
