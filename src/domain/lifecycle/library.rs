//! Library seam - the two entry points the probe depends on

use crate::domain::status::StatusCode;

/// A communications library with a create/destroy lifecycle
///
/// Implementations hold whatever process-wide state the library needs.
/// Callers should go through [`UaContext`](super::UaContext) rather than
/// calling these directly, so that `destroy` only follows a successful
/// `create` and runs at most once.
#[cfg_attr(test, mockall::automock)]
pub trait UserAgentLibrary {
    /// Create and initialize the library instance
    fn create(&mut self) -> StatusCode;

    /// Destroy the instance and release everything `create` acquired
    fn destroy(&mut self) -> StatusCode;
}
