//! Typed handle over an initialized library

use crate::domain::lifecycle::library::UserAgentLibrary;
use crate::domain::lifecycle::value_object::LifecycleState;
use crate::domain::shared::error::ProbeError;
use crate::domain::shared::result::Result;
use crate::domain::status::StatusCode;
use chrono::{DateTime, Utc};
use tracing::{debug, warn};

/// Proof that the library was created successfully
///
/// Only [`UaContext::initialize`] can produce one, and only when `create`
/// returned the success sentinel. [`UaContext::shutdown`] consumes it, so
/// `destroy` is reachable from `Initialized` alone and runs at most once.
/// A context dropped without an explicit shutdown destroys the library
/// on drop.
pub struct UaContext<'a, L: UserAgentLibrary> {
    library: &'a mut L,
    state: LifecycleState,
    initialized_at: DateTime<Utc>,
}

impl<'a, L: UserAgentLibrary> UaContext<'a, L> {
    /// Create the library, returning a handle on success
    ///
    /// A non-success status leaves the library untouched: no destroy call
    /// is made on this path.
    pub fn initialize(library: &'a mut L) -> Result<Self> {
        library.create().into_result().map_err(|status| {
            debug!(%status, "Library create returned non-success");
            ProbeError::InitializationFailed { status }
        })?;

        debug_assert!(LifecycleState::NotInitialized.can_transition_to(&LifecycleState::Initialized));
        Ok(Self {
            library,
            state: LifecycleState::Initialized,
            initialized_at: Utc::now(),
        })
    }

    /// Destroy the library and return the status it reported
    pub fn shutdown(mut self) -> StatusCode {
        self.destroy()
    }

    pub fn state(&self) -> LifecycleState {
        self.state
    }

    pub fn initialized_at(&self) -> DateTime<Utc> {
        self.initialized_at
    }

    fn destroy(&mut self) -> StatusCode {
        debug_assert!(self.state.can_transition_to(&LifecycleState::Destroyed));
        self.state = LifecycleState::Destroyed;
        self.library.destroy()
    }
}

impl<L: UserAgentLibrary> Drop for UaContext<'_, L> {
    fn drop(&mut self) {
        if self.state == LifecycleState::Initialized {
            warn!("Library context dropped without shutdown, destroying");
            let status = self.destroy();
            if !status.is_success() {
                warn!(%status, "Library destroy on drop returned non-success");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::lifecycle::library::MockUserAgentLibrary;

    #[test]
    fn test_initialize_success_then_shutdown() {
        let mut library = MockUserAgentLibrary::new();
        library
            .expect_create()
            .times(1)
            .returning(|| StatusCode::SUCCESS);
        library
            .expect_destroy()
            .times(1)
            .returning(|| StatusCode::SUCCESS);

        let context = UaContext::initialize(&mut library).expect("create succeeds");
        assert_eq!(context.state(), LifecycleState::Initialized);
        assert!(context.initialized_at() <= Utc::now());
        assert_eq!(context.shutdown(), StatusCode::SUCCESS);
    }

    #[test]
    fn test_initialize_failure_never_destroys() {
        let mut library = MockUserAgentLibrary::new();
        library
            .expect_create()
            .times(1)
            .returning(|| StatusCode::from(1));
        library.expect_destroy().times(0);

        let err = UaContext::initialize(&mut library).err().expect("create fails");
        assert_eq!(
            err,
            ProbeError::InitializationFailed {
                status: StatusCode::from(1)
            }
        );
    }

    #[test]
    fn test_drop_without_shutdown_destroys_once() {
        let mut library = MockUserAgentLibrary::new();
        library
            .expect_create()
            .times(1)
            .returning(|| StatusCode::SUCCESS);
        library
            .expect_destroy()
            .times(1)
            .returning(|| StatusCode::SUCCESS);

        let context = UaContext::initialize(&mut library).expect("create succeeds");
        drop(context);
    }

    #[test]
    fn test_shutdown_status_is_returned_not_retried() {
        let mut library = MockUserAgentLibrary::new();
        library
            .expect_create()
            .times(1)
            .returning(|| StatusCode::SUCCESS);
        library
            .expect_destroy()
            .times(1)
            .returning(|| StatusCode::PJ_EBUSY);

        let context = UaContext::initialize(&mut library).expect("create succeeds");
        assert_eq!(context.shutdown(), StatusCode::PJ_EBUSY);
    }
}
