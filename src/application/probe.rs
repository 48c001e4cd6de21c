//! Lifecycle probe - create the library, destroy it, report the outcome

use crate::application::exit_code;
use crate::domain::lifecycle::{LifecycleEvent, LifecycleEventKind, UaContext, UserAgentLibrary};
use crate::domain::shared::error::ProbeError;
use crate::domain::shared::result::Result;
use crate::domain::shared::value_objects::ProbeId;
use crate::domain::status::StatusCode;
use tracing::{debug, info, warn};

/// Outcome of a probe run that got past create
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeReport {
    pub probe_id: ProbeId,
    /// Status returned by destroy; never affects the exit code
    pub shutdown_status: StatusCode,
}

/// Runs one create/destroy cycle against a library
pub struct LifecycleProbe<L: UserAgentLibrary> {
    id: ProbeId,
    library: L,
    events: Vec<LifecycleEvent>,
}

impl<L: UserAgentLibrary> LifecycleProbe<L> {
    pub fn new(library: L) -> Self {
        Self {
            id: ProbeId::new(),
            library,
            events: Vec::new(),
        }
    }

    pub fn id(&self) -> ProbeId {
        self.id
    }

    /// Create the library; on success destroy it unconditionally
    pub fn run(&mut self) -> Result<ProbeReport> {
        debug!(probe_id = %self.id, "Probing library lifecycle");

        let context = match UaContext::initialize(&mut self.library) {
            Ok(context) => context,
            Err(err) => {
                let status = err.status();
                self.events.push(LifecycleEvent::new(
                    self.id,
                    LifecycleEventKind::InitializationFailed,
                    status,
                ));
                info!(probe_id = %self.id, %status, "Library initialization failed");
                return Err(err);
            }
        };
        self.events.push(LifecycleEvent::new(
            self.id,
            LifecycleEventKind::Initialized,
            StatusCode::SUCCESS,
        ));

        let shutdown_status = context.shutdown();
        if !shutdown_status.is_success() {
            warn!(probe_id = %self.id, status = %shutdown_status, "Library shutdown reported non-success");
        }
        self.events.push(LifecycleEvent::new(
            self.id,
            LifecycleEventKind::Destroyed,
            shutdown_status,
        ));

        info!(probe_id = %self.id, "Library initialized and shut down");
        Ok(ProbeReport {
            probe_id: self.id,
            shutdown_status,
        })
    }

    /// Take all recorded lifecycle events
    pub fn take_events(&mut self) -> Vec<LifecycleEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn library(&self) -> &L {
        &self.library
    }

    pub fn into_library(self) -> L {
        self.library
    }
}

/// Map a probe result to the process exit status
pub fn exit_status(result: &Result<ProbeReport>) -> u8 {
    match result {
        Ok(_) => exit_code::SUCCESS,
        Err(ProbeError::InitializationFailed { .. }) => exit_code::INIT_FAILED,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::UaConfig;
    use crate::domain::lifecycle::MockUserAgentLibrary;
    use crate::infrastructure::endpoint::{Endpoint, UaState};
    use serial_test::serial;

    fn mock_library(create_status: StatusCode, destroy_calls: usize) -> MockUserAgentLibrary {
        let mut library = MockUserAgentLibrary::new();
        library
            .expect_create()
            .times(1)
            .returning(move || create_status);
        library
            .expect_destroy()
            .times(destroy_calls)
            .returning(|| StatusCode::SUCCESS);
        library
    }

    #[test]
    fn test_success_destroys_exactly_once() {
        let mut probe = LifecycleProbe::new(mock_library(StatusCode::SUCCESS, 1));

        let result = probe.run();
        assert_eq!(exit_status(&result), 0);

        let report = result.unwrap();
        assert_eq!(report.probe_id, probe.id());
        assert_eq!(report.shutdown_status, StatusCode::SUCCESS);

        let kinds: Vec<_> = probe.take_events().into_iter().map(|e| e.kind).collect();
        assert_eq!(
            kinds,
            vec![LifecycleEventKind::Initialized, LifecycleEventKind::Destroyed]
        );
    }

    #[test]
    fn test_failure_never_destroys() {
        let mut probe = LifecycleProbe::new(mock_library(StatusCode::from(1), 0));

        let result = probe.run();
        assert_eq!(exit_status(&result), 255);
        assert_eq!(
            result,
            Err(ProbeError::InitializationFailed {
                status: StatusCode::from(1)
            })
        );

        let events = probe.take_events();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].kind, LifecycleEventKind::InitializationFailed);
        assert_eq!(events[0].status, StatusCode::from(1));
        assert_eq!(events[0].event_type(), "lifecycle.initialization_failed");
    }

    #[test]
    fn test_any_non_success_status_fails() {
        for status in [StatusCode::from(-1), StatusCode::PJ_EINVAL, StatusCode::PJ_ENOMEM] {
            let mut probe = LifecycleProbe::new(mock_library(status, 0));
            assert_eq!(exit_status(&probe.run()), 255);
        }
    }

    #[test]
    fn test_shutdown_status_does_not_change_exit() {
        let mut library = MockUserAgentLibrary::new();
        library
            .expect_create()
            .times(1)
            .returning(|| StatusCode::SUCCESS);
        library
            .expect_destroy()
            .times(1)
            .returning(|| StatusCode::PJ_EBUSY);

        let mut probe = LifecycleProbe::new(library);
        let result = probe.run();
        assert_eq!(exit_status(&result), 0);
        assert_eq!(result.unwrap().shutdown_status, StatusCode::PJ_EBUSY);
    }

    #[test]
    #[serial(endpoint)]
    fn test_endpoint_round_trip() {
        let mut probe = LifecycleProbe::new(Endpoint::new(UaConfig::default()));
        assert_eq!(exit_status(&probe.run()), 0);

        let endpoint = probe.into_library();
        assert_eq!(endpoint.state(), UaState::Null);
        assert!(!Endpoint::instance_alive());
    }

    #[test]
    #[serial(endpoint)]
    fn test_endpoint_rejects_bad_config() {
        let config = UaConfig {
            max_calls: 0,
            ..UaConfig::default()
        };
        let mut probe = LifecycleProbe::new(Endpoint::new(config));
        assert_eq!(exit_status(&probe.run()), 255);
        assert_eq!(probe.library().state(), UaState::Null);
    }
}
