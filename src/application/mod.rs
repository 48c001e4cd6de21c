//! Application layer - the probe use case and its process entry point

pub mod exit_code;
pub mod probe;

pub use probe::{exit_status, LifecycleProbe, ProbeReport};

use crate::config::{Config, LogConfig};
use crate::domain::lifecycle::UserAgentLibrary;
use crate::infrastructure::logging;
use std::process::ExitCode;
use tracing::{debug, error};

/// Load configuration, probe the library and return the exit code
pub fn run() -> ExitCode {
    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            logging::init(&LogConfig::default());
            error!("Failed to load configuration: {}", e);
            return ExitCode::from(exit_code::CONFIG_ERROR);
        }
    };

    logging::init(&config.log);
    run_with_config(&config)
}

/// Probe the library with an already loaded configuration
///
/// Builds with the `pjsua` feature probe the linked native library; the
/// `ua` settings only apply to the bundled endpoint.
pub fn run_with_config(config: &Config) -> ExitCode {
    if let Ok(rendered) = config.to_toml_string() {
        debug!("Effective configuration:\n{}", rendered);
    }

    #[cfg(feature = "pjsua")]
    let library = {
        debug!("Probing native pjsua");
        crate::infrastructure::native::NativeLibrary::new()
    };

    #[cfg(not(feature = "pjsua"))]
    let library = {
        let endpoint = crate::infrastructure::endpoint::Endpoint::new(config.ua.clone());
        let info = endpoint.info();
        debug!(library = info.name, version = info.version, "Probing bundled endpoint");
        endpoint
    };

    probe_library(library)
}

/// Run one create/destroy cycle against `library` and map the outcome
pub fn probe_library<L: UserAgentLibrary>(library: L) -> ExitCode {
    let mut probe = LifecycleProbe::new(library);
    let result = probe.run();
    for event in probe.take_events() {
        debug!(
            event = event.event_type(),
            status = %event.status,
            at = %event.occurred_at,
            "Lifecycle event"
        );
    }

    ExitCode::from(exit_status(&result))
}
