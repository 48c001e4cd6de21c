//! In-process SIP user-agent endpoint
//!
//! Implements the create/destroy half of a user-agent library instance:
//! a memory pool, a module registry and a process-wide instance guard.
//! Transports, accounts and calls are never set up.

use super::module::{builtin_modules, ModuleRegistry};
use super::pool::MemoryPool;
use crate::config::UaConfig;
use crate::domain::lifecycle::UserAgentLibrary;
use crate::domain::status::StatusCode;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::{debug, info, warn};

/// Upper bound on `max_calls`
pub const MAX_CALLS_LIMIT: u32 = 32;

const ENDPOINT_RECORD_SIZE: usize = 1024;
const MODULE_RECORD_SIZE: usize = 256;

/// Set while an endpoint in this process is between create and destroy
static INSTANCE_ALIVE: AtomicBool = AtomicBool::new(false);

/// Library state as seen from outside
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UaState {
    Null,
    Created,
    Closing,
}

/// Build identity of the bundled library
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LibraryInfo {
    pub name: &'static str,
    pub version: &'static str,
    pub components: &'static [&'static str],
}

impl LibraryInfo {
    pub const fn current() -> Self {
        Self {
            name: "pjsua",
            version: "2.9",
            components: &[
                "pjsua2",
                "pjsua",
                "pjsip-ua",
                "pjsip-simple",
                "pjsip",
                "pjmedia-codec",
                "pjmedia",
                "pjnath",
                "pjlib-util",
                "pj",
            ],
        }
    }
}

/// The user-agent endpoint
pub struct Endpoint {
    config: UaConfig,
    state: UaState,
    pool: Option<MemoryPool>,
    modules: ModuleRegistry,
    created_at: Option<DateTime<Utc>>,
}

impl Endpoint {
    pub fn new(config: UaConfig) -> Self {
        Self {
            config,
            state: UaState::Null,
            pool: None,
            modules: ModuleRegistry::new(),
            created_at: None,
        }
    }

    pub fn info(&self) -> LibraryInfo {
        LibraryInfo::current()
    }

    pub fn state(&self) -> UaState {
        self.state
    }

    pub fn modules(&self) -> Vec<&str> {
        self.modules.names()
    }

    pub fn pool_used(&self) -> usize {
        self.pool.as_ref().map_or(0, MemoryPool::used)
    }

    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        self.created_at
    }

    /// Whether any endpoint in this process is currently created
    pub fn instance_alive() -> bool {
        INSTANCE_ALIVE.load(Ordering::Acquire)
    }

    fn validate(&self) -> Result<(), StatusCode> {
        if self.config.endpoint_name.trim().is_empty() {
            warn!("Endpoint name is empty");
            return Err(StatusCode::PJ_EINVAL);
        }
        if !(1..=MAX_CALLS_LIMIT).contains(&self.config.max_calls) {
            warn!(
                max_calls = self.config.max_calls,
                limit = MAX_CALLS_LIMIT,
                "max_calls out of range"
            );
            return Err(StatusCode::PJ_EINVAL);
        }
        Ok(())
    }

    /// Everything after the instance guard is claimed
    fn create_inner(&mut self) -> Result<(), StatusCode> {
        self.validate()?;

        let mut pool = MemoryPool::create(
            &self.config.endpoint_name,
            self.config.pool_capacity,
            self.config.pool_increment,
        )?;
        pool.alloc(ENDPOINT_RECORD_SIZE)?;

        let mut modules = ModuleRegistry::new();
        for module in builtin_modules() {
            pool.alloc(MODULE_RECORD_SIZE)?;
            modules.register(module)?;
        }

        self.pool = Some(pool);
        self.modules = modules;
        Ok(())
    }

    fn release_instance() {
        INSTANCE_ALIVE.store(false, Ordering::Release);
    }
}

impl UserAgentLibrary for Endpoint {
    fn create(&mut self) -> StatusCode {
        if self.state != UaState::Null {
            warn!(state = ?self.state, "Endpoint already created");
            return StatusCode::PJ_EINVALIDOP;
        }

        if INSTANCE_ALIVE
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            warn!("Another endpoint instance is alive in this process");
            return StatusCode::PJ_EEXISTS;
        }

        if let Err(status) = self.create_inner() {
            Self::release_instance();
            return status;
        }

        self.state = UaState::Created;
        self.created_at = Some(Utc::now());
        info!(
            endpoint = %self.config.endpoint_name,
            modules = self.modules.len(),
            pool_used = self.pool_used(),
            "Endpoint created"
        );
        StatusCode::SUCCESS
    }

    fn destroy(&mut self) -> StatusCode {
        if self.state != UaState::Created {
            warn!(state = ?self.state, "Destroy called on an endpoint that is not created");
            return StatusCode::PJ_EINVALIDOP;
        }

        self.state = UaState::Closing;
        let removed = self.modules.unregister_all();
        debug!(?removed, "Modules unregistered");

        if let Some(pool) = self.pool.take() {
            debug!(pool = pool.name(), used = pool.used(), blocks = pool.blocks(), "Pool released");
        }

        Self::release_instance();
        self.state = UaState::Null;
        self.created_at = None;
        info!(endpoint = %self.config.endpoint_name, "Endpoint destroyed");
        StatusCode::SUCCESS
    }
}

impl Drop for Endpoint {
    fn drop(&mut self) {
        if self.state == UaState::Created {
            warn!(endpoint = %self.config.endpoint_name, "Endpoint dropped while created, destroying");
            let status = self.destroy();
            if !status.is_success() {
                warn!(%status, "Endpoint destroy on drop returned non-success");
            }
        }
    }
}
