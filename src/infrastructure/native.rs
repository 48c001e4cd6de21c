//! Native pjsua backend
//!
//! Binds `pjsua_create`/`pjsua_destroy` from the system pjproject build.
//! Link flags come from `build.rs`.

use crate::domain::lifecycle::UserAgentLibrary;
use crate::domain::status::StatusCode;
use std::os::raw::c_int;
use tracing::{debug, info};

#[allow(non_camel_case_types)]
type pj_status_t = c_int;

extern "C" {
    fn pjsua_create() -> pj_status_t;
    fn pjsua_destroy() -> pj_status_t;
}

/// The linked pjsua library
///
/// pjsua keeps its instance in process globals; the only state held here
/// is whether this handle created it.
#[derive(Debug, Default)]
pub struct NativeLibrary {
    created: bool,
}

impl NativeLibrary {
    pub fn new() -> Self {
        Self::default()
    }
}

impl UserAgentLibrary for NativeLibrary {
    fn create(&mut self) -> StatusCode {
        if self.created {
            return StatusCode::PJ_EINVALIDOP;
        }

        // SAFETY: takes no arguments; the instance it sets up is released by
        // pjsua_destroy, which is only called after this returns success.
        let status = StatusCode::from(unsafe { pjsua_create() });
        if status.is_success() {
            self.created = true;
            info!("pjsua created");
        } else {
            debug!(%status, "pjsua_create failed");
        }
        status
    }

    fn destroy(&mut self) -> StatusCode {
        if !self.created {
            return StatusCode::PJ_EINVALIDOP;
        }

        // SAFETY: pjsua_create succeeded on this handle and destroy has not run yet.
        let status = StatusCode::from(unsafe { pjsua_destroy() });
        self.created = false;
        info!(%status, "pjsua destroyed");
        status
    }
}
