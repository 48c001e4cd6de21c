//! Status codes returned by the user-agent library
//!
//! The library reports every operation through an integer status. Zero is the
//! success sentinel; the non-zero values used here follow the pjlib error space
//! (`PJ_ERRNO_START_STATUS` = 70000).

use serde::{Deserialize, Serialize};
use std::fmt;

/// Integer status produced by a library call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StatusCode(i32);

impl StatusCode {
    /// Operation succeeded
    pub const SUCCESS: StatusCode = StatusCode(0);
    /// Unknown error
    pub const PJ_EUNKNOWN: StatusCode = StatusCode(70001);
    /// Invalid argument
    pub const PJ_EINVAL: StatusCode = StatusCode(70004);
    /// Not enough memory
    pub const PJ_ENOMEM: StatusCode = StatusCode(70007);
    /// Object is busy
    pub const PJ_EBUSY: StatusCode = StatusCode(70011);
    /// Invalid operation
    pub const PJ_EINVALIDOP: StatusCode = StatusCode(70013);
    /// Object already exists
    pub const PJ_EEXISTS: StatusCode = StatusCode(70015);

    pub const fn new(code: i32) -> Self {
        Self(code)
    }

    pub const fn as_i32(&self) -> i32 {
        self.0
    }

    pub const fn is_success(&self) -> bool {
        self.0 == Self::SUCCESS.0
    }

    /// `Ok(())` for the success sentinel, the status itself otherwise
    pub fn into_result(self) -> Result<(), StatusCode> {
        if self.is_success() {
            Ok(())
        } else {
            Err(self)
        }
    }

    /// Human readable description of the status
    pub fn description(&self) -> &'static str {
        match *self {
            Self::SUCCESS => "Success",
            Self::PJ_EUNKNOWN => "Unknown error",
            Self::PJ_EINVAL => "Invalid argument",
            Self::PJ_ENOMEM => "Not enough memory",
            Self::PJ_EBUSY => "Object is busy",
            Self::PJ_EINVALIDOP => "Invalid operation",
            Self::PJ_EEXISTS => "Object already exists",
            _ => "Unrecognized status",
        }
    }
}

impl From<i32> for StatusCode {
    fn from(code: i32) -> Self {
        Self(code)
    }
}

impl From<StatusCode> for i32 {
    fn from(status: StatusCode) -> Self {
        status.0
    }
}

impl fmt::Display for StatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.0, self.description())
    }
}
