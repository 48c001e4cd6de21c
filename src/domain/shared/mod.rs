//! Shared kernel - Common types used by the probe and the endpoint

pub mod error;
pub mod result;
pub mod value_objects;

pub use error::ProbeError;
pub use result::Result;
pub use value_objects::*;
