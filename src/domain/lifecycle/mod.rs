//! Lifecycle bounded context - create/destroy of the user-agent library

pub mod context;
pub mod event;
pub mod library;
pub mod value_object;

pub use context::UaContext;
pub use event::{LifecycleEvent, LifecycleEventKind};
pub use library::UserAgentLibrary;
pub use value_object::LifecycleState;

#[cfg(test)]
pub use library::MockUserAgentLibrary;
