//! Bundled user-agent library backend

pub mod endpoint;
pub mod module;
pub mod pool;

pub use endpoint::{Endpoint, LibraryInfo, UaState, MAX_CALLS_LIMIT};
pub use module::{Module, ModuleRegistry};
pub use pool::MemoryPool;
