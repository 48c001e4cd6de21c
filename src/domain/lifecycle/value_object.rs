//! Lifecycle value objects

use serde::{Deserialize, Serialize};

/// Where a library handle is in its create/destroy lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LifecycleState {
    /// Create has not been called or did not succeed
    NotInitialized,
    /// Create returned the success sentinel
    Initialized,
    /// Destroy has been called (terminal)
    Destroyed,
}

impl LifecycleState {
    /// Check if state transition is valid
    pub fn can_transition_to(&self, new_state: &LifecycleState) -> bool {
        use LifecycleState::*;

        matches!(
            (self, new_state),
            (NotInitialized, Initialized) | (Initialized, Destroyed)
        )
    }
}
