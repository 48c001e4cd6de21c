//! Lifecycle events

use crate::domain::shared::value_objects::ProbeId;
use crate::domain::status::StatusCode;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LifecycleEventKind {
    Initialized,
    InitializationFailed,
    Destroyed,
}

impl LifecycleEventKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            LifecycleEventKind::Initialized => "lifecycle.initialized",
            LifecycleEventKind::InitializationFailed => "lifecycle.initialization_failed",
            LifecycleEventKind::Destroyed => "lifecycle.destroyed",
        }
    }
}

/// Something that happened to the library during a probe run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LifecycleEvent {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub probe_id: ProbeId,
    pub kind: LifecycleEventKind,
    /// Status returned by the library call behind this event
    pub status: StatusCode,
}

impl LifecycleEvent {
    pub fn new(probe_id: ProbeId, kind: LifecycleEventKind, status: StatusCode) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            probe_id,
            kind,
            status,
        }
    }

    pub fn event_type(&self) -> &'static str {
        self.kind.as_str()
    }
}
