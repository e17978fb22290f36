//! Task model for the to-do list.
//!
//! A [`Task`] is a single entry with a stable [`TaskId`], its text, and a
//! [`TaskStatus`] that moves through a fixed three-state cycle.

use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a task, based on UUID v7 for time-ordering.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TaskId(Uuid);

impl TaskId {
    /// Creates a new time-ordered task identifier (UUID v7).
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    /// Creates a `TaskId` from an existing UUID.
    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the inner UUID value.
    #[must_use]
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for TaskId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for TaskId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Status of a task.
///
/// Statuses form a cycle with no terminal state:
/// `NotDone -> InProgress -> Done -> NotDone`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TaskStatus {
    /// Task has not been started. Every new task begins here.
    #[default]
    NotDone,
    /// Task is actively being worked on.
    InProgress,
    /// Task has been completed.
    Done,
}

impl TaskStatus {
    /// All statuses in cycle order.
    pub const ALL: [Self; 3] = [Self::NotDone, Self::InProgress, Self::Done];

    /// Returns the successor of this status in the cycle.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::NotDone => Self::InProgress,
            Self::InProgress => Self::Done,
            Self::Done => Self::NotDone,
        }
    }

    /// Human-readable label shown on the status badge.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::NotDone => "Not done",
            Self::InProgress => "On progress",
            Self::Done => "Done",
        }
    }
}

impl std::fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A single to-do entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Stable identifier, assigned at creation.
    pub id: TaskId,
    /// Task text as entered. Never blank, but not trimmed either.
    pub text: String,
    /// Current position in the status cycle.
    pub status: TaskStatus,
    /// When the task was created (milliseconds since epoch). Display only.
    pub created_at: u64,
}

impl Task {
    /// Creates a `NotDone` task with a fresh id, stamped with the current time.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            id: TaskId::new(),
            text: text.into(),
            status: TaskStatus::NotDone,
            created_at: now_ms(),
        }
    }
}

/// Returns the current timestamp in milliseconds since epoch.
fn now_ms() -> u64 {
    u64::try_from(
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis(),
    )
    .unwrap_or(u64::MAX)
}

/// Returns `true` if `text` contains nothing but whitespace.
#[must_use]
pub fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}
