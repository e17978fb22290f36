//! Task list controller: owns the tasks and the single edit session.
//!
//! `TaskListController` is the only place task state is mutated. Every
//! operation is total: blank text and unknown ids are ignored rather than
//! reported, and the return value tells the caller whether anything changed.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::task::{Task, TaskId, TaskStatus, is_blank};

/// The task currently being text-edited, if any.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditSession {
    /// Task being edited. Always refers to a task present in the list.
    pub editing_id: TaskId,
    /// Working text, seeded from the task's text when the edit began.
    pub edit_value: String,
}

/// Number of tasks in each status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusCounts {
    /// Tasks in [`TaskStatus::NotDone`].
    pub not_done: usize,
    /// Tasks in [`TaskStatus::InProgress`].
    pub in_progress: usize,
    /// Tasks in [`TaskStatus::Done`].
    pub done: usize,
}

impl StatusCounts {
    /// Total number of tasks counted.
    #[must_use]
    pub const fn total(&self) -> usize {
        self.not_done + self.in_progress + self.done
    }
}

/// Owned copy of the controller state at a point in time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskListSnapshot {
    /// Tasks in display order.
    pub tasks: Vec<Task>,
    /// Active edit session, if any.
    pub editing: Option<EditSession>,
    /// Controller version the snapshot was taken at.
    pub version: u64,
}

/// Manages an ordered, in-memory task list and its edit session.
///
/// Insertion order is display order. Only [`delete_task`](Self::delete_task)
/// removes tasks, and deleting the edited task ends the edit session in the
/// same call.
#[derive(Debug, Default)]
pub struct TaskListController {
    /// Tasks in insertion order.
    tasks: Vec<Task>,
    /// At most one task is editable at a time.
    editing: Option<EditSession>,
    /// Bumped on every observable change.
    version: u64,
}

impl TaskListController {
    /// Creates an empty controller.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a new `NotDone` task.
    ///
    /// Returns `None` without touching the list if `text` is blank. The text
    /// is stored exactly as given; only the blank check trims. A `Some`
    /// return is the caller's cue to clear its new-task input.
    pub fn add_task(&mut self, text: impl Into<String>) -> Option<TaskId> {
        let text = text.into();
        if is_blank(&text) {
            debug!("ignoring blank task text");
            return None;
        }

        let task = Task::new(text);
        let id = task.id.clone();
        trace!(task_id = %id, "task added");
        self.tasks.push(task);
        self.bump();
        Some(id)
    }

    /// Removes the task with the given id.
    ///
    /// Returns `false` if no such task exists. Clears the edit session when
    /// the removed task was the one being edited.
    pub fn delete_task(&mut self, id: &TaskId) -> bool {
        let Some(index) = self.position(id) else {
            debug!(task_id = %id, "delete of unknown task ignored");
            return false;
        };

        self.tasks.remove(index);
        if self.is_editing(id) {
            self.editing = None;
        }
        trace!(task_id = %id, "task deleted");
        self.bump();
        true
    }

    /// Starts editing the task with the given id, replacing any prior session.
    ///
    /// The edit value starts as the task's current text. Returns `false` if
    /// the id is not in the list.
    pub fn begin_edit(&mut self, id: &TaskId) -> bool {
        let Some(task) = self.get(id) else {
            debug!(task_id = %id, "edit of unknown task ignored");
            return false;
        };

        let session = EditSession {
            editing_id: task.id.clone(),
            edit_value: task.text.clone(),
        };
        if self.editing.as_ref() != Some(&session) {
            self.editing = Some(session);
            trace!(task_id = %id, "edit started");
            self.bump();
        }
        true
    }

    /// Replaces the working text of the active edit session.
    ///
    /// Returns `false` if no edit is in progress or the value is unchanged.
    pub fn set_edit_value(&mut self, value: impl Into<String>) -> bool {
        let Some(session) = self.editing.as_mut() else {
            return false;
        };
        let value = value.into();
        if session.edit_value == value {
            return false;
        }
        session.edit_value = value;
        self.bump();
        true
    }

    /// Writes `new_text` into the edited task and ends the session.
    ///
    /// Blank text is ignored and leaves the session active. Status and
    /// position of the task are untouched. Returns `false` if nothing was
    /// saved.
    pub fn save_edit(&mut self, new_text: &str) -> bool {
        let Some(session) = self.editing.as_ref() else {
            debug!("save without an edit session ignored");
            return false;
        };
        if is_blank(new_text) {
            debug!(task_id = %session.editing_id, "ignoring blank edit");
            return false;
        }

        let id = session.editing_id.clone();
        if let Some(task) = self.tasks.iter_mut().find(|t| t.id == id) {
            task.text = new_text.to_string();
        }
        self.editing = None;
        trace!(task_id = %id, "edit saved");
        self.bump();
        true
    }

    /// Saves the active session's own edit value.
    pub fn commit_edit(&mut self) -> bool {
        let Some(value) = self.editing.as_ref().map(|s| s.edit_value.clone()) else {
            return false;
        };
        self.save_edit(&value)
    }

    /// Ends the edit session without changing any task.
    ///
    /// Returns `false` if there was nothing to cancel.
    pub fn cancel_edit(&mut self) -> bool {
        if self.editing.take().is_none() {
            return false;
        }
        trace!("edit cancelled");
        self.bump();
        true
    }

    /// Advances a task to the next status in the cycle.
    ///
    /// Returns the new status, or `None` if the id is unknown.
    pub fn cycle_status(&mut self, id: &TaskId) -> Option<TaskStatus> {
        let Some(task) = self.tasks.iter_mut().find(|t| &t.id == id) else {
            debug!(task_id = %id, "status cycle of unknown task ignored");
            return None;
        };

        task.status = task.status.next();
        let status = task.status;
        trace!(task_id = %id, %status, "status cycled");
        self.bump();
        Some(status)
    }

    /// Tasks in display order.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Looks up a task by id.
    #[must_use]
    pub fn get(&self, id: &TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| &t.id == id)
    }

    /// Index of a task in display order.
    #[must_use]
    pub fn position(&self, id: &TaskId) -> Option<usize> {
        self.tasks.iter().position(|t| &t.id == id)
    }

    /// Number of tasks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Returns `true` if the list has no tasks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// The active edit session, if any.
    #[must_use]
    pub const fn edit_session(&self) -> Option<&EditSession> {
        self.editing.as_ref()
    }

    /// Returns `true` if the given task is the one being edited.
    #[must_use]
    pub fn is_editing(&self, id: &TaskId) -> bool {
        self.editing.as_ref().is_some_and(|s| &s.editing_id == id)
    }

    /// Monotonic counter of observable changes.
    #[must_use]
    pub const fn version(&self) -> u64 {
        self.version
    }

    /// Tally of tasks per status.
    #[must_use]
    pub fn status_counts(&self) -> StatusCounts {
        self.tasks
            .iter()
            .fold(StatusCounts::default(), |mut counts, task| {
                match task.status {
                    TaskStatus::NotDone => counts.not_done += 1,
                    TaskStatus::InProgress => counts.in_progress += 1,
                    TaskStatus::Done => counts.done += 1,
                }
                counts
            })
    }

    /// Owned copy of the current state.
    #[must_use]
    pub fn snapshot(&self) -> TaskListSnapshot {
        TaskListSnapshot {
            tasks: self.tasks.clone(),
            editing: self.editing.clone(),
            version: self.version,
        }
    }

    const fn bump(&mut self) {
        self.version = self.version.wrapping_add(1);
    }
}
