//! In-memory task list model and controller for `todolist`.

pub mod controller;
pub mod task;

pub use controller::{EditSession, StatusCounts, TaskListController, TaskListSnapshot};
pub use task::{Task, TaskId, TaskStatus};
