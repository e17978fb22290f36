//! `todolist` — terminal front-end for the in-memory task list.

pub mod app;
pub mod config;
pub mod ui;
