//! Integration tests for the task list controller.
//!
//! Drives `TaskListController` through the add / cycle / edit / delete
//! workflow the terminal front-end uses.

#![allow(clippy::expect_used, clippy::unwrap_used)]

use todolist_core::{TaskId, TaskListController, TaskStatus};

// ---------------------------------------------------------------------------
// Helper functions
// ---------------------------------------------------------------------------

/// Creates a controller holding the given task texts, in order.
fn seeded(texts: &[&str]) -> (TaskListController, Vec<TaskId>) {
    let mut ctl = TaskListController::new();
    let ids = texts
        .iter()
        .map(|t| ctl.add_task(*t).expect("non-blank text is added"))
        .collect();
    (ctl, ids)
}

fn texts(ctl: &TaskListController) -> Vec<String> {
    ctl.tasks().iter().map(|t| t.text.clone()).collect()
}

// ===========================================================================
// Full workflow
// ===========================================================================

#[test]
fn buy_milk_scenario() {
    let mut ctl = TaskListController::new();
    assert!(ctl.is_empty());

    let id = ctl.add_task("Buy milk").unwrap();
    assert_eq!(ctl.len(), 1);
    assert_eq!(ctl.tasks()[0].text, "Buy milk");
    assert_eq!(ctl.tasks()[0].status, TaskStatus::NotDone);

    assert_eq!(ctl.cycle_status(&id), Some(TaskStatus::InProgress));

    assert!(ctl.begin_edit(&id));
    assert!(ctl.save_edit("Buy oat milk"));
    let task = ctl.get(&id).unwrap();
    assert_eq!(task.text, "Buy oat milk");
    assert_eq!(task.status, TaskStatus::InProgress);
    assert!(ctl.edit_session().is_none());

    assert!(ctl.delete_task(&id));
    assert!(ctl.is_empty());
}

// ===========================================================================
// add
// ===========================================================================

#[test]
fn add_grows_list_by_one_at_end() {
    let (mut ctl, _) = seeded(&["one", "two"]);
    let id = ctl.add_task("three").unwrap();
    assert_eq!(ctl.len(), 3);
    assert_eq!(ctl.position(&id), Some(2));
    assert_eq!(ctl.tasks()[2].status, TaskStatus::NotDone);
}

#[test]
fn add_whitespace_only_leaves_list_unchanged() {
    let (mut ctl, _) = seeded(&["one"]);
    let before = ctl.snapshot();
    for blank in ["", " ", "   ", "\t", "\n\r", "\u{3000}"] {
        assert!(ctl.add_task(blank).is_none(), "{blank:?} should be ignored");
    }
    assert_eq!(ctl.snapshot(), before);
}

// ===========================================================================
// delete
// ===========================================================================

#[test]
fn delete_removes_exactly_one() {
    let (mut ctl, ids) = seeded(&["a", "b", "c", "d"]);
    ctl.cycle_status(&ids[3]);
    assert!(ctl.delete_task(&ids[2]));
    assert_eq!(texts(&ctl), ["a", "b", "d"]);
    assert_eq!(ctl.get(&ids[3]).unwrap().status, TaskStatus::InProgress);
}

#[test]
fn delete_twice_is_noop_second_time() {
    let (mut ctl, ids) = seeded(&["a", "b"]);
    assert!(ctl.delete_task(&ids[0]));
    assert!(!ctl.delete_task(&ids[0]));
    assert_eq!(texts(&ctl), ["b"]);
}

#[test]
fn delete_edited_task_clears_edit_session() {
    let (mut ctl, ids) = seeded(&["a", "b"]);
    ctl.begin_edit(&ids[1]);
    ctl.set_edit_value("half-typed");
    ctl.delete_task(&ids[1]);
    assert!(ctl.edit_session().is_none());
    // A later save has nothing to write into.
    assert!(!ctl.save_edit("late"));
    assert_eq!(texts(&ctl), ["a"]);
}

// ===========================================================================
// cycle
// ===========================================================================

#[test]
fn cycle_three_times_returns_to_start() {
    let (mut ctl, ids) = seeded(&["a"]);
    for start in TaskStatus::ALL {
        assert_eq!(ctl.get(&ids[0]).unwrap().status, start);
        ctl.cycle_status(&ids[0]);
        ctl.cycle_status(&ids[0]);
        ctl.cycle_status(&ids[0]);
        assert_eq!(ctl.get(&ids[0]).unwrap().status, start);
        ctl.cycle_status(&ids[0]);
    }
}

#[test]
fn cycle_preserves_order() {
    let (mut ctl, ids) = seeded(&["a", "b", "c"]);
    ctl.cycle_status(&ids[0]);
    ctl.cycle_status(&ids[2]);
    ctl.cycle_status(&ids[2]);
    assert_eq!(texts(&ctl), ["a", "b", "c"]);
}

#[test]
fn cycle_on_edited_task_keeps_session() {
    let (mut ctl, ids) = seeded(&["a"]);
    ctl.begin_edit(&ids[0]);
    ctl.cycle_status(&ids[0]);
    assert!(ctl.is_editing(&ids[0]));
    ctl.save_edit("a2");
    assert_eq!(ctl.get(&ids[0]).unwrap().status, TaskStatus::InProgress);
}

// ===========================================================================
// edit
// ===========================================================================

#[test]
fn save_updates_only_target() {
    let (mut ctl, ids) = seeded(&["a", "b", "c"]);
    ctl.begin_edit(&ids[0]);
    ctl.save_edit("alpha");
    assert_eq!(texts(&ctl), ["alpha", "b", "c"]);
}

#[test]
fn blank_save_keeps_text_and_session() {
    let (mut ctl, ids) = seeded(&["a"]);
    ctl.begin_edit(&ids[0]);
    assert!(!ctl.save_edit(" \t "));
    assert_eq!(texts(&ctl), ["a"]);
    let session = ctl.edit_session().unwrap();
    assert_eq!(session.editing_id, ids[0]);
}

#[test]
fn saved_text_keeps_surrounding_whitespace() {
    let (mut ctl, ids) = seeded(&["a"]);
    ctl.begin_edit(&ids[0]);
    ctl.save_edit("  padded  ");
    assert_eq!(texts(&ctl), ["  padded  "]);
}

#[test]
fn only_one_task_editable_at_a_time() {
    let (mut ctl, ids) = seeded(&["a", "b"]);
    ctl.begin_edit(&ids[0]);
    ctl.begin_edit(&ids[1]);
    assert!(!ctl.is_editing(&ids[0]));
    assert!(ctl.is_editing(&ids[1]));
    ctl.save_edit("bee");
    assert_eq!(texts(&ctl), ["a", "bee"]);
}

#[test]
fn cancel_discards_edit_value() {
    let (mut ctl, ids) = seeded(&["keep"]);
    ctl.begin_edit(&ids[0]);
    ctl.set_edit_value("discard");
    ctl.cancel_edit();
    assert_eq!(texts(&ctl), ["keep"]);
    assert!(!ctl.commit_edit());
}

// ===========================================================================
// snapshots
// ===========================================================================

#[test]
fn snapshot_reflects_every_mutation() {
    let mut ctl = TaskListController::new();
    let s0 = ctl.snapshot();
    let id = ctl.add_task("a").unwrap();
    let s1 = ctl.snapshot();
    ctl.cycle_status(&id);
    let s2 = ctl.snapshot();

    assert!(s0.tasks.is_empty());
    assert_eq!(s1.tasks[0].status, TaskStatus::NotDone);
    assert_eq!(s2.tasks[0].status, TaskStatus::InProgress);
    assert!(s0.version < s1.version && s1.version < s2.version);
}

#[test]
fn noop_calls_do_not_bump_version() {
    let (mut ctl, _) = seeded(&["a"]);
    let v = ctl.version();
    let stranger = TaskId::new();
    ctl.add_task("  ");
    ctl.delete_task(&stranger);
    ctl.cycle_status(&stranger);
    ctl.begin_edit(&stranger);
    ctl.save_edit("x");
    ctl.cancel_edit();
    ctl.set_edit_value("x");
    assert_eq!(ctl.version(), v);
}
