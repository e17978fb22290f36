//! Rendering tests against ratatui's `TestBackend`.
//!
//! Checks that the draw pass reads the controller state: titles, badges,
//! the inline edit form, and the status bar counts.

#![allow(clippy::expect_used, clippy::unwrap_used)]

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{Terminal, backend::TestBackend};
use todolist::app::App;
use todolist::config::ClientConfig;
use todolist::ui;

fn render(app: &App) -> String {
    let backend = TestBackend::new(110, 12);
    let mut terminal = Terminal::new(backend).expect("test terminal");
    terminal
        .draw(|frame| ui::draw(frame, app))
        .expect("draw succeeds");
    terminal
        .backend()
        .buffer()
        .content()
        .iter()
        .map(ratatui::buffer::Cell::symbol)
        .collect()
}

fn app_with(tasks: &[&str]) -> App {
    let config = ClientConfig {
        initial_tasks: tasks.iter().map(ToString::to_string).collect(),
        ..ClientConfig::default()
    };
    App::from_config(&config)
}

fn press(app: &mut App, code: KeyCode) {
    app.handle_key_event(KeyEvent::new(code, KeyModifiers::NONE));
}

#[test]
fn empty_list_shows_title_placeholder_and_hint() {
    let mut app = App::new();
    press(&mut app, KeyCode::Tab);
    let screen = render(&app);
    assert!(screen.contains("My To-Do List"));
    assert!(screen.contains("Add a new task..."));
    assert!(screen.contains("Nothing to do yet"));
    assert!(screen.contains("0 tasks"));
}

#[test]
fn custom_title_is_rendered() {
    let config = ClientConfig {
        title: "Chores".to_string(),
        ..ClientConfig::default()
    };
    let screen = render(&App::from_config(&config));
    assert!(screen.contains("Chores"));
    assert!(!screen.contains("My To-Do List"));
}

#[test]
fn rows_show_text_and_status_badges() {
    let mut app = app_with(&["Buy milk", "Walk dog", "Pay rent"]);
    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Char(' '));
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Char(' '));
    press(&mut app, KeyCode::Char(' '));

    let screen = render(&app);
    assert!(screen.contains("Buy milk"));
    assert!(screen.contains("NOT DONE"));
    assert!(screen.contains("ON PROGRESS"));
    // One "NOT DONE" badge plus one "DONE" badge.
    assert_eq!(screen.matches("DONE").count(), 2);
    assert!(screen.contains("3 tasks"));
}

#[test]
fn edited_row_shows_edit_form() {
    let mut app = app_with(&["Buy milk"]);
    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Char('e'));
    press(&mut app, KeyCode::Char('!'));

    let screen = render(&app);
    assert!(screen.contains("Buy milk!"));
    assert!(screen.contains("Enter: save"));
    assert!(screen.contains("Esc: cancel"));
    assert!(!screen.contains("NOT DONE"));
}

#[test]
fn draft_is_rendered_in_input_box() {
    let mut app = App::new();
    for c in "Call mum".chars() {
        press(&mut app, KeyCode::Char(c));
    }
    let screen = render(&app);
    assert!(screen.contains("Call mum"));
    assert!(!screen.contains("Add a new task..."));
}
