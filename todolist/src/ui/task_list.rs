//! Task list rendering.
//!
//! Each row shows the task text styled by status, a status badge, and the
//! creation time. The row being edited is replaced by an inline edit form.

use std::fmt::Write as _;

use chrono::{Local, TimeZone};
use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};
use todolist_core::Task;

use super::{input_box, theme};
use crate::app::{App, PanelFocus};

/// Render the task list, or a hint when it is empty.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let is_focused = app.focus == PanelFocus::List || app.is_editing();

    let block = Block::default()
        .title(Span::styled(app.title.as_str(), theme::title()))
        .borders(Borders::ALL)
        .border_style(if is_focused {
            theme::highlighted()
        } else {
            theme::normal()
        });

    if app.controller.is_empty() {
        let hint = Paragraph::new(Line::from(Span::styled(
            "Nothing to do yet. Type a task and press Enter.",
            theme::dimmed(),
        )))
        .block(block);
        frame.render_widget(hint, area);
        return;
    }

    let items: Vec<ListItem> = app
        .controller
        .tasks()
        .iter()
        .map(|task| {
            if app.controller.is_editing(&task.id) {
                edit_row(app)
            } else {
                task_row(task, &app.timestamp_format)
            }
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(theme::selected())
        .highlight_symbol("> ");

    let mut state = ListState::default();
    if is_focused {
        state.select(Some(app.selected));
    }

    frame.render_stateful_widget(list, area, &mut state);
}

/// A regular row: text, badge, creation time.
fn task_row<'a>(task: &'a Task, timestamp_format: &str) -> ListItem<'a> {
    let line = Line::from(vec![
        Span::styled(task.text.as_str(), theme::status_text(task.status)),
        Span::raw("  "),
        Span::styled(
            format!(" {} ", task.status.label().to_uppercase()),
            theme::status_badge(task.status),
        ),
        Span::raw(" "),
        Span::styled(
            format_created_at(task.created_at, timestamp_format),
            theme::dimmed(),
        ),
    ]);
    ListItem::new(line)
}

/// The inline edit form for the task being edited.
fn edit_row(app: &App) -> ListItem<'static> {
    let line = Line::from(vec![
        Span::styled(
            input_box::with_cursor(&app.edit_input, true),
            theme::edit_field(),
        ),
        Span::raw("  "),
        Span::styled("Enter: save", theme::dimmed()),
        Span::raw(" | "),
        Span::styled("Esc: cancel", theme::dimmed()),
    ]);
    ListItem::new(line)
}

/// Format an epoch-millisecond timestamp with a chrono format string.
///
/// Invalid format strings fall back to `"??:??"` instead of panicking.
#[must_use]
pub fn format_created_at(ms: u64, format: &str) -> String {
    let Ok(millis) = i64::try_from(ms) else {
        return "??:??".to_string();
    };
    let chrono::LocalResult::Single(dt) = Local.timestamp_millis_opt(millis) else {
        return "??:??".to_string();
    };

    let mut out = String::new();
    if write!(out, "{}", dt.format(format)).is_err() {
        return "??:??".to_string();
    }
    out
}
