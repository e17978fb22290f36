//! Theme and styling constants for the TUI.

use ratatui::style::{Color, Modifier, Style};
use todolist_core::TaskStatus;

/// Primary foreground color.
pub const FG_PRIMARY: Color = Color::White;

/// Secondary foreground color (dimmed text).
pub const FG_SECONDARY: Color = Color::Gray;

/// Accent color for the title and focused borders.
pub const ACCENT: Color = Color::Rgb(100, 108, 255);

/// Badge background for tasks not yet started.
pub const NOT_DONE: Color = Color::Rgb(249, 115, 22);

/// Badge background for tasks in progress.
pub const IN_PROGRESS: Color = Color::Rgb(59, 130, 246);

/// Badge background for finished tasks.
pub const DONE: Color = Color::Rgb(34, 197, 94);

/// Normal text style.
#[must_use]
pub fn normal() -> Style {
    Style::default().fg(FG_PRIMARY)
}

/// Dimmed text style (timestamps, hints).
#[must_use]
pub fn dimmed() -> Style {
    Style::default().fg(FG_SECONDARY)
}

/// Bold text style.
#[must_use]
pub fn bold() -> Style {
    Style::default().fg(FG_PRIMARY).add_modifier(Modifier::BOLD)
}

/// Highlighted text style (focused panel borders).
#[must_use]
pub fn highlighted() -> Style {
    Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
}

/// Selected row style.
#[must_use]
pub fn selected() -> Style {
    Style::default()
        .bg(Color::Rgb(42, 42, 42))
        .add_modifier(Modifier::BOLD)
}

/// Style for the heading above the list.
#[must_use]
pub fn title() -> Style {
    Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
}

/// Badge color for a status.
#[must_use]
pub const fn status_color(status: TaskStatus) -> Color {
    match status {
        TaskStatus::NotDone => NOT_DONE,
        TaskStatus::InProgress => IN_PROGRESS,
        TaskStatus::Done => DONE,
    }
}

/// Style for the clickable status badge.
#[must_use]
pub fn status_badge(status: TaskStatus) -> Style {
    let fg = match status {
        TaskStatus::NotDone => Color::Black,
        TaskStatus::InProgress | TaskStatus::Done => Color::White,
    };
    Style::default()
        .fg(fg)
        .bg(status_color(status))
        .add_modifier(Modifier::BOLD)
}

/// Style for a task's text, depending on its status.
#[must_use]
pub fn status_text(status: TaskStatus) -> Style {
    match status {
        TaskStatus::NotDone => normal(),
        TaskStatus::InProgress => bold(),
        TaskStatus::Done => Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::CROSSED_OUT | Modifier::DIM),
    }
}

/// Style for the text being edited.
#[must_use]
pub fn edit_field() -> Style {
    Style::default().fg(Color::White).bg(Color::Rgb(51, 51, 51))
}

/// Style for the status bar background (dark background with white foreground).
#[must_use]
pub fn status_bar_bg() -> Style {
    Style::default().fg(Color::White).bg(Color::Rgb(26, 26, 26))
}
