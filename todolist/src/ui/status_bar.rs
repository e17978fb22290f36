//! Status bar rendering.

use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
};
use todolist_core::TaskStatus;

use super::theme;
use crate::app::{App, PanelFocus};

/// Render the status bar at the bottom of the screen.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let help_text = help_text(app);
    let counts = app.controller.status_counts();

    let status_line = Line::from(vec![
        Span::styled(format!("{} tasks", counts.total()), theme::bold()),
        Span::raw(" | "),
        Span::styled("●", theme::normal().fg(theme::status_color(TaskStatus::NotDone))),
        Span::raw(format!(" {} ", counts.not_done)),
        Span::styled("●", theme::normal().fg(theme::status_color(TaskStatus::InProgress))),
        Span::raw(format!(" {} ", counts.in_progress)),
        Span::styled("●", theme::normal().fg(theme::status_color(TaskStatus::Done))),
        Span::raw(format!(" {}", counts.done)),
        Span::raw(" | "),
        Span::styled(help_text, theme::dimmed()),
    ]);

    let paragraph = Paragraph::new(status_line).style(theme::status_bar_bg());
    frame.render_widget(paragraph, area);
}

/// Key hints for the current mode.
#[must_use]
pub const fn help_text(app: &App) -> &'static str {
    if app.is_editing() {
        return "Enter: save | Esc: cancel | ←→: move cursor";
    }
    match app.focus {
        PanelFocus::Input => "Enter: add | Tab: switch panel | Esc: quit | ←→: move cursor",
        PanelFocus::List => {
            "Tab: switch panel | ↑↓/jk: navigate | Space: cycle status | e: edit | d: delete | Esc: quit"
        }
    }
}
