//! New-task input box rendering.

use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::theme;
use crate::app::{App, InputLine, PanelFocus};

/// Render the new-task input box.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let is_focused = app.focus == PanelFocus::Input && !app.is_editing();

    let input_line = if app.input.text.is_empty() && !is_focused {
        Line::from(Span::styled(app.placeholder.as_str(), theme::dimmed()))
    } else {
        Line::from(Span::styled(
            with_cursor(&app.input, is_focused),
            theme::normal(),
        ))
    };

    let block = Block::default()
        .title("New task")
        .borders(Borders::ALL)
        .border_style(if is_focused {
            theme::highlighted()
        } else {
            theme::normal()
        });

    let paragraph = Paragraph::new(input_line).block(block);

    frame.render_widget(paragraph, area);
}

/// Returns the buffer text with a block cursor inserted when `show` is set.
#[must_use]
pub fn with_cursor(line: &InputLine, show: bool) -> String {
    if !show {
        return line.text.clone();
    }
    let mut display: String = line.text.chars().take(line.cursor).collect();
    display.push('█');
    display.extend(line.text.chars().skip(line.cursor));
    display
}
