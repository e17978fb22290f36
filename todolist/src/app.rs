//! Application state and event handling.
//!
//! `App` is the render layer's half of the system: it owns the
//! [`TaskListController`], the new-task draft, focus, and list selection,
//! and turns key presses into controller operations.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use todolist_core::{Task, TaskId, TaskListController};

use crate::config::ClientConfig;

/// Which panel is currently focused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelFocus {
    /// New-task input box is focused (default).
    Input,
    /// Task list is focused.
    List,
}

/// Single-line text buffer with a character-indexed cursor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputLine {
    /// Current text.
    pub text: String,
    /// Cursor position (character index, not byte index).
    pub cursor: usize,
}

impl InputLine {
    /// Creates a buffer holding `text` with the cursor at the end.
    #[must_use]
    pub fn with_text(text: &str) -> Self {
        Self {
            text: text.to_string(),
            cursor: text.chars().count(),
        }
    }

    /// Empties the buffer.
    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }

    /// Insert a character at the cursor position.
    pub fn insert(&mut self, c: char) {
        let at = self.byte_index();
        self.text.insert(at, c);
        self.cursor += 1;
    }

    /// Delete the character before the cursor.
    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            let at = self.byte_index();
            self.text.remove(at);
        }
    }

    /// Move cursor left.
    pub const fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Move cursor right.
    pub fn move_right(&mut self) {
        if self.cursor < self.text.chars().count() {
            self.cursor += 1;
        }
    }

    /// Move cursor to the start.
    pub const fn home(&mut self) {
        self.cursor = 0;
    }

    /// Move cursor past the last character.
    pub fn end(&mut self) {
        self.cursor = self.text.chars().count();
    }

    /// Applies a text-editing key. Returns `true` if the text changed.
    fn apply_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Char(c) => {
                self.insert(c);
                true
            }
            KeyCode::Backspace => {
                let before = self.text.len();
                self.backspace();
                before != self.text.len()
            }
            KeyCode::Left => {
                self.move_left();
                false
            }
            KeyCode::Right => {
                self.move_right();
                false
            }
            KeyCode::Home => {
                self.home();
                false
            }
            KeyCode::End => {
                self.end();
                false
            }
            _ => false,
        }
    }

    fn byte_index(&self) -> usize {
        self.text
            .char_indices()
            .nth(self.cursor)
            .map_or(self.text.len(), |(i, _)| i)
    }
}

/// Main application state.
pub struct App {
    /// Task list and edit session.
    pub controller: TaskListController,
    /// Pending new-task text.
    pub input: InputLine,
    /// Working copy of the edit session's text, with its own cursor.
    pub edit_input: InputLine,
    /// Which panel is focused.
    pub focus: PanelFocus,
    /// Selected task index in the list.
    pub selected: usize,
    /// Heading shown above the list.
    pub title: String,
    /// Hint shown in the empty input box.
    pub placeholder: String,
    /// chrono format for creation times.
    pub timestamp_format: String,
    /// Whether the app should quit.
    pub should_quit: bool,
}

impl App {
    /// Create an empty application with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::from_config(&ClientConfig::default())
    }

    /// Create an application from resolved configuration, seeding any
    /// initial tasks through the controller.
    #[must_use]
    pub fn from_config(config: &ClientConfig) -> Self {
        let mut controller = TaskListController::new();
        for text in &config.initial_tasks {
            controller.add_task(text.as_str());
        }

        Self {
            controller,
            input: InputLine::default(),
            edit_input: InputLine::default(),
            focus: PanelFocus::Input,
            selected: 0,
            title: config.title.clone(),
            placeholder: config.placeholder.clone(),
            timestamp_format: config.timestamp_format.clone(),
            should_quit: false,
        }
    }

    /// Returns `true` while an edit session is active.
    #[must_use]
    pub const fn is_editing(&self) -> bool {
        self.controller.edit_session().is_some()
    }

    /// The task under the list selection, if any.
    #[must_use]
    pub fn selected_task(&self) -> Option<&Task> {
        self.controller.tasks().get(self.selected)
    }

    /// Handle a key event.
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if let (KeyCode::Char('c'), KeyModifiers::CONTROL) = (key.code, key.modifiers) {
            self.should_quit = true;
            return;
        }

        // An open edit form captures all input until saved or cancelled.
        if self.is_editing() {
            self.handle_edit_key(key);
            return;
        }

        match key.code {
            KeyCode::Esc => {
                self.should_quit = true;
                return;
            }
            KeyCode::Tab | KeyCode::BackTab => {
                self.toggle_focus();
                return;
            }
            _ => {}
        }

        match self.focus {
            PanelFocus::Input => self.handle_input_key(key),
            PanelFocus::List => self.handle_list_key(key),
        }
    }

    /// Handle key event when the new-task input is focused.
    fn handle_input_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Enter {
            self.submit_new_task();
        } else {
            self.input.apply_key(key);
        }
    }

    /// Handle key event when the task list is focused.
    fn handle_list_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.select_prev(),
            KeyCode::Down | KeyCode::Char('j') => self.select_next(),
            KeyCode::Char(' ' | 's') => self.cycle_selected(),
            KeyCode::Char('e') | KeyCode::Enter => self.edit_selected(),
            KeyCode::Char('d') | KeyCode::Delete => self.delete_selected(),
            _ => {}
        }
    }

    /// Handle key event while the edit form is open.
    fn handle_edit_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter => {
                if self.controller.commit_edit() {
                    self.edit_input.clear();
                }
            }
            KeyCode::Esc => {
                self.controller.cancel_edit();
                self.edit_input.clear();
            }
            _ => {
                if self.edit_input.apply_key(key) {
                    self.controller.set_edit_value(self.edit_input.text.clone());
                }
            }
        }
    }

    /// Switch focus between the input box and the list.
    const fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            PanelFocus::Input => PanelFocus::List,
            PanelFocus::List => PanelFocus::Input,
        };
    }

    /// Submit the draft as a new task. The draft is kept if it was blank.
    fn submit_new_task(&mut self) {
        if let Some(id) = self.controller.add_task(self.input.text.clone()) {
            tracing::debug!(task_id = %id, "task added from input");
            self.input.clear();
        }
    }

    fn selected_id(&self) -> Option<TaskId> {
        self.selected_task().map(|t| t.id.clone())
    }

    fn cycle_selected(&mut self) {
        if let Some(id) = self.selected_id() {
            self.controller.cycle_status(&id);
        }
    }

    fn edit_selected(&mut self) {
        if let Some(id) = self.selected_id()
            && self.controller.begin_edit(&id)
            && let Some(session) = self.controller.edit_session()
        {
            self.edit_input = InputLine::with_text(&session.edit_value);
        }
    }

    fn delete_selected(&mut self) {
        if let Some(id) = self.selected_id()
            && self.controller.delete_task(&id)
        {
            self.clamp_selection();
        }
    }

    /// Select the previous task.
    const fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Select the next task.
    fn select_next(&mut self) {
        if self.selected < self.controller.len().saturating_sub(1) {
            self.selected += 1;
        }
    }

    fn clamp_selection(&mut self) {
        self.selected = self.selected.min(self.controller.len().saturating_sub(1));
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
