//! Popup state and key handling.

use crate::view::SharedView;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::sync::Arc;

const SPINNER: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// What a key press asks the event loop to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Press the summarize control
    Activate,
    Quit,
}

pub struct App {
    view: Arc<SharedView>,
    tick: usize,
}

impl App {
    pub fn new(view: Arc<SharedView>) -> Self {
        Self { view, tick: 0 }
    }

    pub fn view(&self) -> &Arc<SharedView> {
        &self.view
    }

    /// Apply a key press. Text editing happens here; anything the event loop
    /// must act on comes back as an [`Action`].
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<Action> {
        if key.kind != KeyEventKind::Press {
            return None;
        }

        match key.code {
            KeyCode::Esc => Some(Action::Quit),
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(Action::Quit)
            }
            KeyCode::Enter => Some(Action::Activate),
            KeyCode::Backspace => {
                self.view.edit_input(|input| {
                    input.pop();
                });
                None
            }
            KeyCode::Char(c) => {
                self.view.edit_input(|input| input.push(c));
                None
            }
            _ => None,
        }
    }

    /// Bulk insert, e.g. from a bracketed paste
    pub fn handle_paste(&mut self, text: &str) {
        self.view.edit_input(|input| input.push_str(text));
    }

    pub fn on_tick(&mut self) {
        self.tick = self.tick.wrapping_add(1);
    }

    pub fn spinner_frame(&self) -> &'static str {
        SPINNER[self.tick % SPINNER.len()]
    }
}
