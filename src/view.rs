//! The popup's display surface and the states it can show.

use std::sync::{Mutex, MutexGuard};

/// The four mutually exclusive states of the popup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum UiState {
    #[default]
    Idle,
    Loading,
    Success(String),
    Error(String),
}

impl UiState {
    /// Text for the result region in a terminal state
    pub fn result_text(&self) -> Option<&str> {
        match self {
            Self::Success(text) | Self::Error(text) => Some(text),
            Self::Idle | Self::Loading => None,
        }
    }
}

/// What the requester reads from and writes to.
///
/// Mirrors the popup's elements: one text input, a result region with text and
/// visibility, and a progress indicator that is either shown or hidden.
/// Methods take `&self` because overlapping cycles share one view.
pub trait PopupView: Send + Sync {
    fn input_value(&self) -> String;
    fn set_result_text(&self, text: &str);
    fn set_result_visible(&self, visible: bool);
    fn set_progress_visible(&self, visible: bool);
}

/// Current contents of every region.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Regions {
    pub input: String,
    pub result_text: String,
    pub result_visible: bool,
    pub progress_visible: bool,
}

/// In-memory view shared between the renderer and in-flight requests.
#[derive(Debug, Default)]
pub struct SharedView {
    regions: Mutex<Regions>,
}

impl SharedView {
    pub fn new() -> Self {
        Self::default()
    }

    /// A view whose input already holds `value`
    pub fn with_input(value: impl Into<String>) -> Self {
        Self {
            regions: Mutex::new(Regions {
                input: value.into(),
                ..Regions::default()
            }),
        }
    }

    /// Copy of the regions for rendering or inspection
    pub fn snapshot(&self) -> Regions {
        self.lock().clone()
    }

    /// Edit the input text in place
    pub fn edit_input(&self, edit: impl FnOnce(&mut String)) {
        edit(&mut self.lock().input);
    }

    // A poisoned lock only means a renderer panicked mid-update; the regions
    // are still plain values, so keep going with them.
    fn lock(&self) -> MutexGuard<'_, Regions> {
        self.regions.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl PopupView for SharedView {
    fn input_value(&self) -> String {
        self.lock().input.clone()
    }

    fn set_result_text(&self, text: &str) {
        self.lock().result_text = text.to_string();
    }

    fn set_result_visible(&self, visible: bool) {
        self.lock().result_visible = visible;
    }

    fn set_progress_visible(&self, visible: bool) {
        self.lock().progress_visible = visible;
    }
}
