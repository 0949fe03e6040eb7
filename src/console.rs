//! Console rendering for one-shot summaries.
//!
//! Uses colored for terminal output.

use crate::requester::Outcome;
use crate::view::{PopupView, Regions, SharedView};
use colored::Colorize;

/// A view whose input is fixed up front and whose progress indicator is a
/// status line on stderr.
#[derive(Debug)]
pub struct ConsoleView {
    inner: SharedView,
}

impl ConsoleView {
    pub fn new(video_id: impl Into<String>) -> Self {
        Self {
            inner: SharedView::with_input(video_id),
        }
    }

    pub fn snapshot(&self) -> Regions {
        self.inner.snapshot()
    }
}

impl PopupView for ConsoleView {
    fn input_value(&self) -> String {
        self.inner.input_value()
    }

    fn set_result_text(&self, text: &str) {
        self.inner.set_result_text(text);
    }

    fn set_result_visible(&self, visible: bool) {
        self.inner.set_result_visible(visible);
    }

    fn set_progress_visible(&self, visible: bool) {
        let was_visible = self.inner.snapshot().progress_visible;
        self.inner.set_progress_visible(visible);
        if visible && !was_visible {
            eprintln!("{}", "⏳ Generating summary...".dimmed());
        }
    }
}

/// Render the outcome of a cycle as printable lines.
pub fn format_outcome(outcome: &Outcome, show_chunks: bool) -> String {
    match outcome {
        Ok(summary) => {
            let mut out = format!("{}\n  {}\n", "📝 Summary:".bold(), summary.text);
            if show_chunks && !summary.chunks.is_empty() {
                out.push_str(&format!("\n{}\n", "📌 Chunk Summaries:".bold()));
                for (i, chunk) in summary.chunks.iter().enumerate() {
                    out.push_str(&format!("  {}. {}\n", i + 1, chunk));
                }
            }
            out
        }
        Err(err) => format!("{}\n", err.to_string().red()),
    }
}

/// Print the outcome: summaries to stdout, errors to stderr.
pub fn report(outcome: &Outcome, show_chunks: bool) {
    let text = format_outcome(outcome, show_chunks);
    match outcome {
        Ok(_) => print!("{}", text),
        Err(_) => eprint!("{}", text),
    }
}
