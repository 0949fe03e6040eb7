//! UI components for the popup.
//!
//! Each region of the popup is drawn by its own function; [`render`] lays
//! them out and skips the regions that are hidden.

use super::app::App;
use crate::view::Regions;
use ratatui::layout::{Constraint, Layout, Position, Rect};
use ratatui::style::{Color, Style, Stylize};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Wrap};
use ratatui::Frame;

pub const TITLE: &str = "YouTube Video Summarizer";
pub const CONTROL_LABEL: &str = "[ Summarize ]";

pub fn render(frame: &mut Frame, app: &App) {
    let regions = app.view().snapshot();
    let progress_height = if regions.progress_visible { 1 } else { 0 };

    let [title, input, control, progress, result] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(3),
        Constraint::Length(1),
        Constraint::Length(progress_height),
        Constraint::Min(0),
    ])
    .areas(frame.area());

    frame.render_widget(Paragraph::new(TITLE).bold().centered(), title);
    render_input(frame, &regions, input);
    render_control(frame, control);

    if regions.progress_visible {
        render_progress(frame, app.spinner_frame(), progress);
    }
    if regions.result_visible {
        render_result(frame, &regions, result);
    }
}

fn render_input(frame: &mut Frame, regions: &Regions, area: Rect) {
    let input = Paragraph::new(regions.input.as_str())
        .block(Block::bordered().title(" Video ID or URL "));
    frame.render_widget(input, area);

    frame.set_cursor_position(input_cursor(&regions.input, area));
}

/// Cursor just past the typed text, measured in display columns and kept
/// inside the input box however long the input grows.
fn input_cursor(input: &str, area: Rect) -> Position {
    let typed = u16::try_from(Line::from(input).width()).unwrap_or(u16::MAX);
    let x = area
        .x
        .saturating_add(1)
        .saturating_add(typed)
        .min(area.right().saturating_sub(2));
    Position::new(x, area.y.saturating_add(1))
}

fn render_control(frame: &mut Frame, area: Rect) {
    let line = Line::from(vec![
        Span::styled(CONTROL_LABEL, Style::new().fg(Color::Black).bg(Color::Cyan)),
        "  Enter to summarize, Esc to quit".dark_gray(),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

fn render_progress(frame: &mut Frame, spinner: &str, area: Rect) {
    let line = Line::from(format!("{spinner} Summarizing...")).yellow();
    frame.render_widget(Paragraph::new(line), area);
}

fn render_result(frame: &mut Frame, regions: &Regions, area: Rect) {
    let result = Paragraph::new(regions.result_text.as_str())
        .wrap(Wrap { trim: false })
        .block(Block::bordered().title(" Summary "));
    frame.render_widget(result, area);
}
