//! TUI module using ratatui.
//!
//! The popup: an input box, a summarize control, a progress indicator and a
//! result region. Every Enter spawns a requester cycle; nothing stops a second
//! cycle from starting while one is in flight.

pub mod app;
pub mod components;
pub mod terminal;

use crate::client::HttpSummaryService;
use crate::config::Config;
use crate::requester::SummaryRequester;
use crate::view::SharedView;
use app::{Action, App};
use crossterm::event::{self, Event};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};

/// Run the popup until the user quits.
pub async fn run(config: &Config) -> anyhow::Result<()> {
    let service = Arc::new(HttpSummaryService::new()?);
    let view = Arc::new(SharedView::new());
    let requester = SummaryRequester::new(service, Arc::clone(&view));
    let tick_rate = Duration::from_millis(config.ui.tick_rate_ms);

    let (mut terminal, _guard) = terminal::setup_terminal()?;
    info!("popup started");

    let mut app = App::new(view);
    loop {
        terminal.draw(|frame| components::render(frame, &app))?;

        // crossterm polling blocks; keep it off the runtime's worker.
        let ready = tokio::task::block_in_place(|| event::poll(tick_rate))?;
        if ready {
            match event::read()? {
                Event::Key(key) => match app.handle_key(key) {
                    Some(Action::Activate) => {
                        let requester = requester.clone();
                        tokio::spawn(async move {
                            let _ = requester.activate().await;
                        });
                    }
                    Some(Action::Quit) => break,
                    None => {}
                },
                Event::Paste(text) => app.handle_paste(&text),
                other => debug!(?other, "ignored terminal event"),
            }
        }

        app.on_tick();
    }

    info!("popup closed");
    Ok(())
}
