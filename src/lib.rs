//! # vidsum
//!
//! A terminal popup that asks a local summarisation service for a summary of a
//! video and shows the result.
//!
//! ## Features
//!
//! - **One cycle per press**: read the input, POST it, render summary or error
//! - **Popup UI**: ratatui screen with input, progress indicator and result region
//! - **One-shot mode**: the same cycle from the command line, with colored output

pub mod client;
pub mod config;
pub mod console;
pub mod logging;
pub mod requester;
pub mod summary;
pub mod ui;
pub mod view;

pub use client::{HttpSummaryService, SummaryService, SUMMARIZE_URL};
pub use config::Config;
pub use requester::{Outcome, SummaryRequester};
pub use summary::{Summary, SummarizeError};
pub use view::{PopupView, SharedView, UiState};
