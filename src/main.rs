//! vidsum CLI - video summaries from a local summarisation service
//!
//! The application logic is contained in lib.rs, and this file is responsible
//! for parsing arguments and handling top-level errors.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;
use vidsum::console::{self, ConsoleView};
use vidsum::{logging, ui, Config, HttpSummaryService, SummaryRequester};

#[derive(Parser)]
#[command(name = "vidsum")]
#[command(author, version, about = "Terminal popup for video summarisation", long_about = None)]
struct Cli {
    /// Read configuration from this file instead of vidsum.toml
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Summarise a single video and print the result
    Summarise {
        /// Video ID or URL, sent to the service as-is
        video_id: String,
        /// Also print the per-chunk summaries returned by the service
        #[arg(long)]
        chunks: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    logging::init_tracing(&config.logging);

    match cli.command {
        Some(Commands::Summarise { video_id, chunks }) => {
            let service = Arc::new(HttpSummaryService::new()?);
            let view = Arc::new(ConsoleView::new(video_id));
            let requester = SummaryRequester::new(service, view);

            let outcome = requester.activate().await;
            console::report(&outcome, chunks);

            if outcome.is_err() {
                std::process::exit(1);
            }
        }
        None => {
            // Default: open the popup
            ui::run(&config).await?;
        }
    }

    Ok(())
}
