//! `mnav repl` – line-oriented address bar.
//!
//! Each entered line is a navigate trigger (the Enter key of a GUI address
//! bar). Triggers are spawned, so typing a new address while one is loading
//! supersedes it.

use anyhow::Result;
use mnav_core::config::MnavConfig;
use mnav_core::{CurlFetcher, FetchOptions, NavigationController, UiState, UiStateSink};
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};

/// What a line typed at the prompt asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum ReplInput {
    Navigate(String),
    Stop,
    Quit,
}

impl ReplInput {
    pub(crate) fn parse(line: &str) -> Self {
        match line.trim() {
            ".stop" => ReplInput::Stop,
            ".quit" | ".exit" => ReplInput::Quit,
            _ => ReplInput::Navigate(line.to_string()),
        }
    }
}

pub async fn run_repl(cfg: &MnavConfig) -> Result<()> {
    let sink = Arc::new(UiStateSink::new());
    let controller = Arc::new(NavigationController::new(
        CurlFetcher::new(FetchOptions::from(cfg)),
        Arc::clone(&sink),
    ));

    let mut changes = sink.subscribe();
    let printer = tokio::spawn(async move {
        let mut last = UiState::default();
        while changes.changed().await.is_ok() {
            let state = changes.borrow_and_update().clone();
            if state.busy != last.busy {
                eprintln!("[{}]", if state.busy { "busy" } else { "idle" });
            }
            if state.status_text != last.status_text {
                eprintln!("{}", state.status_text);
            }
            last = state;
        }
    });

    println!(
        "Type an address and press Enter (e.g. {}). `.stop` cancels, `.quit` exits.",
        cfg.home_url
    );
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        match ReplInput::parse(&line) {
            ReplInput::Quit => break,
            ReplInput::Stop => {
                if !controller.stop() {
                    eprintln!("nothing to stop");
                }
            }
            ReplInput::Navigate(input) => {
                let controller = Arc::clone(&controller);
                tokio::spawn(async move {
                    let Some(outcome) = controller.navigate(&input).await else {
                        return;
                    };
                    if let Some(content) = outcome.content_text().filter(|c| !c.is_empty()) {
                        println!("{content}");
                    }
                });
            }
        }
    }

    controller.stop();
    printer.abort();
    Ok(())
}
