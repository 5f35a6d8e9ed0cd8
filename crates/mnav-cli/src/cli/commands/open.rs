//! `mnav open [input]` – one navigation, body to stdout.

use anyhow::Result;
use mnav_core::config::MnavConfig;
use mnav_core::{CurlFetcher, FetchOptions, NavigationController, UiStateSink};
use std::sync::Arc;

pub async fn run_open(cfg: &MnavConfig, input: Option<&str>) -> Result<()> {
    let input = input.unwrap_or(cfg.home_url.as_str());
    let sink = Arc::new(UiStateSink::new());
    let controller = NavigationController::new(
        CurlFetcher::new(FetchOptions::from(cfg)),
        Arc::clone(&sink),
    );

    let outcome = controller.navigate(input).await;
    let state = sink.snapshot();

    match outcome {
        Some(outcome) if outcome.is_success() => {
            eprintln!("{}", state.status_text);
            print!("{}", state.content_text);
            Ok(())
        }
        _ => {
            if !state.content_text.is_empty() {
                eprintln!("{}", state.content_text);
            }
            anyhow::bail!("{}", state.status_text)
        }
    }
}
