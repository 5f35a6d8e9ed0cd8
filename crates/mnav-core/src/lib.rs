pub mod config;
pub mod logging;

pub mod control;
pub mod fetch;
pub mod navigation;
pub mod presentation;
pub mod url_model;

pub use control::CancelHandle;
pub use fetch::{CurlFetcher, Fetch, FetchError, FetchOptions, Page};
pub use navigation::{NavigationController, NavigationOutcome};
pub use presentation::{PresentationSink, UiState, UiStateSink};
