//! CLI command handlers.

mod open;
mod repl;

pub use open::run_open;
pub use repl::run_repl;
#[cfg(test)]
pub(crate) use repl::ReplInput;
