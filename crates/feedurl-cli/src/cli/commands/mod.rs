//! CLI command handlers, one per file.

mod build;
mod completions;
mod resolve;

pub use build::{run_build, BuildArgs};
pub use completions::run_completions;
pub use resolve::run_resolve;
