//! Build failure type.

use super::Mode;
use thiserror::Error;

/// Reason a feed URL could not be built. `Display` is the message shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    /// The input field was empty or only whitespace.
    #[error("Please enter a {}.", .mode.label())]
    EmptyInput { mode: Mode },
}
