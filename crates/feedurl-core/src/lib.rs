pub mod config;
pub mod logging;

pub mod feed_url;
pub mod origin;
pub mod panel;
pub mod upstream;

pub use feed_url::{build, BuildError, BuildResult, Mode};
pub use origin::Origin;
