#[cfg(feature = "cli")]
pub mod cli;
pub mod env;

use std::time::Duration;

/// Applied to every board fetch and to the push call.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[cfg(feature = "cli")]
pub use cli::CliConfig;
