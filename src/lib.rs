pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::{clock::SystemClock, http::HttpFetcher, line::LineChannel, line::StdoutChannel};
pub use config::env::LineConfig;
pub use crate::core::{daily::DailyRun, digest::format_digest, site::Site};
pub use domain::model::{Announcement, Category, Institution};
pub use utils::error::{DigestError, Result};
