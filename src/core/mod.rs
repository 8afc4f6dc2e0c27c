pub mod daily;
pub mod digest;
pub mod extractors;
pub mod site;
pub mod window;

pub use crate::domain::model::{Announcement, Category, Institution};
pub use crate::domain::ports::{Clock, PageFetcher, PushChannel};
pub use crate::utils::error::Result;
