use crate::utils::error::Result;
use async_trait::async_trait;
use chrono::NaiveDate;
use std::time::Duration;

/// Request settings a site needs to serve its boards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchProfile {
    pub user_agent: Option<&'static str>,
    pub timeout: Duration,
}

/// Retrieves the raw markup of an announcement page.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    async fn fetch(&self, url: &str, profile: &FetchProfile) -> Result<String>;
}

/// Delivers the finished digest to its subscribers.
#[async_trait]
pub trait PushChannel: Send + Sync {
    async fn broadcast(&self, text: &str) -> Result<()>;
}

/// Source of the run's calendar date.
pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;
}
