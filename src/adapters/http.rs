use crate::domain::ports::{FetchProfile, PageFetcher};
use crate::utils::error::{DigestError, Result};
use async_trait::async_trait;
use reqwest::header::USER_AGENT;
use reqwest::Client;

/// Plain GET fetcher backed by a shared reqwest client.
#[derive(Debug, Clone, Default)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    async fn fetch(&self, url: &str, profile: &FetchProfile) -> Result<String> {
        let mut request = self.client.get(url).timeout(profile.timeout);
        if let Some(agent) = profile.user_agent {
            request = request.header(USER_AGENT, agent);
        }

        let response = request.send().await?;
        let status = response.status();
        tracing::debug!("GET {} -> {}", url, status);

        if !status.is_success() {
            return Err(DigestError::UnexpectedStatus {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        Ok(response.text().await?)
    }
}
