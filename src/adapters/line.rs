use crate::config::env::LineConfig;
use crate::config::REQUEST_TIMEOUT;
use crate::domain::ports::PushChannel;
use crate::utils::error::{DigestError, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;

pub const LINE_BROADCAST_ENDPOINT: &str = "https://api.line.me/v2/bot/message/broadcast";

#[derive(Debug, Serialize)]
struct BroadcastRequest<'a> {
    messages: Vec<TextMessage<'a>>,
}

#[derive(Debug, Serialize)]
struct TextMessage<'a> {
    #[serde(rename = "type")]
    kind: &'static str,
    text: &'a str,
}

/// Broadcasts the digest to every follower of a LINE official account.
#[derive(Clone)]
pub struct LineChannel {
    client: Client,
    endpoint: String,
    access_token: String,
}

impl LineChannel {
    pub fn new(config: &LineConfig) -> Self {
        Self {
            client: Client::new(),
            endpoint: LINE_BROADCAST_ENDPOINT.to_string(),
            access_token: config.channel_access_token.clone(),
        }
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }
}

#[async_trait]
impl PushChannel for LineChannel {
    async fn broadcast(&self, text: &str) -> Result<()> {
        let payload = BroadcastRequest {
            messages: vec![TextMessage { kind: "text", text }],
        };

        tracing::debug!("Broadcasting {} chars to {}", text.chars().count(), self.endpoint);
        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.access_token)
            .timeout(REQUEST_TIMEOUT)
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(DigestError::PushRejected {
                status: status.as_u16(),
                body,
            });
        }

        Ok(())
    }
}

/// Prints the digest instead of sending it.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutChannel;

#[async_trait]
impl PushChannel for StdoutChannel {
    async fn broadcast(&self, text: &str) -> Result<()> {
        println!("{}", text);
        Ok(())
    }
}
