use crate::utils::error::{DigestError, Result};
use crate::utils::validation::{validate_non_empty_string, Validate};
use std::env;
use std::fmt;

pub const CHANNEL_ACCESS_TOKEN: &str = "CHANNEL_ACCESS_TOKEN";

/// Credentials for the LINE Messaging API.
#[derive(Clone)]
pub struct LineConfig {
    pub channel_access_token: String,
}

impl LineConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let channel_access_token =
            lookup(CHANNEL_ACCESS_TOKEN).ok_or_else(|| DigestError::MissingConfigError {
                field: CHANNEL_ACCESS_TOKEN.to_string(),
            })?;

        let config = Self {
            channel_access_token,
        };
        config.validate()?;
        Ok(config)
    }
}

impl Validate for LineConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string(CHANNEL_ACCESS_TOKEN, &self.channel_access_token)
    }
}

impl fmt::Debug for LineConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LineConfig")
            .field("channel_access_token", &"<redacted>")
            .finish()
    }
}
