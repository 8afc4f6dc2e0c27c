use thiserror::Error;

#[derive(Error, Debug)]
pub enum DigestError {
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("Unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { url: String, status: u16 },

    #[error("Markup parsing error: {message}")]
    MarkupError { message: String },

    #[error("Missing configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value for {field} ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Push delivery rejected with status {status}: {body}")]
    PushRejected { status: u16, body: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Parse,
    Configuration,
    Delivery,
}

impl DigestError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            DigestError::HttpError(_) | DigestError::UnexpectedStatus { .. } => {
                ErrorCategory::Network
            }
            DigestError::MarkupError { .. } => ErrorCategory::Parse,
            DigestError::MissingConfigError { .. }
            | DigestError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            DigestError::PushRejected { .. } => ErrorCategory::Delivery,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            DigestError::MissingConfigError { field } => {
                format!("{} is not set; export it before running the daily task", field)
            }
            DigestError::InvalidConfigValueError { field, reason, .. } => {
                format!("{} is invalid: {}", field, reason)
            }
            DigestError::PushRejected { status, .. } => {
                format!("The push API refused the digest (HTTP {})", status)
            }
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, DigestError>;
