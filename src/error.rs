use thiserror::Error;

/// Failure reported by the chat-completion provider, with its machine-readable code.
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct ProviderError {
    pub code: Option<String>,
    pub message: String,
}

impl ProviderError {
    pub fn new(code: Option<String>, message: impl Into<String>) -> Self {
        Self { code, message: message.into() }
    }

    pub fn failure(&self) -> ProviderFailure {
        match self.code.as_deref() {
            Some("insufficient_quota") => ProviderFailure::QuotaExhausted,
            Some("rate_limit_exceeded") => ProviderFailure::RateLimited,
            Some("invalid_api_key") => ProviderFailure::InvalidCredential,
            _ => ProviderFailure::Other,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderFailure {
    QuotaExhausted,
    RateLimited,
    InvalidCredential,
    Other,
}

#[derive(Debug, Error)]
pub enum AppError {
    /// Rejected input; the message is already localized.
    #[error("Validation failed: {0}")]
    Validation(String),
    #[error("Invalid JSON body: {0}")]
    InvalidBody(#[from] serde_json::Error),
    #[error("Method not allowed")]
    MethodNotAllowed,
    #[error("External API error: {0}")]
    External(#[from] ProviderError),
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provider_codes_are_classified() {
        let classify = |code: &str| ProviderError::new(Some(code.into()), "boom").failure();
        assert_eq!(classify("insufficient_quota"), ProviderFailure::QuotaExhausted);
        assert_eq!(classify("rate_limit_exceeded"), ProviderFailure::RateLimited);
        assert_eq!(classify("invalid_api_key"), ProviderFailure::InvalidCredential);
        assert_eq!(classify("server_error"), ProviderFailure::Other);
        assert_eq!(ProviderError::new(None, "timeout").failure(), ProviderFailure::Other);
    }
}
