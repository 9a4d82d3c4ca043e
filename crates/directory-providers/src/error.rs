use thiserror::Error;

/// Errors returned by the provider adapters.
///
/// The adapters' non-`try_` entry points degrade every variant to an empty
/// result; these are only visible through `try_search` / `try_autocomplete`.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// No API key is configured for the provider.
    #[error("{provider} API key not configured")]
    MissingCredential { provider: &'static str },

    /// Network, TLS, or timeout failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[source] reqwest::Error),

    /// The provider answered with a non-2xx status.
    #[error("unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    /// The response body could not be deserialized into the expected type.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid base URL \"{base_url}\": {reason}")]
    InvalidBaseUrl { base_url: String, reason: String },
}

impl ProviderError {
    /// Wraps a `reqwest` error with its URL stripped, since request URLs
    /// carry API keys in their query strings.
    pub(crate) fn http(err: reqwest::Error) -> Self {
        Self::Http(err.without_url())
    }

    #[must_use]
    pub fn is_missing_credential(&self) -> bool {
        matches!(self, Self::MissingCredential { .. })
    }
}
