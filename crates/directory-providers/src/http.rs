//! Low-level HTTP helpers shared by the provider adapters.

use std::time::Duration;

use reqwest::{Client, RequestBuilder, Url};
use serde::de::DeserializeOwned;

use crate::error::ProviderError;

/// Total per-request timeout.
pub(crate) const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);
pub(crate) const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

/// Builds the HTTP client every adapter uses: fixed timeouts, no retries.
pub(crate) fn build_client(user_agent: &str) -> Result<Client, ProviderError> {
    Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .connect_timeout(CONNECT_TIMEOUT)
        .user_agent(user_agent)
        .build()
        .map_err(ProviderError::http)
}

/// Resolves `path` against `base_url`.
///
/// The base is normalised to end with exactly one slash so that a base
/// with a path prefix (a mock server mount, a proxy) keeps it.
pub(crate) fn endpoint(base_url: &str, path: &str) -> Result<Url, ProviderError> {
    let invalid = |reason: String| ProviderError::InvalidBaseUrl {
        base_url: base_url.to_owned(),
        reason,
    };
    let normalised = format!("{}/", base_url.trim_end_matches('/'));
    let base = Url::parse(&normalised).map_err(|e| invalid(e.to_string()))?;
    base.join(path).map_err(|e| invalid(e.to_string()))
}

/// Sends `request`, asserts a 2xx status, and deserializes the body.
///
/// # Errors
///
/// - [`ProviderError::Http`] on network failure or timeout.
/// - [`ProviderError::UnexpectedStatus`] on a non-2xx status.
/// - [`ProviderError::Deserialize`] if the body does not match `T`.
pub(crate) async fn send_json<T: DeserializeOwned>(
    request: RequestBuilder,
    context: &str,
) -> Result<T, ProviderError> {
    let response = request.send().await.map_err(ProviderError::http)?;
    let status = response.status();
    if !status.is_success() {
        return Err(ProviderError::UnexpectedStatus {
            status: status.as_u16(),
            url: redacted_url(response.url()),
        });
    }

    let body = response.text().await.map_err(ProviderError::http)?;
    serde_json::from_str(&body).map_err(|e| ProviderError::Deserialize {
        context: context.to_owned(),
        source: e,
    })
}

/// A URL without its query string, safe to log.
fn redacted_url(url: &Url) -> String {
    let mut url = url.clone();
    url.set_query(None);
    url.to_string()
}

/// Milliseconds since `started`, saturating.
pub(crate) fn elapsed_ms(started: std::time::Instant) -> u64 {
    u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX)
}
