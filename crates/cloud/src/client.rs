//! Shared HTTP handle for authenticated control plane calls

use crate::endpoints::CloudEndpoints;
use dsc_core::{Error, Result};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::time::Duration;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// Authenticated client handle.
///
/// Cloning is cheap and clones share the connection pool, so one handle can
/// serve any number of concurrent requests.
#[derive(Clone)]
pub struct CloudClient {
    http: reqwest::Client,
    endpoints: CloudEndpoints,
    token: String,
}

/// Error body returned by the control plane
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ApiErrorBody {
    message: String,
}

impl CloudClient {
    /// Create a client that sends `token` as the bearer token
    pub fn new(endpoints: CloudEndpoints, token: impl Into<String>) -> Result<Self> {
        Ok(Self {
            http: http_client()?,
            endpoints,
            token: token.into(),
        })
    }

    pub fn endpoints(&self) -> &CloudEndpoints {
        &self.endpoints
    }

    /// GET `url` and decode the JSON body
    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        service: &str,
        operation: &str,
        url: &str,
        query: &[(&str, String)],
    ) -> Result<T> {
        tracing::trace!(url = %url, "GET");
        let response = self
            .http
            .get(url)
            .bearer_auth(&self.token)
            .query(query)
            .send()
            .await?;
        decode(service, operation, response).await
    }

    /// POST `body` as JSON to `url` and decode the JSON answer
    pub(crate) async fn post_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        service: &str,
        operation: &str,
        url: &str,
        body: &B,
    ) -> Result<T> {
        tracing::trace!(url = %url, "POST");
        let response = self
            .http
            .post(url)
            .bearer_auth(&self.token)
            .json(body)
            .send()
            .await?;
        decode(service, operation, response).await
    }
}

/// Build the underlying HTTP client
pub(crate) fn http_client() -> Result<reqwest::Client> {
    reqwest::Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .user_agent(concat!("dsc/", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(|e| Error::configuration(format!("failed to build HTTP client: {e}")))
}

/// Append `segment` to `base` as a single percent-encoded path segment
pub(crate) fn segment_url(base: &str, segment: &str) -> Result<String> {
    let mut url = reqwest::Url::parse(base)
        .map_err(|e| Error::configuration(format!("invalid endpoint '{base}': {e}")))?;
    url.path_segments_mut()
        .map_err(|()| Error::configuration(format!("endpoint '{base}' cannot have a path")))?
        .pop_if_empty()
        .push(segment);
    Ok(url.to_string())
}

/// Map non-success statuses to [`Error::Api`] and decode the body otherwise
pub(crate) async fn decode<T: DeserializeOwned>(
    service: &str,
    operation: &str,
    response: reqwest::Response,
) -> Result<T> {
    let status = response.status();
    let body = response.text().await?;

    if !status.is_success() {
        let message = serde_json::from_str::<ApiErrorBody>(&body)
            .map(|parsed| parsed.message)
            .ok()
            .filter(|message| !message.is_empty())
            .unwrap_or_else(|| body.trim().to_string());
        return Err(Error::api(service, operation, status.as_u16(), message));
    }

    // Empty bodies decode as `{}` so unit-like responses still work.
    let body = if body.trim().is_empty() { "{}" } else { body.as_str() };
    serde_json::from_str(body).map_err(Error::from)
}
