//! Blocking HTTP transport for the generation model endpoint.
//!
//! One request, one response; no retries and no timeout override beyond the
//! HTTP client's defaults. All failure strings pass through
//! [`redact_api_key`] because the request URL carries the key.

use photo_revive_client::{EnhanceError, ModelTransport};
use photo_revive_model_contract::{
    GenerateContentRequest, GenerateContentResponse, parse_model_response,
};

use crate::redact_api_key;

const BODY_SNIPPET_LEN: usize = 300;

/// Production [`ModelTransport`] over `reqwest`'s blocking client.
pub struct HttpModelTransport {
    http: reqwest::blocking::Client,
}

impl HttpModelTransport {
    /// Creates a transport with default connection settings.
    pub fn new() -> Self {
        Self {
            http: reqwest::blocking::Client::new(),
        }
    }
}

impl Default for HttpModelTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl ModelTransport for HttpModelTransport {
    fn generate(
        &self,
        url: &str,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse, EnhanceError> {
        let response = self.http.post(url).json(request).send().map_err(|error| {
            EnhanceError::RemoteCallFailed(redact_api_key(&format!("request failed: {error}")))
        })?;

        let status = response.status();
        let body = response.text().map_err(|error| {
            EnhanceError::RemoteCallFailed(redact_api_key(&format!(
                "failed to read response body: {error}"
            )))
        })?;

        tracing::debug!(%status, byte_len = body.len(), "model endpoint responded");

        if !status.is_success() {
            let snippet: String = body.chars().take(BODY_SNIPPET_LEN).collect();
            return Err(EnhanceError::RemoteCallFailed(redact_api_key(&format!(
                "model endpoint returned {status}: {snippet}"
            ))));
        }

        parse_model_response(&body).map_err(|error| {
            EnhanceError::RemoteCallFailed(format!("invalid model response: {error}"))
        })
    }
}
