#![warn(missing_docs)]
//! # photo-revive-client
//!
//! ## Purpose
//! Executes the single remote enhancement call against the configured
//! generation model endpoint.
//!
//! ## Responsibilities
//! - Validate endpoint policy (HTTPS) and API key presence at construction.
//! - Send one enhancement request through an injectable transport
//!   abstraction, with no retries and no timeout override.
//! - Extract the first inline image payload from the model response.
//!
//! ## Data flow
//! Encoded payload + MIME type -> [`EnhanceClient::enhance`] -> request via
//! [`ModelTransport`] -> response scan -> result payload string.
//!
//! ## Ownership and lifetimes
//! Configuration values are owned (`String`) to decouple transport and UI
//! lifetimes; the transport is shared behind `Arc` so worker threads can
//! hold the client cheaply.
//!
//! ## Error model
//! A single failed invocation is terminal: transport failures surface as
//! [`EnhanceError::RemoteCallFailed`] wrapping the underlying cause, and a
//! response without an inline image part is
//! [`EnhanceError::NoImageInResponse`]. The caller decides whether the user
//! retries manually.
//!
//! ## Security and privacy notes
//! The API key lives only in [`ModelConfig`] and the request URL handed to
//! the transport; it is never logged or embedded in error values.
//!
//! ## Example
//! ```rust
//! use photo_revive_client::ModelConfig;
//!
//! let config = ModelConfig::new("test-key");
//! assert!(config.api_base.starts_with("https://"));
//! ```

use std::sync::Arc;

use photo_revive_model_contract::{
    DEFAULT_API_BASE, GENERATION_MODEL, GenerateContentRequest, GenerateContentResponse,
    build_enhancement_request, first_inline_image,
};
use thiserror::Error;
use url::Url;

/// Abstract transport used by the enhancement client.
///
/// Implementations own the wire exchange (serialization, HTTP, default
/// timeout) and map failures into [`EnhanceError::RemoteCallFailed`].
pub trait ModelTransport: Send + Sync {
    /// Sends one `generateContent` request to `url`.
    fn generate(
        &self,
        url: &str,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse, EnhanceError>;
}

/// Configuration injected into [`EnhanceClient`] at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelConfig {
    /// Provider API key.
    pub api_key: String,
    /// API base URL, HTTPS required.
    pub api_base: String,
    /// Generation model identifier.
    pub model: String,
}

impl ModelConfig {
    /// Creates a config with the default API base and generation model.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_base: DEFAULT_API_BASE.to_string(),
            model: GENERATION_MODEL.to_string(),
        }
    }
}

/// Client that validates endpoint policy and executes the enhancement call.
#[derive(Clone)]
pub struct EnhanceClient {
    config: ModelConfig,
    transport: Arc<dyn ModelTransport>,
}

impl EnhanceClient {
    /// Creates a validated enhancement client.
    ///
    /// # Errors
    /// Returns [`EnhanceError::InvalidEndpoint`] when the API base is not an
    /// HTTPS URL and [`EnhanceError::MissingApiKey`] for a blank key.
    pub fn new(config: ModelConfig, transport: Arc<dyn ModelTransport>) -> Result<Self, EnhanceError> {
        validate_api_base(&config.api_base)?;
        if config.api_key.trim().is_empty() {
            return Err(EnhanceError::MissingApiKey);
        }
        if config.model.trim().is_empty() {
            return Err(EnhanceError::InvalidEndpoint(
                "model identifier is empty".to_string(),
            ));
        }

        Ok(Self { config, transport })
    }

    /// Sends one enhancement request and returns the result image payload.
    ///
    /// # Errors
    /// Returns [`EnhanceError::EmptyPayload`] for a blank input payload,
    /// propagates transport failures as-is, and returns
    /// [`EnhanceError::NoImageInResponse`] when the model answered without
    /// an inline image part.
    pub fn enhance(&self, payload: &str, mime_type: &str) -> Result<String, EnhanceError> {
        if payload.trim().is_empty() {
            return Err(EnhanceError::EmptyPayload);
        }

        let request = build_enhancement_request(payload, mime_type);
        let response = self.transport.generate(&self.request_url(), &request)?;

        first_inline_image(&response)
            .map(|inline| inline.data.clone())
            .ok_or(EnhanceError::NoImageInResponse)
    }

    /// Returns the configured API base.
    pub fn api_base(&self) -> &str {
        &self.config.api_base
    }

    /// Returns the configured generation model.
    pub fn model(&self) -> &str {
        &self.config.model
    }

    fn request_url(&self) -> String {
        format!(
            "{}/models/{}:generateContent?key={}",
            self.config.api_base.trim_end_matches('/'),
            self.config.model,
            self.config.api_key
        )
    }
}

/// Validates enhancement endpoint constraints.
///
/// # Errors
/// Returns [`EnhanceError::InvalidEndpoint`] for unparsable or non-HTTPS
/// URLs.
pub fn validate_api_base(api_base: &str) -> Result<(), EnhanceError> {
    let parsed = Url::parse(api_base)
        .map_err(|error| EnhanceError::InvalidEndpoint(format!("invalid api base: {error}")))?;

    if parsed.scheme() != "https" {
        return Err(EnhanceError::InvalidEndpoint(
            "api base must use https".to_string(),
        ));
    }

    Ok(())
}

/// Errors produced by the enhancement client.
#[derive(Debug, Error)]
pub enum EnhanceError {
    /// Endpoint violates security or contract requirements.
    #[error("invalid endpoint: {0}")]
    InvalidEndpoint(String),
    /// API key is missing or blank.
    #[error("api key is missing")]
    MissingApiKey,
    /// Input image payload is blank.
    #[error("image payload is empty")]
    EmptyPayload,
    /// Transport-level failure (network, auth, quota, malformed body).
    #[error("model call failed: {0}")]
    RemoteCallFailed(String),
    /// Model responded without an inline image part.
    #[error("no image data found in the model response")]
    NoImageInResponse,
}
