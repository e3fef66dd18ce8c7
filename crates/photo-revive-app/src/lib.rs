#![warn(missing_docs)]
//! # photo-revive-app
//!
//! ## Purpose
//! Orchestrates configuration, file loading, the enhancement flow, and
//! result saving for `photo-revive`.
//!
//! ## Responsibilities
//! - Load model configuration from process environment into explicit,
//!   injectable values.
//! - Convert selected files into encoded images and apply enhancement
//!   outcomes to UI state at the single controller boundary.
//! - Provide the blocking HTTP transport used by the real client.
//! - Normalize processing-path failures into the one user-facing message
//!   while logging the underlying cause.
//!
//! ## Data flow
//! Env -> [`model_config_from_env`] -> [`build_enhance_client`]. File pick
//! -> [`load_original_image`] -> state upload. Process intent ->
//! [`enhance_original`] on a worker thread -> [`apply_enhance_outcome`] on
//! the UI thread. Download intent -> [`save_generated_image`].
//!
//! ## Ownership and lifetimes
//! This crate passes owned images and config snapshots between the UI
//! thread and worker threads to avoid hidden aliasing across settle points.
//!
//! ## Error model
//! Subsystem failures are wrapped in [`AppError`] and categorized for
//! logging; only normalized copy from `photo-revive-ui` reaches the user.
//!
//! ## Security and privacy notes
//! - The API key is read once from the environment and injected, never
//!   global and never logged.
//! - [`redact_api_key`] strips `key=` query values from log-bound strings.

use std::path::Path;
use std::sync::Arc;

use photo_revive_client::{EnhanceClient, EnhanceError, ModelConfig};
use photo_revive_core::{CoreError, DEFAULT_MIME_TYPE, EncodedImage, mime_type_for_extension};
use photo_revive_ui::{AppState, PROCESS_FAILURE_MESSAGE, ProcessingTicket};
use thiserror::Error;

mod transport;

pub use transport::HttpModelTransport;

/// Build-time application version loaded from root `VERSION` file.
pub const APP_VERSION: &str = env!("PHOTO_REVIVE_VERSION");

/// Environment variable holding the provider API key.
pub const API_KEY_ENV: &str = "PHOTO_REVIVE_API_KEY";
/// Optional environment override for the API base URL.
pub const API_BASE_ENV: &str = "PHOTO_REVIVE_API_BASE";
/// Optional environment override for the generation model identifier.
pub const MODEL_ENV: &str = "PHOTO_REVIVE_MODEL";

/// Returns the app version sourced from root `VERSION`.
pub fn app_version() -> &'static str {
    APP_VERSION
}

/// Reads model configuration from the process environment.
///
/// # Errors
/// Returns [`AppError::MissingApiKey`] when the key variable is unset or
/// blank.
pub fn model_config_from_env() -> Result<ModelConfig, AppError> {
    model_config_from_lookup(&|key| std::env::var(key).ok())
}

/// Reads model configuration through an injectable lookup, keeping config
/// resolution testable without process-wide env mutation.
///
/// Base URL and model fall back to the provider defaults when their
/// variables are unset or blank.
///
/// # Errors
/// Returns [`AppError::MissingApiKey`] when the key is absent or blank.
pub fn model_config_from_lookup(
    lookup: &dyn Fn(&str) -> Option<String>,
) -> Result<ModelConfig, AppError> {
    let api_key = lookup(API_KEY_ENV)
        .filter(|value| !value.trim().is_empty())
        .ok_or(AppError::MissingApiKey)?;

    let mut config = ModelConfig::new(api_key);
    if let Some(api_base) = lookup(API_BASE_ENV).filter(|value| !value.trim().is_empty()) {
        config.api_base = api_base;
    }
    if let Some(model) = lookup(MODEL_ENV).filter(|value| !value.trim().is_empty()) {
        config.model = model;
    }

    Ok(config)
}

/// Builds the production enhancement client over the blocking HTTP
/// transport.
///
/// # Errors
/// Propagates [`EnhanceError`] construction failures (endpoint policy,
/// blank key).
pub fn build_enhance_client(config: ModelConfig) -> Result<EnhanceClient, AppError> {
    Ok(EnhanceClient::new(
        config,
        Arc::new(HttpModelTransport::new()),
    )?)
}

/// Reads a selected file into an [`EncodedImage`].
///
/// The MIME type comes from the file extension; unsupported extensions are
/// rejected before any bytes are read, so failures leave no partial state.
///
/// # Errors
/// Returns [`AppError::UnsupportedFile`] for extensions outside
/// PNG/JPEG/WEBP and [`AppError::FileRead`] when reading fails.
pub fn load_original_image(path: &Path) -> Result<EncodedImage, AppError> {
    let extension = path
        .extension()
        .and_then(|extension| extension.to_str())
        .unwrap_or_default();
    let mime_type = mime_type_for_extension(extension)
        .ok_or_else(|| AppError::UnsupportedFile(path.display().to_string()))?;

    let bytes = std::fs::read(path).map_err(|source| AppError::FileRead {
        path: path.display().to_string(),
        source,
    })?;

    let image = EncodedImage::from_bytes(&bytes, mime_type)?;
    tracing::debug!(
        path = %path.display(),
        mime_type,
        byte_len = bytes.len(),
        "loaded original image"
    );
    Ok(image)
}

/// Runs the single enhancement call for the current original image.
///
/// The returned payload is wrapped as `image/jpeg`, the provider's result
/// format and this system's documented default.
///
/// # Errors
/// Propagates client errors; a failure is terminal for this invocation.
pub fn enhance_original(
    client: &EnhanceClient,
    original: &EncodedImage,
) -> Result<EncodedImage, AppError> {
    let payload = client.enhance(&original.payload, &original.mime_type)?;
    Ok(EncodedImage::from_payload(payload, DEFAULT_MIME_TYPE)?)
}

/// Applies an enhancement settle to UI state at the controller boundary.
///
/// Success stores the generated image; any failure is logged with its
/// underlying cause and normalized into [`PROCESS_FAILURE_MESSAGE`]. The
/// state's ticket guard keeps stale settles from overwriting newer uploads.
pub fn apply_enhance_outcome(
    state: &mut AppState,
    ticket: ProcessingTicket,
    outcome: Result<EncodedImage, AppError>,
) {
    match outcome {
        Ok(image) => {
            tracing::info!("enhancement settled successfully");
            state.complete_success(ticket, image);
        }
        Err(error) => {
            tracing::error!(error = %error, "enhancement failed");
            state.complete_failure(ticket, PROCESS_FAILURE_MESSAGE);
        }
    }
}

/// Writes the generated image's decoded bytes to `path`.
///
/// # Errors
/// Returns [`AppError::Core`] when the payload does not decode and
/// [`AppError::FileRead`] when the write fails.
pub fn save_generated_image(image: &EncodedImage, path: &Path) -> Result<(), AppError> {
    let bytes = image.decode_bytes()?;
    std::fs::write(path, &bytes).map_err(|source| AppError::FileRead {
        path: path.display().to_string(),
        source,
    })?;

    tracing::info!(path = %path.display(), byte_len = bytes.len(), "saved generated image");
    Ok(())
}

/// Redacts `key=` query values in log-safe output.
///
/// Request URLs carry the API key as a query parameter; any string derived
/// from them must pass through here before logging or error display.
pub fn redact_api_key(input: &str) -> String {
    let mut redacted = String::with_capacity(input.len());
    let mut rest = input;

    while let Some(position) = rest.find("key=") {
        let value_start = position + "key=".len();
        redacted.push_str(&rest[..value_start]);
        redacted.push_str("<redacted>");

        let tail = &rest[value_start..];
        let value_len = tail
            .find(|character: char| character == '&' || character.is_whitespace())
            .unwrap_or(tail.len());
        rest = &tail[value_len..];
    }

    redacted.push_str(rest);
    redacted
}

/// App integration error type.
#[derive(Debug, Error)]
pub enum AppError {
    /// API key variable is unset or blank.
    #[error("api key is not configured; set PHOTO_REVIVE_API_KEY")]
    MissingApiKey,
    /// Local file could not be read or written.
    #[error("file access failed for {path}: {source}")]
    FileRead {
        /// Display form of the offending path.
        path: String,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
    /// Selected file is outside the supported formats.
    #[error("unsupported image file: {0}")]
    UnsupportedFile(String),
    /// Image model error.
    #[error("image error: {0}")]
    Core(#[from] CoreError),
    /// Enhancement client error.
    #[error("enhancement error: {0}")]
    Enhance(#[from] EnhanceError),
}
