#![warn(missing_docs)]
//! # photo-revive-core
//!
//! ## Purpose
//! Defines the pure image data model used across the `photo-revive`
//! workspace.
//!
//! ## Responsibilities
//! - Represent an image as a text-safe encoded value paired with its MIME
//!   type.
//! - Build and parse self-describing `data:` URLs for display transport.
//! - Map supported file extensions to MIME types with an explicit default.
//!
//! ## Data flow
//! File selection produces raw bytes that become an [`EncodedImage`] via
//! [`EncodedImage::from_bytes`]. Remote model results arrive already base64
//! encoded and are wrapped with [`EncodedImage::from_payload`]. Either form
//! round-trips through the data-URL codec for rendering and download.
//!
//! ## Ownership and lifetimes
//! Encoded images own their payload strings so state snapshots can be moved
//! between the UI thread and worker threads without borrow coupling.
//!
//! ## Error model
//! Validation and codec failures return [`CoreError`] variants with
//! caller-actionable categorization.
//!
//! ## Security and privacy notes
//! This crate never logs payload contents; image bytes stay inside owned
//! buffers handed to the caller.
//!
//! ## Example
//! ```rust
//! use photo_revive_core::EncodedImage;
//!
//! let image = EncodedImage::from_bytes(&[0xFF, 0xD8, 0xFF], "image/jpeg").unwrap();
//! let url = image.to_data_url();
//! let parsed = EncodedImage::from_data_url(&url).unwrap();
//! assert_eq!(parsed, image);
//! ```

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Documented default MIME type used when a data URL carries no type marker
/// and when wrapping remote model results.
pub const DEFAULT_MIME_TYPE: &str = "image/jpeg";

/// MIME types accepted for local file input.
pub const SUPPORTED_MIME_TYPES: &[&str] = &["image/jpeg", "image/png", "image/webp"];

/// Text-safe representation of binary image bytes paired with its MIME type.
///
/// Invariant: `payload` is standard base64 whose decoded bytes match
/// `mime_type`. Values are replaced wholesale on new uploads or results and
/// never mutated in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncodedImage {
    /// MIME type describing the decoded bytes.
    pub mime_type: String,
    /// Standard base64 encoding of the raw image bytes.
    pub payload: String,
}

impl EncodedImage {
    /// Encodes raw image bytes into a validated [`EncodedImage`].
    ///
    /// # Errors
    /// Returns [`CoreError::EmptyImage`] for empty input and
    /// [`CoreError::UnsupportedMimeType`] when `mime_type` is not one of
    /// [`SUPPORTED_MIME_TYPES`].
    pub fn from_bytes(bytes: &[u8], mime_type: impl Into<String>) -> Result<Self, CoreError> {
        if bytes.is_empty() {
            return Err(CoreError::EmptyImage);
        }

        let mime_type = mime_type.into();
        if !is_supported_mime(&mime_type) {
            return Err(CoreError::UnsupportedMimeType(mime_type));
        }

        Ok(Self {
            mime_type,
            payload: BASE64.encode(bytes),
        })
    }

    /// Wraps an already base64-encoded payload, as returned by the remote
    /// model, into an [`EncodedImage`].
    ///
    /// # Errors
    /// Returns [`CoreError::EmptyImage`] for a blank payload and
    /// [`CoreError::UnsupportedMimeType`] for an unknown MIME type.
    pub fn from_payload(
        payload: impl Into<String>,
        mime_type: impl Into<String>,
    ) -> Result<Self, CoreError> {
        let payload = payload.into();
        if payload.trim().is_empty() {
            return Err(CoreError::EmptyImage);
        }

        let mime_type = mime_type.into();
        if !is_supported_mime(&mime_type) {
            return Err(CoreError::UnsupportedMimeType(mime_type));
        }

        Ok(Self { mime_type, payload })
    }

    /// Renders the image as a self-describing `data:<mime>;base64,<payload>`
    /// URL.
    pub fn to_data_url(&self) -> String {
        format!("data:{};base64,{}", self.mime_type, self.payload)
    }

    /// Parses a data URL back into an [`EncodedImage`].
    ///
    /// # Semantics
    /// The payload is everything after the first `,`. When the
    /// `data:<mime>;base64` marker is absent or carries no type, the MIME
    /// type falls back to [`DEFAULT_MIME_TYPE`].
    ///
    /// # Errors
    /// Returns [`CoreError::MalformedDataUrl`] when no `,` separator exists
    /// or the payload section is empty.
    pub fn from_data_url(raw: &str) -> Result<Self, CoreError> {
        let (header, payload) = raw.split_once(',').ok_or_else(|| {
            CoreError::MalformedDataUrl("missing `,` payload separator".to_string())
        })?;

        if payload.trim().is_empty() {
            return Err(CoreError::MalformedDataUrl(
                "payload section is empty".to_string(),
            ));
        }

        let mime_type = header
            .strip_prefix("data:")
            .and_then(|rest| rest.strip_suffix(";base64"))
            .filter(|mime| !mime.is_empty())
            .unwrap_or(DEFAULT_MIME_TYPE);

        Ok(Self {
            mime_type: mime_type.to_string(),
            payload: payload.to_string(),
        })
    }

    /// Decodes the base64 payload back to raw image bytes.
    ///
    /// # Errors
    /// Returns [`CoreError::Decode`] when the payload is not valid base64.
    pub fn decode_bytes(&self) -> Result<Vec<u8>, CoreError> {
        Ok(BASE64.decode(&self.payload)?)
    }
}

/// Returns `true` when `mime_type` is accepted for upload or display.
pub fn is_supported_mime(mime_type: &str) -> bool {
    SUPPORTED_MIME_TYPES.contains(&mime_type)
}

/// Maps a lowercase-insensitive file extension to its MIME type.
///
/// Returns `None` for extensions outside the supported set so callers can
/// reject the file before reading it.
pub fn mime_type_for_extension(extension: &str) -> Option<&'static str> {
    match extension.to_ascii_lowercase().as_str() {
        "jpg" | "jpeg" => Some("image/jpeg"),
        "png" => Some("image/png"),
        "webp" => Some("image/webp"),
        _ => None,
    }
}

/// Error type for image model validation and codec failures.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Image bytes or payload were empty.
    #[error("image data is empty")]
    EmptyImage,
    /// MIME type is outside the supported set.
    #[error("unsupported mime type: {0}")]
    UnsupportedMimeType(String),
    /// Data URL could not be split into marker and payload.
    #[error("malformed data url: {0}")]
    MalformedDataUrl(String),
    /// Payload was not valid base64.
    #[error("payload decode failure: {0}")]
    Decode(#[from] base64::DecodeError),
}
