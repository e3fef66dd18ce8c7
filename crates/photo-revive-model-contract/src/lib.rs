#![warn(missing_docs)]
//! # photo-revive-model-contract
//!
//! ## Purpose
//! Defines the `generateContent` wire contract spoken with the external
//! generation model and client-side scanning helpers.
//!
//! ## Responsibilities
//! - Model request/response content parts (inline data and text) in the
//!   provider's camelCase JSON shape.
//! - Build the fixed colorize-and-upscale enhancement request.
//! - Parse raw response JSON and locate the first inline image part.
//!
//! ## Data flow
//! Encoded image payload -> [`build_enhancement_request`] -> transport ->
//! raw JSON -> [`parse_model_response`] -> [`first_inline_image`] -> result
//! payload consumed by the enhancement client.
//!
//! ## Ownership and lifetimes
//! Parsed values are owned structs to avoid borrowing from transient network
//! buffers.
//!
//! ## Error model
//! Invalid response JSON returns [`ContractError`]. Unknown response fields
//! are ignored and missing optional fields default, so newly introduced
//! provider fields do not crash client logic.
//!
//! ## Security and privacy notes
//! This crate processes only model inputs/outputs; it never sees or embeds
//! the API key.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Generation model identifier targeted by the enhancement flow.
pub const GENERATION_MODEL: &str = "gemini-2.5-flash-image";

/// Default API base for the provider's REST surface.
pub const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Response modality flag requesting an image-typed answer.
pub const IMAGE_RESPONSE_MODALITY: &str = "IMAGE";

/// Fixed natural-language instruction sent with every enhancement request.
pub const ENHANCEMENT_PROMPT: &str = "Colorize this black and white image and upscale it to a \
photorealistic 4K resolution. Add vibrant, natural colors while preserving the original details \
and composition.";

/// Top-level `generateContent` request body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    /// Ordered request contents; this client always sends exactly one.
    pub contents: Vec<Content>,
    /// Generation controls; this client only sets response modalities.
    pub generation_config: GenerationConfig,
}

/// Generation controls attached to the request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    /// Requested response modalities, `["IMAGE"]` for this client.
    pub response_modalities: Vec<String>,
}

/// One content block: an ordered list of parts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Content {
    /// Content parts in request/response order.
    #[serde(default)]
    pub parts: Vec<Part>,
}

/// One content part carrying either inline data or text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Part {
    /// Inline binary data part, when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inline_data: Option<InlineData>,
    /// Text part, when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

/// Raw bytes plus type tag transported inside a content part.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InlineData {
    /// MIME type of the decoded bytes.
    pub mime_type: String,
    /// Base64-encoded bytes.
    pub data: String,
}

/// Top-level `generateContent` response body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerateContentResponse {
    /// Response candidates; may be empty on refusal.
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

/// One response candidate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    /// Candidate content block, absent when generation was blocked.
    #[serde(default)]
    pub content: Option<Content>,
}

/// Builds the enhancement request for one encoded image.
///
/// The request carries the image as an inline data part followed by the
/// fixed [`ENHANCEMENT_PROMPT`], and asks for an image-typed response.
pub fn build_enhancement_request(payload: &str, mime_type: &str) -> GenerateContentRequest {
    GenerateContentRequest {
        contents: vec![Content {
            parts: vec![
                Part {
                    inline_data: Some(InlineData {
                        mime_type: mime_type.to_string(),
                        data: payload.to_string(),
                    }),
                    text: None,
                },
                Part {
                    inline_data: None,
                    text: Some(ENHANCEMENT_PROMPT.to_string()),
                },
            ],
        }],
        generation_config: GenerationConfig {
            response_modalities: vec![IMAGE_RESPONSE_MODALITY.to_string()],
        },
    }
}

/// Parses raw JSON into a [`GenerateContentResponse`].
///
/// # Errors
/// Returns [`ContractError::Decode`] for invalid JSON.
pub fn parse_model_response(raw: &str) -> Result<GenerateContentResponse, ContractError> {
    Ok(serde_json::from_str(raw)?)
}

/// Returns the first inline-data part across all response candidates.
///
/// Scan order follows candidate order, then part order, matching the
/// provider's chronological emission.
pub fn first_inline_image(response: &GenerateContentResponse) -> Option<&InlineData> {
    response
        .candidates
        .iter()
        .filter_map(|candidate| candidate.content.as_ref())
        .flat_map(|content| content.parts.iter())
        .find_map(|part| part.inline_data.as_ref())
}

/// Wire contract errors.
#[derive(Debug, Error)]
pub enum ContractError {
    /// JSON decode failure.
    #[error("model response decode failure: {0}")]
    Decode(#[from] serde_json::Error),
}
