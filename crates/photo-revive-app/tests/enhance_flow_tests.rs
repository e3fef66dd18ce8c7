//! Integration tests for the end-to-end enhance flow with mock transports.

mod common;

use std::sync::Arc;

use photo_revive_app::{apply_enhance_outcome, enhance_original};
use photo_revive_client::{EnhanceClient, EnhanceError, ModelConfig, ModelTransport};
use photo_revive_model_contract::{
    Candidate, Content, GenerateContentRequest, GenerateContentResponse, InlineData, Part,
};
use photo_revive_ui::PROCESS_FAILURE_MESSAGE;

struct InlineImageTransport {
    data: &'static str,
}

impl ModelTransport for InlineImageTransport {
    fn generate(
        &self,
        _url: &str,
        _request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse, EnhanceError> {
        Ok(GenerateContentResponse {
            candidates: vec![Candidate {
                content: Some(Content {
                    parts: vec![Part {
                        inline_data: Some(InlineData {
                            mime_type: "image/jpeg".to_string(),
                            data: self.data.to_string(),
                        }),
                        text: None,
                    }],
                }),
            }],
        })
    }
}

struct TextOnlyTransport;

impl ModelTransport for TextOnlyTransport {
    fn generate(
        &self,
        _url: &str,
        _request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse, EnhanceError> {
        Ok(GenerateContentResponse {
            candidates: vec![Candidate {
                content: Some(Content {
                    parts: vec![Part {
                        inline_data: None,
                        text: Some("no can do".to_string()),
                    }],
                }),
            }],
        })
    }
}

struct FailingTransport;

impl ModelTransport for FailingTransport {
    fn generate(
        &self,
        _url: &str,
        _request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse, EnhanceError> {
        Err(EnhanceError::RemoteCallFailed("quota exhausted".to_string()))
    }
}

fn client_over(transport: Arc<dyn ModelTransport>) -> EnhanceClient {
    EnhanceClient::new(ModelConfig::new("test-key"), transport).expect("client should build")
}

#[test]
fn enhance_flow_tests_success_stores_generated_jpeg_result() {
    let mut state = common::ready_state();
    let client = client_over(Arc::new(InlineImageTransport { data: "AAAA" }));

    let ticket = state.begin_processing().expect("start should pass");
    let original = state.original().cloned().expect("original should be set");
    let outcome = enhance_original(&client, &original);
    apply_enhance_outcome(&mut state, ticket, outcome);

    let generated = state.generated().expect("result should be stored");
    assert_eq!(generated.payload, "AAAA");
    assert_eq!(generated.mime_type, "image/jpeg");
    assert!(!state.is_loading());
    assert!(state.error().is_none());
}

#[test]
fn enhance_flow_tests_missing_image_part_normalizes_to_user_message() {
    let mut state = common::ready_state();
    let client = client_over(Arc::new(TextOnlyTransport));

    let ticket = state.begin_processing().expect("start should pass");
    let original = state.original().cloned().expect("original should be set");
    let outcome = enhance_original(&client, &original);
    assert!(outcome.is_err());
    apply_enhance_outcome(&mut state, ticket, outcome);

    assert_eq!(state.error(), Some(PROCESS_FAILURE_MESSAGE));
    assert!(state.generated().is_none());
    assert!(!state.is_loading());
}

#[test]
fn enhance_flow_tests_transport_failure_normalizes_to_user_message() {
    let mut state = common::ready_state();
    let client = client_over(Arc::new(FailingTransport));

    let ticket = state.begin_processing().expect("start should pass");
    let original = state.original().cloned().expect("original should be set");
    apply_enhance_outcome(&mut state, ticket, enhance_original(&client, &original));

    assert_eq!(state.error(), Some(PROCESS_FAILURE_MESSAGE));
    assert!(state.generated().is_none());
    assert!(!state.is_loading());
    assert!(state.original().is_some(), "original survives a failed run");
}
