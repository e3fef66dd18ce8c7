//! Validates contract fixtures against frozen JSON schemas.

use jsonschema::JSONSchema;
use photo_revive_model_contract::{build_enhancement_request, first_inline_image, parse_model_response};
use serde_json::Value;

fn load_json(path: &str) -> Value {
    let raw = std::fs::read_to_string(path).expect("json file should be readable");
    serde_json::from_str(&raw).expect("json file should be valid")
}

fn compile_validator(schema_path: &str) -> JSONSchema {
    let schema = load_json(schema_path);
    JSONSchema::compile(&schema).expect("schema should compile")
}

#[test]
fn generate_request_fixture_matches_schema() {
    let validator = compile_validator(concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/../../contracts/generate-request.schema.json"
    ));
    let fixture = load_json(concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/../../contracts/fixtures/generate-request.valid.json"
    ));
    assert!(
        validator.is_valid(&fixture),
        "generate-request fixture should validate against schema"
    );
}

#[test]
fn generate_response_fixture_matches_schema() {
    let validator = compile_validator(concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/../../contracts/generate-response.schema.json"
    ));
    let fixture = load_json(concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/../../contracts/fixtures/generate-response.valid.json"
    ));
    assert!(
        validator.is_valid(&fixture),
        "generate-response fixture should validate against schema"
    );
}

#[test]
fn built_request_stays_within_frozen_schema() {
    let validator = compile_validator(concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/../../contracts/generate-request.schema.json"
    ));
    let request = build_enhancement_request("QUFBQQ==", "image/png");
    let encoded = serde_json::to_value(&request).expect("request should serialize");
    assert!(
        validator.is_valid(&encoded),
        "request builder output should validate against schema"
    );
}

#[test]
fn response_fixture_parses_and_carries_image_part() {
    let raw = std::fs::read_to_string(concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/../../contracts/fixtures/generate-response.valid.json"
    ))
    .expect("fixture should be readable");

    let response = parse_model_response(&raw).expect("fixture should parse");
    let inline = first_inline_image(&response).expect("fixture should carry an image part");
    assert_eq!(inline.mime_type, "image/jpeg");
}
