//! Tests MIME defaults and supported-format gates.

use photo_revive_core::{
    CoreError, DEFAULT_MIME_TYPE, EncodedImage, mime_type_for_extension,
};

#[test]
fn mime_fallback_tests_default_applies_without_type_marker() {
    let parsed = EncodedImage::from_data_url("AAAA,QkJCQg==").expect("payload should parse");
    assert_eq!(parsed.mime_type, DEFAULT_MIME_TYPE);

    let parsed = EncodedImage::from_data_url("data:;base64,QkJCQg==")
        .expect("empty marker should parse");
    assert_eq!(parsed.mime_type, DEFAULT_MIME_TYPE);
}

#[test]
fn mime_fallback_tests_extension_map_covers_supported_formats() {
    assert_eq!(mime_type_for_extension("jpg"), Some("image/jpeg"));
    assert_eq!(mime_type_for_extension("JPEG"), Some("image/jpeg"));
    assert_eq!(mime_type_for_extension("png"), Some("image/png"));
    assert_eq!(mime_type_for_extension("webp"), Some("image/webp"));
    assert_eq!(mime_type_for_extension("gif"), None);
}

#[test]
fn mime_fallback_tests_reject_unsupported_upload_mime() {
    let result = EncodedImage::from_bytes(&[1, 2, 3], "image/gif");
    assert!(matches!(result, Err(CoreError::UnsupportedMimeType(_))));
}

#[test]
fn mime_fallback_tests_reject_empty_upload_bytes() {
    let result = EncodedImage::from_bytes(&[], "image/png");
    assert!(matches!(result, Err(CoreError::EmptyImage)));
}
