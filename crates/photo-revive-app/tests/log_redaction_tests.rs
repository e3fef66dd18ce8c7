//! Integration tests for API-key redaction in log-bound strings.

use photo_revive_app::redact_api_key;

#[test]
fn log_redaction_tests_strip_key_query_value() {
    let input = "request failed: https://example.test/v1beta/models/m:generateContent?key=sk-123";
    let redacted = redact_api_key(input);
    assert!(!redacted.contains("sk-123"));
    assert!(redacted.ends_with("key=<redacted>"));
}

#[test]
fn log_redaction_tests_preserve_trailing_query_parameters() {
    let input = "url: https://example.test/a?key=sk-123&alt=json stays";
    let redacted = redact_api_key(input);
    assert_eq!(
        redacted,
        "url: https://example.test/a?key=<redacted>&alt=json stays"
    );
}

#[test]
fn log_redaction_tests_leave_keyless_strings_untouched() {
    let input = "connection refused by peer";
    assert_eq!(redact_api_key(input), input);
}
