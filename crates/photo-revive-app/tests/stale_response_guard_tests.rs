//! Integration tests for the stale-settle generation guard.

mod common;

use photo_revive_ui::{PROCESS_FAILURE_MESSAGE, ProcessingPhase};

#[test]
fn stale_response_guard_tests_drop_late_success_after_new_upload() {
    let mut state = common::ready_state();
    let stale_ticket = state.begin_processing().expect("start should pass");

    // User replaces the original while the request is still in flight.
    state.on_upload(common::fixture_image());

    state.complete_success(stale_ticket, common::fixture_image());
    assert!(!state.is_loading(), "settle must always clear loading");
    assert!(
        state.generated().is_none(),
        "stale result must not overwrite the newer upload"
    );
    assert_eq!(state.phase(), ProcessingPhase::Ready);
}

#[test]
fn stale_response_guard_tests_drop_late_failure_after_new_upload() {
    let mut state = common::ready_state();
    let stale_ticket = state.begin_processing().expect("start should pass");

    state.on_upload(common::fixture_image());

    state.complete_failure(stale_ticket, PROCESS_FAILURE_MESSAGE);
    assert!(!state.is_loading());
    assert!(state.error().is_none(), "stale failure must not raise a banner");
    assert_eq!(state.phase(), ProcessingPhase::Ready);
}

#[test]
fn stale_response_guard_tests_current_ticket_still_applies() {
    let mut state = common::ready_state();
    let ticket = state.begin_processing().expect("start should pass");

    state.complete_success(ticket, common::fixture_image());
    assert!(state.generated().is_some());
}
