//! Shared fixtures for app integration tests.

use photo_revive_core::EncodedImage;
use photo_revive_ui::AppState;

/// Creates a small grayscale JPEG-tagged fixture image.
#[allow(dead_code)]
pub fn fixture_image() -> EncodedImage {
    // 10x10 single-channel ramp; state-machine paths never decode pixels.
    let bytes: Vec<u8> = (0..100).map(|index| (index * 2) as u8).collect();
    EncodedImage::from_bytes(&bytes, "image/jpeg").expect("fixture image should encode")
}

/// Creates a state with one uploaded original, ready to process.
#[allow(dead_code)]
pub fn ready_state() -> AppState {
    let mut state = AppState::new();
    state.on_upload(fixture_image());
    state
}
