// Host-side tests for the web constants.
// The crate is wasm-only, so the pure module is included directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn canvas_constants_are_usable() {
    assert!(!CANVAS_ELEMENT_ID.is_empty());
    assert!(!CANVAS_ELEMENT_ID.starts_with('#'), "id, not a selector");
    assert!(MIN_BACKING_PX >= 1);
    assert!(BACKGROUND_CSS.starts_with('#'));
}

#[test]
fn overlay_text_is_anchored_bottom_right() {
    assert_eq!(LABEL_TEXT_ALIGN, "right");
    assert_eq!(LABEL_TEXT_BASELINE, "bottom");
}

#[test]
fn audio_preload_is_a_valid_keyword() {
    assert!(["none", "metadata", "auto"].contains(&AUDIO_PRELOAD));
}
