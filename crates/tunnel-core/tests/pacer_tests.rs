// Host-side tests for fixed-rate tick pacing and key mapping.

use std::time::Duration;
use tunnel_core::{FramePacer, KeyAction, MAX_CATCH_UP_TICKS};

#[test]
fn remainder_carries_between_frames() {
    let mut pacer = FramePacer::new(60.0, MAX_CATCH_UP_TICKS);
    let step = pacer.step();
    assert_eq!(pacer.advance(step / 2), 0);
    assert_eq!(pacer.advance(step - step / 2), 1);
    assert_eq!(pacer.advance(step * 2), 2);
}

#[test]
fn long_stall_is_capped_and_backlog_dropped() {
    let mut pacer = FramePacer::new(60.0, MAX_CATCH_UP_TICKS);
    assert_eq!(pacer.advance(Duration::from_secs(5)), MAX_CATCH_UP_TICKS);
    assert_eq!(pacer.advance(Duration::ZERO), 0);
}

#[test]
fn invalid_rate_falls_back_to_sixty() {
    let pacer = FramePacer::new(0.0, 1);
    assert_eq!(pacer.step(), Duration::from_secs_f64(1.0 / 60.0));
}

#[test]
fn reset_discards_partial_tick() {
    let mut pacer = FramePacer::new(60.0, 4);
    let step = pacer.step();
    pacer.advance(step - Duration::from_micros(1));
    pacer.reset();
    assert_eq!(pacer.advance(Duration::from_micros(2)), 0);
}

#[test]
fn keys_map_to_actions() {
    assert_eq!(KeyAction::from_key(" "), Some(KeyAction::TogglePlayback));
    assert_eq!(KeyAction::from_key("Space"), Some(KeyAction::TogglePlayback));
    assert_eq!(KeyAction::from_key("f"), Some(KeyAction::ToggleFullscreen));
    assert_eq!(KeyAction::from_key("F"), Some(KeyAction::ToggleFullscreen));
    assert_eq!(KeyAction::from_key("Escape"), Some(KeyAction::ExitFullscreen));
    assert_eq!(KeyAction::from_key("Enter"), None);
    assert_eq!(KeyAction::from_key("g"), None);
}
