// Host-side tests for speed, end distance and duration derivation.

use tunnel_core::{TimingInputs, TimingModel, TunnelConfig};

fn inputs(sequence_len: usize) -> TimingInputs {
    TimingInputs {
        spacing: 50.0,
        sequence_len,
        audio_duration_sec: 130.0,
        visual_pad_sec: 6.0,
        restart_delay_sec: 0.0,
        perspective_distance: 500.0,
        frame_rate: 60.0,
    }
}

#[test]
fn reference_figures_match_hand_computation() {
    let t = TimingModel::derive(inputs(202));
    assert_eq!(t.end_distance, 201.0 * 50.0 + 500.0);
    assert_eq!(t.end_distance, 10550.0);
    assert_eq!(t.tunnel_length, 10100.0);
    let expected_speed = (50.0 * 202.0) / (136.0 * 60.0);
    assert!((t.speed - expected_speed).abs() < 1e-12);
    let expected_run = 10550.0 / (expected_speed * 60.0);
    assert!((t.run_time_sec - expected_run).abs() < 1e-9);
    assert!((t.total_duration_sec - expected_run).abs() < 1e-9);
}

#[test]
fn restart_delay_adds_to_total() {
    let mut i = inputs(202);
    i.restart_delay_sec = 2.5;
    let t = TimingModel::derive(i);
    assert!((t.total_duration_sec - (t.run_time_sec + 2.5)).abs() < 1e-9);
    assert_eq!(TimingModel::restart_frames(2.5, 60.0), 150);
}

#[test]
fn end_distance_is_monotonic_in_sequence_length() {
    let mut prev = TimingModel::derive(inputs(0)).end_distance;
    for len in 1..400 {
        let d = TimingModel::derive(inputs(len)).end_distance;
        assert!(d >= prev, "end distance decreased at len {len}");
        prev = d;
    }
}

#[test]
fn end_distance_never_negative() {
    let mut i = inputs(0);
    i.spacing = 800.0;
    let t = TimingModel::derive(i);
    assert_eq!(t.end_distance, 0.0);
}

#[test]
fn empty_sequence_does_not_divide_by_zero() {
    let t = TimingModel::derive(inputs(0));
    assert_eq!(t.speed, 0.0);
    assert_eq!(t.run_time_sec, 0.0);
    assert!(t.is_stalled());
    assert!(t.total_seconds().is_finite());
    // falls back to the nominal pass length
    assert_eq!(t.total_seconds(), 136.0);
}

#[test]
fn zero_duration_does_not_divide_by_zero() {
    let mut i = inputs(50);
    i.audio_duration_sec = 0.0;
    i.visual_pad_sec = 0.0;
    let t = TimingModel::derive(i);
    assert_eq!(t.speed, 0.0);
    assert!(t.run_time_sec.is_finite());
}

#[test]
fn total_frames_rounds_total_seconds() {
    let t = TimingModel::derive(inputs(202));
    let expected = (t.total_duration_sec * 60.0).round() as u64;
    assert_eq!(t.total_frames(), expected);
    assert!((t.frames_to_seconds(120) - 2.0).abs() < 1e-12);
}

#[test]
fn from_config_uses_configured_values() {
    let cfg = TunnelConfig::default();
    let t = TimingModel::from_config(&cfg, 217);
    assert_eq!(t.end_distance, 216.0 * 50.0 + 500.0);
    let expected_speed = (50.0 * 217.0) / (136.0 * 60.0);
    assert!((t.speed - expected_speed).abs() < 1e-12);
}
