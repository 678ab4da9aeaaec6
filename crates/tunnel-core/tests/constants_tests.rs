// Sanity checks on the shared tuning constants.

use tunnel_core::*;

#[test]
fn defaults_are_positive() {
    assert!(DEFAULT_SPACING > 0.0);
    assert!(DEFAULT_PERSPECTIVE_DISTANCE > 0.0);
    assert!(DEFAULT_CAMERA_ZOOM > 0.0);
    assert!(DEFAULT_FRAME_RATE > 0.0);
    assert!(DEFAULT_AUDIO_DURATION_SEC > 0.0);
    assert!(DEFAULT_VISUAL_PAD_SEC >= 0.0);
    assert!(DEFAULT_RESTART_DELAY_SEC >= 0.0);
    assert!(MAX_CATCH_UP_TICKS >= 1);
}

#[test]
fn default_config_validates() {
    let cfg = TunnelConfig::default();
    assert!(cfg.validate().is_ok());
    assert_eq!(cfg.animation_duration_sec(), 136.0);
    assert_eq!(cfg.base_shape_width, TUNNEL_SHAPE_WIDTH);
    assert_eq!(cfg.base_shape_height, TUNNEL_SHAPE_HEIGHT);
}

#[test]
fn negative_durations_are_rejected() {
    for cfg in [
        TunnelConfig {
            audio_duration_sec: -1.0,
            ..TunnelConfig::default()
        },
        TunnelConfig {
            restart_delay_sec: f64::NAN,
            ..TunnelConfig::default()
        },
        TunnelConfig {
            spacing: -5.0,
            ..TunnelConfig::default()
        },
    ] {
        assert!(matches!(cfg.validate(), Err(TunnelError::InvalidConfig(_))));
    }
}

#[test]
fn stroke_shader_has_both_entry_points() {
    assert!(STROKE_WGSL.contains("fn vs_main"));
    assert!(STROKE_WGSL.contains("fn fs_main"));
}
