use crate::constants::*;
use crate::error::{Result, TunnelError};

/// Stroke colour and base weight for the tunnel outlines.
#[derive(Clone, Debug, PartialEq)]
pub struct LineStyle {
    pub weight: f32,
    pub rgb: [u8; 3],
    pub alpha: u8,
}

impl Default for LineStyle {
    fn default() -> Self {
        Self {
            weight: DEFAULT_LINE_WEIGHT,
            rgb: DEFAULT_LINE_RGB,
            alpha: DEFAULT_LINE_ALPHA,
        }
    }
}

/// Timestamp and play/pause glyph appearance.
///
/// - `font_size`: label text size in pixels, also drives the glyph/label gap
/// - `button_size`: side of the square glyph hit area
/// - `margin`: distance from the bottom-right corner; the glyph never moves
///   further left than this
#[derive(Clone, Debug, PartialEq)]
pub struct OverlayStyle {
    pub font_size: f32,
    pub button_size: f32,
    pub rgb: [u8; 3],
    pub alpha: u8,
    pub margin: f32,
    pub font_family: String,
}

impl Default for OverlayStyle {
    fn default() -> Self {
        Self {
            font_size: DEFAULT_OVERLAY_FONT_SIZE,
            button_size: DEFAULT_OVERLAY_BUTTON_SIZE,
            rgb: DEFAULT_OVERLAY_RGB,
            alpha: DEFAULT_OVERLAY_ALPHA,
            margin: DEFAULT_OVERLAY_MARGIN,
            font_family: DEFAULT_OVERLAY_FONT_FAMILY.to_string(),
        }
    }
}

/// Every tunable of the animation. Set once at startup and never re-read.
#[derive(Clone, Debug, PartialEq)]
pub struct TunnelConfig {
    pub primary_count: usize,
    pub secondary_count: usize,
    pub spacing: f32,
    pub perspective_distance: f32,
    pub camera_zoom: f32,
    pub base_shape_width: f32,
    pub base_shape_height: f32,
    pub line: LineStyle,
    pub audio_path: String,
    pub audio_duration_sec: f64,
    pub visual_pad_sec: f64,
    pub restart_delay_sec: f64,
    pub frame_rate: f64,
    pub overlay: OverlayStyle,
}

impl Default for TunnelConfig {
    fn default() -> Self {
        Self {
            primary_count: DEFAULT_PRIMARY_COUNT,
            secondary_count: DEFAULT_SECONDARY_COUNT,
            spacing: DEFAULT_SPACING,
            perspective_distance: DEFAULT_PERSPECTIVE_DISTANCE,
            camera_zoom: DEFAULT_CAMERA_ZOOM,
            base_shape_width: TUNNEL_SHAPE_WIDTH,
            base_shape_height: TUNNEL_SHAPE_HEIGHT,
            line: LineStyle::default(),
            audio_path: DEFAULT_AUDIO_PATH.to_string(),
            audio_duration_sec: DEFAULT_AUDIO_DURATION_SEC,
            visual_pad_sec: DEFAULT_VISUAL_PAD_SEC,
            restart_delay_sec: DEFAULT_RESTART_DELAY_SEC,
            frame_rate: DEFAULT_FRAME_RATE,
            overlay: OverlayStyle::default(),
        }
    }
}

impl TunnelConfig {
    /// Nominal length of one pass in seconds: audio plus the visual pad.
    pub fn animation_duration_sec(&self) -> f64 {
        self.audio_duration_sec + self.visual_pad_sec
    }

    /// Reject values the timing and projection math cannot handle.
    pub fn validate(&self) -> Result<()> {
        if !(self.frame_rate.is_finite() && self.frame_rate > 0.0) {
            return Err(TunnelError::invalid_config(format!(
                "frame_rate must be positive, got {}",
                self.frame_rate
            )));
        }
        if !(self.perspective_distance.is_finite() && self.perspective_distance > 0.0) {
            return Err(TunnelError::invalid_config(format!(
                "perspective_distance must be positive, got {}",
                self.perspective_distance
            )));
        }
        if !(self.spacing.is_finite() && self.spacing >= 0.0) {
            return Err(TunnelError::invalid_config(format!(
                "spacing must be non-negative, got {}",
                self.spacing
            )));
        }
        if !(self.base_shape_width > 0.0 && self.base_shape_height > 0.0) {
            return Err(TunnelError::invalid_config("base shape size must be positive"));
        }
        for (name, v) in [
            ("audio_duration_sec", self.audio_duration_sec),
            ("visual_pad_sec", self.visual_pad_sec),
            ("restart_delay_sec", self.restart_delay_sec),
        ] {
            if !(v.is_finite() && v >= 0.0) {
                return Err(TunnelError::invalid_config(format!(
                    "{name} must be non-negative, got {v}"
                )));
            }
        }
        Ok(())
    }
}
