// Shared tuning constants used by both web and native frontends.
// `TunnelConfig::default()` is assembled from these.

// Tunnel layout
pub const DEFAULT_SPACING: f32 = 50.0; // z-distance between consecutive shapes
pub const DEFAULT_PERSPECTIVE_DISTANCE: f32 = 500.0; // higher = weaker perspective
pub const DEFAULT_PRIMARY_COUNT: usize = 15; // landmark outlines in the tunnel
pub const DEFAULT_SECONDARY_COUNT: usize = 202; // filler outlines in the tunnel

// Camera
pub const DEFAULT_CAMERA_ZOOM: f32 = 0.4; // zoom out (<1) / zoom in (>1)

// Stroke style
pub const DEFAULT_LINE_WEIGHT: f32 = 0.7;
pub const DEFAULT_LINE_RGB: [u8; 3] = [100, 100, 100];
pub const DEFAULT_LINE_ALPHA: u8 = 255;

// Audio and loop timing
pub const DEFAULT_AUDIO_PATH: &str = "bridge.wav";
pub const DEFAULT_AUDIO_DURATION_SEC: f64 = 130.0; // nominal track length used for timing
pub const DEFAULT_VISUAL_PAD_SEC: f64 = 6.0; // visuals outlast the audio by this much
pub const DEFAULT_RESTART_DELAY_SEC: f64 = 0.0; // pause before the loop restarts
pub const DEFAULT_FRAME_RATE: f64 = 60.0; // ticks per second

// Design-space size the outlines were drawn at
pub const TUNNEL_SHAPE_WIDTH: f32 = 1170.0;
pub const TUNNEL_SHAPE_HEIGHT: f32 = 516.0;

// Overlay
pub const DEFAULT_OVERLAY_FONT_SIZE: f32 = 16.0;
pub const DEFAULT_OVERLAY_BUTTON_SIZE: f32 = 21.0;
pub const DEFAULT_OVERLAY_RGB: [u8; 3] = [100, 100, 100];
pub const DEFAULT_OVERLAY_ALPHA: u8 = 220;
pub const DEFAULT_OVERLAY_MARGIN: f32 = 20.0;
pub const DEFAULT_OVERLAY_FONT_FAMILY: &str = "'Sohne Mono', monospace";
pub const OVERLAY_GAP_PER_FONT_SIZE: f32 = 0.75; // gap between glyph and label

// Frame pacing
pub const MAX_CATCH_UP_TICKS: u32 = 4; // ticks run per displayed frame at most
