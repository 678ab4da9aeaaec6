// Page wiring and canvas appearance for the web front-end

// DOM
pub const CANVAS_ELEMENT_ID: &str = "app-canvas";

// Canvas
pub const BACKGROUND_CSS: &str = "#000";
pub const MIN_BACKING_PX: u32 = 1; // never let the backing store collapse to zero

// Audio element
pub const AUDIO_PRELOAD: &str = "auto";

// Overlay text
pub const LABEL_TEXT_ALIGN: &str = "right";
pub const LABEL_TEXT_BASELINE: &str = "bottom";
