//! Play/pause glyph and `elapsed/total` timestamp in the bottom-right corner.

use crate::config::OverlayStyle;
use crate::constants::OVERLAY_GAP_PER_FONT_SIZE;
use crate::tunnel::Viewport;
use glam::Vec2;

/// Format seconds as `MM:SS`, flooring to whole seconds. Minutes are not
/// wrapped into hours.
pub fn format_time(seconds: f64) -> String {
    let seconds = if seconds.is_finite() { seconds.max(0.0) } else { 0.0 };
    let mins = (seconds / 60.0).floor() as u64;
    let secs = (seconds % 60.0).floor() as u64;
    format!("{mins:02}:{secs:02}")
}

/// `"MM:SS/MM:SS"` with the elapsed part clamped to the total.
pub fn timestamp_label(elapsed_sec: f64, total_sec: f64) -> String {
    format!(
        "{}/{}",
        format_time(elapsed_sec.min(total_sec)),
        format_time(total_sec)
    )
}

/// Square clickable area of the glyph, in screen units.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct OverlayBounds {
    pub x: f32,
    pub y: f32,
    pub size: f32,
}

impl OverlayBounds {
    /// Inclusive on all edges; empty bounds never hit.
    pub fn contains(&self, px: f32, py: f32) -> bool {
        if self.size <= 0.0 {
            return false;
        }
        px >= self.x && px <= self.x + self.size && py >= self.y && py <= self.y + self.size
    }
}

/// An axis-aligned rectangle given by its centre.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CenteredRect {
    pub center: Vec2,
    pub size: Vec2,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Glyph {
    /// Two vertical bars, shown while actively playing.
    Pause([CenteredRect; 2]),
    /// Right-pointing triangle, shown otherwise.
    Play([Vec2; 3]),
}

impl Glyph {
    pub fn for_bounds(bounds: OverlayBounds, playing: bool) -> Self {
        let s = bounds.size;
        let c = Vec2::new(bounds.x + s / 2.0 + 2.0, bounds.y + s / 2.0 - 1.0);
        if playing {
            let bar = Vec2::new(s * 0.18, s * 0.5);
            let spacing = s * 0.12;
            Glyph::Pause([
                CenteredRect {
                    center: Vec2::new(c.x - spacing, c.y),
                    size: bar,
                },
                CenteredRect {
                    center: Vec2::new(c.x + spacing, c.y),
                    size: bar,
                },
            ])
        } else {
            Glyph::Play([
                Vec2::new(c.x - s * 0.18, c.y - s * 0.28),
                Vec2::new(c.x - s * 0.18, c.y + s * 0.28),
                Vec2::new(c.x + s * 0.22, c.y),
            ])
        }
    }
}

/// Everything a front-end needs to paint the overlay for one frame.
#[derive(Clone, Debug, PartialEq)]
pub struct OverlayFrame {
    pub label: String,
    /// Right/bottom anchor of the label text.
    pub label_anchor: Vec2,
    pub font_size: f32,
    pub button: OverlayBounds,
    pub glyph: Glyph,
    pub rgba: [u8; 4],
}

#[derive(Clone, Debug)]
pub struct Overlay {
    style: OverlayStyle,
}

impl Overlay {
    pub fn new(style: OverlayStyle) -> Self {
        Self { style }
    }

    pub fn style(&self) -> &OverlayStyle {
        &self.style
    }

    /// CSS font shorthand for the label.
    pub fn css_font(&self) -> String {
        format!("{}px {}", self.style.font_size, self.style.font_family)
    }

    /// Place the glyph left of a label `label_width` wide, never further left
    /// than the margin.
    pub fn layout(&self, viewport: Viewport, label_width: f32) -> OverlayBounds {
        let st = &self.style;
        let ts_x = viewport.width - st.margin;
        let ts_y = viewport.height - st.margin;
        let gap = st.font_size * OVERLAY_GAP_PER_FONT_SIZE;
        let x = (ts_x - label_width.max(0.0) - gap - st.button_size).max(st.margin);
        let y = ts_y - (st.font_size + st.button_size) / 2.0;
        OverlayBounds {
            x,
            y,
            size: st.button_size,
        }
    }

    pub fn frame(
        &self,
        viewport: Viewport,
        label: String,
        label_width: f32,
        playing: bool,
    ) -> OverlayFrame {
        let button = self.layout(viewport, label_width);
        OverlayFrame {
            label,
            label_anchor: Vec2::new(
                viewport.width - self.style.margin,
                viewport.height - self.style.margin,
            ),
            font_size: self.style.font_size,
            button,
            glyph: Glyph::for_bounds(button, playing),
            rgba: [self.style.rgb[0], self.style.rgb[1], self.style.rgb[2], self.style.alpha],
        }
    }
}
