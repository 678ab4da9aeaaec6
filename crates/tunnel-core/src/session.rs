use crate::audio::AudioTransport;
use crate::config::TunnelConfig;
use crate::error::Result;
use crate::overlay::{timestamp_label, Overlay, OverlayBounds, OverlayFrame};
use crate::playback::{Playback, PlaybackState, TickEvent};
use crate::sequence::ShapeSequence;
use crate::shapes::ShapeCatalog;
use crate::timing::TimingModel;
use crate::tunnel::{FrameStats, StrokeSurface, TunnelRenderer, Viewport};

/// All state of one running animation. No globals: front-ends own one of
/// these and pass their audio/drawing collaborators into each call.
#[derive(Clone, Debug)]
pub struct TunnelSession {
    config: TunnelConfig,
    catalog: ShapeCatalog,
    sequence: ShapeSequence,
    renderer: TunnelRenderer,
    playback: Playback,
    overlay: Overlay,
    viewport: Viewport,
    button: OverlayBounds,
}

impl TunnelSession {
    pub fn new(config: TunnelConfig, viewport: Viewport) -> Result<Self> {
        config.validate()?;
        let catalog = ShapeCatalog::compile();
        let sequence = ShapeSequence::build(config.primary_count, config.secondary_count);
        let timing = TimingModel::from_config(&config, sequence.len());
        log::info!(
            "[session] slots={} speed={:.4}/tick end={:.1} total={:.2}s",
            sequence.len(),
            timing.speed,
            timing.end_distance,
            timing.total_seconds()
        );
        if timing.is_stalled() {
            log::warn!("[session] tunnel cannot advance (empty sequence or zero duration)");
        }
        Ok(Self {
            renderer: TunnelRenderer::new(&config),
            playback: Playback::new(timing, config.restart_delay_sec),
            overlay: Overlay::new(config.overlay.clone()),
            config,
            catalog,
            sequence,
            viewport,
            button: OverlayBounds::default(),
        })
    }

    /// Advance one fixed tick.
    pub fn step(&mut self, audio: &mut dyn AudioTransport) -> TickEvent {
        self.playback.tick(audio)
    }

    /// Draw the tunnel for the current scroll position. Nothing is drawn
    /// while waiting to restart.
    pub fn render(&self, surface: &mut dyn StrokeSurface) -> FrameStats {
        if !self.playback.renders_tunnel() {
            return FrameStats::default();
        }
        self.renderer.render(
            &self.catalog,
            &self.sequence,
            self.playback.z_offset(),
            self.viewport,
            surface,
        )
    }

    pub fn toggle(&mut self, audio: &mut dyn AudioTransport) -> PlaybackState {
        self.playback.toggle(audio)
    }

    /// Pointer press in screen units. Toggles playback when it lands on the
    /// glyph laid out by the last [`layout_overlay`](Self::layout_overlay).
    pub fn pointer_pressed(&mut self, x: f32, y: f32, audio: &mut dyn AudioTransport) -> bool {
        if self.button.contains(x, y) {
            self.toggle(audio);
            true
        } else {
            false
        }
    }

    /// Only the viewport changes; scroll position, sequence and timing keep
    /// their pairing.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.viewport = Viewport::new(width, height);
        log::debug!("[session] resized to {width}x{height}");
    }

    pub fn overlay_label(&self) -> String {
        timestamp_label(
            self.playback.elapsed_seconds(),
            self.playback.model().total_seconds(),
        )
    }

    /// Lay out the overlay around a label of measured `label_width` and
    /// remember the glyph bounds for hit-testing.
    pub fn layout_overlay(&mut self, label_width: f32) -> OverlayFrame {
        let frame = self.overlay.frame(
            self.viewport,
            self.overlay_label(),
            label_width,
            self.playback.is_playing(),
        );
        self.button = frame.button;
        frame
    }

    pub fn config(&self) -> &TunnelConfig {
        &self.config
    }

    pub fn overlay(&self) -> &Overlay {
        &self.overlay
    }

    pub fn sequence(&self) -> &ShapeSequence {
        &self.sequence
    }

    pub fn catalog(&self) -> &ShapeCatalog {
        &self.catalog
    }

    pub fn timing(&self) -> &TimingModel {
        self.playback.model()
    }

    pub fn playback(&self) -> &Playback {
        &self.playback
    }

    pub fn state(&self) -> PlaybackState {
        self.playback.state()
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn button_bounds(&self) -> OverlayBounds {
        self.button
    }
}
