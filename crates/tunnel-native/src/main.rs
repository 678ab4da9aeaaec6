use clap::Parser;
use std::time::Instant;
use tunnel_core::{
    AudioTransport, FramePacer, KeyAction, SilentTransport, TunnelConfig, TunnelSession, Viewport,
    DEFAULT_AUDIO_PATH, DEFAULT_PRIMARY_COUNT, DEFAULT_RESTART_DELAY_SEC, DEFAULT_SECONDARY_COUNT,
    MAX_CATCH_UP_TICKS,
};
use winit::{
    event::*,
    event_loop::EventLoop,
    keyboard::{Key, NamedKey},
    window::{Fullscreen, Window, WindowBuilder},
};

mod audio;
mod geometry;
mod gpu;

use geometry::GeometrySurface;
use gpu::GpuState;

/// Rough monospace advance used to place the glyph; the label itself is
/// shown in the window title.
const LABEL_ADVANCE_PER_FONT_SIZE: f32 = 0.6;
const WINDOW_TITLE: &str = "tunnel";

#[derive(Parser, Debug)]
#[command(
    version,
    about = "Perspective tunnel animation synchronized to an audio track",
    long_about = None
)]
struct Args {
    /// WAV file to play alongside the animation.
    #[arg(long, default_value = DEFAULT_AUDIO_PATH)]
    audio: String,
    /// Number of primary (full-height) outlines.
    #[arg(long, default_value_t = DEFAULT_PRIMARY_COUNT)]
    primary: usize,
    /// Number of secondary (cut-off) outlines.
    #[arg(long, default_value_t = DEFAULT_SECONDARY_COUNT)]
    secondary: usize,
    /// Seconds of blank screen between passes.
    #[arg(long, default_value_t = DEFAULT_RESTART_DELAY_SEC)]
    restart_delay: f64,
    /// Start in borderless fullscreen.
    #[arg(long)]
    fullscreen: bool,
}

impl Args {
    fn to_config(&self) -> TunnelConfig {
        TunnelConfig {
            audio_path: self.audio.clone(),
            primary_count: self.primary,
            secondary_count: self.secondary,
            restart_delay_sec: self.restart_delay,
            ..TunnelConfig::default()
        }
    }
}

fn label_width(label: &str, font_size: f32) -> f32 {
    label.chars().count() as f32 * font_size * LABEL_ADVANCE_PER_FONT_SIZE
}

/// DOM-style key value for the keys the session understands.
fn key_value(key: &Key) -> Option<&str> {
    match key {
        Key::Named(NamedKey::Space) => Some("Space"),
        Key::Named(NamedKey::Escape) => Some("Escape"),
        Key::Character(s) => Some(s.as_str()),
        _ => None,
    }
}

fn logical_size(window: &Window) -> (f32, f32) {
    let size = window.inner_size().to_logical::<f32>(window.scale_factor());
    (size.width, size.height)
}

fn build_audio(config: &TunnelConfig) -> Box<dyn AudioTransport> {
    match audio::NativeTransport::open(&config.audio_path) {
        Ok(t) => Box::new(t),
        Err(e) => {
            log::warn!("[main] {e}; continuing without sound");
            Box::new(SilentTransport)
        }
    }
}

fn toggle_fullscreen(window: &Window) {
    if window.fullscreen().is_some() {
        window.set_fullscreen(None);
    } else {
        window.set_fullscreen(Some(Fullscreen::Borderless(None)));
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let args = Args::parse();
    let config = args.to_config();

    let event_loop = EventLoop::new()?;
    let window = WindowBuilder::new()
        .with_title(WINDOW_TITLE)
        .build(&event_loop)?;
    if args.fullscreen {
        toggle_fullscreen(&window);
    }

    let mut audio = build_audio(&config);
    let (w, h) = logical_size(&window);
    let mut session = TunnelSession::new(config, Viewport::new(w, h))?;
    let mut pacer = FramePacer::new(session.config().frame_rate, MAX_CATCH_UP_TICKS);
    let font_size = session.overlay().style().font_size;

    let mut state = pollster::block_on(GpuState::new(&window))?;
    let mut surface = GeometrySurface::new();
    let mut cursor = (0.0_f32, 0.0_f32);
    let mut last_frame = Instant::now();
    let mut title = String::new();

    event_loop.run(move |event, elwt| match event {
        Event::WindowEvent {
            event: WindowEvent::Resized(size),
            ..
        } => {
            state.resize(size);
            let (w, h) = logical_size(state.window);
            session.resize(w, h);
        }
        Event::WindowEvent {
            event: WindowEvent::CloseRequested,
            ..
        } => elwt.exit(),
        Event::WindowEvent {
            event: WindowEvent::CursorMoved { position, .. },
            ..
        } => {
            let p = position.to_logical::<f32>(state.window.scale_factor());
            cursor = (p.x, p.y);
        }
        Event::WindowEvent {
            event:
                WindowEvent::MouseInput {
                    state: ElementState::Pressed,
                    button: MouseButton::Left,
                    ..
                },
            ..
        } => {
            session.pointer_pressed(cursor.0, cursor.1, audio.as_mut());
        }
        Event::WindowEvent {
            event:
                WindowEvent::KeyboardInput {
                    event:
                        KeyEvent {
                            logical_key,
                            state: ElementState::Pressed,
                            repeat: false,
                            ..
                        },
                    ..
                },
            ..
        } => match key_value(&logical_key).and_then(KeyAction::from_key) {
            Some(KeyAction::TogglePlayback) => {
                session.toggle(audio.as_mut());
            }
            Some(KeyAction::ToggleFullscreen) => toggle_fullscreen(state.window),
            Some(KeyAction::ExitFullscreen) => state.window.set_fullscreen(None),
            None => {}
        },
        Event::AboutToWait => {
            let now = Instant::now();
            let ticks = pacer.advance(now - last_frame);
            last_frame = now;
            for _ in 0..ticks {
                session.step(audio.as_mut());
            }

            surface.clear();
            let stats = session.render(&mut surface);
            if stats.failed > 0 {
                log::debug!("[main] {} shapes failed to draw", stats.failed);
            }
            let label = session.overlay_label();
            let overlay = session.layout_overlay(label_width(&label, font_size));
            surface.fill_glyph(&overlay);
            if label != title {
                state.window.set_title(&format!("{WINDOW_TITLE} {label}"));
                title = label;
            }

            let vp = session.viewport();
            match state.render(&surface.buffers, [vp.width, vp.height]) {
                Ok(_) => state.window.request_redraw(),
                Err(wgpu::SurfaceError::Lost) => state.resize(state.window.inner_size()),
                Err(wgpu::SurfaceError::OutOfMemory) => elwt.exit(),
                Err(_) => {}
            }
        }
        _ => {}
    })?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn args_override_defaults() {
        let args = Args::parse_from([
            "tunnel",
            "--audio",
            "other.wav",
            "--primary",
            "3",
            "--secondary",
            "40",
            "--restart-delay",
            "1.5",
        ]);
        let cfg = args.to_config();
        assert_eq!(cfg.audio_path, "other.wav");
        assert_eq!(cfg.primary_count, 3);
        assert_eq!(cfg.secondary_count, 40);
        assert_eq!(cfg.restart_delay_sec, 1.5);
        assert_eq!(cfg.spacing, TunnelConfig::default().spacing);
        assert!(!args.fullscreen);
    }

    #[test]
    fn version_comes_from_the_workspace() {
        let cmd = Args::command();
        assert_eq!(cmd.get_version(), Some(env!("CARGO_PKG_VERSION")));
        assert_eq!(env!("CARGO_PKG_VERSION"), "0.1.0");
        assert!(cmd.get_author().is_none());
    }

    #[test]
    fn no_args_means_default_config() {
        let args = Args::parse_from(["tunnel"]);
        assert_eq!(args.to_config(), TunnelConfig::default());
    }

    #[test]
    fn named_keys_map_to_dom_values() {
        assert_eq!(key_value(&Key::Named(NamedKey::Space)), Some("Space"));
        assert_eq!(key_value(&Key::Named(NamedKey::Escape)), Some("Escape"));
        assert_eq!(key_value(&Key::Named(NamedKey::Enter)), None);
        assert_eq!(key_value(&Key::Character("f".into())), Some("f"));
    }

    #[test]
    fn label_width_grows_with_text() {
        assert_eq!(label_width("", 16.0), 0.0);
        assert!((label_width("00:00/02:21", 16.0) - 11.0 * 16.0 * 0.6).abs() < 1e-4);
    }
}
