// ---------------- Native audio (hound + cpal) ----------------

use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use cpal::{FromSample, Sample, SizedSample};
use std::io::Read;
use std::path::Path;
use std::sync::{Arc, Mutex};
use tunnel_core::{AudioTransport, TunnelError};

fn load_err(e: impl std::fmt::Display) -> TunnelError {
    TunnelError::AudioLoad(e.to_string())
}

/// Whole track decoded to interleaved `f32` in `[-1, 1]`.
#[derive(Clone, Debug)]
pub struct DecodedTrack {
    pub samples: Vec<f32>,
    pub channels: usize,
    pub sample_rate: u32,
}

impl DecodedTrack {
    pub fn decode<R: Read>(reader: hound::WavReader<R>) -> Result<Self, TunnelError> {
        let spec = reader.spec();
        if spec.channels == 0 || spec.sample_rate == 0 {
            return Err(load_err("wav header has no channels or sample rate"));
        }
        let samples = match spec.sample_format {
            hound::SampleFormat::Float => reader
                .into_samples::<f32>()
                .collect::<Result<Vec<_>, _>>()
                .map_err(load_err)?,
            hound::SampleFormat::Int => {
                let full_scale = (1i64 << (spec.bits_per_sample.max(1) - 1)) as f32;
                reader
                    .into_samples::<i32>()
                    .map(|s| s.map(|v| v as f32 / full_scale))
                    .collect::<Result<Vec<_>, _>>()
                    .map_err(load_err)?
            }
        };
        Ok(Self {
            samples,
            channels: spec.channels as usize,
            sample_rate: spec.sample_rate,
        })
    }

    pub fn open(path: impl AsRef<Path>) -> Result<Self, TunnelError> {
        let reader = hound::WavReader::open(path.as_ref())
            .map_err(|e| load_err(format!("{}: {e}", path.as_ref().display())))?;
        Self::decode(reader)
    }

    pub fn frames(&self) -> usize {
        self.samples.len() / self.channels.max(1)
    }

    pub fn duration_sec(&self) -> f64 {
        self.frames() as f64 / self.sample_rate as f64
    }

    /// Sample of `frame` for output channel `ch`. Output channels beyond the
    /// source's reuse its last channel, so mono feeds both speakers.
    pub fn sample(&self, frame: usize, ch: usize) -> f32 {
        let ch = ch.min(self.channels.saturating_sub(1));
        self.samples
            .get(frame * self.channels + ch)
            .copied()
            .unwrap_or(0.0)
    }
}

/// Play head shared between the transport and the output callback.
#[derive(Debug)]
pub struct PlayerState {
    track: DecodedTrack,
    /// Position in source frames.
    cursor: f64,
    playing: bool,
}

impl PlayerState {
    pub fn new(track: DecodedTrack) -> Self {
        Self {
            track,
            cursor: 0.0,
            playing: false,
        }
    }

    pub fn seek(&mut self, sec: f64) {
        let frames = self.track.frames() as f64;
        self.cursor = (sec.max(0.0) * self.track.sample_rate as f64).min(frames);
    }

    pub fn position_sec(&self) -> f64 {
        self.cursor / self.track.sample_rate as f64
    }

    /// Source frame to emit next, advancing by `step` source frames. Stops at
    /// the end of the track.
    pub fn advance(&mut self, step: f64) -> Option<usize> {
        if !self.playing {
            return None;
        }
        let frame = self.cursor as usize;
        if frame >= self.track.frames() {
            self.playing = false;
            return None;
        }
        self.cursor += step;
        Some(frame)
    }
}

fn build_stream<T>(
    device: &cpal::Device,
    config: &cpal::StreamConfig,
    state: Arc<Mutex<PlayerState>>,
) -> Result<cpal::Stream, cpal::BuildStreamError>
where
    T: SizedSample + FromSample<f32>,
{
    let channels = config.channels.max(1) as usize;
    let out_rate = config.sample_rate.0.max(1) as f64;
    let err_fn = |err| log::error!("[audio] stream error: {err}");
    device.build_output_stream(
        config,
        move |data: &mut [T], _| {
            let Ok(mut guard) = state.lock() else {
                data.fill(T::EQUILIBRIUM);
                return;
            };
            let step = guard.track.sample_rate as f64 / out_rate;
            for frame in data.chunks_mut(channels) {
                let src = guard.advance(step);
                for (ch, out) in frame.iter_mut().enumerate() {
                    let v = src.map_or(0.0, |i| guard.track.sample(i, ch));
                    *out = T::from_sample(v);
                }
            }
        },
        err_fn,
        None,
    )
}

/// Plays a decoded WAV through the default output device.
pub struct NativeTransport {
    state: Arc<Mutex<PlayerState>>,
    duration: f64,
    _stream: cpal::Stream,
}

impl NativeTransport {
    pub fn open(path: &str) -> Result<Self, TunnelError> {
        let track = DecodedTrack::open(path)?;
        let duration = track.duration_sec();
        log::info!(
            "[audio] decoded {path}: {:.1}s, {} ch @ {} Hz",
            duration,
            track.channels,
            track.sample_rate
        );

        let host = cpal::default_host();
        let device = host
            .default_output_device()
            .ok_or_else(|| load_err("no output device"))?;
        let supported = device.default_output_config().map_err(load_err)?;
        let config: cpal::StreamConfig = supported.config();
        let state = Arc::new(Mutex::new(PlayerState::new(track)));

        let stream = match supported.sample_format() {
            cpal::SampleFormat::F32 => build_stream::<f32>(&device, &config, Arc::clone(&state)),
            cpal::SampleFormat::I16 => build_stream::<i16>(&device, &config, Arc::clone(&state)),
            cpal::SampleFormat::U16 => build_stream::<u16>(&device, &config, Arc::clone(&state)),
            other => return Err(load_err(format!("unsupported sample format {other:?}"))),
        }
        .map_err(load_err)?;
        stream.play().map_err(load_err)?;

        Ok(Self {
            state,
            duration,
            _stream: stream,
        })
    }

    fn with_state<R>(&self, f: impl FnOnce(&mut PlayerState) -> R) -> Option<R> {
        match self.state.lock() {
            Ok(mut guard) => Some(f(&mut guard)),
            Err(_) => {
                log::warn!("[audio] player state poisoned");
                None
            }
        }
    }
}

impl AudioTransport for NativeTransport {
    fn play(&mut self, start_offset_sec: Option<f64>) {
        self.with_state(|s| {
            s.seek(start_offset_sec.unwrap_or(0.0));
            s.playing = true;
        });
    }

    fn pause(&mut self) {
        self.with_state(|s| s.playing = false);
    }

    fn stop(&mut self) {
        self.with_state(|s| {
            s.playing = false;
            s.cursor = 0.0;
        });
    }

    fn current_position(&self) -> f64 {
        self.with_state(|s| s.position_sec()).unwrap_or(0.0)
    }

    fn duration(&self) -> Option<f64> {
        Some(self.duration)
    }

    fn is_playing(&self) -> bool {
        self.with_state(|s| s.playing).unwrap_or(false)
    }
}
