// Recording fakes for the audio and drawing collaborators.
#![allow(dead_code)]

use tunnel_core::{
    AudioTransport, CircleDef, DrawTransform, PathGeometry, StrokeStyle, StrokeSurface, TunnelError,
};

#[derive(Clone, Debug, PartialEq)]
pub enum AudioCall {
    Play(Option<f64>),
    Pause,
    Stop,
}

#[derive(Default)]
pub struct FakeAudio {
    pub calls: Vec<AudioCall>,
    pub playing: bool,
    pub position: f64,
    pub duration: Option<f64>,
}

impl FakeAudio {
    pub fn with_duration(duration: f64) -> Self {
        Self {
            duration: Some(duration),
            ..Self::default()
        }
    }

    pub fn plays(&self) -> Vec<Option<f64>> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                AudioCall::Play(o) => Some(*o),
                _ => None,
            })
            .collect()
    }
}

impl AudioTransport for FakeAudio {
    fn play(&mut self, start_offset_sec: Option<f64>) {
        self.calls.push(AudioCall::Play(start_offset_sec));
        self.playing = true;
        self.position = start_offset_sec.unwrap_or(0.0);
    }
    fn pause(&mut self) {
        self.calls.push(AudioCall::Pause);
        self.playing = false;
    }
    fn stop(&mut self) {
        self.calls.push(AudioCall::Stop);
        self.playing = false;
        self.position = 0.0;
    }
    fn current_position(&self) -> f64 {
        self.position
    }
    fn duration(&self) -> Option<f64> {
        self.duration
    }
    fn is_playing(&self) -> bool {
        self.playing
    }
}

#[derive(Clone, Debug)]
pub struct StrokeCall {
    pub transform: DrawTransform,
    pub style: StrokeStyle,
    pub paths: usize,
    pub circles: usize,
}

/// Records every stroke. When `fail_above_scale` is set, path strokes drawn
/// larger than that scale are rejected.
#[derive(Default)]
pub struct RecordingSurface {
    pub calls: Vec<StrokeCall>,
    pub fail_above_scale: Option<f32>,
}

impl StrokeSurface for RecordingSurface {
    fn stroke_paths(
        &mut self,
        paths: &[PathGeometry],
        transform: &DrawTransform,
        style: &StrokeStyle,
    ) -> Result<(), TunnelError> {
        if self.fail_above_scale.is_some_and(|s| transform.scale > s) {
            return Err(TunnelError::surface("rejected"));
        }
        self.calls.push(StrokeCall {
            transform: *transform,
            style: *style,
            paths: paths.len(),
            circles: 0,
        });
        Ok(())
    }

    fn stroke_circles(
        &mut self,
        circles: &[CircleDef],
        transform: &DrawTransform,
        style: &StrokeStyle,
    ) -> Result<(), TunnelError> {
        if let Some(last) = self.calls.last_mut() {
            if last.transform == *transform && last.circles == 0 {
                last.circles = circles.len();
                return Ok(());
            }
        }
        self.calls.push(StrokeCall {
            transform: *transform,
            style: *style,
            paths: 0,
            circles: circles.len(),
        });
        Ok(())
    }
}
