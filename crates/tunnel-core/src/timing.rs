use crate::config::TunnelConfig;

/// Inputs to [`TimingModel::derive`].
///
/// - `spacing`: z-distance between consecutive slots
/// - `sequence_len`: number of slots in the tunnel
/// - `audio_duration_sec`: nominal track length the pass is fitted to
/// - `visual_pad_sec`: extra seconds so visuals outlast the audio
/// - `restart_delay_sec`: blank pause between passes
/// - `perspective_distance`: camera-to-projection-plane distance
/// - `frame_rate`: ticks per second
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TimingInputs {
    pub spacing: f32,
    pub sequence_len: usize,
    pub audio_duration_sec: f64,
    pub visual_pad_sec: f64,
    pub restart_delay_sec: f64,
    pub perspective_distance: f32,
    pub frame_rate: f64,
}

impl TimingInputs {
    pub fn from_config(config: &TunnelConfig, sequence_len: usize) -> Self {
        Self {
            spacing: config.spacing,
            sequence_len,
            audio_duration_sec: config.audio_duration_sec,
            visual_pad_sec: config.visual_pad_sec,
            restart_delay_sec: config.restart_delay_sec,
            perspective_distance: config.perspective_distance,
            frame_rate: config.frame_rate,
        }
    }
}

/// Speed and duration figures for one pass through the tunnel.
///
/// Derived once whenever the sequence is built and read-only during playback.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TimingModel {
    pub tunnel_length: f64,
    /// Distance advanced per tick.
    pub speed: f64,
    /// z-offset at which the last slot has passed the camera.
    pub end_distance: f64,
    pub run_time_sec: f64,
    pub total_duration_sec: f64,
    pub frame_rate: f64,
    fallback_total_sec: f64,
}

impl TimingModel {
    pub fn derive(inputs: TimingInputs) -> Self {
        let spacing = inputs.spacing as f64;
        let len = inputs.sequence_len as f64;
        let tunnel_length = spacing * len;

        let denom = (inputs.audio_duration_sec + inputs.visual_pad_sec) * inputs.frame_rate;
        let speed = if denom > 0.0 && denom.is_finite() {
            tunnel_length / denom
        } else {
            0.0
        };

        let end_distance = ((len - 1.0) * spacing + inputs.perspective_distance as f64).max(0.0);

        let per_second = speed * inputs.frame_rate;
        let run_time_sec = if per_second > 0.0 {
            end_distance / per_second
        } else {
            0.0
        };

        Self {
            tunnel_length,
            speed,
            end_distance,
            run_time_sec,
            total_duration_sec: run_time_sec + inputs.restart_delay_sec,
            frame_rate: inputs.frame_rate,
            fallback_total_sec: inputs.audio_duration_sec
                + inputs.visual_pad_sec
                + inputs.restart_delay_sec,
        }
    }

    pub fn from_config(config: &TunnelConfig, sequence_len: usize) -> Self {
        Self::derive(TimingInputs::from_config(config, sequence_len))
    }

    /// Duration shown in the overlay; falls back to the nominal pass length
    /// when nothing moves.
    pub fn total_seconds(&self) -> f64 {
        if self.total_duration_sec > 0.0 {
            self.total_duration_sec
        } else {
            self.fallback_total_sec
        }
    }

    /// Upper bound for the elapsed-frame counter.
    pub fn total_frames(&self) -> u64 {
        (self.total_seconds() * self.frame_rate).round().max(0.0) as u64
    }

    /// Frames spent blank between passes.
    pub fn restart_frames(restart_delay_sec: f64, frame_rate: f64) -> u32 {
        (restart_delay_sec * frame_rate).round().max(0.0) as u32
    }

    pub fn frames_to_seconds(&self, frames: u64) -> f64 {
        if self.frame_rate > 0.0 {
            frames as f64 / self.frame_rate
        } else {
            0.0
        }
    }

    /// True when the animation cannot advance (empty tunnel or zero duration).
    pub fn is_stalled(&self) -> bool {
        self.speed <= 0.0
    }
}
