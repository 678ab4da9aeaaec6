//! Play/pause/restart state machine.
//!
//! [`Playback`] is the only owner of the scroll position and elapsed-frame
//! counter. Every transition issues its audio transport calls and updates the
//! visual state in the same step, so audio and visuals cannot drift apart.
//!
//! The restart delay is counted in ticks only; there is no separate
//! wall-clock timer that could fire a second, stale restart.

use crate::audio::AudioTransport;
use crate::timing::TimingModel;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PlaybackState {
    /// Nothing has played yet.
    Idle,
    Playing,
    /// Scroll frozen. `audio_position_sec` is where the track was paused, or
    /// `None` when no audio was playing at the time.
    Paused { audio_position_sec: Option<f64> },
    /// A pass just ended; the next starts once `frames_remaining` reaches 0.
    PendingRestart { frames_remaining: u32 },
}

/// Scroll position and elapsed-time counter.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TimingState {
    pub z_offset: f64,
    pub elapsed_frames: u64,
}

/// What a single [`Playback::tick`] did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickEvent {
    /// Idle or paused; nothing moved.
    Held,
    Advanced,
    /// The last slot passed the camera on this tick.
    EndReached,
    /// Counting down the restart delay.
    Waiting,
    /// A new pass started and advanced one tick.
    Restarted,
}

#[derive(Clone, Debug)]
pub struct Playback {
    state: PlaybackState,
    timing: TimingState,
    model: TimingModel,
    restart_frames: u32,
}

impl Playback {
    pub fn new(model: TimingModel, restart_delay_sec: f64) -> Self {
        Self {
            state: PlaybackState::Idle,
            timing: TimingState::default(),
            restart_frames: TimingModel::restart_frames(restart_delay_sec, model.frame_rate),
            model,
        }
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    pub fn timing_state(&self) -> TimingState {
        self.timing
    }

    pub fn model(&self) -> &TimingModel {
        &self.model
    }

    pub fn z_offset(&self) -> f64 {
        self.timing.z_offset
    }

    pub fn elapsed_frames(&self) -> u64 {
        self.timing.elapsed_frames
    }

    /// Elapsed time for display, never past the total.
    pub fn elapsed_seconds(&self) -> f64 {
        self.model
            .frames_to_seconds(self.timing.elapsed_frames)
            .min(self.model.total_seconds())
    }

    /// Actively playing: not idle, paused or waiting to restart.
    pub fn is_playing(&self) -> bool {
        self.state == PlaybackState::Playing
    }

    /// The tunnel is hidden between the end of one pass and the start of the next.
    pub fn renders_tunnel(&self) -> bool {
        !matches!(self.state, PlaybackState::PendingRestart { .. })
    }

    /// User play/pause request (glyph click or space bar).
    pub fn toggle(&mut self, audio: &mut dyn AudioTransport) -> PlaybackState {
        match self.state {
            PlaybackState::Idle | PlaybackState::PendingRestart { .. } => {
                self.start_cycle(audio);
            }
            PlaybackState::Playing => {
                let audio_position_sec = if audio.is_playing() {
                    let pos = audio.current_position();
                    audio.pause();
                    Some(pos)
                } else {
                    None
                };
                log::info!(
                    "[playback] paused at z={:.1} audio={:?}",
                    self.timing.z_offset,
                    audio_position_sec
                );
                self.state = PlaybackState::Paused { audio_position_sec };
            }
            PlaybackState::Paused { audio_position_sec } => {
                if let Some(pos) = audio_position_sec {
                    let cue = match audio.duration() {
                        Some(d) if d.is_finite() => pos.clamp(0.0, d.max(0.0)),
                        _ => pos.max(0.0),
                    };
                    audio.play(Some(cue));
                }
                log::info!("[playback] resumed at z={:.1}", self.timing.z_offset);
                self.state = PlaybackState::Playing;
            }
        }
        self.state
    }

    /// Advance one fixed tick.
    pub fn tick(&mut self, audio: &mut dyn AudioTransport) -> TickEvent {
        let mut event = TickEvent::Held;

        if self.state == (PlaybackState::PendingRestart { frames_remaining: 0 }) {
            self.start_cycle(audio);
            event = TickEvent::Restarted;
        }

        if self.state == PlaybackState::Playing {
            self.timing.z_offset += self.model.speed;
            self.increment_elapsed();
            if self.timing.z_offset >= self.model.end_distance {
                self.timing.z_offset = self.model.end_distance;
                audio.stop();
                self.state = PlaybackState::PendingRestart {
                    frames_remaining: self.restart_frames,
                };
                log::info!(
                    "[playback] end reached after {} frames; restart in {} frames",
                    self.timing.elapsed_frames,
                    self.restart_frames
                );
                event = TickEvent::EndReached;
            } else if event == TickEvent::Held {
                event = TickEvent::Advanced;
            }
        }

        if let PlaybackState::PendingRestart { frames_remaining } = &mut self.state {
            if *frames_remaining > 0 {
                *frames_remaining -= 1;
                self.timing.elapsed_frames =
                    (self.timing.elapsed_frames + 1).min(self.model.total_frames());
                if event == TickEvent::Held {
                    event = TickEvent::Waiting;
                }
            }
        }

        event
    }

    fn start_cycle(&mut self, audio: &mut dyn AudioTransport) {
        self.timing = TimingState::default();
        self.state = PlaybackState::Playing;
        audio.stop();
        audio.play(None);
        log::info!("[playback] cycle started");
    }

    fn increment_elapsed(&mut self) {
        if self.timing.elapsed_frames < self.model.total_frames() {
            self.timing.elapsed_frames += 1;
        }
    }
}
