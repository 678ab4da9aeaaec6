/// Transport controls of the external audio player.
///
/// Calls are fire-and-forget requests; the playback state machine treats them
/// as immediately effective.
pub trait AudioTransport {
    /// Start playing, from `start_offset_sec` when given or from the top.
    fn play(&mut self, start_offset_sec: Option<f64>);
    fn pause(&mut self);
    /// Stop and rewind.
    fn stop(&mut self);
    fn current_position(&self) -> f64;
    /// Track length once known.
    fn duration(&self) -> Option<f64>;
    fn is_playing(&self) -> bool;
}

/// Transport used when no sound could be loaded. Visuals run on the nominal
/// timing alone.
#[derive(Clone, Copy, Debug, Default)]
pub struct SilentTransport;

impl AudioTransport for SilentTransport {
    fn play(&mut self, _start_offset_sec: Option<f64>) {}
    fn pause(&mut self) {}
    fn stop(&mut self) {}
    fn current_position(&self) -> f64 {
        0.0
    }
    fn duration(&self) -> Option<f64> {
        None
    }
    fn is_playing(&self) -> bool {
        false
    }
}

impl<T: AudioTransport + ?Sized> AudioTransport for Box<T> {
    fn play(&mut self, start_offset_sec: Option<f64>) {
        (**self).play(start_offset_sec)
    }
    fn pause(&mut self) {
        (**self).pause()
    }
    fn stop(&mut self) {
        (**self).stop()
    }
    fn current_position(&self) -> f64 {
        (**self).current_position()
    }
    fn duration(&self) -> Option<f64> {
        (**self).duration()
    }
    fn is_playing(&self) -> bool {
        (**self).is_playing()
    }
}
