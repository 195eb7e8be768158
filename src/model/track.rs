/// The audio track of the current beatmap.
///
/// Implemented by the host's audio engine. The track's tempo is adjusted
/// through [`set_tempo`](Track::set_tempo) which changes playback speed
/// while preserving pitch.
pub trait Track {
    /// Current playback position in milliseconds.
    fn current_time(&self) -> f64;

    /// Total length of the track in milliseconds.
    fn length(&self) -> f64;

    /// Apply a tempo multiplier, replacing any previously applied one.
    fn set_tempo(&mut self, rate: f64);
}

/// A hitsound sample played alongside the track.
pub trait Sample {
    /// Apply a frequency multiplier, replacing any previously applied one.
    fn set_frequency(&mut self, rate: f64);
}
