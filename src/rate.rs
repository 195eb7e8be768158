use crate::util::{difficulty::lerp, float_ext::FloatExt};

/// Normalized position of `time` within `[0, duration]`.
///
/// The result is clamped to `[0, 1]`. A non-positive or non-finite duration,
/// e.g. a map whose only object is at time 0, yields `0.0`.
pub fn progress(time: f64, duration: f64) -> f64 {
    if duration <= 0.0 || !duration.is_finite() {
        return 0.0;
    }

    let progress = time / duration;

    if progress.is_nan() {
        0.0
    } else {
        progress.clamp(0.0, 1.0)
    }
}

/// Playback rate at `time` for a track of length `duration` when ramping
/// from `1.0` at the start towards `speed` at the end.
pub fn rate_at(speed: f64, time: f64, duration: f64) -> f64 {
    lerp(1.0, speed, progress(time, duration))
}

/// The live playback rate that is fed to the track and its samples.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SpeedChange {
    value: f64,
}

impl SpeedChange {
    pub const DEFAULT: f64 = 1.0;
    pub const PRECISION: f64 = 0.01;

    pub const fn new() -> Self {
        Self {
            value: Self::DEFAULT,
        }
    }

    pub const fn value(self) -> f64 {
        self.value
    }

    /// Store the rounded rate. Returns whether the stored value changed.
    pub fn set(&mut self, rate: f64) -> bool {
        let rate = rate.round_to_precision(Self::PRECISION);

        if rate.eq(self.value) {
            return false;
        }

        self.value = rate;

        true
    }

    pub fn set_default(&mut self) {
        self.value = Self::DEFAULT;
    }
}

impl Default for SpeedChange {
    fn default() -> Self {
        Self::new()
    }
}
