use crate::util::difficulty::difficulty_range;

use super::BeatmapId;

/// The authored difficulty values of a beatmap.
///
/// These are the baselines that the Training targets interpolate from.
#[derive(Copy, Clone, Debug, PartialEq)]
#[must_use]
pub struct BeatmapDifficulty {
    /// Identity of the difficulty.
    pub id: BeatmapId,
    /// The approach rate.
    pub ar: f64,
    /// The overall difficulty.
    pub od: f64,
    /// The circle size.
    pub cs: f64,
    /// The base playback speed, `1.0` for every regular beatmap.
    pub base_speed: f64,
}

impl BeatmapDifficulty {
    /// Preempt in milliseconds at approach rate 0.
    pub const PREEMPT_MAX: f64 = 1800.0;
    /// Preempt in milliseconds at approach rate 5.
    pub const PREEMPT_MID: f64 = 1200.0;
    /// Preempt in milliseconds at approach rate 10.
    pub const PREEMPT_MIN: f64 = 450.0;

    /// Fade-in duration of objects whose preempt is at least
    /// [`PREEMPT_MIN`](Self::PREEMPT_MIN).
    pub const FADE_IN_DURATION: f64 = 400.0;

    /// Create a new [`BeatmapDifficulty`] for the given id.
    ///
    /// All attributes are set to `5.0` and the base speed to `1.0`.
    pub const fn new(id: u64) -> Self {
        Self {
            id: BeatmapId(id),
            ar: 5.0,
            od: 5.0,
            cs: 5.0,
            base_speed: 1.0,
        }
    }

    /// Specify the approach rate.
    pub const fn ar(self, ar: f64) -> Self {
        Self { ar, ..self }
    }

    /// Specify the overall difficulty.
    pub const fn od(self, od: f64) -> Self {
        Self { od, ..self }
    }

    /// Specify the circle size.
    pub const fn cs(self, cs: f64) -> Self {
        Self { cs, ..self }
    }

    /// Specify the base playback speed.
    pub const fn base_speed(self, base_speed: f64) -> Self {
        Self { base_speed, ..self }
    }

    /// Preempt of an object for the given approach rate, i.e. how many
    /// milliseconds before its start time the object appears.
    pub fn preempt_for(ar: f64) -> f64 {
        difficulty_range(ar, Self::PREEMPT_MAX, Self::PREEMPT_MID, Self::PREEMPT_MIN)
    }

    /// Fade-in duration for an object with the given preempt.
    pub fn fade_in_for(time_preempt: f64) -> f64 {
        Self::FADE_IN_DURATION * (time_preempt / Self::PREEMPT_MIN).min(1.0)
    }

    /// The unmodified preempt of this difficulty's approach rate.
    pub fn time_preempt(&self) -> f64 {
        Self::preempt_for(self.ar)
    }

    /// The unmodified fade-in duration of this difficulty's objects.
    pub fn time_fade_in(&self) -> f64 {
        Self::fade_in_for(self.time_preempt())
    }
}

impl Default for BeatmapDifficulty {
    fn default() -> Self {
        Self::new(0)
    }
}
