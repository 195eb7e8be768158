use crate::{
    model::beatmap::BeatmapDifficulty,
    rate::{self, rate_at},
    target::DifficultyTargets,
    util::difficulty::lerp,
};

pub use self::spawn::{
    ApproachCircleAnimation, SpawnedCircle, SpawnedKind, SpawnedObject, SpawnedPart,
    SpawnedSlider,
};

mod spawn;

/// Effective difficulty of a single hit object.
///
/// Computed once when the object is spawned and never mutated afterwards.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ObjectTimingProjection {
    /// Position of the object within the map in `[0, 1]`.
    pub progress: f64,
    /// Approach rate interpolated between the map's and the target value.
    pub approach_rate: f64,
    /// Circle size interpolated between the map's and the target value.
    pub circle_size: f64,
    /// Playback rate at the object's start time.
    pub local_rate: f64,
    /// Milliseconds before the start time at which the object appears.
    pub time_preempt: f64,
    /// Visual scale of the object.
    pub scale: f32,
}

impl ObjectTimingProjection {
    /// Project an object starting at `start_time` onto the current targets.
    ///
    /// `end_time` is the start time of the map's last object.
    pub fn new(start_time: f64, end_time: f64, targets: &DifficultyTargets) -> Self {
        let progress = object_progress(start_time, end_time);

        let ar = targets.approach_rate();
        let approach_rate = lerp(ar.default(), ar.value(), progress);

        let cs = targets.circle_size();
        let circle_size = lerp(cs.default(), cs.value(), progress);

        let local_rate = rate_at(targets.speed().value(), start_time, end_time);
        let time_preempt = BeatmapDifficulty::preempt_for(approach_rate) * local_rate;

        Self {
            progress,
            approach_rate,
            circle_size,
            local_rate,
            time_preempt,
            scale: scale_for(circle_size as f32),
        }
    }
}

/// Visual scale of an object with the given circle size.
pub fn scale_for(cs: f32) -> f32 {
    (1.0 - 0.7 * (cs - 5.0) / 5.0) / 2.0
}

fn object_progress(start_time: f64, end_time: f64) -> f64 {
    let progress = rate::progress(start_time, end_time);

    // The end time is the last object's start time so objects should never
    // fall outside of it
    if end_time > 0.0 {
        let raw = start_time / end_time;

        if !(0.0..=1.0).contains(&raw) {
            tracing::warn!(start_time, end_time, raw, "Clamped object progress");
        }
    }

    progress
}

#[cfg(test)]
mod tests {
    use crate::{target::TargetKind, util::float_ext::FloatExt};

    use super::*;

    fn targets(ar: f64, cs: f64, speed: f64) -> DifficultyTargets {
        let mut targets = DifficultyTargets::new();
        targets.get_mut(TargetKind::ApproachRate).set_value(ar);
        targets.get_mut(TargetKind::CircleSize).set_value(cs);
        targets.get_mut(TargetKind::Speed).set_value(speed);

        targets
    }

    #[test]
    fn untouched_targets_keep_map_values() {
        let targets = DifficultyTargets::new();

        for start_time in [0.0, 5000.0, 10_000.0] {
            let projection = ObjectTimingProjection::new(start_time, 10_000.0, &targets);

            assert!(projection.approach_rate.eq(9.0));
            assert!(projection.circle_size.eq(4.0));
            assert!(projection.local_rate.eq(1.0));
            assert!(projection.time_preempt.eq(600.0));
        }
    }

    #[test]
    fn interpolates_halfway() {
        let targets = targets(5.0, 6.0, 1.0);
        let projection = ObjectTimingProjection::new(5000.0, 10_000.0, &targets);

        assert!(projection.progress.eq(0.5));
        assert!(projection.approach_rate.eq(7.0), "{}", projection.approach_rate);
        assert!(projection.circle_size.eq(5.0), "{}", projection.circle_size);
        assert!(projection.time_preempt.eq(900.0), "{}", projection.time_preempt);
        assert!(projection.scale.eq(0.5), "{}", projection.scale);
    }

    #[test]
    fn preempt_scales_with_local_rate() {
        let targets = targets(9.0, 4.0, 1.5);
        let projection = ObjectTimingProjection::new(10_000.0, 10_000.0, &targets);

        assert!(projection.local_rate.eq(1.5));
        assert!(projection.time_preempt.eq(900.0), "{}", projection.time_preempt);
    }

    #[test]
    fn zero_end_time() {
        let targets = targets(5.0, 8.0, 2.0);
        let projection = ObjectTimingProjection::new(0.0, 0.0, &targets);

        assert!(projection.progress.eq(0.0));
        assert!(projection.approach_rate.eq(9.0));
        assert!(projection.circle_size.eq(4.0));
        assert!(projection.local_rate.eq(1.0));
        assert!(projection.time_preempt.is_finite());
    }

    #[test]
    fn objects_past_the_end_are_clamped() {
        let targets = targets(5.0, 4.0, 1.0);
        let projection = ObjectTimingProjection::new(15_000.0, 10_000.0, &targets);

        assert!(projection.progress.eq(1.0));
        assert!(projection.approach_rate.eq(5.0));
    }

    #[test]
    fn scale_calibration() {
        assert!(scale_for(5.0).eq(0.5));
        assert!(scale_for(0.0).eq(0.85));
        assert!(scale_for(10.0).eq(0.15), "{}", scale_for(10.0));
    }
}
