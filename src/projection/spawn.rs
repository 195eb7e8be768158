use crate::model::hit_object::{HitObject, HitObjectKind};

use super::ObjectTimingProjection;

/// A hit object that has been bound for display alongside the adjustments
/// the Training mod applied to it.
///
/// The adjustments are computed exactly once on creation; there is no way
/// to recompute them on an existing instance.
#[derive(Clone, Debug, PartialEq)]
pub struct SpawnedObject {
    start_time: f64,
    projection: ObjectTimingProjection,
    kind: SpawnedKind,
}

/// Kind-specific adjustments of a [`SpawnedObject`].
#[derive(Clone, Debug, PartialEq)]
pub enum SpawnedKind {
    Circle(SpawnedCircle),
    Slider(SpawnedSlider),
    /// Spinners are not adjusted.
    Spinner,
}

/// Adjustments of a circle.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SpawnedCircle {
    pub time_preempt: f64,
    pub scale: f32,
    pub approach_circle: ApproachCircleAnimation,
}

/// Adjustments of a slider and its nested circles.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SpawnedSlider {
    /// Scale of the slider body.
    pub scale: f32,
    pub head: SpawnedPart,
    pub tail: SpawnedPart,
}

/// Adjustments of a nested part of a composite object.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SpawnedPart {
    /// `None` if the part keeps its unmodified preempt.
    pub time_preempt: Option<f64>,
    pub scale: f32,
}

/// Timeline of a circle's approach indicator.
///
/// At [`start_time`] the indicator jumps to [`initial_scale`] and starts
/// fading in over [`fade_in_duration`] while shrinking to [`final_scale`]
/// over [`shrink_duration`]. It expires once the shrinking is done.
///
/// [`start_time`]: ApproachCircleAnimation::start_time
/// [`initial_scale`]: ApproachCircleAnimation::initial_scale
/// [`fade_in_duration`]: ApproachCircleAnimation::fade_in_duration
/// [`final_scale`]: ApproachCircleAnimation::final_scale
/// [`shrink_duration`]: ApproachCircleAnimation::shrink_duration
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ApproachCircleAnimation {
    pub start_time: f64,
    pub initial_scale: f32,
    pub final_scale: f32,
    pub fade_in_duration: f64,
    pub shrink_duration: f64,
}

impl ApproachCircleAnimation {
    pub const INITIAL_SCALE: f32 = 4.0;
    pub const FINAL_SCALE: f32 = 1.0;

    /// Anchor the animation so that it finishes exactly at `hit_time`.
    pub fn new(hit_time: f64, time_preempt: f64, time_fade_in: f64) -> Self {
        Self {
            start_time: hit_time - time_preempt,
            initial_scale: Self::INITIAL_SCALE,
            final_scale: Self::FINAL_SCALE,
            fade_in_duration: time_fade_in.min(time_preempt),
            shrink_duration: time_preempt,
        }
    }

    /// Time at which the indicator expires.
    pub fn expire_time(&self) -> f64 {
        self.start_time + self.shrink_duration
    }
}

impl SpawnedObject {
    /// Apply a projection onto a hit object.
    ///
    /// `time_fade_in` is the object's unmodified fade-in duration.
    pub(crate) fn new(h: &HitObject, projection: ObjectTimingProjection, time_fade_in: f64) -> Self {
        let ObjectTimingProjection {
            time_preempt,
            scale,
            ..
        } = projection;

        let kind = match h.kind {
            HitObjectKind::Circle => SpawnedKind::Circle(SpawnedCircle {
                time_preempt,
                scale,
                approach_circle: ApproachCircleAnimation::new(
                    h.start_time,
                    time_preempt,
                    time_fade_in,
                ),
            }),
            HitObjectKind::Slider(_) => SpawnedKind::Slider(SpawnedSlider {
                scale,
                head: SpawnedPart {
                    time_preempt: Some(time_preempt),
                    scale,
                },
                tail: SpawnedPart {
                    time_preempt: None,
                    scale,
                },
            }),
            HitObjectKind::Spinner(_) => SpawnedKind::Spinner,
        };

        Self {
            start_time: h.start_time,
            projection,
            kind,
        }
    }

    pub const fn start_time(&self) -> f64 {
        self.start_time
    }

    pub const fn projection(&self) -> &ObjectTimingProjection {
        &self.projection
    }

    pub const fn kind(&self) -> &SpawnedKind {
        &self.kind
    }

    /// The adjusted preempt of the object itself or its head.
    pub const fn time_preempt(&self) -> Option<f64> {
        match self.kind {
            SpawnedKind::Circle(ref circle) => Some(circle.time_preempt),
            SpawnedKind::Slider(ref slider) => slider.head.time_preempt,
            SpawnedKind::Spinner => None,
        }
    }

    /// The adjusted scale of the object.
    pub const fn scale(&self) -> Option<f32> {
        match self.kind {
            SpawnedKind::Circle(ref circle) => Some(circle.scale),
            SpawnedKind::Slider(ref slider) => Some(slider.scale),
            SpawnedKind::Spinner => None,
        }
    }

    /// The approach indicator's animation if the object is a circle.
    pub const fn approach_circle(&self) -> Option<&ApproachCircleAnimation> {
        match self.kind {
            SpawnedKind::Circle(ref circle) => Some(&circle.approach_circle),
            SpawnedKind::Slider(_) | SpawnedKind::Spinner => None,
        }
    }
}
