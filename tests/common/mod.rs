#![allow(unused)]

use rosu_training::{
    model::{
        beatmap::BeatmapDifficulty,
        hit_object::HitObject,
        track::{Sample, Track},
    },
    Beatmap,
};

/// Map with circles at 0s, 5s, and 10s.
pub fn three_circles(id: u64) -> Beatmap {
    Beatmap::new(
        BeatmapDifficulty::new(id).ar(9.0).cs(4.0).od(8.0),
        vec![
            HitObject::circle(0.0),
            HitObject::circle(5000.0),
            HitObject::circle(10_000.0),
        ],
    )
}

#[track_caller]
pub fn assert_eq_float<F: Float>(a: F, b: F) {
    assert!((a - b).abs() < F::EPSILON, "{a} != {b}")
}

/// Compare floats with a tolerance that accounts for decimal rounding.
#[track_caller]
pub fn assert_close(a: f64, b: f64) {
    assert!((a - b).abs() < 1e-9, "{a} != {b}")
}

/// Trait to provide flexibility in the `assert_eq_float` function.
pub trait Float:
    Copy + std::fmt::Display + std::ops::Sub<Output = Self> + PartialOrd + Sized
{
    const EPSILON: Self;

    fn abs(self) -> Self;
}

macro_rules! impl_float {
    ( $( $ty:ty )* ) => {
        $(
            impl Float for $ty {
                const EPSILON: Self = Self::EPSILON;

                fn abs(self) -> Self {
                    self.abs()
                }
            }
        )*
    }
}

impl_float!(f32 f64);

/// Track whose position is moved manually.
#[derive(Debug)]
pub struct ManualTrack {
    pub time: f64,
    pub length: f64,
    pub tempo: Option<f64>,
    pub tempo_writes: usize,
}

impl ManualTrack {
    pub const fn new(length: f64) -> Self {
        Self {
            time: 0.0,
            length,
            tempo: None,
            tempo_writes: 0,
        }
    }
}

impl Track for ManualTrack {
    fn current_time(&self) -> f64 {
        self.time
    }

    fn length(&self) -> f64 {
        self.length
    }

    fn set_tempo(&mut self, rate: f64) {
        self.tempo = Some(rate);
        self.tempo_writes += 1;
    }
}

#[derive(Debug, Default)]
pub struct RecordingSample {
    pub frequency: Option<f64>,
}

impl Sample for RecordingSample {
    fn set_frequency(&mut self, rate: f64) {
        self.frequency = Some(rate);
    }
}
