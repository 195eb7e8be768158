//! Adaptive difficulty scaling for [osu!]'s Training mod.
//!
//! ## Description
//!
//! The Training mod ramps a beatmap's difficulty from its authored values
//! towards user-configured targets over the course of the map:
//!
//!   - the playback speed goes from `1.0` at the start of the track to the
//!     speed target at its end,
//!   - every hit object's approach rate and circle size are interpolated
//!     between the beatmap's value and the target by the object's position in
//!     the map, `0.0` for the first object and `1.0` for the last.
//!
//! Targets that the user changed are kept across beatmaps, all others follow
//! the values of each newly applied beatmap.
//!
//! ## Usage
//!
//! ```
//! use rosu_training::{Beatmap, TargetKind, Training};
//! use rosu_training::model::{beatmap::BeatmapDifficulty, hit_object::HitObject, track::Track};
//!
//! # struct AudioTrack { time: f64, tempo: f64 }
//! # impl Track for AudioTrack {
//! #     fn current_time(&self) -> f64 { self.time }
//! #     fn length(&self) -> f64 { 60_000.0 }
//! #     fn set_tempo(&mut self, rate: f64) { self.tempo = rate }
//! # }
//! let map = Beatmap::new(
//!     BeatmapDifficulty::new(2785319).ar(9.0).cs(4.0).od(8.0),
//!     vec![HitObject::circle(1000.0), HitObject::slider(30_000.0, 400.0, 1)],
//! );
//!
//! let mut training = Training::new();
//! training.set_target(TargetKind::Speed, 1.5);
//! training.set_target(TargetKind::ApproachRate, 10.0);
//!
//! // Transfer the map's difficulty and remember its end time
//! training.apply_to_beatmap(&map);
//!
//! // Bind the live rate to the audio track
//! let mut track = AudioTrack { time: 0.0, tempo: 1.0 };
//! training.apply_to_track(&mut track).unwrap();
//!
//! // Every frame
//! track.time = 30_000.0;
//! let rate = training.update(&mut track).unwrap();
//! assert_eq!(rate, 1.25);
//!
//! // Whenever a hit object is bound for display
//! let spawned = training.spawn(&map.hit_objects[1]).unwrap();
//! let preempt = spawned.time_preempt();
//!
//! println!("{} | preempt: {preempt:?}", training.description());
//! ```
//!
//! ## Logging
//!
//! Beatmap transfers, target changes, and suspicious input such as empty
//! beatmaps are logged through [`tracing`]. Install a subscriber to see them.
//!
//! [osu!]: https://osu.ppy.sh/home
//! [`tracing`]: https://docs.rs/tracing

#![deny(rustdoc::broken_intra_doc_links)]
#![warn(clippy::missing_const_for_fn, clippy::pedantic)]
#![allow(
    clippy::missing_errors_doc,
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss
)]

#[doc(inline)]
pub use self::{
    error::{TrainingError, TrainingResult},
    model::beatmap::Beatmap,
    settings::TrainingSettings,
    target::{DifficultyTarget, DifficultyTargets, TargetKind},
    training::{BeatmapContext, Lifecycle, Training},
};

/// Types used in and around this crate.
pub mod model;

/// User-configurable targets.
pub mod target;

/// Reconciling targets with beatmap difficulties.
pub mod transfer;

/// Playback rate interpolation.
pub mod rate;

/// Per-object difficulty.
pub mod projection;

mod error;
mod settings;
mod training;
mod util;
