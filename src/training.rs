use crate::{
    error::{TrainingError, TrainingResult},
    model::{
        beatmap::{Beatmap, BeatmapId},
        hit_object::HitObject,
        mods::Mods,
        track::{Sample, Track},
    },
    projection::{ObjectTimingProjection, SpawnedObject},
    rate::{rate_at, SpeedChange},
    settings::TrainingSettings,
    target::{DifficultyTarget, DifficultyTargets, TargetKind, ValueChange},
    transfer::SettingsTransfer,
};

/// The Training mod.
///
/// Gradually moves a beatmap's difficulty from its authored values towards
/// user-configured targets over the course of the map. Playback speed ramps
/// from `1.0` towards the speed target and every hit object's approach rate
/// and circle size are interpolated by the object's position in the map.
///
/// # Example
///
/// ```
/// use rosu_training::{Beatmap, Training, TargetKind};
/// use rosu_training::model::{beatmap::BeatmapDifficulty, hit_object::HitObject};
///
/// let map = Beatmap::new(
///     BeatmapDifficulty::new(1).ar(9.0).cs(4.0),
///     vec![HitObject::circle(0.0), HitObject::circle(5000.0), HitObject::circle(10_000.0)],
/// );
///
/// let mut training = Training::new();
/// training.set_target(TargetKind::ApproachRate, 5.0);
/// training.apply_to_beatmap(&map);
///
/// let spawned = training.spawn(&map.hit_objects[1]).unwrap();
/// assert_eq!(spawned.projection().approach_rate, 7.0);
/// ```
#[derive(Clone, Debug, Default)]
pub struct Training {
    targets: DifficultyTargets,
    transfer: SettingsTransfer,
    speed_change: SpeedChange,
    lifecycle: Lifecycle,
}

/// State of a [`Training`] instance.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub enum Lifecycle {
    /// No beatmap was applied yet.
    #[default]
    Unloaded,
    /// A beatmap was applied but no track yet.
    Loaded(BeatmapContext),
    /// Both beatmap and track were applied; the rate is updated every frame.
    Active {
        context: BeatmapContext,
        track_length: f64,
        /// Track position of the latest update.
        current_time: f64,
    },
}

impl Lifecycle {
    pub const fn context(&self) -> Option<&BeatmapContext> {
        match self {
            Self::Unloaded => None,
            Self::Loaded(context) | Self::Active { context, .. } => Some(context),
        }
    }
}

/// Data of the currently applied beatmap.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct BeatmapContext {
    pub id: BeatmapId,
    /// Start time of the map's last object, `0.0` if the map is empty.
    pub end_time: f64,
    /// Unmodified fade-in duration of the map's objects.
    pub time_fade_in: f64,
}

impl Training {
    pub const NAME: &'static str = "Training";
    pub const ACRONYM: &'static str = "TR";
    pub const DESCRIPTION: &'static str = "Increase/Decrease difficulty based on your performance.";
    pub const SCORE_MULTIPLIER: f64 = 1.0;
    pub const REQUIRES_CONFIGURATION: bool = true;

    /// Create a new [`Training`] mod with default targets.
    pub fn new() -> Self {
        Self::default()
    }

    /// Restore previously persisted targets.
    pub fn with_settings(mut self, settings: &TrainingSettings) -> Self {
        self.apply_settings(settings);

        self
    }

    /// Ensure the Training mod can be combined with the given mods.
    pub fn check_mods(mods: u32) -> TrainingResult<()> {
        match mods.training_conflicts() {
            0 => Ok(()),
            conflicts => Err(TrainingError::IncompatibleMods(conflicts)),
        }
    }

    pub const fn targets(&self) -> &DifficultyTargets {
        &self.targets
    }

    pub const fn target(&self, kind: TargetKind) -> &DifficultyTarget {
        match kind {
            TargetKind::Speed => self.targets.speed(),
            TargetKind::CircleSize => self.targets.circle_size(),
            TargetKind::ApproachRate => self.targets.approach_rate(),
            TargetKind::OverallDifficulty => self.targets.overall_difficulty(),
        }
    }

    pub const fn lifecycle(&self) -> &Lifecycle {
        &self.lifecycle
    }

    /// The live playback rate.
    pub const fn speed_change(&self) -> f64 {
        self.speed_change.value()
    }

    /// Summary of all targets that differ from their default.
    pub fn description(&self) -> String {
        self.targets.description()
    }

    /// Snapshot of all overridden targets.
    pub fn settings(&self) -> TrainingSettings {
        TrainingSettings::from_targets(&self.targets)
    }

    /// Restore previously persisted targets.
    ///
    /// Restored targets count as overridden.
    pub fn apply_settings(&mut self, settings: &TrainingSettings) {
        for kind in TargetKind::ALL {
            if let Some(value) = settings.get(kind) {
                let change = self.targets.get_mut(kind).restore(value);
                self.on_target_changed(kind, change);
            }
        }
    }

    /// Set a target's value.
    ///
    /// The value is clamped and rounded by the target's range. Changing the
    /// speed target immediately updates the live rate.
    pub fn set_target(&mut self, kind: TargetKind, value: f64) -> Option<ValueChange> {
        let change = self.targets.get_mut(kind).set_value(value);
        self.on_target_changed(kind, change);

        change
    }

    /// Revert a target to the beatmap's value and forget the override.
    pub fn reset_target(&mut self, kind: TargetKind) -> Option<ValueChange> {
        let change = self.targets.get_mut(kind).reset();
        self.on_target_changed(kind, change);

        change
    }

    fn on_target_changed(&mut self, kind: TargetKind, change: Option<ValueChange>) {
        let Some(ValueChange { old, new }) = change else {
            return;
        };

        tracing::debug!(%kind, old, new, "Target changed");

        if kind == TargetKind::Speed {
            self.recompute_rate();
        }
    }

    /// Apply a beatmap.
    ///
    /// The beatmap's difficulty is transferred onto the targets unless it's
    /// the same beatmap as before. Any previous beatmap state is discarded.
    pub fn apply_to_beatmap(&mut self, map: &Beatmap) {
        if self.transfer.read_from_difficulty(&mut self.targets, &map.difficulty) {
            tracing::debug!(id = %map.id(), "Transferred beatmap difficulty");
        }

        self.speed_change.set_default();

        let end_time = map.end_time().unwrap_or_else(|| {
            tracing::warn!(id = %map.id(), "Beatmap has no hit objects");

            0.0
        });

        let context = BeatmapContext {
            id: map.id(),
            end_time,
            time_fade_in: map.difficulty.time_fade_in(),
        };

        tracing::debug!(id = %context.id, end_time, "Applied beatmap");

        self.lifecycle = Lifecycle::Loaded(context);
    }

    /// Bind the live rate to the track.
    ///
    /// The rate is recomputed and pushed to the track right away.
    pub fn apply_to_track(&mut self, track: &mut dyn Track) -> TrainingResult<()> {
        let context = *self.lifecycle.context().ok_or(TrainingError::NotLoaded)?;

        self.lifecycle = Lifecycle::Active {
            context,
            track_length: track.length(),
            current_time: track.current_time(),
        };

        tracing::debug!(track_length = track.length(), "Applied track");

        self.recompute_rate();
        track.set_tempo(self.speed_change.value());

        Ok(())
    }

    /// Apply the live rate to a sample's frequency.
    pub fn apply_to_sample(&self, sample: &mut dyn Sample) {
        sample.set_frequency(self.speed_change.value());
    }

    /// Per-frame update: recompute the live rate from the track's position
    /// and push it to the track.
    pub fn update(&mut self, track: &mut dyn Track) -> TrainingResult<f64> {
        let Lifecycle::Active {
            ref mut track_length,
            ref mut current_time,
            ..
        } = self.lifecycle
        else {
            return Err(TrainingError::NotActive);
        };

        *track_length = track.length();
        *current_time = track.current_time();
        self.recompute_rate();

        let rate = self.speed_change.value();
        track.set_tempo(rate);

        Ok(rate)
    }

    /// Compute the difficulty of a hit object on the current beatmap.
    pub fn project(&self, h: &HitObject) -> TrainingResult<ObjectTimingProjection> {
        let context = self.lifecycle.context().ok_or(TrainingError::NotLoaded)?;

        Ok(ObjectTimingProjection::new(
            h.start_time,
            context.end_time,
            &self.targets,
        ))
    }

    /// Bind a hit object for display, applying its adjusted preempt and
    /// scale.
    pub fn spawn(&self, h: &HitObject) -> TrainingResult<SpawnedObject> {
        let context = self.lifecycle.context().ok_or(TrainingError::NotLoaded)?;
        let projection = ObjectTimingProjection::new(h.start_time, context.end_time, &self.targets);

        Ok(SpawnedObject::new(h, projection, context.time_fade_in))
    }

    /// Recompute the live rate at the latest track position.
    ///
    /// Until a track is bound the rate stays at its default.
    fn recompute_rate(&mut self) {
        let Lifecycle::Active {
            track_length,
            current_time,
            ..
        } = self.lifecycle
        else {
            return;
        };

        let rate = rate_at(self.targets.speed().value(), current_time, track_length);

        if self.speed_change.set(rate) {
            tracing::trace!(current_time, rate, "Updated speed change");
        }
    }
}
