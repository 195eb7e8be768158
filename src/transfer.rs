use crate::{
    model::beatmap::{BeatmapDifficulty, BeatmapId},
    target::{DifficultyTarget, DifficultyTargets, TargetKind, ValueChange},
};

/// Reconcile a target with a beatmap's authored value.
///
/// The authored value always becomes the new default. The value follows
/// unless the user has overridden it.
pub fn transfer_setting(target: &mut DifficultyTarget, authored: f64) -> Option<ValueChange> {
    target.set_default(authored);

    if target.is_overridden() {
        None
    } else {
        target.apply_default()
    }
}

/// Transfers beatmap difficulties onto the targets, once per beatmap.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SettingsTransfer {
    last: Option<BeatmapId>,
}

impl SettingsTransfer {
    pub const fn new() -> Self {
        Self { last: None }
    }

    /// Id of the last transferred beatmap.
    pub const fn last(&self) -> Option<BeatmapId> {
        self.last
    }

    /// Transfer the difficulty's authored values onto all four targets.
    ///
    /// Nothing happens if the difficulty has the same id as the previously
    /// transferred one. Returns whether the transfer ran.
    pub fn read_from_difficulty(
        &mut self,
        targets: &mut DifficultyTargets,
        difficulty: &BeatmapDifficulty,
    ) -> bool {
        if self.last == Some(difficulty.id) {
            return false;
        }

        let authored = [
            (TargetKind::Speed, difficulty.base_speed),
            (TargetKind::CircleSize, difficulty.cs),
            (TargetKind::ApproachRate, difficulty.ar),
            (TargetKind::OverallDifficulty, difficulty.od),
        ];

        for (kind, value) in authored {
            let target = targets.get_mut(kind);

            if let Some(change) = transfer_setting(target, value) {
                tracing::debug!(%kind, old = change.old, new = change.new, "Transferred beatmap value");
            } else if target.is_overridden() {
                tracing::debug!(%kind, value = target.value(), "Kept overridden value");
            }
        }

        self.last = Some(difficulty.id);

        true
    }
}
