use serde::{Deserialize, Serialize};

use crate::target::{DifficultyTargets, TargetKind};

/// Persistable snapshot of the user's overridden targets.
///
/// Targets that were never overridden are omitted so that they keep
/// following the beatmap once the settings are restored.
///
/// # Example
///
/// ```
/// use rosu_training::{Training, TrainingSettings};
///
/// let settings = TrainingSettings {
///     speed: Some(1.5),
///     ..Default::default()
/// };
///
/// let training = Training::new().with_settings(&settings);
/// assert_eq!(training.description(), "1.5x");
/// assert_eq!(training.settings(), settings);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "snake_case")]
pub struct TrainingSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub speed: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub circle_size: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub approach_rate: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overall_difficulty: Option<f64>,
}

impl TrainingSettings {
    /// Snapshot all overridden targets.
    pub fn from_targets(targets: &DifficultyTargets) -> Self {
        let value = |kind: TargetKind| {
            let target = &targets[kind];

            target.is_overridden().then(|| target.value())
        };

        Self {
            speed: value(TargetKind::Speed),
            circle_size: value(TargetKind::CircleSize),
            approach_rate: value(TargetKind::ApproachRate),
            overall_difficulty: value(TargetKind::OverallDifficulty),
        }
    }

    /// The stored value for the given target.
    pub const fn get(&self, kind: TargetKind) -> Option<f64> {
        match kind {
            TargetKind::Speed => self.speed,
            TargetKind::CircleSize => self.circle_size,
            TargetKind::ApproachRate => self.approach_rate,
            TargetKind::OverallDifficulty => self.overall_difficulty,
        }
    }

    /// Whether no target is stored.
    pub const fn is_empty(&self) -> bool {
        self.speed.is_none()
            && self.circle_size.is_none()
            && self.approach_rate.is_none()
            && self.overall_difficulty.is_none()
    }
}
