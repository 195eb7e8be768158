use std::ops::Index;

use super::{DifficultyTarget, TargetKind, TargetRange};

/// The Training mod's four targets.
#[derive(Clone, Debug, PartialEq)]
pub struct DifficultyTargets {
    pub(crate) speed: DifficultyTarget,
    pub(crate) circle_size: DifficultyTarget,
    pub(crate) approach_rate: DifficultyTarget,
    pub(crate) overall_difficulty: DifficultyTarget,
}

impl DifficultyTargets {
    /// All targets with their range's default as value.
    pub const fn new() -> Self {
        Self {
            speed: DifficultyTarget::new(TargetRange::SPEED),
            circle_size: DifficultyTarget::new(TargetRange::CIRCLE_SIZE),
            approach_rate: DifficultyTarget::new(TargetRange::APPROACH_RATE),
            overall_difficulty: DifficultyTarget::new(TargetRange::OVERALL_DIFFICULTY),
        }
    }

    pub const fn speed(&self) -> &DifficultyTarget {
        &self.speed
    }

    pub const fn circle_size(&self) -> &DifficultyTarget {
        &self.circle_size
    }

    pub const fn approach_rate(&self) -> &DifficultyTarget {
        &self.approach_rate
    }

    pub const fn overall_difficulty(&self) -> &DifficultyTarget {
        &self.overall_difficulty
    }

    pub(crate) fn get_mut(&mut self, kind: TargetKind) -> &mut DifficultyTarget {
        match kind {
            TargetKind::Speed => &mut self.speed,
            TargetKind::CircleSize => &mut self.circle_size,
            TargetKind::ApproachRate => &mut self.approach_rate,
            TargetKind::OverallDifficulty => &mut self.overall_difficulty,
        }
    }

    /// Iterate over all targets in their display order.
    pub fn iter(&self) -> impl Iterator<Item = (TargetKind, &DifficultyTarget)> + '_ {
        TargetKind::ALL.into_iter().map(move |kind| (kind, &self[kind]))
    }

    /// Human-readable summary of all targets that differ from their default,
    /// e.g. `"CS 5.0, 1.5x, AR 10.0"`.
    pub fn description(&self) -> String {
        let mut description = String::new();

        for (kind, target) in self.iter() {
            if target.is_default() {
                continue;
            }

            if !description.is_empty() {
                description.push_str(", ");
            }

            let value = target.value();

            let part = match kind {
                TargetKind::CircleSize => format!("CS {value:.1}"),
                TargetKind::Speed => format!("{value:.1}x"),
                TargetKind::OverallDifficulty => format!("OD {value:.1}"),
                TargetKind::ApproachRate => format!("AR {value:.1}"),
            };

            description.push_str(&part);
        }

        description
    }
}

impl Index<TargetKind> for DifficultyTargets {
    type Output = DifficultyTarget;

    fn index(&self, kind: TargetKind) -> &Self::Output {
        match kind {
            TargetKind::Speed => &self.speed,
            TargetKind::CircleSize => &self.circle_size,
            TargetKind::ApproachRate => &self.approach_rate,
            TargetKind::OverallDifficulty => &self.overall_difficulty,
        }
    }
}

impl Default for DifficultyTargets {
    fn default() -> Self {
        Self::new()
    }
}
