use std::fmt::{Display, Formatter, Result as FmtResult};

use crate::util::float_ext::FloatExt;

pub use self::store::DifficultyTargets;

mod store;

/// The four tunables of the Training mod.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TargetKind {
    /// Maximal playback speed.
    Speed,
    /// Maximal circle size.
    CircleSize,
    /// Maximal approach rate.
    ApproachRate,
    /// Maximal overall difficulty i.e. accuracy.
    OverallDifficulty,
}

impl TargetKind {
    /// All kinds in their display order.
    pub const ALL: [Self; 4] = [
        Self::CircleSize,
        Self::Speed,
        Self::OverallDifficulty,
        Self::ApproachRate,
    ];

    /// The fixed range of this kind's target.
    pub const fn range(self) -> TargetRange {
        match self {
            Self::Speed => TargetRange::SPEED,
            Self::CircleSize => TargetRange::CIRCLE_SIZE,
            Self::ApproachRate => TargetRange::APPROACH_RATE,
            Self::OverallDifficulty => TargetRange::OVERALL_DIFFICULTY,
        }
    }
}

impl Display for TargetKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let name = match self {
            Self::Speed => "Speed",
            Self::CircleSize => "Circle size",
            Self::ApproachRate => "Approach rate",
            Self::OverallDifficulty => "Accuracy",
        };

        f.write_str(name)
    }
}

/// Static bounds of a [`DifficultyTarget`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TargetRange {
    pub min: f64,
    pub max: f64,
    pub precision: f64,
    pub default: f64,
}

impl TargetRange {
    pub const SPEED: Self = Self {
        min: 1.0,
        max: 2.0,
        precision: 0.01,
        default: 1.0,
    };

    pub const APPROACH_RATE: Self = Self {
        min: 0.0,
        max: 11.0,
        precision: 0.1,
        default: 9.0,
    };

    pub const CIRCLE_SIZE: Self = Self {
        min: 0.0,
        max: 10.0,
        precision: 0.1,
        default: 4.0,
    };

    pub const OVERALL_DIFFICULTY: Self = Self {
        min: 0.0,
        max: 11.0,
        precision: 0.1,
        default: 10.0,
    };

    /// Round the value to the precision and clamp it into `[min, max]`.
    ///
    /// NaN resolves to `min`.
    pub fn normalize(&self, value: f64) -> f64 {
        if value.is_nan() {
            return self.min;
        }

        value
            .round_to_precision(self.precision)
            .clamp(self.min, self.max)
    }
}

/// A change of a [`DifficultyTarget`]'s value.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ValueChange {
    pub old: f64,
    pub new: f64,
}

/// A user-configurable target value alongside the beatmap's baseline.
///
/// Writing a value that differs from the default marks the target as
/// overridden. The flag is sticky: writing the default back keeps it set so
/// that the value is not replaced on the next beatmap. Only [`reset`] clears
/// it.
///
/// [`reset`]: DifficultyTarget::reset
#[derive(Clone, Debug, PartialEq)]
pub struct DifficultyTarget {
    value: f64,
    default: f64,
    range: TargetRange,
    overridden: bool,
}

impl DifficultyTarget {
    /// Create a new target with value and default set to the range's default.
    pub const fn new(range: TargetRange) -> Self {
        Self {
            value: range.default,
            default: range.default,
            range,
            overridden: false,
        }
    }

    pub const fn value(&self) -> f64 {
        self.value
    }

    pub const fn default(&self) -> f64 {
        self.default
    }

    pub const fn range(&self) -> TargetRange {
        self.range
    }

    /// Whether the value equals the default.
    pub fn is_default(&self) -> bool {
        self.value.eq(self.default)
    }

    /// Whether the value was moved away from the default since the last
    /// [`reset`](Self::reset).
    pub const fn is_overridden(&self) -> bool {
        self.overridden
    }

    /// Set the value, clamped and rounded by the target's range.
    ///
    /// Returns `None` if the stored value did not change.
    pub fn set_value(&mut self, value: f64) -> Option<ValueChange> {
        let new = self.range.normalize(value);
        let old = self.value;

        if new.eq(old) {
            return None;
        }

        self.value = new;

        if !self.is_default() {
            self.overridden = true;
        }

        Some(ValueChange { old, new })
    }

    /// Revert the value to the default and forget the override.
    pub fn reset(&mut self) -> Option<ValueChange> {
        let old = self.value;
        self.value = self.default;
        self.overridden = false;

        old.not_eq(self.value).then_some(ValueChange {
            old,
            new: self.value,
        })
    }

    /// Set the value and mark it as overridden regardless of the default.
    pub(crate) fn restore(&mut self, value: f64) -> Option<ValueChange> {
        let change = self.set_value(value);
        self.overridden = true;

        change
    }

    /// Replace the default; the value is left as is.
    pub(crate) fn set_default(&mut self, default: f64) {
        self.default = self.range.normalize(default);
    }

    /// Overwrite the value with the default without touching the override
    /// flag.
    pub(crate) fn apply_default(&mut self) -> Option<ValueChange> {
        let old = self.value;
        self.value = self.default;

        old.not_eq(self.value).then_some(ValueChange {
            old,
            new: self.value,
        })
    }
}
