use std::fmt::{Display, Formatter, Result as FmtResult};

pub use self::attributes::BeatmapDifficulty;

use super::hit_object::HitObject;

mod attributes;

/// Identity of a beatmap difficulty.
///
/// Two loads with the same id are considered the same beatmap, even if the
/// [`Beatmap`] instances differ otherwise.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BeatmapId(pub u64);

impl Display for BeatmapId {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        Display::fmt(&self.0, f)
    }
}

impl From<u64> for BeatmapId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

/// An already-parsed beatmap: its authored difficulty and its hit objects
/// ordered by start time.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Beatmap {
    pub difficulty: BeatmapDifficulty,
    pub hit_objects: Vec<HitObject>,
}

impl Beatmap {
    /// Create a new [`Beatmap`].
    ///
    /// Hit objects are sorted by their start time.
    pub fn new(difficulty: BeatmapDifficulty, mut hit_objects: Vec<HitObject>) -> Self {
        hit_objects.sort_by(|a, b| a.start_time.total_cmp(&b.start_time));

        Self {
            difficulty,
            hit_objects,
        }
    }

    /// The beatmap's identity.
    pub const fn id(&self) -> BeatmapId {
        self.difficulty.id
    }

    /// Start time of the last hit object.
    ///
    /// This is the denominator for every progress fraction of the map.
    /// Returns `None` if the map has no hit objects.
    pub fn end_time(&self) -> Option<f64> {
        self.hit_objects.last().map(|h| h.start_time)
    }

    /// Check whether hit objects are available.
    pub fn is_empty(&self) -> bool {
        self.hit_objects.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use crate::model::hit_object::HitObject;

    use super::*;

    #[test]
    fn sorts_objects_on_creation() {
        let map = Beatmap::new(
            BeatmapDifficulty::new(1),
            vec![
                HitObject::circle(10_000.0),
                HitObject::circle(0.0),
                HitObject::circle(5000.0),
            ],
        );

        let times: Vec<_> = map.hit_objects.iter().map(|h| h.start_time).collect();

        assert_eq!(times, [0.0, 5000.0, 10_000.0]);
        assert_eq!(map.end_time(), Some(10_000.0));
    }

    #[test]
    fn empty_map_has_no_end_time() {
        let map = Beatmap::default();

        assert!(map.is_empty());
        assert_eq!(map.end_time(), None);
    }
}
