use std::cmp::Ordering;

/// All hitobject related data the Training mod requires.
#[derive(Clone, Debug, PartialEq)]
pub struct HitObject {
    pub start_time: f64,
    pub kind: HitObjectKind,
}

impl HitObject {
    /// Create a new circle.
    pub const fn circle(start_time: f64) -> Self {
        Self {
            start_time,
            kind: HitObjectKind::Circle,
        }
    }

    /// Create a new slider.
    pub const fn slider(start_time: f64, duration: f64, repeats: usize) -> Self {
        Self {
            start_time,
            kind: HitObjectKind::Slider(Slider { duration, repeats }),
        }
    }

    /// Create a new spinner.
    pub const fn spinner(start_time: f64, duration: f64) -> Self {
        Self {
            start_time,
            kind: HitObjectKind::Spinner(Spinner { duration }),
        }
    }

    /// Whether the hitobject is a circle.
    pub const fn is_circle(&self) -> bool {
        matches!(&self.kind, HitObjectKind::Circle)
    }

    /// Whether the hitobject is a slider.
    pub const fn is_slider(&self) -> bool {
        matches!(&self.kind, HitObjectKind::Slider(_))
    }

    /// Whether the hitobject is a spinner.
    pub const fn is_spinner(&self) -> bool {
        matches!(&self.kind, HitObjectKind::Spinner(_))
    }

    /// The end time of the object.
    pub fn end_time(&self) -> f64 {
        match &self.kind {
            HitObjectKind::Circle => self.start_time,
            HitObjectKind::Slider(Slider { duration, .. })
            | HitObjectKind::Spinner(Spinner { duration }) => self.start_time + *duration,
        }
    }
}

impl PartialOrd for HitObject {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.start_time.partial_cmp(&other.start_time)
    }
}

/// Additional data for a [`HitObject`].
#[derive(Clone, Debug, PartialEq)]
pub enum HitObjectKind {
    Circle,
    Slider(Slider),
    Spinner(Spinner),
}

/// A slider.
///
/// Sliders consist of a head circle, a body, and a tail circle.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Slider {
    pub duration: f64,
    pub repeats: usize,
}

/// A spinner.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Spinner {
    pub duration: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn end_times() {
        assert_eq!(HitObject::circle(100.0).end_time(), 100.0);
        assert_eq!(HitObject::slider(100.0, 250.0, 1).end_time(), 350.0);
        assert_eq!(HitObject::spinner(100.0, 2000.0).end_time(), 2100.0);
    }

    #[test]
    fn ordered_by_start_time() {
        assert!(HitObject::circle(50.0) < HitObject::spinner(60.0, 10.0));
    }
}
