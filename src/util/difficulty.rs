/// Maps a difficulty value on the usual 0-10 scale onto a range given by
/// the values at difficulty 0, 5, and 10.
///
/// Values outside of 0-10 extrapolate along the outer segments, e.g. AR 11
/// yields a preempt below 450ms.
pub fn difficulty_range(difficulty: f64, min: f64, mid: f64, max: f64) -> f64 {
    if difficulty > 5.0 {
        mid + (max - mid) * (difficulty - 5.0) / 5.0
    } else if difficulty < 5.0 {
        mid - (mid - min) * (5.0 - difficulty) / 5.0
    } else {
        mid
    }
}

/// Linear interpolation between `from` and `to`.
///
/// `progress` is expected to be within `[0, 1]`.
pub fn lerp(from: f64, to: f64, progress: f64) -> f64 {
    from + (to - from) * progress
}
