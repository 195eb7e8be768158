use thiserror::Error;

/// `Result<_, TrainingError>`
pub type TrainingResult<T> = Result<T, TrainingError>;

/// Anything that could go wrong while driving the [`Training`](crate::Training) mod.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum TrainingError {
    /// An operation required a beatmap but none was applied yet.
    #[error("no beatmap has been applied")]
    NotLoaded,
    /// A per-frame operation required a track but none was applied yet.
    #[error("no track has been applied")]
    NotActive,
    /// The Training mod was combined with mods it can't be used with.
    #[error("training is incompatible with mods {0:#b}")]
    IncompatibleMods(u32),
}
