/// Beatmap related types.
pub mod beatmap;

/// Hitobject related types.
pub mod hit_object;

/// Gamemods related types.
pub mod mods;

/// Audio collaborators driven by the live playback rate.
pub mod track;
