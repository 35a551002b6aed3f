//! Playback selection state.
//!
//! `PlayerState` owns the current track, the playing flag, the favourite set
//! and the volume. Its transitions are the only way that state changes; no
//! audio is produced, the state records intent only.

mod state;

pub use state::*;

#[cfg(test)]
mod tests;
