use std::collections::BTreeSet;

use crate::library::{Catalog, TrackId};

pub const DEFAULT_VOLUME: u8 = 75;
pub const MAX_VOLUME: u8 = 100;

/// Direction for `PlayerState::skip`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SkipDirection {
    Previous,
    Next,
}

/// Session-scoped player state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerState {
    current: Option<TrackId>,
    playing: bool,
    favorites: BTreeSet<TrackId>,
    volume: u8,
}

impl Default for PlayerState {
    fn default() -> Self {
        Self::new(std::iter::empty(), DEFAULT_VOLUME)
    }
}

impl PlayerState {
    /// Fresh state: nothing selected, not playing, favourites seeded.
    pub fn new(favorites: impl IntoIterator<Item = TrackId>, volume: u8) -> Self {
        Self {
            current: None,
            playing: false,
            favorites: favorites.into_iter().collect(),
            volume: volume.min(MAX_VOLUME),
        }
    }

    pub fn current(&self) -> Option<TrackId> {
        self.current
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn favorites(&self) -> &BTreeSet<TrackId> {
        &self.favorites
    }

    pub fn is_favorite(&self, id: TrackId) -> bool {
        self.favorites.contains(&id)
    }

    pub fn volume(&self) -> u8 {
        self.volume
    }

    /// True when `id` is the current track and playback is active.
    pub fn is_track_playing(&self, id: TrackId) -> bool {
        self.playing && self.current == Some(id)
    }

    /// Switch to `track` and start playing, or flip the playing flag when
    /// `track` is `None` or already current.
    ///
    /// With no track given and nothing current this does nothing.
    pub fn select_or_toggle(&mut self, track: Option<TrackId>) {
        match (track, self.current) {
            (Some(id), current) if current != Some(id) => {
                self.current = Some(id);
                self.playing = true;
            }
            (None, None) => {}
            _ => self.playing = !self.playing,
        }
    }

    /// Move to the neighbouring catalog entry, wrapping at both ends, and
    /// resume playback. No-op when nothing is current.
    pub fn skip(&mut self, direction: SkipDirection, catalog: &Catalog) {
        let Some(id) = self.current else {
            return;
        };
        let Some(index) = catalog.position_of(id) else {
            log::debug!("skip: current track {id} is not in the catalog");
            return;
        };

        let len = catalog.len();
        let next = match direction {
            SkipDirection::Next => (index + 1) % len,
            SkipDirection::Previous => (index + len - 1) % len,
        };

        if let Some(track) = catalog.get(next) {
            self.current = Some(track.id);
            self.playing = true;
        }
    }

    /// Add `id` to the favourites, or remove it if already there.
    pub fn toggle_favorite(&mut self, id: TrackId) {
        if !self.favorites.remove(&id) {
            self.favorites.insert(id);
        }
    }

    /// Replace the volume, clamped to `0..=100`.
    pub fn set_volume(&mut self, value: u8) {
        self.volume = value.min(MAX_VOLUME);
    }

    /// Nudge the volume by `delta` percentage points.
    pub fn adjust_volume(&mut self, delta: i16) {
        let v = i16::from(self.volume)
            .saturating_add(delta)
            .clamp(0, i16::from(MAX_VOLUME));
        self.set_volume(v as u8);
    }
}
