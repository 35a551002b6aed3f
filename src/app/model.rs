//! Application model types: `App` and `Section`.
//!
//! The `App` struct pairs the read-only catalog with the mutable player
//! state and keeps track of which list the cursor is in.

use crate::config::SectionSetting;
use crate::library::{Catalog, Track, TrackId};
use crate::player::{PlayerState, SkipDirection};

/// The two browsable lists.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Section {
    Favorites,
    Recommendations,
}

impl From<SectionSetting> for Section {
    fn from(s: SectionSetting) -> Self {
        match s {
            SectionSetting::Favorites => Self::Favorites,
            SectionSetting::Recommendations => Self::Recommendations,
        }
    }
}

/// The main application model.
pub struct App {
    pub catalog: Catalog,
    pub player: PlayerState,
    pub focus: Section,
    /// Cursor position within the favourites list.
    favorites_cursor: usize,
    /// Cursor position within the full catalog list.
    recommendations_cursor: usize,
    pub details_window: bool,
}

impl App {
    /// Create a new `App` over `catalog` with a fresh `player` state.
    pub fn new(catalog: Catalog, player: PlayerState) -> Self {
        Self {
            catalog,
            player,
            focus: Section::Favorites,
            favorites_cursor: 0,
            recommendations_cursor: 0,
            details_window: false,
        }
    }

    pub fn toggle_details_window(&mut self) {
        self.details_window = !self.details_window;
    }

    /// Catalog indices of favourite tracks, in catalog order.
    pub fn favorite_indices(&self) -> Vec<usize> {
        self.catalog
            .tracks()
            .iter()
            .enumerate()
            .filter(|(_, t)| self.player.is_favorite(t.id))
            .map(|(i, _)| i)
            .collect()
    }

    /// Catalog indices listed in `section`.
    pub fn section_indices(&self, section: Section) -> Vec<usize> {
        match section {
            Section::Favorites => self.favorite_indices(),
            Section::Recommendations => (0..self.catalog.len()).collect(),
        }
    }

    /// Catalog indices listed in the focused section.
    pub fn visible_indices(&self) -> Vec<usize> {
        self.section_indices(self.focus)
    }

    /// Cursor position within `section`, clamped to its current length.
    pub fn cursor(&self, section: Section) -> usize {
        let len = self.section_indices(section).len();
        let raw = match section {
            Section::Favorites => self.favorites_cursor,
            Section::Recommendations => self.recommendations_cursor,
        };
        raw.min(len.saturating_sub(1))
    }

    fn set_cursor(&mut self, pos: usize) {
        match self.focus {
            Section::Favorites => self.favorites_cursor = pos,
            Section::Recommendations => self.recommendations_cursor = pos,
        }
    }

    /// The track under the cursor in the focused section.
    pub fn selected_track(&self) -> Option<&Track> {
        let visible = self.visible_indices();
        visible
            .get(self.cursor(self.focus))
            .and_then(|&i| self.catalog.get(i))
    }

    fn selected_id(&self) -> Option<TrackId> {
        self.selected_track().map(|t| t.id)
    }

    /// Move focus to the other section.
    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            Section::Favorites => Section::Recommendations,
            Section::Recommendations => Section::Favorites,
        };
    }

    /// Move the cursor down, wrapping to the top.
    pub fn next(&mut self) {
        let len = self.visible_indices().len();
        if len == 0 {
            return;
        }
        let pos = (self.cursor(self.focus) + 1) % len;
        self.set_cursor(pos);
    }

    /// Move the cursor up, wrapping to the bottom.
    pub fn prev(&mut self) {
        let len = self.visible_indices().len();
        if len == 0 {
            return;
        }
        let pos = (self.cursor(self.focus) + len - 1) % len;
        self.set_cursor(pos);
    }

    /// Play the selected track, or pause/resume it if it is already current.
    pub fn activate_selected(&mut self) {
        if let Some(id) = self.selected_id() {
            self.player.select_or_toggle(Some(id));
        }
    }

    /// Pause/resume whatever is current.
    pub fn toggle_playback(&mut self) {
        self.player.select_or_toggle(None);
    }

    pub fn skip(&mut self, direction: SkipDirection) {
        self.player.skip(direction, &self.catalog);
    }

    /// Flip the favourite flag of the selected track.
    pub fn toggle_selected_favorite(&mut self) {
        if let Some(id) = self.selected_id() {
            self.player.toggle_favorite(id);
            // Keep the stored cursor in range if the favourites list shrank.
            let pos = self.cursor(self.focus);
            self.set_cursor(pos);
        }
    }

    /// The current track, if any.
    pub fn now_playing(&self) -> Option<&Track> {
        self.player.current().and_then(|id| self.catalog.by_id(id))
    }
}
