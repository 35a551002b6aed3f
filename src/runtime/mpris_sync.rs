use crate::app::App;
use crate::mpris::{MprisHandle, PlaybackStatus};

/// What MPRIS last saw; used to skip redundant updates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MprisSnapshot {
    current: Option<u32>,
    playing: bool,
    volume: u8,
}

impl MprisSnapshot {
    pub fn of(app: &App) -> Self {
        Self {
            current: app.player.current(),
            playing: app.player.is_playing(),
            volume: app.player.volume(),
        }
    }
}

pub fn update_mpris(mpris: &MprisHandle, app: &App) {
    mpris.set_track_metadata(app.now_playing());
    mpris.set_playback(PlaybackStatus::from_player(
        app.player.current().is_some(),
        app.player.is_playing(),
    ));
    mpris.set_volume(app.player.volume());
}
