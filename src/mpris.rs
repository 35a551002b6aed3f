//! MPRIS (D-Bus) integration.
//!
//! Media keys and tools like `playerctl` talk to the player through the
//! `org.mpris.MediaPlayer2` interfaces. Bus calls are turned into
//! `ControlCmd`s for the event loop; properties are served from a mirror the
//! event loop refreshes after every change.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, mpsc::Sender};

use async_io::{Timer, block_on};
use zbus::{Connection, interface};
use zvariant::{ObjectPath, OwnedObjectPath, OwnedValue, Value};

use crate::library::Track;

const OBJECT_PATH: &str = "/org/mpris/MediaPlayer2";
const BUS_NAME: &str = "org.mpris.MediaPlayer2.musicstream";

/// A request from the bus, applied by the event loop.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ControlCmd {
    Quit,
    Play,
    Pause,
    PlayPause,
    Stop,
    Next,
    Prev,
    SetVolume(u8),
}

/// What the bus reports as `PlaybackStatus`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum PlaybackStatus {
    #[default]
    Stopped,
    Playing,
    Paused,
}

impl PlaybackStatus {
    /// Status for the given player fields; no current track means stopped.
    pub fn from_player(has_current: bool, playing: bool) -> Self {
        match (has_current, playing) {
            (false, _) => Self::Stopped,
            (true, true) => Self::Playing,
            (true, false) => Self::Paused,
        }
    }
}

#[derive(Debug)]
struct SharedState {
    playback: PlaybackStatus,
    track_id: Option<OwnedObjectPath>,
    title: Option<String>,
    artist: Vec<String>,
    art_url: Option<String>,
    volume: u8,
}

impl Default for SharedState {
    fn default() -> Self {
        Self {
            playback: PlaybackStatus::Stopped,
            track_id: None,
            title: None,
            artist: Vec::new(),
            art_url: None,
            volume: crate::player::DEFAULT_VOLUME,
        }
    }
}

pub struct MprisHandle {
    state: Arc<Mutex<SharedState>>,
}

impl MprisHandle {
    pub fn set_playback(&self, playback: PlaybackStatus) {
        if let Ok(mut s) = self.state.lock() {
            s.playback = playback;
        }
    }

    pub fn set_volume(&self, volume: u8) {
        if let Ok(mut s) = self.state.lock() {
            s.volume = volume;
        }
    }

    /// Publish `track` as the current track, or clear the metadata.
    pub fn set_track_metadata(&self, track: Option<&Track>) {
        let Ok(mut s) = self.state.lock() else {
            return;
        };
        match track {
            Some(t) => {
                s.track_id = ObjectPath::try_from(format!("{OBJECT_PATH}/track/{}", t.id))
                    .ok()
                    .map(OwnedObjectPath::from);
                s.title = Some(t.title.clone());
                s.artist = if t.artist.trim().is_empty() {
                    Vec::new()
                } else {
                    vec![t.artist.clone()]
                };
                s.art_url = if t.cover.trim().is_empty() {
                    None
                } else {
                    Some(t.cover.clone())
                };
            }
            None => {
                s.track_id = None;
                s.title = None;
                s.artist.clear();
                s.art_url = None;
            }
        }
    }
}

fn owned<'a>(v: impl Into<Value<'a>>) -> Option<OwnedValue> {
    OwnedValue::try_from(v.into()).ok()
}

struct RootIface {
    tx: Sender<ControlCmd>,
}

#[interface(name = "org.mpris.MediaPlayer2")]
impl RootIface {
    fn raise(&self) {
        // No-op for TUI.
    }

    fn quit(&self) {
        let _ = self.tx.send(ControlCmd::Quit);
    }

    #[zbus(property)]
    fn can_quit(&self) -> bool {
        true
    }

    #[zbus(property)]
    fn can_raise(&self) -> bool {
        false
    }

    #[zbus(property)]
    fn has_track_list(&self) -> bool {
        false
    }

    #[zbus(property)]
    fn identity(&self) -> &str {
        "MusicStream"
    }

    #[zbus(property)]
    fn supported_uri_schemes(&self) -> Vec<String> {
        vec![]
    }

    #[zbus(property)]
    fn supported_mime_types(&self) -> Vec<String> {
        vec![]
    }
}

struct PlayerIface {
    tx: Sender<ControlCmd>,
    state: Arc<Mutex<SharedState>>,
}

#[interface(name = "org.mpris.MediaPlayer2.Player")]
impl PlayerIface {
    fn next(&self) {
        let _ = self.tx.send(ControlCmd::Next);
    }

    fn previous(&self) {
        let _ = self.tx.send(ControlCmd::Prev);
    }

    fn play(&self) {
        let _ = self.tx.send(ControlCmd::Play);
    }

    fn pause(&self) {
        let _ = self.tx.send(ControlCmd::Pause);
    }

    fn play_pause(&self) {
        let _ = self.tx.send(ControlCmd::PlayPause);
    }

    fn stop(&self) {
        let _ = self.tx.send(ControlCmd::Stop);
    }

    #[zbus(property)]
    fn playback_status(&self) -> &str {
        let Ok(s) = self.state.lock() else {
            return "Stopped";
        };
        match s.playback {
            PlaybackStatus::Stopped => "Stopped",
            PlaybackStatus::Playing => "Playing",
            PlaybackStatus::Paused => "Paused",
        }
    }

    #[zbus(property)]
    fn volume(&self) -> f64 {
        self.state
            .lock()
            .map(|s| f64::from(s.volume) / 100.0)
            .unwrap_or(0.0)
    }

    #[zbus(property)]
    fn set_volume(&mut self, value: f64) {
        let percent = (value.clamp(0.0, 1.0) * 100.0).round() as u8;
        let _ = self.tx.send(ControlCmd::SetVolume(percent));
    }

    #[zbus(property)]
    fn can_control(&self) -> bool {
        true
    }

    #[zbus(property)]
    fn can_play(&self) -> bool {
        true
    }

    #[zbus(property)]
    fn can_pause(&self) -> bool {
        true
    }

    #[zbus(property)]
    fn can_go_next(&self) -> bool {
        true
    }

    #[zbus(property)]
    fn can_go_previous(&self) -> bool {
        true
    }

    #[zbus(property)]
    fn can_seek(&self) -> bool {
        false
    }

    #[zbus(property)]
    fn metadata(&self) -> HashMap<String, OwnedValue> {
        let mut map = HashMap::new();
        let Ok(s) = self.state.lock() else {
            return map;
        };

        if let Some(v) = s.track_id.clone().and_then(|p| owned(p.into_inner())) {
            map.insert("mpris:trackid".to_string(), v);
        }
        if let Some(v) = s.title.clone().and_then(|t| owned(t)) {
            map.insert("xesam:title".to_string(), v);
        }
        if !s.artist.is_empty() {
            if let Some(v) = owned(s.artist.clone()) {
                map.insert("xesam:artist".to_string(), v);
            }
        }
        if let Some(v) = s.art_url.clone().and_then(|u| owned(u)) {
            map.insert("mpris:artUrl".to_string(), v);
        }
        map
    }
}

/// Start the MPRIS service on its own thread.
///
/// Failures to reach the session bus are logged; the returned handle keeps
/// working as a local mirror either way.
pub fn spawn_mpris(tx: Sender<ControlCmd>) -> MprisHandle {
    let state = Arc::new(Mutex::new(SharedState::default()));

    let state_for_thread = state.clone();
    std::thread::spawn(move || {
        block_on(async move {
            let connection = match Connection::session().await {
                Ok(c) => c,
                Err(e) => {
                    log::warn!("MPRIS: failed to connect to session bus: {e}");
                    return;
                }
            };

            if let Err(e) = connection.request_name(BUS_NAME).await {
                log::warn!("MPRIS: failed to acquire name: {e}");
                return;
            }

            let object_server = connection.object_server();

            if let Err(e) = object_server
                .at(OBJECT_PATH, RootIface { tx: tx.clone() })
                .await
            {
                log::warn!("MPRIS: failed to register root iface: {e}");
                return;
            }

            if let Err(e) = object_server
                .at(
                    OBJECT_PATH,
                    PlayerIface {
                        tx,
                        state: state_for_thread,
                    },
                )
                .await
            {
                log::warn!("MPRIS: failed to register player iface: {e}");
                return;
            }

            log::info!("MPRIS: registered as {BUS_NAME}");

            // Keep the service alive.
            loop {
                Timer::after(std::time::Duration::from_secs(3600)).await;
            }
        });
    });

    MprisHandle { state }
}
