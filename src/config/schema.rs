use std::path::PathBuf;

use serde::Deserialize;

/// Top-level application settings loaded from `config.toml`.
///
/// File format: TOML
/// Default path (Linux/XDG): `$XDG_CONFIG_HOME/musicstream/config.toml` or `~/.config/musicstream/config.toml`
///
/// Precedence (highest wins):
/// 1) Environment variables (prefix `MUSICSTREAM__`, `__` as nested separator)
/// 2) Config file (if present)
/// 3) Struct defaults
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub player: PlayerSettings,
    pub ui: UiSettings,
    pub library: LibrarySettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PlayerSettings {
    /// Volume (percent) when the player starts.
    pub initial_volume: u8,
    /// Percentage points added or removed by the `+` / `-` keys.
    pub volume_step: u8,
    /// Track ids marked as favourites at startup.
    pub favorites: Vec<u32>,
}

impl Default for PlayerSettings {
    fn default() -> Self {
        Self {
            initial_volume: 75,
            volume_step: 5,
            favorites: vec![1, 3],
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UiSettings {
    /// Title rendered in the header box.
    pub header_text: String,

    /// Line rendered under the title.
    pub tagline: String,

    /// Which track fields to show in the player bar, and in what order.
    ///
    /// Example: ["title", "artist"]
    pub now_playing_fields: Vec<TrackDisplayField>,

    /// Separator used to join `now_playing_fields`.
    pub now_playing_separator: String,

    /// Section that has the cursor at startup.
    pub start_section: SectionSetting,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            header_text: "MusicStream".to_string(),
            tagline: "Your music, your rhythm".to_string(),
            now_playing_fields: vec![TrackDisplayField::Title, TrackDisplayField::Artist],
            now_playing_separator: " - ".to_string(),
            start_section: SectionSetting::Favorites,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TrackDisplayField {
    Title,
    Artist,
    Duration,
    Id,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SectionSetting {
    #[serde(alias = "favourites")]
    Favorites,
    #[serde(alias = "all", alias = "tracks")]
    Recommendations,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LibrarySettings {
    /// Optional TOML catalog replacing the built-in track list.
    pub catalog_path: Option<PathBuf>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// `env_logger` filter, e.g. `warn` or `musicstream=debug`.
    /// `MUSICSTREAM_LOG` takes precedence.
    pub level: String,
    /// Write log output to this file instead of stderr.
    pub file: Option<PathBuf>,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            file: None,
        }
    }
}
