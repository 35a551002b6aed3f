use std::collections::HashSet;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use serde::Deserialize;

use super::model::{Track, TrackId};

/// Ordered, read-only sequence of tracks with unique ids.
#[derive(Debug, Clone)]
pub struct Catalog {
    tracks: Vec<Track>,
}

/// On-disk catalog layout: a list of `[[tracks]]` tables.
#[derive(Debug, Deserialize)]
struct CatalogFile {
    tracks: Vec<Track>,
}

impl Catalog {
    /// Build a catalog from `tracks`, keeping their order.
    ///
    /// Fails when the list is empty, an id repeats, or a duration is not `M:SS`.
    pub fn new(tracks: Vec<Track>) -> Result<Self> {
        if tracks.is_empty() {
            bail!("catalog has no tracks");
        }

        let mut seen: HashSet<TrackId> = HashSet::with_capacity(tracks.len());
        for t in &tracks {
            if !seen.insert(t.id) {
                bail!("duplicate track id {} ({})", t.id, t.title);
            }
            if !is_mss(&t.duration) {
                bail!(
                    "track {} has duration {:?}, expected M:SS",
                    t.id,
                    t.duration
                );
            }
        }

        Ok(Self { tracks })
    }

    /// The seed catalog shipped with the player.
    pub fn builtin() -> Self {
        let tracks = vec![
            Track::new(
                1,
                "Midnight Dreams",
                "Luna Sky",
                "3:45",
                "https://images.unsplash.com/photo-1614680376573-df3480f0c6ff?w=300&h=300&fit=crop",
            ),
            Track::new(
                2,
                "Electric Pulse",
                "Nova Wave",
                "4:12",
                "https://images.unsplash.com/photo-1470225620780-dba8ba36b745?w=300&h=300&fit=crop",
            ),
            Track::new(
                3,
                "City Lights",
                "Urban Echo",
                "3:28",
                "https://images.unsplash.com/photo-1493225457124-a3eb161ffa5f?w=300&h=300&fit=crop",
            ),
            Track::new(
                4,
                "Ocean Waves",
                "Blue Horizon",
                "5:01",
                "https://images.unsplash.com/photo-1459749411175-04bf5292ceea?w=300&h=300&fit=crop",
            ),
            Track::new(
                5,
                "Neon Nights",
                "Synthwave",
                "3:56",
                "https://images.unsplash.com/photo-1511379938547-c1f69419868d?w=300&h=300&fit=crop",
            ),
            Track::new(
                6,
                "Summer Vibes",
                "Tropical Mix",
                "4:23",
                "https://images.unsplash.com/photo-1487180144351-b8472da7d491?w=300&h=300&fit=crop",
            ),
        ];

        Self { tracks }
    }

    /// Parse a catalog from TOML text.
    pub fn from_toml(text: &str) -> Result<Self> {
        let file: CatalogFile = toml::from_str(text).context("invalid catalog TOML")?;
        Self::new(file.tracks)
    }

    /// Read and validate a catalog file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read catalog {}", path.display()))?;
        Self::from_toml(&text).with_context(|| format!("failed to load catalog {}", path.display()))
    }

    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Track> {
        self.tracks.get(index)
    }

    /// Catalog index of the track with `id`.
    pub fn position_of(&self, id: TrackId) -> Option<usize> {
        self.tracks.iter().position(|t| t.id == id)
    }

    pub fn by_id(&self, id: TrackId) -> Option<&Track> {
        self.tracks.iter().find(|t| t.id == id)
    }

    pub fn contains(&self, id: TrackId) -> bool {
        self.position_of(id).is_some()
    }
}

// `M:SS`: one or more minute digits, a colon, two second digits below 60.
fn is_mss(s: &str) -> bool {
    let Some((m, ss)) = s.split_once(':') else {
        return false;
    };
    if m.is_empty() || !m.chars().all(|c| c.is_ascii_digit()) {
        return false;
    }
    if ss.len() != 2 || !ss.chars().all(|c| c.is_ascii_digit()) {
        return false;
    }
    ss.as_bytes()[0] < b'6'
}
