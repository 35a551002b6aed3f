use serde::Deserialize;

/// Stable identifier of a track within a catalog.
pub type TrackId = u32;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Track {
    pub id: TrackId,
    pub title: String,
    pub artist: String,
    /// Display-only length in `M:SS` form.
    pub duration: String,
    /// URI of the cover image.
    pub cover: String,
}

impl Track {
    pub fn new(id: TrackId, title: &str, artist: &str, duration: &str, cover: &str) -> Self {
        Self {
            id,
            title: title.to_string(),
            artist: artist.to_string(),
            duration: duration.to_string(),
            cover: cover.to_string(),
        }
    }
}
