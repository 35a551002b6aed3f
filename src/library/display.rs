use super::model::Track;
use crate::config::TrackDisplayField;

/// Build a display string for `track` from `fields`, joined with `sep`.
///
/// Blank fields are skipped; when nothing is left the title is used.
pub fn display_from_fields(track: &Track, fields: &[TrackDisplayField], sep: &str) -> String {
    let mut parts: Vec<String> = Vec::new();

    for f in fields {
        let part = match f {
            TrackDisplayField::Title => track.title.trim().to_string(),
            TrackDisplayField::Artist => track.artist.trim().to_string(),
            TrackDisplayField::Duration => track.duration.trim().to_string(),
            TrackDisplayField::Id => format!("#{}", track.id),
        };
        if !part.is_empty() {
            parts.push(part);
        }
    }

    if parts.is_empty() {
        track.title.clone()
    } else {
        parts.join(sep)
    }
}
