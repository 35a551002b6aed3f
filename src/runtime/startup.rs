use std::collections::BTreeSet;

use crate::app::App;
use crate::config;
use crate::library::{Catalog, TrackId};
use crate::player::PlayerState;

/// Catalog from `library.catalog_path`, or the built-in one.
///
/// A catalog file that cannot be loaded is logged and replaced by the
/// built-in catalog.
pub fn load_catalog(settings: &config::LibrarySettings) -> Catalog {
    let Some(path) = &settings.catalog_path else {
        return Catalog::builtin();
    };

    match Catalog::load(path) {
        Ok(c) => {
            log::info!("loaded {} tracks from {}", c.len(), path.display());
            c
        }
        Err(e) => {
            log::warn!("{e:#}; using built-in catalog");
            Catalog::builtin()
        }
    }
}

/// Favourite seed ids that exist in `catalog`; unknown ids are dropped.
pub fn seed_favorites(catalog: &Catalog, ids: &[TrackId]) -> BTreeSet<TrackId> {
    ids.iter()
        .copied()
        .filter(|&id| {
            let known = catalog.contains(id);
            if !known {
                log::warn!("favourite id {id} is not in the catalog; ignoring");
            }
            known
        })
        .collect()
}

/// Build the initial `App` from settings.
pub fn build_app(settings: &config::Settings) -> App {
    let catalog = load_catalog(&settings.library);
    let favorites = seed_favorites(&catalog, &settings.player.favorites);
    let player = PlayerState::new(favorites, settings.player.initial_volume);

    let mut app = App::new(catalog, player);
    app.focus = settings.ui.start_section.into();
    app
}
