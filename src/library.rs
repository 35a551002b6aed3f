//! Track catalog: the fixed, ordered list of tracks the player can browse.
//!
//! The catalog is either the built-in seed list or one loaded once from a
//! TOML file at startup. It is never mutated afterwards.

mod catalog;
mod display;
mod model;

pub use catalog::Catalog;
pub use display::display_from_fields;
pub use model::{Track, TrackId};
