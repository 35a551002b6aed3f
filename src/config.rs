//! Configuration loader and schema types.
//!
//! This module exposes the settings schema used at startup and helpers to
//! load configuration from disk and the environment.

mod load;
mod schema;

pub use schema::*;
