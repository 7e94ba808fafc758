//! Configuration loader and schema types.
//!
//! This module exposes the settings that drive the player (tick interval,
//! folder filtering, key steps, logging) and helpers to load them from disk
//! and the environment.

mod load;
mod schema;

pub use load::SettingsError;
pub use schema::*;
