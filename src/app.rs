//! Application module: exposes the UI-side model used by the runtime.
//!
//! The `App` model lives in `app::model` and holds the prompt, the current
//! folder and status messages.

mod model;

pub use model::*;

#[cfg(test)]
mod tests;
