//! Account profiles and their rating aggregates.

#[cfg(target_arch = "wasm32")]
pub(crate) mod client;
pub(crate) mod rating;
pub(crate) mod types;
