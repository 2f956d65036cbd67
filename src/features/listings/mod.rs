//! Marketplace listings: the create form, card display rules and API types.

#[cfg(target_arch = "wasm32")]
pub(crate) mod client;
pub(crate) mod display;
pub(crate) mod feed;
pub(crate) mod form;
pub(crate) mod types;
