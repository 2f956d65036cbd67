//! Shared frontend utilities for API access, configuration, errors, logging and
//! build metadata.
//!
//! ## Core Flows
//!
//! ### Signup & Email Verification
//!
//! 1. **Signup:** The validated form is POSTed to `/accounts`; the API mails a
//!    one-time link to the UManitoba address.
//! 2. **Verification:** The link opens `/verify-email?token=...`, which calls
//!    `GET /accounts/verify-email` once and redirects on the outcome.
//!
//! ### Login & Guarded Routes
//!
//! 1. **Login:** `POST /accounts/login` returns a bearer `access_token`.
//! 2. **Storage:** The token is kept in `localStorage` under `access_token`.
//! 3. **Usage:** Guarded routes require the token to be present and feature
//!    clients attach it as `Authorization: Bearer` where the API expects it.
//!
//! Only `codec`, `config`, `errors` and `telemetry` compile on the host; the HTTP and
//! storage helpers need a browser.

#[cfg(target_arch = "wasm32")]
pub(crate) mod api;
#[allow(clippy::doc_markdown, clippy::needless_raw_string_hashes)]
pub(crate) mod built_info {
    include!(concat!(env!("OUT_DIR"), "/built.rs"));
}
pub(crate) mod codec;
pub(crate) mod config;
pub(crate) mod errors;
#[cfg(target_arch = "wasm32")]
pub(crate) mod storage;
pub(crate) mod telemetry;

pub(crate) const GIT_COMMIT_HASH: &str = match built_info::GIT_COMMIT_HASH {
    Some(hash) => hash,
    None => "unknown",
};

#[cfg(target_arch = "wasm32")]
pub(crate) use api::{get_json, get_json_or_default, post_json, post_json_with_headers};
pub(crate) use errors::AppError;
