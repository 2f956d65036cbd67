//! Auth feature module covering the signup and login forms, the stored bearer
//! token, route gating and email verification. It keeps authentication logic
//! out of the UI and must stay aligned with the API's expectations. This module
//! touches security boundaries and must avoid logging passwords or tokens.
//!
//! Flow Overview: Signup validates locally and creates the account, which
//! triggers a verification email. The link lands on `/verify-email`, which
//! confirms the token once and redirects. Login stores the returned token,
//! unlocking guarded routes until logout clears it.

#[cfg(target_arch = "wasm32")]
pub(crate) mod client;
pub(crate) mod forms;
#[cfg(target_arch = "wasm32")]
mod guards;
pub(crate) mod session;
#[cfg(target_arch = "wasm32")]
pub(crate) mod state;
pub(crate) mod types;
pub(crate) mod verification;

#[cfg(target_arch = "wasm32")]
pub(crate) use guards::RequireAuth;
