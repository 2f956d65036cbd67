//! Credential token handling for the browser session. The API issues a bearer
//! token on login; the frontend keeps it in local storage and gates routes on
//! its presence. The gate is UX only: every protected endpoint re-checks the
//! token server-side.

use crate::app_lib::AppError;
use base64::Engine;
use serde::Deserialize;
use serde_json::Value;

/// Local storage key holding the bearer token.
pub const ACCESS_TOKEN_KEY: &str = "access_token";

/// Where the guard sends visitors without a token.
pub const LOGIN_PATH: &str = "/login";

/// Persistence for the access token.
pub trait TokenStore {
    fn read(&self) -> Option<String>;
    fn write(&self, token: &str);
    fn clear(&self);
}

/// Outcome of a route guard check.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    Allow,
    Redirect(&'static str),
}

/// True when a non-empty token is stored.
pub fn has_token(store: &impl TokenStore) -> bool {
    store.read().is_some_and(|token| !token.is_empty())
}

/// Allows navigation with a stored token, otherwise redirects to login.
pub fn guard(store: &impl TokenStore) -> GuardDecision {
    if has_token(store) {
        GuardDecision::Allow
    } else {
        GuardDecision::Redirect(LOGIN_PATH)
    }
}

#[derive(Deserialize)]
struct Claims {
    sub: Option<Value>,
}

/// Reads the account id from the token's `sub` claim without verifying the
/// signature. Used only to pick which profile to request; the API decides
/// whether the token is valid.
pub fn account_id(token: &str) -> Option<String> {
    let mut parts = token.split('.');
    let (_header, payload) = (parts.next()?, parts.next()?);
    parts.next()?;
    if parts.next().is_some() {
        return None;
    }

    let bytes = base64::engine::general_purpose::URL_SAFE_NO_PAD
        .decode(payload.trim_end_matches('='))
        .ok()?;
    let claims: Claims = serde_json::from_slice(&bytes).ok()?;

    match claims.sub? {
        Value::String(sub) if !sub.trim().is_empty() => Some(sub.trim().to_string()),
        Value::Number(sub) => Some(sub.to_string()),
        _ => None,
    }
}

/// True when the API refused the stored token, so the session must end.
pub fn session_rejected(err: &AppError) -> bool {
    err.status() == Some(401)
}

/// `localStorage`-backed store used by the running app.
#[cfg(target_arch = "wasm32")]
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalTokenStore;

#[cfg(target_arch = "wasm32")]
impl TokenStore for LocalTokenStore {
    fn read(&self) -> Option<String> {
        crate::app_lib::storage::read(ACCESS_TOKEN_KEY)
    }

    fn write(&self, token: &str) {
        crate::app_lib::storage::write(ACCESS_TOKEN_KEY, token);
    }

    fn clear(&self) {
        crate::app_lib::storage::remove(ACCESS_TOKEN_KEY);
    }
}
