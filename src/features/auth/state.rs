//! Auth session state and context for the frontend. The provider hydrates the
//! token from local storage once on mount and exposes derived signals for
//! guards and routes. The context is itself a `TokenStore`, so writes keep the
//! signal and local storage in step.

use crate::features::auth::session::{self, LocalTokenStore, TokenStore};
use leptos::prelude::*;

#[derive(Clone, Copy)]
/// Auth session context shared through Leptos.
pub struct AuthContext {
    pub token: RwSignal<Option<String>>,
    pub is_authenticated: Signal<bool>,
}

impl AuthContext {
    /// Builds a context around the provided token signal.
    fn new(token: RwSignal<Option<String>>) -> Self {
        let is_authenticated =
            Signal::derive(move || token.get().is_some_and(|token| !token.is_empty()));
        Self {
            token,
            is_authenticated,
        }
    }

    /// Stores the token issued on login.
    pub fn login(&self, token: &str) {
        self.write(token);
        tracing::info!("session started");
    }

    /// Drops the token, typically on logout.
    pub fn logout(&self) {
        self.clear();
        tracing::info!("session cleared");
    }

    /// Account id carried by the current token, if readable.
    pub fn account_id(&self) -> Option<String> {
        self.token.get().as_deref().and_then(session::account_id)
    }
}

impl TokenStore for AuthContext {
    fn read(&self) -> Option<String> {
        self.token.get()
    }

    fn write(&self, token: &str) {
        LocalTokenStore.write(token);
        self.token.set(Some(token.to_string()));
    }

    fn clear(&self) {
        LocalTokenStore.clear();
        self.token.set(None);
    }
}

/// Provides auth context hydrated from local storage.
#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let token = RwSignal::new(LocalTokenStore.read());
    let auth = AuthContext::new(token);
    provide_context(auth);

    view! { {children()} }
}

/// Returns the current auth context or a fallback context read from storage.
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().unwrap_or_else(|| {
        let token = RwSignal::new(LocalTokenStore.read());
        AuthContext::new(token)
    })
}
