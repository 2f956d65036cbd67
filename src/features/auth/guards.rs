use crate::features::auth::{
    session::{GuardDecision, guard},
    state::use_auth,
};
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

/// Renders children only while a token is stored; otherwise navigates to login.
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();
    let decision = Memo::new(move |_| guard(&auth));

    Effect::new(move |_| {
        if let GuardDecision::Redirect(path) = decision.get() {
            // UX-only guard; real access control must live on the API.
            tracing::debug!(path, "guarded route requires a session");
            navigate(path, Default::default());
        }
    });

    view! {
        <Show when=move || decision.get() == GuardDecision::Allow>
            {children()}
        </Show>
    }
}
