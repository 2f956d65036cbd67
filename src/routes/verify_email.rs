//! Email verification landing page for the one-time link. The token is read
//! from the query string once, stripped from the address bar, and verified in a
//! single call; every outcome schedules a redirect.

use crate::{
    components::{Alert, AlertKind, AppShell, Spinner},
    features::auth::{
        client,
        verification::{Redirect, VerificationFlow, VerifyStatus, token_from_query},
    },
};
use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use wasm_bindgen::JsValue;
use web_sys::window;

#[component]
pub fn VerifyEmailPage() -> impl IntoView {
    let navigate = use_navigate();
    let flow = RwSignal::new(VerificationFlow::new());

    let schedule = move |redirect: Redirect| {
        let navigate = navigate.clone();
        tracing::debug!(path = redirect.path, delay_ms = redirect.delay_ms, "redirect scheduled");
        Timeout::new(redirect.delay_ms, move || {
            navigate(redirect.path, Default::default());
        })
        .forget();
    };

    let verify_action = Action::new_local(move |token: &String| {
        let token = token.clone();
        async move { client::verify_email(&token).await }
    });

    let on_settled = schedule.clone();
    Effect::new(move |_| {
        if let Some(result) = verify_action.value().get() {
            let mut redirect = None;
            flow.update(|flow| redirect = flow.finish(result.map(|_| ())));
            if let Some(redirect) = redirect {
                on_settled(redirect);
            }
        }
    });

    Effect::new(move |_| {
        let mut token = None;
        flow.update(|flow| token = flow.begin(current_query().as_deref()));
        clear_token_query();

        match token {
            Some(token) => {
                verify_action.dispatch(token);
            }
            None => {
                if let Some(redirect) = flow.with_untracked(VerificationFlow::redirect) {
                    schedule(redirect);
                }
            }
        }
    });

    view! {
        <AppShell>
            <div class="max-w-lg mx-auto space-y-4">
                <h1 class="text-2xl font-semibold text-slate-900">"Verify your email"</h1>
                {move || match flow.with(|flow| flow.status().clone()) {
                    VerifyStatus::Loading => view! {
                        <div class="flex items-center gap-3 text-sm text-slate-500">
                            <Spinner />
                            "Verifying your email..."
                        </div>
                    }
                    .into_any(),
                    VerifyStatus::Success => view! {
                        <Alert
                            kind=AlertKind::Success
                            message="Your email has been verified. Redirecting to login..."
                        />
                    }
                    .into_any(),
                    VerifyStatus::Error(message) => view! {
                        <Alert kind=AlertKind::Error message=message />
                    }
                    .into_any(),
                }}
            </div>
        </AppShell>
    }
}

fn current_query() -> Option<String> {
    let search = window()?.location().search().ok()?;
    token_from_query(&search)
}

/// Drops the one-time token from the address bar and history entry.
fn clear_token_query() {
    let Some(window) = window() else {
        return;
    };
    let Ok(history) = window.history() else {
        return;
    };
    let _ = history.replace_state_with_url(&JsValue::NULL, "", Some("/verify-email"));
}
