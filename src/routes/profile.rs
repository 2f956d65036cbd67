//! Profile page for the signed-in account. The account id is taken from the
//! token's `sub` claim; the API remains the authority on access.

use crate::{
    app_lib::AppError,
    components::{Alert, AlertKind, AppShell, Rating, Spinner},
    features::{
        accounts::{client, rating::RatingModel, types::Account},
        auth::{RequireAuth, session::session_rejected, state::use_auth},
    },
};
use leptos::prelude::*;

#[component]
pub fn ProfilePage() -> impl IntoView {
    view! {
        <AppShell>
            <RequireAuth>
                <ProfileContent />
            </RequireAuth>
        </AppShell>
    }
}

#[component]
fn ProfileContent() -> impl IntoView {
    let auth = use_auth();
    let account = LocalResource::new(move || {
        let token = auth.token.get();
        let account_id = auth.account_id();
        async move {
            let token =
                token.ok_or_else(|| AppError::Validation("Please sign in again.".to_string()))?;
            let account_id = account_id.ok_or_else(|| {
                AppError::Validation("Unable to read your account from the session.".to_string())
            })?;
            client::get_account(&account_id, &token).await
        }
    });

    Effect::new(move |_| {
        if let Some(Err(err)) = account.get() {
            if session_rejected(&err) {
                tracing::info!("session rejected by the API");
                auth.logout();
            }
        }
    });

    view! {
        <div class="max-w-2xl mx-auto">
            {move || match account.get() {
                None => view! { <Spinner /> }.into_any(),
                Some(Ok(account)) => view! { <ProfileCard account=account /> }.into_any(),
                Some(Err(err)) => {
                    tracing::warn!(error = %err, "profile failed to load");
                    view! { <Alert kind=AlertKind::Error message=err.to_string() /> }.into_any()
                }
            }}
        </div>
    }
}

#[component]
fn ProfileCard(account: Account) -> impl IntoView {
    let rating = RatingModel::build(account.rating_avg, account.rating_count);
    let verified = account.verified;

    view! {
        <div class="rounded-2xl border border-slate-200 bg-white p-6 space-y-6">
            <div class="flex items-center gap-4">
                <div class="flex h-16 w-16 items-center justify-center rounded-full bg-amber-100 text-xl font-bold text-amber-800">
                    {account.initials()}
                </div>
                <div class="space-y-1">
                    <h1 class="text-xl font-semibold text-slate-900">{account.display_name()}</h1>
                    <p class="text-sm text-slate-500">{account.email.clone()}</p>
                </div>
            </div>
            <div class="flex flex-wrap items-center gap-3">
                <Show
                    when=move || verified
                    fallback=|| {
                        view! {
                            <span class="rounded-full bg-slate-100 px-3 py-1 text-xs font-semibold text-slate-600">
                                "Unverified"
                            </span>
                        }
                    }
                >
                    <span class="inline-flex items-center gap-1 rounded-full bg-emerald-100 px-3 py-1 text-xs font-semibold text-emerald-700">
                        <span class="material-symbols-outlined text-sm">"verified"</span>
                        "Verified student"
                    </span>
                </Show>
            </div>
            <hr class="border-slate-100" />
            <div class="space-y-2">
                <h2 class="text-sm font-semibold uppercase tracking-wide text-slate-500">"Seller rating"</h2>
                <Rating model=rating />
            </div>
        </div>
    }
}
