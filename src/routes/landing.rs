use crate::{components::AppShell, routes::paths};
use leptos::prelude::*;
use leptos_router::components::A;

/// Public entry page with the call to action to create an account.
#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <AppShell>
            <section class="mx-auto max-w-2xl py-16 text-center space-y-6">
                <p class="text-[11px] font-semibold uppercase tracking-[0.2em] text-amber-600">
                    "University of Manitoba"
                </p>
                <h1 class="text-4xl font-bold text-slate-900">
                    "Buy and sell on campus, safely."
                </h1>
                <p class="text-slate-500">
                    "MarketSafe is a marketplace for verified UManitoba students. Sign up with your university email to start listing."
                </p>
                <div class="flex flex-col sm:flex-row items-center justify-center gap-3">
                    <A
                        href=paths::SIGNUP
                        {..}
                        class="inline-flex items-center px-6 py-3 text-sm font-medium text-white bg-amber-600 rounded-lg hover:bg-amber-700 transition-all"
                    >
                        "Get started"
                    </A>
                    <A
                        href=paths::LOGIN
                        {..}
                        class="inline-flex items-center px-6 py-3 text-sm font-medium text-slate-700 bg-white border border-slate-200 rounded-lg hover:bg-slate-100 transition-all"
                    >
                        "I already have an account"
                    </A>
                </div>
            </section>
        </AppShell>
    }
}
