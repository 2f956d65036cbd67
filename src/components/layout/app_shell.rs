//! Shared layout wrapper with the marketplace header and content container.
//! Header actions follow the stored token; backend routes still enforce access.

use crate::{features::auth::state::use_auth, routes::paths};
use leptos::prelude::*;
use leptos_router::{components::A, hooks::use_location};

const NAV_LINK: &str = "block py-2 px-3 text-slate-900 rounded hover:bg-slate-100 md:hover:bg-transparent md:border-0 md:hover:text-amber-700 md:p-0";

/// Wraps routes with a header and main content container.
#[component]
pub fn AppShell(children: Children) -> impl IntoView {
    let (menu_open, set_menu_open) = signal(false);
    let auth = use_auth();
    let is_authenticated = auth.is_authenticated;
    let location = use_location();
    let on_login = move || location.pathname.get() == paths::LOGIN;

    let on_logout = move |_| {
        auth.logout();
        set_menu_open.set(false);
        // Full reload so no page keeps state from the closed session.
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(paths::HOME);
        }
    };

    view! {
        <div class="min-h-screen flex flex-col bg-slate-50">
            <header class="border-b border-slate-200 bg-white">
                <div class="max-w-screen-xl flex flex-wrap items-center justify-between mx-auto p-4">
                    <A
                        href=move || {
                            let target = if is_authenticated.get() { paths::MAIN } else { paths::HOME };
                            target.to_string()
                        }
                        {..}
                        class="flex items-center space-x-3"
                        on:click=move |_| set_menu_open.set(false)
                    >
                        <span class="material-symbols-outlined text-3xl text-amber-600">
                            "storefront"
                        </span>
                        <span class="font-semibold whitespace-nowrap text-slate-900">
                            "MarketSafe"
                        </span>
                    </A>
                    <button
                        type="button"
                        class="inline-flex items-center p-2 w-10 h-10 justify-center text-sm text-slate-500 rounded-lg md:hidden hover:bg-slate-100 focus:outline-none focus:ring-2 focus:ring-slate-200"
                        aria-controls="navbar-default"
                        aria-expanded=move || menu_open.get().to_string()
                        on:click=move |_| set_menu_open.update(|open| *open = !*open)
                    >
                        <span class="sr-only">"Open main menu"</span>
                        <span class="material-symbols-outlined">"menu"</span>
                    </button>
                    <div
                        id="navbar-default"
                        class="w-full md:block md:w-auto"
                        class:hidden=move || !menu_open.get()
                    >
                        <ul class="font-medium flex flex-col p-4 md:p-0 mt-4 border border-slate-100 rounded-lg bg-slate-50 md:flex-row md:space-x-8 md:mt-0 md:border-0 md:bg-white">
                            <Show
                                when=move || is_authenticated.get()
                                fallback=move || {
                                    view! {
                                        <li>
                                            <Show
                                                when=on_login
                                                fallback=move || {
                                                    view! {
                                                        <A
                                                            href=paths::LOGIN
                                                            {..}
                                                            class=NAV_LINK
                                                            on:click=move |_| set_menu_open.set(false)
                                                        >
                                                            "Sign In"
                                                        </A>
                                                    }
                                                }
                                            >
                                                <A
                                                    href=paths::SIGNUP
                                                    {..}
                                                    class=NAV_LINK
                                                    on:click=move |_| set_menu_open.set(false)
                                                >
                                                    "Sign Up"
                                                </A>
                                            </Show>
                                        </li>
                                    }
                                }
                            >
                                <li>
                                    <A
                                        href=paths::PROFILE
                                        {..}
                                        class=NAV_LINK
                                        on:click=move |_| set_menu_open.set(false)
                                    >
                                        "Profile"
                                    </A>
                                </li>
                                <li>
                                    <button type="button" class=NAV_LINK on:click=on_logout>
                                        "Log out"
                                    </button>
                                </li>
                            </Show>
                        </ul>
                    </div>
                </div>
            </header>
            <main class="flex-1">
                <div class="container mx-auto p-4 mt-6">{children()}</div>
            </main>
        </div>
    }
}
