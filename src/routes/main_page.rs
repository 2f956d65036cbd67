//! Marketplace home for signed-in users. Listings published in this session are
//! kept in page state, newest first.

use crate::{
    components::{AppShell, LeftNavigation, ListingCard},
    features::{
        auth::RequireAuth,
        listings::{feed::ListingFeed, types::Listing},
    },
};
use leptos::prelude::*;

#[component]
pub fn MainPage() -> impl IntoView {
    let listings = RwSignal::new(ListingFeed::default());
    let on_created = move |listing: Listing| {
        listings.update(|listings| {
            listings.push_front(listing);
        });
    };

    view! {
        <AppShell>
            <RequireAuth>
                <div class="flex flex-col gap-6 md:flex-row">
                    <LeftNavigation listings=listings on_created=on_created />
                    <section class="flex-1 space-y-4">
                        <h1 class="text-2xl font-semibold text-slate-900">"Marketplace"</h1>
                        <Show
                            when=move || listings.with(|listings| !listings.is_empty())
                            fallback=|| {
                                view! {
                                    <div class="grid gap-4 sm:grid-cols-2 lg:grid-cols-3">
                                        <ListingCard />
                                    </div>
                                }
                            }
                        >
                            <div class="grid gap-4 sm:grid-cols-2 lg:grid-cols-3">
                                <For
                                    each=move || listings.with(|feed| feed.entries().to_vec())
                                    key=|entry| entry.key
                                    children=|entry| view! { <ListingCard listing=entry.listing /> }
                                />
                            </div>
                        </Show>
                    </section>
                </div>
            </RequireAuth>
        </AppShell>
    }
}
