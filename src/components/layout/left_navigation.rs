//! Sidebar for the marketplace page: listing count, shortcuts to the listings
//! published in this session and the create-listing entry point.

use super::create_listing_dialog::CreateListingDialog;
use crate::features::listings::{display::ListingCardModel, feed::ListingFeed, types::Listing};
use leptos::prelude::*;

#[component]
pub fn LeftNavigation(
    #[prop(into)] listings: Signal<ListingFeed>,
    #[prop(into)] on_created: Callback<Listing>,
) -> impl IntoView {
    let dialog_open = RwSignal::new(false);
    let count = move || listings.with(ListingFeed::len);

    view! {
        <aside class="w-full space-y-6 rounded-2xl border border-slate-200 bg-white p-4 md:w-64">
            <div class="flex items-center justify-between">
                <h2 class="text-sm font-semibold uppercase tracking-wide text-slate-500">
                    "My listings"
                </h2>
                <span class="rounded-full bg-amber-100 px-2.5 py-0.5 text-xs font-semibold text-amber-800">
                    {count}
                </span>
            </div>
            <button
                type="button"
                class="flex w-full items-center justify-center gap-2 rounded-lg bg-amber-600 px-4 py-2.5 text-sm font-medium text-white hover:bg-amber-700"
                on:click=move |_| dialog_open.set(true)
            >
                <span class="material-symbols-outlined text-base">"add"</span>
                "Create listing"
            </button>
            <hr class="border-slate-100" />
            <Show
                when=move || count() > 0
                fallback=|| {
                    view! { <p class="text-sm text-slate-500">"No listings yet."</p> }
                }
            >
                <ul class="space-y-2">
                    <For
                        each=move || listings.with(|feed| feed.entries().to_vec())
                        key=|entry| entry.key
                        children=|entry| {
                            let card = ListingCardModel::new(Some(&entry.listing));
                            let title = card.title().to_string();
                            let image_url = card.image_url().to_string();
                            view! {
                                <li class="flex items-center gap-3 rounded-lg p-2 hover:bg-slate-50">
                                    <img
                                        src=image_url
                                        alt=""
                                        class="h-10 w-10 rounded-md object-cover bg-slate-100"
                                    />
                                    <span class="truncate text-sm text-slate-800">{title}</span>
                                </li>
                            }
                        }
                    />
                </ul>
            </Show>
            <CreateListingDialog open=dialog_open on_created=on_created />
        </aside>
    }
}
