use crate::features::listings::{display::ListingCardModel, types::Listing};
use leptos::prelude::*;

/// Marketplace card for one listing, or a placeholder card without one.
#[component]
pub fn ListingCard(#[prop(optional)] listing: Option<Listing>) -> impl IntoView {
    let card = ListingCardModel::new(listing.as_ref());
    let title = card.title().to_string();
    let image_url = card.image_url().to_string();
    let price = card.price();
    let location = card.location().to_string();
    let created_at = card.created_at();
    let is_sold = card.is_sold();

    view! {
        <article class="overflow-hidden rounded-2xl border border-slate-200 bg-white shadow-sm">
            <div class="relative aspect-[4/3] bg-slate-100">
                <img src=image_url alt=title.clone() class="h-full w-full object-cover" />
                <Show when=move || is_sold>
                    <span class="absolute left-3 top-3 rounded-full bg-slate-900/80 px-3 py-1 text-xs font-semibold uppercase tracking-wide text-white">
                        "Sold"
                    </span>
                </Show>
            </div>
            <div class="space-y-1 p-4">
                <h3 class="truncate text-base font-semibold text-slate-900">{title}</h3>
                <p class="text-lg font-bold text-amber-700">{price}</p>
                <p class="flex items-center gap-1 text-sm text-slate-500">
                    <span class="material-symbols-outlined text-base">"location_on"</span>
                    {location}
                </p>
                <p class="text-xs text-slate-400">{created_at}</p>
            </div>
        </article>
    }
}
