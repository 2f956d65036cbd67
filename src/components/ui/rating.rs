use crate::features::accounts::rating::RatingModel;
use leptos::prelude::*;

/// Five-star rating row with the average and review count.
#[component]
pub fn Rating(model: RatingModel) -> impl IntoView {
    let RatingModel {
        stars,
        average,
        review_count,
    } = model;

    view! {
        <div class="flex items-center gap-2 text-sm text-slate-600">
            <div class="flex text-amber-500" aria-hidden="true">
                {stars
                    .into_iter()
                    .map(|star| {
                        view! { <span class="material-symbols-outlined text-lg">{star.icon()}</span> }
                    })
                    .collect_view()}
            </div>
            <span class="font-semibold text-slate-900">{average}</span>
            <span>{review_count}</span>
        </div>
    }
}
