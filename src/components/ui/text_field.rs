//! Labelled form input with an inline error line. The error signal yields an
//! empty string while there is nothing to show; forms decide visibility.

use leptos::{ev::FocusEvent, prelude::*};

const INPUT_CLASS: &str = "w-full rounded-xl border border-slate-200 bg-slate-50 px-3 py-2.5 text-sm text-slate-900 focus:border-slate-400 focus:ring-2 focus:ring-slate-200";

#[component]
pub fn TextField(
    id: &'static str,
    label: &'static str,
    #[prop(optional)] input_type: Option<&'static str>,
    #[prop(optional)] autocomplete: Option<&'static str>,
    #[prop(optional)] placeholder: Option<&'static str>,
    /// Password input with a show/hide toggle.
    #[prop(optional)]
    revealable: bool,
    /// Renders a textarea instead of a single-line input.
    #[prop(optional)]
    multiline: bool,
    #[prop(into)] error: Signal<&'static str>,
    #[prop(into)] on_input: Callback<String>,
    #[prop(into)] on_blur: Callback<FocusEvent>,
) -> impl IntoView {
    let (revealed, set_revealed) = signal(false);
    let base_type = input_type.unwrap_or("text");
    let current_type = move || match (revealable, revealed.get()) {
        (true, false) => "password",
        (true, true) => "text",
        (false, _) => base_type,
    };
    let has_error = move || !error.get().is_empty();

    let control = if multiline {
        view! {
            <textarea
                id=id
                rows="4"
                class=INPUT_CLASS
                class:border-red-400=has_error
                placeholder=placeholder
                aria-invalid=move || has_error().to_string()
                on:input=move |event| on_input.run(event_target_value(&event))
                on:blur=move |event| on_blur.run(event)
            ></textarea>
        }
        .into_any()
    } else {
        view! {
            <div class="relative">
                <input
                    id=id
                    type=current_type
                    class=INPUT_CLASS
                    class:pr-12=revealable
                    class:border-red-400=has_error
                    autocomplete=autocomplete
                    placeholder=placeholder
                    aria-invalid=move || has_error().to_string()
                    on:input=move |event| on_input.run(event_target_value(&event))
                    on:blur=move |event| on_blur.run(event)
                />
                <Show when=move || revealable>
                    <button
                        type="button"
                        class="absolute inset-y-0 right-0 flex items-center px-3 text-slate-500 hover:text-slate-700"
                        aria-label=move || {
                            if revealed.get() { "Hide password" } else { "Show password" }
                        }
                        on:click=move |_| set_revealed.update(|shown| *shown = !*shown)
                    >
                        <span class="material-symbols-outlined text-base">
                            {move || if revealed.get() { "visibility_off" } else { "visibility" }}
                        </span>
                    </button>
                </Show>
            </div>
        }
        .into_any()
    };

    view! {
        <div>
            <label class="block mb-2 text-sm font-medium text-slate-700" for=id>
                {label}
            </label>
            {control}
            <Show when=has_error>
                <p class="mt-1 text-xs text-red-600">{move || error.get()}</p>
            </Show>
        </div>
    }
}
