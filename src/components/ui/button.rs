use leptos::{ev::MouseEvent, prelude::*};

const PRIMARY: &str = "text-white bg-amber-600 hover:bg-amber-700 focus:ring-4 focus:outline-none focus:ring-amber-300 font-medium rounded-lg text-sm w-full sm:w-auto px-5 py-2.5 text-center";
const SECONDARY: &str = "text-slate-700 bg-white border border-slate-200 hover:bg-slate-100 focus:ring-4 focus:outline-none focus:ring-slate-100 font-medium rounded-lg text-sm w-full sm:w-auto px-5 py-2.5 text-center";

#[component]
pub fn Button(
    #[prop(optional)] button_type: Option<&'static str>,
    #[prop(optional, into, default = Signal::from(false))] disabled: Signal<bool>,
    /// Renders the outlined style used for back and cancel actions.
    #[prop(optional)]
    secondary: bool,
    #[prop(optional, into)] on_click: Option<Callback<MouseEvent>>,
    children: Children,
) -> impl IntoView {
    let button_type = button_type.unwrap_or("button");
    let class = if secondary { SECONDARY } else { PRIMARY };

    view! {
        <button
            type=button_type
            class=class
            class:cursor-not-allowed=move || disabled.get()
            class:opacity-70=move || disabled.get()
            disabled=move || disabled.get()
            on:click=move |event| {
                if let Some(on_click) = on_click {
                    on_click.run(event);
                }
            }
        >
            {children()}
        </button>
    }
}
