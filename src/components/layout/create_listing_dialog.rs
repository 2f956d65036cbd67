//! Modal form for publishing a listing. Validation runs on every keystroke but
//! only touched fields show their message; the request carries the stored
//! bearer token.

use crate::{
    app_lib::AppError,
    components::{Alert, AlertKind, Button, Spinner, TextField},
    features::{
        auth::state::use_auth,
        listings::{
            client,
            form::{ListingField, ListingForm},
            types::{CreateListingRequest, Listing},
        },
        validation::Touched,
    },
};
use leptos::{ev::SubmitEvent, prelude::*};

#[component]
pub(super) fn CreateListingDialog(
    open: RwSignal<bool>,
    #[prop(into)] on_created: Callback<Listing>,
) -> impl IntoView {
    let auth = use_auth();
    let form = RwSignal::new(ListingForm::default());
    let touched = RwSignal::new(Touched::<ListingField>::default());
    let (error, set_error) = signal::<Option<AppError>>(None);
    let errors = Memo::new(move |_| form.with(ListingForm::errors));
    let visible = move |field: ListingField| {
        Signal::derive(move || {
            touched.with(|touched| errors.with(|errors| touched.visible_message(errors, field)))
        })
    };

    let create_action = Action::new_local(move |request: &CreateListingRequest| {
        let request = request.clone();
        let token = auth.token.get_untracked().filter(|token| !token.is_empty());
        async move {
            let token = token.ok_or_else(|| {
                AppError::Validation("Your session has ended. Please sign in again.".to_string())
            })?;
            client::create_listing(&request, &token).await
        }
    });

    let reset = move || {
        form.set(ListingForm::default());
        touched.set(Touched::default());
        set_error.set(None);
    };

    Effect::new(move |_| {
        if let Some(result) = create_action.value().get() {
            match result {
                Ok(listing) => {
                    tracing::info!(title = %listing.title, "listing created");
                    on_created.run(listing);
                    reset();
                    open.set(false);
                }
                Err(err) => set_error.set(Some(err)),
            }
        }
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        set_error.set(None);

        match form.with_untracked(ListingForm::submit) {
            Ok(request) => {
                create_action.dispatch(request);
            }
            Err(errors) => {
                tracing::debug!(fields = ?errors.keys(), "listing rejected by validation");
                touched.update(Touched::touch_all);
            }
        }
    };

    let on_cancel = move |_| {
        reset();
        open.set(false);
    };

    view! {
        <Show when=move || open.get()>
            <div
                class="fixed inset-0 z-40 flex items-center justify-center bg-slate-900/40 px-4"
                role="dialog"
                aria-modal="true"
                aria-labelledby="create-listing-title"
            >
                <form
                    class="w-full max-w-xl space-y-4 rounded-2xl bg-white p-6 shadow-xl"
                    on:submit=on_submit
                >
                    <h2 id="create-listing-title" class="text-xl font-semibold text-slate-900">
                        "Create listing"
                    </h2>
                    <TextField
                        id="listing-title"
                        label="Title"
                        error=visible(ListingField::Title)
                        on_input=move |value: String| form.update(|form| form.title = value)
                        on_blur=move |_| touched.update(|touched| touched.touch(ListingField::Title))
                    />
                    <TextField
                        id="listing-description"
                        label="Description"
                        multiline=true
                        error=visible(ListingField::Description)
                        on_input=move |value: String| form.update(|form| form.description = value)
                        on_blur=move |_| {
                            touched.update(|touched| touched.touch(ListingField::Description))
                        }
                    />
                    <div class="grid gap-4 sm:grid-cols-2">
                        <TextField
                            id="listing-price"
                            label="Price"
                            input_type="number"
                            placeholder="0.00"
                            error=visible(ListingField::Price)
                            on_input=move |value: String| form.update(|form| form.price = value)
                            on_blur=move |_| touched.update(|touched| touched.touch(ListingField::Price))
                        />
                        <TextField
                            id="listing-location"
                            label="Location"
                            error=visible(ListingField::Location)
                            on_input=move |value: String| form.update(|form| form.location = value)
                            on_blur=move |_| {
                                touched.update(|touched| touched.touch(ListingField::Location))
                            }
                        />
                    </div>
                    <TextField
                        id="listing-image-url"
                        label="Image link (optional)"
                        input_type="url"
                        placeholder="https://"
                        error=visible(ListingField::ImageUrl)
                        on_input=move |value: String| form.update(|form| form.image_url = value)
                        on_blur=move |_| touched.update(|touched| touched.touch(ListingField::ImageUrl))
                    />
                    {move || {
                        error
                            .get()
                            .map(|err| {
                                view! { <Alert kind=AlertKind::Error message=err.to_string() /> }
                            })
                    }}
                    <div class="flex flex-col-reverse gap-3 sm:flex-row sm:justify-end">
                        <Button secondary=true on_click=on_cancel>
                            "Cancel"
                        </Button>
                        <Button button_type="submit" disabled=create_action.pending()>
                            "Create"
                        </Button>
                    </div>
                    {move || create_action.pending().get().then_some(view! { <Spinner /> })}
                </form>
            </div>
        </Show>
    }
}
