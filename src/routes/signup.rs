//! Signup route. Fields are validated as they change and the account is created
//! only when every rule passes; the API then mails the verification link.
//!
//! Flow Overview: Collect the form, validate, `POST /accounts`, then prompt the
//! user to check their inbox.

use crate::{
    app_lib::AppError,
    components::{Alert, AlertKind, AppShell, Button, Spinner, TextField},
    features::{
        auth::{
            client,
            forms::{SignupField, SignupForm},
            types::SignupRequest,
        },
        validation::Touched,
    },
    routes::paths,
};
use leptos::{ev::SubmitEvent, prelude::*};
use leptos_router::components::A;

/// Renders the signup form and submits it once it validates.
#[component]
pub fn SignUpPage() -> impl IntoView {
    let form = RwSignal::new(SignupForm::default());
    let touched = RwSignal::new(Touched::<SignupField>::default());
    let (error, set_error) = signal::<Option<AppError>>(None);
    let (created_email, set_created_email) = signal::<Option<String>>(None);
    let errors = Memo::new(move |_| form.with(SignupForm::errors));
    let visible = move |field: SignupField| {
        Signal::derive(move || {
            touched.with(|touched| errors.with(|errors| touched.visible_message(errors, field)))
        })
    };
    let touch = move |field: SignupField| touched.update(|touched| touched.touch(field));

    let signup_action = Action::new_local(move |request: &SignupRequest| {
        let request = request.clone();
        async move { client::signup(&request).await }
    });

    Effect::new(move |_| {
        if let Some(result) = signup_action.value().get() {
            match result {
                Ok(account) => {
                    tracing::info!("account created, verification pending");
                    set_created_email.set(Some(account.email));
                }
                Err(err) => set_error.set(Some(err)),
            }
        }
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        set_error.set(None);
        set_created_email.set(None);

        match form.with_untracked(SignupForm::submit) {
            Ok(submission) => {
                signup_action.dispatch(SignupRequest::from(submission));
            }
            Err(errors) => {
                tracing::debug!(fields = ?errors.keys(), "signup rejected by validation");
                touched.update(Touched::touch_all);
            }
        }
    };

    view! {
        <AppShell>
            <div class="min-h-[70vh] flex items-center justify-center px-6 py-10">
                <form
                    class="w-full max-w-md rounded-2xl border border-slate-200 bg-white/90 p-6 shadow-[0_20px_60px_-40px_rgba(15,23,42,0.35)] sm:p-8"
                    on:submit=on_submit
                >
                    <div class="space-y-2">
                        <p class="text-[11px] font-semibold uppercase tracking-[0.2em] text-slate-400">
                            "Create account"
                        </p>
                        <h1 class="text-2xl font-semibold text-slate-900">"Join MarketSafe"</h1>
                        <p class="text-sm text-slate-500">
                            "Use your UManitoba email. We will send a link to verify it."
                        </p>
                    </div>

                    <div class="mt-6 space-y-4">
                        <div class="grid gap-4 sm:grid-cols-2">
                            <TextField
                                id="first_name"
                                label="First name"
                                autocomplete="given-name"
                                error=visible(SignupField::FirstName)
                                on_input=move |value: String| form.update(|form| form.first_name = value)
                                on_blur=move |_| touch(SignupField::FirstName)
                            />
                            <TextField
                                id="last_name"
                                label="Last name"
                                autocomplete="family-name"
                                error=visible(SignupField::LastName)
                                on_input=move |value: String| form.update(|form| form.last_name = value)
                                on_blur=move |_| touch(SignupField::LastName)
                            />
                        </div>
                        <TextField
                            id="email"
                            label="University email"
                            input_type="email"
                            autocomplete="email"
                            placeholder="name@myumanitoba.ca"
                            error=visible(SignupField::Email)
                            on_input=move |value: String| form.update(|form| form.email = value)
                            on_blur=move |_| touch(SignupField::Email)
                        />
                        <TextField
                            id="password"
                            label="Password"
                            autocomplete="new-password"
                            revealable=true
                            error=visible(SignupField::Password)
                            on_input=move |value: String| form.update(|form| form.password = value)
                            on_blur=move |_| touch(SignupField::Password)
                        />

                        <Button button_type="submit" disabled=signup_action.pending()>
                            "Create account"
                        </Button>
                    </div>

                    {move || {
                        signup_action
                            .pending()
                            .get()
                            .then_some(view! { <div class="mt-4"><Spinner /></div> })
                    }}
                    {move || {
                        created_email
                            .get()
                            .map(|email| {
                                view! {
                                    <div class="mt-4">
                                        <Alert
                                            kind=AlertKind::Success
                                            message=format!("Check {email} for a link to verify your account.")
                                        />
                                    </div>
                                }
                            })
                    }}
                    {move || {
                        error
                            .get()
                            .map(|err| {
                                view! {
                                    <div class="mt-4">
                                        <Alert kind=AlertKind::Error message=err.to_string() />
                                    </div>
                                }
                            })
                    }}
                    <p class="mt-6 text-center text-sm text-slate-500">
                        "Already registered? "
                        <A href=paths::LOGIN {..} class="font-medium text-amber-700 hover:underline">
                            "Sign in"
                        </A>
                    </p>
                </form>
            </div>
        </AppShell>
    }
}
