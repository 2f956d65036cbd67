use crate::{
    app_lib::AppError,
    components::{Alert, AlertKind, AppShell, Button, Spinner, TextField},
    features::{
        auth::{
            client,
            forms::{LoginField, LoginForm},
            state::use_auth,
            types::LoginRequest,
        },
        validation::Touched,
    },
    routes::paths,
};
use leptos::{ev::SubmitEvent, prelude::*};
use leptos_router::{components::A, hooks::use_navigate};

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();
    let form = RwSignal::new(LoginForm::default());
    let touched = RwSignal::new(Touched::<LoginField>::default());
    let (error, set_error) = signal::<Option<AppError>>(None);
    let errors = Memo::new(move |_| form.with(LoginForm::errors));
    let visible = move |field: LoginField| {
        Signal::derive(move || {
            touched.with(|touched| errors.with(|errors| touched.visible_message(errors, field)))
        })
    };
    let touch = move |field: LoginField| touched.update(|touched| touched.touch(field));

    let login_action = Action::new_local(move |request: &LoginRequest| {
        let request = request.clone();
        async move { client::login(&request).await }
    });

    Effect::new(move |_| {
        if let Some(result) = login_action.value().get() {
            match result {
                Ok(token) => {
                    auth.login(&token.access_token);
                    navigate(paths::MAIN, Default::default());
                }
                Err(err) => set_error.set(Some(err)),
            }
        }
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        set_error.set(None);

        match form.with_untracked(LoginForm::submit) {
            Ok(submission) => {
                login_action.dispatch(LoginRequest::from(submission));
            }
            Err(errors) => {
                tracing::debug!(fields = ?errors.keys(), "login rejected by validation");
                touched.update(Touched::touch_all);
            }
        }
    };

    view! {
        <AppShell>
            <form class="max-w-sm mx-auto space-y-5" on:submit=on_submit>
                <h1 class="text-2xl font-semibold text-slate-900">"Welcome back"</h1>
                <TextField
                    id="email"
                    label="Your email"
                    input_type="email"
                    autocomplete="email"
                    placeholder="name@myumanitoba.ca"
                    error=visible(LoginField::Email)
                    on_input=move |value: String| form.update(|form| form.email = value)
                    on_blur=move |_| touch(LoginField::Email)
                />
                <TextField
                    id="password"
                    label="Your password"
                    autocomplete="current-password"
                    revealable=true
                    error=visible(LoginField::Password)
                    on_input=move |value: String| form.update(|form| form.password = value)
                    on_blur=move |_| touch(LoginField::Password)
                />
                <div class="flex flex-col-reverse gap-3 sm:flex-row sm:justify-between">
                    <A
                        href=paths::HOME
                        {..}
                        class="inline-flex justify-center items-center px-5 py-2.5 text-sm font-medium text-slate-700 bg-white border border-slate-200 rounded-lg hover:bg-slate-100 transition-all"
                    >
                        "Back"
                    </A>
                    <Button button_type="submit" disabled=login_action.pending()>
                        "Sign in"
                    </Button>
                </div>
                {move || {
                    login_action
                        .pending()
                        .get()
                        .then_some(view! { <div class="mt-4"><Spinner /></div> })
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
            </form>
        </AppShell>
    }
}
