mod health;
mod landing;
mod login;
mod main_page;
mod not_found;
mod profile;
mod signup;
mod verify_email;

pub(crate) use health::HealthPage;
pub(crate) use landing::LandingPage;
pub(crate) use login::LoginPage;
pub(crate) use main_page::MainPage;
pub(crate) use not_found::NotFoundPage;
pub(crate) use profile::ProfilePage;
pub(crate) use signup::SignUpPage;
pub(crate) use verify_email::VerifyEmailPage;

use leptos::prelude::*;
use leptos_router::components::{Route, Routes};
use leptos_router::path;

/// Client-side paths shared by links, guards and redirects.
pub(crate) mod paths {
    pub const HOME: &str = "/";
    pub const SIGNUP: &str = "/signup";
    pub const LOGIN: &str = crate::features::auth::session::LOGIN_PATH;
    pub const MAIN: &str = "/main";
    pub const PROFILE: &str = "/profile";
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Routes fallback=|| view! { <NotFoundPage /> }>
            <Route path=path!("/") view=LandingPage />
            <Route path=path!("/health") view=HealthPage />
            <Route path=path!("/login") view=LoginPage />
            <Route path=path!("/signup") view=SignUpPage />
            <Route path=path!("/verify-email") view=VerifyEmailPage />
            <Route path=path!("/main") view=MainPage />
            <Route path=path!("/profile") view=ProfilePage />
            <Route path=path!("/*any") view=NotFoundPage />
        </Routes>
    }
}
