//! Layout components shared across routes.

mod app_shell;
mod create_listing_dialog;
mod left_navigation;

pub(crate) use app_shell::AppShell;
pub(crate) use left_navigation::LeftNavigation;
