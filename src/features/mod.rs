//! Feature modules grouped by domain. Each keeps its pure models next to the
//! browser-only client so the models stay testable on the host.

pub(crate) mod accounts;
pub(crate) mod auth;
pub(crate) mod listings;
pub(crate) mod validation;
