//! Shared UI components exported for routes and features.

pub(crate) mod layout;
mod listing_card;
pub(crate) mod ui;

pub(crate) use layout::{AppShell, LeftNavigation};
pub(crate) use listing_card::ListingCard;
pub(crate) use ui::{Alert, AlertKind, Button, Rating, Spinner, TextField};
