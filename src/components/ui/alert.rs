//! Feedback banners for form and verification outcomes. Messages come from the
//! API or the verification flow and must never include tokens.

use leptos::prelude::*;

#[derive(Clone, Copy)]
pub enum AlertKind {
    Error,
    Success,
}

impl AlertKind {
    fn class(self) -> &'static str {
        match self {
            AlertKind::Error => "border-red-200 bg-red-50 text-red-700",
            AlertKind::Success => "border-emerald-200 bg-emerald-50 text-emerald-700",
        }
    }

    fn icon(self) -> &'static str {
        match self {
            AlertKind::Error => "error",
            AlertKind::Success => "check_circle",
        }
    }

    /// Errors interrupt screen readers; confirmations are announced politely.
    fn role(self) -> &'static str {
        match self {
            AlertKind::Error => "alert",
            AlertKind::Success => "status",
        }
    }
}

#[component]
pub fn Alert(kind: AlertKind, #[prop(into)] message: String) -> impl IntoView {
    let class = format!(
        "flex items-start gap-2 rounded-lg border px-4 py-3 text-sm {}",
        kind.class()
    );

    view! {
        <div class=class role=kind.role()>
            <span class="material-symbols-outlined text-base" aria-hidden="true">
                {kind.icon()}
            </span>
            <span>{message}</span>
        </div>
    }
}
