//! Inline alert banners. Whatever callers put in the message lands in the
//! DOM, so tokens and credentials stay out of it.

use leptos::prelude::*;

/// Visual style of an [`Alert`].
#[derive(Clone, Copy)]
pub enum AlertKind {
    Error,
    Success,
    Info,
}

impl AlertKind {
    fn container_class(self) -> &'static str {
        match self {
            Self::Error => {
                "rounded-lg border border-red-200 bg-red-50 px-4 py-3 text-sm text-red-700"
            }
            Self::Success => {
                "rounded-lg border border-emerald-200 bg-emerald-50 px-4 py-3 text-sm text-emerald-700"
            }
            Self::Info => {
                "rounded-lg border border-purple-200 bg-purple-50 px-4 py-3 text-sm text-purple-700"
            }
        }
    }
}

/// One-line notice for form errors, submit confirmations and load failures.
#[component]
pub fn Alert(kind: AlertKind, message: String) -> impl IntoView {
    view! {
        <div class=kind.container_class() role="alert">
            {message}
        </div>
    }
}
