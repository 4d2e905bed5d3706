//! Colored status pills for advertisements and applications.

use leptos::prelude::*;

use crate::features::{ads::types::AdStatus, applications::types::ApplicationStatus};

const BADGE_BASE: &str =
    "inline-flex items-center rounded-full px-2.5 py-0.5 text-xs font-medium";

/// Pill for an advertisement's lifecycle state.
#[component]
pub fn AdStatusBadge(#[prop(into)] status: Signal<AdStatus>) -> impl IntoView {
    let class = move || {
        let colors = match status.get() {
            AdStatus::Draft => "bg-gray-100 text-gray-700",
            AdStatus::Active => "bg-emerald-100 text-emerald-800",
            AdStatus::Paused => "bg-amber-100 text-amber-800",
            AdStatus::Completed => "bg-purple-100 text-purple-800",
        };
        format!("{BADGE_BASE} {colors}")
    };

    view! { <span class=class>{move || status.get().label()}</span> }
}

/// Pill for an application's review state.
#[component]
pub fn ApplicationStatusBadge(#[prop(into)] status: Signal<ApplicationStatus>) -> impl IntoView {
    let class = move || {
        let colors = match status.get() {
            ApplicationStatus::Pending => "bg-amber-100 text-amber-800",
            ApplicationStatus::Approved => "bg-emerald-100 text-emerald-800",
            ApplicationStatus::Rejected => "bg-red-100 text-red-700",
        };
        format!("{BADGE_BASE} {colors}")
    };

    view! { <span class=class>{move || status.get().label()}</span> }
}
