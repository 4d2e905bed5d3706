use leptos::prelude::*;

/// Indeterminate loading indicator shown while resources and guards settle.
#[component]
pub fn Spinner() -> impl IntoView {
    view! {
        <span
            class="inline-block h-7 w-7 animate-spin rounded-full border-4 border-purple-200 border-t-purple-600"
            role="status"
        >
            <span class="sr-only">"Loading"</span>
        </span>
    }
}
