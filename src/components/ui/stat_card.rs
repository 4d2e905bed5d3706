use leptos::prelude::*;

/// Card showing one headline number on a dashboard.
#[component]
pub fn StatCard(
    label: &'static str,
    #[prop(into)] value: Signal<String>,
    #[prop(optional)] hint: Option<&'static str>,
) -> impl IntoView {
    view! {
        <div class="rounded-lg border border-gray-200 bg-white p-5 shadow-sm">
            <p class="text-sm font-medium text-gray-500">{label}</p>
            <p class="mt-1 text-3xl font-semibold text-gray-900">{move || value.get()}</p>
            {hint.map(|hint| view! { <p class="mt-1 text-xs text-gray-400">{hint}</p> })}
        </div>
    }
}
