use leptos::prelude::*;

const BASE_CLASS: &str = "text-white bg-purple-600 hover:bg-purple-700 focus:ring-4 focus:outline-none focus:ring-purple-300 font-medium rounded-lg text-sm w-full sm:w-auto px-5 py-2.5 text-center";

/// Primary action button. `disabled` is reactive so submit buttons can track
/// an action's pending state directly.
#[component]
pub fn Button(
    #[prop(optional)] button_type: Option<&'static str>,
    #[prop(optional, into, default = Signal::from(false))] disabled: Signal<bool>,
    #[prop(optional, into)] on_click: Option<Callback<leptos::ev::MouseEvent>>,
    children: Children,
) -> impl IntoView {
    let class = move || {
        if disabled.get() {
            format!("{BASE_CLASS} cursor-not-allowed opacity-70")
        } else {
            BASE_CLASS.to_string()
        }
    };

    view! {
        <button
            type=button_type.unwrap_or("button")
            class=class
            disabled=disabled
            on:click=move |event| {
                if let Some(handler) = on_click {
                    handler.run(event);
                }
            }
        >
            {children()}
        </button>
    }
}
