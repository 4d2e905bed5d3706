//! Minimalistic 404 page for unknown routes.

use crate::components::AppShell;
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <AppShell>
            <div class="flex flex-col items-center justify-center min-h-[50vh] text-center px-4">
                <div class="relative">
                    <h1 class="text-9xl font-black text-gray-100 select-none">"404"</h1>
                    <p class="absolute top-1/2 left-1/2 -translate-x-1/2 -translate-y-1/2 text-2xl font-bold text-gray-900 whitespace-nowrap">
                        "Page not found"
                    </p>
                </div>

                <div class="mt-4 space-y-6">
                    <p class="text-gray-500 max-w-sm mx-auto">
                        "The page you requested does not exist or has moved."
                    </p>

                    <div class="flex flex-col sm:flex-row items-center justify-center gap-4">
                        <A
                            href="/"
                            {..}
                            class="inline-flex items-center px-5 py-2.5 text-sm font-medium text-white bg-purple-600 rounded-lg hover:bg-purple-700 focus:ring-4 focus:outline-none focus:ring-purple-300 transition-all"
                        >
                            "Go Home"
                        </A>
                        <button
                            on:click=move |_| {
                                if let Some(window) = web_sys::window() {
                                    if let Ok(history) = window.history() {
                                        let _ = history.back();
                                    }
                                }
                            }
                            class="inline-flex items-center px-5 py-2.5 text-sm font-medium text-gray-900 bg-white border border-gray-200 rounded-lg hover:bg-gray-100 hover:text-purple-700 focus:z-10 focus:ring-4 focus:ring-gray-100 transition-all"
                        >
                            "Go Back"
                        </button>
                    </div>
                </div>
            </div>
        </AppShell>
    }
}
