//! Shared layout wrapper with the marketplace navbar and content container. It
//! centralizes header markup and the mobile menu toggle so routes can focus on
//! content. Navigation remains client-side; the backend still enforces access
//! control on every request.

use crate::app_lib::build_info;
use crate::features::auth::{client, state::use_auth};
use leptos::{prelude::*, task::spawn_local};
use leptos_router::{components::A, hooks::use_navigate, NavigateOptions};

const NAV_LINK: &str = "block py-2 px-3 text-gray-600 rounded hover:bg-gray-100 md:hover:bg-transparent md:border-0 md:hover:text-purple-700 md:p-0";

/// Wraps routes with the marketplace header, content container and footer.
#[component]
pub fn AppShell(children: Children) -> impl IntoView {
    let (menu_open, set_menu_open) = signal(false);
    let toggle_menu = move |_| {
        set_menu_open.update(|open| *open = !*open);
    };
    let auth = use_auth();
    let is_authenticated = auth.is_authenticated;
    let dashboard_href = move || {
        auth.session
            .with(|session| session.as_ref().map(|session| session.role().home_path()))
            .unwrap_or("/login")
            .to_string()
    };

    view! {
        <div class="min-h-screen flex flex-col bg-gray-50">
            <header class="bg-white shadow-sm">
                <div class="max-w-screen-xl flex flex-wrap items-center justify-between mx-auto p-4">
                    <A
                        href="/"
                        {..}
                        class="flex items-center space-x-2"
                        on:click=move |_| set_menu_open.set(false)
                    >
                        <span class="bg-purple-600 text-white px-2 py-1 rounded font-bold">"AM"</span>
                        <span class="text-xl font-semibold text-gray-800 whitespace-nowrap">
                            "AdMatchHub"
                        </span>
                    </A>
                    <button
                        type="button"
                        class="inline-flex items-center p-2 w-10 h-10 justify-center text-sm text-gray-500 rounded-lg md:hidden hover:bg-gray-100 focus:outline-none focus:ring-2 focus:ring-gray-200"
                        data-collapse-toggle="navbar-default"
                        aria-controls="navbar-default"
                        aria-expanded=move || menu_open.get().to_string()
                        on:click=toggle_menu
                    >
                        <span class="sr-only">"Open main menu"</span>
                        <svg
                            class="w-5 h-5"
                            aria-hidden="true"
                            xmlns="http://www.w3.org/2000/svg"
                            fill="none"
                            viewBox="0 0 17 14"
                        >
                            <path
                                stroke="currentColor"
                                stroke-linecap="round"
                                stroke-linejoin="round"
                                stroke-width="2"
                                d="M1 1h15M1 7h15M1 13h15"
                            ></path>
                        </svg>
                    </button>
                    <div
                        id="navbar-default"
                        class="w-full md:block md:w-auto"
                        class:hidden=move || !menu_open.get()
                    >
                        <ul class="font-medium flex flex-col p-4 md:p-0 mt-4 border border-gray-100 rounded-lg bg-gray-50 md:flex-row md:items-center md:space-x-6 md:mt-0 md:border-0 md:bg-white">
                            <Show
                                when=move || is_authenticated.get()
                                fallback=move || {
                                    view! {
                                        <li>
                                            <A
                                                href="/employee/login"
                                                {..}
                                                class=NAV_LINK
                                                on:click=move |_| set_menu_open.set(false)
                                            >
                                                "Employee Login"
                                            </A>
                                        </li>
                                        <li>
                                            <A
                                                href="/admin/login"
                                                {..}
                                                class=NAV_LINK
                                                on:click=move |_| set_menu_open.set(false)
                                            >
                                                "Admin Login"
                                            </A>
                                        </li>
                                        <li>
                                            <A
                                                href="/login"
                                                {..}
                                                class=NAV_LINK
                                                on:click=move |_| set_menu_open.set(false)
                                            >
                                                "Sign In"
                                            </A>
                                        </li>
                                        <li>
                                            <A
                                                href="/get-started"
                                                {..}
                                                class="block bg-gradient-to-r from-purple-500 to-indigo-500 text-white font-semibold px-5 py-2 rounded-lg hover:opacity-90 text-center"
                                                on:click=move |_| set_menu_open.set(false)
                                            >
                                                "Get Started"
                                            </A>
                                        </li>
                                    }
                                }
                            >
                                <li>
                                    <a
                                        href=dashboard_href
                                        class=NAV_LINK
                                        on:click=move |_| set_menu_open.set(false)
                                    >
                                        "Dashboard"
                                    </a>
                                </li>
                                <li>
                                    <SignOutButton on_done=move || set_menu_open.set(false) />
                                </li>
                            </Show>
                        </ul>
                    </div>
                </div>
            </header>
            <main class="flex-1">
                <div class="container mx-auto p-4 mt-6">
                    {children()}
                </div>
            </main>
            <footer class="bg-white border-t border-gray-200">
                <div class="max-w-screen-xl mx-auto px-4 py-6 flex flex-col sm:flex-row items-center justify-between gap-2 text-sm text-gray-500">
                    <span>"AdMatchHub, where campaigns meet their match."</span>
                    <span class="font-mono text-xs text-gray-400">
                        {build_info::short_commit_hash()}
                    </span>
                </div>
            </footer>
        </div>
    }
}

/// Clears the session locally and returns to the landing page. The server
/// sign-out runs in the background; its outcome does not gate the local
/// clearing.
#[component]
fn SignOutButton(on_done: impl Fn() + Copy + Send + Sync + 'static) -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();

    view! {
        <button
            type="button"
            class=NAV_LINK
            on:click=move |_| {
                auth.logout();
                spawn_local(async move {
                    let _ = client::logout().await;
                });
                navigate("/", NavigateOptions::default());
                on_done();
            }
        >
            "Sign Out"
        </button>
    }
}
