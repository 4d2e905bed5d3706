use crate::components::AppShell;
use crate::features::auth::{client, state::use_auth};
use crate::routes::paths;
use leptos::{prelude::*, task::spawn_local};
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

/// Holding page for accounts that registered but have not been approved yet.
/// Guarded routes land here until an admin acts on the account.
#[component]
pub fn PendingApprovalPage() -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();

    view! {
        <AppShell>
            <div class="flex items-center justify-center py-16">
                <div class="text-center p-8 max-w-md w-full bg-white rounded-lg shadow-md">
                    <div class="mx-auto flex items-center justify-center h-12 w-12 rounded-full bg-purple-100">
                        <svg
                            class="h-6 w-6 text-purple-600"
                            fill="none"
                            viewBox="0 0 24 24"
                            stroke="currentColor"
                            stroke-width="2"
                        >
                            <path
                                stroke-linecap="round"
                                stroke-linejoin="round"
                                d="M12 8v4l3 3m6-3a9 9 0 1 1-18 0 9 9 0 0 1 18 0z"
                            ></path>
                        </svg>
                    </div>
                    <h2 class="mt-3 text-lg font-medium text-gray-900">
                        "Account Pending Approval"
                    </h2>
                    <p class="mt-2 text-sm text-gray-500">
                        "Your account is currently being reviewed by our team. You'll be \
                         able to access the platform once your account is approved."
                    </p>
                    <div class="mt-6 flex flex-col sm:flex-row gap-3 justify-center">
                        <A
                            href={paths::LOGIN}
                            {..}
                            class="inline-flex items-center justify-center px-4 py-2 border border-transparent text-sm font-medium rounded-md shadow-sm text-white bg-purple-600 hover:bg-purple-700"
                        >
                            "Back to Login"
                        </A>
                        <button
                            type="button"
                            class="inline-flex items-center justify-center px-4 py-2 border border-gray-300 text-sm font-medium rounded-md text-gray-700 bg-white hover:bg-gray-50"
                            on:click=move |_| {
                                auth.logout();
                                spawn_local(async move {
                                    let _ = client::logout().await;
                                });
                                navigate(paths::HOME, Default::default());
                            }
                        >
                            "Sign out"
                        </button>
                    </div>
                </div>
            </div>
        </AppShell>
    }
}
