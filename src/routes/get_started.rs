use crate::components::AppShell;
use crate::routes::paths;
use leptos::prelude::*;
use leptos_router::components::A;

/// Role chooser shown before registration: client or agency.
#[component]
pub fn GetStartedPage() -> impl IntoView {
    view! {
        <AppShell>
            <div class="max-w-3xl mx-auto py-12">
                <div class="text-center mb-12">
                    <h1 class="text-3xl font-bold text-gray-900 mb-2">
                        "Get Started with AdMatchHub"
                    </h1>
                    <p class="text-lg text-gray-600">"Choose your role to continue"</p>
                </div>

                <div class="grid md:grid-cols-2 gap-8">
                    <A
                        href={paths::CLIENT_REGISTER}
                        {..}
                        class="bg-white p-8 rounded-xl shadow-md border border-gray-200 hover:border-purple-500 transition-all cursor-pointer flex flex-col items-center text-center"
                    >
                        <div class="bg-purple-100 p-4 rounded-full mb-4">
                            <svg
                                class="h-8 w-8 text-purple-600"
                                xmlns="http://www.w3.org/2000/svg"
                                fill="none"
                                viewBox="0 0 24 24"
                                stroke="currentColor"
                                stroke-width="2"
                            >
                                <path
                                    stroke-linecap="round"
                                    stroke-linejoin="round"
                                    d="M20 7H4a2 2 0 0 0-2 2v10a2 2 0 0 0 2 2h16a2 2 0 0 0 2-2V9a2 2 0 0 0-2-2Zm-4 0V5a2 2 0 0 0-2-2h-4a2 2 0 0 0-2 2v2m-6 6h20"
                                ></path>
                            </svg>
                        </div>
                        <h3 class="text-xl font-semibold mb-2 text-gray-900">"I'm a Client"</h3>
                        <p class="text-gray-600 mb-6">
                            "Looking to hire an advertising agency for your business needs"
                        </p>
                        <div class="mt-auto flex items-center text-purple-600 font-medium">
                            "Continue as Client →"
                        </div>
                    </A>

                    <A
                        href={paths::AGENCY_REGISTER}
                        {..}
                        class="bg-white p-8 rounded-xl shadow-md border border-gray-200 hover:border-indigo-500 transition-all cursor-pointer flex flex-col items-center text-center"
                    >
                        <div class="bg-indigo-100 p-4 rounded-full mb-4">
                            <svg
                                class="h-8 w-8 text-indigo-600"
                                xmlns="http://www.w3.org/2000/svg"
                                fill="none"
                                viewBox="0 0 24 24"
                                stroke="currentColor"
                                stroke-width="2"
                            >
                                <path
                                    stroke-linecap="round"
                                    stroke-linejoin="round"
                                    d="M19 21V5a2 2 0 0 0-2-2H7a2 2 0 0 0-2 2v16m14 0h2m-2 0h-5m-9 0H3m2 0h5M9 7h1m-1 4h1m4-4h1m-1 4h1m-5 10v-5a1 1 0 0 1 1-1h2a1 1 0 0 1 1 1v5m-4 0h4"
                                ></path>
                            </svg>
                        </div>
                        <h3 class="text-xl font-semibold mb-2 text-gray-900">"I'm an Agency"</h3>
                        <p class="text-gray-600 mb-6">
                            "Looking to find clients who need advertising services"
                        </p>
                        <div class="mt-auto flex items-center text-indigo-600 font-medium">
                            "Continue as Agency →"
                        </div>
                    </A>
                </div>

                <p class="mt-10 text-center text-sm text-gray-600">
                    "Already have an account? "
                    <A
                        href={paths::LOGIN}
                        {..}
                        class="font-medium text-purple-600 hover:text-purple-500"
                    >
                        "Sign in"
                    </A>
                </p>
            </div>
        </AppShell>
    }
}
