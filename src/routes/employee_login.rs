use crate::app_lib::AppError;
use crate::components::{Alert, AlertKind, AppShell, Spinner};
use crate::features::auth::client;
use crate::features::auth::state::use_auth;
use crate::features::auth::types::LoginRequest;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

/// Sign-in surface for screening staff. Same contract as the general login,
/// posted to the employee endpoint.
#[component]
pub fn EmployeeLoginPage() -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error, set_error) = signal::<Option<AppError>>(None);

    let login_action = Action::new_local(move |request: &LoginRequest| {
        let request = request.clone();
        async move { client::employee_login(&request).await }
    });

    Effect::new(move |_| {
        if let Some(result) = login_action.value().get() {
            match result {
                Ok(response) => {
                    let home = response.user.role.home_path();
                    auth.login(response.user, response.token);
                    navigate(home, Default::default());
                }
                Err(err) => set_error.set(Some(err)),
            }
        }
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        set_error.set(None);

        let email_value = email.get_untracked().trim().to_string();
        let password_value = password.get_untracked();
        if email_value.is_empty() || password_value.trim().is_empty() {
            set_error.set(Some(AppError::Validation(
                "Email and password are required.".to_string(),
            )));
            return;
        }

        login_action.dispatch(LoginRequest {
            email: email_value,
            password: password_value,
        });
    };

    view! {
        <AppShell>
            <div class="max-w-sm mx-auto">
                <div class="text-center mb-6">
                    <div class="mx-auto flex items-center justify-center h-16 w-16 rounded-full bg-green-100 mb-4">
                        <svg
                            class="h-8 w-8 text-green-600"
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
                    <h2 class="text-3xl font-bold text-gray-900">"Employee Login"</h2>
                    <p class="mt-2 text-sm text-gray-600">
                        "Review queue access for screening staff"
                    </p>
                </div>
                <form class="bg-white py-8 px-6 shadow sm:rounded-lg" on:submit=on_submit>
                    <div class="mb-5">
                        <label
                            class="block mb-2 text-sm font-medium text-gray-900"
                            for="employee-email"
                        >
                            "Email address"
                        </label>
                        <input
                            id="employee-email"
                            type="email"
                            class="bg-gray-50 border border-gray-300 text-gray-900 text-sm rounded-lg focus:ring-green-500 focus:border-green-500 block w-full p-2.5"
                            autocomplete="email"
                            placeholder="employee@company.com"
                            required
                            on:input=move |event| set_email.set(event_target_value(&event))
                        />
                    </div>
                    <div class="mb-5">
                        <label
                            class="block mb-2 text-sm font-medium text-gray-900"
                            for="employee-password"
                        >
                            "Password"
                        </label>
                        <input
                            id="employee-password"
                            type="password"
                            class="bg-gray-50 border border-gray-300 text-gray-900 text-sm rounded-lg focus:ring-green-500 focus:border-green-500 block w-full p-2.5"
                            autocomplete="current-password"
                            required
                            on:input=move |event| set_password.set(event_target_value(&event))
                        />
                    </div>
                    <button
                        type="submit"
                        class="text-white bg-green-600 hover:bg-green-700 focus:ring-4 focus:outline-none focus:ring-green-300 font-medium rounded-lg text-sm w-full px-5 py-2.5 text-center"
                        class:cursor-not-allowed=move || login_action.pending().get()
                        class:opacity-70=move || login_action.pending().get()
                        disabled=move || login_action.pending().get()
                    >
                        {move || if login_action.pending().get() { "Signing in..." } else { "Sign in as Employee" }}
                    </button>
                    {move || {
                        login_action
                            .pending()
                            .get()
                            .then_some(view! { <div class="mt-4"><Spinner /></div> })
                    }}
                    {move || {
                        error
                            .get()
                            .map(|err| {
                                view! {
                                    <div class="mt-4">
                                        <Alert kind=AlertKind::Error message=err.to_string() />
                                    </div>
                                }
                            })
                    }}
                </form>
            </div>
        </AppShell>
    }
}
