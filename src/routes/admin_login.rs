use crate::app_lib::AppError;
use crate::components::{Alert, AlertKind, AppShell, Button, Spinner};
use crate::features::auth::client;
use crate::features::auth::guards::redirect_target;
use crate::features::auth::state::use_auth;
use crate::features::auth::types::LoginRequest;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_query_map};

/// Sign-in surface for platform administrators. Guarded admin routes redirect
/// here and the carried `redirect` parameter sends the admin back afterwards.
#[component]
pub fn AdminLoginPage() -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();
    let query = use_query_map();
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error, set_error) = signal::<Option<AppError>>(None);

    let login_action = Action::new_local(move |request: &LoginRequest| {
        let request = request.clone();
        async move { client::admin_login(&request).await }
    });

    Effect::new(move |_| {
        if let Some(result) = login_action.value().get() {
            match result {
                Ok(response) => {
                    let role = response.user.role;
                    auth.login(response.user, response.token);
                    let redirect = query.with_untracked(|map| map.get("redirect"));
                    navigate(&redirect_target(redirect.as_deref(), role), Default::default());
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
                    <div class="mx-auto flex items-center justify-center h-16 w-16 rounded-full bg-purple-100 mb-4">
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
                                d="M9 12.75 11.25 15 15 9.75m-3-7.036A11.959 11.959 0 0 1 3.598 6 11.99 11.99 0 0 0 3 9.749c0 5.592 3.824 10.29 9 11.623 5.176-1.332 9-6.03 9-11.622 0-1.31-.21-2.571-.598-3.751h-.152c-3.196 0-6.1-1.248-8.25-3.285Z"
                            ></path>
                        </svg>
                    </div>
                    <h2 class="text-3xl font-bold text-gray-900">"Admin Login"</h2>
                    <p class="mt-2 text-sm text-gray-600">
                        "Platform administration console"
                    </p>
                </div>
                <form class="bg-white py-8 px-6 shadow sm:rounded-lg" on:submit=on_submit>
                    <div class="mb-5">
                        <label
                            class="block mb-2 text-sm font-medium text-gray-900"
                            for="admin-email"
                        >
                            "Email address"
                        </label>
                        <input
                            id="admin-email"
                            type="email"
                            class="bg-gray-50 border border-gray-300 text-gray-900 text-sm rounded-lg focus:ring-purple-500 focus:border-purple-500 block w-full p-2.5"
                            autocomplete="email"
                            placeholder="admin@admatchhub.io"
                            required
                            on:input=move |event| set_email.set(event_target_value(&event))
                        />
                    </div>
                    <div class="mb-5">
                        <label
                            class="block mb-2 text-sm font-medium text-gray-900"
                            for="admin-password"
                        >
                            "Password"
                        </label>
                        <input
                            id="admin-password"
                            type="password"
                            class="bg-gray-50 border border-gray-300 text-gray-900 text-sm rounded-lg focus:ring-purple-500 focus:border-purple-500 block w-full p-2.5"
                            autocomplete="current-password"
                            required
                            on:input=move |event| set_password.set(event_target_value(&event))
                        />
                    </div>
                    <Button button_type="submit" disabled=login_action.pending()>
                        {move || if login_action.pending().get() { "Signing in..." } else { "Sign in as Admin" }}
                    </Button>
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
