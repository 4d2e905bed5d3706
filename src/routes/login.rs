use crate::app_lib::AppError;
use crate::components::{Alert, AlertKind, AppShell, Button, Spinner};
use crate::features::auth::client;
use crate::features::auth::guards::redirect_target;
use crate::features::auth::state::use_auth;
use crate::features::auth::types::{LoginRequest, Role};
use crate::routes::paths;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::{use_navigate, use_query_map};

/// General sign-in for clients and agencies. Consumes the `redirect` query
/// parameter carried by the route guard so interrupted visits resume where
/// they started.
#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();
    let query = use_query_map();
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error, set_error) = signal::<Option<AppError>>(None);

    let login_action = Action::new_local(move |request: &LoginRequest| {
        let request = request.clone();
        async move { client::login(&request).await }
    });

    Effect::new(move |_| {
        if let Some(result) = login_action.value().get() {
            match result {
                Ok(response) => {
                    let role = response.user.role;
                    let approved = response.user.is_approved;
                    auth.login(response.user, response.token);
                    let target = if approved || role == Role::Admin {
                        let redirect = query.with_untracked(|map| map.get("redirect"));
                        redirect_target(redirect.as_deref(), role)
                    } else {
                        paths::PENDING_APPROVAL.to_string()
                    };
                    navigate(&target, Default::default());
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
                <h2 class="text-center text-2xl sm:text-3xl font-extrabold text-gray-900">
                    "Sign in to your account"
                </h2>
                <p class="mt-2 mb-6 text-center text-sm text-gray-600">
                    "Or "
                    <A
                        href="/get-started"
                        {..}
                        class="font-medium text-purple-600 hover:text-purple-500"
                    >
                        "create a new account"
                    </A>
                </p>
                <form class="bg-white py-8 px-6 shadow sm:rounded-lg" on:submit=on_submit>
                    <div class="mb-5">
                        <label
                            class="block mb-2 text-sm font-medium text-gray-900"
                            for="email"
                        >
                            "Email address"
                        </label>
                        <input
                            id="email"
                            type="email"
                            class="bg-gray-50 border border-gray-300 text-gray-900 text-sm rounded-lg focus:ring-purple-500 focus:border-purple-500 block w-full p-2.5"
                            autocomplete="email"
                            placeholder="you@company.com"
                            required
                            on:input=move |event| set_email.set(event_target_value(&event))
                        />
                    </div>
                    <div class="mb-5">
                        <label
                            class="block mb-2 text-sm font-medium text-gray-900"
                            for="password"
                        >
                            "Password"
                        </label>
                        <input
                            id="password"
                            type="password"
                            class="bg-gray-50 border border-gray-300 text-gray-900 text-sm rounded-lg focus:ring-purple-500 focus:border-purple-500 block w-full p-2.5"
                            autocomplete="current-password"
                            required
                            on:input=move |event| set_password.set(event_target_value(&event))
                        />
                    </div>
                    <Button button_type="submit" disabled=login_action.pending()>
                        {move || if login_action.pending().get() { "Signing in..." } else { "Sign in" }}
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
