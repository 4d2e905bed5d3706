//! Client registration. Accounts start unapproved; an admin reviews them
//! before the dashboard opens up.

use crate::app_lib::AppError;
use crate::components::{Alert, AlertKind, AppShell, Button, Spinner};
use crate::features::auth::types::ClientRegisterRequest;
use crate::features::auth::{client, validate};
use crate::routes::paths;
use crate::routes::register::FIELD_CLASS;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn ClientRegisterPage() -> impl IntoView {
    let (fullname, set_fullname) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (company, set_company) = signal(String::new());
    let (phone, set_phone) = signal(String::new());
    let (address, set_address) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (confirm_password, set_confirm_password) = signal(String::new());
    let (error, set_error) = signal::<Option<AppError>>(None);
    let (success, set_success) = signal::<Option<String>>(None);

    let register_action = Action::new_local(move |request: &ClientRegisterRequest| {
        let request = request.clone();
        async move { client::register_client(&request).await }
    });

    Effect::new(move |_| {
        if let Some(result) = register_action.value().get() {
            match result {
                Ok(response) => {
                    let message = if response.message.is_empty() {
                        "Registration received. An administrator will review your account."
                            .to_string()
                    } else {
                        response.message
                    };
                    set_success.set(Some(message));
                }
                Err(err) => set_error.set(Some(err)),
            }
        }
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        set_error.set(None);

        let fullname_value = fullname.get_untracked().trim().to_string();
        let email_value = email.get_untracked().trim().to_string();
        let company_value = company.get_untracked().trim().to_string();
        let phone_value = phone.get_untracked().trim().to_string();
        let address_value = address.get_untracked().trim().to_string();
        let password_value = password.get_untracked();
        let confirm_value = confirm_password.get_untracked();

        let checks = [
            validate::validate_fullname(&fullname_value),
            validate::validate_email(&email_value),
            validate::validate_phone(&phone_value),
            validate::validate_password(&password_value),
            validate::validate_confirmation(&password_value, &confirm_value),
        ];
        if let Some(message) = checks.iter().find_map(|check| check.err()) {
            set_error.set(Some(AppError::Validation(message.to_string())));
            return;
        }
        if company_value.is_empty() || address_value.is_empty() {
            set_error.set(Some(AppError::Validation(
                "Company name and address are required.".to_string(),
            )));
            return;
        }

        register_action.dispatch(ClientRegisterRequest {
            fullname: fullname_value,
            email: email_value,
            company: company_value,
            phone: phone_value,
            company_address: address_value,
            password: password_value,
        });
    };

    view! {
        <AppShell>
            <div class="w-full max-w-xl mx-auto">
                <Show
                    when=move || success.get().is_some()
                    fallback=move || {
                        view! {
                            <div class="bg-white rounded-lg shadow-md p-6 sm:p-8">
                                <h2 class="text-2xl font-bold text-gray-800 mb-1">
                                    "Client Registration"
                                </h2>
                                <p class="text-gray-600 mb-6">
                                    "Fill in your details to create a client account"
                                </p>
                                <form class="space-y-4" on:submit=on_submit>
                                    <div>
                                        <label class="block mb-2 text-sm font-medium text-gray-900" for="fullname">
                                            "Full name"
                                        </label>
                                        <input
                                            id="fullname"
                                            type="text"
                                            class=FIELD_CLASS
                                            autocomplete="name"
                                            required
                                            on:input=move |event| set_fullname.set(event_target_value(&event))
                                        />
                                    </div>
                                    <div>
                                        <label class="block mb-2 text-sm font-medium text-gray-900" for="email">
                                            "Email address"
                                        </label>
                                        <input
                                            id="email"
                                            type="email"
                                            class=FIELD_CLASS
                                            autocomplete="email"
                                            placeholder="you@company.com"
                                            required
                                            on:input=move |event| set_email.set(event_target_value(&event))
                                        />
                                    </div>
                                    <div>
                                        <label class="block mb-2 text-sm font-medium text-gray-900" for="company">
                                            "Company name"
                                        </label>
                                        <input
                                            id="company"
                                            type="text"
                                            class=FIELD_CLASS
                                            autocomplete="organization"
                                            required
                                            on:input=move |event| set_company.set(event_target_value(&event))
                                        />
                                    </div>
                                    <div>
                                        <label class="block mb-2 text-sm font-medium text-gray-900" for="phone">
                                            "Phone number"
                                        </label>
                                        <input
                                            id="phone"
                                            type="tel"
                                            class=FIELD_CLASS
                                            autocomplete="tel"
                                            placeholder="9876543210"
                                            required
                                            on:input=move |event| set_phone.set(event_target_value(&event))
                                        />
                                    </div>
                                    <div>
                                        <label class="block mb-2 text-sm font-medium text-gray-900" for="company-address">
                                            "Company address"
                                        </label>
                                        <input
                                            id="company-address"
                                            type="text"
                                            class=FIELD_CLASS
                                            autocomplete="street-address"
                                            required
                                            on:input=move |event| set_address.set(event_target_value(&event))
                                        />
                                    </div>
                                    <div>
                                        <label class="block mb-2 text-sm font-medium text-gray-900" for="password">
                                            "Password"
                                        </label>
                                        <input
                                            id="password"
                                            type="password"
                                            class=FIELD_CLASS
                                            autocomplete="new-password"
                                            required
                                            on:input=move |event| set_password.set(event_target_value(&event))
                                        />
                                    </div>
                                    <div>
                                        <label class="block mb-2 text-sm font-medium text-gray-900" for="confirm-password">
                                            "Confirm password"
                                        </label>
                                        <input
                                            id="confirm-password"
                                            type="password"
                                            class=FIELD_CLASS
                                            autocomplete="new-password"
                                            required
                                            on:input=move |event| {
                                                set_confirm_password.set(event_target_value(&event));
                                            }
                                        />
                                    </div>
                                    <Button button_type="submit" disabled=register_action.pending()>
                                        {move || {
                                            if register_action.pending().get() {
                                                "Creating account..."
                                            } else {
                                                "Create client account"
                                            }
                                        }}
                                    </Button>
                                    {move || {
                                        register_action
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
                        }
                    }
                >
                    <div class="bg-white rounded-lg shadow-md p-8 text-center">
                        <Alert
                            kind=AlertKind::Success
                            message=success.get().unwrap_or_default()
                        />
                        <p class="mt-6 text-sm text-gray-600">
                            "You can sign in once your account has been approved."
                        </p>
                        <div class="mt-4">
                            <A
                                href={paths::LOGIN}
                                {..}
                                class="font-medium text-purple-600 hover:text-purple-500"
                            >
                                "Go to sign in"
                            </A>
                        </div>
                    </div>
                </Show>
            </div>
        </AppShell>
    }
}
