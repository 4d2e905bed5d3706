//! Client dashboard: create and manage advertisements, then act on the
//! applications agencies send in. Listing filters run entirely in the browser
//! over the role-scoped list the API returns.

use crate::{
    app_lib::AppError,
    components::{
        AdStatusBadge, Alert, AlertKind, AppShell, ApplicationStatusBadge, Button, Spinner,
    },
    features::{
        ads::{
            client,
            types::{category_label, AdDraft, AdFilters, AdStatus, Advertisement, CATEGORIES},
        },
        applications::{client as applications_client, types::ApplicationStatus},
        auth::state::use_auth,
    },
};
use leptos::prelude::*;

/// Campaign durations offered by the ad form.
const DURATIONS: [&str; 6] = [
    "1 week",
    "2 weeks",
    "1 month",
    "3 months",
    "6 months",
    "1 year",
];

const TAB_ACTIVE: &str =
    "flex items-center whitespace-nowrap border-b-2 border-purple-500 px-6 py-4 text-sm font-medium text-purple-600";
const TAB_INACTIVE: &str =
    "flex items-center whitespace-nowrap border-b-2 border-transparent px-6 py-4 text-sm font-medium text-gray-500 hover:border-gray-300 hover:text-gray-700";
const FIELD: &str =
    "mt-1 block w-full rounded-md border border-gray-300 px-3 py-2 text-sm shadow-sm focus:border-purple-500 focus:outline-none focus:ring-purple-500";

#[derive(Clone, Copy, PartialEq, Eq)]
enum Tab {
    Ads,
    Applications,
}

/// Renders the client dashboard with its advertisements and applications tabs.
#[component]
pub fn ClientDashboardPage() -> impl IntoView {
    let auth = use_auth();

    let ads = LocalResource::new(move || async move {
        client::list_ads(&auth.token().unwrap_or_default()).await
    });
    let applications = LocalResource::new(move || async move {
        applications_client::list_for_client(&auth.token().unwrap_or_default()).await
    });

    let (active_tab, set_active_tab) = signal(Tab::Ads);
    let (action_error, set_action_error) = signal::<Option<AppError>>(None);

    let (search, set_search) = signal(String::new());
    let (category_filter, set_category_filter) = signal(String::new());
    let (status_filter, set_status_filter) = signal(String::new());
    let (min_budget, set_min_budget) = signal(String::new());
    let (max_budget, set_max_budget) = signal(String::new());
    let (show_filters, set_show_filters) = signal(false);

    let filters_active = move || {
        !category_filter.get().is_empty()
            || !status_filter.get().is_empty()
            || !min_budget.get().is_empty()
            || !max_budget.get().is_empty()
    };
    let clear_filters = move |_| {
        set_category_filter.set(String::new());
        set_status_filter.set(String::new());
        set_min_budget.set(String::new());
        set_max_budget.set(String::new());
    };

    let (form_open, set_form_open) = signal(false);
    let (editing_id, set_editing_id) = signal::<Option<String>>(None);
    let (form_error, set_form_error) = signal::<Option<AppError>>(None);
    let (product_name, set_product_name) = signal(String::new());
    let (product_description, set_product_description) = signal(String::new());
    let (target_audience, set_target_audience) = signal(String::new());
    let (budget, set_budget) = signal(String::new());
    let (campaign_duration, set_campaign_duration) = signal("1 month".to_string());
    let (form_category, set_form_category) = signal("other".to_string());
    let (key_features, set_key_features) = signal(String::new());
    let (form_status, set_form_status) = signal("draft".to_string());

    let reset_form = move || {
        set_editing_id.set(None);
        set_form_error.set(None);
        set_product_name.set(String::new());
        set_product_description.set(String::new());
        set_target_audience.set(String::new());
        set_budget.set(String::new());
        set_campaign_duration.set("1 month".to_string());
        set_form_category.set("other".to_string());
        set_key_features.set(String::new());
        set_form_status.set("draft".to_string());
    };

    let toggle_form = move |_| {
        if form_open.get_untracked() {
            reset_form();
        }
        set_form_open.update(|open| *open = !*open);
    };

    let start_edit = move |ad: Advertisement| {
        set_product_name.set(ad.product_name);
        set_product_description.set(ad.product_description);
        set_target_audience.set(ad.target_audience.unwrap_or_default());
        set_budget.set(format!("{}", ad.budget));
        set_campaign_duration.set(ad.campaign_duration.unwrap_or_else(|| "1 month".to_string()));
        set_form_category.set(if ad.category.is_empty() {
            "other".to_string()
        } else {
            ad.category
        });
        set_key_features.set(ad.key_features.unwrap_or_default());
        set_form_status.set(ad.status.as_str().to_string());
        set_editing_id.set(Some(ad.id));
        set_form_error.set(None);
        set_form_open.set(true);
    };

    let save_action = Action::new_local(move |input: &(Option<String>, AdDraft)| {
        let (id, draft) = input.clone();
        async move {
            let token = auth.token().unwrap_or_default();
            match id {
                Some(id) => client::update_ad(&id, &draft, &token).await,
                None => client::create_ad(&draft, &token).await,
            }
        }
    });

    Effect::new(move |_| {
        if let Some(result) = save_action.value().get() {
            match result {
                Ok(_) => {
                    reset_form();
                    set_form_open.set(false);
                    ads.refetch();
                }
                Err(err) => set_form_error.set(Some(err)),
            }
        }
    });

    let pending_delete = RwSignal::new(None::<String>);
    let delete_action = Action::new_local(move |id: &String| {
        let id = id.clone();
        async move { client::delete_ad(&id, &auth.token().unwrap_or_default()).await }
    });

    Effect::new(move |_| {
        if let Some(result) = delete_action.value().get() {
            match result {
                Ok(()) => {
                    pending_delete.set(None);
                    set_action_error.set(None);
                    ads.refetch();
                }
                Err(err) => set_action_error.set(Some(err)),
            }
        }
    });

    let decide_action = Action::new_local(move |input: &(String, ApplicationStatus)| {
        let (id, status) = input.clone();
        async move {
            applications_client::update_status(&id, status, &auth.token().unwrap_or_default())
                .await
        }
    });

    Effect::new(move |_| {
        if let Some(result) = decide_action.value().get() {
            match result {
                Ok(()) => {
                    set_action_error.set(None);
                    applications.refetch();
                }
                Err(err) => set_action_error.set(Some(err)),
            }
        }
    });

    let on_submit = StoredValue::new(move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let name = product_name.get_untracked().trim().to_string();
        let description = product_description.get_untracked().trim().to_string();
        if name.is_empty() || description.is_empty() {
            set_form_error.set(Some(AppError::Validation(
                "Product name and description are required".to_string(),
            )));
            return;
        }
        let Ok(budget_value) = budget.get_untracked().trim().parse::<f64>() else {
            set_form_error.set(Some(AppError::Validation(
                "Budget must be a number".to_string(),
            )));
            return;
        };
        if budget_value < 0.0 {
            set_form_error.set(Some(AppError::Validation(
                "Budget cannot be negative".to_string(),
            )));
            return;
        }

        let audience = target_audience.get_untracked().trim().to_string();
        let features = key_features.get_untracked().trim().to_string();
        let status = match form_status.get_untracked().as_str() {
            "active" => AdStatus::Active,
            "paused" => AdStatus::Paused,
            "completed" => AdStatus::Completed,
            _ => AdStatus::Draft,
        };
        let draft = AdDraft {
            product_name: name,
            product_description: description,
            target_audience: (!audience.is_empty()).then_some(audience),
            budget: budget_value,
            campaign_duration: Some(campaign_duration.get_untracked()),
            category: form_category.get_untracked(),
            key_features: (!features.is_empty()).then_some(features),
            status,
        };
        save_action.dispatch((editing_id.get_untracked(), draft));
    });

    let ad_count = move || ads.get().and_then(Result::ok).map_or(0, |list| list.len());
    let application_count = move || {
        applications
            .get()
            .and_then(Result::ok)
            .map_or(0, |list| list.len())
    };
    let welcome = move || {
        auth.session.with(|session| {
            session
                .as_ref()
                .map(|session| session.identity.fullname.clone())
                .filter(|name| !name.is_empty())
                .unwrap_or_else(|| "there".to_string())
        })
    };

    view! {
        <AppShell>
            <div class="mx-auto max-w-7xl px-4 py-8 sm:px-6 lg:px-8">
                <div class="mb-6 flex flex-col md:flex-row md:items-center md:justify-between">
                    <div class="mb-4 md:mb-0">
                        <h1 class="mb-1 text-2xl font-bold text-gray-900 md:text-3xl">
                            "Client Dashboard"
                        </h1>
                        <p class="text-gray-600">
                            "Welcome back, " {welcome}
                            "! Manage your advertisements and applications."
                        </p>
                    </div>
                    <Show when=move || active_tab.get() == Tab::Ads>
                        <Button on_click=toggle_form>
                            {move || if form_open.get() { "Close Form" } else { "New Advertisement" }}
                        </Button>
                    </Show>
                </div>

                {move || {
                    action_error
                        .get()
                        .map(|err| {
                            view! {
                                <div class="mb-6">
                                    <Alert kind=AlertKind::Error message=err.to_string() />
                                </div>
                            }
                        })
                }}

                <div class="mb-6 rounded-lg bg-white shadow-md">
                    <div class="border-b border-gray-200">
                        <nav class="-mb-px flex space-x-4" aria-label="Tabs">
                            <button
                                class=move || {
                                    if active_tab.get() == Tab::Ads { TAB_ACTIVE } else { TAB_INACTIVE }
                                }
                                on:click=move |_| set_active_tab.set(Tab::Ads)
                            >
                                "My Advertisements"
                                <span class="ml-2 rounded-full bg-gray-100 px-2.5 py-0.5 text-xs font-medium text-gray-900">
                                    {ad_count}
                                </span>
                            </button>
                            <button
                                class=move || {
                                    if active_tab.get() == Tab::Applications {
                                        TAB_ACTIVE
                                    } else {
                                        TAB_INACTIVE
                                    }
                                }
                                on:click=move |_| set_active_tab.set(Tab::Applications)
                            >
                                "Applications Received"
                                <span class="ml-2 rounded-full bg-gray-100 px-2.5 py-0.5 text-xs font-medium text-gray-900">
                                    {application_count}
                                </span>
                            </button>
                        </nav>
                    </div>
                </div>

                <Show when=move || active_tab.get() == Tab::Ads>
                    <div class="mb-6 rounded-lg bg-white p-4 shadow-md">
                        <div class="flex flex-col gap-4 md:flex-row md:items-center">
                            <div class="flex-1">
                                <input
                                    type="text"
                                    placeholder="Search advertisements..."
                                    class=FIELD
                                    value=move || search.get()
                                    on:input=move |ev| set_search.set(event_target_value(&ev))
                                />
                            </div>
                            <div class="flex items-center gap-2">
                                <button
                                    type="button"
                                    class="inline-flex items-center rounded-md border border-gray-300 bg-white px-3 py-2 text-sm font-medium text-gray-700 shadow-sm hover:bg-gray-50"
                                    class:border-purple-500=filters_active
                                    on:click=move |_| set_show_filters.update(|open| *open = !*open)
                                >
                                    "Filters"
                                </button>
                                <Show when=filters_active>
                                    <button
                                        type="button"
                                        class="inline-flex items-center rounded-md bg-purple-100 px-3 py-2 text-sm font-medium text-purple-700 hover:bg-purple-200"
                                        on:click=clear_filters
                                    >
                                        "Clear"
                                    </button>
                                </Show>
                            </div>
                        </div>

                        <Show when=move || show_filters.get()>
                            <div class="mt-4 border-t border-gray-200 pt-4">
                                <div class="grid grid-cols-1 gap-4 md:grid-cols-4">
                                    <div>
                                        <label class="mb-1 block text-sm font-medium text-gray-700">
                                            "Category"
                                        </label>
                                        <select
                                            class=FIELD
                                            on:change=move |ev| set_category_filter.set(event_target_value(&ev))
                                        >
                                            <option value="">"All Categories"</option>
                                            {CATEGORIES
                                                .into_iter()
                                                .map(|category| {
                                                    view! {
                                                        <option
                                                            value=category
                                                            selected=move || category_filter.get() == category
                                                        >
                                                            {category_label(category)}
                                                        </option>
                                                    }
                                                })
                                                .collect_view()}
                                        </select>
                                    </div>
                                    <div>
                                        <label class="mb-1 block text-sm font-medium text-gray-700">
                                            "Status"
                                        </label>
                                        <select
                                            class=FIELD
                                            on:change=move |ev| set_status_filter.set(event_target_value(&ev))
                                        >
                                            <option value="">"All Statuses"</option>
                                            {AdStatus::ALL
                                                .into_iter()
                                                .map(|status| {
                                                    view! {
                                                        <option
                                                            value=status.as_str()
                                                            selected=move || status_filter.get() == status.as_str()
                                                        >
                                                            {status.label()}
                                                        </option>
                                                    }
                                                })
                                                .collect_view()}
                                        </select>
                                    </div>
                                    <div>
                                        <label class="mb-1 block text-sm font-medium text-gray-700">
                                            "Min Budget"
                                        </label>
                                        <input
                                            type="number"
                                            placeholder="0"
                                            class=FIELD
                                            value=move || min_budget.get()
                                            on:input=move |ev| set_min_budget.set(event_target_value(&ev))
                                        />
                                    </div>
                                    <div>
                                        <label class="mb-1 block text-sm font-medium text-gray-700">
                                            "Max Budget"
                                        </label>
                                        <input
                                            type="number"
                                            placeholder="10000"
                                            class=FIELD
                                            value=move || max_budget.get()
                                            on:input=move |ev| set_max_budget.set(event_target_value(&ev))
                                        />
                                    </div>
                                </div>
                            </div>
                        </Show>
                    </div>

                    <Show when=move || form_open.get()>
                        <form
                            on:submit=move |ev| on_submit.with_value(|f| f(ev))
                            class="mb-8 rounded-lg bg-white p-6 shadow-md"
                        >
                            <div class="mb-6 flex items-center justify-between">
                                <h2 class="text-xl font-semibold text-gray-900">
                                    {move || {
                                        if editing_id.get().is_some() {
                                            "Edit Advertisement"
                                        } else {
                                            "Create New Advertisement"
                                        }
                                    }}
                                </h2>
                                <button
                                    type="button"
                                    class="rounded px-3 py-1.5 text-xs font-medium text-gray-700 hover:bg-gray-100"
                                    on:click=toggle_form
                                >
                                    "Close"
                                </button>
                            </div>

                            <div class="grid grid-cols-1 gap-6 md:grid-cols-2">
                                <div class="space-y-4">
                                    <div>
                                        <label class="block text-sm font-medium text-gray-700" for="product_name">
                                            "Product Name"
                                        </label>
                                        <input
                                            id="product_name"
                                            type="text"
                                            required
                                            class=FIELD
                                            placeholder="Enter product name"
                                            value=move || product_name.get()
                                            on:input=move |ev| set_product_name.set(event_target_value(&ev))
                                        />
                                    </div>
                                    <div>
                                        <label
                                            class="block text-sm font-medium text-gray-700"
                                            for="product_description"
                                        >
                                            "Description"
                                        </label>
                                        <textarea
                                            id="product_description"
                                            rows="4"
                                            required
                                            class=FIELD
                                            placeholder="Describe your product and advertising goals"
                                            prop:value=move || product_description.get()
                                            on:input=move |ev| {
                                                set_product_description.set(event_target_value(&ev))
                                            }
                                        ></textarea>
                                    </div>
                                    <div>
                                        <label
                                            class="block text-sm font-medium text-gray-700"
                                            for="target_audience"
                                        >
                                            "Target Audience"
                                        </label>
                                        <input
                                            id="target_audience"
                                            type="text"
                                            class=FIELD
                                            placeholder="e.g., Age 18-35, Tech Enthusiasts"
                                            value=move || target_audience.get()
                                            on:input=move |ev| set_target_audience.set(event_target_value(&ev))
                                        />
                                    </div>
                                </div>

                                <div class="space-y-4">
                                    <div class="grid grid-cols-1 gap-4 md:grid-cols-2">
                                        <div>
                                            <label class="block text-sm font-medium text-gray-700" for="ad_budget">
                                                "Budget ($)"
                                            </label>
                                            <input
                                                id="ad_budget"
                                                type="number"
                                                min="0"
                                                step="0.01"
                                                required
                                                class=FIELD
                                                placeholder="0.00"
                                                value=move || budget.get()
                                                on:input=move |ev| set_budget.set(event_target_value(&ev))
                                            />
                                        </div>
                                        <div>
                                            <label class="block text-sm font-medium text-gray-700" for="ad_duration">
                                                "Duration"
                                            </label>
                                            <select
                                                id="ad_duration"
                                                class=FIELD
                                                on:change=move |ev| set_campaign_duration.set(event_target_value(&ev))
                                            >
                                                {DURATIONS
                                                    .into_iter()
                                                    .map(|duration| {
                                                        view! {
                                                            <option
                                                                value=duration
                                                                selected=move || campaign_duration.get() == duration
                                                            >
                                                                {duration}
                                                            </option>
                                                        }
                                                    })
                                                    .collect_view()}
                                            </select>
                                        </div>
                                    </div>

                                    <div class="grid grid-cols-1 gap-4 md:grid-cols-2">
                                        <div>
                                            <label class="block text-sm font-medium text-gray-700" for="ad_category">
                                                "Category"
                                            </label>
                                            <select
                                                id="ad_category"
                                                class=FIELD
                                                on:change=move |ev| set_form_category.set(event_target_value(&ev))
                                            >
                                                {CATEGORIES
                                                    .into_iter()
                                                    .map(|category| {
                                                        view! {
                                                            <option
                                                                value=category
                                                                selected=move || form_category.get() == category
                                                            >
                                                                {category_label(category)}
                                                            </option>
                                                        }
                                                    })
                                                    .collect_view()}
                                            </select>
                                        </div>
                                        <div>
                                            <label class="block text-sm font-medium text-gray-700" for="ad_status">
                                                "Status"
                                            </label>
                                            <select
                                                id="ad_status"
                                                class=FIELD
                                                on:change=move |ev| set_form_status.set(event_target_value(&ev))
                                            >
                                                {AdStatus::ALL
                                                    .into_iter()
                                                    .map(|status| {
                                                        view! {
                                                            <option
                                                                value=status.as_str()
                                                                selected=move || form_status.get() == status.as_str()
                                                            >
                                                                {status.label()}
                                                            </option>
                                                        }
                                                    })
                                                    .collect_view()}
                                            </select>
                                        </div>
                                    </div>

                                    <div>
                                        <label class="block text-sm font-medium text-gray-700" for="key_features">
                                            "Key Features"
                                        </label>
                                        <input
                                            id="key_features"
                                            type="text"
                                            class=FIELD
                                            placeholder="Feature 1, Feature 2, Feature 3"
                                            value=move || key_features.get()
                                            on:input=move |ev| set_key_features.set(event_target_value(&ev))
                                        />
                                        <p class="mt-1 text-xs text-gray-500">
                                            "Separate features with commas"
                                        </p>
                                    </div>
                                </div>
                            </div>

                            {move || {
                                form_error
                                    .get()
                                    .map(|err| {
                                        view! {
                                            <div class="mt-4">
                                                <Alert kind=AlertKind::Error message=err.to_string() />
                                            </div>
                                        }
                                    })
                            }}

                            <div class="mt-6 flex items-center justify-end gap-3">
                                <button
                                    type="button"
                                    class="rounded-md border border-gray-300 bg-white px-4 py-2 text-sm font-medium text-gray-700 shadow-sm hover:bg-gray-50"
                                    on:click=toggle_form
                                >
                                    "Cancel"
                                </button>
                                <Button button_type="submit" disabled=save_action.pending()>
                                    {move || {
                                        if save_action.pending().get() {
                                            if editing_id.get().is_some() {
                                                "Updating..."
                                            } else {
                                                "Creating..."
                                            }
                                        } else if editing_id.get().is_some() {
                                            "Update Advertisement"
                                        } else {
                                            "Create Advertisement"
                                        }
                                    }}
                                </Button>
                            </div>
                        </form>
                    </Show>

                    <Suspense fallback=move || {
                        view! {
                            <div class="flex justify-center py-12">
                                <Spinner />
                            </div>
                        }
                    }>
                        {move || match ads.get() {
                            Some(Ok(list)) if list.is_empty() => {
                                view! {
                                    <div class="rounded-lg bg-white py-12 text-center shadow-md">
                                        <h3 class="text-sm font-medium text-gray-900">
                                            "No advertisements found"
                                        </h3>
                                        <p class="mt-1 text-sm text-gray-500">
                                            "Get started by creating a new advertisement."
                                        </p>
                                        <div class="mt-6">
                                            <Button on_click=toggle_form>"New Advertisement"</Button>
                                        </div>
                                    </div>
                                }
                                    .into_any()
                            }
                            Some(Ok(list)) => {
                                let filters = AdFilters {
                                    search: search.get(),
                                    category: category_filter.get(),
                                    status: status_filter.get(),
                                    min_budget: min_budget.get(),
                                    max_budget: max_budget.get(),
                                };
                                let filtered: Vec<Advertisement> = list
                                    .into_iter()
                                    .filter(|ad| filters.matches(ad))
                                    .collect();
                                if filtered.is_empty() {
                                    view! {
                                        <div class="rounded-lg bg-white py-12 text-center shadow-md">
                                            <h3 class="text-sm font-medium text-gray-900">
                                                "No advertisements found"
                                            </h3>
                                            <p class="mt-1 text-sm text-gray-500">
                                                "Try adjusting your search or filter criteria."
                                            </p>
                                        </div>
                                    }
                                        .into_any()
                                } else {
                                    view! {
                                        <div class="grid gap-6 md:grid-cols-2 lg:grid-cols-3">
                                            <For
                                                each=move || filtered.clone()
                                                key=|ad| ad.id.clone()
                                                children=move |ad| {
                                                    let budget_label = format!("${:.0}", ad.budget);
                                                    let category = category_label(&ad.category);
                                                    let duration = ad
                                                        .campaign_duration
                                                        .clone()
                                                        .unwrap_or_else(|| "No duration set".to_string());
                                                    let audience = ad
                                                        .target_audience
                                                        .clone()
                                                        .unwrap_or_else(|| "No target set".to_string());
                                                    let features: Vec<String> = ad
                                                        .key_features
                                                        .as_deref()
                                                        .unwrap_or_default()
                                                        .split(',')
                                                        .map(str::trim)
                                                        .filter(|feature| !feature.is_empty())
                                                        .map(str::to_string)
                                                        .collect();
                                                    let extra = features.len().saturating_sub(3);
                                                    let shown: Vec<String> =
                                                        features.iter().take(3).cloned().collect();
                                                    let row_id = ad.id.clone();
                                                    let confirm_id = ad.id.clone();
                                                    let arm_id = ad.id.clone();
                                                    let edit_source = ad.clone();
                                                    let actions = move || {
                                                        if pending_delete.get().as_deref()
                                                            == Some(row_id.as_str())
                                                        {
                                                            let confirm = confirm_id.clone();
                                                            view! {
                                                                <div class="flex items-center gap-2 text-xs">
                                                                    <span class="text-red-600">
                                                                        "Delete this advertisement?"
                                                                    </span>
                                                                    <button
                                                                        class="font-medium text-red-600 hover:text-red-800"
                                                                        on:click=move |_| {
                                                                            delete_action.dispatch(confirm.clone());
                                                                        }
                                                                    >
                                                                        "Confirm"
                                                                    </button>
                                                                    <button
                                                                        class="text-gray-500 hover:text-gray-700"
                                                                        on:click=move |_| pending_delete.set(None)
                                                                    >
                                                                        "Cancel"
                                                                    </button>
                                                                </div>
                                                            }
                                                                .into_any()
                                                        } else {
                                                            let edit = edit_source.clone();
                                                            let arm = arm_id.clone();
                                                            view! {
                                                                <div class="flex gap-2 text-sm">
                                                                    <button
                                                                        class="p-1.5 text-gray-500 hover:text-purple-600"
                                                                        on:click=move |_| start_edit(edit.clone())
                                                                    >
                                                                        "Edit"
                                                                    </button>
                                                                    <button
                                                                        class="p-1.5 text-gray-500 hover:text-red-600"
                                                                        on:click=move |_| pending_delete.set(Some(arm.clone()))
                                                                    >
                                                                        "Delete"
                                                                    </button>
                                                                </div>
                                                            }
                                                                .into_any()
                                                        }
                                                    };
                                                    view! {
                                                        <div class="overflow-hidden rounded-lg bg-white shadow-md transition-shadow hover:shadow-lg">
                                                            <div class="p-4">
                                                                <div class="flex items-start justify-between">
                                                                    <h3 class="text-lg font-semibold text-gray-900">
                                                                        {ad.product_name.clone()}
                                                                    </h3>
                                                                    <AdStatusBadge status=ad.status />
                                                                </div>
                                                                <p class="mt-1 text-sm font-medium text-purple-700">
                                                                    {budget_label}
                                                                </p>
                                                                <p class="mt-2 text-sm text-gray-600">
                                                                    {ad.product_description.clone()}
                                                                </p>
                                                                <div class="mt-3 flex items-center justify-between text-xs text-gray-500">
                                                                    <span>{category}</span>
                                                                    <span>{duration}</span>
                                                                </div>
                                                                {(!shown.is_empty())
                                                                    .then(|| {
                                                                        view! {
                                                                            <div class="mt-3 flex flex-wrap gap-1">
                                                                                {shown
                                                                                    .into_iter()
                                                                                    .map(|feature| {
                                                                                        view! {
                                                                                            <span class="inline-flex items-center rounded bg-purple-100 px-2 py-0.5 text-xs font-medium text-purple-800">
                                                                                                {feature}
                                                                                            </span>
                                                                                        }
                                                                                    })
                                                                                    .collect_view()}
                                                                                {(extra > 0)
                                                                                    .then(|| {
                                                                                        view! {
                                                                                            <span class="inline-flex items-center rounded bg-gray-100 px-2 py-0.5 text-xs font-medium text-gray-600">
                                                                                                {format!("+{extra} more")}
                                                                                            </span>
                                                                                        }
                                                                                    })}
                                                                            </div>
                                                                        }
                                                                    })}
                                                                <div class="mt-4 flex items-center justify-between">
                                                                    <span class="text-sm text-gray-500">{audience}</span>
                                                                    {actions}
                                                                </div>
                                                            </div>
                                                        </div>
                                                    }
                                                }
                                            />
                                        </div>
                                    }
                                        .into_any()
                                }
                            }
                            Some(Err(err)) => {
                                view! { <Alert kind=AlertKind::Error message=err.to_string() /> }
                                    .into_any()
                            }
                            None => {
                                view! {
                                    <div class="flex justify-center py-12">
                                        <Spinner />
                                    </div>
                                }
                                    .into_any()
                            }
                        }}
                    </Suspense>
                </Show>

                <Show when=move || active_tab.get() == Tab::Applications>
                    <Suspense fallback=move || {
                        view! {
                            <div class="flex justify-center py-12">
                                <Spinner />
                            </div>
                        }
                    }>
                        {move || match applications.get() {
                            Some(Ok(list)) if list.is_empty() => {
                                view! {
                                    <div class="rounded-lg bg-white py-12 text-center shadow-md">
                                        <h3 class="text-sm font-medium text-gray-900">
                                            "No applications received"
                                        </h3>
                                        <p class="mt-1 text-sm text-gray-500">
                                            "Applications from agencies will appear here when they apply to your advertisements."
                                        </p>
                                    </div>
                                }
                                    .into_any()
                            }
                            Some(Ok(list)) => {
                                view! {
                                    <div class="space-y-6">
                                        <For
                                            each=move || list.clone()
                                            key=|application| application.id.clone()
                                            children=move |application| {
                                                let product = application.product_name().to_string();
                                                let agency = application.agency_name().to_string();
                                                let applied_on = application
                                                    .created_at
                                                    .clone()
                                                    .unwrap_or_else(|| "N/A".to_string());
                                                let budget_label = application
                                                    .budget
                                                    .map_or_else(
                                                        || "Not specified".to_string(),
                                                        |budget| format!("${budget:.0}"),
                                                    );
                                                let timeline = application
                                                    .timeline
                                                    .clone()
                                                    .unwrap_or_else(|| "Not specified".to_string());
                                                let message = application
                                                    .message
                                                    .clone()
                                                    .filter(|text| !text.is_empty());
                                                let proposal = application
                                                    .proposal
                                                    .clone()
                                                    .filter(|text| !text.is_empty());
                                                let status = application.status;
                                                let approve_id = application.id.clone();
                                                let reject_id = application.id;
                                                view! {
                                                    <div class="rounded-lg bg-white p-6 shadow-md transition-shadow hover:shadow-lg">
                                                        <div class="mb-4 flex items-center justify-between">
                                                            <h3 class="text-lg font-semibold text-gray-900">
                                                                "Application for: " {product}
                                                            </h3>
                                                            <ApplicationStatusBadge status=status />
                                                        </div>
                                                        <div class="mb-4 grid grid-cols-1 gap-4 md:grid-cols-2">
                                                            <div>
                                                                <p class="text-sm font-medium text-gray-700">"Agency"</p>
                                                                <p class="text-sm text-gray-900">{agency}</p>
                                                            </div>
                                                            <div>
                                                                <p class="text-sm font-medium text-gray-700">
                                                                    "Applied on"
                                                                </p>
                                                                <p class="text-sm text-gray-900">{applied_on}</p>
                                                            </div>
                                                            <div>
                                                                <p class="text-sm font-medium text-gray-700">
                                                                    "Proposed Budget"
                                                                </p>
                                                                <p class="text-sm text-gray-900">{budget_label}</p>
                                                            </div>
                                                            <div>
                                                                <p class="text-sm font-medium text-gray-700">"Timeline"</p>
                                                                <p class="text-sm text-gray-900">{timeline}</p>
                                                            </div>
                                                        </div>
                                                        {message
                                                            .map(|message| {
                                                                view! {
                                                                    <div class="mb-4">
                                                                        <p class="mb-2 text-sm font-medium text-gray-700">
                                                                            "Message"
                                                                        </p>
                                                                        <p class="whitespace-pre-line rounded-md bg-gray-50 p-3 text-sm text-gray-900">
                                                                            {message}
                                                                        </p>
                                                                    </div>
                                                                }
                                                            })}
                                                        {proposal
                                                            .map(|proposal| {
                                                                view! {
                                                                    <div class="mb-4">
                                                                        <p class="mb-2 text-sm font-medium text-gray-700">
                                                                            "Proposal"
                                                                        </p>
                                                                        <p class="whitespace-pre-line rounded-md bg-gray-50 p-3 text-sm text-gray-900">
                                                                            {proposal}
                                                                        </p>
                                                                    </div>
                                                                }
                                                            })}
                                                        {(status == ApplicationStatus::Pending)
                                                            .then(|| {
                                                                view! {
                                                                    <div class="mt-6 flex flex-col gap-2 border-t border-gray-200 pt-4 sm:flex-row sm:justify-end sm:gap-3">
                                                                        <button
                                                                            class="inline-flex items-center justify-center rounded-md border border-red-300 bg-white px-4 py-2 text-sm font-medium text-red-700 hover:bg-red-50"
                                                                            on:click=move |_| {
                                                                                decide_action
                                                                                    .dispatch((
                                                                                        reject_id.clone(),
                                                                                        ApplicationStatus::Rejected,
                                                                                    ));
                                                                            }
                                                                        >
                                                                            "Reject"
                                                                        </button>
                                                                        <button
                                                                            class="inline-flex items-center justify-center rounded-md bg-green-600 px-4 py-2 text-sm font-medium text-white hover:bg-green-700"
                                                                            on:click=move |_| {
                                                                                decide_action
                                                                                    .dispatch((
                                                                                        approve_id.clone(),
                                                                                        ApplicationStatus::Approved,
                                                                                    ));
                                                                            }
                                                                        >
                                                                            "Approve"
                                                                        </button>
                                                                    </div>
                                                                }
                                                            })}
                                                    </div>
                                                }
                                            }
                                        />
                                    </div>
                                }
                                    .into_any()
                            }
                            Some(Err(err)) => {
                                view! { <Alert kind=AlertKind::Error message=err.to_string() /> }
                                    .into_any()
                            }
                            None => {
                                view! {
                                    <div class="flex justify-center py-12">
                                        <Spinner />
                                    </div>
                                }
                                    .into_any()
                            }
                        }}
                    </Suspense>
                </Show>
            </div>
        </AppShell>
    }
}
