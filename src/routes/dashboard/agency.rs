//! Agency dashboard: browse advertisements, apply with a proposal, and track
//! submitted applications. The apply modal prefills a proposal skeleton from
//! the selected advertisement.

use crate::{
    app_lib::AppError,
    components::{
        Alert, AlertKind, AppShell, ApplicationStatusBadge, Button, Spinner, StatCard,
    },
    features::{
        ads::{
            client,
            types::{category_label, AdFilters, AdStatus, Advertisement, CATEGORIES},
        },
        applications::{
            client as applications_client,
            types::{AdApplication, CreateApplicationRequest},
        },
        auth::state::use_auth,
    },
};
use leptos::prelude::*;
use std::collections::HashSet;

const FIELD: &str =
    "mt-1 block w-full rounded-md border border-gray-300 px-3 py-2 text-sm shadow-sm focus:border-purple-500 focus:outline-none focus:ring-purple-500";

/// Renders the agency dashboard with campaign stats and the ad marketplace.
#[component]
pub fn AgencyDashboardPage() -> impl IntoView {
    let auth = use_auth();

    let ads = LocalResource::new(move || async move {
        client::list_ads(&auth.token().unwrap_or_default()).await
    });
    let my_applications = LocalResource::new(move || async move {
        applications_client::list_for_agency(&auth.token().unwrap_or_default()).await
    });

    let (search, set_search) = signal(String::new());
    let (category_filter, set_category_filter) = signal(String::new());
    let (status_filter, set_status_filter) = signal("active".to_string());
    let (min_budget, set_min_budget) = signal(String::new());
    let (max_budget, set_max_budget) = signal(String::new());

    // Ids of ads this agency already applied to, beyond what the ad list
    // itself reports. Keeps Apply buttons consistent right after a submit.
    let applied_ids = Signal::derive(move || {
        my_applications
            .get()
            .and_then(Result::ok)
            .map(|list| {
                list.iter()
                    .filter_map(|application| {
                        application
                            .advertisement
                            .as_ref()
                            .map(|summary| summary.id.clone())
                    })
                    .collect::<HashSet<String>>()
            })
            .unwrap_or_default()
    });

    let won_count = Signal::derive(move || {
        ads.get().and_then(Result::ok).map_or(0, |list| {
            list.iter()
                .filter(|ad| ad.status == AdStatus::Completed)
                .count()
        })
    });
    let active_count = Signal::derive(move || {
        ads.get().and_then(Result::ok).map_or(0, |list| {
            list.iter()
                .filter(|ad| ad.status == AdStatus::Active)
                .count()
        })
    });
    let revenue = Signal::derive(move || {
        let total: f64 = ads.get().and_then(Result::ok).map_or(0.0, |list| {
            list.iter()
                .filter(|ad| ad.status == AdStatus::Completed)
                .map(|ad| ad.budget * 0.2)
                .sum()
        });
        format!("${total:.0}")
    });
    let success_rate = Signal::derive(move || {
        ads.get().and_then(Result::ok).map_or_else(
            || "0%".to_string(),
            |list| {
                if list.is_empty() {
                    "0%".to_string()
                } else {
                    let completed = list
                        .iter()
                        .filter(|ad| ad.status == AdStatus::Completed)
                        .count();
                    #[allow(clippy::cast_precision_loss)]
                    let rate = (completed as f64 / list.len() as f64 * 100.0).round();
                    format!("{rate:.0}%")
                }
            },
        )
    });

    let selected = RwSignal::new(None::<Advertisement>);

    let welcome = move || {
        auth.session.with(|session| {
            session
                .as_ref()
                .map(|session| session.identity.fullname.clone())
                .filter(|name| !name.is_empty())
                .unwrap_or_else(|| "there".to_string())
        })
    };

    let on_applied = Callback::new(move |()| {
        ads.refetch();
        my_applications.refetch();
    });

    view! {
        <AppShell>
            <div class="mx-auto max-w-7xl px-4 py-8 sm:px-6 lg:px-8">
                <div class="mb-6">
                    <h1 class="mb-1 text-2xl font-bold text-gray-900 md:text-3xl">
                        "Agency Dashboard"
                    </h1>
                    <p class="text-gray-600">
                        "Welcome back, " {welcome}
                        "! Browse advertisements and manage your applications."
                    </p>
                </div>

                <div class="mb-8 grid grid-cols-1 gap-4 sm:grid-cols-2 lg:grid-cols-4">
                    <StatCard
                        label="Active Campaigns"
                        value=Signal::derive(move || active_count.get().to_string())
                    />
                    <StatCard
                        label="Won Campaigns"
                        value=Signal::derive(move || won_count.get().to_string())
                    />
                    <StatCard label="Estimated Revenue" value=revenue hint="At a 20% commission" />
                    <StatCard label="Success Rate" value=success_rate />
                </div>

                <div class="mb-6 rounded-lg bg-white p-4 shadow-md">
                    <div class="grid grid-cols-1 gap-4 md:grid-cols-5">
                        <div class="md:col-span-2">
                            <label class="mb-1 block text-sm font-medium text-gray-700">
                                "Search"
                            </label>
                            <input
                                type="text"
                                placeholder="Search advertisements..."
                                class=FIELD
                                value=move || search.get()
                                on:input=move |ev| set_search.set(event_target_value(&ev))
                            />
                        </div>
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
                        <div class="grid grid-cols-2 gap-2">
                            <div>
                                <label class="mb-1 block text-sm font-medium text-gray-700">
                                    "Min $"
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
                                    "Max $"
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
                </div>

                <h2 class="mb-4 text-xl font-semibold text-gray-900">
                    "Available Advertisements"
                </h2>

                <Suspense fallback=move || {
                    view! {
                        <div class="flex justify-center py-12">
                            <Spinner />
                        </div>
                    }
                }>
                    {move || match ads.get() {
                        Some(Ok(list)) => {
                            let total = list.len();
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
                            let shown = filtered.len();
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
                                    <p class="mb-4 text-sm text-gray-500">
                                        {format!("Showing {shown} of {total} advertisements")}
                                    </p>
                                    <div class="grid gap-6 md:grid-cols-2 lg:grid-cols-3">
                                        <For
                                            each=move || filtered.clone()
                                            key=|ad| ad.id.clone()
                                            children=move |ad| {
                                                let applied = ad.has_applied
                                                    || applied_ids.with(|set| set.contains(&ad.id));
                                                let budget_label = format!("${:.0}", ad.budget);
                                                let category = category_label(&ad.category);
                                                let interested =
                                                    format!("{} interested", ad.interested_count);
                                                let open_ad = ad.clone();
                                                view! {
                                                    <div class="overflow-hidden rounded-lg bg-white shadow-md transition-shadow hover:shadow-lg">
                                                        <div class="p-4">
                                                            <div class="flex items-center justify-between">
                                                                <span class="inline-flex items-center rounded-full bg-purple-100 px-2.5 py-0.5 text-xs font-medium text-purple-800">
                                                                    {category}
                                                                </span>
                                                                <span class="text-sm font-semibold text-purple-700">
                                                                    {budget_label}
                                                                </span>
                                                            </div>
                                                            <h3 class="mt-2 text-lg font-semibold text-gray-900">
                                                                {ad.product_name.clone()}
                                                            </h3>
                                                            <p class="mt-1 text-sm text-gray-600">
                                                                {ad.product_description.clone()}
                                                            </p>
                                                            <div class="mt-4 flex items-center justify-between">
                                                                <span class="text-xs text-gray-500">{interested}</span>
                                                                {if applied {
                                                                    view! {
                                                                        <button
                                                                            class="cursor-not-allowed rounded-md bg-gray-100 px-4 py-2 text-sm font-medium text-gray-400"
                                                                            disabled=true
                                                                        >
                                                                            "Applied"
                                                                        </button>
                                                                    }
                                                                        .into_any()
                                                                } else {
                                                                    view! {
                                                                        <button
                                                                            class="rounded-md bg-purple-600 px-4 py-2 text-sm font-medium text-white transition-colors hover:bg-purple-700"
                                                                            on:click=move |_| selected.set(Some(open_ad.clone()))
                                                                        >
                                                                            "Apply Now"
                                                                        </button>
                                                                    }
                                                                        .into_any()
                                                                }}
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

                <h2 class="mb-4 mt-10 text-xl font-semibold text-gray-900">"My Applications"</h2>
                <div class="overflow-hidden rounded-lg border border-gray-200 bg-white shadow-sm">
                    <div class="overflow-x-auto">
                        <table class="min-w-full divide-y divide-gray-200">
                            <thead class="bg-gray-50">
                                <tr>
                                    <th class="px-6 py-3 text-left text-xs font-medium uppercase tracking-wider text-gray-500">
                                        "Advertisement"
                                    </th>
                                    <th class="px-6 py-3 text-left text-xs font-medium uppercase tracking-wider text-gray-500">
                                        "Budget"
                                    </th>
                                    <th class="px-6 py-3 text-left text-xs font-medium uppercase tracking-wider text-gray-500">
                                        "Timeline"
                                    </th>
                                    <th class="px-6 py-3 text-left text-xs font-medium uppercase tracking-wider text-gray-500">
                                        "Status"
                                    </th>
                                    <th class="px-6 py-3 text-left text-xs font-medium uppercase tracking-wider text-gray-500">
                                        "Applied"
                                    </th>
                                </tr>
                            </thead>
                            <tbody class="divide-y divide-gray-200 bg-white">
                                <Suspense fallback=move || {
                                    view! {
                                        <tr>
                                            <td colspan="5" class="px-6 py-12 text-center">
                                                <Spinner />
                                            </td>
                                        </tr>
                                    }
                                }>
                                    {move || match my_applications.get() {
                                        Some(Ok(list)) if list.is_empty() => {
                                            view! {
                                                <tr>
                                                    <td
                                                        colspan="5"
                                                        class="px-6 py-12 text-center text-sm text-gray-500"
                                                    >
                                                        "You have not applied to any advertisements yet."
                                                    </td>
                                                </tr>
                                            }
                                                .into_any()
                                        }
                                        Some(Ok(list)) => {
                                            view! {
                                                <For
                                                    each=move || list.clone()
                                                    key=|application| application.id.clone()
                                                    children=move |application: AdApplication| {
                                                        let product = application.product_name().to_string();
                                                        let budget_label = application
                                                            .budget
                                                            .map_or_else(
                                                                || "-".to_string(),
                                                                |budget| format!("${budget:.0}"),
                                                            );
                                                        let timeline = application
                                                            .timeline
                                                            .clone()
                                                            .unwrap_or_else(|| "-".to_string());
                                                        let applied_on = application
                                                            .created_at
                                                            .clone()
                                                            .unwrap_or_else(|| "-".to_string());
                                                        view! {
                                                            <tr class="transition-colors hover:bg-gray-50">
                                                                <td class="px-6 py-4 text-sm font-medium text-gray-900">
                                                                    {product}
                                                                </td>
                                                                <td class="whitespace-nowrap px-6 py-4 text-sm text-gray-500">
                                                                    {budget_label}
                                                                </td>
                                                                <td class="whitespace-nowrap px-6 py-4 text-sm text-gray-500">
                                                                    {timeline}
                                                                </td>
                                                                <td class="whitespace-nowrap px-6 py-4">
                                                                    <ApplicationStatusBadge status=application.status />
                                                                </td>
                                                                <td class="whitespace-nowrap px-6 py-4 text-sm text-gray-500">
                                                                    {applied_on}
                                                                </td>
                                                            </tr>
                                                        }
                                                    }
                                                />
                                            }
                                                .into_any()
                                        }
                                        Some(Err(err)) => {
                                            view! {
                                                <tr>
                                                    <td colspan="5" class="px-6 py-4">
                                                        <Alert kind=AlertKind::Error message=err.to_string() />
                                                    </td>
                                                </tr>
                                            }
                                                .into_any()
                                        }
                                        None => {
                                            view! {
                                                <tr>
                                                    <td colspan="5" class="px-6 py-12 text-center">
                                                        <Spinner />
                                                    </td>
                                                </tr>
                                            }
                                                .into_any()
                                        }
                                    }}
                                </Suspense>
                            </tbody>
                        </table>
                    </div>
                </div>

                <ApplyModal selected=selected on_success=on_applied />
            </div>
        </AppShell>
    }
}

/// Modal for submitting an application against the selected advertisement.
/// Fields prefill from the ad so agencies start from a usable proposal.
#[component]
fn ApplyModal(
    selected: RwSignal<Option<Advertisement>>,
    #[prop(into)] on_success: Callback<()>,
) -> impl IntoView {
    let auth = use_auth();

    let (message, set_message) = signal(String::new());
    let (proposal, set_proposal) = signal(String::new());
    let (budget, set_budget) = signal(String::new());
    let (timeline, set_timeline) = signal(String::new());
    let (error, set_error) = signal::<Option<AppError>>(None);

    Effect::new(move |_| {
        if let Some(ad) = selected.get() {
            set_message.set(format!(
                "I'm interested in promoting your product \"{}\"",
                ad.product_name
            ));
            set_proposal.set(format!(
                "Here's how we can help promote {}:\n- Target audience: {}\n- Campaign duration: {}\n- Key strategies: Social media, influencer partnerships, content creation",
                ad.product_name,
                ad.target_audience.unwrap_or_else(|| "General".to_string()),
                ad.campaign_duration
                    .clone()
                    .unwrap_or_else(|| "2-4 weeks".to_string()),
            ));
            set_budget.set(format!("{:.0}", ad.budget * 0.2));
            set_timeline.set(ad.campaign_duration.unwrap_or_else(|| "4 weeks".to_string()));
            set_error.set(None);
        }
    });

    let apply_action = Action::new_local(move |request: &CreateApplicationRequest| {
        let request = request.clone();
        async move {
            applications_client::create_application(&request, &auth.token().unwrap_or_default())
                .await
        }
    });

    Effect::new(move |_| {
        if let Some(result) = apply_action.value().get() {
            match result {
                Ok(()) => {
                    selected.set(None);
                    on_success.run(());
                }
                Err(err) => set_error.set(Some(err)),
            }
        }
    });

    let on_submit = StoredValue::new(move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(ad) = selected.get_untracked() else {
            return;
        };
        let Ok(budget_value) = budget.get_untracked().trim().parse::<f64>() else {
            set_error.set(Some(AppError::Validation(
                "Proposed budget must be a number".to_string(),
            )));
            return;
        };
        apply_action.dispatch(CreateApplicationRequest {
            advertisement: ad.id,
            message: message.get_untracked(),
            proposal: proposal.get_untracked(),
            budget: budget_value,
            estimated_timeline: timeline.get_untracked(),
        });
    });

    view! {
        {move || {
            selected
                .get()
                .map(|ad| {
                    let summary_budget = format!("${:.0}", ad.budget);
                    let summary_category = category_label(&ad.category);
                    let title = ad.product_name.clone();
                    view! {
                        <div class="fixed inset-0 z-50 flex items-center justify-center bg-black/50 p-4 backdrop-blur-sm">
                            <div class="max-h-[90vh] w-full max-w-lg overflow-y-auto rounded-lg bg-white shadow-xl">
                                <div class="flex items-center justify-between border-b border-gray-200 px-6 py-4">
                                    <h2 class="text-lg font-semibold text-gray-900">
                                        "Apply for Advertisement"
                                    </h2>
                                    <button
                                        type="button"
                                        class="rounded p-1 text-gray-400 hover:bg-gray-100 hover:text-gray-600"
                                        on:click=move |_| selected.set(None)
                                    >
                                        "✕"
                                    </button>
                                </div>
                                <form
                                    on:submit=move |ev| on_submit.with_value(|f| f(ev))
                                    class="space-y-4 p-6"
                                >
                                    <div class="rounded-md bg-gray-50 p-4">
                                        <h3 class="text-sm font-semibold text-gray-900">{title}</h3>
                                        <div class="mt-2 grid grid-cols-2 gap-2 text-sm text-gray-600">
                                            <p>"Budget: " {summary_budget}</p>
                                            <p>"Category: " {summary_category}</p>
                                        </div>
                                    </div>
                                    <div>
                                        <label
                                            class="block text-sm font-medium text-gray-700"
                                            for="apply_message"
                                        >
                                            "Message to Client"
                                        </label>
                                        <textarea
                                            id="apply_message"
                                            rows="3"
                                            required
                                            class=FIELD
                                            prop:value=move || message.get()
                                            on:input=move |ev| set_message.set(event_target_value(&ev))
                                        ></textarea>
                                    </div>
                                    <div>
                                        <label
                                            class="block text-sm font-medium text-gray-700"
                                            for="apply_proposal"
                                        >
                                            "Your Proposal"
                                        </label>
                                        <textarea
                                            id="apply_proposal"
                                            rows="5"
                                            required
                                            class=FIELD
                                            prop:value=move || proposal.get()
                                            on:input=move |ev| set_proposal.set(event_target_value(&ev))
                                        ></textarea>
                                    </div>
                                    <div class="grid grid-cols-1 gap-4 sm:grid-cols-2">
                                        <div>
                                            <label
                                                class="block text-sm font-medium text-gray-700"
                                                for="apply_budget"
                                            >
                                                "Proposed Budget ($)"
                                            </label>
                                            <input
                                                id="apply_budget"
                                                type="number"
                                                min="0"
                                                step="0.01"
                                                required
                                                class=FIELD
                                                value=move || budget.get()
                                                on:input=move |ev| set_budget.set(event_target_value(&ev))
                                            />
                                        </div>
                                        <div>
                                            <label
                                                class="block text-sm font-medium text-gray-700"
                                                for="apply_timeline"
                                            >
                                                "Estimated Timeline"
                                            </label>
                                            <input
                                                id="apply_timeline"
                                                type="text"
                                                required
                                                class=FIELD
                                                placeholder="e.g., 4 weeks"
                                                value=move || timeline.get()
                                                on:input=move |ev| set_timeline.set(event_target_value(&ev))
                                            />
                                        </div>
                                    </div>
                                    {move || {
                                        error
                                            .get()
                                            .map(|err| {
                                                view! {
                                                    <Alert kind=AlertKind::Error message=err.to_string() />
                                                }
                                            })
                                    }}
                                    <div class="flex flex-col-reverse gap-3 pt-4 sm:flex-row sm:justify-end">
                                        <button
                                            type="button"
                                            class="rounded-lg border border-gray-300 bg-white px-5 py-2.5 text-sm font-medium text-gray-700 hover:bg-gray-50 focus:ring-4 focus:ring-gray-100"
                                            on:click=move |_| selected.set(None)
                                        >
                                            "Cancel"
                                        </button>
                                        <Button button_type="submit" disabled=apply_action.pending()>
                                            {move || {
                                                if apply_action.pending().get() {
                                                    "Submitting..."
                                                } else {
                                                    "Submit Application"
                                                }
                                            }}
                                        </Button>
                                    </div>
                                </form>
                            </div>
                        </div>
                    }
                })
        }}
    }
}
