//! Admin dashboard: platform analytics plus paginated client and agency
//! account lists with approve / reject controls.

use crate::{
    app_lib::AppError,
    components::{Alert, AlertKind, AppShell, Spinner, StatCard},
    features::{
        admin::{
            client,
            types::{AccountSummary, AnalyticsSummary, ApprovalAction},
        },
        auth::{state::use_auth, Role},
    },
};
use leptos::prelude::*;

const PAGE_SIZE: u32 = 10;

const TAB_ACTIVE: &str =
    "whitespace-nowrap border-b-2 border-purple-500 px-6 py-4 text-sm font-medium text-purple-600";
const TAB_INACTIVE: &str =
    "whitespace-nowrap border-b-2 border-transparent px-6 py-4 text-sm font-medium text-gray-500 hover:border-gray-300 hover:text-gray-700";
const FIELD: &str =
    "block w-full rounded-md border border-gray-300 px-3 py-2 text-sm shadow-sm focus:border-purple-500 focus:outline-none focus:ring-purple-500";

#[derive(Clone, Copy, PartialEq, Eq)]
enum AccountTab {
    Clients,
    Agencies,
}

/// Renders the admin dashboard with analytics cards and account approvals.
#[component]
pub fn AdminDashboardPage() -> impl IntoView {
    let auth = use_auth();

    let analytics = LocalResource::new(move || async move {
        client::fetch_analytics(&auth.token().unwrap_or_default()).await
    });

    let (active_tab, set_active_tab) = signal(AccountTab::Clients);
    let (page, set_page) = signal(1u32);
    let (search, set_search) = signal(String::new());
    let (action_error, set_action_error) = signal::<Option<AppError>>(None);

    // Tab and page are read before the async block so changing either
    // refetches the list.
    let accounts = LocalResource::new(move || {
        let tab = active_tab.get();
        let current = page.get();
        async move {
            let token = auth.token().unwrap_or_default();
            match tab {
                AccountTab::Clients => client::list_clients(current, PAGE_SIZE, &token).await,
                AccountTab::Agencies => client::list_agencies(current, PAGE_SIZE, &token).await,
            }
        }
    });

    let select_tab = move |tab: AccountTab| {
        set_active_tab.set(tab);
        set_page.set(1);
        set_search.set(String::new());
    };

    let approve_action = Action::new_local(move |input: &(String, ApprovalAction)| {
        let (id, action) = input.clone();
        async move {
            let token = auth.token().unwrap_or_default();
            match active_tab.get_untracked() {
                AccountTab::Clients => client::approve_client(&id, action, &token).await,
                AccountTab::Agencies => client::approve_agency(&id, action, &token).await,
            }
        }
    });

    Effect::new(move |_| {
        if let Some(result) = approve_action.value().get() {
            match result {
                Ok(()) => {
                    set_action_error.set(None);
                    accounts.refetch();
                    analytics.refetch();
                }
                Err(err) => set_action_error.set(Some(err)),
            }
        }
    });

    let stat = move |pick: fn(&AnalyticsSummary) -> u32| {
        Signal::derive(move || {
            analytics
                .get()
                .and_then(Result::ok)
                .map_or_else(|| "-".to_string(), |summary| pick(&summary).to_string())
        })
    };
    let total_clients = stat(|summary| summary.total_clients);
    let total_agencies = stat(|summary| summary.total_agencies);
    let total_ads = stat(|summary| summary.total_advertisements);
    let total_applications = stat(|summary| summary.total_applications);
    let pending_approvals = stat(|summary| summary.pending_approvals);

    let total_pages = move || {
        accounts
            .get()
            .and_then(Result::ok)
            .map_or(1, |page_data| page_data.total_pages.max(1))
    };

    view! {
        <AppShell>
            <div class="mx-auto max-w-7xl px-4 py-8 sm:px-6 lg:px-8">
                <div class="mb-6">
                    <h1 class="mb-1 text-2xl font-bold text-gray-900 md:text-3xl">
                        "Admin Dashboard"
                    </h1>
                    <p class="text-gray-600">
                        "Platform analytics and account approvals."
                    </p>
                </div>

                <div class="mb-8 grid grid-cols-1 gap-4 sm:grid-cols-2 lg:grid-cols-5">
                    <StatCard label="Total Clients" value=total_clients />
                    <StatCard label="Total Agencies" value=total_agencies />
                    <StatCard label="Advertisements" value=total_ads />
                    <StatCard label="Applications" value=total_applications />
                    <StatCard label="Pending Approvals" value=pending_approvals />
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

                <div class="overflow-hidden rounded-lg border border-gray-200 bg-white shadow-sm">
                    <div class="border-b border-gray-200">
                        <nav class="-mb-px flex space-x-4" aria-label="Tabs">
                            <button
                                class=move || {
                                    if active_tab.get() == AccountTab::Clients {
                                        TAB_ACTIVE
                                    } else {
                                        TAB_INACTIVE
                                    }
                                }
                                on:click=move |_| select_tab(AccountTab::Clients)
                            >
                                "Clients"
                            </button>
                            <button
                                class=move || {
                                    if active_tab.get() == AccountTab::Agencies {
                                        TAB_ACTIVE
                                    } else {
                                        TAB_INACTIVE
                                    }
                                }
                                on:click=move |_| select_tab(AccountTab::Agencies)
                            >
                                "Agencies"
                            </button>
                        </nav>
                    </div>

                    <div class="border-b border-gray-200 p-4">
                        <input
                            type="text"
                            placeholder="Search by name or email..."
                            class=FIELD
                            value=move || search.get()
                            on:input=move |ev| set_search.set(event_target_value(&ev))
                        />
                    </div>

                    <div class="overflow-x-auto">
                        <table class="min-w-full divide-y divide-gray-200">
                            <thead class="bg-gray-50">
                                <tr>
                                    <th class="px-6 py-3 text-left text-xs font-medium uppercase tracking-wider text-gray-500">
                                        "Account"
                                    </th>
                                    <th class="px-6 py-3 text-left text-xs font-medium uppercase tracking-wider text-gray-500">
                                        "Role"
                                    </th>
                                    <th class="px-6 py-3 text-left text-xs font-medium uppercase tracking-wider text-gray-500">
                                        "Status"
                                    </th>
                                    <th class="px-6 py-3 text-left text-xs font-medium uppercase tracking-wider text-gray-500">
                                        "Registered"
                                    </th>
                                    <th class="px-6 py-3 text-left text-xs font-medium uppercase tracking-wider text-gray-500">
                                        "Actions"
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
                                    {move || match accounts.get() {
                                        Some(Ok(page_data)) => {
                                            let query = search.get().to_lowercase();
                                            let rows: Vec<AccountSummary> = page_data
                                                .accounts
                                                .iter()
                                                .filter(|account| {
                                                    query.is_empty()
                                                        || account
                                                            .display_name()
                                                            .to_lowercase()
                                                            .contains(&query)
                                                        || account.email.to_lowercase().contains(&query)
                                                })
                                                .cloned()
                                                .collect();
                                            if rows.is_empty() {
                                                view! {
                                                    <tr>
                                                        <td
                                                            colspan="5"
                                                            class="px-6 py-12 text-center text-sm text-gray-500"
                                                        >
                                                            "No accounts found."
                                                        </td>
                                                    </tr>
                                                }
                                                    .into_any()
                                            } else {
                                                view! {
                                                    <For
                                                        each=move || rows.clone()
                                                        key=|account| account.id.clone()
                                                        children=move |account| {
                                                            let name = account.display_name().to_string();
                                                            let email = account.email.clone();
                                                            let role_label = account
                                                                .role
                                                                .map_or("client", Role::as_str);
                                                            let role_class = match account.role {
                                                                Some(Role::Admin) => {
                                                                    "inline-flex rounded-full bg-purple-100 px-2.5 py-0.5 text-xs font-medium capitalize text-purple-800"
                                                                }
                                                                Some(Role::Agency) => {
                                                                    "inline-flex rounded-full bg-indigo-100 px-2.5 py-0.5 text-xs font-medium capitalize text-indigo-800"
                                                                }
                                                                _ => {
                                                                    "inline-flex rounded-full bg-green-100 px-2.5 py-0.5 text-xs font-medium capitalize text-green-800"
                                                                }
                                                            };
                                                            let registered = account
                                                                .created_at
                                                                .clone()
                                                                .unwrap_or_else(|| "-".to_string());
                                                            let approve_id = account.id.clone();
                                                            let reject_id = account.id.clone();
                                                            let actions = if account.is_approved {
                                                                view! {
                                                                    <span class="text-sm text-gray-400">"-"</span>
                                                                }
                                                                    .into_any()
                                                            } else {
                                                                view! {
                                                                    <div class="flex gap-2">
                                                                        <button
                                                                            type="button"
                                                                            class="rounded-md bg-green-600 px-3 py-1.5 text-xs font-medium text-white hover:bg-green-700"
                                                                            on:click=move |_| {
                                                                                approve_action
                                                                                    .dispatch((
                                                                                        approve_id.clone(),
                                                                                        ApprovalAction::Approve,
                                                                                    ));
                                                                            }
                                                                        >
                                                                            "Approve"
                                                                        </button>
                                                                        <button
                                                                            type="button"
                                                                            class="rounded-md bg-red-600 px-3 py-1.5 text-xs font-medium text-white hover:bg-red-700"
                                                                            on:click=move |_| {
                                                                                approve_action
                                                                                    .dispatch((
                                                                                        reject_id.clone(),
                                                                                        ApprovalAction::Reject,
                                                                                    ));
                                                                            }
                                                                        >
                                                                            "Reject"
                                                                        </button>
                                                                    </div>
                                                                }
                                                                    .into_any()
                                                            };
                                                            view! {
                                                                <tr class="transition-colors hover:bg-gray-50">
                                                                    <td class="px-6 py-4">
                                                                        <p class="text-sm font-medium text-gray-900">{name}</p>
                                                                        <p class="text-sm text-gray-500">{email}</p>
                                                                    </td>
                                                                    <td class="whitespace-nowrap px-6 py-4">
                                                                        <span class=role_class>{role_label}</span>
                                                                    </td>
                                                                    <td class="whitespace-nowrap px-6 py-4">
                                                                        {if account.is_approved {
                                                                            view! {
                                                                                <span class="inline-flex rounded-full bg-emerald-100 px-2.5 py-0.5 text-xs font-medium text-emerald-800">
                                                                                    "Approved"
                                                                                </span>
                                                                            }
                                                                                .into_any()
                                                                        } else {
                                                                            view! {
                                                                                <span class="inline-flex rounded-full bg-amber-100 px-2.5 py-0.5 text-xs font-medium text-amber-800">
                                                                                    "Pending"
                                                                                </span>
                                                                            }
                                                                                .into_any()
                                                                        }}
                                                                    </td>
                                                                    <td class="whitespace-nowrap px-6 py-4 text-sm text-gray-500">
                                                                        {registered}
                                                                    </td>
                                                                    <td class="whitespace-nowrap px-6 py-4">{actions}</td>
                                                                </tr>
                                                            }
                                                        }
                                                    />
                                                }
                                                    .into_any()
                                            }
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

                    <div class="flex items-center justify-between border-t border-gray-200 px-6 py-3">
                        <p class="text-sm text-gray-500">
                            {move || format!("Page {} of {}", page.get(), total_pages())}
                        </p>
                        <div class="flex gap-2">
                            <button
                                type="button"
                                class="rounded-md border border-gray-300 bg-white px-3 py-1.5 text-sm font-medium text-gray-700 hover:bg-gray-50 disabled:cursor-not-allowed disabled:opacity-50"
                                disabled=move || page.get() <= 1
                                on:click=move |_| {
                                    set_page.update(|current| *current = current.saturating_sub(1).max(1))
                                }
                            >
                                "Previous"
                            </button>
                            <button
                                type="button"
                                class="rounded-md border border-gray-300 bg-white px-3 py-1.5 text-sm font-medium text-gray-700 hover:bg-gray-50 disabled:cursor-not-allowed disabled:opacity-50"
                                disabled=move || page.get() >= total_pages()
                                on:click=move |_| set_page.update(|current| *current += 1)
                            >
                                "Next"
                            </button>
                        </div>
                    </div>
                </div>
            </div>
        </AppShell>
    }
}
