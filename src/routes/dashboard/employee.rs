//! Employee dashboard: the internal review queue. Employees score pending
//! applications and either forward them to the client or reject them.

use crate::{
    app_lib::AppError,
    components::{Alert, AlertKind, AppShell, Button, Spinner, StatCard},
    features::{
        applications::{
            client,
            types::{AdApplication, ReviewDecision, ReviewRequest, REVIEW_QUALITIES},
        },
        auth::state::use_auth,
    },
};
use leptos::prelude::*;

const FIELD: &str =
    "mt-1 block w-full rounded-md border border-gray-300 px-3 py-2 text-sm shadow-sm focus:border-green-500 focus:outline-none focus:ring-green-500";

/// Renders the employee review queue with its stats header.
#[component]
pub fn EmployeeDashboardPage() -> impl IntoView {
    let auth = use_auth();

    let stats = LocalResource::new(move || async move {
        client::fetch_employee_stats(&auth.token().unwrap_or_default()).await
    });
    let pending = LocalResource::new(move || async move {
        client::list_pending_reviews(&auth.token().unwrap_or_default()).await
    });

    let selected = RwSignal::new(None::<AdApplication>);

    let refresh = move |_| {
        stats.refetch();
        pending.refetch();
    };
    let on_reviewed = Callback::new(move |()| {
        stats.refetch();
        pending.refetch();
    });

    let pending_count = Signal::derive(move || {
        stats
            .get()
            .and_then(Result::ok)
            .map_or_else(|| "-".to_string(), |stats| stats.total_pending.to_string())
    });
    let reviewed_count = Signal::derive(move || {
        stats
            .get()
            .and_then(Result::ok)
            .map_or_else(|| "-".to_string(), |stats| stats.total_reviewed.to_string())
    });

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
                            "Employee Dashboard"
                        </h1>
                        <p class="text-gray-600">
                            "Welcome back, " {welcome} "! Review pending agency applications."
                        </p>
                    </div>
                    <button
                        type="button"
                        class="inline-flex items-center rounded-md bg-green-600 px-4 py-2 text-sm font-medium text-white transition-colors hover:bg-green-700"
                        on:click=refresh
                    >
                        "Refresh"
                    </button>
                </div>

                <div class="mb-8 grid grid-cols-1 gap-4 sm:grid-cols-2">
                    <StatCard label="Pending Review" value=pending_count />
                    <StatCard label="Reviewed" value=reviewed_count />
                </div>

                <h2 class="mb-4 text-xl font-semibold text-gray-900">
                    "Pending Review Applications"
                </h2>
                <div class="overflow-hidden rounded-lg border border-gray-200 bg-white shadow-sm">
                    <div class="overflow-x-auto">
                        <table class="min-w-full divide-y divide-gray-200">
                            <thead class="bg-gray-50">
                                <tr>
                                    <th class="px-6 py-3 text-left text-xs font-medium uppercase tracking-wider text-gray-500">
                                        "Advertisement"
                                    </th>
                                    <th class="px-6 py-3 text-left text-xs font-medium uppercase tracking-wider text-gray-500">
                                        "Agency"
                                    </th>
                                    <th class="px-6 py-3 text-left text-xs font-medium uppercase tracking-wider text-gray-500">
                                        "Budget"
                                    </th>
                                    <th class="px-6 py-3 text-left text-xs font-medium uppercase tracking-wider text-gray-500">
                                        "Timeline"
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
                                    {move || match pending.get() {
                                        Some(Ok(list)) if list.is_empty() => {
                                            view! {
                                                <tr>
                                                    <td colspan="5" class="px-6 py-12 text-center">
                                                        <h3 class="text-sm font-medium text-gray-900">
                                                            "No pending reviews"
                                                        </h3>
                                                        <p class="mt-1 text-sm text-gray-500">
                                                            "All applications have been reviewed or there are no new submissions."
                                                        </p>
                                                        <button
                                                            type="button"
                                                            class="mt-4 inline-flex items-center rounded-md bg-green-600 px-4 py-2 text-sm font-medium text-white hover:bg-green-700"
                                                            on:click=refresh
                                                        >
                                                            "Check for New Applications"
                                                        </button>
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
                                                        let category = application
                                                            .advertisement
                                                            .as_ref()
                                                            .map(|summary| summary.category.clone())
                                                            .unwrap_or_default();
                                                        let agency = application.agency_name().to_string();
                                                        let contact = application
                                                            .agency
                                                            .as_ref()
                                                            .map(|agency| agency.fullname.clone())
                                                            .unwrap_or_default();
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
                                                        let open = application.clone();
                                                        view! {
                                                            <tr class="transition-colors hover:bg-gray-50">
                                                                <td class="px-6 py-4">
                                                                    <p class="text-sm font-medium text-gray-900">
                                                                        {product}
                                                                    </p>
                                                                    <p class="text-sm capitalize text-gray-500">{category}</p>
                                                                </td>
                                                                <td class="px-6 py-4">
                                                                    <p class="text-sm font-medium text-gray-900">{agency}</p>
                                                                    <p class="text-sm text-gray-500">{contact}</p>
                                                                </td>
                                                                <td class="whitespace-nowrap px-6 py-4 text-sm text-gray-500">
                                                                    {budget_label}
                                                                </td>
                                                                <td class="whitespace-nowrap px-6 py-4 text-sm text-gray-500">
                                                                    {timeline}
                                                                </td>
                                                                <td class="whitespace-nowrap px-6 py-4">
                                                                    <button
                                                                        type="button"
                                                                        class="rounded-md bg-green-600 px-3 py-1.5 text-sm font-medium text-white hover:bg-green-700"
                                                                        on:click=move |_| selected.set(Some(open.clone()))
                                                                    >
                                                                        "Review"
                                                                    </button>
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

                <ReviewModal selected=selected on_submitted=on_reviewed />
            </div>
        </AppShell>
    }
}

/// Review modal: application details on the left, the scoring form on the
/// right. Submitting requires an explicit approve or reject decision.
#[component]
fn ReviewModal(
    selected: RwSignal<Option<AdApplication>>,
    #[prop(into)] on_submitted: Callback<()>,
) -> impl IntoView {
    let auth = use_auth();

    let (budget_approved, set_budget_approved) = signal(false);
    let (proposal_quality, set_proposal_quality) = signal("fair".to_string());
    let (portfolio_quality, set_portfolio_quality) = signal("fair".to_string());
    let (notes, set_notes) = signal(String::new());
    let decision = RwSignal::new(None::<ReviewDecision>);
    let (error, set_error) = signal::<Option<AppError>>(None);

    Effect::new(move |_| {
        if selected.get().is_some() {
            set_budget_approved.set(false);
            set_proposal_quality.set("fair".to_string());
            set_portfolio_quality.set("fair".to_string());
            set_notes.set(String::new());
            decision.set(None);
            set_error.set(None);
        }
    });

    let review_action = Action::new_local(move |input: &(String, ReviewRequest)| {
        let (id, review) = input.clone();
        async move { client::submit_review(&id, &review, &auth.token().unwrap_or_default()).await }
    });

    Effect::new(move |_| {
        if let Some(result) = review_action.value().get() {
            match result {
                Ok(()) => {
                    selected.set(None);
                    on_submitted.run(());
                }
                Err(err) => set_error.set(Some(err)),
            }
        }
    });

    let on_submit = StoredValue::new(move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(application) = selected.get_untracked() else {
            return;
        };
        let Some(verdict) = decision.get_untracked() else {
            set_error.set(Some(AppError::Validation(
                "Select a decision before submitting".to_string(),
            )));
            return;
        };
        review_action.dispatch((
            application.id,
            ReviewRequest {
                budget_approved: budget_approved.get_untracked(),
                proposal_quality: proposal_quality.get_untracked(),
                portfolio_quality: portfolio_quality.get_untracked(),
                notes: notes.get_untracked(),
                decision: verdict,
            },
        ));
    });

    view! {
        {move || {
            selected
                .get()
                .map(|application| {
                    let title = format!("Employee Review - {}", application.product_name());
                    let agency_line = application.agency.as_ref().map_or_else(
                        || "(unknown agency)".to_string(),
                        |agency| {
                            match agency
                                .agency_name
                                .as_deref()
                                .filter(|name| !name.is_empty())
                            {
                                Some(name) => format!("{} ({name})", agency.fullname),
                                None => agency.fullname.clone(),
                            }
                        },
                    );
                    let budget_label = application
                        .budget
                        .map_or_else(|| "Not specified".to_string(), |budget| {
                            format!("${budget:.0}")
                        });
                    let timeline = application
                        .timeline
                        .clone()
                        .unwrap_or_else(|| "Not specified".to_string());
                    let message = application
                        .message
                        .clone()
                        .filter(|text| !text.is_empty())
                        .unwrap_or_else(|| "No message provided".to_string());
                    let proposal = application
                        .proposal
                        .clone()
                        .filter(|text| !text.is_empty())
                        .unwrap_or_else(|| "No proposal provided".to_string());
                    view! {
                        <div class="fixed inset-0 z-50 flex items-center justify-center bg-black/50 p-4 backdrop-blur-sm">
                            <div class="max-h-[90vh] w-full max-w-4xl overflow-y-auto rounded-lg bg-white shadow-xl">
                                <div class="flex items-center justify-between border-b border-gray-200 px-6 py-4">
                                    <h2 class="text-lg font-semibold text-gray-900">{title}</h2>
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
                                    class="grid grid-cols-1 gap-6 p-6 lg:grid-cols-2"
                                >
                                    <div class="space-y-4">
                                        <h3 class="text-sm font-semibold uppercase tracking-wider text-gray-500">
                                            "Application Details"
                                        </h3>
                                        <div>
                                            <p class="text-sm font-medium text-gray-700">"Agency"</p>
                                            <p class="text-sm text-gray-900">{agency_line}</p>
                                        </div>
                                        <div class="grid grid-cols-2 gap-4">
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
                                        <div>
                                            <p class="mb-1 text-sm font-medium text-gray-700">"Message"</p>
                                            <p class="whitespace-pre-line rounded-md bg-gray-50 p-3 text-sm text-gray-900">
                                                {message}
                                            </p>
                                        </div>
                                        <div>
                                            <p class="mb-1 text-sm font-medium text-gray-700">"Proposal"</p>
                                            <p class="whitespace-pre-line rounded-md bg-gray-50 p-3 text-sm text-gray-900">
                                                {proposal}
                                            </p>
                                        </div>
                                    </div>

                                    <div class="space-y-5">
                                        <h3 class="text-sm font-semibold uppercase tracking-wider text-gray-500">
                                            "Review"
                                        </h3>
                                        <div>
                                            <p class="mb-2 text-sm font-medium text-gray-700">
                                                "Budget Approval"
                                            </p>
                                            <div class="flex gap-4">
                                                <label class="flex cursor-pointer items-center gap-2 text-sm text-gray-900">
                                                    <input
                                                        type="radio"
                                                        name="budget_approval"
                                                        class="h-4 w-4 text-green-600 focus:ring-green-500"
                                                        checked=move || budget_approved.get()
                                                        on:change=move |_| set_budget_approved.set(true)
                                                    />
                                                    "Approve Budget"
                                                </label>
                                                <label class="flex cursor-pointer items-center gap-2 text-sm text-gray-900">
                                                    <input
                                                        type="radio"
                                                        name="budget_approval"
                                                        class="h-4 w-4 text-red-600 focus:ring-red-500"
                                                        checked=move || !budget_approved.get()
                                                        on:change=move |_| set_budget_approved.set(false)
                                                    />
                                                    "Reject Budget"
                                                </label>
                                            </div>
                                        </div>
                                        <div>
                                            <p class="mb-2 text-sm font-medium text-gray-700">
                                                "Proposal Quality"
                                            </p>
                                            <div class="grid grid-cols-4 gap-2">
                                                {REVIEW_QUALITIES
                                                    .into_iter()
                                                    .map(|quality| {
                                                        view! {
                                                            <label
                                                                class="flex cursor-pointer items-center justify-center rounded-md border border-gray-300 p-2 text-sm capitalize text-gray-700"
                                                                class:border-green-500=move || {
                                                                    proposal_quality.get() == quality
                                                                }
                                                                class:bg-green-50=move || proposal_quality.get() == quality
                                                            >
                                                                <input
                                                                    type="radio"
                                                                    name="proposal_quality"
                                                                    class="sr-only"
                                                                    checked=move || proposal_quality.get() == quality
                                                                    on:change=move |_| {
                                                                        set_proposal_quality.set(quality.to_string())
                                                                    }
                                                                />
                                                                {quality}
                                                            </label>
                                                        }
                                                    })
                                                    .collect_view()}
                                            </div>
                                        </div>
                                        <div>
                                            <p class="mb-2 text-sm font-medium text-gray-700">
                                                "Portfolio Quality"
                                            </p>
                                            <div class="grid grid-cols-4 gap-2">
                                                {REVIEW_QUALITIES
                                                    .into_iter()
                                                    .map(|quality| {
                                                        view! {
                                                            <label
                                                                class="flex cursor-pointer items-center justify-center rounded-md border border-gray-300 p-2 text-sm capitalize text-gray-700"
                                                                class:border-green-500=move || {
                                                                    portfolio_quality.get() == quality
                                                                }
                                                                class:bg-green-50=move || portfolio_quality.get() == quality
                                                            >
                                                                <input
                                                                    type="radio"
                                                                    name="portfolio_quality"
                                                                    class="sr-only"
                                                                    checked=move || portfolio_quality.get() == quality
                                                                    on:change=move |_| {
                                                                        set_portfolio_quality.set(quality.to_string())
                                                                    }
                                                                />
                                                                {quality}
                                                            </label>
                                                        }
                                                    })
                                                    .collect_view()}
                                            </div>
                                        </div>
                                        <div>
                                            <label
                                                class="mb-1 block text-sm font-medium text-gray-700"
                                                for="review_notes"
                                            >
                                                "Review Notes"
                                            </label>
                                            <textarea
                                                id="review_notes"
                                                rows="3"
                                                class=FIELD
                                                placeholder="Add your review notes here..."
                                                prop:value=move || notes.get()
                                                on:input=move |ev| set_notes.set(event_target_value(&ev))
                                            ></textarea>
                                        </div>
                                        <div>
                                            <p class="mb-2 text-sm font-medium text-gray-700">"Decision"</p>
                                            <div class="space-y-2">
                                                <label class="flex cursor-pointer items-center gap-2 text-sm text-gray-900">
                                                    <input
                                                        type="radio"
                                                        name="decision"
                                                        class="h-4 w-4 text-green-600 focus:ring-green-500"
                                                        checked=move || {
                                                            decision.get() == Some(ReviewDecision::Approve)
                                                        }
                                                        on:change=move |_| {
                                                            decision.set(Some(ReviewDecision::Approve))
                                                        }
                                                    />
                                                    "Approve & Send to Client"
                                                </label>
                                                <label class="flex cursor-pointer items-center gap-2 text-sm text-gray-900">
                                                    <input
                                                        type="radio"
                                                        name="decision"
                                                        class="h-4 w-4 text-red-600 focus:ring-red-500"
                                                        checked=move || {
                                                            decision.get() == Some(ReviewDecision::Reject)
                                                        }
                                                        on:change=move |_| {
                                                            decision.set(Some(ReviewDecision::Reject))
                                                        }
                                                    />
                                                    "Reject"
                                                </label>
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
                                        <div class="flex flex-col-reverse gap-3 border-t border-gray-200 pt-4 sm:flex-row sm:justify-end">
                                            <button
                                                type="button"
                                                class="rounded-lg border border-gray-300 bg-white px-5 py-2.5 text-sm font-medium text-gray-700 hover:bg-gray-50 focus:ring-4 focus:ring-gray-100"
                                                on:click=move |_| selected.set(None)
                                            >
                                                "Cancel"
                                            </button>
                                            <Button
                                                button_type="submit"
                                                disabled=Signal::derive(move || {
                                                    review_action.pending().get()
                                                        || decision.get().is_none()
                                                })
                                            >
                                                {move || {
                                                    if review_action.pending().get() {
                                                        "Submitting..."
                                                    } else {
                                                        "Submit Review"
                                                    }
                                                }}
                                            </Button>
                                        </div>
                                    </div>
                                </form>
                            </div>
                        </div>
                    }
                })
        }}
    }
}
