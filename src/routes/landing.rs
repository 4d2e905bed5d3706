//! Public landing page: hero, feature grid, how-it-works, stats band, live
//! public ads and a closing call to action.

use crate::components::{Alert, AlertKind, AppShell, Spinner};
use crate::features::ads::client;
use crate::features::auth::state::use_auth;
use crate::features::auth::types::Role;
use crate::routes::paths;
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <AppShell>
            <HeroSection />
            <FeaturesSection />
            <HowItWorksSection />
            <StatsSection />
            <PublicAdsSection />
            <CtaSection />
        </AppShell>
    }
}

#[component]
fn HeroSection() -> impl IntoView {
    let auth = use_auth();
    let post_project_href = move || {
        auth.session.with(|session| match session {
            Some(session) if session.role() == Role::Client => paths::CLIENT_DASHBOARD,
            _ => paths::LOGIN,
        })
    };
    let browse_projects_href = move || {
        auth.session.with(|session| match session {
            Some(session) if session.role() == Role::Agency => paths::AGENCY_DASHBOARD,
            _ => paths::LOGIN,
        })
    };

    view! {
        <section class="text-center py-20 bg-gray-50 px-4">
            <div class="inline-flex items-center px-3 py-1 mb-4 text-sm font-medium text-purple-700 bg-purple-100 rounded-full">
                "Connecting Brands with Creative Agencies"
            </div>

            <h1 class="text-4xl md:text-5xl font-extrabold text-gray-900">
                "The Future of "
                <span class="text-purple-600">"Advertising Partnerships"</span>
            </h1>

            <p class="mt-6 text-lg text-gray-600 max-w-2xl mx-auto">
                "AdMatchHub is the premier platform where companies find the perfect \
                 advertising agencies for their campaigns through transparent bidding \
                 and live collaboration."
            </p>

            <div class="mt-8 flex flex-col sm:flex-row justify-center gap-4 items-center">
                <a
                    href=post_project_href
                    class="w-full sm:w-auto bg-purple-600 hover:bg-purple-700 text-white px-6 py-3 rounded font-medium transition"
                >
                    "Post Your Project →"
                </a>
                <a
                    href=browse_projects_href
                    class="w-full sm:w-auto bg-white border border-gray-300 hover:bg-gray-100 text-gray-800 px-6 py-3 rounded font-medium transition"
                >
                    "Browse Projects"
                </a>
            </div>
        </section>
    }
}

const FEATURES: [(&str, &str); 6] = [
    (
        "Post Ad Requirements",
        "Companies can easily post their advertising needs with detailed specifications and budget ranges.",
    ),
    (
        "Connect with Agencies",
        "Agencies can browse projects, show interest, and participate in explanation sessions.",
    ),
    (
        "Transparent Bidding",
        "Fair bidding system with edit windows and clear selection criteria.",
    ),
    (
        "Secure Payments",
        "Protected commission system with escrow and automated payment processing.",
    ),
    (
        "Real-time Updates",
        "Live notifications for project updates, meetings, and bid results.",
    ),
    (
        "Performance Tracking",
        "Comprehensive analytics for both clients and agencies to track success.",
    ),
];

#[component]
fn FeaturesSection() -> impl IntoView {
    view! {
        <section class="py-16 px-4">
            <div class="max-w-6xl mx-auto text-center">
                <h2 class="text-4xl font-extrabold text-gray-900 tracking-tight">
                    "Everything you need to match"
                </h2>
                <div class="mt-10 grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-6 text-left">
                    {FEATURES
                        .into_iter()
                        .map(|(title, description)| {
                            view! {
                                <div class="bg-white rounded-lg shadow-sm p-6 hover:shadow-md transition">
                                    <h3 class="text-lg font-semibold text-gray-900">{title}</h3>
                                    <p class="mt-2 text-sm text-gray-600 leading-relaxed">
                                        {description}
                                    </p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

const STEPS: [(&str, &str, &str); 3] = [
    (
        "1",
        "Post Requirements",
        "Companies post their advertising needs with budget, timeline, and specifications.",
    ),
    (
        "2",
        "Agencies Bid",
        "Qualified agencies show interest, attend explanation sessions, and submit their bids.",
    ),
    (
        "3",
        "Perfect Match",
        "Companies select the best agency and collaborate to create amazing advertising campaigns.",
    ),
];

#[component]
fn HowItWorksSection() -> impl IntoView {
    view! {
        <section id="how-it-works" class="py-16 px-4 bg-gray-50">
            <div class="max-w-5xl mx-auto text-center">
                <h2 class="text-3xl md:text-4xl font-extrabold text-gray-900">
                    "How AdMatchHub Works"
                </h2>
                <div class="mt-10 grid grid-cols-1 md:grid-cols-3 gap-8">
                    {STEPS
                        .into_iter()
                        .map(|(number, title, description)| {
                            view! {
                                <div class="flex flex-col items-center">
                                    <div class="flex items-center justify-center h-12 w-12 rounded-full bg-purple-600 text-white text-xl font-bold">
                                        {number}
                                    </div>
                                    <h3 class="mt-4 text-xl font-semibold text-gray-900">{title}</h3>
                                    <p class="mt-2 text-gray-600 text-sm leading-relaxed">
                                        {description}
                                    </p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

const STATS: [(&str, &str); 4] = [
    ("250+", "Active Projects"),
    ("500+", "Registered Agencies"),
    ("1,200+", "Successful Matches"),
    ("$2.5M+", "Total Volume"),
];

#[component]
fn StatsSection() -> impl IntoView {
    view! {
        <section class="bg-gray-50 py-12 px-4">
            <div class="grid grid-cols-1 sm:grid-cols-2 md:grid-cols-4 gap-6 max-w-6xl mx-auto">
                {STATS
                    .into_iter()
                    .map(|(value, label)| {
                        view! {
                            <div class="bg-white rounded-lg shadow-sm p-6 text-center hover:shadow-md transition">
                                <h3 class="text-2xl font-bold text-gray-900">{value}</h3>
                                <p class="text-gray-500">{label}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
fn PublicAdsSection() -> impl IntoView {
    let ads = LocalResource::new(move || async move { client::list_public_ads().await });

    view! {
        <section class="py-12 bg-gray-50">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="mb-8 flex items-end justify-between">
                    <div>
                        <h2 class="text-2xl sm:text-3xl font-bold text-gray-900">
                            "Live Client Products"
                        </h2>
                        <p class="text-gray-600 mt-1">
                            "Discover campaigns from clients and start bidding."
                        </p>
                    </div>
                    <A
                        href={paths::GET_STARTED}
                        {..}
                        class="hidden sm:inline-flex bg-purple-600 text-white px-4 py-2 rounded-lg hover:bg-purple-700"
                    >
                        "Become an Agency"
                    </A>
                </div>

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
                                <div class="text-center text-gray-500 py-8">
                                    "No active campaigns yet. Check back soon."
                                </div>
                            }
                                .into_any()
                        }
                        Some(Ok(list)) => {
                            view! {
                                <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-6">
                                    <For
                                        each=move || list.clone()
                                        key=|ad| ad.id.clone()
                                        children=|ad| {
                                            let budget = format!("${:.0}", ad.budget);
                                            view! {
                                                <div class="bg-white rounded-xl shadow hover:shadow-md transition-shadow p-6 flex flex-col">
                                                    <div class="flex-1">
                                                        <h3 class="text-lg font-semibold text-gray-900">
                                                            {ad.product_name.clone()}
                                                        </h3>
                                                        <p class="mt-1 text-sm text-gray-500">
                                                            {ad.product_description.clone()}
                                                        </p>
                                                        <div class="mt-3 text-sm text-gray-700">
                                                            <div class="flex items-center justify-between">
                                                                <span class="font-medium">"Budget"</span>
                                                                <span>{budget}</span>
                                                            </div>
                                                            <div class="flex items-center justify-between mt-1">
                                                                <span class="font-medium">"Category"</span>
                                                                <span class="text-gray-600 capitalize">
                                                                    {ad.category.clone()}
                                                                </span>
                                                            </div>
                                                        </div>
                                                    </div>
                                                    <div class="mt-6 flex items-center gap-3">
                                                        <A
                                                            href={paths::LOGIN}
                                                            {..}
                                                            class="flex-1 bg-purple-600 text-white px-4 py-2 rounded-lg hover:bg-purple-700 text-center"
                                                        >
                                                            "Bid Now"
                                                        </A>
                                                        <A
                                                            href={paths::GET_STARTED}
                                                            {..}
                                                            class="px-4 py-2 border border-gray-300 rounded-lg text-gray-700 hover:bg-gray-50"
                                                        >
                                                            "Register"
                                                        </A>
                                                    </div>
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
            </div>
        </section>
    }
}

#[component]
fn CtaSection() -> impl IntoView {
    view! {
        <section class="bg-gradient-to-b from-gray-50 to-white py-20 px-4 md:px-8">
            <div class="max-w-3xl mx-auto text-center">
                <h2 class="text-3xl md:text-4xl font-extrabold text-gray-900">
                    "Ready to find your perfect advertising partner?"
                </h2>
                <p class="mt-4 text-lg text-gray-600">
                    "Join thousands of companies and agencies already using "
                    <span class="font-medium text-purple-600">"AdMatchHub"</span>
                    " to create successful advertising campaigns."
                </p>

                <div class="mt-8 flex flex-col sm:flex-row justify-center gap-4">
                    <A
                        href={paths::GET_STARTED}
                        {..}
                        class="px-6 py-3 bg-gradient-to-r from-purple-500 to-indigo-500 text-white font-semibold rounded-xl shadow-md hover:opacity-90 transition"
                    >
                        "Get Started Today"
                    </A>
                    <a
                        href="#how-it-works"
                        class="px-6 py-3 border border-gray-300 text-gray-800 font-semibold rounded-xl hover:bg-gray-100 transition"
                    >
                        "Learn More"
                    </a>
                </div>
            </div>
        </section>
    }
}
