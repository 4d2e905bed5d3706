//! Application root. Session state is provided above the router so every
//! route, guard and link sees the same auth context.

use crate::features::auth::state::AuthProvider;
use crate::routes::AppRoutes;
use leptos::prelude::*;
use leptos_router::components::Router;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <AuthProvider>
            <Router>
                <AppRoutes />
            </Router>
        </AuthProvider>
    }
}
