mod admin_login;
mod dashboard;
mod employee_login;
mod get_started;
mod landing;
mod login;
mod not_found;
mod pending_approval;
mod register;

pub(crate) use admin_login::AdminLoginPage;
pub(crate) use dashboard::{
    AdminDashboardPage, AgencyDashboardPage, ClientDashboardPage, EmployeeDashboardPage,
};
pub(crate) use employee_login::EmployeeLoginPage;
pub(crate) use get_started::GetStartedPage;
pub(crate) use landing::LandingPage;
pub(crate) use login::LoginPage;
pub(crate) use not_found::NotFoundPage;
pub(crate) use pending_approval::PendingApprovalPage;
pub(crate) use register::{AgencyRegisterPage, ClientRegisterPage};

use crate::features::auth::{RouteGuard, Role};
use leptos::prelude::*;
use leptos_router::components::{Route, Routes};
use leptos_router::path;

/// Canonical in-app paths, shared by links, guards and login redirects.
pub(crate) mod paths {
    pub const HOME: &str = "/";
    pub const LOGIN: &str = "/login";
    pub const GET_STARTED: &str = "/get-started";
    pub const CLIENT_REGISTER: &str = "/client/register";
    pub const AGENCY_REGISTER: &str = "/agency/register";
    pub const ADMIN_LOGIN: &str = "/admin/login";
    pub const EMPLOYEE_LOGIN: &str = "/employee/login";
    pub const PENDING_APPROVAL: &str = "/pending-approval";
    pub const CLIENT_DASHBOARD: &str = "/client/dashboard";
    pub const AGENCY_DASHBOARD: &str = "/agency/dashboard";
    pub const EMPLOYEE_DASHBOARD: &str = "/employee/dashboard";
    pub const ADMIN_DASHBOARD: &str = "/admin";
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Routes fallback=|| view! { <NotFoundPage /> }>
            <Route path=path!("/") view=LandingPage />
            <Route path=path!("/login") view=LoginPage />
            <Route path=path!("/get-started") view=GetStartedPage />
            <Route path=path!("/register") view=GetStartedPage />
            <Route path=path!("/signup") view=GetStartedPage />
            <Route path=path!("/client/register") view=ClientRegisterPage />
            <Route path=path!("/agency/register") view=AgencyRegisterPage />
            <Route path=path!("/admin/login") view=AdminLoginPage />
            <Route path=path!("/employee/login") view=EmployeeLoginPage />
            <Route path=path!("/pending-approval") view=PendingApprovalPage />
            <Route path=path!("/client/dashboard") view=GuardedClientDashboard />
            <Route path=path!("/client") view=GuardedClientDashboard />
            <Route path=path!("/agency/dashboard") view=GuardedAgencyDashboard />
            <Route path=path!("/agency") view=GuardedAgencyDashboard />
            <Route path=path!("/employee/dashboard") view=GuardedEmployeeDashboard />
            <Route path=path!("/admin") view=GuardedAdminDashboard />
            <Route path=path!("/*any") view=NotFoundPage />
        </Routes>
    }
}

#[component]
fn GuardedClientDashboard() -> impl IntoView {
    view! {
        <RouteGuard required_role=Role::Client>
            <ClientDashboardPage />
        </RouteGuard>
    }
}

#[component]
fn GuardedAgencyDashboard() -> impl IntoView {
    view! {
        <RouteGuard required_role=Role::Agency>
            <AgencyDashboardPage />
        </RouteGuard>
    }
}

#[component]
fn GuardedEmployeeDashboard() -> impl IntoView {
    view! {
        <RouteGuard required_role=Role::Employee>
            <EmployeeDashboardPage />
        </RouteGuard>
    }
}

#[component]
fn GuardedAdminDashboard() -> impl IntoView {
    view! {
        <RouteGuard required_role=Role::Admin>
            <AdminDashboardPage />
        </RouteGuard>
    }
}
