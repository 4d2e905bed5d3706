//! Role-scoped dashboards. Each page assumes its route guard already ran and
//! the session carries the matching role.

mod admin;
mod agency;
mod client;
mod employee;

pub(crate) use admin::AdminDashboardPage;
pub(crate) use agency::AgencyDashboardPage;
pub(crate) use client::ClientDashboardPage;
pub(crate) use employee::EmployeeDashboardPage;
