//! Account feature: session persistence and hydration, the shared login
//! contract, registration, and route guarding. It keeps authentication logic
//! out of the UI and must avoid logging credentials or token material.
//!
//! Flow overview: registration creates an unapproved account; login (general,
//! admin, or employee surface) returns one identity-plus-token contract which
//! the session context persists under two `localStorage` keys; the guard
//! component gates role-scoped routes until hydration settles.

pub(crate) mod client;
pub(crate) mod guards;
pub(crate) mod state;
pub(crate) mod storage;
pub(crate) mod types;
pub(crate) mod validate;

pub(crate) use guards::RouteGuard;
pub(crate) use types::Role;
