//! Domain-level frontend features and their shared logic. Routes import these
//! modules to keep view code focused while keeping session handling and API
//! calls in dedicated feature areas.

pub(crate) mod admin;
pub(crate) mod ads;
pub(crate) mod applications;
pub(crate) mod auth;
