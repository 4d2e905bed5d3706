//! Advertisement feature: listing with filters, the client-side CRUD used by
//! the client dashboard, and the public landing-page teasers.

pub(crate) mod client;
pub(crate) mod types;
