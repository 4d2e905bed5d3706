mod agency;
mod client;

pub(crate) use agency::AgencyRegisterPage;
pub(crate) use client::ClientRegisterPage;

/// Shared input styling for the registration forms.
pub(super) const FIELD_CLASS: &str = "bg-gray-50 border border-gray-300 text-gray-900 text-sm rounded-lg focus:ring-purple-500 focus:border-purple-500 block w-full p-2.5";
