//! Shared frontend utilities for API access, configuration, errors, and build
//! metadata. Centralizing these helpers keeps network behavior consistent and
//! avoids duplicated logic in routes and features. The utilities do not hold
//! tokens themselves; callers pass bearer tokens per request and must avoid
//! logging credential material.

pub(crate) mod api;
pub(crate) mod build_info;
pub(crate) mod config;
pub(crate) mod errors;

pub(crate) use api::{
    DataEnvelope, build_query, delete_with_auth, get_json, get_json_with_auth,
    patch_json_with_auth, post_empty, post_json_response, post_json_with_auth,
    post_json_with_auth_response, put_json_with_auth_response,
};
pub(crate) use errors::AppError;
