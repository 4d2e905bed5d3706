//! Client wrappers for the account API endpoints. Every login surface shares
//! one request and response contract; these helpers centralize the paths and
//! keep credential payloads out of route code. Never log request bodies here.

use crate::{
    app_lib::{AppError, post_empty, post_json_response},
    features::auth::types::{
        AgencyRegisterRequest, ClientRegisterRequest, LoginRequest, LoginResponse,
        RegisterResponse,
    },
};

/// Signs in a client or agency account.
pub async fn login(request: &LoginRequest) -> Result<LoginResponse, AppError> {
    post_json_response("/auth/login", request).await
}

/// Signs in an admin account. Same contract as the general login.
pub async fn admin_login(request: &LoginRequest) -> Result<LoginResponse, AppError> {
    post_json_response("/admin/login", request).await
}

/// Signs in an employee account. Same contract as the general login.
pub async fn employee_login(request: &LoginRequest) -> Result<LoginResponse, AppError> {
    post_json_response("/employee/login", request).await
}

/// Invalidates the server-side session. Callers treat this as best-effort and
/// clear local state regardless of the outcome.
pub async fn logout() -> Result<(), AppError> {
    post_empty("/auth/logout").await
}

/// Registers a client account; the account starts unapproved.
pub async fn register_client(
    request: &ClientRegisterRequest,
) -> Result<RegisterResponse, AppError> {
    post_json_response("/client/register", request).await
}

/// Registers an agency account; the account starts unapproved.
pub async fn register_agency(
    request: &AgencyRegisterRequest,
) -> Result<RegisterResponse, AppError> {
    post_json_response("/agency/register", request).await
}
