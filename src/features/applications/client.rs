//! Client helpers for campaign application endpoints, including the employee
//! screening queue that feeds approved applications to clients. The
//! application router wraps list payloads in a `data` envelope; the employee
//! router returns bare arrays.

use crate::{
    app_lib::{
        AppError, DataEnvelope, get_json_with_auth, patch_json_with_auth, post_json_with_auth,
    },
    features::applications::types::{
        AdApplication, ApplicationStatus, CreateApplicationRequest, EmployeeDashboardResponse,
        EmployeeStats, ReviewRequest, UpdateApplicationStatusRequest,
    },
};

/// Submits an agency's application for an advertisement.
pub async fn create_application(
    request: &CreateApplicationRequest,
    token: &str,
) -> Result<(), AppError> {
    post_json_with_auth("/applications", request, token).await
}

/// Lists applications across all of the signed-in client's advertisements.
pub async fn list_for_client(token: &str) -> Result<Vec<AdApplication>, AppError> {
    let envelope: DataEnvelope<Vec<AdApplication>> =
        get_json_with_auth("/applications/client", token).await?;
    Ok(envelope.data)
}

/// Lists the signed-in agency's own applications.
pub async fn list_for_agency(token: &str) -> Result<Vec<AdApplication>, AppError> {
    let envelope: DataEnvelope<Vec<AdApplication>> =
        get_json_with_auth("/applications/agency", token).await?;
    Ok(envelope.data)
}

/// Moves an application to a new status on behalf of the owning client.
pub async fn update_status(
    id: &str,
    status: ApplicationStatus,
    token: &str,
) -> Result<(), AppError> {
    let trimmed = id.trim();
    if trimmed.is_empty() {
        return Err(AppError::Config("Application id is required.".to_string()));
    }
    let request = UpdateApplicationStatusRequest { status };
    patch_json_with_auth(&format!("/applications/{trimmed}"), &request, token).await
}

/// Lists applications waiting on an employee screening pass.
pub async fn list_pending_reviews(token: &str) -> Result<Vec<AdApplication>, AppError> {
    get_json_with_auth("/employee/applications/pending", token).await
}

/// Fetches the employee dashboard counters.
pub async fn fetch_employee_stats(token: &str) -> Result<EmployeeStats, AppError> {
    let response: EmployeeDashboardResponse = get_json_with_auth("/employee/dashboard", token).await?;
    Ok(response.stats)
}

/// Records an employee's review verdict for one application.
pub async fn submit_review(
    id: &str,
    review: &ReviewRequest,
    token: &str,
) -> Result<(), AppError> {
    let trimmed = id.trim();
    if trimmed.is_empty() {
        return Err(AppError::Config("Application id is required.".to_string()));
    }
    post_json_with_auth(&format!("/employee/applications/{trimmed}/review"), review, token).await
}
