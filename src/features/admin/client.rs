//! Client helpers for the admin console endpoints.

use crate::{
    app_lib::{AppError, build_query, get_json_with_auth, patch_json_with_auth},
    features::admin::types::{
        AccountPage, AnalyticsSummary, ApprovalAction, ApprovalRequest,
    },
};

/// Fetches the platform totals for the analytics cards.
pub async fn fetch_analytics(token: &str) -> Result<AnalyticsSummary, AppError> {
    get_json_with_auth("/admin/analytics", token).await
}

/// Lists client accounts, one page at a time.
pub async fn list_clients(page: u32, limit: u32, token: &str) -> Result<AccountPage, AppError> {
    let path = format!("/admin/clients{}", page_query(page, limit));
    get_json_with_auth(&path, token).await
}

/// Lists agency accounts, one page at a time.
pub async fn list_agencies(page: u32, limit: u32, token: &str) -> Result<AccountPage, AppError> {
    let path = format!("/admin/agencies{}", page_query(page, limit));
    get_json_with_auth(&path, token).await
}

/// Approves or rejects a client registration.
pub async fn approve_client(
    id: &str,
    action: ApprovalAction,
    token: &str,
) -> Result<(), AppError> {
    approve_account("clients", id, action, token).await
}

/// Approves or rejects an agency registration.
pub async fn approve_agency(
    id: &str,
    action: ApprovalAction,
    token: &str,
) -> Result<(), AppError> {
    approve_account("agencies", id, action, token).await
}

async fn approve_account(
    kind: &str,
    id: &str,
    action: ApprovalAction,
    token: &str,
) -> Result<(), AppError> {
    let trimmed = id.trim();
    if trimmed.is_empty() {
        return Err(AppError::Config("Account id is required.".to_string()));
    }
    let request = ApprovalRequest { action };
    patch_json_with_auth(&format!("/admin/{kind}/{trimmed}/approve"), &request, token).await
}

fn page_query(page: u32, limit: u32) -> String {
    build_query(&[
        ("page", Some(page.max(1).to_string())),
        ("limit", Some(limit.clamp(1, 100).to_string())),
    ])
}

#[cfg(test)]
mod tests {
    use super::page_query;

    #[test]
    fn page_query_clamps_out_of_range_values() {
        assert_eq!(page_query(0, 0), "?page=1&limit=1");
        assert_eq!(page_query(3, 10), "?page=3&limit=10");
        assert_eq!(page_query(2, 500), "?page=2&limit=100");
    }
}
