//! Admin console types: platform totals and the paginated account lists used
//! to approve or reject registrations.

use serde::{Deserialize, Serialize};

use crate::features::auth::types::Role;

/// Platform totals for the admin analytics cards.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsSummary {
    #[serde(default)]
    pub total_clients: u32,
    #[serde(default)]
    pub total_agencies: u32,
    #[serde(default)]
    pub total_advertisements: u32,
    #[serde(default)]
    pub total_applications: u32,
    #[serde(default)]
    pub pending_approvals: u32,
}

/// One client or agency account row in the admin lists.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountSummary {
    #[serde(alias = "_id")]
    pub id: String,
    #[serde(default)]
    pub fullname: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub role: Option<Role>,
    #[serde(default)]
    pub company_name: Option<String>,
    #[serde(default)]
    pub agency_name: Option<String>,
    #[serde(default)]
    pub is_approved: bool,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl AccountSummary {
    /// Organisation name with the bare contact name as fallback.
    pub fn display_name(&self) -> &str {
        self.company_name
            .as_deref()
            .or(self.agency_name.as_deref())
            .filter(|name| !name.is_empty())
            .unwrap_or(self.fullname.as_str())
    }
}

/// Envelope for `GET /admin/clients` and `GET /admin/agencies`. The account
/// array key differs per endpoint, so both spellings are accepted.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountPage {
    #[serde(default, alias = "clients", alias = "agencies", alias = "users")]
    pub accounts: Vec<AccountSummary>,
    #[serde(default = "default_page")]
    pub page: u32,
    #[serde(default = "default_page")]
    pub total_pages: u32,
    #[serde(default)]
    pub total: u32,
}

fn default_page() -> u32 {
    1
}

/// Verdict sent by the approve / reject endpoint.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ApprovalAction {
    Approve,
    Reject,
}

/// Payload for `PATCH /admin/{clients|agencies}/{id}/approve`.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct ApprovalRequest {
    pub action: ApprovalAction,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn analytics_defaults_missing_counters_to_zero() {
        let summary: AnalyticsSummary =
            serde_json::from_str(r#"{"totalClients": 12, "pendingApprovals": 3}"#).unwrap();
        assert_eq!(summary.total_clients, 12);
        assert_eq!(summary.pending_approvals, 3);
        assert_eq!(summary.total_advertisements, 0);
    }

    #[test]
    fn account_page_accepts_endpoint_specific_array_keys() {
        let clients: AccountPage = serde_json::from_str(
            r#"{"clients": [{"_id": "c-1", "fullname": "Ada", "companyName": "Lovelace Ltd"}],
                "page": 2, "totalPages": 5, "total": 41}"#,
        )
        .unwrap();
        assert_eq!(clients.accounts.len(), 1);
        assert_eq!(clients.accounts[0].display_name(), "Lovelace Ltd");
        assert_eq!(clients.page, 2);
        assert_eq!(clients.total_pages, 5);

        let agencies: AccountPage =
            serde_json::from_str(r#"{"agencies": [{"id": "a-1", "agencyName": "Bright"}]}"#)
                .unwrap();
        assert_eq!(agencies.accounts[0].display_name(), "Bright");
        assert_eq!(agencies.page, 1);
    }

    #[test]
    fn display_name_falls_back_to_fullname() {
        let account: AccountSummary =
            serde_json::from_str(r#"{"id": "c-2", "fullname": "Ben Okafor", "companyName": ""}"#)
                .unwrap();
        assert_eq!(account.display_name(), "Ben Okafor");
        assert!(!account.is_approved);
    }

    #[test]
    fn approval_request_serializes_action_lowercase() {
        let request = ApprovalRequest {
            action: ApprovalAction::Reject,
        };
        assert_eq!(
            serde_json::to_string(&request).unwrap(),
            r#"{"action":"reject"}"#
        );
    }
}
