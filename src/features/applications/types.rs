//! Campaign application types shared by the agency, client and employee
//! dashboards. The API nests a summary of the advertisement and of the
//! applying agency inside each application record.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Review state of an application, advanced by clients and employees.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApplicationStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

impl ApplicationStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            ApplicationStatus::Pending => "pending",
            ApplicationStatus::Approved => "approved",
            ApplicationStatus::Rejected => "rejected",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ApplicationStatus::Pending => "Pending",
            ApplicationStatus::Approved => "Approved",
            ApplicationStatus::Rejected => "Rejected",
        }
    }
}

impl fmt::Display for ApplicationStatus {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

/// Advertisement summary embedded in an application record.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdSummary {
    #[serde(default, alias = "_id")]
    pub id: String,
    #[serde(default)]
    pub product_name: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub budget: f64,
}

/// Agency summary embedded in an application record.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgencySummary {
    #[serde(default, alias = "_id")]
    pub id: String,
    #[serde(default)]
    pub fullname: String,
    #[serde(default)]
    pub agency_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

/// An agency's application to run a campaign for an advertisement.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdApplication {
    #[serde(alias = "_id")]
    pub id: String,
    #[serde(default)]
    pub advertisement: Option<AdSummary>,
    #[serde(default)]
    pub agency: Option<AgencySummary>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub proposal: Option<String>,
    #[serde(default)]
    pub budget: Option<f64>,
    #[serde(default, alias = "estimatedTimeline")]
    pub timeline: Option<String>,
    #[serde(default)]
    pub status: ApplicationStatus,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl AdApplication {
    /// Product name of the advertised campaign, if the summary survived
    /// deletion of the underlying ad.
    pub fn product_name(&self) -> &str {
        self.advertisement
            .as_ref()
            .map_or("(removed advertisement)", |ad| ad.product_name.as_str())
    }

    /// Display name for the applying agency.
    pub fn agency_name(&self) -> &str {
        match &self.agency {
            Some(agency) => agency
                .agency_name
                .as_deref()
                .filter(|name| !name.is_empty())
                .unwrap_or(agency.fullname.as_str()),
            None => "(unknown agency)",
        }
    }
}

/// Payload for `POST /applications`; `advertisement` carries the ad id.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateApplicationRequest {
    pub advertisement: String,
    pub message: String,
    pub proposal: String,
    pub budget: f64,
    pub estimated_timeline: String,
}

/// Payload for `PATCH /applications/{id}`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct UpdateApplicationStatusRequest {
    pub status: ApplicationStatus,
}

/// Outcome selected on the employee review form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReviewDecision {
    Approve,
    Reject,
}

/// Quality scale used for the proposal and portfolio ratings.
pub const REVIEW_QUALITIES: [&str; 4] = ["poor", "fair", "good", "excellent"];

/// Payload for `POST /employee/applications/{id}/review`.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewRequest {
    pub budget_approved: bool,
    pub proposal_quality: String,
    pub portfolio_quality: String,
    pub notes: String,
    pub decision: ReviewDecision,
}

/// Counters shown on the employee dashboard header.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeStats {
    #[serde(default)]
    pub total_pending: u32,
    #[serde(default)]
    pub total_reviewed: u32,
}

/// Envelope returned by `GET /employee/dashboard`.
#[derive(Clone, Copy, Debug, Default, Deserialize)]
pub struct EmployeeDashboardResponse {
    #[serde(default)]
    pub stats: EmployeeStats,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn application_accepts_nested_summaries_and_legacy_ids() {
        let application: AdApplication = serde_json::from_str(
            r#"{
                "_id": "app-1",
                "advertisement": {"_id": "ad-9", "productName": "Solar lamp", "budget": 1500},
                "agency": {"_id": "agency-3", "fullname": "Maya Ortiz", "agencyName": "Bright Media"},
                "message": "We would love to run this",
                "budget": 300.0,
                "estimatedTimeline": "4 weeks",
                "status": "pending",
                "createdAt": "2024-06-01T10:00:00Z"
            }"#,
        )
        .unwrap();

        assert_eq!(application.id, "app-1");
        assert_eq!(application.product_name(), "Solar lamp");
        assert_eq!(application.agency_name(), "Bright Media");
        assert_eq!(application.timeline.as_deref(), Some("4 weeks"));
        assert_eq!(application.status, ApplicationStatus::Pending);
    }

    #[test]
    fn application_tolerates_missing_summaries() {
        let application: AdApplication =
            serde_json::from_str(r#"{"id": "app-2", "status": "approved"}"#).unwrap();

        assert_eq!(application.product_name(), "(removed advertisement)");
        assert_eq!(application.agency_name(), "(unknown agency)");
        assert_eq!(application.status, ApplicationStatus::Approved);
    }

    #[test]
    fn agency_name_falls_back_to_contact_fullname() {
        let application: AdApplication = serde_json::from_str(
            r#"{"id": "app-3", "agency": {"id": "a-1", "fullname": "Maya Ortiz", "agencyName": ""}}"#,
        )
        .unwrap();

        assert_eq!(application.agency_name(), "Maya Ortiz");
    }

    #[test]
    fn status_rejects_unknown_values() {
        assert!(serde_json::from_str::<ApplicationStatus>(r#""archived""#).is_err());
        assert!(serde_json::from_str::<ApplicationStatus>(r#""Pending""#).is_err());
    }

    #[test]
    fn create_request_uses_wire_field_names() {
        let request = CreateApplicationRequest {
            advertisement: "ad-9".into(),
            message: "Interested".into(),
            proposal: "Full campaign".into(),
            budget: 300.0,
            estimated_timeline: "4 weeks".into(),
        };
        let value = serde_json::to_value(&request).unwrap();

        assert_eq!(value["advertisement"], "ad-9");
        assert_eq!(value["estimatedTimeline"], "4 weeks");
        assert!(value.get("estimated_timeline").is_none());
    }

    #[test]
    fn review_request_serializes_decision_lowercase() {
        let request = ReviewRequest {
            budget_approved: true,
            proposal_quality: "good".into(),
            portfolio_quality: "excellent".into(),
            notes: String::new(),
            decision: ReviewDecision::Approve,
        };
        let value = serde_json::to_value(&request).unwrap();

        assert_eq!(value["budgetApproved"], true);
        assert_eq!(value["decision"], "approve");
    }

    #[test]
    fn dashboard_envelope_defaults_missing_counters() {
        let response: EmployeeDashboardResponse =
            serde_json::from_str(r#"{"stats": {"totalPending": 4}}"#).unwrap();
        assert_eq!(response.stats.total_pending, 4);
        assert_eq!(response.stats.total_reviewed, 0);

        let empty: EmployeeDashboardResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(empty.stats.total_pending, 0);
    }
}
