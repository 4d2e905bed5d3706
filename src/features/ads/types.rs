//! Advertisement types for the marketplace wire format (camelCase JSON, with
//! the legacy `_id` spelling accepted on reads).

use serde::{Deserialize, Serialize};
use std::fmt;

/// Categories offered by the ad creation and filter dropdowns.
pub const CATEGORIES: [&str; 12] = [
    "fashion",
    "electronics",
    "health",
    "food",
    "travel",
    "beauty",
    "home",
    "sports",
    "education",
    "finance",
    "automotive",
    "other",
];

/// Uppercases the first letter of a category slug for display.
pub fn category_label(category: &str) -> String {
    let mut chars = category.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Lifecycle of an advertisement.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AdStatus {
    #[default]
    Draft,
    Active,
    Paused,
    Completed,
}

impl AdStatus {
    /// Every status, in lifecycle order. Used to build filter and form
    /// dropdowns from one source.
    pub const ALL: [AdStatus; 4] = [
        AdStatus::Draft,
        AdStatus::Active,
        AdStatus::Paused,
        AdStatus::Completed,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            AdStatus::Draft => "draft",
            AdStatus::Active => "active",
            AdStatus::Paused => "paused",
            AdStatus::Completed => "completed",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            AdStatus::Draft => "Draft",
            AdStatus::Active => "Active",
            AdStatus::Paused => "Paused",
            AdStatus::Completed => "Completed",
        }
    }
}

impl fmt::Display for AdStatus {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Advertisement {
    #[serde(alias = "_id")]
    pub id: String,
    pub product_name: String,
    #[serde(default)]
    pub product_description: String,
    #[serde(default)]
    pub target_audience: Option<String>,
    #[serde(default)]
    pub budget: f64,
    #[serde(default)]
    pub campaign_duration: Option<String>,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub key_features: Option<String>,
    #[serde(default)]
    pub status: AdStatus,
    #[serde(default)]
    pub interested_count: u32,
    #[serde(default)]
    pub has_applied: bool,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Payload for creating or updating an advertisement.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdDraft {
    pub product_name: String,
    pub product_description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_audience: Option<String>,
    pub budget: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub campaign_duration: Option<String>,
    pub category: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_features: Option<String>,
    pub status: AdStatus,
}

/// In-browser listing filters. The API returns the full role-scoped list and
/// the dashboards narrow it locally; empty fields mean "no constraint".
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AdFilters {
    pub search: String,
    pub category: String,
    pub status: String,
    pub min_budget: String,
    pub max_budget: String,
}

impl AdFilters {
    /// Whether an advertisement passes every active filter. Budget bounds
    /// that fail to parse as numbers are ignored.
    pub fn matches(&self, ad: &Advertisement) -> bool {
        let search = self.search.trim().to_lowercase();
        if !search.is_empty()
            && !ad.product_name.to_lowercase().contains(&search)
            && !ad.product_description.to_lowercase().contains(&search)
        {
            return false;
        }

        if !self.category.is_empty() && ad.category != self.category {
            return false;
        }

        if !self.status.is_empty() && ad.status.as_str() != self.status {
            return false;
        }

        if let Ok(min) = self.min_budget.trim().parse::<f64>() {
            if ad.budget < min {
                return false;
            }
        }
        if let Ok(max) = self.max_budget.trim().parse::<f64>() {
            if ad.budget > max {
                return false;
            }
        }

        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_label_uppercases_first_letter_only() {
        assert_eq!(category_label("fashion"), "Fashion");
        assert_eq!(category_label("other"), "Other");
        assert_eq!(category_label(""), "");
    }

    #[test]
    fn ad_status_round_trips_lowercase() {
        assert_eq!(serde_json::to_string(&AdStatus::Paused).unwrap(), "\"paused\"");
        let status: AdStatus = serde_json::from_str("\"completed\"").unwrap();
        assert_eq!(status, AdStatus::Completed);
    }

    #[test]
    fn advertisement_tolerates_sparse_legacy_records() {
        let ad: Advertisement = serde_json::from_str(
            r#"{"_id":"ad-1","productName":"Summer Drop","budget":1200.5}"#,
        )
        .unwrap();
        assert_eq!(ad.id, "ad-1");
        assert_eq!(ad.product_name, "Summer Drop");
        assert_eq!(ad.status, AdStatus::Draft);
        assert_eq!(ad.interested_count, 0);
        assert!(!ad.has_applied);
    }

    #[test]
    fn ad_draft_omits_empty_optionals() {
        let draft = AdDraft {
            product_name: "Summer Drop".to_string(),
            product_description: "Beachwear launch".to_string(),
            target_audience: None,
            budget: 1500.0,
            campaign_duration: None,
            category: "fashion".to_string(),
            key_features: None,
            status: AdStatus::Active,
        };
        let json = serde_json::to_string(&draft).unwrap();
        assert!(json.contains("\"productName\""));
        assert!(!json.contains("targetAudience"));
        assert!(!json.contains("campaignDuration"));
    }

    fn sample_ad() -> Advertisement {
        serde_json::from_str(
            r#"{
                "id": "ad-7",
                "productName": "Summer Sale",
                "productDescription": "Beachwear clearance campaign",
                "budget": 800.0,
                "category": "fashion",
                "status": "active"
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn filters_match_name_or_description_case_insensitively() {
        let ad = sample_ad();
        let mut filters = AdFilters::default();
        assert!(filters.matches(&ad));

        filters.search = "SUMMER".to_string();
        assert!(filters.matches(&ad));
        filters.search = "beachwear".to_string();
        assert!(filters.matches(&ad));
        filters.search = "winter".to_string();
        assert!(!filters.matches(&ad));
    }

    #[test]
    fn filters_apply_category_status_and_budget_bounds() {
        let ad = sample_ad();

        let mut filters = AdFilters {
            category: "fashion".to_string(),
            status: "active".to_string(),
            min_budget: "500".to_string(),
            max_budget: "1000".to_string(),
            ..AdFilters::default()
        };
        assert!(filters.matches(&ad));

        filters.category = "travel".to_string();
        assert!(!filters.matches(&ad));
        filters.category = "fashion".to_string();

        filters.status = "draft".to_string();
        assert!(!filters.matches(&ad));
        filters.status = String::new();

        filters.min_budget = "900".to_string();
        assert!(!filters.matches(&ad));
        filters.min_budget = String::new();

        filters.max_budget = "700".to_string();
        assert!(!filters.matches(&ad));
    }

    #[test]
    fn unparsable_budget_bounds_are_ignored() {
        let ad = sample_ad();
        let filters = AdFilters {
            min_budget: "cheap".to_string(),
            max_budget: " ".to_string(),
            ..AdFilters::default()
        };
        assert!(filters.matches(&ad));
    }
}
