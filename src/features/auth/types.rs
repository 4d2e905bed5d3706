//! Account and session types shared by login, registration, and guards. The
//! wire format is the marketplace API's camelCase JSON; older records expose
//! the subject id as `_id`, so both spellings are accepted.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Closed set of account roles. Role strings outside this set are rejected at
/// deserialization time rather than compared ad hoc in view code.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Client,
    Agency,
    Employee,
    Admin,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Client => "client",
            Role::Agency => "agency",
            Role::Employee => "employee",
            Role::Admin => "admin",
        }
    }

    /// Landing route for a freshly signed-in account of this role.
    pub fn home_path(self) -> &'static str {
        match self {
            Role::Client => "/client/dashboard",
            Role::Agency => "/agency/dashboard",
            Role::Employee => "/employee/dashboard",
            Role::Admin => "/admin",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

/// Account identity as returned by login endpoints and persisted between
/// visits. Contains no secrets; the bearer token travels separately.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserIdentity {
    #[serde(alias = "_id")]
    pub id: String,
    #[serde(default)]
    pub fullname: String,
    #[serde(default)]
    pub email: String,
    pub role: Role,
    #[serde(default)]
    pub is_approved: bool,
}

/// In-memory session: a validated identity plus its bearer token.
#[derive(Clone, Debug, PartialEq)]
pub struct UserSession {
    pub identity: UserIdentity,
    pub token: String,
}

impl UserSession {
    pub fn role(&self) -> Role {
        self.identity.role
    }
}

/// Login request shared by the general, admin, and employee login endpoints.
/// Must never be logged.
#[derive(Clone, Debug, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Login response shared by every login surface: one identity, one token.
#[derive(Clone, Debug, Deserialize)]
pub struct LoginResponse {
    pub user: UserIdentity,
    pub token: String,
}

/// Client account registration payload. Must never be logged.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientRegisterRequest {
    pub fullname: String,
    pub email: String,
    pub company: String,
    pub phone: String,
    pub company_address: String,
    pub password: String,
}

/// Agency account registration payload. Must never be logged.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AgencyRegisterRequest {
    pub fullname: String,
    pub email: String,
    pub agency_name: String,
    pub phone: String,
    pub agency_address: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub agency_website: Option<String>,
    pub password: String,
}

/// Registration acknowledgement; the server message is shown verbatim.
#[derive(Clone, Debug, Deserialize)]
pub struct RegisterResponse {
    #[serde(default)]
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Role::Agency).unwrap(), "\"agency\"");
        assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), "\"admin\"");
    }

    #[test]
    fn role_rejects_unknown_values() {
        assert!(serde_json::from_str::<Role>("\"superuser\"").is_err());
        assert!(serde_json::from_str::<Role>("\"Client\"").is_err());
    }

    #[test]
    fn identity_accepts_both_subject_id_fields() {
        let modern: UserIdentity = serde_json::from_str(
            r#"{"id":"u-1","fullname":"Ada","email":"ada@acme.io","role":"client","isApproved":true}"#,
        )
        .unwrap();
        assert_eq!(modern.id, "u-1");
        assert!(modern.is_approved);

        let legacy: UserIdentity =
            serde_json::from_str(r#"{"_id":"507f1f77bcf86cd799439011","role":"agency"}"#).unwrap();
        assert_eq!(legacy.id, "507f1f77bcf86cd799439011");
        assert_eq!(legacy.role, Role::Agency);
    }

    #[test]
    fn identity_defaults_approval_to_false() {
        let identity: UserIdentity =
            serde_json::from_str(r#"{"id":"u-2","role":"client"}"#).unwrap();
        assert!(!identity.is_approved);
        assert!(identity.fullname.is_empty());
    }

    #[test]
    fn identity_with_unknown_role_fails_to_parse() {
        let result =
            serde_json::from_str::<UserIdentity>(r#"{"id":"u-3","role":"moderator"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn register_payloads_use_camel_case_keys() {
        let request = ClientRegisterRequest {
            fullname: "Ada".to_string(),
            email: "ada@acme.io".to_string(),
            company: "Acme".to_string(),
            phone: "9876543210".to_string(),
            company_address: "12 Main St".to_string(),
            password: "secret1".to_string(),
        };
        let json = serde_json::to_string(&request).unwrap();
        assert!(json.contains("\"companyAddress\""));

        let request = AgencyRegisterRequest {
            fullname: "Bea".to_string(),
            email: "bea@pixel.io".to_string(),
            agency_name: "Pixel".to_string(),
            phone: "8876543210".to_string(),
            agency_address: "4 High St".to_string(),
            agency_website: None,
            password: "secret1".to_string(),
        };
        let json = serde_json::to_string(&request).unwrap();
        assert!(json.contains("\"agencyName\""));
        assert!(!json.contains("agencyWebsite"));
    }

    #[test]
    fn role_home_paths_are_distinct() {
        let homes = [
            Role::Client.home_path(),
            Role::Agency.home_path(),
            Role::Employee.home_path(),
            Role::Admin.home_path(),
        ];
        for (index, home) in homes.iter().enumerate() {
            assert!(home.starts_with('/'));
            assert!(!homes[index + 1..].contains(home));
        }
    }
}
