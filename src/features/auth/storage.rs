//! Session persistence in `localStorage`. The identity is stored as JSON under
//! one key and the bearer token as a raw string under another; both must be
//! present and well formed for a session to survive a reload. Anything
//! corrupted or partial is discarded and cleared, never surfaced as an error.

use crate::features::auth::types::{UserIdentity, UserSession};

/// Key holding the signed-in account identity as JSON.
pub const IDENTITY_KEY: &str = "session-identity";
/// Key holding the raw bearer token.
pub const TOKEN_KEY: &str = "session-token";

/// Restores the persisted session, clearing leftovers that fail validation.
pub fn load_session() -> Option<UserSession> {
    let storage = local_storage()?;
    let identity = storage.get_item(IDENTITY_KEY).ok().flatten();
    let token = storage.get_item(TOKEN_KEY).ok().flatten();

    let had_leftovers = identity.is_some() || token.is_some();
    match parse_stored_session(identity.as_deref(), token.as_deref()) {
        Some(session) => Some(session),
        None => {
            if had_leftovers {
                log::warn!("discarding unreadable persisted session state");
                clear_session();
            }
            None
        }
    }
}

/// Persists both halves of the session. Write failures (private browsing,
/// quota) degrade to an in-memory-only session.
pub fn save_session(session: &UserSession) {
    let Some(storage) = local_storage() else {
        return;
    };
    match serde_json::to_string(&session.identity) {
        Ok(identity_json) => {
            if storage.set_item(IDENTITY_KEY, &identity_json).is_err()
                || storage.set_item(TOKEN_KEY, &session.token).is_err()
            {
                log::warn!("failed to persist session; it will not survive a reload");
            }
        }
        Err(err) => log::warn!("failed to encode session identity: {err}"),
    }
}

/// Removes both persisted keys.
pub fn clear_session() {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(IDENTITY_KEY);
        let _ = storage.remove_item(TOKEN_KEY);
    }
}

/// Validates raw persisted values into a session. A session needs parseable
/// identity JSON with a non-empty subject id (either historical spelling,
/// handled by the identity type) and a non-empty token.
pub fn parse_stored_session(
    identity_json: Option<&str>,
    token: Option<&str>,
) -> Option<UserSession> {
    let identity_json = identity_json?;
    let token = token?.trim();
    if token.is_empty() {
        return None;
    }

    let identity: UserIdentity = serde_json::from_str(identity_json).ok()?;
    if identity.id.trim().is_empty() {
        return None;
    }

    Some(UserSession {
        identity,
        token: token.to_string(),
    })
}

#[cfg(target_arch = "wasm32")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

#[cfg(not(target_arch = "wasm32"))]
fn local_storage() -> Option<web_sys::Storage> {
    None
}

#[cfg(test)]
mod tests {
    use super::parse_stored_session;
    use crate::features::auth::types::Role;

    const IDENTITY: &str =
        r#"{"id":"u-1","fullname":"Ada","email":"ada@acme.io","role":"client","isApproved":true}"#;

    #[test]
    fn valid_identity_and_token_restore_a_session() {
        let session = parse_stored_session(Some(IDENTITY), Some("tok-123")).unwrap();
        assert_eq!(session.identity.id, "u-1");
        assert_eq!(session.role(), Role::Client);
        assert_eq!(session.token, "tok-123");
    }

    #[test]
    fn legacy_subject_id_field_restores_a_session() {
        let legacy = r#"{"_id":"507f1f77bcf86cd799439011","role":"agency"}"#;
        let session = parse_stored_session(Some(legacy), Some("tok-456")).unwrap();
        assert_eq!(session.identity.id, "507f1f77bcf86cd799439011");
        assert_eq!(session.role(), Role::Agency);
    }

    #[test]
    fn corrupt_identity_json_yields_no_session() {
        assert!(parse_stored_session(Some("{not json"), Some("tok")).is_none());
        assert!(parse_stored_session(Some(""), Some("tok")).is_none());
    }

    #[test]
    fn missing_half_yields_no_session() {
        assert!(parse_stored_session(Some(IDENTITY), None).is_none());
        assert!(parse_stored_session(Some(IDENTITY), Some("   ")).is_none());
        assert!(parse_stored_session(None, Some("tok-123")).is_none());
        assert!(parse_stored_session(None, None).is_none());
    }

    #[test]
    fn empty_subject_id_yields_no_session() {
        let identity = r#"{"id":"  ","role":"client"}"#;
        assert!(parse_stored_session(Some(identity), Some("tok")).is_none());
    }

    #[test]
    fn unknown_role_yields_no_session() {
        let identity = r#"{"id":"u-9","role":"owner"}"#;
        assert!(parse_stored_session(Some(identity), Some("tok")).is_none());
    }
}
