//! Session state and context for the frontend. The provider hydrates the
//! session once on mount from `localStorage` and exposes derived signals for
//! guards and routes. Hydration never fails loudly: broken persisted state
//! simply leaves the visitor signed out.

use crate::features::auth::{
    storage,
    types::{UserIdentity, UserSession},
};
use leptos::prelude::*;

/// Session context shared through Leptos. Every login surface and guard goes
/// through this object; nothing else touches the persisted keys.
#[derive(Clone, Copy)]
pub struct AuthContext {
    pub session: RwSignal<Option<UserSession>>,
    pub is_loading: RwSignal<bool>,
    pub is_authenticated: Signal<bool>,
}

impl AuthContext {
    fn new() -> Self {
        let session = RwSignal::new(None);
        let is_loading = RwSignal::new(true);
        let is_authenticated = Signal::derive(move || session.get().is_some());
        Self {
            session,
            is_loading,
            is_authenticated,
        }
    }

    /// Restores the persisted session. Runs at most once; `is_loading` drops
    /// to `false` afterwards whether or not a session was found.
    pub fn hydrate(&self) {
        if !self.is_loading.get_untracked() {
            return;
        }
        if let Some(session) = storage::load_session() {
            self.session.set(Some(session));
        }
        self.is_loading.set(false);
    }

    /// Stores a fresh login: persists both keys, then updates memory.
    pub fn login(&self, identity: UserIdentity, token: String) {
        let session = UserSession { identity, token };
        storage::save_session(&session);
        self.session.set(Some(session));
    }

    /// Signs out locally: clears the persisted keys and the in-memory session.
    /// Server-side logout is the caller's (best-effort) concern.
    pub fn logout(&self) {
        storage::clear_session();
        self.session.set(None);
    }

    /// Bearer token of the current session, if any.
    pub fn token(&self) -> Option<String> {
        self.session.with_untracked(|session| {
            session.as_ref().map(|current| current.token.clone())
        })
    }
}

/// Provides the session context and hydrates once after mount, so the first
/// render observes the loading state rather than a signed-out flash.
#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let auth = AuthContext::new();
    provide_context(auth);

    Effect::new(move |_| {
        auth.hydrate();
    });

    view! { {children()} }
}

/// Returns the current session context or a detached signed-out context when
/// no provider is mounted.
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().unwrap_or_else(|| {
        let auth = AuthContext::new();
        auth.is_loading.set(false);
        auth
    })
}

#[cfg(test)]
mod tests {
    use super::AuthContext;
    use crate::features::auth::types::{Role, UserIdentity};
    use leptos::prelude::GetUntracked;

    fn identity(role: Role) -> UserIdentity {
        UserIdentity {
            id: "u-1".to_string(),
            fullname: "Ada".to_string(),
            email: "ada@acme.io".to_string(),
            role,
            is_approved: true,
        }
    }

    #[test]
    fn context_starts_loading_and_signed_out() {
        let auth = AuthContext::new();
        assert!(auth.is_loading.get_untracked());
        assert!(auth.session.get_untracked().is_none());
        assert!(!auth.is_authenticated.get_untracked());
    }

    #[test]
    fn hydrate_completes_even_without_persisted_state() {
        let auth = AuthContext::new();
        auth.hydrate();
        assert!(!auth.is_loading.get_untracked());
        assert!(auth.session.get_untracked().is_none());

        // A second call must stay a no-op.
        auth.hydrate();
        assert!(!auth.is_loading.get_untracked());
    }

    #[test]
    fn login_then_logout_round_trip() {
        let auth = AuthContext::new();
        auth.hydrate();

        auth.login(identity(Role::Client), "tok-1".to_string());
        assert!(auth.is_authenticated.get_untracked());
        assert_eq!(auth.token(), Some("tok-1".to_string()));

        auth.logout();
        assert!(!auth.is_authenticated.get_untracked());
        assert_eq!(auth.token(), None);
    }
}
