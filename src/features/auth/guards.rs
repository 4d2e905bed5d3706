//! Route access policy and the guard component that applies it. The decision
//! order is fixed: loading, then authentication, then role, then approval.
//! All policy lives in pure functions so it can be tested without a browser.
//! The checks shape navigation only; the API enforces the real access rules.

use crate::components::Spinner;
use crate::features::auth::{
    state::use_auth,
    types::{Role, UserSession},
};
use crate::app_lib::api::encode_query_component;
use crate::routes::paths;
use leptos::prelude::*;
use leptos_router::{NavigateOptions, hooks::use_location, hooks::use_navigate};

/// Outcome of evaluating a guarded route against the current session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Session restore still running; render a neutral loading state.
    Wait,
    /// Nobody signed in; send to the matching login surface.
    RedirectToLogin { requires_admin: bool },
    /// Signed in with the wrong role; silently send to the landing page.
    RedirectToLanding,
    /// Signed in but the account has not been approved yet.
    RedirectToPendingApproval,
    /// Render the protected content.
    Allow,
}

/// Evaluates access in the fixed order. The first matching state wins.
pub fn evaluate_route_access(
    is_loading: bool,
    session: Option<&UserSession>,
    required_role: Option<Role>,
) -> GuardDecision {
    if is_loading {
        return GuardDecision::Wait;
    }

    let Some(session) = session else {
        return GuardDecision::RedirectToLogin {
            requires_admin: required_role == Some(Role::Admin),
        };
    };

    if let Some(required) = required_role {
        if session.role() != required {
            return GuardDecision::RedirectToLanding;
        }
    }

    if !session.identity.is_approved && session.role() != Role::Admin {
        return GuardDecision::RedirectToPendingApproval;
    }

    GuardDecision::Allow
}

/// Builds the login redirect for an unauthenticated visitor, carrying the
/// attempted path so the login page can return them afterwards.
pub fn login_redirect_path(requires_admin: bool, attempted: &str) -> String {
    let base = if requires_admin {
        paths::ADMIN_LOGIN
    } else {
        paths::LOGIN
    };

    let attempted = attempted.trim();
    if attempted.is_empty() || attempted == "/" {
        base.to_string()
    } else {
        format!("{base}?redirect={}", encode_query_component(attempted))
    }
}

/// Resolves where a fresh login should land: the carried redirect path when it
/// is a safe in-app path, otherwise the role's home.
pub fn redirect_target(redirect: Option<&str>, role: Role) -> String {
    match redirect {
        Some(path) if path.starts_with('/') && !path.starts_with("//") => path.to_string(),
        _ => role.home_path().to_string(),
    }
}

/// Wraps protected route content. This is a UX-only guard; real access
/// control must live on the API.
#[component]
pub fn RouteGuard(
    #[prop(optional)] required_role: Option<Role>,
    children: ChildrenFn,
) -> impl IntoView {
    let auth = use_auth();
    let location = use_location();
    let navigate = use_navigate();

    let decision = Signal::derive(move || {
        auth.session.with(|session| {
            evaluate_route_access(auth.is_loading.get(), session.as_ref(), required_role)
        })
    });

    Effect::new(move |_| {
        let target = match decision.get() {
            GuardDecision::Wait | GuardDecision::Allow => return,
            GuardDecision::RedirectToLogin { requires_admin } => {
                let attempted = location.pathname.get_untracked();
                login_redirect_path(requires_admin, &attempted)
            }
            GuardDecision::RedirectToLanding => paths::HOME.to_string(),
            GuardDecision::RedirectToPendingApproval => paths::PENDING_APPROVAL.to_string(),
        };
        navigate(
            &target,
            NavigateOptions {
                replace: true,
                ..Default::default()
            },
        );
    });

    view! {
        {move || match decision.get() {
            GuardDecision::Allow => children().into_any(),
            _ => {
                view! {
                    <div class="flex justify-center items-center min-h-[60vh]">
                        <Spinner />
                    </div>
                }
                .into_any()
            }
        }}
    }
}

#[cfg(test)]
mod tests {
    use super::{
        GuardDecision, evaluate_route_access, login_redirect_path, redirect_target,
    };
    use crate::features::auth::types::{Role, UserIdentity, UserSession};

    fn session(role: Role, approved: bool) -> UserSession {
        UserSession {
            identity: UserIdentity {
                id: "u-1".to_string(),
                fullname: "Test Account".to_string(),
                email: "test@admatchhub.io".to_string(),
                role,
                is_approved: approved,
            },
            token: "tok".to_string(),
        }
    }

    #[test]
    fn loading_always_waits_and_never_redirects() {
        assert_eq!(
            evaluate_route_access(true, None, Some(Role::Admin)),
            GuardDecision::Wait
        );
        let wrong_role = session(Role::Agency, true);
        assert_eq!(
            evaluate_route_access(true, Some(&wrong_role), Some(Role::Client)),
            GuardDecision::Wait
        );
    }

    #[test]
    fn unauthenticated_goes_to_the_matching_login() {
        assert_eq!(
            evaluate_route_access(false, None, Some(Role::Admin)),
            GuardDecision::RedirectToLogin {
                requires_admin: true
            }
        );
        for required in [Some(Role::Client), Some(Role::Agency), Some(Role::Employee), None] {
            assert_eq!(
                evaluate_route_access(false, None, required),
                GuardDecision::RedirectToLogin {
                    requires_admin: false
                }
            );
        }
    }

    #[test]
    fn wrong_role_silently_redirects_to_landing() {
        let agency = session(Role::Agency, true);
        assert_eq!(
            evaluate_route_access(false, Some(&agency), Some(Role::Client)),
            GuardDecision::RedirectToLanding
        );
    }

    #[test]
    fn role_check_runs_before_approval_check() {
        let unapproved_agency = session(Role::Agency, false);
        assert_eq!(
            evaluate_route_access(false, Some(&unapproved_agency), Some(Role::Client)),
            GuardDecision::RedirectToLanding
        );
    }

    #[test]
    fn unapproved_matching_role_goes_to_pending_approval() {
        let unapproved = session(Role::Client, false);
        assert_eq!(
            evaluate_route_access(false, Some(&unapproved), Some(Role::Client)),
            GuardDecision::RedirectToPendingApproval
        );
        assert_eq!(
            evaluate_route_access(false, Some(&unapproved), None),
            GuardDecision::RedirectToPendingApproval
        );
    }

    #[test]
    fn admin_is_implicitly_approved() {
        let admin = session(Role::Admin, false);
        assert_eq!(
            evaluate_route_access(false, Some(&admin), Some(Role::Admin)),
            GuardDecision::Allow
        );
    }

    #[test]
    fn approved_matching_role_is_authorized() {
        for role in [Role::Client, Role::Agency, Role::Employee] {
            let current = session(role, true);
            assert_eq!(
                evaluate_route_access(false, Some(&current), Some(role)),
                GuardDecision::Allow
            );
        }
    }

    #[test]
    fn login_redirect_carries_the_attempted_path() {
        assert_eq!(
            login_redirect_path(false, "/client/dashboard"),
            "/login?redirect=%2Fclient%2Fdashboard"
        );
        assert_eq!(
            login_redirect_path(true, "/admin"),
            "/admin/login?redirect=%2Fadmin"
        );
        assert_eq!(login_redirect_path(false, "/"), "/login");
        assert_eq!(login_redirect_path(false, ""), "/login");
    }

    #[test]
    fn redirect_target_prefers_a_safe_carried_path() {
        assert_eq!(
            redirect_target(Some("/client/dashboard"), Role::Client),
            "/client/dashboard"
        );
        assert_eq!(
            redirect_target(Some("https://evil.example"), Role::Client),
            "/client/dashboard"
        );
        assert_eq!(
            redirect_target(Some("//evil.example"), Role::Agency),
            "/agency/dashboard"
        );
        assert_eq!(redirect_target(None, Role::Employee), "/employee/dashboard");
        assert_eq!(redirect_target(None, Role::Admin), "/admin");
    }
}
