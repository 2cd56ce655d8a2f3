//! # Session gate
//!
//! Decides, per navigation, whether the matched route may render. The gate
//! is stateless: every [`SessionGate::check`] issues a fresh session query
//! against the identity service and recomputes the decision from scratch,
//! so nothing stale survives a sign-in or sign-out.
//!
//! Policy, in order:
//!
//! 1. a signed-in user requesting a guest-only route (login, register,
//!    password reset) is sent to the dashboard;
//! 2. a signed-out user requesting a protected route is sent to login;
//! 3. a signed-in user whose email is not on the admin allow-list
//!    requesting an admin route is sent to the restricted-access fallback;
//! 4. otherwise the navigation proceeds.
//!
//! A failed session query is treated as signed out: the gate redirects
//! rather than rendering a protected view on an unverifiable session.

use crate::allowlist::AdminAllowList;
use crate::backend::IdentityBackend;

/// Access requirements attached to a route.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RouteMeta {
    pub requires_auth: bool,
    pub requires_admin: bool,
}

impl RouteMeta {
    /// Guest-only routes: login, register, password reset.
    pub const GUEST: Self = Self {
        requires_auth: false,
        requires_admin: false,
    };
    /// Routes that require a signed-in user.
    pub const AUTH: Self = Self {
        requires_auth: true,
        requires_admin: false,
    };
    /// Routes restricted to allow-listed admins.
    pub const ADMIN: Self = Self {
        requires_auth: true,
        requires_admin: true,
    };
}

/// Outcome of a gate check.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GateDecision {
    /// Render the requested route.
    Proceed,
    /// Not signed in; send to the login page.
    ToLogin,
    /// Already signed in on a guest-only route; send to the dashboard.
    ToDashboard,
    /// Signed in but not an admin on an admin route; send to the
    /// restricted-access fallback.
    ToFallback,
}

/// Navigation guard over the identity service.
#[derive(Clone, Debug)]
pub struct SessionGate<B: IdentityBackend> {
    backend: B,
    admins: AdminAllowList,
}

impl<B: IdentityBackend> SessionGate<B> {
    pub fn new(backend: B, admins: AdminAllowList) -> Self {
        Self { backend, admins }
    }

    /// Decide whether a navigation to a route with `meta` may proceed.
    pub async fn check(&self, meta: RouteMeta) -> GateDecision {
        let user = match self.backend.current_user().await {
            Ok(user) => user,
            Err(err) => {
                tracing::warn!("session query failed, treating as signed out: {err}");
                None
            }
        };

        match user {
            Some(user) => {
                if !meta.requires_auth {
                    return GateDecision::ToDashboard;
                }
                if meta.requires_admin && !self.admins.contains(&user.email) {
                    return GateDecision::ToFallback;
                }
                GateDecision::Proceed
            }
            None if meta.requires_auth => GateDecision::ToLogin,
            None => GateDecision::Proceed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryBackend;
    use crate::models::UserInfo;
    use uuid::Uuid;

    fn signed_in(backend: &MemoryBackend, email: &str) {
        backend.set_user(Some(UserInfo {
            id: Uuid::new_v4(),
            email: email.to_string(),
        }));
    }

    fn gate(backend: &MemoryBackend) -> SessionGate<MemoryBackend> {
        SessionGate::new(backend.clone(), AdminAllowList::new(["registrar@x.edu"]))
    }

    #[tokio::test]
    async fn signed_out_on_protected_route_goes_to_login() {
        let backend = MemoryBackend::new();
        let gate = gate(&backend);

        assert_eq!(gate.check(RouteMeta::AUTH).await, GateDecision::ToLogin);
        assert_eq!(gate.check(RouteMeta::ADMIN).await, GateDecision::ToLogin);
    }

    #[tokio::test]
    async fn signed_out_on_guest_route_proceeds() {
        let backend = MemoryBackend::new();
        let gate = gate(&backend);

        assert_eq!(gate.check(RouteMeta::GUEST).await, GateDecision::Proceed);
    }

    #[tokio::test]
    async fn signed_in_on_guest_route_goes_to_dashboard() {
        let backend = MemoryBackend::new();
        signed_in(&backend, "grad@x.edu");
        let gate = gate(&backend);

        assert_eq!(gate.check(RouteMeta::GUEST).await, GateDecision::ToDashboard);
    }

    #[tokio::test]
    async fn signed_in_on_protected_route_proceeds() {
        let backend = MemoryBackend::new();
        signed_in(&backend, "grad@x.edu");
        let gate = gate(&backend);

        assert_eq!(gate.check(RouteMeta::AUTH).await, GateDecision::Proceed);
    }

    #[tokio::test]
    async fn non_admin_on_admin_route_goes_to_fallback() {
        let backend = MemoryBackend::new();
        signed_in(&backend, "admin@x.edu");
        let gate = gate(&backend);

        // The email looks administrative but is not on the allow-list.
        assert_eq!(gate.check(RouteMeta::ADMIN).await, GateDecision::ToFallback);
    }

    #[tokio::test]
    async fn allow_listed_admin_proceeds() {
        let backend = MemoryBackend::new();
        signed_in(&backend, "Registrar@X.edu");
        let gate = gate(&backend);

        assert_eq!(gate.check(RouteMeta::ADMIN).await, GateDecision::Proceed);
    }

    #[tokio::test]
    async fn identity_failure_is_treated_as_signed_out() {
        let backend = MemoryBackend::new();
        signed_in(&backend, "grad@x.edu");
        backend.fail_identity(true);
        let gate = gate(&backend);

        assert_eq!(gate.check(RouteMeta::AUTH).await, GateDecision::ToLogin);
        assert_eq!(gate.check(RouteMeta::GUEST).await, GateDecision::Proceed);
    }

    #[tokio::test]
    async fn decision_tracks_session_changes_between_checks() {
        let backend = MemoryBackend::new();
        let gate = gate(&backend);

        assert_eq!(gate.check(RouteMeta::AUTH).await, GateDecision::ToLogin);

        signed_in(&backend, "grad@x.edu");
        assert_eq!(gate.check(RouteMeta::AUTH).await, GateDecision::Proceed);

        backend.set_user(None);
        assert_eq!(gate.check(RouteMeta::AUTH).await, GateDecision::ToLogin);
    }
}
