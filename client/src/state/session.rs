//! Session store for the current browser viewer.
//!
//! SYSTEM CONTEXT
//! ==============
//! Single source of truth for "who is looking at the app". The route guard,
//! the nav header, and identity-aware pages all react to the `RwSignal`
//! holding this state; nothing else mutates it.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::*;

use crate::net::types::UserIdentity;
use crate::state::ui::UiState;

/// Resolution phase of the current session check.
///
/// Exactly one variant holds at any time. A resolution attempt moves
/// `Loading` to `Resolved`; [`SessionState::begin_fetch`] re-enters
/// `Loading` for a fresh check.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SessionPhase {
    /// A session check is in flight; no verdict yet.
    Loading,
    /// The check completed: a concrete identity, or explicit anonymity.
    Resolved(Option<UserIdentity>),
}

/// Session state tracking the current viewer and loading status.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionState {
    pub phase: SessionPhase,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            phase: SessionPhase::Loading,
        }
    }
}

impl SessionState {
    /// The resolved viewer identity, if any.
    pub fn user(&self) -> Option<&UserIdentity> {
        match &self.phase {
            SessionPhase::Resolved(user) => user.as_ref(),
            SessionPhase::Loading => None,
        }
    }

    /// Whether a session check is still in flight.
    pub fn is_loading(&self) -> bool {
        matches!(self.phase, SessionPhase::Loading)
    }

    /// Whether the viewer resolved to an administrator identity.
    pub fn is_admin(&self) -> bool {
        self.user().is_some_and(UserIdentity::is_admin)
    }

    /// Mark a new resolution attempt as in flight.
    pub fn begin_fetch(&mut self) {
        self.phase = SessionPhase::Loading;
    }

    /// Record the outcome of a resolution attempt (last write wins).
    pub fn resolve(&mut self, user: Option<UserIdentity>) {
        self.phase = SessionPhase::Resolved(user);
    }
}

/// Re-run the session check against the backend.
///
/// Sets `Loading` immediately; the spawned resolver records whatever it
/// finds. Concurrent calls are tolerated; whichever resolution lands last
/// determines the final state.
pub fn refresh(session: RwSignal<SessionState>) {
    session.update(SessionState::begin_fetch);
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let user = crate::net::api::fetch_current_user().await;
        session.update(|state| state.resolve(user));
    });
}

/// End the session on the server, then locally.
///
/// Local state is cleared only after the server confirms invalidation: on
/// success the store resolves to anonymous, leftover cookie artifacts are
/// expired, and the viewer lands on the home page with a success notice. A
/// failed request leaves the session intact and surfaces an error notice.
pub fn sign_out<F>(session: RwSignal<SessionState>, ui: RwSignal<UiState>, navigate: F)
where
    F: Fn(&str) + 'static,
{
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match crate::net::api::logout().await {
            Ok(()) => {
                session.update(|state| state.resolve(None));
                crate::util::cookies::clear_session_artifacts();
                ui.update(|state| state.notify_success("Signed out successfully"));
                navigate(crate::util::route::HOME);
            }
            Err(error) => {
                log::warn!("logout failed: {error}");
                ui.update(|state| state.notify_error("Failed to sign out"));
            }
        }
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (session, ui, navigate);
    }
}
