//! Navigation-guard decision logic.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every route change runs through [`evaluate`]; the `RouteGuard` component
//! applies the verdict. The decision is pure so the full transition table is
//! testable without a browser.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use crate::state::session::{SessionPhase, SessionState};
use crate::util::route::{self, RouteClass};

/// Outcome of evaluating the guard for one navigation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardVerdict {
    /// Resolution still in flight: render a neutral loading state and
    /// navigate nowhere, so protected content never flashes.
    Wait,
    /// The viewer may see the requested path.
    Allow,
    /// Send the viewer to the given path instead.
    Redirect(&'static str),
}

/// Decide what to do with the viewer at `path` given the current session.
///
/// Re-evaluating with unchanged inputs never issues a second redirect: a
/// redirect whose target equals the current path collapses to `Allow`.
/// Anonymous viewers on any gated route, admin included, go to the login
/// page.
pub fn evaluate(session: &SessionState, path: &str) -> GuardVerdict {
    let user = match &session.phase {
        SessionPhase::Loading => return GuardVerdict::Wait,
        SessionPhase::Resolved(user) => user.as_ref(),
    };

    match route::classify(path) {
        RouteClass::Public => match user {
            // Signed-in viewers have no business on login/register.
            Some(_) => redirect(route::HOME, path),
            None => GuardVerdict::Allow,
        },
        RouteClass::AuthRequired => match user {
            Some(_) => GuardVerdict::Allow,
            None => redirect(route::LOGIN, path),
        },
        RouteClass::AdminRequired => match user {
            None => redirect(route::LOGIN, path),
            Some(identity) if identity.is_admin() => GuardVerdict::Allow,
            Some(_) => redirect(route::HOME, path),
        },
        RouteClass::Open => GuardVerdict::Allow,
    }
}

fn redirect(target: &'static str, current: &str) -> GuardVerdict {
    if current == target {
        GuardVerdict::Allow
    } else {
        GuardVerdict::Redirect(target)
    }
}
