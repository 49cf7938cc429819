use super::*;
use crate::net::types::UserIdentity;

fn loading() -> SessionState {
    SessionState::default()
}

fn anonymous() -> SessionState {
    let mut state = SessionState::default();
    state.resolve(None);
    state
}

fn signed_in(role: &str) -> SessionState {
    let mut state = SessionState::default();
    state.resolve(Some(UserIdentity {
        username: "somsak".to_owned(),
        role: role.to_owned(),
    }));
    state
}

// =============================================================
// Loading: never navigate
// =============================================================

#[test]
fn loading_waits_on_every_route_class() {
    for path in ["/", "/login", "/machine", "/customers", "/tutorial"] {
        assert_eq!(evaluate(&loading(), path), GuardVerdict::Wait, "path {path}");
    }
}

// =============================================================
// Public routes
// =============================================================

#[test]
fn anonymous_may_view_public_routes() {
    assert_eq!(evaluate(&anonymous(), "/"), GuardVerdict::Allow);
    assert_eq!(evaluate(&anonymous(), "/login"), GuardVerdict::Allow);
    assert_eq!(evaluate(&anonymous(), "/register"), GuardVerdict::Allow);
}

#[test]
fn signed_in_viewer_on_login_is_sent_home() {
    assert_eq!(evaluate(&signed_in("researcher"), "/login"), GuardVerdict::Redirect("/"));
    assert_eq!(evaluate(&signed_in("admin"), "/register"), GuardVerdict::Redirect("/"));
}

#[test]
fn signed_in_viewer_already_home_stays_put() {
    // Home is itself public; the redirect target equals the current path.
    assert_eq!(evaluate(&signed_in("researcher"), "/"), GuardVerdict::Allow);
}

// =============================================================
// Auth-required routes
// =============================================================

#[test]
fn anonymous_on_machine_is_sent_to_login() {
    assert_eq!(evaluate(&anonymous(), "/machine"), GuardVerdict::Redirect("/login"));
}

#[test]
fn anonymous_on_prediction_is_sent_to_login() {
    assert_eq!(evaluate(&anonymous(), "/prediction"), GuardVerdict::Redirect("/login"));
}

#[test]
fn any_resolved_identity_may_view_auth_routes() {
    assert_eq!(evaluate(&signed_in("researcher"), "/machine"), GuardVerdict::Allow);
    assert_eq!(evaluate(&signed_in("admin"), "/prediction"), GuardVerdict::Allow);
}

// =============================================================
// Admin-required routes
// =============================================================

#[test]
fn anonymous_on_admin_route_is_sent_to_login_not_allowed_through() {
    assert_eq!(evaluate(&anonymous(), "/customers"), GuardVerdict::Redirect("/login"));
    assert_eq!(evaluate(&anonymous(), "/customers/3"), GuardVerdict::Redirect("/login"));
}

#[test]
fn non_admin_on_customers_is_sent_home() {
    assert_eq!(evaluate(&signed_in("researcher"), "/customers"), GuardVerdict::Redirect("/"));
}

#[test]
fn admin_may_view_customers() {
    assert_eq!(evaluate(&signed_in("admin"), "/customers"), GuardVerdict::Allow);
}

// =============================================================
// Open routes and idempotence
// =============================================================

#[test]
fn open_routes_allow_every_session_state() {
    assert_eq!(evaluate(&anonymous(), "/tutorial"), GuardVerdict::Allow);
    assert_eq!(evaluate(&signed_in("researcher"), "/tutorial"), GuardVerdict::Allow);
    assert_eq!(evaluate(&signed_in("admin"), "/no-such-page"), GuardVerdict::Allow);
}

#[test]
fn reevaluation_with_unchanged_inputs_is_stable() {
    let session = signed_in("researcher");
    let first = evaluate(&session, "/customers");
    let second = evaluate(&session, "/customers");
    assert_eq!(first, second);
    // Once the viewer has landed on the redirect target, no further redirect.
    assert_eq!(evaluate(&session, "/"), GuardVerdict::Allow);
}

#[test]
fn anonymous_already_on_login_sees_no_redirect_loop() {
    assert_eq!(evaluate(&anonymous(), "/login"), GuardVerdict::Allow);
}

// =============================================================
// Logout effect-completeness
// =============================================================

#[test]
fn after_logout_auth_route_redirects_to_login() {
    let mut session = signed_in("researcher");
    assert_eq!(evaluate(&session, "/machine"), GuardVerdict::Allow);
    session.resolve(None);
    assert_eq!(evaluate(&session, "/machine"), GuardVerdict::Redirect("/login"));
}
