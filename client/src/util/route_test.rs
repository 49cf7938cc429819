use super::*;

// =============================================================
// Public set (exact match)
// =============================================================

#[test]
fn home_login_register_are_public() {
    assert_eq!(classify("/"), RouteClass::Public);
    assert_eq!(classify("/login"), RouteClass::Public);
    assert_eq!(classify("/register"), RouteClass::Public);
}

#[test]
fn public_match_is_exact_not_prefix() {
    assert_eq!(classify("/login/reset"), RouteClass::Open);
    assert_eq!(classify("/registering"), RouteClass::Open);
}

// =============================================================
// Admin section (prefix match)
// =============================================================

#[test]
fn customers_tree_is_admin_only() {
    assert_eq!(classify("/customers"), RouteClass::AdminRequired);
    assert_eq!(classify("/customers/42"), RouteClass::AdminRequired);
    assert_eq!(classify("/customers/42/edit"), RouteClass::AdminRequired);
}

// =============================================================
// Auth-required set (exact match)
// =============================================================

#[test]
fn feature_pages_require_authentication() {
    assert_eq!(classify("/machine"), RouteClass::AuthRequired);
    assert_eq!(classify("/prediction"), RouteClass::AuthRequired);
}

#[test]
fn auth_match_is_exact_not_prefix() {
    assert_eq!(classify("/machine/7"), RouteClass::Open);
}

// =============================================================
// Default
// =============================================================

#[test]
fn unlisted_paths_are_open() {
    assert_eq!(classify("/tutorial"), RouteClass::Open);
    assert_eq!(classify("/no-such-page"), RouteClass::Open);
    assert_eq!(classify(""), RouteClass::Open);
}
