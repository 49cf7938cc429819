use super::*;

fn account(id: i64, username: &str) -> UserAccount {
    UserAccount {
        id,
        username: username.to_owned(),
        role: "researcher".to_owned(),
        is_active: true,
    }
}

// =============================================================
// build_account_update
// =============================================================

#[test]
fn blank_password_is_omitted_from_update() {
    let update = build_account_update("somsak", "   ", "admin", true);
    assert_eq!(update.password, None);
    assert_eq!(update.username.as_deref(), Some("somsak"));
    assert_eq!(update.role.as_deref(), Some("admin"));
    assert_eq!(update.is_active, Some(true));
}

#[test]
fn nonblank_password_is_sent() {
    let update = build_account_update("somsak", "n3w-secret", "researcher", false);
    assert_eq!(update.password.as_deref(), Some("n3w-secret"));
    assert_eq!(update.is_active, Some(false));
}

#[test]
fn username_and_role_are_trimmed() {
    let update = build_account_update(" somsak ", "", " admin ", true);
    assert_eq!(update.username.as_deref(), Some("somsak"));
    assert_eq!(update.role.as_deref(), Some("admin"));
}

// =============================================================
// Optimistic list updates
// =============================================================

#[test]
fn replace_account_swaps_matching_id() {
    let mut list = vec![account(1, "a"), account(2, "b")];
    let mut updated = account(2, "b-renamed");
    updated.is_active = false;
    replace_account(&mut list, updated);
    assert_eq!(list[1].username, "b-renamed");
    assert!(!list[1].is_active);
    assert_eq!(list[0].username, "a");
}

#[test]
fn replace_account_ignores_unknown_id() {
    let mut list = vec![account(1, "a")];
    replace_account(&mut list, account(9, "ghost"));
    assert_eq!(list.len(), 1);
    assert_eq!(list[0].username, "a");
}

#[test]
fn remove_account_drops_matching_id_only() {
    let mut list = vec![account(1, "a"), account(2, "b"), account(3, "c")];
    remove_account(&mut list, 2);
    assert_eq!(
        list.iter().map(|a| a.id).collect::<Vec<_>>(),
        vec![1, 3]
    );
}
