use super::*;

// =============================================================
// Identity defaults
// =============================================================

#[test]
fn identity_default_has_no_token() {
    let identity = Identity::default();
    assert!(identity.token.is_none());
    assert!(!identity.is_authenticated());
}

#[test]
fn identity_default_has_no_display_name() {
    let identity = Identity::default();
    assert!(identity.display_name.is_none());
}

#[test]
fn identity_with_token_is_authenticated() {
    let identity = Identity {
        token: Some("query_id=abc&hash=def".to_owned()),
        display_name: None,
    };
    assert!(identity.is_authenticated());
}

#[test]
#[cfg(not(feature = "csr"))]
fn from_host_outside_browser_is_unauthenticated() {
    // Native builds have no host object at all.
    assert_eq!(Identity::from_host(), Identity::default());
}

// =============================================================
// Display name assembly
// =============================================================

#[test]
fn display_name_full_parts() {
    assert_eq!(
        display_name_from_parts(Some("Ann"), Some("Lee"), Some("ann")),
        Some("Ann Lee (@ann)".to_owned())
    );
}

#[test]
fn display_name_first_only() {
    assert_eq!(
        display_name_from_parts(Some("Ann"), None, None),
        Some("Ann".to_owned())
    );
}

#[test]
fn display_name_username_only() {
    assert_eq!(
        display_name_from_parts(None, None, Some("ann")),
        Some("@ann".to_owned())
    );
}

#[test]
fn display_name_empty_strings_count_as_absent() {
    assert_eq!(display_name_from_parts(Some(""), Some(""), Some("")), None);
}

#[test]
fn display_name_all_absent() {
    assert_eq!(display_name_from_parts(None, None, None), None);
}
