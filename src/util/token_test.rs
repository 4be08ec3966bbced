use super::*;

// Native builds compile the storage-less stubs, which model the server side
// of the hydrate split: no credential ever exists there.

#[test]
fn token_key_is_stable() {
    assert_eq!(TOKEN_KEY, "auth_token");
}

#[test]
fn get_token_absent_without_storage() {
    assert!(get_token().is_none());
}

#[test]
fn set_then_remove_are_no_ops_without_storage() {
    set_token("T");
    assert!(get_token().is_none());
    remove_token();
    assert!(get_token().is_none());
}
