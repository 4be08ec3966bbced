use super::*;

#[test]
fn api_base_url_has_no_trailing_slash() {
    assert!(!api_base_url().ends_with('/'));
}

#[test]
fn api_base_url_is_absolute() {
    assert!(api_base_url().starts_with("http"));
}
