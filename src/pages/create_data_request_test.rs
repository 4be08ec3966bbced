use super::*;

#[test]
fn validate_selection_requires_a_person() {
    assert_eq!(
        validate_selection(None, "portal"),
        Err("Select a person first.")
    );
}

#[test]
fn validate_selection_requires_a_source() {
    assert_eq!(
        validate_selection(Some(3), ""),
        Err("Select a request source first.")
    );
}

#[test]
fn validate_selection_builds_the_payload() {
    assert_eq!(
        validate_selection(Some(3), "portal"),
        Ok(NewDataRequest {
            person_id: 3,
            request_source_id: "portal".to_owned(),
        })
    );
}

#[test]
fn parse_person_selection_accepts_numeric_ids() {
    assert_eq!(parse_person_selection("42"), Some(42));
}

#[test]
fn parse_person_selection_rejects_the_placeholder() {
    assert_eq!(parse_person_selection(""), None);
}
