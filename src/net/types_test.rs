use super::*;

#[test]
fn user_parses_identity_payload() {
    let user: User = serde_json::from_str(
        r#"{"id":"1","email":"a@b.com","is_active":true,"is_superuser":false,"is_verified":true}"#,
    )
    .unwrap();
    assert_eq!(user.id, "1");
    assert_eq!(user.email, "a@b.com");
    assert!(user.is_active);
    assert!(!user.is_superuser);
    assert!(user.is_verified);
}

#[test]
fn data_request_parses_list_payload() {
    let row: DataRequest = serde_json::from_str(
        r#"{
            "id": 7,
            "person_id": 3,
            "first_name": "Ada",
            "last_name": "Lovelace",
            "date_of_birth": "1815-12-10",
            "status": 3,
            "created_on": "2026-08-01T09:30:00",
            "created_by": "clerk@example.com",
            "request_source_id": "portal"
        }"#,
    )
    .unwrap();
    assert_eq!(row.id, 7);
    assert_eq!(row.status, STATUS_NEEDS_REVIEW);
    assert_eq!(row.request_source_id, "portal");
}

#[test]
fn new_data_request_serializes_creation_payload() {
    let payload = NewDataRequest {
        person_id: 3,
        request_source_id: "portal".to_owned(),
    };
    assert_eq!(
        serde_json::to_string(&payload).unwrap(),
        r#"{"person_id":3,"request_source_id":"portal"}"#
    );
}

#[test]
fn person_full_name_joins_first_and_last() {
    let person = Person {
        id: 1,
        first_name: "Ada".to_owned(),
        last_name: "Lovelace".to_owned(),
        date_of_birth: "1815-12-10".to_owned(),
    };
    assert_eq!(person.full_name(), "Ada Lovelace");
}

#[test]
fn status_label_maps_known_codes() {
    assert_eq!(status_label(STATUS_CREATED), Some("Created"));
    assert_eq!(status_label(STATUS_PROCESSING), Some("Processing"));
    assert_eq!(status_label(STATUS_NEEDS_REVIEW), Some("Needs Review"));
    assert_eq!(status_label(STATUS_COMPLETE), Some("Complete"));
}

#[test]
fn status_label_unknown_code_is_none() {
    assert_eq!(status_label(42), None);
}
