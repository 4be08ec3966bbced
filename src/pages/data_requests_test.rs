use super::*;
use crate::net::types::STATUS_CREATED;

fn sample_request() -> DataRequest {
    DataRequest {
        id: 7,
        person_id: 3,
        first_name: "Ada".to_owned(),
        last_name: "Lovelace".to_owned(),
        date_of_birth: "1815-12-10".to_owned(),
        status: STATUS_NEEDS_REVIEW,
        created_on: "2026-08-01T09:30:00".to_owned(),
        created_by: "clerk@example.com".to_owned(),
        request_source_id: "portal".to_owned(),
    }
}

#[test]
fn status_display_uses_known_labels() {
    assert_eq!(status_display(STATUS_CREATED), "Created");
    assert_eq!(status_display(STATUS_NEEDS_REVIEW), "Needs Review");
}

#[test]
fn status_display_falls_back_to_raw_code() {
    assert_eq!(status_display(42), "42");
}

#[test]
fn display_date_takes_date_portion() {
    assert_eq!(display_date("2026-08-01T09:30:00"), "2026-08-01");
}

#[test]
fn display_date_passes_through_bare_dates() {
    assert_eq!(display_date("2026-08-01"), "2026-08-01");
}

#[test]
fn request_display_name_joins_names() {
    assert_eq!(request_display_name(&sample_request()), "Ada Lovelace");
}

#[test]
fn status_tabs_cover_the_worked_queues() {
    assert_eq!(
        STATUS_TABS,
        [STATUS_PROCESSING, STATUS_NEEDS_REVIEW, STATUS_COMPLETE]
    );
}
