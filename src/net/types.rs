//! Wire DTOs for the client/server boundary.
//!
//! DESIGN
//! ======
//! These types mirror the backend's response payloads field-for-field so
//! serde can parse responses directly, with no mapping layer in between.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// The authenticated user's profile as returned by `/api/v1/users/me`.
///
/// Never persisted: it is re-derived from the stored token on every session
/// resolution, so a stale cached identity cannot outlive its credential.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier (UUID string).
    pub id: String,
    /// Login email address.
    pub email: String,
    /// Whether the account is enabled.
    pub is_active: bool,
    /// Whether the account has administrative rights.
    pub is_superuser: bool,
    /// Whether the email address has been verified.
    pub is_verified: bool,
}

/// A data request row as listed on the home page.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DataRequest {
    /// Unique request identifier.
    pub id: i64,
    /// Subject person of the request.
    pub person_id: i64,
    /// Subject's first name, denormalized for display.
    pub first_name: String,
    /// Subject's last name, denormalized for display.
    pub last_name: String,
    /// Subject's date of birth (ISO date string).
    pub date_of_birth: String,
    /// Workflow status code; see [`status_label`].
    pub status: i64,
    /// Creation timestamp (ISO datetime string).
    pub created_on: String,
    /// Identifier of the creating user.
    pub created_by: String,
    /// Source this request came in through.
    pub request_source_id: String,
}

/// A person that a data request can be opened for.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    /// Unique person identifier.
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    /// ISO date string.
    pub date_of_birth: String,
}

impl Person {
    /// Display name for select options and table cells.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// A channel through which data requests arrive (portal, email, ...).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestSource {
    /// Unique source identifier.
    pub id: String,
    /// Human-readable source name.
    pub name: String,
}

/// Creation payload for `POST /api/v1/data-requests`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NewDataRequest {
    pub person_id: i64,
    pub request_source_id: String,
}

/// Workflow status code for newly created requests.
pub const STATUS_CREATED: i64 = 1;
/// Workflow status code while a request is being worked.
pub const STATUS_PROCESSING: i64 = 2;
/// Workflow status code once a request awaits review.
pub const STATUS_NEEDS_REVIEW: i64 = 3;
/// Workflow status code for finished requests.
pub const STATUS_COMPLETE: i64 = 99;

/// Human-readable label for a workflow status code.
///
/// Unknown codes return `None` so callers can fall back to showing the raw
/// number instead of mislabeling a status this build does not know about.
pub fn status_label(status: i64) -> Option<&'static str> {
    match status {
        STATUS_CREATED => Some("Created"),
        STATUS_PROCESSING => Some("Processing"),
        STATUS_NEEDS_REVIEW => Some("Needs Review"),
        STATUS_COMPLETE => Some("Complete"),
        _ => None,
    }
}
