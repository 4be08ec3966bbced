//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (fetching, form state) and
//! leans on `components` and the session context for everything shared.

pub mod create_data_request;
pub mod data_requests;
pub mod login;
pub mod logout;
