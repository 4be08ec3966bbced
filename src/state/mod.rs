//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! Session state lives in `auth` and is provided once, app-wide, as a
//! reactive context; pages keep their own route-scoped signals locally.

pub mod auth;
