//! Networking modules for the backend REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the HTTP calls (with bearer-token injection) and `types`
//! defines the wire schema shared with the server.

pub mod api;
pub mod types;
