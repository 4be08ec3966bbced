//! Client configuration.
//!
//! The backend address is baked in at compile time so the WASM bundle needs
//! no runtime config fetch.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Base address of the backend API, without a trailing slash.
///
/// Overridden at build time via the `DATADESK_API_URL` environment variable;
/// defaults to the local development server.
pub fn api_base_url() -> &'static str {
    option_env!("DATADESK_API_URL").unwrap_or("http://localhost:8000")
}
