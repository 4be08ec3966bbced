//! REST API helpers for communicating with the backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`. Server-side (SSR):
//! stubs returning `None`/error since these endpoints are only meaningful in
//! the browser.
//!
//! Every authorized call re-reads the token store, so a login or logout in
//! the same tab takes effect on the very next request. URL resolution joins
//! relative endpoints to the configured base address; absolute URLs pass
//! through untouched.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Option`/`Result` outputs instead of panics so auth and data
//! fetch failures degrade UI behavior without crashing hydration. Non-2xx
//! statuses are judged here per endpoint, not thrown mid-flight.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{DataRequest, NewDataRequest, Person, RequestSource, User};
#[cfg(feature = "hydrate")]
use serde::Deserialize;

/// Identity endpoint; non-2xx here means "not authenticated".
pub const ME_ENDPOINT: &str = "/api/v1/users/me";
/// Credential exchange endpoint (form-encoded, never bearer-authorized).
pub const LOGIN_ENDPOINT: &str = "/api/v1/auth/jwt/login";

#[cfg(any(test, feature = "hydrate"))]
fn resolve_url(endpoint: &str) -> String {
    if endpoint.starts_with("http") {
        endpoint.to_owned()
    } else {
        format!("{}{}", crate::config::api_base_url(), endpoint)
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn bearer_value(token: &str) -> String {
    format!("Bearer {token}")
}

#[cfg(any(test, feature = "hydrate"))]
fn login_form_body(email: &str, password: &str) -> String {
    url::form_urlencoded::Serializer::new(String::new())
        .append_pair("username", email)
        .append_pair("password", password)
        .finish()
}

#[cfg(any(test, feature = "hydrate"))]
fn data_requests_endpoint(status: i64) -> String {
    format!("/api/v1/data-requests?status={status}")
}

#[cfg(any(test, feature = "hydrate"))]
fn login_failed_message(status: u16) -> String {
    format!("login failed: {status}")
}

#[cfg(any(test, feature = "hydrate"))]
fn data_requests_failed_message(status: u16) -> String {
    format!("data requests fetch failed: {status}")
}

#[cfg(any(test, feature = "hydrate"))]
fn request_sources_failed_message(status: u16) -> String {
    format!("request sources fetch failed: {status}")
}

#[cfg(any(test, feature = "hydrate"))]
fn people_failed_message(status: u16) -> String {
    format!("people fetch failed: {status}")
}

#[cfg(any(test, feature = "hydrate"))]
fn create_request_failed_message(status: u16) -> String {
    format!("create data request failed: {status}")
}

/// Attach the stored bearer token, if any. The token store is consulted per
/// call; caller-set headers on `request` are left untouched.
#[cfg(feature = "hydrate")]
fn with_auth(request: gloo_net::http::RequestBuilder) -> gloo_net::http::RequestBuilder {
    match crate::util::token::get_token() {
        Some(token) => request.header("Authorization", &bearer_value(&token)),
        None => request,
    }
}

/// Fetch the currently authenticated user from the identity endpoint.
/// Returns `None` if not authenticated, on any failure, or on the server.
pub async fn fetch_current_user() -> Option<User> {
    #[cfg(feature = "hydrate")]
    {
        let resp = with_auth(gloo_net::http::Request::get(&resolve_url(ME_ENDPOINT)))
            .send()
            .await
            .ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<User>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Exchange an email and password for an access token via the login
/// endpoint. This is the one call that never carries a bearer header: it is
/// how the first credential is obtained.
///
/// # Errors
///
/// Returns an error string if the HTTP request fails or the server rejects
/// the credentials with a non-OK status.
pub async fn request_access_token(email: &str, password: &str) -> Result<String, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(&resolve_url(LOGIN_ENDPOINT))
            .header("Content-Type", "application/x-www-form-urlencoded")
            .body(login_form_body(email, password))
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(login_failed_message(resp.status()));
        }
        #[derive(Deserialize)]
        struct LoginResponse {
            access_token: String,
        }
        let body: LoginResponse = resp.json().await.map_err(|e| e.to_string())?;
        Ok(body.access_token)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password);
        Err("not available on server".to_owned())
    }
}

/// Fetch the data requests currently in workflow status `status`.
///
/// # Errors
///
/// Returns an error string if the HTTP request fails or the server responds
/// with a non-OK status.
pub async fn fetch_data_requests(status: i64) -> Result<Vec<DataRequest>, String> {
    #[cfg(feature = "hydrate")]
    {
        let url = resolve_url(&data_requests_endpoint(status));
        let resp = with_auth(gloo_net::http::Request::get(&url))
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(data_requests_failed_message(resp.status()));
        }
        resp.json::<Vec<DataRequest>>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = status;
        Err("not available on server".to_owned())
    }
}

/// Fetch all request sources for the create-request form.
///
/// # Errors
///
/// Returns an error string if the HTTP request fails or the server responds
/// with a non-OK status.
pub async fn fetch_request_sources() -> Result<Vec<RequestSource>, String> {
    #[cfg(feature = "hydrate")]
    {
        let url = resolve_url("/api/v1/request-sources");
        let resp = with_auth(gloo_net::http::Request::get(&url))
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_sources_failed_message(resp.status()));
        }
        resp.json::<Vec<RequestSource>>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}

/// Fetch all people a data request can be opened for.
///
/// # Errors
///
/// Returns an error string if the HTTP request fails or the server responds
/// with a non-OK status.
pub async fn fetch_people() -> Result<Vec<Person>, String> {
    #[cfg(feature = "hydrate")]
    {
        let url = resolve_url("/api/v1/people");
        let resp = with_auth(gloo_net::http::Request::get(&url))
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(people_failed_message(resp.status()));
        }
        resp.json::<Vec<Person>>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}

/// Create a new data request via `POST /api/v1/data-requests`.
///
/// # Errors
///
/// Returns an error string if the HTTP request fails or the server responds
/// with a non-OK status.
pub async fn create_data_request(payload: &NewDataRequest) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let url = resolve_url("/api/v1/data-requests");
        let resp = with_auth(gloo_net::http::Request::post(&url))
            .json(payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(create_request_failed_message(resp.status()));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = payload;
        Err("not available on server".to_owned())
    }
}
