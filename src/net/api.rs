//! REST API client for the showcase backend.
//!
//! Browser builds (`csr`) make real HTTP calls via `gloo-net`; native
//! builds ship stubs that fail, since the endpoints are only reachable
//! from inside a browser session.
//!
//! ERROR HANDLING
//! ==============
//! Every call resolves to `Result<_, RequestError>`. A non-2xx response is
//! terminal for that call and its display text is the raw response body,
//! which the UI surfaces verbatim. A 2xx body that does not match the
//! endpoint schema is reported as `RequestError::Decode` rather than
//! leaking a shape mismatch into rendering. Nothing is retried and nothing
//! is swallowed.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use thiserror::Error;

use crate::net::types::{CreatedLead, DocumentItem, FaqItem, Lead, NewLead, ProjectItem};
use crate::state::identity::Identity;

/// Request header carrying the host-issued token, verbatim.
pub const INIT_DATA_HEADER: &str = "X-Telegram-Init-Data";

/// Page size for the admin lead listing.
pub const ADMIN_LEADS_LIMIT: u32 = 200;

#[cfg(not(feature = "csr"))]
const BROWSER_ONLY: &str = "API requests are only available in the browser";

/// Failure of a single API call.
#[derive(Debug, Error)]
pub enum RequestError {
    /// Non-2xx response. Displays as the raw response body text.
    #[error("{body}")]
    Status { status: u16, body: String },
    /// Transport failure before a response arrived.
    #[error("{0}")]
    Network(String),
    /// 2xx response whose body did not match the expected schema.
    #[error("malformed response: {0}")]
    Decode(String),
}

/// The identity header for an authenticated call: present exactly when the
/// host issued a token. A missing token sends no header at all — absence
/// is never disguised as an empty token.
pub fn auth_header(identity: &Identity) -> Option<(&'static str, &str)> {
    identity
        .token
        .as_deref()
        .map(|token| (INIT_DATA_HEADER, token))
}

/// Fetch the FAQ entries from `GET /api/content/faq`.
pub async fn fetch_faq() -> Result<Vec<FaqItem>, RequestError> {
    #[cfg(feature = "csr")]
    {
        get_json("/api/content/faq").await
    }
    #[cfg(not(feature = "csr"))]
    {
        Err(RequestError::Network(BROWSER_ONLY.to_owned()))
    }
}

/// Fetch the document list from `GET /api/content/documents`.
pub async fn fetch_documents() -> Result<Vec<DocumentItem>, RequestError> {
    #[cfg(feature = "csr")]
    {
        get_json("/api/content/documents").await
    }
    #[cfg(not(feature = "csr"))]
    {
        Err(RequestError::Network(BROWSER_ONLY.to_owned()))
    }
}

/// Fetch the project list from `GET /api/content/projects`.
pub async fn fetch_projects() -> Result<Vec<ProjectItem>, RequestError> {
    #[cfg(feature = "csr")]
    {
        get_json("/api/content/projects").await
    }
    #[cfg(not(feature = "csr"))]
    {
        Err(RequestError::Network(BROWSER_ONLY.to_owned()))
    }
}

/// Submit a new lead via `POST /api/leads`.
///
/// The backend requires host authentication; the call is still made
/// without a token and the backend's refusal comes back as a normal
/// status error.
pub async fn submit_lead(identity: &Identity, lead: &NewLead) -> Result<CreatedLead, RequestError> {
    #[cfg(feature = "csr")]
    {
        let request = authed(gloo_net::http::Request::post("/api/leads"), identity)
            .json(lead)
            .map_err(|e| RequestError::Network(e.to_string()))?;
        let response = request
            .send()
            .await
            .map_err(|e| RequestError::Network(e.to_string()))?;
        decode(response).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (identity, lead);
        Err(RequestError::Network(BROWSER_ONLY.to_owned()))
    }
}

/// Fetch the lead collection via `GET /api/admin/leads?limit=N`.
///
/// Requires an elevated identity; the backend's 403 surfaces as a status
/// error that the admin panel renders as its access-restricted state.
pub async fn fetch_admin_leads(identity: &Identity) -> Result<Vec<Lead>, RequestError> {
    #[cfg(feature = "csr")]
    {
        let path = format!("/api/admin/leads?limit={ADMIN_LEADS_LIMIT}");
        let response = authed(gloo_net::http::Request::get(&path), identity)
            .send()
            .await
            .map_err(|e| RequestError::Network(e.to_string()))?;
        decode(response).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = identity;
        Err(RequestError::Network(BROWSER_ONLY.to_owned()))
    }
}

/// Change one lead's status via `PATCH /api/admin/leads/{id}`.
///
/// The response body is not used beyond success/failure.
pub async fn update_lead_status(
    identity: &Identity,
    id: i64,
    status: &str,
) -> Result<(), RequestError> {
    #[cfg(feature = "csr")]
    {
        let path = format!("/api/admin/leads/{id}");
        let request = authed(gloo_net::http::Request::patch(&path), identity)
            .json(&serde_json::json!({ "status": status }))
            .map_err(|e| RequestError::Network(e.to_string()))?;
        let response = request
            .send()
            .await
            .map_err(|e| RequestError::Network(e.to_string()))?;
        if response.ok() {
            Ok(())
        } else {
            Err(status_error(response).await)
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (identity, id, status);
        Err(RequestError::Network(BROWSER_ONLY.to_owned()))
    }
}

/// Download the CSV export via `GET /api/admin/export/leads.csv`.
///
/// Binary body: this is the one authenticated path that does not decode
/// JSON, so it bypasses the JSON helpers but reuses the same header
/// convention.
pub async fn export_leads_csv(identity: &Identity) -> Result<Vec<u8>, RequestError> {
    #[cfg(feature = "csr")]
    {
        let response = authed(
            gloo_net::http::Request::get("/api/admin/export/leads.csv"),
            identity,
        )
        .send()
        .await
        .map_err(|e| RequestError::Network(e.to_string()))?;
        if !response.ok() {
            return Err(status_error(response).await);
        }
        response
            .binary()
            .await
            .map_err(|e| RequestError::Network(e.to_string()))
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = identity;
        Err(RequestError::Network(BROWSER_ONLY.to_owned()))
    }
}

/// Attach the identity header when a token exists.
#[cfg(feature = "csr")]
fn authed(
    builder: gloo_net::http::RequestBuilder,
    identity: &Identity,
) -> gloo_net::http::RequestBuilder {
    match auth_header(identity) {
        Some((name, value)) => builder.header(name, value),
        None => builder,
    }
}

/// Unauthenticated GET returning parsed JSON.
#[cfg(feature = "csr")]
async fn get_json<T: serde::de::DeserializeOwned>(path: &str) -> Result<T, RequestError> {
    let response = gloo_net::http::Request::get(path)
        .send()
        .await
        .map_err(|e| RequestError::Network(e.to_string()))?;
    decode(response).await
}

/// Turn a response into parsed JSON or the uniform failure.
#[cfg(feature = "csr")]
async fn decode<T: serde::de::DeserializeOwned>(
    response: gloo_net::http::Response,
) -> Result<T, RequestError> {
    if !response.ok() {
        return Err(status_error(response).await);
    }
    response
        .json::<T>()
        .await
        .map_err(|e| RequestError::Decode(e.to_string()))
}

/// Capture a non-2xx response as a status error carrying the body text.
#[cfg(feature = "csr")]
async fn status_error(response: gloo_net::http::Response) -> RequestError {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    RequestError::Status { status, body }
}
