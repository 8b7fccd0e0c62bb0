//! Catalog API client.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): `fetch_products` returns `CatalogError::Unavailable`
//! so the server renders the initial empty catalog and the browser fetches
//! after hydration.
//!
//! ERROR HANDLING
//! ==============
//! Every failure mode is a `CatalogError` value. Callers decide what the
//! failure means for their state; nothing here panics.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{Product, ProductsResponse};

/// Remote catalog endpoint.
pub const PRODUCTS_URL: &str = "https://apis.ccbp.in/products";

/// Cookie holding the session bearer token.
pub const JWT_COOKIE: &str = "jwt_token";

/// Where the catalog lives and which cookie carries the credential.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CatalogConfig {
    pub endpoint: String,
    pub credential_cookie: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self { endpoint: PRODUCTS_URL.to_owned(), credential_cookie: JWT_COOKIE.to_owned() }
    }
}

/// Errors produced while loading the catalog.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    /// The request never produced a response.
    #[error("catalog request failed: {0}")]
    Transport(String),

    /// The catalog API answered with a non-success status.
    #[error("catalog request returned status {0}")]
    Status(u16),

    /// The response body was not a catalog document.
    #[error("catalog response parse failed: {0}")]
    Decode(String),

    /// Catalog requests are only issued from the browser.
    #[error("not available on server")]
    Unavailable,
}

/// Value for the `Authorization` header.
pub fn bearer_header(token: &str) -> String {
    format!("Bearer {token}")
}

/// Parse a catalog response body into UI products, preserving order.
///
/// # Errors
///
/// Returns `CatalogError::Decode` if the body is not JSON or lacks a
/// well-formed `products` array.
pub fn decode_products(body: &str) -> Result<Vec<Product>, CatalogError> {
    let response: ProductsResponse = serde_json::from_str(body).map_err(|e| CatalogError::Decode(e.to_string()))?;
    Ok(response.into_products())
}

/// Fetch the catalog from `endpoint`, authorized with `token`.
///
/// # Errors
///
/// Returns `CatalogError::Transport` if the request fails, `CatalogError::Status`
/// for a non-2xx response, `CatalogError::Decode` for a malformed body, and
/// `CatalogError::Unavailable` when called outside the browser.
pub async fn fetch_products(endpoint: &str, token: &str) -> Result<Vec<Product>, CatalogError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(endpoint)
            .header("Authorization", &bearer_header(token))
            .send()
            .await
            .map_err(|e| CatalogError::Transport(e.to_string()))?;
        if !resp.ok() {
            return Err(CatalogError::Status(resp.status()));
        }
        let body = resp.text().await.map_err(|e| CatalogError::Transport(e.to_string()))?;
        decode_products(&body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (endpoint, token);
        Err(CatalogError::Unavailable)
    }
}

/// Token to send; empty when the session cookie is absent.
///
/// Without a cookie the request still goes out; the catalog API rejects it and the rejection
/// surfaces as `CatalogError::Status`.
fn request_token(token: Option<&str>) -> &str {
    token.unwrap_or_default()
}

/// Load the catalog with an optional credential.
///
/// Always issues exactly one request, even without a credential.
///
/// # Errors
///
/// Returns whatever [`fetch_products`] returns.
pub async fn load_catalog(config: &CatalogConfig, token: Option<&str>) -> Result<Vec<Product>, CatalogError> {
    fetch_products(&config.endpoint, request_token(token)).await
}
