// src/api/client.rs
//! Typed client for the AmaSift Compare REST API.
//!
//! One method per endpoint. Responses are decoded into the records in
//! [`super::types`] right here at the boundary; a body that doesn't fit is an
//! [`ApiError::Decode`], never a half-filled value.
//!
//! All calls block. The GUI runs them on worker threads (see
//! `gui::actions::fetch`); the CLI calls them directly.

use std::sync::Arc;

use serde::{de::DeserializeOwned, Serialize};

use crate::config::consts::MIN_COMPARE;
use crate::config::options::ApiOptions;

use super::error::{ApiError, ApiResult};
use super::net::{EhttpTransport, HttpRequest, HttpResponse, Method, Transport};
use super::query::{encode_pairs, encode_segment, ProductQuery};
use super::types::*;

#[derive(Clone)]
pub struct ApiClient {
    base: String,
    transport: Arc<dyn Transport>,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient").field("base", &self.base).finish()
    }
}

impl ApiClient {
    pub fn new(opts: &ApiOptions) -> Self {
        Self::with_transport(opts, Arc::new(EhttpTransport))
    }

    pub fn with_transport(opts: &ApiOptions, transport: Arc<dyn Transport>) -> Self {
        Self {
            base: s!(opts.base_url.trim_end_matches('/')),
            transport,
        }
    }

    pub fn base_url(&self) -> &str { &self.base }

    fn url(&self, path: &str, query: &str) -> String {
        if query.is_empty() {
            join!(&self.base, path)
        } else {
            join!(&self.base, path, "?", query)
        }
    }

    fn check(resp: HttpResponse) -> ApiResult<HttpResponse> {
        if resp.is_success() {
            return Ok(resp);
        }
        let detail = String::from_utf8_lossy(&resp.body);
        tracing::debug!("API: {} {} body: {:.200}", resp.status, resp.url, detail);
        Err(ApiError::Status {
            code: resp.status,
            text: resp.status_text,
            url: resp.url,
        })
    }

    fn decode<T: DeserializeOwned>(resp: HttpResponse) -> ApiResult<T> {
        serde_json::from_slice(&resp.body).map_err(|source| ApiError::Decode {
            url: resp.url,
            source,
        })
    }

    fn get_json<T: DeserializeOwned>(&self, path: &str, query: &str) -> ApiResult<T> {
        let url = self.url(path, query);
        tracing::debug!("API: GET {}", url);
        let resp = self.transport.send(&HttpRequest { method: Method::Get, url, body: None })?;
        Self::decode(Self::check(resp)?)
    }

    fn post_json<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> ApiResult<T> {
        let url = self.url(path, "");
        let bytes = serde_json::to_vec(body).map_err(|e| ApiError::Request(e.to_string()))?;
        tracing::debug!("API: POST {} ({} bytes)", url, bytes.len());
        let resp = self.transport.send(&HttpRequest { method: Method::Post, url, body: Some(bytes) })?;
        Self::decode(Self::check(resp)?)
    }

    /* ---------- categories ---------- */

    pub fn categories(&self, with_count: bool) -> ApiResult<Vec<Category>> {
        self.get_json("/categories", &encode_pairs(&[("with_count", with_count.to_string())]))
    }

    /* ---------- products ---------- */

    pub fn products(&self, query: &ProductQuery) -> ApiResult<Vec<Product>> {
        self.get_json("/products", &query.to_query_string())
    }

    pub fn product(&self, id: &ProductId, with_reviews: bool) -> ApiResult<Product> {
        let path = join!("/products/", &encode_segment(id.as_str()));
        let query = if with_reviews { s!("with_reviews=true") } else { s!() };
        self.get_json(&path, &query)
    }

    pub fn deals(&self, limit: u32) -> ApiResult<Vec<Product>> {
        self.get_json("/products/deals", &encode_pairs(&[("limit", limit.to_string())]))
    }

    /* ---------- comparison ---------- */

    /// `POST /compare`. Needs at least two ids. Accepts both the object and
    /// the bare-list response shape and normalizes to [`CompareResult`].
    pub fn compare(&self, ids: &[ProductId], session_id: Option<&str>) -> ApiResult<CompareResult> {
        if ids.len() < MIN_COMPARE {
            return Err(ApiError::Request(format!(
                "need at least {} products to compare, got {}",
                MIN_COMPARE,
                ids.len()
            )));
        }

        let req = CompareRequest {
            product_ids: ids.to_vec(),
            session_id: session_id.map(|s| s!(s)),
        };
        let wire: CompareWire = self.post_json("/compare", &req)?;
        if wire.is_list() {
            tracing::info!("API: /compare answered with a bare product list");
        }

        let result = wire.into_result();
        if let Some(err) = result.error {
            return Err(ApiError::Backend(err));
        }
        Ok(result)
    }

    pub fn history(&self, session_id: &str, limit: u32) -> ApiResult<Vec<HistoryEntry>> {
        let q = encode_pairs(&[("session_id", s!(session_id)), ("limit", limit.to_string())]);
        self.get_json("/compare/history", &q)
    }

    /* ---------- reviews ---------- */

    pub fn reviews(&self, id: &ProductId, limit: u32, offset: u32) -> ApiResult<Vec<Review>> {
        let path = join!("/reviews/product/", &encode_segment(id.as_str()));
        let q = encode_pairs(&[("limit", limit.to_string()), ("offset", offset.to_string())]);
        self.get_json(&path, &q)
    }

    pub fn review_stats(&self, id: &ProductId) -> ApiResult<ReviewStats> {
        self.get_json(&join!("/reviews/stats/", &encode_segment(id.as_str())), "")
    }

    pub fn review_sentiment(&self, id: &ProductId) -> ApiResult<ReviewSentiment> {
        self.get_json(&join!("/reviews/sentiment/", &encode_segment(id.as_str())), "")
    }
}
