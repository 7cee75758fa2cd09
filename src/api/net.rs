// src/api/net.rs
//
// Blocking HTTP behind a small trait so the client can be driven by a fake
// in tests. The real transport is `ehttp`; callers run it off the UI thread.

use crate::config::consts::USER_AGENT;
use super::error::{ApiError, ApiResult};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

#[derive(Clone, Debug, PartialEq)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    /// JSON body (POST only)
    pub body: Option<Vec<u8>>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct HttpResponse {
    pub url: String,
    pub status: u16,
    pub status_text: String,
    pub body: Vec<u8>,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

pub trait Transport: Send + Sync {
    fn send(&self, req: &HttpRequest) -> ApiResult<HttpResponse>;
}

/// `ehttp::fetch_blocking`. Never call this on the UI thread.
#[derive(Clone, Copy, Debug, Default)]
pub struct EhttpTransport;

impl Transport for EhttpTransport {
    fn send(&self, req: &HttpRequest) -> ApiResult<HttpResponse> {
        let mut request = match req.method {
            Method::Get => ehttp::Request::get(&req.url),
            Method::Post => ehttp::Request::post(&req.url, req.body.clone().unwrap_or_default()),
        };
        request.headers = match req.method {
            Method::Get => ehttp::Headers::new(&[
                ("Accept", "application/json"),
                ("User-Agent", USER_AGENT),
            ]),
            Method::Post => ehttp::Headers::new(&[
                ("Accept", "application/json"),
                ("Content-Type", "application/json"),
                ("User-Agent", USER_AGENT),
            ]),
        };

        let resp = ehttp::fetch_blocking(&request).map_err(|reason| ApiError::Transport {
            url: req.url.clone(),
            reason,
        })?;

        Ok(HttpResponse {
            url: resp.url,
            status: resp.status,
            status_text: resp.status_text,
            body: resp.bytes,
        })
    }
}
