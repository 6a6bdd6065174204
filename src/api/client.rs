// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::sync::Arc;
use std::time::Duration;

use reqwest::Method;
use reqwest::header::CONTENT_TYPE;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

use crate::error::{ApiError, NETWORK_STATUS};

const UA: &str = concat!("cashlog/", env!("CARGO_PKG_VERSION"));

/// One call as handed to a [`Transport`]. `path` is relative to the base URL.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub body: Option<Value>,
    /// Whether the request is a JSON call (sets `Content-Type`).
    pub json: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RawResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

/// Moves requests over the wire. Any response, whatever its status, is
/// `Ok`; only failures to get a response at all are `Err` (status 0).
pub trait Transport: Send + Sync {
    fn send(&self, request: &ApiRequest) -> Result<RawResponse, ApiError>;
}

pub struct HttpTransport {
    base_url: String,
    client: reqwest::blocking::Client,
}

impl HttpTransport {
    /// Cookies set by the backend are kept for the lifetime of the
    /// transport so session-bound calls stay authenticated.
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self, reqwest::Error> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .user_agent(UA)
            .cookie_store(true)
            .build()?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl Transport for HttpTransport {
    fn send(&self, request: &ApiRequest) -> Result<RawResponse, ApiError> {
        let url = format!("{}{}", self.base_url, request.path);
        let mut builder = self.client.request(request.method.clone(), url);
        if request.json {
            builder = builder.header(CONTENT_TYPE, "application/json");
        }
        if let Some(body) = &request.body {
            builder = builder.body(body.to_string());
        }
        let resp = builder.send().map_err(ApiError::network)?;
        let status = resp.status().as_u16();
        let body = resp.bytes().map_err(ApiError::network)?.to_vec();
        Ok(RawResponse { status, body })
    }
}

/// Typed JSON calls on top of a [`Transport`].
///
/// Cloning is cheap; every resource client holds its own clone.
#[derive(Clone)]
pub struct ApiClient {
    transport: Arc<dyn Transport>,
}

impl ApiClient {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    pub fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.request(Method::GET, path, None)
    }

    pub fn post<T, B>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.request(Method::POST, path, Some(encode(body)?))
    }

    pub fn put<T, B>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.request(Method::PUT, path, Some(encode(body)?))
    }

    pub fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.request(Method::DELETE, path, None)
    }

    /// Raw GET without JSON handling, for file downloads.
    pub fn download(&self, path: &str) -> Result<Vec<u8>, ApiError> {
        debug!(path, "download");
        let resp = self.transport.send(&ApiRequest {
            method: Method::GET,
            path: path.to_string(),
            body: None,
            json: false,
        })?;
        if !is_success(resp.status) {
            return Err(ApiError::download_failed(resp.status));
        }
        Ok(resp.body)
    }

    fn request<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
    ) -> Result<T, ApiError> {
        debug!(%method, path, "api request");
        let resp = self.transport.send(&ApiRequest {
            method,
            path: path.to_string(),
            body,
            json: true,
        })?;
        if !is_success(resp.status) {
            let err = ApiError::from_response(resp.status, &resp.body);
            debug!(status = err.status, message = %err.message, "api request failed");
            return Err(err);
        }
        if resp.status == 204 || resp.body.is_empty() {
            return serde_json::from_value(Value::Null)
                .map_err(|e| ApiError::malformed(resp.status, e));
        }
        serde_json::from_slice(&resp.body).map_err(|e| ApiError::malformed(resp.status, e))
    }
}

fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

fn encode<B: Serialize + ?Sized>(body: &B) -> Result<Value, ApiError> {
    serde_json::to_value(body).map_err(|e| ApiError {
        status: NETWORK_STATUS,
        message: format!("Could not encode request body: {}", e),
        details: None,
    })
}

/// Appends the present parameters as a query string; absent ones are left out.
pub fn with_query(path: &str, params: &[(&str, Option<String>)]) -> String {
    let pairs: Vec<String> = params
        .iter()
        .filter_map(|(k, v)| v.as_ref().map(|v| format!("{}={}", k, v)))
        .collect();
    if pairs.is_empty() {
        path.to_string()
    } else {
        format!("{}?{}", path, pairs.join("&"))
    }
}
