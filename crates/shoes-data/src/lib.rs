//! Outbound HTTP client utilities for the RocketShoes storefront.
//!
//! Provides a small builder API over Spin's outbound HTTP with automatic
//! JSON handling. The storefront talks to a JSON API, so the common path
//! is a GET followed by a typed decode.
//!
//! # Example
//!
//! ```rust,ignore
//! use shoes_data::FetchClient;
//! use serde::Deserialize;
//!
//! #[derive(Deserialize)]
//! struct Stock {
//!     id: u64,
//!     amount: i64,
//! }
//!
//! let client = FetchClient::new().with_base_url("http://localhost:3333");
//!
//! let stock: Stock = client
//!     .get("/stock/1")
//!     .send()?
//!     .error_for_status()?
//!     .json()?;
//! ```

mod error;
mod request;
mod response;

pub use error::FetchError;
pub use request::{Method, RequestBuilder};
pub use response::Response;

/// HTTP client for making outbound requests.
///
/// A lightweight wrapper around Spin's HTTP client with a convenient
/// builder API. Requests suspend the caller until the response arrives;
/// no timeout or retry is applied.
pub struct FetchClient {
    base_url: Option<String>,
    default_headers: std::collections::HashMap<String, String>,
}

impl Default for FetchClient {
    fn default() -> Self {
        Self::new()
    }
}

impl FetchClient {
    /// Create a new HTTP client.
    pub fn new() -> Self {
        Self {
            base_url: None,
            default_headers: std::collections::HashMap::new(),
        }
    }

    /// Create a client with a base URL prepended to all relative requests.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Add a default header included in all requests.
    pub fn with_default_header(
        mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.default_headers.insert(key.into(), value.into());
        self
    }

    /// Create a GET request.
    pub fn get(&self, url: impl Into<String>) -> ClientRequestBuilder {
        self.request(Method::Get, url)
    }

    /// Create a POST request.
    pub fn post(&self, url: impl Into<String>) -> ClientRequestBuilder {
        self.request(Method::Post, url)
    }

    /// Create a PUT request.
    pub fn put(&self, url: impl Into<String>) -> ClientRequestBuilder {
        self.request(Method::Put, url)
    }

    /// Create a DELETE request.
    pub fn delete(&self, url: impl Into<String>) -> ClientRequestBuilder {
        self.request(Method::Delete, url)
    }

    /// Create a request with an explicit method.
    pub fn request(&self, method: Method, url: impl Into<String>) -> ClientRequestBuilder {
        let url = url.into();
        let full_url = match &self.base_url {
            Some(base) => {
                if url.starts_with("http://") || url.starts_with("https://") {
                    url
                } else {
                    format!(
                        "{}/{}",
                        base.trim_end_matches('/'),
                        url.trim_start_matches('/')
                    )
                }
            }
            None => url,
        };

        let mut builder = RequestBuilder::new(method, full_url);
        for (key, value) in &self.default_headers {
            builder = builder.header(key.clone(), value.clone());
        }

        ClientRequestBuilder { builder }
    }
}

/// A request builder bound to a client.
pub struct ClientRequestBuilder {
    builder: RequestBuilder,
}

impl ClientRequestBuilder {
    /// Add a header to the request.
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.builder = self.builder.header(key, value);
        self
    }

    /// Set the request body as JSON.
    pub fn json<T: serde::Serialize>(mut self, value: &T) -> Result<Self, FetchError> {
        self.builder = self.builder.json(value)?;
        Ok(self)
    }

    /// Add a bearer token authorization header.
    pub fn bearer_auth(mut self, token: impl AsRef<str>) -> Self {
        self.builder = self.builder.bearer_auth(token);
        self
    }

    /// Send the request and return the response.
    #[cfg(target_arch = "wasm32")]
    pub fn send(self) -> Result<Response, FetchError> {
        use spin_sdk::http::{Method as SpinMethod, Request};

        let method = match self.builder.method {
            Method::Get => SpinMethod::Get,
            Method::Post => SpinMethod::Post,
            Method::Put => SpinMethod::Put,
            Method::Delete => SpinMethod::Delete,
        };

        let mut request = Request::builder();
        request.method(method);
        request.uri(&self.builder.url);

        for (key, value) in &self.builder.headers {
            request.header(key.as_str(), value.as_str());
        }

        let request = match self.builder.body {
            Some(body) => request.body(body).build(),
            None => request.build(),
        };

        let response = spin_sdk::http::send(request)
            .map_err(|e| FetchError::RequestError(e.to_string()))?;

        let status = response.status();
        let headers: std::collections::HashMap<String, String> = response
            .headers()
            .map(|(k, v)| (k.to_string(), v.to_str().unwrap_or("").to_string()))
            .collect();
        let body = response.into_body();

        Ok(Response::new(status, headers, body))
    }

    /// Send the request (non-WASM build).
    ///
    /// Outbound HTTP is only available under a Spin host; native builds
    /// get an error instead of a silent empty response.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn send(self) -> Result<Response, FetchError> {
        Err(FetchError::RequestError(format!(
            "outbound HTTP is unavailable on native targets: {} {}",
            self.builder.method.as_str(),
            self.builder.url
        )))
    }
}

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{FetchClient, FetchError, Method, Response};
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_joining() {
        let client = FetchClient::new().with_base_url("http://localhost:3333/");
        let req = client.get("/stock/1");
        assert_eq!(req.builder.url, "http://localhost:3333/stock/1");

        let req = client.get("products/1");
        assert_eq!(req.builder.url, "http://localhost:3333/products/1");
    }

    #[test]
    fn test_absolute_url_bypasses_base() {
        let client = FetchClient::new().with_base_url("http://localhost:3333");
        let req = client.get("https://example.com/other");
        assert_eq!(req.builder.url, "https://example.com/other");
    }

    #[test]
    fn test_no_base_url_passes_through() {
        let client = FetchClient::new();
        let req = client.get("http://example.com/stock/1");
        assert_eq!(req.builder.url, "http://example.com/stock/1");
    }

    #[test]
    fn test_default_headers_applied() {
        let client = FetchClient::new()
            .with_base_url("http://localhost:3333")
            .with_default_header("Accept", "application/json");

        let req = client.get("/stock/1");
        assert_eq!(
            req.builder.headers.get("Accept").unwrap(),
            "application/json"
        );
    }

    #[test]
    fn test_request_method() {
        let client = FetchClient::new();
        assert_eq!(client.post("/x").builder.method, Method::Post);
        assert_eq!(client.delete("/x").builder.method, Method::Delete);
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn test_native_send_is_an_error() {
        let client = FetchClient::new().with_base_url("http://localhost:3333");
        let result = client.get("/stock/1").send();
        assert!(matches!(result, Err(FetchError::RequestError(_))));
    }
}
