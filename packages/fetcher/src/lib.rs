//! Request fetcher.
//!
//! Every outbound HTTP call goes through [`Fetcher::fetch`] so that base URL
//! resolution, query encoding, body encoding and error translation behave the
//! same everywhere.
//!
//! # Example
//!
//! ```rust,ignore
//! use fetcher::{Fetcher, FetchOptions};
//!
//! let fetcher = Fetcher::from_env()?;
//!
//! let res = fetcher
//!     .fetch("/api/projects", FetchOptions::get().param("page", 2))
//!     .await?;
//! let body: serde_json::Value = res.json().await?;
//! ```
//!
//! Non-2xx responses become [`FetchError::Http`]; successful responses are
//! returned undecoded so callers pick their own representation.

pub mod error;
pub mod types;

pub use error::{FetchError, Result};
pub use types::{Body, FetchOptions, QueryValue};

pub use reqwest::multipart;
pub use reqwest::{Method, Response};

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE};
use reqwest::{Client, Request};
use tracing::{debug, error};
use url::{form_urlencoded, Url};

/// Fetcher configuration.
#[derive(Debug, Clone, Default)]
pub struct FetcherConfig {
    /// Prefixed to every path unless a request overrides it
    pub base_url: String,
    pub timeout: Option<Duration>,
}

impl FetcherConfig {
    /// Load from `THINK_FLOW_BASE_URL` and `THINK_FLOW_FETCH_TIMEOUT_SECS`.
    pub fn from_env() -> Result<Self> {
        let base_url = std::env::var("THINK_FLOW_BASE_URL").unwrap_or_default();
        let timeout = match std::env::var("THINK_FLOW_FETCH_TIMEOUT_SECS") {
            Ok(raw) => {
                let secs: u64 = raw.parse().map_err(|_| {
                    FetchError::Config(format!(
                        "THINK_FLOW_FETCH_TIMEOUT_SECS must be a number of seconds, got '{}'",
                        raw
                    ))
                })?;
                Some(Duration::from_secs(secs))
            }
            Err(_) => None,
        };

        Ok(Self { base_url, timeout })
    }
}

/// Outbound HTTP wrapper.
#[derive(Clone)]
pub struct Fetcher {
    client: Client,
    base_url: String,
}

impl Fetcher {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }

    pub fn with_config(config: FetcherConfig) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            base_url: config.base_url,
        })
    }

    pub fn from_env() -> Result<Self> {
        Self::with_config(FetcherConfig::from_env()?)
    }

    /// Issue a request and fail on any non-2xx status.
    pub async fn fetch(&self, path: &str, options: FetchOptions) -> Result<Response> {
        let result = self.send(path, options).await;
        if let Err(err) = &result {
            error!(path, error = %err, "Fetcher error");
        }
        result
    }

    pub async fn get(&self, path: &str) -> Result<Response> {
        self.fetch(path, FetchOptions::get()).await
    }

    async fn send(&self, path: &str, options: FetchOptions) -> Result<Response> {
        let request = self.build_request(path, options)?;
        debug!(method = %request.method(), url = %request.url(), "Sending request");

        let response = self.client.execute(request).await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await?;
            return Err(FetchError::Http {
                status: status.as_u16(),
                body,
            });
        }

        Ok(response)
    }

    /// Build the request `fetch` would send, without sending it.
    pub fn build_request(&self, path: &str, options: FetchOptions) -> Result<Request> {
        let FetchOptions {
            method,
            headers,
            body,
            params,
            base_url,
        } = options;

        let base = base_url.as_deref().unwrap_or(&self.base_url);
        let url = resolve_url(base, path, params.as_deref())?;

        let mut header_map = HeaderMap::new();
        header_map.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        for (name, value) in headers {
            let header_name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|_| FetchError::InvalidHeader(name.clone()))?;
            let header_value =
                HeaderValue::from_str(&value).map_err(|_| FetchError::InvalidHeader(name))?;
            header_map.insert(header_name, header_value);
        }

        let builder = self.client.request(method, url);
        let builder = match body {
            Some(Body::Json(value)) => builder
                .headers(header_map)
                .body(serde_json::to_string(&value)?),
            Some(Body::Multipart(form)) => {
                // The transport writes multipart/form-data with its boundary.
                header_map.remove(CONTENT_TYPE);
                builder.headers(header_map).multipart(form)
            }
            None => builder.headers(header_map),
        };

        Ok(builder.build()?)
    }
}

/// `base + path`, plus `?query` when a parameter mapping was supplied.
pub fn resolve_url(
    base: &str,
    path: &str,
    params: Option<&[(String, Option<QueryValue>)]>,
) -> Result<Url> {
    let mut raw = format!("{}{}", base, path);

    if let Some(params) = params.filter(|p| !p.is_empty()) {
        raw.push('?');
        raw.push_str(&encode_query(params));
    }

    Url::parse(&raw).map_err(|e| FetchError::InvalidUrl {
        url: raw.clone(),
        reason: e.to_string(),
    })
}

/// Form-encode the defined parameters in order.
pub fn encode_query(params: &[(String, Option<QueryValue>)]) -> String {
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    for (key, value) in params {
        if let Some(value) = value {
            serializer.append_pair(key, &value.to_string());
        }
    }
    serializer.finish()
}
