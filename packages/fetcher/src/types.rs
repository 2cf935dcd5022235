//! Request descriptor types.

use std::fmt;

use reqwest::multipart::Form;
use reqwest::Method;
use serde::Serialize;

use crate::error::Result;

/// Scalar query parameter value.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryValue {
    Str(String),
    Int(i64),
    UInt(u64),
    Float(f64),
    Bool(bool),
}

impl fmt::Display for QueryValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryValue::Str(s) => f.write_str(s),
            QueryValue::Int(n) => write!(f, "{}", n),
            QueryValue::UInt(n) => write!(f, "{}", n),
            QueryValue::Float(n) => write!(f, "{}", n),
            QueryValue::Bool(b) => write!(f, "{}", b),
        }
    }
}

impl From<&str> for QueryValue {
    fn from(value: &str) -> Self {
        QueryValue::Str(value.to_string())
    }
}

impl From<String> for QueryValue {
    fn from(value: String) -> Self {
        QueryValue::Str(value)
    }
}

impl From<bool> for QueryValue {
    fn from(value: bool) -> Self {
        QueryValue::Bool(value)
    }
}

impl From<f64> for QueryValue {
    fn from(value: f64) -> Self {
        QueryValue::Float(value)
    }
}

macro_rules! int_query_value {
    ($variant:ident, $wide:ty: $($t:ty),*) => {
        $(
            impl From<$t> for QueryValue {
                fn from(value: $t) -> Self {
                    QueryValue::$variant(value as $wide)
                }
            }
        )*
    };
}

int_query_value!(Int, i64: i32, i64);
int_query_value!(UInt, u64: u32, u64, usize);

/// Request body.
///
/// `Json` is serialized to text before sending. `Multipart` is handed to the
/// transport untouched so it can write its own boundary header.
#[derive(Debug)]
pub enum Body {
    Json(serde_json::Value),
    Multipart(Form),
}

/// Everything needed to describe one outbound call besides its path.
#[derive(Debug, Default)]
pub struct FetchOptions {
    /// Defaults to GET
    pub method: Method,
    /// Merged over the default `Content-Type: application/json`
    pub headers: Vec<(String, String)>,
    pub body: Option<Body>,
    /// Ordered; `None` values are dropped before encoding
    pub params: Option<Vec<(String, Option<QueryValue>)>>,
    /// Overrides the fetcher's configured base URL
    pub base_url: Option<String>,
}

impl FetchOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get() -> Self {
        Self::new()
    }

    pub fn post() -> Self {
        Self::new().method(Method::POST)
    }

    pub fn method(mut self, method: Method) -> Self {
        self.method = method;
        self
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    pub fn bearer(self, token: &str) -> Self {
        self.header("Authorization", format!("Bearer {}", token))
    }

    /// Attach a JSON body from any serializable value.
    pub fn json<T: Serialize + ?Sized>(mut self, body: &T) -> Result<Self> {
        self.body = Some(Body::Json(serde_json::to_value(body)?));
        Ok(self)
    }

    pub fn multipart(mut self, form: Form) -> Self {
        self.body = Some(Body::Multipart(form));
        self
    }

    pub fn param(self, key: impl Into<String>, value: impl Into<QueryValue>) -> Self {
        self.param_opt(key, Some(value))
    }

    /// Add a parameter that may be undefined. Undefined parameters keep
    /// their slot in the mapping but never reach the query string.
    pub fn param_opt<V: Into<QueryValue>>(mut self, key: impl Into<String>, value: Option<V>) -> Self {
        self.params
            .get_or_insert_with(Vec::new)
            .push((key.into(), value.map(Into::into)));
        self
    }

    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }
}
