use std::sync::Arc;
use std::time::Duration;

use dxkit_core::ApiServer;
use serde_json::{Map, Value};
use tracing::debug;

use crate::error::{Error, Result};

/// Per-request settings that travel beside the request body.
///
/// Recognized keys are `timeout` (seconds) and `headers` (an object of string
/// values). Anything else is kept so a transport can inspect it, but the HTTP
/// transport ignores it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestOptions(Map<String, Value>);

impl RequestOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }

    /// `timeout` as a duration. Non-numeric or negative values are ignored.
    pub fn timeout(&self) -> Option<Duration> {
        self.0
            .get("timeout")
            .and_then(Value::as_f64)
            .filter(|secs| secs.is_finite() && *secs >= 0.0)
            .map(Duration::from_secs_f64)
    }

    /// String entries of `headers`, in key order.
    pub fn headers(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0
            .get("headers")
            .and_then(Value::as_object)
            .into_iter()
            .flat_map(|headers| headers.iter())
            .filter_map(|(name, value)| value.as_str().map(|value| (name.as_str(), value)))
    }
}

impl From<Map<String, Value>> for RequestOptions {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

/// Blocking request/response channel to the API server.
///
/// `route` is the API path, e.g. `/system/findDataObjects` or
/// `/file-xxxx/describe`; `input` is the JSON request body.
pub trait Transport {
    fn call(&self, route: &str, input: &Value, options: &RequestOptions) -> Result<Value>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn call(&self, route: &str, input: &Value, options: &RequestOptions) -> Result<Value> {
        (**self).call(route, input, options)
    }
}

impl<T: Transport + ?Sized> Transport for Box<T> {
    fn call(&self, route: &str, input: &Value, options: &RequestOptions) -> Result<Value> {
        (**self).call(route, input, options)
    }
}

impl<T: Transport + ?Sized> Transport for Arc<T> {
    fn call(&self, route: &str, input: &Value, options: &RequestOptions) -> Result<Value> {
        (**self).call(route, input, options)
    }
}

/// JSON-over-HTTP transport.
///
/// Every call is a single POST; there are no retries and no request timeout
/// unless the request options carry one.
pub struct HttpTransport {
    client: reqwest::blocking::Client,
    base_url: String,
}

impl HttpTransport {
    pub fn new(api: &ApiServer) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(None)
            .user_agent(concat!("dxkit/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            base_url: api.base_url(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl Transport for HttpTransport {
    fn call(&self, route: &str, input: &Value, options: &RequestOptions) -> Result<Value> {
        let url = format!("{}{}", self.base_url, route);
        debug!(%url, "POST");

        let mut request = self.client.post(&url).json(input);
        if let Some(timeout) = options.timeout() {
            request = request.timeout(timeout);
        }
        for (name, value) in options.headers() {
            request = request.header(name, value);
        }
        for (key, _) in options.iter() {
            if key != "timeout" && key != "headers" {
                debug!(option = %key, "request option not supported over HTTP, ignored");
            }
        }

        let response = request.send()?;
        let status = response.status();
        let body = response.text()?;

        if !status.is_success() {
            return Err(Error::from_response_body(status.as_u16(), &body));
        }

        serde_json::from_str(&body).map_err(|e| {
            Error::InvalidResponse(format!("failed to parse response: {}, body: {}", e, body))
        })
    }
}
