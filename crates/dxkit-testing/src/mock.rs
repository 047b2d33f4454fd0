//! In-memory stand-ins for the API server and the wall clock.

use std::collections::VecDeque;
use std::sync::Mutex;

use dxkit_core::Clock;
use dxkit_sdk::{Error, RequestOptions, Result, Transport};
use serde_json::Value;

/// One call seen by [`MockTransport`].
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedRequest {
    pub route: String,
    pub input: Value,
    pub options: RequestOptions,
}

/// Transport that answers from a script, in order, and records every call.
///
/// # Example
/// ```
/// use dxkit_testing::MockTransport;
/// use serde_json::json;
///
/// let mock = MockTransport::new()
///     .respond(json!({"results": [{"id": "file-1"}], "next": null}));
/// ```
#[derive(Default)]
pub struct MockTransport {
    script: Mutex<VecDeque<Result<Value>>>,
    requests: Mutex<Vec<RecordedRequest>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a successful response.
    pub fn respond(self, response: Value) -> Self {
        self.push(Ok(response));
        self
    }

    /// Queue a failure, e.g. `Error::api(500, "InternalError", "boom")`.
    pub fn fail(self, error: Error) -> Self {
        self.push(Err(error));
        self
    }

    /// Every request received so far, oldest first.
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests
            .lock()
            .expect("mock request log poisoned")
            .clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests
            .lock()
            .expect("mock request log poisoned")
            .len()
    }

    /// Scripted responses not consumed yet.
    pub fn remaining(&self) -> usize {
        self.script.lock().expect("mock script poisoned").len()
    }

    fn push(&self, response: Result<Value>) {
        self.script
            .lock()
            .expect("mock script poisoned")
            .push_back(response);
    }
}

impl Transport for MockTransport {
    fn call(&self, route: &str, input: &Value, options: &RequestOptions) -> Result<Value> {
        self.requests
            .lock()
            .expect("mock request log poisoned")
            .push(RecordedRequest {
                route: route.to_string(),
                input: input.clone(),
                options: options.clone(),
            });

        self.script
            .lock()
            .expect("mock script poisoned")
            .pop_front()
            .unwrap_or_else(|| {
                Err(Error::InvalidResponse(format!(
                    "no scripted response left for {}",
                    route
                )))
            })
    }
}

/// Clock frozen at a given epoch-millisecond instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub i64);

impl Clock for FixedClock {
    fn now_ms(&self) -> i64 {
        self.0
    }
}
