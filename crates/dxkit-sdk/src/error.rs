use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// The request never produced an HTTP response (connect, TLS, body read).
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The API server answered with a non-success status.
    #[error("API error {status} ({kind}): {message}")]
    Api {
        status: u16,
        kind: String,
        message: String,
    },

    /// The server answered, but not with the expected shape.
    #[error("invalid response: {0}")]
    InvalidResponse(String),

    /// A local input document (job input manifest, dxapp.json) is malformed.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Core(#[from] dxkit_core::Error),
}

impl Error {
    pub fn api(status: u16, kind: impl Into<String>, message: impl Into<String>) -> Self {
        Error::Api {
            status,
            kind: kind.into(),
            message: message.into(),
        }
    }

    /// Build an API error from a response body of the form
    /// `{"error": {"type": "...", "message": "..."}}`, falling back to the raw body.
    pub fn from_response_body(status: u16, body: &str) -> Self {
        let parsed: Option<serde_json::Value> = serde_json::from_str(body).ok();
        let error = parsed.as_ref().and_then(|value| value.get("error"));

        let kind = error
            .and_then(|e| e.get("type"))
            .and_then(serde_json::Value::as_str)
            .unwrap_or("HTTPError");
        let message = error
            .and_then(|e| e.get("message"))
            .and_then(serde_json::Value::as_str)
            .map(str::to_string)
            .unwrap_or_else(|| body.trim().to_string());

        Error::api(status, kind, message)
    }
}
