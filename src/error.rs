//! Crate-wide error type.
//!
//! ERROR HANDLING
//! ==============
//! Every request or DOM step returns `Result<_, NewsroomError>`. Handlers log
//! the error and, where the page expects it, surface a short message to the
//! user. Nothing here is retried.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

#[derive(Debug, thiserror::Error)]
pub enum NewsroomError {
    /// The request never produced a response (offline, CORS, aborted).
    #[error("network error: {0}")]
    Network(String),
    /// The server answered with a non-2xx status.
    #[error("{endpoint} failed: {status}")]
    Status { endpoint: String, status: u16 },
    /// The response body was not the expected JSON.
    #[error("invalid response body: {0}")]
    Decode(String),
    /// The embedded page config could not be parsed.
    #[error("invalid page config: {0}")]
    Config(#[from] serde_json::Error),
    /// A browser API call failed or an expected element is missing.
    #[error("dom error: {0}")]
    Dom(String),
    /// Browser-only operation invoked outside the browser.
    #[error("{0} is only available in the browser")]
    Unavailable(String),
}
