//! Failure outcomes for the widget's asynchronous operations.
//!
//! ERROR HANDLING
//! ==============
//! Every network or DOM step returns `Result<_, WidgetError>`. The controller
//! logs the error and then degrades exactly as the page always has: static
//! messages, no retries, nothing surfaced to the user.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WidgetError {
    #[error("request failed: {0}")]
    Network(String),
    #[error("unexpected status: {0}")]
    Status(u16),
    #[error("malformed body: {0}")]
    Decode(String),
    #[error("push stream unavailable: {0}")]
    Connect(String),
    #[error("missing element: #{0}")]
    Dom(String),
}

impl From<serde_json::Error> for WidgetError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}

#[cfg(feature = "hydrate")]
impl From<gloo_net::Error> for WidgetError {
    fn from(err: gloo_net::Error) -> Self {
        match err {
            gloo_net::Error::SerdeError(e) => Self::Decode(e.to_string()),
            other => Self::Network(other.to_string()),
        }
    }
}
