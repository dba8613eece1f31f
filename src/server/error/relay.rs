use reqwest::StatusCode;
use thiserror::Error;

/// Failures delivering an application to the Discord webhook.
///
/// Both variants are terminal: the submission is not retried or stored.
#[derive(Error, Debug)]
pub enum RelayError {
    /// The request never produced a response (DNS, TLS, connection reset, ...).
    #[error("Failed to reach application webhook: {0}")]
    Request(#[from] reqwest::Error),

    /// The webhook answered with a non-success status.
    #[error("Application webhook rejected the message with {status}: {body}")]
    Rejected {
        /// Status returned by the webhook
        status: StatusCode,
        /// Response body, usually Discord's JSON error description
        body: String,
    },
}
