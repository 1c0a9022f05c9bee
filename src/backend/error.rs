//! Backend error types.

use thiserror::Error;

/// Errors raised by scoring backends.
///
/// Transport and auth failures are fatal to the current ranking call and
/// propagate to the caller untouched. Malformed *score payloads* are not
/// errors at this layer; only a reply that breaks the transport envelope
/// itself (missing message, undecodable body) is.
#[derive(Debug, Error)]
pub enum BackendError {
    /// Backend was constructed without a model identifier.
    #[error("a model identifier is required for the {provider} backend")]
    MissingModel { provider: &'static str },

    /// No API key was supplied and the environment fallback was unset.
    #[error("missing API key: pass one explicitly or set {env_var}")]
    MissingApiKey { env_var: &'static str },

    /// The HTTP client could not be built or the request failed in transit.
    #[error("chat request to {provider} failed: {source}")]
    Http {
        provider: &'static str,
        #[source]
        source: reqwest::Error,
    },

    /// The service answered with a non-success status.
    #[error("{provider} returned HTTP {status}: {body}")]
    UnexpectedStatus {
        provider: &'static str,
        status: u16,
        body: String,
    },

    /// The response body did not match the provider's reply envelope.
    #[error("{provider} returned a malformed reply: {reason}")]
    MalformedReply {
        provider: &'static str,
        reason: String,
    },
}
