//! Error types for the dashboard core
//!
//! API failures are fully typed so callers can distinguish a backend
//! rejection from a transport problem or a malformed body. Local mutation
//! failures are a separate type: they are caught at the mutation boundary
//! and never surfaced to the user.

use thiserror::Error;

/// Errors produced by [`crate::api::ApiClient`]
///
/// Every variant is logged via `tracing::error!` at the point of failure
/// before being returned; callers must not rely on that logging for
/// correctness, only observability.
#[derive(Error, Debug)]
pub enum ApiError {
    /// The backend responded with a non-success HTTP status
    #[error("request failed with HTTP status {status}")]
    RequestFailed {
        /// The HTTP status code returned by the backend
        status: u16,
    },

    /// The request never completed (DNS failure, connection refused, timeout)
    #[error("transport error: {0}")]
    Transport(#[source] reqwest::Error),

    /// The response body could not be decoded as JSON for the expected type
    #[error("failed to decode response body: {0}")]
    Decode(#[source] serde_json::Error),
}

/// Failures inside a local-only dashboard mutation
///
/// These never propagate past the mutation boundary: the controller logs
/// them and reports the mutation as ignored, leaving all state untouched.
#[derive(Error, Debug)]
pub enum LocalMutationError {
    /// An agent's execution counter is saturated and cannot be incremented
    #[error("execution count overflow for agent {agent_id}")]
    ExecutionCountOverflow {
        /// The agent whose counter is saturated
        agent_id: i64,
    },
}
