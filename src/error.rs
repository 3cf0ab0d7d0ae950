//! Error taxonomy for URL resolution and request dispatch.
//!
//! Entity-level "not found" is not an error here: the resolver returns `Ok(None)`
//! for unknown paths and hidden entities alike. The variants below are the
//! conditions a caller must react to.

use http::StatusCode;
use thiserror::Error;

use crate::dispatcher::ActionResult;

/// Failure of a single `resolve` call.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// The `url` argument was missing, empty, or whitespace only.
    #[error("\"url\" argument should be specified and not empty")]
    InvalidArgument,

    /// A redirect chain revisited a path or exceeded the hop ceiling.
    #[error("redirect chain starting at '{path}' did not terminate after {hops} hops")]
    RedirectCycleDetected {
        /// Normalized path the walk started from
        path: String,
        /// Number of redirect hops followed before giving up
        hops: usize,
    },

    /// A lookup collaborator (rewrite store, repository, stock) failed.
    #[error(transparent)]
    Backend(#[from] anyhow::Error),
}

/// Raised by a router, or by an action result, to request 404 handling.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("route not found: {reason}")]
pub struct RouteNotFound {
    /// Human-readable cause, logged but never sent to the client
    pub reason: String,
}

impl RouteNotFound {
    /// Create a not-found signal with the given reason.
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

/// Validation failure reported by a [`RequestValidator`](crate::dispatcher::RequestValidator).
///
/// Never escapes the request processor: the replacement result is used in place
/// of executing the action and the messages are handed to the message sink.
#[derive(Debug, Clone, Default, Error)]
#[error("invalid request ({} message(s))", messages.len())]
pub struct InvalidRequest {
    /// Result to return instead of the action's own result
    pub replace_result: Option<ActionResult>,
    /// User-facing error messages
    pub messages: Vec<String>,
}

impl InvalidRequest {
    /// Validation failure with a replacement result and no messages.
    pub fn replace_with(result: ActionResult) -> Self {
        Self {
            replace_result: Some(result),
            messages: Vec::new(),
        }
    }

    /// Attach a user-facing message.
    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.messages.push(message.into());
        self
    }
}

/// Failure of a `dispatch` call.
#[derive(Debug, Error)]
pub enum DispatchError {
    /// The router chain never marked the request dispatched.
    #[error("front controller reached {cycles} router match iterations")]
    RoutingExhausted {
        /// Number of routing cycles run before giving up
        cycles: usize,
    },

    /// The request was already marked dispatched but no action ran.
    #[error("request was marked dispatched without a matched action")]
    Unhandled,

    /// The executed action (or its validation replacement) signalled 404.
    #[error(transparent)]
    NotFound(#[from] RouteNotFound),
}

impl DispatchError {
    /// HTTP status the response layer should emit for this error.
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            DispatchError::RoutingExhausted { .. } | DispatchError::Unhandled => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            DispatchError::NotFound(_) => StatusCode::NOT_FOUND,
        }
    }
}
