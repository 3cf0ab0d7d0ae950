//! ULID-backed identifiers used to correlate log lines of one dispatch call.

use std::fmt::{Display, Formatter};

/// Identifier of one routed request.
///
/// Callers that receive an upstream correlation id attach it with
/// [`RoutingRequest::with_request_id`](crate::dispatcher::RoutingRequest::with_request_id).
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug)]
pub struct RequestId(pub ulid::Ulid);

impl RequestId {
    #[must_use]
    pub fn new() -> Self {
        Self(ulid::Ulid::new())
    }
}

impl Default for RequestId {
    fn default() -> Self {
        Self::new()
    }
}

impl Display for RequestId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
