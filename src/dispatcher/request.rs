use crate::ids::RequestId;

/// Request state the dispatch loop reads and flips.
///
/// Owned by the HTTP layer; the front controller only touches the dispatched
/// and forward flags and the action name.
#[derive(Debug, Clone)]
pub struct RoutingRequest {
    /// Correlation id for logs of this request
    pub request_id: RequestId,
    path: String,
    action_name: Option<String>,
    before_forward: Option<String>,
    dispatched: bool,
    forwarded: bool,
}

impl RoutingRequest {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            request_id: RequestId::new(),
            path: path.into(),
            action_name: None,
            before_forward: None,
            dispatched: false,
            forwarded: false,
        }
    }

    /// Carry an upstream correlation id instead of a generated one.
    #[must_use]
    pub fn with_request_id(mut self, request_id: RequestId) -> Self {
        self.request_id = request_id;
        self
    }

    #[inline]
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    #[must_use]
    pub fn action_name(&self) -> Option<&str> {
        self.action_name.as_deref()
    }

    pub fn set_action_name(&mut self, name: impl Into<String>) {
        self.action_name = Some(name.into());
    }

    #[inline]
    #[must_use]
    pub fn is_dispatched(&self) -> bool {
        self.dispatched
    }

    pub fn set_dispatched(&mut self, dispatched: bool) {
        self.dispatched = dispatched;
    }

    /// Mark the request as internally forwarded, remembering the action name
    /// it carried before the forward.
    pub fn init_forward(&mut self) {
        self.before_forward = self.action_name.clone();
        self.forwarded = true;
    }

    #[must_use]
    pub fn is_forwarded(&self) -> bool {
        self.forwarded
    }

    /// Action name before the most recent forward.
    #[must_use]
    pub fn before_forward(&self) -> Option<&str> {
        self.before_forward.as_deref()
    }
}
