use std::sync::Arc;
use tracing::{debug, warn};

use super::action::{Action, ActionResult};
use super::request::RoutingRequest;
use crate::error::{InvalidRequest, RouteNotFound};
use crate::ids::RequestId;

/// Validates a request against the action it matched (form keys, CSRF, ...).
pub trait RequestValidator: Send + Sync {
    fn validate(&self, request: &RoutingRequest, action: &dyn Action) -> Result<(), InvalidRequest>;
}

/// Accumulates user-facing messages for the next rendered page.
pub trait MessageSink: Send + Sync {
    fn add_error_message(&self, message: &str);
}

/// Response-side collaborator owning HTTP caching headers.
pub trait ResponseSink: Send + Sync {
    fn set_no_cache_headers(&self);
}

/// Validator that accepts every request.
#[derive(Debug, Default, Clone, Copy)]
pub struct AcceptAllValidator;

impl RequestValidator for AcceptAllValidator {
    fn validate(
        &self,
        _request: &RoutingRequest,
        _action: &dyn Action,
    ) -> Result<(), InvalidRequest> {
        Ok(())
    }
}

/// Message sink that only logs.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogMessageSink;

impl MessageSink for LogMessageSink {
    fn add_error_message(&self, message: &str) {
        warn!(message = %message, "User error message");
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct NoopResponseSink;

impl ResponseSink for NoopResponseSink {
    fn set_no_cache_headers(&self) {}
}

/// State scoped to one `dispatch` call.
///
/// Created fresh for every call so the validated-once flag never leaks across
/// requests, even when the front controller is shared.
#[derive(Debug)]
pub struct DispatchContext {
    pub request_id: RequestId,
    validated: bool,
    cycles: usize,
}

impl DispatchContext {
    #[must_use]
    pub fn new(request_id: RequestId) -> Self {
        Self {
            request_id,
            validated: false,
            cycles: 0,
        }
    }

    #[must_use]
    pub fn is_validated(&self) -> bool {
        self.validated
    }

    /// Routing cycles started so far.
    #[must_use]
    pub fn cycles(&self) -> usize {
        self.cycles
    }

    pub(crate) fn start_cycle(&mut self) {
        self.cycles += 1;
    }
}

/// Validates (once per dispatch call) and executes a matched action.
pub struct RequestProcessor {
    validator: Arc<dyn RequestValidator>,
    messages: Arc<dyn MessageSink>,
    response: Arc<dyn ResponseSink>,
}

impl Default for RequestProcessor {
    fn default() -> Self {
        Self::new(
            Arc::new(AcceptAllValidator),
            Arc::new(LogMessageSink),
            Arc::new(NoopResponseSink),
        )
    }
}

impl RequestProcessor {
    pub fn new(
        validator: Arc<dyn RequestValidator>,
        messages: Arc<dyn MessageSink>,
        response: Arc<dyn ResponseSink>,
    ) -> Self {
        Self {
            validator,
            messages,
            response,
        }
    }

    pub(crate) fn set_validator(&mut self, validator: Arc<dyn RequestValidator>) {
        self.validator = validator;
    }

    pub(crate) fn set_messages(&mut self, messages: Arc<dyn MessageSink>) {
        self.messages = messages;
    }

    pub(crate) fn set_response(&mut self, response: Arc<dyn ResponseSink>) {
        self.response = response;
    }

    /// Mark `request` dispatched and run `action`.
    ///
    /// Validation runs only on the first call for a given `ctx`. A failed
    /// validation forwards its messages to the message sink and, when it
    /// carries a replacement result, returns that instead of executing the
    /// action.
    ///
    /// # Errors
    ///
    /// Returns the [`RouteNotFound`] carried by an
    /// [`ActionResult::NotFound`] so the caller can handle 404s uniformly.
    pub fn process(
        &self,
        ctx: &mut DispatchContext,
        request: &mut RoutingRequest,
        action: &dyn Action,
    ) -> Result<ActionResult, RouteNotFound> {
        request.set_dispatched(true);
        self.response.set_no_cache_headers();

        let mut result = None;
        if !ctx.validated {
            if let Err(invalid) = self.validator.validate(request, action) {
                debug!(
                    request_id = %ctx.request_id,
                    action = action.name(),
                    messages = invalid.messages.len(),
                    "Request validation failed for action"
                );
                for message in &invalid.messages {
                    self.messages.add_error_message(message);
                }
                result = invalid.replace_result;
            }
            ctx.validated = true;
        }

        let result = match result {
            Some(replacement) => replacement,
            None => action.execute(request),
        };

        match result {
            ActionResult::NotFound(not_found) => Err(not_found),
            other => Ok(other),
        }
    }
}
