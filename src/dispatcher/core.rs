use std::sync::Arc;
use tracing::{debug, error, info, info_span};

use super::action::{Action, ActionMatcher, ActionResult, RouteType};
use super::processor::{
    DispatchContext, MessageSink, RequestProcessor, RequestValidator, ResponseSink,
};
use super::request::RoutingRequest;
use crate::error::DispatchError;
use crate::ids::RequestId;

/// Routing cycles allowed before dispatch is declared exhausted.
pub const MAX_ROUTING_CYCLES: usize = 100;

/// Action name a request is forwarded to when a router raises not-found.
pub const NOROUTE_ACTION: &str = "noroute";

/// Result of a successful dispatch.
#[derive(Debug, Clone, PartialEq)]
pub struct DispatchOutcome {
    pub request_id: RequestId,
    pub result: ActionResult,
    pub route_type: RouteType,
    /// Name of the action that produced `result`
    pub action: String,
    /// Routing cycles run, at least 1
    pub cycles: usize,
}

/// Front controller: runs the ordered router list until the request is dispatched.
///
/// Holds no per-request state, so one controller may be shared across threads.
pub struct FrontController {
    routers: Vec<Arc<dyn ActionMatcher>>,
    processor: RequestProcessor,
}

impl FrontController {
    /// Controller over `routers` with an accept-all validator, a logging
    /// message sink and no response-side collaborator.
    pub fn new(routers: Vec<Arc<dyn ActionMatcher>>) -> Self {
        Self {
            routers,
            processor: RequestProcessor::default(),
        }
    }

    /// Append a router to the end of the list.
    pub fn add_router(&mut self, router: Arc<dyn ActionMatcher>) {
        info!(
            router = router.name(),
            total_routers = self.routers.len() + 1,
            "Router registered"
        );
        self.routers.push(router);
    }

    #[must_use]
    pub fn with_validator(mut self, validator: Arc<dyn RequestValidator>) -> Self {
        self.processor.set_validator(validator);
        self
    }

    #[must_use]
    pub fn with_message_sink(mut self, messages: Arc<dyn MessageSink>) -> Self {
        self.processor.set_messages(messages);
        self
    }

    #[must_use]
    pub fn with_response_sink(mut self, response: Arc<dyn ResponseSink>) -> Self {
        self.processor.set_response(response);
        self
    }

    /// Match `request` to an action, execute it, and tag the outcome.
    ///
    /// # Errors
    ///
    /// - [`DispatchError::RoutingExhausted`] after [`MAX_ROUTING_CYCLES`]
    ///   cycles without the request being dispatched
    /// - [`DispatchError::NotFound`] when the executed action's result is a 404
    /// - [`DispatchError::Unhandled`] when the request was already marked
    ///   dispatched but no action ran
    pub fn dispatch(&self, request: &mut RoutingRequest) -> Result<DispatchOutcome, DispatchError> {
        let mut ctx = DispatchContext::new(request.request_id);
        let span = info_span!(
            "routers_match",
            request_id = %ctx.request_id,
            path = %request.path()
        );
        let _enter = span.enter();

        let mut matched: Option<(Arc<dyn Action>, ActionResult)> = None;
        while !request.is_dispatched() {
            if ctx.cycles() >= MAX_ROUTING_CYCLES {
                error!(
                    request_id = %ctx.request_id,
                    cycles = ctx.cycles(),
                    routers = self.routers.len(),
                    "Front controller reached router match iteration limit"
                );
                return Err(DispatchError::RoutingExhausted {
                    cycles: ctx.cycles(),
                });
            }
            ctx.start_cycle();

            for router in &self.routers {
                match router.match_action(request) {
                    Ok(Some(action)) => {
                        debug!(
                            router = router.name(),
                            action = action.name(),
                            cycle = ctx.cycles(),
                            "Router matched action"
                        );
                        let result = self.processor.process(&mut ctx, request, action.as_ref())?;
                        matched = Some((action, result));
                        break;
                    }
                    Ok(None) => {}
                    Err(not_found) => {
                        debug!(
                            router = router.name(),
                            reason = %not_found.reason,
                            cycle = ctx.cycles(),
                            "Router raised not found, forwarding to noroute"
                        );
                        request.init_forward();
                        request.set_action_name(NOROUTE_ACTION);
                        request.set_dispatched(false);
                        break;
                    }
                }
            }
        }

        let Some((action, result)) = matched else {
            error!(request_id = %ctx.request_id, "Request dispatched without a matched action");
            return Err(DispatchError::Unhandled);
        };

        let route_type = RouteType::from(action.kind());
        info!(
            request_id = %ctx.request_id,
            action = action.name(),
            route_type = %route_type,
            status = result.status().as_u16(),
            cycles = ctx.cycles(),
            "Request dispatched"
        );

        Ok(DispatchOutcome {
            request_id: ctx.request_id,
            result,
            route_type,
            action: action.name().to_owned(),
            cycles: ctx.cycles(),
        })
    }
}
