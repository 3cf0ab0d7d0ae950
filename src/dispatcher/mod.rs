//! # Dispatcher Module
//!
//! The front controller loop that matches an incoming request to a handler
//! action and runs it.
//!
//! ## Overview
//!
//! - An ordered list of [`ActionMatcher`]s is scanned for each routing cycle.
//! - The first matcher returning an action hands it to the [`RequestProcessor`],
//!   which validates the request once per dispatch call and executes the action.
//! - A matcher raising [`RouteNotFound`](crate::error::RouteNotFound) forwards the
//!   request to the `noroute` action and restarts the scan.
//! - After [`MAX_ROUTING_CYCLES`] cycles without the request being dispatched,
//!   dispatch fails with [`DispatchError::RoutingExhausted`](crate::error::DispatchError::RoutingExhausted).
//!
//! ## Route Types
//!
//! Every action carries an explicit [`ActionKind`] set by whoever constructs it.
//! The dispatched outcome is tagged with the matching [`RouteType`] so the
//! response layer can branch without inspecting the action.
//!
//! ```rust
//! use std::sync::Arc;
//! use storefront_router::dispatcher::{
//!     Action, ActionKind, ActionMatcher, ActionResult, FrontController, RouteType, RoutingRequest,
//! };
//! use storefront_router::error::RouteNotFound;
//!
//! struct ProductView;
//!
//! impl Action for ProductView {
//!     fn name(&self) -> &str { "catalog_product_view" }
//!     fn kind(&self) -> ActionKind { ActionKind::Product }
//!     fn execute(&self, _request: &mut RoutingRequest) -> ActionResult {
//!         ActionResult::ok(serde_json::json!({ "sku": "SHIRT" }))
//!     }
//! }
//!
//! struct CatalogRouter;
//!
//! impl ActionMatcher for CatalogRouter {
//!     fn name(&self) -> &str { "catalog" }
//!     fn match_action(
//!         &self,
//!         request: &mut RoutingRequest,
//!     ) -> Result<Option<Arc<dyn Action>>, RouteNotFound> {
//!         Ok(request.path().starts_with("/catalog/product").then(|| Arc::new(ProductView) as Arc<dyn Action>))
//!     }
//! }
//!
//! let controller = FrontController::new(vec![Arc::new(CatalogRouter)]);
//! let mut request = RoutingRequest::new("/catalog/product/view/id/42");
//! let outcome = controller.dispatch(&mut request).unwrap();
//! assert_eq!(outcome.route_type, RouteType::Product);
//! ```

mod action;
mod core;
mod processor;
mod request;

pub use action::{Action, ActionKind, ActionMatcher, ActionResult, RouteType};
pub use core::{DispatchOutcome, FrontController, MAX_ROUTING_CYCLES, NOROUTE_ACTION};
pub use processor::{
    AcceptAllValidator, DispatchContext, LogMessageSink, MessageSink, NoopResponseSink,
    RequestProcessor, RequestValidator, ResponseSink,
};
pub use request::RoutingRequest;
