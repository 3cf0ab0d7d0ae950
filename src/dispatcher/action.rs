use http::StatusCode;
use serde::Serialize;
use serde_json::Value;
use std::fmt;
use std::sync::Arc;

use super::request::RoutingRequest;
use crate::error::RouteNotFound;

/// Kind of content an action renders, declared by the action itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionKind {
    Product,
    Category,
    Page,
    Other,
}

/// Route classification attached to a dispatched outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RouteType {
    Product,
    Category,
    CmsPage,
    NotFound,
}

impl RouteType {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            RouteType::Product => "PRODUCT",
            RouteType::Category => "CATEGORY",
            RouteType::CmsPage => "CMS_PAGE",
            RouteType::NotFound => "NOT_FOUND",
        }
    }
}

impl From<ActionKind> for RouteType {
    fn from(kind: ActionKind) -> Self {
        match kind {
            ActionKind::Product => RouteType::Product,
            ActionKind::Category => RouteType::Category,
            ActionKind::Page => RouteType::CmsPage,
            ActionKind::Other => RouteType::NotFound,
        }
    }
}

impl fmt::Display for RouteType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of executing an action (or of a failed validation).
#[derive(Debug, Clone, PartialEq)]
pub enum ActionResult {
    /// Rendered response body
    Response { status: StatusCode, body: Value },
    /// Redirect to another location
    Redirect { location: String, status: StatusCode },
    /// The action decided the request is a 404; re-raised by the processor
    NotFound(RouteNotFound),
}

impl ActionResult {
    /// `200 OK` with a JSON body.
    #[must_use]
    pub fn ok(body: Value) -> Self {
        ActionResult::Response {
            status: StatusCode::OK,
            body,
        }
    }

    /// `302 Found` redirect.
    pub fn redirect(location: impl Into<String>) -> Self {
        ActionResult::Redirect {
            location: location.into(),
            status: StatusCode::FOUND,
        }
    }

    pub fn not_found(reason: impl Into<String>) -> Self {
        ActionResult::NotFound(RouteNotFound::new(reason))
    }

    /// HTTP status of this result.
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            ActionResult::Response { status, .. } | ActionResult::Redirect { status, .. } => {
                *status
            }
            ActionResult::NotFound(_) => StatusCode::NOT_FOUND,
        }
    }
}

/// A handler a router resolved the request to.
pub trait Action: Send + Sync {
    /// Stable name used in logs (e.g. `catalog_product_view`).
    fn name(&self) -> &str;

    /// Content kind, used to tag the dispatched outcome.
    fn kind(&self) -> ActionKind {
        ActionKind::Other
    }

    fn execute(&self, request: &mut RoutingRequest) -> ActionResult;
}

/// One entry of the ordered router list.
pub trait ActionMatcher: Send + Sync {
    fn name(&self) -> &str;

    /// Try to match `request` to an action.
    ///
    /// `Ok(None)` passes the request to the next router; `Err` forwards it to
    /// the `noroute` action. Routers may rewrite the request (action name,
    /// dispatched flag) and rely on a later routing cycle.
    fn match_action(
        &self,
        request: &mut RoutingRequest,
    ) -> Result<Option<Arc<dyn Action>>, RouteNotFound>;
}
