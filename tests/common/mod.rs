#![allow(dead_code)]

pub mod catalog {
    use std::sync::Arc;
    use storefront_router::catalog::InMemoryCatalog;

    /// Store 1 belongs to website 1, store 2 to website 2.
    pub const FIXTURE: &str = r#"
rewrites:
  # products
  - request_path: blue-shirt.html
    target_path: catalog/product/view/id/42
    entity_type: product
    entity_id: 42
    store_id: 1
  - request_path: catalog/product/view/id/42
    target_path: catalog/product/view/id/42
    entity_type: product
    entity_id: 42
    store_id: 1
  - request_path: retired-shirt.html
    target_path: catalog/product/view/id/43
    entity_type: product
    entity_id: 43
    store_id: 1
  - request_path: sold-out.html
    target_path: catalog/product/view/id/44
    entity_type: product
    entity_id: 44
    store_id: 1
  - request_path: sold-out.html
    target_path: catalog/product/view/id/44
    entity_type: product
    entity_id: 44
    store_id: 2
  - request_path: hoodie.html
    target_path: catalog/product/view/id/50
    entity_type: product
    entity_id: 50
    store_id: 1
  - request_path: web2-only.html
    target_path: catalog/product/view/id/60
    entity_type: product
    entity_id: 60
    store_id: 1
  # redirect chain a -> b -> c
  - request_path: shirts-2019.html
    target_path: shirts-2020.html
    entity_type: category
    entity_id: 5
    redirect_type: 301
    store_id: 1
  - request_path: shirts-2020.html
    target_path: shirts.html
    entity_type: category
    entity_id: 5
    redirect_type: 302
    store_id: 1
  - request_path: shirts.html
    target_path: catalog/category/view/id/5
    entity_type: category
    entity_id: 5
    store_id: 1
  - request_path: shirts.html
    target_path: catalog/category/view/id/5
    entity_type: category
    entity_id: 5
    store_id: 2
  # redirect to a since-disabled product
  - request_path: old-retired.html
    target_path: retired-shirt.html
    entity_type: product
    entity_id: 43
    redirect_type: 301
    store_id: 1
  # cycle
  - request_path: loop-a.html
    target_path: loop-b.html
    entity_type: category
    entity_id: 5
    redirect_type: 301
    store_id: 1
  - request_path: loop-b.html
    target_path: loop-a.html
    entity_type: category
    entity_id: 5
    redirect_type: 301
    store_id: 1
  # categories
  - request_path: archive.html
    target_path: catalog/category/view/id/6
    entity_type: category
    entity_id: 6
    store_id: 1
  - request_path: ghost.html
    target_path: catalog/category/view/id/99
    entity_type: category
    entity_id: 99
    store_id: 1
  # pages and others
  - request_path: /
    target_path: cms/page/view/page_id/1
    entity_type: cms-page
    entity_id: 1
    store_id: 1
  - request_path: about-us
    target_path: cms/page/view/page_id/3
    entity_type: cms-page
    entity_id: 3
    store_id: 1
  - request_path: summer-lookbook
    target_path: lookbook/view/id/9
    entity_type: custom-landing
    entity_id: 9
    store_id: 1
products:
  - id: 42
    sku: SHIRT-BLUE
  - id: 43
    sku: SHIRT-RETIRED
    enabled: false
  - id: 44
    sku: SOLD-OUT
  - id: 50
    sku: HOODIE
    type_id: configurable
    children: [51, 52, 53]
  - id: 51
    sku: HOODIE-S
  - id: 52
    sku: HOODIE-M
  - id: 53
    sku: HOODIE-L
  - id: 60
    sku: WEB2-ONLY
    website_ids: [2]
categories:
  - id: 5
    is_active: true
    display_mode: PRODUCTS
    default_sort_by: position
    # hidden in the second store view
    store_is_active:
      2: false
  - id: 6
    is_active: false
stock:
  - product_id: 42
    qty: 10
  - product_id: 44
    in_stock: false
  - product_id: 51
    qty: 0
  - product_id: 52
    qty: 0
  - product_id: 53
    qty: 5
    website_id: 1
  - product_id: 60
    qty: 1
custom_urls:
  about: about-us
  catalog/product/view/id/42/category/5: about-us
show_out_of_stock: false
store_show_out_of_stock:
  2: true
"#;

    pub fn catalog() -> Arc<InMemoryCatalog> {
        Arc::new(InMemoryCatalog::from_yaml_str(FIXTURE).unwrap())
    }
}

pub mod actions {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};
    use storefront_router::dispatcher::{
        Action, ActionKind, ActionMatcher, ActionResult, MessageSink, RequestValidator,
        ResponseSink, RoutingRequest,
    };
    use storefront_router::error::{InvalidRequest, RouteNotFound};

    /// Action returning a fixed result.
    pub struct FixedAction {
        pub name: &'static str,
        pub kind: ActionKind,
        pub result: ActionResult,
    }

    impl FixedAction {
        pub fn new(name: &'static str, kind: ActionKind) -> Arc<Self> {
            Arc::new(Self {
                name,
                kind,
                result: ActionResult::ok(serde_json::json!({ "action": name })),
            })
        }

        pub fn with_result(
            name: &'static str,
            kind: ActionKind,
            result: ActionResult,
        ) -> Arc<Self> {
            Arc::new(Self { name, kind, result })
        }
    }

    impl Action for FixedAction {
        fn name(&self) -> &str {
            self.name
        }

        fn kind(&self) -> ActionKind {
            self.kind
        }

        fn execute(&self, _request: &mut RoutingRequest) -> ActionResult {
            self.result.clone()
        }
    }

    /// Matches requests whose path starts with `prefix`.
    pub struct PrefixRouter {
        pub prefix: &'static str,
        pub action: Arc<dyn Action>,
        pub calls: AtomicUsize,
    }

    impl PrefixRouter {
        pub fn new(prefix: &'static str, action: Arc<dyn Action>) -> Arc<Self> {
            Arc::new(Self {
                prefix,
                action,
                calls: AtomicUsize::new(0),
            })
        }
    }

    impl ActionMatcher for PrefixRouter {
        fn name(&self) -> &str {
            "prefix"
        }

        fn match_action(
            &self,
            request: &mut RoutingRequest,
        ) -> Result<Option<Arc<dyn Action>>, RouteNotFound> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(request
                .path()
                .starts_with(self.prefix)
                .then(|| Arc::clone(&self.action)))
        }
    }

    /// Never matches anything.
    #[derive(Default)]
    pub struct NeverRouter {
        pub calls: AtomicUsize,
    }

    impl ActionMatcher for NeverRouter {
        fn name(&self) -> &str {
            "never"
        }

        fn match_action(
            &self,
            _request: &mut RoutingRequest,
        ) -> Result<Option<Arc<dyn Action>>, RouteNotFound> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(None)
        }
    }

    /// Needs `passes` empty passes before matching, like a router waiting on
    /// locale resolution done by an earlier router.
    pub struct SecondPassRouter {
        pub passes: usize,
        pub action: Arc<dyn Action>,
        pub calls: AtomicUsize,
    }

    impl ActionMatcher for SecondPassRouter {
        fn name(&self) -> &str {
            "second_pass"
        }

        fn match_action(
            &self,
            _request: &mut RoutingRequest,
        ) -> Result<Option<Arc<dyn Action>>, RouteNotFound> {
            let call = self.calls.fetch_add(1, Ordering::SeqCst);
            Ok((call >= self.passes).then(|| Arc::clone(&self.action)))
        }
    }

    /// Standard router: raises not-found for unknown paths and matches the
    /// `noroute` action name once forwarded.
    pub struct StandardRouter {
        pub known: &'static str,
        pub action: Arc<dyn Action>,
        pub noroute: Arc<dyn Action>,
    }

    impl ActionMatcher for StandardRouter {
        fn name(&self) -> &str {
            "standard"
        }

        fn match_action(
            &self,
            request: &mut RoutingRequest,
        ) -> Result<Option<Arc<dyn Action>>, RouteNotFound> {
            if request.action_name() == Some("noroute") {
                return Ok(Some(Arc::clone(&self.noroute)));
            }
            if request.path() == self.known {
                return Ok(Some(Arc::clone(&self.action)));
            }
            Err(RouteNotFound::new(format!("no route for {}", request.path())))
        }
    }

    /// Counts validations; rejects every request with a message.
    #[derive(Default)]
    pub struct CountingValidator {
        pub calls: AtomicUsize,
        pub reject: bool,
    }

    impl RequestValidator for CountingValidator {
        fn validate(
            &self,
            _request: &RoutingRequest,
            _action: &dyn Action,
        ) -> Result<(), InvalidRequest> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.reject {
                Err(InvalidRequest::default()
                    .with_message("Invalid form key"))
            } else {
                Ok(())
            }
        }
    }

    #[derive(Default)]
    pub struct RecordingSink {
        pub messages: Mutex<Vec<String>>,
        pub no_cache: AtomicUsize,
    }

    impl MessageSink for RecordingSink {
        fn add_error_message(&self, message: &str) {
            self.messages.lock().unwrap().push(message.to_string());
        }
    }

    impl ResponseSink for RecordingSink {
        fn set_no_cache_headers(&self) {
            self.no_cache.fetch_add(1, Ordering::SeqCst);
        }
    }
}
