//! HTTP server facade for staylist with Axum, centralized error handling,
//! and form-method override.

use anyhow::Context;
use axum::{extract::Request, http::HeaderValue, routing::get, Router, ServiceExt};
use tower::util::MapRequestLayer;
use tower::Layer;
use tower_http::request_id::{MakeRequestId, RequestId};
use uuid::{Timestamp, Uuid};

use staylist_kernel::{InitCtx, ModuleRegistry};

pub mod error;
pub mod router;
pub mod validate;

use router::RouterBuilder;

/// Start the HTTP server with the given module registry.
///
/// The process listens until killed; there is no timeout or cancellation
/// logic, and each request runs to completion or failure.
pub async fn start_server(
    registry: &ModuleRegistry,
    settings: &staylist_kernel::settings::Settings,
    db: &mongodb::Database,
) -> anyhow::Result<()> {
    tracing::info!(
        "starting HTTP server on {}:{}",
        settings.server.host,
        settings.server.port
    );

    let router = build_router(registry, settings, db);

    // The method override must rewrite the request before route matching,
    // so it wraps the router instead of being a router layer.
    let app = MapRequestLayer::new(router::method_override).layer(router);

    let listener =
        tokio::net::TcpListener::bind(format!("{}:{}", settings.server.host, settings.server.port))
            .await
            .context("failed to bind to address")?;

    tracing::info!(
        "HTTP server listening on http://{}:{}",
        settings.server.host,
        settings.server.port
    );

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .await
        .context("HTTP server failed")?;

    Ok(())
}

/// Build the main HTTP router with all module routes mounted.
pub fn build_router(
    registry: &ModuleRegistry,
    settings: &staylist_kernel::settings::Settings,
    db: &mongodb::Database,
) -> Router {
    let mut router_builder = RouterBuilder::new()
        .with_tracing()
        .with_request_id()
        .route("/", get(liveness));

    let ctx = InitCtx { settings, db };

    for module in registry.modules() {
        let module_name = module.name();
        tracing::info!(module = module_name, "mounting module routes under /{}", module_name);
        router_builder = router_builder.mount_module(module_name, module.routes(&ctx));
    }

    router_builder.with_fallback().build()
}

/// Trivial liveness endpoint
async fn liveness() -> &'static str {
    "Root is working"
}

/// Request ID generator for tracing
#[derive(Clone)]
pub(crate) struct MakeRequestUuid;

impl MakeRequestId for MakeRequestUuid {
    fn make_request_id<B>(&mut self, _request: &axum::http::Request<B>) -> Option<RequestId> {
        let timestamp = Timestamp::now(uuid::NoContext);
        let request_id = Uuid::new_v7(timestamp)
            .to_string()
            .parse::<HeaderValue>()
            .ok()?;
        Some(RequestId::new(request_id))
    }
}
