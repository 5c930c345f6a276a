pub mod models;
pub mod routes;
pub mod store;
pub mod views;

use async_trait::async_trait;
use axum::routing::{get, post};
use axum::Router;

use staylist_kernel::{InitCtx, Module};

use store::ListingStore;

/// Listings module: CRUD over listing records plus nested review creation.
pub struct ListingsModule;

impl ListingsModule {
    pub const fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Module for ListingsModule {
    fn name(&self) -> &'static str {
        "listings"
    }

    async fn init(&self, ctx: &InitCtx<'_>) -> anyhow::Result<()> {
        tracing::info!(
            module = self.name(),
            environment = ?ctx.settings.environment,
            "listings module initialized"
        );
        Ok(())
    }

    fn routes(&self, ctx: &InitCtx<'_>) -> Router {
        let store = ListingStore::new(ctx.db);

        Router::new()
            .route("/", get(routes::index).post(routes::create))
            .route("/new", get(routes::new_form))
            .route(
                "/{id}",
                get(routes::show)
                    .put(routes::update)
                    .delete(routes::delete),
            )
            .route("/{id}/edit", get(routes::edit_form))
            .route("/{id}/reviews", post(routes::create_review))
            .with_state(store)
    }
}

/// Create a new instance of the listings module
pub fn create_module() -> std::sync::Arc<dyn Module> {
    std::sync::Arc::new(ListingsModule::new())
}
