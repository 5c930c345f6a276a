use async_trait::async_trait;
use axum::Router;

/// Context provided to modules during initialization and route construction.
pub struct InitCtx<'a> {
    pub settings: &'a crate::settings::Settings,
    pub db: &'a mongodb::Database,
}

/// Core trait that every staylist module implements.
#[async_trait]
pub trait Module: Sync + Send {
    /// Unique name for this module; routes are mounted under `/{name}`.
    fn name(&self) -> &'static str;

    /// Initialize the module with the provided context.
    /// Called once during application startup, before the server binds.
    async fn init(&self, _ctx: &InitCtx<'_>) -> anyhow::Result<()> {
        Ok(())
    }

    /// Return the Axum router for this module's routes.
    /// The database handle is passed explicitly; modules clone what they need
    /// into router state.
    fn routes(&self, ctx: &InitCtx<'_>) -> Router;
}
