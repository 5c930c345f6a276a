use anyhow::Context;

use staylist_app::modules;
use staylist_kernel::settings::Settings;
use staylist_kernel::{InitCtx, ModuleRegistry};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = Settings::load().with_context(|| "failed to load staylist settings")?;

    staylist_telemetry::init(&settings.telemetry);

    tracing::info!(
        env = ?settings.environment,
        db = %settings.database.uri,
        "staylist bootstrap starting"
    );

    let db = staylist_db::connect(&settings.database)
        .await
        .with_context(|| "failed to connect to the database")?;

    let mut registry = ModuleRegistry::new();
    modules::register_all(&mut registry);

    let ctx = InitCtx {
        settings: &settings,
        db: &db,
    };
    registry.init_modules(&ctx).await?;

    tracing::info!("staylist bootstrap complete");

    staylist_http::start_server(&registry, &settings, &db).await
}
