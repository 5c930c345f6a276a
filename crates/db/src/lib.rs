//! MongoDB client factory for staylist.

use anyhow::Context;
use mongodb::Client;

use staylist_kernel::settings::DatabaseSettings;

/// Establish the process-wide MongoDB connection and return the database
/// handle. Called once at startup; the handle is cloned into router state
/// rather than living in a global.
pub async fn connect(settings: &DatabaseSettings) -> anyhow::Result<mongodb::Database> {
    let client = Client::with_uri_str(&settings.uri)
        .await
        .with_context(|| format!("failed to create MongoDB client for '{}'", settings.uri))?;

    let db = client.database(&settings.database);

    tracing::info!(
        uri = %settings.uri,
        database = %settings.database,
        "connected to the database"
    );

    Ok(db)
}
