// file: src/bootstrap.rs
// description: startup sequencing: wait for engine, ensure index, seed documents
// reference: runs to completion before the HTTP surface binds

use crate::config::{BootstrapConfig, Config};
use crate::engine::{SearchEngine, index_settings_and_mappings};
use crate::error::{AppError, Result};
use crate::models::seed_documents;
use std::time::Duration;
use tokio::time::Instant;
use tracing::{debug, info, warn};

/// Run the full startup sequence. Idempotent: a restart against an
/// already provisioned index changes nothing.
pub async fn initialize(engine: &dyn SearchEngine, config: &Config) -> Result<()> {
    wait_for_engine(engine, &config.bootstrap).await?;
    ensure_index(engine, &config.index.name).await?;
    seed_if_empty(engine, &config.index.name).await?;
    Ok(())
}

/// Poll engine health at a fixed interval until it answers or the
/// startup timeout elapses. Transient errors are retried silently.
async fn wait_for_engine(engine: &dyn SearchEngine, config: &BootstrapConfig) -> Result<()> {
    let deadline = Instant::now() + Duration::from_secs(config.startup_timeout_secs);
    let interval = Duration::from_secs(config.poll_interval_secs);

    loop {
        match engine.health().await {
            Ok(true) => {
                info!("Engine is reachable");
                return Ok(());
            }
            Ok(false) => debug!("Engine answered but reported no status yet"),
            Err(e) => debug!("Engine not reachable yet: {}", e),
        }

        if Instant::now() >= deadline {
            return Err(AppError::EngineTimeout(config.startup_timeout_secs));
        }

        tokio::time::sleep(interval).await;
    }
}

async fn ensure_index(engine: &dyn SearchEngine, index: &str) -> Result<()> {
    if engine.index_exists(index).await? {
        info!("Index '{}' already exists", index);
        return Ok(());
    }

    engine
        .create_index(index, index_settings_and_mappings())
        .await?;
    info!("Created index '{}'", index);

    Ok(())
}

/// Index the fixed seed set iff the index holds no documents, then
/// refresh so the seeds are immediately searchable.
async fn seed_if_empty(engine: &dyn SearchEngine, index: &str) -> Result<()> {
    let count = engine.count(index).await?;

    if count > 0 {
        info!("Index '{}' holds {} documents, skipping seed", index, count);
        return Ok(());
    }

    warn!("Index '{}' is empty, seeding sample documents", index);

    for (i, document) in seed_documents().iter().enumerate() {
        engine
            .index_document(index, (i + 1) as u64, document)
            .await?;
    }

    engine.refresh(index).await?;
    info!("Seeded {} documents", seed_documents().len());

    Ok(())
}
