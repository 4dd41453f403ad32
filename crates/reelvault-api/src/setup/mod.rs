//! Application assembly: database, storage, pipelines, routes.

pub mod routes;
pub mod server;

use std::sync::Arc;

use anyhow::Result;
use axum::Router;
use reelvault_core::Config;
use reelvault_db::PgRecordStore;
use reelvault_processing::{FfmpegRemuxer, FfprobeProber};
use reelvault_storage::{LocalStorage, S3ObjectStore};
use sqlx::postgres::PgPoolOptions;

use crate::state::AppState;

const DB_MAX_CONNECTIONS: u32 = 20;

/// Build all production components from configuration and assemble the
/// router.
pub async fn initialize_app(config: Config) -> Result<(Arc<AppState>, Router)> {
    let pool = PgPoolOptions::new()
        .max_connections(DB_MAX_CONNECTIONS)
        .connect(&config.database_url)
        .await?;

    let records = PgRecordStore::new(pool);
    records.migrate().await?;

    let assets = LocalStorage::new(&config.asset_root, config.asset_base_url.clone()).await?;

    let objects = S3ObjectStore::new(
        config.s3_bucket.clone(),
        config.s3_region.clone(),
        config.s3_endpoint.clone(),
        config.s3_public_base_url.clone(),
    )
    .await?;

    let prober = FfprobeProber::new(config.ffprobe_path.clone())?;
    let remuxer = FfmpegRemuxer::new(config.ffmpeg_path.clone())?;

    let state = Arc::new(AppState::new(
        config,
        Arc::new(records),
        assets,
        Arc::new(objects),
        Arc::new(prober),
        Arc::new(remuxer),
    ));

    let router = routes::build_router(state.clone());

    Ok((state, router))
}
