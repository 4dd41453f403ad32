use std::sync::Arc;

use reelvault_core::Config;
use reelvault_db::RecordStore;
use reelvault_processing::{MediaProber, MediaRemuxer};
use reelvault_storage::{LocalStorage, ObjectStore};

use crate::ingest::{ThumbnailIngestor, VideoIngestor};

/// Shared application state: configuration plus the constructed pipelines.
///
/// All collaborators come in as trait objects so tests can wire fakes.
pub struct AppState {
    pub config: Config,
    pub records: Arc<dyn RecordStore>,
    pub thumbnails: ThumbnailIngestor,
    pub videos: VideoIngestor,
}

impl AppState {
    pub fn new(
        config: Config,
        records: Arc<dyn RecordStore>,
        assets: LocalStorage,
        objects: Arc<dyn ObjectStore>,
        prober: Arc<dyn MediaProber>,
        remuxer: Arc<dyn MediaRemuxer>,
    ) -> Self {
        let thumbnails = ThumbnailIngestor::new(
            records.clone(),
            assets,
            config.max_thumbnail_size_bytes,
        );
        let videos = VideoIngestor::new(
            records.clone(),
            objects,
            prober,
            remuxer,
            config.max_video_size_bytes,
        );

        AppState {
            config,
            records,
            thumbnails,
            videos,
        }
    }
}
