pub mod auth;
pub mod fakes;

use std::sync::Arc;

use axum_test::TestServer;
use reelvault_api::setup::routes::build_router;
use reelvault_api::state::AppState;
use reelvault_core::{Config, Record};
use reelvault_db::InMemoryRecordStore;
use reelvault_storage::{InMemoryObjectStore, LocalStorage};
use tempfile::TempDir;
use uuid::Uuid;

use self::fakes::{FakeProber, FakeRemuxer};

pub const JWT_SECRET: &str = "test-secret-test-secret-test-secret!";
pub const ASSET_BASE_URL: &str = "http://localhost:8091/assets";
pub const OBJECT_BASE_URL: &str = "https://media.test.reelvault.dev";

/// Test application with in-memory stores and fake media tools.
pub struct TestApp {
    pub server: TestServer,
    /// The assembled router, for tests that need to drive raw requests.
    pub router: axum::Router,
    pub records: InMemoryRecordStore,
    pub objects: InMemoryObjectStore,
    pub prober: FakeProber,
    pub remuxer: FakeRemuxer,
    pub asset_dir: TempDir,
}

impl TestApp {
    pub fn client(&self) -> &TestServer {
        &self.server
    }

    /// Create a record owned by `owner_id` directly in the store.
    pub fn seed_record(&self, owner_id: Uuid) -> Record {
        let record = Record::new(owner_id, "test clip".into(), "".into());
        self.records.insert(record.clone());
        record
    }

    /// Number of files currently present under the asset root.
    pub fn asset_file_count(&self) -> usize {
        std::fs::read_dir(self.asset_dir.path()).unwrap().count()
    }

    /// Assert that every path the fake tools saw has been cleaned up.
    pub fn assert_temp_files_cleaned(&self) {
        for path in self
            .prober
            .seen_paths()
            .into_iter()
            .chain(self.remuxer.seen_paths())
        {
            assert!(
                !path.exists(),
                "temporary file left behind: {}",
                path.display()
            );
        }
    }
}

fn test_config(asset_root: &std::path::Path) -> Config {
    Config {
        server_port: 8091,
        database_url: "postgresql://localhost/reelvault-test".into(),
        jwt_secret: JWT_SECRET.into(),
        jwt_expiry_hours: 24,
        asset_root: asset_root.to_string_lossy().into_owned(),
        asset_base_url: ASSET_BASE_URL.into(),
        s3_bucket: "reelvault-test".into(),
        s3_region: "us-east-2".into(),
        s3_endpoint: None,
        s3_public_base_url: Some(OBJECT_BASE_URL.into()),
        ffmpeg_path: "ffmpeg".into(),
        ffprobe_path: "ffprobe".into(),
        max_thumbnail_size_bytes: 10 * 1024 * 1024,
        max_video_size_bytes: 1024 * 1024 * 1024,
    }
}

/// Set up a test application with an isolated asset directory, in-memory
/// stores, and fake probe/remux collaborators.
pub async fn setup_test_app() -> TestApp {
    let asset_dir = TempDir::new().expect("Failed to create asset dir");
    let config = test_config(asset_dir.path());

    let records = InMemoryRecordStore::new();
    let objects = InMemoryObjectStore::new(OBJECT_BASE_URL);
    let prober = FakeProber::landscape();
    let remuxer = FakeRemuxer::new();

    let assets = LocalStorage::new(asset_dir.path(), config.asset_base_url.clone())
        .await
        .expect("Failed to create local storage");

    let state = Arc::new(AppState::new(
        config,
        Arc::new(records.clone()),
        assets,
        Arc::new(objects.clone()),
        Arc::new(prober.clone()),
        Arc::new(remuxer.clone()),
    ));

    let router = build_router(state);
    let server = TestServer::new(router.clone()).expect("Failed to create test server");

    TestApp {
        server,
        router,
        records,
        objects,
        prober,
        remuxer,
        asset_dir,
    }
}
