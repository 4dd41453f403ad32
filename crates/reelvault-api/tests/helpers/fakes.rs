//! Fake probe/remux collaborators.
//!
//! Both record every path they are handed so tests can assert that no
//! staging file survives the run, and both can be switched into a failing
//! mode to exercise the pipeline's error paths.

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use reelvault_processing::{Geometry, MediaProber, MediaRemuxer, ProcessingError};

#[derive(Clone)]
pub struct FakeProber {
    geometry: Arc<Mutex<Geometry>>,
    fail: Arc<AtomicBool>,
    seen: Arc<Mutex<Vec<PathBuf>>>,
}

impl FakeProber {
    pub fn landscape() -> Self {
        Self::with_geometry(1920, 1080)
    }

    pub fn with_geometry(width: u32, height: u32) -> Self {
        Self {
            geometry: Arc::new(Mutex::new(Geometry { width, height })),
            fail: Arc::new(AtomicBool::new(false)),
            seen: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn set_geometry(&self, width: u32, height: u32) {
        *self.geometry.lock().unwrap() = Geometry { width, height };
    }

    pub fn set_fail(&self, fail: bool) {
        self.fail.store(fail, Ordering::SeqCst);
    }

    pub fn seen_paths(&self) -> Vec<PathBuf> {
        self.seen.lock().unwrap().clone()
    }
}

#[async_trait]
impl MediaProber for FakeProber {
    async fn probe_geometry(&self, path: &Path) -> Result<Geometry, ProcessingError> {
        self.seen.lock().unwrap().push(path.to_path_buf());
        if self.fail.load(Ordering::SeqCst) {
            return Err(ProcessingError::ProbeFailed(
                "probe failure injected".to_string(),
            ));
        }
        Ok(*self.geometry.lock().unwrap())
    }
}

#[derive(Clone)]
pub struct FakeRemuxer {
    fail: Arc<AtomicBool>,
    seen: Arc<Mutex<Vec<PathBuf>>>,
}

impl FakeRemuxer {
    pub fn new() -> Self {
        Self {
            fail: Arc::new(AtomicBool::new(false)),
            seen: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn set_fail(&self, fail: bool) {
        self.fail.store(fail, Ordering::SeqCst);
    }

    pub fn seen_paths(&self) -> Vec<PathBuf> {
        self.seen.lock().unwrap().clone()
    }
}

#[async_trait]
impl MediaRemuxer for FakeRemuxer {
    async fn remux_faststart(&self, input: &Path, output: &Path) -> Result<(), ProcessingError> {
        self.seen.lock().unwrap().push(input.to_path_buf());
        self.seen.lock().unwrap().push(output.to_path_buf());
        if self.fail.load(Ordering::SeqCst) {
            return Err(ProcessingError::RemuxFailed(
                "remux failure injected".to_string(),
            ));
        }
        // Stream copy stand-in: the bytes pass through unchanged.
        tokio::fs::copy(input, output).await?;
        Ok(())
    }
}
