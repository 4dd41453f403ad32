//! Fast-start remuxing via ffmpeg.
//!
//! Moves the container's index metadata ahead of the media data so
//! progressive playback can start before the full download completes.
//! Stream copy only; no re-encoding.

use std::path::Path;

use async_trait::async_trait;
use tokio::process::Command;

use crate::error::ProcessingError;
use crate::validate_binary_path;

/// Media remux collaborator.
#[async_trait]
pub trait MediaRemuxer: Send + Sync {
    /// Remux `input` into a fast-start layout, writing the result to
    /// `output`. `output` must already exist; it is overwritten.
    async fn remux_faststart(&self, input: &Path, output: &Path)
        -> Result<(), ProcessingError>;
}

/// ffmpeg-backed remuxer, invoked as an external process.
#[derive(Clone)]
pub struct FfmpegRemuxer {
    ffmpeg_path: String,
}

impl FfmpegRemuxer {
    pub fn new(ffmpeg_path: String) -> Result<Self, ProcessingError> {
        validate_binary_path(&ffmpeg_path)?;
        Ok(Self { ffmpeg_path })
    }
}

#[async_trait]
impl MediaRemuxer for FfmpegRemuxer {
    #[tracing::instrument(skip(self), fields(ffmpeg.operation = "remux"))]
    async fn remux_faststart(
        &self,
        input: &Path,
        output: &Path,
    ) -> Result<(), ProcessingError> {
        let start = std::time::Instant::now();

        let result = Command::new(&self.ffmpeg_path)
            .arg("-y")
            .arg("-i")
            .arg(input)
            .args(["-c", "copy", "-movflags", "faststart", "-f", "mp4"])
            .arg(output)
            .output()
            .await
            .map_err(|e| ProcessingError::RemuxFailed(format!("Failed to run ffmpeg: {}", e)))?;

        if !result.status.success() {
            return Err(ProcessingError::RemuxFailed(format!(
                "ffmpeg exited with {}: {}",
                result.status,
                String::from_utf8_lossy(&result.stderr)
            )));
        }

        tracing::info!(
            duration_ms = start.elapsed().as_millis() as u64,
            "Remux completed"
        );

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dangerous_ffmpeg_path_is_rejected() {
        assert!(FfmpegRemuxer::new("ffmpeg | cat".to_string()).is_err());
        assert!(FfmpegRemuxer::new("/usr/bin/ffmpeg".to_string()).is_ok());
    }
}
