//! Stream geometry probing via ffprobe.

use std::path::Path;

use async_trait::async_trait;
use serde::Deserialize;
use tokio::process::Command;

use crate::error::ProcessingError;
use crate::validate_binary_path;

/// Width and height of the first video stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Geometry {
    pub width: u32,
    pub height: u32,
}

/// Media inspection collaborator.
#[async_trait]
pub trait MediaProber: Send + Sync {
    /// Probe the file at `path` for its video stream geometry.
    async fn probe_geometry(&self, path: &Path) -> Result<Geometry, ProcessingError>;
}

/// ffprobe-backed prober, invoked as an external process.
#[derive(Clone)]
pub struct FfprobeProber {
    ffprobe_path: String,
}

impl FfprobeProber {
    pub fn new(ffprobe_path: String) -> Result<Self, ProcessingError> {
        validate_binary_path(&ffprobe_path)?;
        Ok(Self { ffprobe_path })
    }
}

#[derive(Debug, Deserialize)]
struct ProbeOutput {
    #[serde(default)]
    streams: Vec<ProbeStream>,
}

#[derive(Debug, Deserialize)]
struct ProbeStream {
    width: Option<u32>,
    height: Option<u32>,
}

/// Parse ffprobe's `-print_format json -show_streams` output into the
/// first video stream's geometry.
fn parse_probe_output(stdout: &[u8]) -> Result<Geometry, ProcessingError> {
    let probe: ProbeOutput = serde_json::from_slice(stdout)
        .map_err(|e| ProcessingError::ProbeFailed(format!("Invalid ffprobe output: {}", e)))?;

    let stream = probe
        .streams
        .iter()
        .find(|s| s.width.is_some() && s.height.is_some())
        .ok_or_else(|| ProcessingError::ProbeFailed("No video stream found".to_string()))?;

    Ok(Geometry {
        width: stream.width.unwrap_or(0),
        height: stream.height.unwrap_or(0),
    })
}

#[async_trait]
impl MediaProber for FfprobeProber {
    #[tracing::instrument(skip(self), fields(ffmpeg.operation = "probe"))]
    async fn probe_geometry(&self, path: &Path) -> Result<Geometry, ProcessingError> {
        let start = std::time::Instant::now();

        let output = Command::new(&self.ffprobe_path)
            .args([
                "-v",
                "error",
                "-print_format",
                "json",
                "-show_streams",
                "-select_streams",
                "v:0",
            ])
            .arg(path)
            .output()
            .await
            .map_err(|e| ProcessingError::ProbeFailed(format!("Failed to run ffprobe: {}", e)))?;

        if !output.status.success() {
            return Err(ProcessingError::ProbeFailed(format!(
                "ffprobe exited with {}: {}",
                output.status,
                String::from_utf8_lossy(&output.stderr)
            )));
        }

        let geometry = parse_probe_output(&output.stdout)?;

        tracing::info!(
            duration_ms = start.elapsed().as_millis() as u64,
            width = geometry.width,
            height = geometry.height,
            "Probe completed"
        );

        Ok(geometry)
    }
}
