//! Media inspection and transformation collaborators.
//!
//! ffprobe and ffmpeg are invoked as external processes against file
//! paths, behind the narrow [`MediaProber`] and [`MediaRemuxer`] traits so
//! tests can substitute fakes.

pub mod aspect;
pub mod error;
pub mod probe;
pub mod remux;

pub use aspect::AspectClass;
pub use error::ProcessingError;
pub use probe::{FfprobeProber, Geometry, MediaProber};
pub use remux::{FfmpegRemuxer, MediaRemuxer};

/// Validate that a configured binary path doesn't contain shell
/// metacharacters or dangerous sequences.
pub(crate) fn validate_binary_path(path: &str) -> Result<(), ProcessingError> {
    let dangerous_chars = [';', '|', '&', '$', '`', '(', ')', '<', '>', '\n', '\r'];
    if path.is_empty() || path.chars().any(|c| dangerous_chars.contains(&c)) {
        return Err(ProcessingError::Config(format!(
            "Invalid binary path: {:?}",
            path
        )));
    }
    Ok(())
}
