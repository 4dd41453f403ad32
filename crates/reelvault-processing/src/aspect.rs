//! Aspect-ratio classification of probed stream geometry.

use std::fmt;

/// Relative tolerance when matching a ratio against the target buckets.
const RATIO_TOLERANCE: f64 = 0.01;

const LANDSCAPE_RATIO: f64 = 16.0 / 9.0;
const PORTRAIT_RATIO: f64 = 9.0 / 16.0;

/// Classification bucket for a video's aspect ratio, used as the storage
/// key prefix for uploaded video objects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AspectClass {
    Landscape,
    Portrait,
    Other,
}

impl AspectClass {
    /// Classify probed dimensions against 16:9 and 9:16.
    pub fn from_dimensions(width: u32, height: u32) -> Self {
        if width == 0 || height == 0 {
            return AspectClass::Other;
        }

        let ratio = width as f64 / height as f64;

        if (ratio - LANDSCAPE_RATIO).abs() / LANDSCAPE_RATIO < RATIO_TOLERANCE {
            AspectClass::Landscape
        } else if (ratio - PORTRAIT_RATIO).abs() / PORTRAIT_RATIO < RATIO_TOLERANCE {
            AspectClass::Portrait
        } else {
            AspectClass::Other
        }
    }

    /// Storage folder name for this bucket.
    pub fn folder(&self) -> &'static str {
        match self {
            AspectClass::Landscape => "landscape",
            AspectClass::Portrait => "portrait",
            AspectClass::Other => "other",
        }
    }
}

impl fmt::Display for AspectClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.folder())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_landscape() {
        assert_eq!(
            AspectClass::from_dimensions(1920, 1080),
            AspectClass::Landscape
        );
        assert_eq!(
            AspectClass::from_dimensions(1280, 720),
            AspectClass::Landscape
        );
    }

    #[test]
    fn test_standard_portrait() {
        assert_eq!(
            AspectClass::from_dimensions(1080, 1920),
            AspectClass::Portrait
        );
        assert_eq!(
            AspectClass::from_dimensions(720, 1280),
            AspectClass::Portrait
        );
    }

    #[test]
    fn test_square_is_other() {
        assert_eq!(AspectClass::from_dimensions(1000, 1000), AspectClass::Other);
    }

    #[test]
    fn test_cinema_wide_is_other() {
        // 2.39:1 is well outside the 16:9 band
        assert_eq!(AspectClass::from_dimensions(2039, 858), AspectClass::Other);
    }

    #[test]
    fn test_near_sixteen_nine_within_tolerance() {
        // 1918x1080 is ~0.1% off 16:9
        assert_eq!(
            AspectClass::from_dimensions(1918, 1080),
            AspectClass::Landscape
        );
    }

    #[test]
    fn test_zero_dimension_is_other() {
        assert_eq!(AspectClass::from_dimensions(0, 1080), AspectClass::Other);
        assert_eq!(AspectClass::from_dimensions(1920, 0), AspectClass::Other);
    }

    #[test]
    fn test_folder_names() {
        assert_eq!(AspectClass::Landscape.folder(), "landscape");
        assert_eq!(AspectClass::Portrait.folder(), "portrait");
        assert_eq!(AspectClass::Other.folder(), "other");
    }
}
