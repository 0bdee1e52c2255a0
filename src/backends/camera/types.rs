// SPDX-License-Identifier: GPL-3.0-only

//! Shared capture types
//!
//! Types exchanged between the capture device backends and the flow core.

use std::fmt;
use std::sync::Arc;
use std::time::Instant;

use uuid::Uuid;

/// Which way the capture device points
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
pub enum CameraFacing {
    /// User-facing (selfie) camera
    Front,
    /// World-facing camera
    #[default]
    Back,
}

impl CameraFacing {
    /// All available facings
    pub const ALL: [CameraFacing; 2] = [CameraFacing::Front, CameraFacing::Back];

    /// Human-readable name
    pub fn display_name(&self) -> &'static str {
        match self {
            CameraFacing::Front => "Front",
            CameraFacing::Back => "Back",
        }
    }

    /// The other facing
    pub fn toggled(&self) -> Self {
        match self {
            CameraFacing::Front => CameraFacing::Back,
            CameraFacing::Back => CameraFacing::Front,
        }
    }

    /// Parse from a name as given on the command line
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "front" => Some(CameraFacing::Front),
            "back" => Some(CameraFacing::Back),
            _ => None,
        }
    }
}

impl fmt::Display for CameraFacing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Still capture quality preset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
pub enum CaptureQuality {
    /// Smallest output, strongest compression
    Low,
    /// Balanced output
    Medium,
    /// Minimal compression
    #[default]
    Maximum,
}

impl CaptureQuality {
    /// All available quality presets
    pub const ALL: [CaptureQuality; 3] = [
        CaptureQuality::Low,
        CaptureQuality::Medium,
        CaptureQuality::Maximum,
    ];

    /// Human-readable name
    pub fn display_name(&self) -> &'static str {
        match self {
            CaptureQuality::Low => "Low",
            CaptureQuality::Medium => "Medium",
            CaptureQuality::Maximum => "Maximum",
        }
    }

    /// JPEG quality factor for this preset
    pub fn jpeg_quality(&self) -> u8 {
        match self {
            CaptureQuality::Low => 60,
            CaptureQuality::Medium => 80,
            CaptureQuality::Maximum => 98,
        }
    }
}

impl fmt::Display for CaptureQuality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Options applied to a single still capture
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CaptureConfig {
    /// Quality preset for the encoded still
    pub quality: CaptureQuality,
    /// Whether to write EXIF metadata into the output
    pub embed_exif_metadata: bool,
    /// Whether to keep the encoded bytes in memory alongside the URI
    pub include_inline_encoding: bool,
}

impl Default for CaptureConfig {
    fn default() -> Self {
        Self {
            quality: CaptureQuality::Maximum, // full quality stills
            embed_exif_metadata: false,       // no EXIF block
            include_inline_encoding: true,    // keep bytes for persistence
        }
    }
}

/// A captured still image
///
/// Identity is the capture id: two handles compare equal when they refer
/// to the same capture, regardless of whether the inline bytes are held.
pub struct CapturedImage {
    /// Unique id for this capture
    pub id: Uuid,
    /// Backend URI of the captured still
    pub uri: String,
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
    /// Encoded bytes, when the capture requested an inline encoding
    pub data: Option<Arc<[u8]>>,
    /// When the capture completed
    pub captured_at: Instant,
}

impl CapturedImage {
    pub fn new(uri: String, width: u32, height: u32, data: Option<Arc<[u8]>>) -> Self {
        Self {
            id: Uuid::new_v4(),
            uri,
            width,
            height,
            data,
            captured_at: Instant::now(),
        }
    }

    /// Size of the inline encoding in bytes, zero when absent
    pub fn inline_len(&self) -> usize {
        self.data.as_ref().map(|d| d.len()).unwrap_or(0)
    }

    /// Whether the encoded bytes are held in memory
    pub fn has_inline_data(&self) -> bool {
        self.data.is_some()
    }
}

impl fmt::Debug for CapturedImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CapturedImage")
            .field("id", &self.id)
            .field("uri", &self.uri)
            .field("width", &self.width)
            .field("height", &self.height)
            .field("inline_len", &self.inline_len())
            .finish()
    }
}

impl PartialEq for CapturedImage {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for CapturedImage {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_facing_toggled_is_involutive() {
        for facing in CameraFacing::ALL {
            assert_eq!(facing.toggled().toggled(), facing);
        }
    }

    #[test]
    fn test_facing_from_name() {
        assert_eq!(CameraFacing::from_name("front"), Some(CameraFacing::Front));
        assert_eq!(CameraFacing::from_name("Back"), Some(CameraFacing::Back));
        assert_eq!(CameraFacing::from_name("sideways"), None);
    }

    #[test]
    fn test_default_facing_is_back() {
        assert_eq!(CameraFacing::default(), CameraFacing::Back);
    }

    #[test]
    fn test_quality_jpeg_factors() {
        assert_eq!(CaptureQuality::Low.jpeg_quality(), 60);
        assert_eq!(CaptureQuality::Medium.jpeg_quality(), 80);
        assert_eq!(CaptureQuality::Maximum.jpeg_quality(), 98);
    }

    #[test]
    fn test_capture_config_defaults() {
        let config = CaptureConfig::default();
        assert_eq!(config.quality, CaptureQuality::Maximum);
        assert!(!config.embed_exif_metadata);
        assert!(config.include_inline_encoding);
    }

    #[test]
    fn test_captured_image_identity() {
        let a = CapturedImage::new("mem://a".into(), 640, 480, None);
        let b = CapturedImage::new("mem://a".into(), 640, 480, None);
        assert_ne!(a, b, "distinct captures must not compare equal");
        assert_eq!(a, a);
    }

    #[test]
    fn test_inline_len() {
        let bytes: Arc<[u8]> = Arc::from(vec![0u8; 16].into_boxed_slice());
        let with = CapturedImage::new("mem://x".into(), 2, 2, Some(bytes));
        let without = CapturedImage::new("mem://y".into(), 2, 2, None);
        assert_eq!(with.inline_len(), 16);
        assert!(with.has_inline_data());
        assert_eq!(without.inline_len(), 0);
        assert!(!without.has_inline_data());
    }
}
