// SPDX-License-Identifier: MPL-2.0
// In-process capture backend producing deterministic stills

//! Synthetic capture backend
//!
//! Renders a deterministic gradient still entirely in process. Used for
//! development and for exercising the flow without camera hardware.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use image::RgbImage;
use tracing::debug;

use super::CaptureDevice;
use super::types::{CameraFacing, CaptureConfig, CapturedImage};
use crate::constants::synthetic;
use crate::errors::CaptureError;

/// Capture backend that renders stills in process
pub struct SyntheticCamera {
    width: u32,
    height: u32,
    counter: AtomicU64,
}

impl SyntheticCamera {
    pub fn new() -> Self {
        Self::with_size(synthetic::WIDTH, synthetic::HEIGHT)
    }

    /// Synthetic camera with an explicit frame size
    pub fn with_size(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            counter: AtomicU64::new(0),
        }
    }

    /// Render one gradient frame
    ///
    /// The blue channel is tinted by facing and sequence number, so stills
    /// from different captures and cameras are distinguishable.
    fn render(width: u32, height: u32, facing: CameraFacing, seq: u64) -> RgbImage {
        let base = match facing {
            CameraFacing::Front => 200u8,
            CameraFacing::Back => 40u8,
        };
        RgbImage::from_fn(width, height, |x, y| {
            let r = (x * 255 / width.max(1)) as u8;
            let g = (y * 255 / height.max(1)) as u8;
            let b = base.wrapping_add(seq as u8);
            image::Rgb([r, g, b])
        })
    }

    /// Encode a frame as JPEG
    fn encode_jpeg(frame: RgbImage, quality: u8) -> Result<Vec<u8>, CaptureError> {
        let mut buffer = Vec::new();
        let mut cursor = std::io::Cursor::new(&mut buffer);

        let mut encoder = image::codecs::jpeg::JpegEncoder::new_with_quality(&mut cursor, quality);

        encoder
            .encode(
                frame.as_raw(),
                frame.width(),
                frame.height(),
                image::ExtendedColorType::Rgb8,
            )
            .map_err(|e| CaptureError::EncodingFailed(e.to_string()))?;

        Ok(buffer)
    }
}

impl Default for SyntheticCamera {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CaptureDevice for SyntheticCamera {
    async fn capture(
        &self,
        facing: CameraFacing,
        config: &CaptureConfig,
    ) -> Result<CapturedImage, CaptureError> {
        let seq = self.counter.fetch_add(1, Ordering::Relaxed);
        let (width, height) = (self.width, self.height);
        let quality = config.quality.jpeg_quality();

        // Rendering and encoding are CPU-bound, keep them off the runtime
        let encoded = tokio::task::spawn_blocking(move || {
            let frame = Self::render(width, height, facing, seq);
            Self::encode_jpeg(frame, quality)
        })
        .await
        .map_err(|e| CaptureError::CaptureFailed(format!("Capture task error: {}", e)))??;

        debug!(
            seq,
            facing = %facing,
            size = encoded.len(),
            "Synthetic still captured"
        );

        let uri = format!("{}{}", synthetic::URI_PREFIX, seq);
        let data = config
            .include_inline_encoding
            .then(|| Arc::from(encoded.into_boxed_slice()));

        Ok(CapturedImage::new(uri, width, height, data))
    }

    fn is_available(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_capture_carries_inline_encoding() {
        let camera = SyntheticCamera::with_size(64, 48);
        let image = camera
            .capture(CameraFacing::Back, &CaptureConfig::default())
            .await
            .expect("synthetic capture should succeed");

        assert_eq!(image.width, 64);
        assert_eq!(image.height, 48);
        assert!(image.has_inline_data());
        assert!(image.uri.starts_with(synthetic::URI_PREFIX));
    }

    #[tokio::test]
    async fn test_capture_without_inline_encoding() {
        let camera = SyntheticCamera::with_size(64, 48);
        let config = CaptureConfig {
            include_inline_encoding: false,
            ..Default::default()
        };
        let image = camera
            .capture(CameraFacing::Front, &config)
            .await
            .expect("synthetic capture should succeed");

        assert!(!image.has_inline_data());
    }

    #[tokio::test]
    async fn test_capture_uris_are_distinct() {
        let camera = SyntheticCamera::with_size(32, 32);
        let config = CaptureConfig::default();
        let first = camera.capture(CameraFacing::Back, &config).await.unwrap();
        let second = camera.capture(CameraFacing::Back, &config).await.unwrap();

        assert_ne!(first.uri, second.uri);
        assert_ne!(first, second);
    }
}
