// SPDX-License-Identifier: MPL-2.0
// Capture device abstraction for swappable still-capture backends

//! Capture device abstraction
//!
//! This module provides the trait boundary between the flow core and the
//! hardware (or simulated) still-capture backend.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────┐
//! │  Flow (CaptureFlow) │
//! └──────────┬──────────┘
//!            │
//!            ▼
//! ┌─────────────────────┐
//! │    CaptureDevice    │  ← Trait boundary (this module)
//! └──────────┬──────────┘
//!            │
//!            ▼
//! ┌─────────────────────┐
//! │   SyntheticCamera   │  ← Shipped in-process backend
//! └─────────────────────┘
//! ```
//!
//! The flow never names a concrete backend. Tests substitute scripted
//! devices behind the same trait.

pub mod synthetic;
pub mod types;

pub use synthetic::SyntheticCamera;
pub use types::*;

use async_trait::async_trait;

use crate::errors::CaptureError;

/// Trait boundary for still-capture devices
///
/// All methods take `&self`; implementations guard their own interior state.
#[async_trait]
pub trait CaptureDevice: Send + Sync {
    // ===== Capture =====

    /// Capture a single still frame
    ///
    /// # Arguments
    ///
    /// * `facing` - Which camera to capture from
    /// * `config` - Quality and encoding options for this capture
    ///
    /// # Returns
    ///
    /// A handle to the captured still. When `config.include_inline_encoding`
    /// is set, the handle carries the encoded bytes; otherwise only a
    /// backend URI.
    async fn capture(
        &self,
        facing: CameraFacing,
        config: &CaptureConfig,
    ) -> Result<CapturedImage, CaptureError>;

    // ===== Status =====

    /// Whether the device is currently able to capture
    fn is_available(&self) -> bool;
}
