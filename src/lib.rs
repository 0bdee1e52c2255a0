// SPDX-License-Identifier: MPL-2.0

//! Capture Flow - A capture-and-review camera workflow
//!
//! This library drives the capture-and-review loop of a camera app: resolve
//! permissions, show a viewfinder, capture a still, review it, and save or
//! retake. The state machine is pure; all platform access goes through
//! trait backends.
//!
//! # Architecture
//!
//! The crate is organized into several modules:
//!
//! - [`flow`]: State machine, event handling, and the async driver
//! - [`backends`]: Capture device and permission provider abstraction
//! - [`storage`]: Durable media storage
//! - [`config`]: User configuration handling
//! - [`constants`]: Application-wide constants
//! - [`errors`]: Error taxonomy
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use capture_flow::backends::camera::SyntheticCamera;
//! use capture_flow::backends::permissions::StaticPermissions;
//! use capture_flow::flow::CaptureFlow;
//! use capture_flow::storage::DiskMediaStore;
//!
//! # async fn run() -> capture_flow::errors::FlowResult<()> {
//! let mut flow = CaptureFlow::new(
//!     Arc::new(StaticPermissions::granted()),
//!     Arc::new(SyntheticCamera::new()),
//!     Arc::new(DiskMediaStore::default_location()),
//! );
//!
//! flow.start().await;
//! flow.capture_picture().await?;
//! let asset = flow.save_current_image().await?;
//! println!("saved {}", asset.uri);
//! # Ok(())
//! # }
//! ```

pub mod backends;
pub mod config;
pub mod constants;
pub mod errors;
pub mod flow;
pub mod storage;

// Re-export commonly used types
pub use backends::camera::types::{CameraFacing, CaptureConfig, CaptureQuality, CapturedImage};
pub use backends::permissions::{PermissionStatus, Permissions};
pub use config::Config;
pub use errors::{FlowError, FlowResult};
pub use flow::{CaptureFlow, Effect, Event, FlowModel, FlowState, Screen};
pub use storage::SavedAsset;
