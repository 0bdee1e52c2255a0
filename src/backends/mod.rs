// SPDX-License-Identifier: MPL-2.0

//! Backend abstraction layer for capture and permissions
//!
//! This module provides the platform-facing seams of the flow:
//! - Still capture through [`camera::CaptureDevice`]
//! - Permission brokering through [`permissions::PermissionProvider`]
//!
//! # Architecture
//!
//! The backend layer abstracts platform access, so the flow core reads the
//! same regardless of what sits behind the traits:
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │                 Flow Layer                   │
//! └────────────────────┬────────────────────────┘
//!                      │
//! ┌────────────────────┴────────────────────────┐
//! │              Backend Layer                   │
//! │  ┌─────────────┐    ┌──────────────────┐   │
//! │  │ Permissions │    │  Capture Device  │   │
//! │  │  (broker)   │    │   (synthetic)    │   │
//! │  └─────────────┘    └──────────────────┘   │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`camera`]: Capture device trait, shared types, and the synthetic backend
//! - [`permissions`]: Permission status types and the provider trait

pub mod camera;
pub mod permissions;
