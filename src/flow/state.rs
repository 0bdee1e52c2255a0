// SPDX-License-Identifier: GPL-3.0-only

//! Flow state management

use crate::backends::camera::types::{CameraFacing, CaptureConfig, CapturedImage};
use crate::backends::permissions::{PermissionStatus, Permissions};
use crate::errors::{CaptureError, PersistError};
use crate::storage::SavedAsset;

/// Capture flow state machine
///
/// Four-state design: permissions first, then the viewfinder and review
/// loop. The reviewed still lives inside the state, so leaving review
/// always settles what happens to it.
#[derive(Debug, Default)]
pub enum FlowState {
    /// Permissions not yet resolved
    #[default]
    AwaitingPermissions,
    /// Camera or storage access is missing
    PermissionDenied,
    /// Live preview, ready to capture
    Viewfinder,
    /// Holding a captured still for review
    Review {
        /// The still under review
        image: CapturedImage,
    },
}

impl FlowState {
    /// Check if permissions are still unresolved
    pub fn is_awaiting_permissions(&self) -> bool {
        matches!(self, FlowState::AwaitingPermissions)
    }

    /// Check if the flow is parked on the denial screen
    pub fn is_permission_denied(&self) -> bool {
        matches!(self, FlowState::PermissionDenied)
    }

    /// Check if the live preview is up
    pub fn is_viewfinder(&self) -> bool {
        matches!(self, FlowState::Viewfinder)
    }

    /// Check if a still is under review
    pub fn is_review(&self) -> bool {
        matches!(self, FlowState::Review { .. })
    }

    /// Get the reviewed still if reviewing
    pub fn held_image(&self) -> Option<&CapturedImage> {
        match self {
            FlowState::Review { image } => Some(image),
            _ => None,
        }
    }

    /// Leave review, handing the held still to the caller
    ///
    /// Any other state is left untouched and yields `None`.
    pub fn release_image(&mut self) -> Option<CapturedImage> {
        match std::mem::replace(self, FlowState::Viewfinder) {
            FlowState::Review { image } => Some(image),
            other => {
                *self = other;
                None
            }
        }
    }

    /// State name for diagnostics
    pub fn name(&self) -> &'static str {
        match self {
            FlowState::AwaitingPermissions => "AwaitingPermissions",
            FlowState::PermissionDenied => "PermissionDenied",
            FlowState::Viewfinder => "Viewfinder",
            FlowState::Review { .. } => "Review",
        }
    }
}

/// The flow model stores the state machine plus the session context that
/// survives transitions.
#[derive(Debug, Default)]
pub struct FlowModel {
    /// Current flow state
    pub state: FlowState,
    /// Permission statuses as last observed
    pub permissions: Permissions,
    /// Which camera the next capture uses
    pub facing: CameraFacing,
    /// Options applied to every capture in this session
    pub capture_config: CaptureConfig,
}

impl FlowModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Model with explicit session preferences
    pub fn with_preferences(facing: CameraFacing, capture_config: CaptureConfig) -> Self {
        Self {
            facing,
            capture_config,
            ..Default::default()
        }
    }
}

/// Events consumed by the flow.
///
/// Events are organized into logical groups:
/// - **Session**: Startup and permission resolution
/// - **Capture Operations**: Shutter press and capture completion
/// - **Review**: Save, save completion, retake
/// - **Preferences**: Camera facing selection
#[derive(Debug)]
pub enum Event {
    // ===== Session =====
    /// Flow started, permissions not yet known
    SessionStarted,
    /// Permission statuses resolved
    PermissionsResolved {
        /// Camera access state
        camera: PermissionStatus,
        /// Storage access state
        storage: PermissionStatus,
        /// Whether this resolution came out of a user-facing prompt
        via_prompt: bool,
    },
    /// Retry requested from the denial screen
    PermissionRetryRequested,

    // ===== Capture Operations =====
    /// Shutter pressed
    CaptureRequested,
    /// Capture completed with a still or an error
    CaptureFinished(Result<CapturedImage, CaptureError>),

    // ===== Review =====
    /// Save of the reviewed still requested
    SaveRequested,
    /// Persist completed with the saved asset or an error
    SaveFinished(Result<SavedAsset, PersistError>),
    /// Discard the reviewed still and return to the viewfinder
    RetakeRequested,

    // ===== Preferences =====
    /// Flip between front and back camera
    FacingToggleRequested,
}

/// Side effects requested by the flow.
///
/// The model performs no work itself. Each transition returns the effects
/// the driver has to run, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Resolve current permission statuses, prompting for any still unresolved
    ResolvePermissions,
    /// Prompt for the named permissions, even previously denied ones
    PromptPermissions {
        /// Whether to prompt for camera access
        camera: bool,
        /// Whether to prompt for storage access
        storage: bool,
    },
    /// Capture a still with the given camera and options
    CaptureStill {
        /// Which camera to use
        facing: CameraFacing,
        /// Options for this capture
        config: CaptureConfig,
    },
    /// Persist the reviewed still to durable storage
    PersistImage,
    /// Surface the permission denial notice
    PresentDenialNotice,
}
