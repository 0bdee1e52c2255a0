// SPDX-License-Identifier: GPL-3.0-only

//! Screen projection
//!
//! Front ends never inspect [`FlowState`](crate::flow::state::FlowState)
//! directly. The model projects a [`Screen`] describing what to render and
//! which controls to offer, so every front end gates its controls the same
//! way.

use crate::backends::camera::types::CameraFacing;
use crate::constants::advisory;
use crate::flow::state::{FlowModel, FlowState};

/// What a front end should render for the current model
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    /// Nothing yet, permissions are still being resolved
    Blank,
    /// Explain the missing permissions and offer a retry control
    PermissionAdvisory {
        /// Message to show the user
        message: &'static str,
    },
    /// Live preview with shutter and facing controls
    Viewfinder {
        /// Which camera the preview shows
        facing: CameraFacing,
    },
    /// The captured still with retake and, when offered, save controls
    Review {
        /// URI of the still under review
        image_uri: String,
        /// Whether the save control is offered
        save_available: bool,
    },
}

impl Screen {
    /// Whether the shutter control is offered
    pub fn has_capture_control(&self) -> bool {
        matches!(self, Screen::Viewfinder { .. })
    }

    /// Whether the save control is offered
    pub fn has_save_control(&self) -> bool {
        matches!(
            self,
            Screen::Review {
                save_available: true,
                ..
            }
        )
    }
}

impl FlowModel {
    /// Project the screen for the current state
    ///
    /// The save control is only offered while storage access is granted,
    /// whatever state the flow is in.
    pub fn screen(&self) -> Screen {
        match &self.state {
            FlowState::AwaitingPermissions => Screen::Blank,
            FlowState::PermissionDenied => Screen::PermissionAdvisory {
                message: advisory::PERMISSION_MESSAGE,
            },
            FlowState::Viewfinder => Screen::Viewfinder {
                facing: self.facing,
            },
            FlowState::Review { image } => Screen::Review {
                image_uri: image.uri.clone(),
                save_available: self.permissions.storage.is_granted(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backends::camera::types::CapturedImage;
    use crate::backends::permissions::PermissionStatus;
    use crate::flow::state::Event;

    fn resolved(camera: PermissionStatus, storage: PermissionStatus) -> Event {
        Event::PermissionsResolved {
            camera,
            storage,
            via_prompt: true,
        }
    }

    #[test]
    fn test_blank_while_awaiting_permissions() {
        let model = FlowModel::new();
        assert_eq!(model.screen(), Screen::Blank);
        assert!(!model.screen().has_capture_control());
    }

    #[test]
    fn test_advisory_when_denied() {
        let mut model = FlowModel::new();
        model.apply(Event::SessionStarted);
        model.apply(resolved(
            PermissionStatus::Denied,
            PermissionStatus::Granted,
        ));

        assert!(matches!(
            model.screen(),
            Screen::PermissionAdvisory { .. }
        ));
    }

    #[test]
    fn test_viewfinder_screen_carries_facing() {
        let mut model = FlowModel::new();
        model.apply(Event::SessionStarted);
        model.apply(resolved(
            PermissionStatus::Granted,
            PermissionStatus::Granted,
        ));
        model.apply(Event::FacingToggleRequested);

        assert_eq!(
            model.screen(),
            Screen::Viewfinder {
                facing: CameraFacing::Front,
            }
        );
        assert!(model.screen().has_capture_control());
    }

    #[test]
    fn test_review_without_storage_hides_save_control() {
        let mut model = FlowModel::new();
        model.apply(Event::SessionStarted);
        model.apply(resolved(
            PermissionStatus::Granted,
            PermissionStatus::Granted,
        ));
        model.apply(Event::CaptureFinished(Ok(CapturedImage::new(
            "synthetic://still/0".into(),
            640,
            480,
            None,
        ))));

        assert!(model.screen().has_save_control());

        model.apply(resolved(
            PermissionStatus::Granted,
            PermissionStatus::Denied,
        ));

        let screen = model.screen();
        assert!(matches!(screen, Screen::Review { .. }));
        assert!(
            !screen.has_save_control(),
            "storage loss must hide the save control"
        );
    }
}
