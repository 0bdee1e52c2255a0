// SPDX-License-Identifier: GPL-3.0-only

//! Permission handlers
//!
//! Handles startup resolution, prompt results, and retry from the denial
//! screen.

use tracing::{info, warn};

use crate::backends::permissions::{PermissionStatus, Permissions};
use crate::flow::state::{Effect, FlowModel, FlowState};

impl FlowModel {
    // =========================================================================
    // Permission Handlers
    // =========================================================================

    pub(crate) fn handle_session_started(&mut self) -> Vec<Effect> {
        info!("Capture flow session started");
        vec![Effect::ResolvePermissions]
    }

    /// Apply a permission resolution to the model
    ///
    /// Entering the viewfinder needs both permissions. Once the viewfinder
    /// is up, only camera loss forces the denial screen; storage loss just
    /// hides the save control. Review always keeps its still.
    pub(crate) fn handle_permissions_resolved(
        &mut self,
        camera: PermissionStatus,
        storage: PermissionStatus,
        via_prompt: bool,
    ) -> Vec<Effect> {
        self.permissions = Permissions::new(camera, storage);
        info!(camera = %camera, storage = %storage, via_prompt, "Permissions resolved");

        match self.state {
            FlowState::AwaitingPermissions | FlowState::PermissionDenied => {
                if self.permissions.both_granted() {
                    self.state = FlowState::Viewfinder;
                    vec![]
                } else {
                    self.state = FlowState::PermissionDenied;
                    if via_prompt {
                        vec![Effect::PresentDenialNotice]
                    } else {
                        vec![]
                    }
                }
            }
            FlowState::Viewfinder => {
                if !camera.is_granted() {
                    warn!("Camera access lost, leaving viewfinder");
                    self.state = FlowState::PermissionDenied;
                }
                vec![]
            }
            FlowState::Review { .. } => vec![],
        }
    }

    pub(crate) fn handle_permission_retry(&mut self) -> Vec<Effect> {
        if !self.state.is_permission_denied() {
            warn!(
                state = self.state.name(),
                "Permission retry outside denial screen ignored"
            );
            return vec![];
        }

        info!("Retrying permission prompts");
        vec![Effect::PromptPermissions {
            camera: !self.permissions.camera.is_granted(),
            storage: !self.permissions.storage.is_granted(),
        }]
    }
}
