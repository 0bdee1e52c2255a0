// SPDX-License-Identifier: GPL-3.0-only

//! Review handlers
//!
//! Handles saving the reviewed still, save completion, and retake.

use tracing::{error, info, warn};

use crate::errors::PersistError;
use crate::flow::state::{Effect, FlowModel, FlowState};
use crate::storage::SavedAsset;

impl FlowModel {
    // =========================================================================
    // Review Handlers
    // =========================================================================

    pub(crate) fn handle_save_requested(&mut self) -> Vec<Effect> {
        if !self.state.is_review() {
            warn!(
                state = self.state.name(),
                "Save request outside review ignored"
            );
            return vec![];
        }
        if !self.permissions.storage.is_granted() {
            warn!("Save request without storage access ignored");
            return vec![];
        }

        info!("Saving reviewed still");
        vec![Effect::PersistImage]
    }

    pub(crate) fn handle_save_finished(
        &mut self,
        result: Result<SavedAsset, PersistError>,
    ) -> Vec<Effect> {
        match result {
            Ok(asset) => {
                info!(uri = %asset.uri, "Still saved successfully");
                if self.state.release_image().is_none() {
                    warn!(
                        state = self.state.name(),
                        "Save finished outside review"
                    );
                } else if !self.permissions.camera.is_granted() {
                    self.state = FlowState::PermissionDenied;
                }
            }
            Err(err) => {
                error!(error = %err, "Failed to save still");
            }
        }
        vec![]
    }

    pub(crate) fn handle_retake(&mut self) -> Vec<Effect> {
        match self.state.release_image() {
            Some(image) => {
                info!(id = %image.id, "Discarded reviewed still");
                if !self.permissions.camera.is_granted() {
                    self.state = FlowState::PermissionDenied;
                }
            }
            None => {
                warn!(
                    state = self.state.name(),
                    "Retake outside review ignored"
                );
            }
        }
        vec![]
    }
}
