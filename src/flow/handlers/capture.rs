// SPDX-License-Identifier: GPL-3.0-only

//! Capture operations handlers
//!
//! Handles the shutter press and the completion of an in-flight capture.

use tracing::{error, info, warn};

use crate::backends::camera::types::CapturedImage;
use crate::errors::CaptureError;
use crate::flow::state::{Effect, FlowModel, FlowState};

impl FlowModel {
    // =========================================================================
    // Capture Operations Handlers
    // =========================================================================

    pub(crate) fn handle_capture_requested(&mut self) -> Vec<Effect> {
        if !self.state.is_viewfinder() {
            warn!(
                state = self.state.name(),
                "Capture request outside viewfinder ignored"
            );
            return vec![];
        }

        info!(facing = %self.facing, "Capturing still");
        vec![Effect::CaptureStill {
            facing: self.facing,
            config: self.capture_config,
        }]
    }

    pub(crate) fn handle_capture_finished(
        &mut self,
        result: Result<CapturedImage, CaptureError>,
    ) -> Vec<Effect> {
        match result {
            Ok(image) => {
                if !self.state.is_viewfinder() {
                    warn!(
                        state = self.state.name(),
                        id = %image.id,
                        "Dropping still that finished outside viewfinder"
                    );
                    return vec![];
                }
                info!(id = %image.id, uri = %image.uri, "Still captured");
                self.state = FlowState::Review { image };
            }
            Err(err) => {
                error!(error = %err, "Capture failed");
            }
        }
        vec![]
    }
}
