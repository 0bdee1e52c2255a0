// SPDX-License-Identifier: GPL-3.0-only

//! Session preference handlers

use tracing::{info, warn};

use crate::flow::state::{Effect, FlowModel};

impl FlowModel {
    // =========================================================================
    // Preference Handlers
    // =========================================================================

    pub(crate) fn handle_facing_toggled(&mut self) -> Vec<Effect> {
        if !self.state.is_viewfinder() {
            warn!(
                state = self.state.name(),
                "Facing toggle outside viewfinder ignored"
            );
            return vec![];
        }

        self.facing = self.facing.toggled();
        info!(facing = %self.facing, "Camera facing toggled");
        vec![]
    }
}
