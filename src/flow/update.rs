// SPDX-License-Identifier: GPL-3.0-only

//! Event update handling
//!
//! This module handles all flow events by routing them to focused handler
//! methods. The main `apply()` function acts as a dispatcher, while specific
//! handlers are implemented in the `handlers` submodules organized by
//! functional domain.
//!
//! # Handler Modules
//!
//! - `handlers::permissions`: Permission resolution and retry
//! - `handlers::capture`: Shutter press and capture completion
//! - `handlers::review`: Save, save completion, retake
//! - `handlers::ui`: Session preferences

use crate::flow::state::{Effect, Event, FlowModel};

impl FlowModel {
    /// Main event handler - routes events to appropriate handler methods.
    ///
    /// Each event is applied to completion before the next one: the state
    /// is updated in place and the returned effects are what the driver
    /// still has to run, in order. Events that are not meaningful in the
    /// current state are logged and ignored rather than rejected.
    pub fn apply(&mut self, event: Event) -> Vec<Effect> {
        match event {
            // ===== Session =====
            Event::SessionStarted => self.handle_session_started(),
            Event::PermissionsResolved {
                camera,
                storage,
                via_prompt,
            } => self.handle_permissions_resolved(camera, storage, via_prompt),
            Event::PermissionRetryRequested => self.handle_permission_retry(),

            // ===== Capture Operations =====
            Event::CaptureRequested => self.handle_capture_requested(),
            Event::CaptureFinished(result) => self.handle_capture_finished(result),

            // ===== Review =====
            Event::SaveRequested => self.handle_save_requested(),
            Event::SaveFinished(result) => self.handle_save_finished(result),
            Event::RetakeRequested => self.handle_retake(),

            // ===== Preferences =====
            Event::FacingToggleRequested => self.handle_facing_toggled(),
        }
    }
}
