// SPDX-License-Identifier: GPL-3.0-only

//! Flow driver
//!
//! [`CaptureFlow`] owns a [`FlowModel`] and interprets the effects it
//! requests against the backend traits. Each public operation feeds one
//! event and then drains the effect queue to completion, so the model is
//! always settled when an operation returns.

use std::collections::VecDeque;
use std::sync::Arc;

use tracing::{error, info, warn};

use crate::backends::camera::types::CameraFacing;
use crate::backends::camera::CaptureDevice;
use crate::backends::permissions::{PermissionProvider, PermissionStatus, Permissions};
use crate::constants::advisory;
use crate::errors::{CaptureError, FlowError, FlowResult, PermissionError, PersistError};
use crate::flow::state::{Effect, Event, FlowModel};
use crate::flow::view::Screen;
use crate::storage::{MediaStore, SavedAsset};

/// What happened while draining one event's effects
#[derive(Debug, Default)]
struct DrainOutcome {
    capture_error: Option<CaptureError>,
    saved: Option<SavedAsset>,
    persist_error: Option<PersistError>,
}

/// Async driver around the pure flow model
pub struct CaptureFlow {
    model: FlowModel,
    provider: Arc<dyn PermissionProvider>,
    camera: Arc<dyn CaptureDevice>,
    store: Arc<dyn MediaStore>,
    /// Denial notice raised by the last drained event, until taken
    notice: Option<&'static str>,
}

impl CaptureFlow {
    pub fn new(
        provider: Arc<dyn PermissionProvider>,
        camera: Arc<dyn CaptureDevice>,
        store: Arc<dyn MediaStore>,
    ) -> Self {
        Self::with_model(FlowModel::new(), provider, camera, store)
    }

    /// Driver around a model with explicit session preferences
    pub fn with_model(
        model: FlowModel,
        provider: Arc<dyn PermissionProvider>,
        camera: Arc<dyn CaptureDevice>,
        store: Arc<dyn MediaStore>,
    ) -> Self {
        Self {
            model,
            provider,
            camera,
            store,
            notice: None,
        }
    }

    pub fn model(&self) -> &FlowModel {
        &self.model
    }

    /// Screen the front end should render right now
    pub fn screen(&self) -> Screen {
        self.model.screen()
    }

    /// Permission statuses as last observed
    pub fn permissions(&self) -> Permissions {
        self.model.permissions
    }

    /// Take the pending denial notice, if one was raised
    pub fn take_notice(&mut self) -> Option<&'static str> {
        self.notice.take()
    }

    // ===== Operations =====

    /// Start the session and resolve permissions
    ///
    /// Unresolved permissions are prompted for; already resolved ones are
    /// read back without a prompt.
    pub async fn start(&mut self) -> Permissions {
        self.feed(Event::SessionStarted).await;
        self.model.permissions
    }

    /// Resolve permissions again
    ///
    /// Safe to call repeatedly: once statuses are resolved this reads them
    /// back without prompting, so no notice or prompt is duplicated.
    pub async fn request_permissions(&mut self) -> Permissions {
        let event = self.resolve_permissions().await;
        self.feed(event).await;
        self.model.permissions
    }

    /// Prompt again for the missing permissions, from the denial screen
    pub async fn re_request_permissions(&mut self) -> FlowResult<Permissions> {
        if !self.model.state.is_permission_denied() {
            return Err(self.invalid_state("re-request permissions"));
        }
        self.feed(Event::PermissionRetryRequested).await;
        Ok(self.model.permissions)
    }

    /// Capture a still and move to review
    pub async fn capture_picture(&mut self) -> FlowResult<()> {
        if !self.model.state.is_viewfinder() {
            return Err(self.invalid_state("capture"));
        }
        let outcome = self.feed(Event::CaptureRequested).await;
        match outcome.capture_error {
            Some(err) => Err(FlowError::Capture(err)),
            None => Ok(()),
        }
    }

    /// Persist the reviewed still and return to the viewfinder
    pub async fn save_current_image(&mut self) -> FlowResult<SavedAsset> {
        if !self.model.state.is_review() {
            return Err(self.invalid_state("save"));
        }
        if !self.model.permissions.storage.is_granted() {
            return Err(FlowError::Permission(PermissionError::StorageDenied));
        }
        let outcome = self.feed(Event::SaveRequested).await;
        if let Some(asset) = outcome.saved {
            return Ok(asset);
        }
        Err(match outcome.persist_error {
            Some(err) => FlowError::Persist(err),
            None => FlowError::Persist(PersistError::SourceUnavailable),
        })
    }

    /// Discard the reviewed still and return to the viewfinder
    pub async fn retake(&mut self) -> FlowResult<()> {
        if !self.model.state.is_review() {
            return Err(self.invalid_state("retake"));
        }
        self.feed(Event::RetakeRequested).await;
        Ok(())
    }

    /// Flip between front and back camera
    pub async fn toggle_facing(&mut self) -> FlowResult<CameraFacing> {
        if !self.model.state.is_viewfinder() {
            return Err(self.invalid_state("facing toggle"));
        }
        self.feed(Event::FacingToggleRequested).await;
        Ok(self.model.facing)
    }

    // ===== Effect interpretation =====

    /// Apply one event and drain the resulting effects to completion
    async fn feed(&mut self, event: Event) -> DrainOutcome {
        let mut outcome = DrainOutcome::default();
        let mut queue: VecDeque<Effect> = self.model.apply(event).into();

        while let Some(effect) = queue.pop_front() {
            if let Some(completion) = self.run_effect(effect, &mut outcome).await {
                queue.extend(self.model.apply(completion));
            }
        }
        outcome
    }

    /// Run one effect, returning its completion event if it has one
    async fn run_effect(&mut self, effect: Effect, outcome: &mut DrainOutcome) -> Option<Event> {
        match effect {
            Effect::ResolvePermissions => Some(self.resolve_permissions().await),
            Effect::PromptPermissions { camera, storage } => {
                Some(self.prompt_permissions(camera, storage).await)
            }
            Effect::CaptureStill { facing, config } => {
                let result = if self.camera.is_available() {
                    self.camera.capture(facing, &config).await
                } else {
                    Err(CaptureError::Disconnected)
                };
                if let Err(err) = &result {
                    outcome.capture_error = Some(err.clone());
                }
                Some(Event::CaptureFinished(result))
            }
            Effect::PersistImage => {
                let Some(image) = self.model.state.held_image() else {
                    warn!("Persist effect without a reviewed still");
                    return None;
                };
                let result = self.store.persist(image).await;
                match &result {
                    Ok(asset) => outcome.saved = Some(asset.clone()),
                    Err(err) => outcome.persist_error = Some(err.clone()),
                }
                Some(Event::SaveFinished(result))
            }
            Effect::PresentDenialNotice => {
                info!("Denial notice raised");
                self.notice = Some(advisory::PERMISSION_MESSAGE);
                None
            }
        }
    }

    // ===== Permission resolution =====

    /// Resolve both statuses, prompting only for still-unresolved ones
    async fn resolve_permissions(&self) -> Event {
        let mut via_prompt = false;

        let camera = match self.provider.camera_status() {
            PermissionStatus::Unknown => {
                via_prompt = true;
                self.request_camera_status().await
            }
            status => status,
        };

        let storage = match self.query_storage_status().await {
            PermissionStatus::Unknown => {
                via_prompt = true;
                self.request_storage_status().await
            }
            status => status,
        };

        Event::PermissionsResolved {
            camera,
            storage,
            via_prompt,
        }
    }

    /// Prompt for the named permissions, reading the others back
    async fn prompt_permissions(&self, camera: bool, storage: bool) -> Event {
        let camera_status = if camera {
            self.request_camera_status().await
        } else {
            self.provider.camera_status()
        };
        let storage_status = if storage {
            self.request_storage_status().await
        } else {
            self.query_storage_status().await
        };

        Event::PermissionsResolved {
            camera: camera_status,
            storage: storage_status,
            via_prompt: camera || storage,
        }
    }

    /// Request camera access, treating a broker failure as a denial
    async fn request_camera_status(&self) -> PermissionStatus {
        match self.provider.request_camera().await {
            Ok(status) => status,
            Err(err) => {
                error!(error = %err, "Camera permission request failed");
                PermissionStatus::Denied
            }
        }
    }

    async fn query_storage_status(&self) -> PermissionStatus {
        match self.provider.query_storage().await {
            Ok(status) => status,
            Err(err) => {
                error!(error = %err, "Storage permission query failed");
                PermissionStatus::Denied
            }
        }
    }

    async fn request_storage_status(&self) -> PermissionStatus {
        match self.provider.request_storage().await {
            Ok(status) => status,
            Err(err) => {
                error!(error = %err, "Storage permission request failed");
                PermissionStatus::Denied
            }
        }
    }

    fn invalid_state(&self, operation: &'static str) -> FlowError {
        FlowError::InvalidState {
            operation,
            state: self.model.state.name(),
        }
    }
}
