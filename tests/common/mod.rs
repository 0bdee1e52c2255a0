// SPDX-License-Identifier: MPL-2.0

//! Scripted backends shared by the flow integration tests
//!
//! Each backend records how it was used so tests can assert on prompt
//! counts, shot counts, and persisted stills.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use capture_flow::backends::camera::types::{CameraFacing, CaptureConfig, CapturedImage};
use capture_flow::backends::camera::CaptureDevice;
use capture_flow::backends::permissions::{PermissionProvider, PermissionStatus};
use capture_flow::errors::{CaptureError, PermissionError, PersistError};
use capture_flow::flow::CaptureFlow;
use capture_flow::storage::{MediaStore, SavedAsset};

#[derive(Debug, Clone, Copy)]
struct Statuses {
    camera: PermissionStatus,
    storage: PermissionStatus,
}

/// Permission broker with scripted prompt outcomes and prompt counters
pub struct ScriptedPermissions {
    statuses: Mutex<Statuses>,
    on_prompt: Mutex<Statuses>,
    camera_prompt_count: AtomicUsize,
    storage_prompt_count: AtomicUsize,
}

impl ScriptedPermissions {
    /// Broker starting unresolved; prompts resolve to the given outcomes
    pub fn prompting(camera: PermissionStatus, storage: PermissionStatus) -> Self {
        Self {
            statuses: Mutex::new(Statuses {
                camera: PermissionStatus::Unknown,
                storage: PermissionStatus::Unknown,
            }),
            on_prompt: Mutex::new(Statuses { camera, storage }),
            camera_prompt_count: AtomicUsize::new(0),
            storage_prompt_count: AtomicUsize::new(0),
        }
    }

    /// Broker whose prompts grant everything
    pub fn granting_both() -> Self {
        Self::prompting(PermissionStatus::Granted, PermissionStatus::Granted)
    }

    /// Override the current camera status, e.g. to simulate revocation
    pub fn set_camera(&self, status: PermissionStatus) {
        self.statuses.lock().unwrap().camera = status;
    }

    /// Override the current storage status, e.g. to simulate revocation
    pub fn set_storage(&self, status: PermissionStatus) {
        self.statuses.lock().unwrap().storage = status;
    }

    /// Change what the next camera prompt resolves to
    pub fn set_camera_prompt_outcome(&self, status: PermissionStatus) {
        self.on_prompt.lock().unwrap().camera = status;
    }

    /// Change what the next storage prompt resolves to
    pub fn set_storage_prompt_outcome(&self, status: PermissionStatus) {
        self.on_prompt.lock().unwrap().storage = status;
    }

    /// How many camera prompts were shown
    pub fn camera_prompts(&self) -> usize {
        self.camera_prompt_count.load(Ordering::SeqCst)
    }

    /// How many storage prompts were shown
    pub fn storage_prompts(&self) -> usize {
        self.storage_prompt_count.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PermissionProvider for ScriptedPermissions {
    fn camera_status(&self) -> PermissionStatus {
        self.statuses.lock().unwrap().camera
    }

    async fn request_camera(&self) -> Result<PermissionStatus, PermissionError> {
        self.camera_prompt_count.fetch_add(1, Ordering::SeqCst);
        let outcome = self.on_prompt.lock().unwrap().camera;
        self.statuses.lock().unwrap().camera = outcome;
        Ok(outcome)
    }

    async fn query_storage(&self) -> Result<PermissionStatus, PermissionError> {
        Ok(self.statuses.lock().unwrap().storage)
    }

    async fn request_storage(&self) -> Result<PermissionStatus, PermissionError> {
        self.storage_prompt_count.fetch_add(1, Ordering::SeqCst);
        let outcome = self.on_prompt.lock().unwrap().storage;
        self.statuses.lock().unwrap().storage = outcome;
        Ok(outcome)
    }
}

/// Permission broker whose requests always fail
pub struct UnreachablePermissions;

#[async_trait]
impl PermissionProvider for UnreachablePermissions {
    fn camera_status(&self) -> PermissionStatus {
        PermissionStatus::Unknown
    }

    async fn request_camera(&self) -> Result<PermissionStatus, PermissionError> {
        Err(PermissionError::ProviderUnavailable("broker offline".into()))
    }

    async fn query_storage(&self) -> Result<PermissionStatus, PermissionError> {
        Err(PermissionError::ProviderUnavailable("broker offline".into()))
    }

    async fn request_storage(&self) -> Result<PermissionStatus, PermissionError> {
        Err(PermissionError::ProviderUnavailable("broker offline".into()))
    }
}

/// Capture device with scripted per-shot outcomes
///
/// Shots succeed unless a queued failure is pending; each failure is
/// consumed by one capture call.
pub struct ScriptedCamera {
    failures: Mutex<VecDeque<CaptureError>>,
    shot_count: AtomicUsize,
    available: bool,
}

impl ScriptedCamera {
    pub fn working() -> Self {
        Self {
            failures: Mutex::new(VecDeque::new()),
            shot_count: AtomicUsize::new(0),
            available: true,
        }
    }

    /// Device that reports itself as disconnected
    pub fn unavailable() -> Self {
        Self {
            available: false,
            ..Self::working()
        }
    }

    /// Queue a failure for the next capture call
    pub fn fail_next(self, error: CaptureError) -> Self {
        self.failures.lock().unwrap().push_back(error);
        self
    }

    /// How many stills were produced
    pub fn shots(&self) -> usize {
        self.shot_count.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CaptureDevice for ScriptedCamera {
    async fn capture(
        &self,
        facing: CameraFacing,
        config: &CaptureConfig,
    ) -> Result<CapturedImage, CaptureError> {
        if let Some(error) = self.failures.lock().unwrap().pop_front() {
            return Err(error);
        }

        let shot = self.shot_count.fetch_add(1, Ordering::SeqCst);
        let data = config
            .include_inline_encoding
            .then(|| Arc::from(vec![0xD8u8; 64].into_boxed_slice()));

        Ok(CapturedImage::new(
            format!("scripted://{}/{}", facing.display_name(), shot),
            64,
            64,
            data,
        ))
    }

    fn is_available(&self) -> bool {
        self.available
    }
}

/// Media store that records persisted stills in memory
pub struct RecordingStore {
    saved: Mutex<Vec<String>>,
    failures: Mutex<VecDeque<PersistError>>,
}

impl RecordingStore {
    pub fn new() -> Self {
        Self {
            saved: Mutex::new(Vec::new()),
            failures: Mutex::new(VecDeque::new()),
        }
    }

    /// Queue a failure for the next persist call
    pub fn fail_next(self, error: PersistError) -> Self {
        self.failures.lock().unwrap().push_back(error);
        self
    }

    /// Source URIs of the stills persisted so far
    pub fn saved_uris(&self) -> Vec<String> {
        self.saved.lock().unwrap().clone()
    }
}

#[async_trait]
impl MediaStore for RecordingStore {
    async fn persist(&self, image: &CapturedImage) -> Result<SavedAsset, PersistError> {
        if let Some(error) = self.failures.lock().unwrap().pop_front() {
            return Err(error);
        }

        self.saved.lock().unwrap().push(image.uri.clone());
        Ok(SavedAsset {
            uri: format!("memory://{}", image.id),
        })
    }
}

/// Flow wired to scripted backends, with the backend handles kept around
/// for inspection
pub struct ScriptedFlow {
    pub flow: CaptureFlow,
    pub permissions: Arc<ScriptedPermissions>,
    pub camera: Arc<ScriptedCamera>,
    pub store: Arc<RecordingStore>,
}

impl ScriptedFlow {
    pub fn new(
        permissions: ScriptedPermissions,
        camera: ScriptedCamera,
        store: RecordingStore,
    ) -> Self {
        let permissions = Arc::new(permissions);
        let camera = Arc::new(camera);
        let store = Arc::new(store);

        Self {
            flow: CaptureFlow::new(permissions.clone(), camera.clone(), store.clone()),
            permissions,
            camera,
            store,
        }
    }

    /// Flow whose backends all cooperate
    pub fn granted() -> Self {
        Self::new(
            ScriptedPermissions::granting_both(),
            ScriptedCamera::working(),
            RecordingStore::new(),
        )
    }
}
