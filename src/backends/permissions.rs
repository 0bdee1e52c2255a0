// SPDX-License-Identifier: MPL-2.0
// Permission broker abstraction for camera and storage access

//! Permission provider abstraction
//!
//! The flow never talks to a platform permission broker directly. It reads
//! and requests access through [`PermissionProvider`], which keeps the core
//! testable and portable.
//!
//! Camera status is synchronously readable because the platform caches it;
//! storage has to be queried. Both can be requested, which may raise a
//! prompt on a real platform.

use std::fmt;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::errors::PermissionError;

/// Access state for a single permission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PermissionStatus {
    /// Never resolved, a prompt would be shown on request
    #[default]
    Unknown,
    /// Access granted
    Granted,
    /// Access denied
    Denied,
}

impl PermissionStatus {
    /// All permission states
    pub const ALL: [PermissionStatus; 3] = [
        PermissionStatus::Unknown,
        PermissionStatus::Granted,
        PermissionStatus::Denied,
    ];

    /// Human-readable name
    pub fn display_name(&self) -> &'static str {
        match self {
            PermissionStatus::Unknown => "Unknown",
            PermissionStatus::Granted => "Granted",
            PermissionStatus::Denied => "Denied",
        }
    }

    /// Whether access is granted
    pub fn is_granted(&self) -> bool {
        matches!(self, PermissionStatus::Granted)
    }
}

impl fmt::Display for PermissionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Resolved camera and storage access, as last observed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Permissions {
    /// Camera access state
    pub camera: PermissionStatus,
    /// Storage (media library) access state
    pub storage: PermissionStatus,
}

impl Permissions {
    pub fn new(camera: PermissionStatus, storage: PermissionStatus) -> Self {
        Self { camera, storage }
    }

    /// Whether both camera and storage access are granted
    pub fn both_granted(&self) -> bool {
        self.camera.is_granted() && self.storage.is_granted()
    }
}

/// Trait boundary for platform permission brokers
#[async_trait]
pub trait PermissionProvider: Send + Sync {
    // ===== Camera =====

    /// Current camera access state, without prompting
    fn camera_status(&self) -> PermissionStatus;

    /// Request camera access, prompting if the platform needs to
    async fn request_camera(&self) -> Result<PermissionStatus, PermissionError>;

    // ===== Storage =====

    /// Query storage access state, without prompting
    async fn query_storage(&self) -> Result<PermissionStatus, PermissionError>;

    /// Request storage access, prompting if the platform needs to
    async fn request_storage(&self) -> Result<PermissionStatus, PermissionError>;
}

#[derive(Debug, Clone, Copy)]
struct Statuses {
    camera: PermissionStatus,
    storage: PermissionStatus,
}

/// In-process permission provider with fixed prompt behavior
///
/// Used by the shipped command line front end, where no platform broker
/// exists. Requests resolve according to `grant_on_request`, and statuses
/// can be flipped at runtime to simulate mid-session revocation.
pub struct StaticPermissions {
    statuses: Mutex<Statuses>,
    grant_on_request: bool,
}

impl StaticPermissions {
    /// Provider with both permissions already granted
    pub fn granted() -> Self {
        Self::with_statuses(PermissionStatus::Granted, PermissionStatus::Granted, true)
    }

    /// Provider that denies everything, even on request
    pub fn denied() -> Self {
        Self::with_statuses(PermissionStatus::Denied, PermissionStatus::Denied, false)
    }

    /// Provider that starts unresolved and grants on request
    pub fn prompt_to_grant() -> Self {
        Self::with_statuses(PermissionStatus::Unknown, PermissionStatus::Unknown, true)
    }

    /// Provider with explicit initial statuses
    pub fn with_statuses(
        camera: PermissionStatus,
        storage: PermissionStatus,
        grant_on_request: bool,
    ) -> Self {
        Self {
            statuses: Mutex::new(Statuses { camera, storage }),
            grant_on_request,
        }
    }

    /// Override the camera status, e.g. to simulate revocation
    pub fn set_camera(&self, status: PermissionStatus) {
        self.statuses.lock().unwrap().camera = status;
    }

    /// Override the storage status, e.g. to simulate revocation
    pub fn set_storage(&self, status: PermissionStatus) {
        self.statuses.lock().unwrap().storage = status;
    }

    /// How a prompt resolves the given status
    fn resolved(&self, current: PermissionStatus) -> PermissionStatus {
        if self.grant_on_request {
            PermissionStatus::Granted
        } else if current == PermissionStatus::Unknown {
            PermissionStatus::Denied
        } else {
            current
        }
    }
}

#[async_trait]
impl PermissionProvider for StaticPermissions {
    fn camera_status(&self) -> PermissionStatus {
        self.statuses.lock().unwrap().camera
    }

    async fn request_camera(&self) -> Result<PermissionStatus, PermissionError> {
        let mut statuses = self.statuses.lock().unwrap();
        statuses.camera = self.resolved(statuses.camera);
        Ok(statuses.camera)
    }

    async fn query_storage(&self) -> Result<PermissionStatus, PermissionError> {
        Ok(self.statuses.lock().unwrap().storage)
    }

    async fn request_storage(&self) -> Result<PermissionStatus, PermissionError> {
        let mut statuses = self.statuses.lock().unwrap();
        statuses.storage = self.resolved(statuses.storage);
        Ok(statuses.storage)
    }
}
