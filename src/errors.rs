// SPDX-License-Identifier: MPL-2.0

//! Error types for the capture flow

use std::fmt;

/// Result type alias using FlowError
pub type FlowResult<T> = Result<T, FlowError>;

/// Main flow error type
#[derive(Debug, Clone)]
pub enum FlowError {
    /// Permission acquisition errors
    Permission(PermissionError),
    /// Still capture errors
    Capture(CaptureError),
    /// Media persistence errors
    Persist(PersistError),
    /// Operation invoked outside its valid state
    InvalidState {
        /// Name of the attempted operation
        operation: &'static str,
        /// Flow state at the time of the call
        state: &'static str,
    },
    /// Configuration errors
    Config(String),
}

/// Permission-related errors
#[derive(Debug, Clone)]
pub enum PermissionError {
    /// Camera access not granted
    CameraDenied,
    /// Storage (media library) access not granted
    StorageDenied,
    /// Permission broker failure
    ProviderUnavailable(String),
}

/// Still capture errors
#[derive(Debug, Clone)]
pub enum CaptureError {
    /// Capture device is busy or in use
    Busy,
    /// Device disconnected during operation
    Disconnected,
    /// Capture failed
    CaptureFailed(String),
    /// Encoding failed
    EncodingFailed(String),
}

/// Media persistence errors
#[derive(Debug, Clone)]
pub enum PersistError {
    /// Write to durable storage failed
    SaveFailed(String),
    /// Image handle carries no readable source
    SourceUnavailable,
    /// Media store unreachable or not writable
    StoreUnavailable(String),
}

impl fmt::Display for FlowError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FlowError::Permission(e) => write!(f, "Permission error: {}", e),
            FlowError::Capture(e) => write!(f, "Capture error: {}", e),
            FlowError::Persist(e) => write!(f, "Persist error: {}", e),
            FlowError::InvalidState { operation, state } => {
                write!(f, "{} is not valid in {}", operation, state)
            }
            FlowError::Config(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl fmt::Display for PermissionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PermissionError::CameraDenied => write!(f, "Camera access not granted"),
            PermissionError::StorageDenied => write!(f, "Storage access not granted"),
            PermissionError::ProviderUnavailable(msg) => {
                write!(f, "Permission provider unavailable: {}", msg)
            }
        }
    }
}

impl fmt::Display for CaptureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CaptureError::Busy => write!(f, "Capture device is busy"),
            CaptureError::Disconnected => write!(f, "Capture device disconnected"),
            CaptureError::CaptureFailed(msg) => write!(f, "Capture failed: {}", msg),
            CaptureError::EncodingFailed(msg) => write!(f, "Encoding failed: {}", msg),
        }
    }
}

impl fmt::Display for PersistError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PersistError::SaveFailed(msg) => write!(f, "Save failed: {}", msg),
            PersistError::SourceUnavailable => write!(f, "Image has no readable source"),
            PersistError::StoreUnavailable(msg) => write!(f, "Media store unavailable: {}", msg),
        }
    }
}

impl std::error::Error for FlowError {}
impl std::error::Error for PermissionError {}
impl std::error::Error for CaptureError {}
impl std::error::Error for PersistError {}

// Conversions from sub-errors to FlowError
impl From<PermissionError> for FlowError {
    fn from(err: PermissionError) -> Self {
        FlowError::Permission(err)
    }
}

impl From<CaptureError> for FlowError {
    fn from(err: CaptureError) -> Self {
        FlowError::Capture(err)
    }
}

impl From<PersistError> for FlowError {
    fn from(err: PersistError) -> Self {
        FlowError::Persist(err)
    }
}

// Conversions for I/O errors
impl From<std::io::Error> for PersistError {
    fn from(err: std::io::Error) -> Self {
        PersistError::SaveFailed(err.to_string())
    }
}

impl From<std::io::Error> for FlowError {
    fn from(err: std::io::Error) -> Self {
        FlowError::Persist(PersistError::from(err))
    }
}
