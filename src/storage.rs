// SPDX-License-Identifier: MPL-2.0

//! Durable storage for captured stills

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tracing::info;

use crate::backends::camera::CapturedImage;
use crate::constants::storage;
use crate::errors::PersistError;

/// A still that has been persisted to durable storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedAsset {
    /// URI of the persisted copy
    pub uri: String,
}

impl SavedAsset {
    /// Filesystem path of the asset, when it lives on the local disk
    pub fn file_path(&self) -> Option<PathBuf> {
        self.uri.strip_prefix("file://").map(PathBuf::from)
    }
}

/// Trait boundary for durable media storage
#[async_trait]
pub trait MediaStore: Send + Sync {
    /// Persist a captured still
    ///
    /// # Returns
    ///
    /// The URI of the durable copy. The capture handle is only borrowed;
    /// the flow keeps holding it for review.
    async fn persist(&self, image: &CapturedImage) -> Result<SavedAsset, PersistError>;
}

/// Get default still directory
pub fn default_save_dir() -> PathBuf {
    dirs::picture_dir()
        .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
        .join(storage::DEFAULT_SAVE_FOLDER)
}

/// Media store writing encoded stills to a directory on disk
pub struct DiskMediaStore {
    save_dir: PathBuf,
}

impl DiskMediaStore {
    pub fn new(save_dir: impl Into<PathBuf>) -> Self {
        Self {
            save_dir: save_dir.into(),
        }
    }

    /// Store rooted at the default pictures directory
    pub fn default_location() -> Self {
        Self::new(default_save_dir())
    }

    pub fn save_dir(&self) -> &Path {
        &self.save_dir
    }
}

#[async_trait]
impl MediaStore for DiskMediaStore {
    async fn persist(&self, image: &CapturedImage) -> Result<SavedAsset, PersistError> {
        let Some(data) = image.data.as_deref() else {
            return Err(PersistError::SourceUnavailable);
        };

        tokio::fs::create_dir_all(&self.save_dir)
            .await
            .map_err(|e| PersistError::StoreUnavailable(e.to_string()))?;

        let filename = crate::constants::still_filename();
        let filepath = self.save_dir.join(&filename);

        info!(path = %filepath.display(), "Saving still");

        tokio::fs::write(&filepath, data).await?;

        info!(path = %filepath.display(), "Still saved successfully");

        Ok(SavedAsset {
            uri: format!("file://{}", filepath.display()),
        })
    }
}
