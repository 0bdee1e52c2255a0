// SPDX-License-Identifier: GPL-3.0-only

//! Application-wide constants

/// Storage constants
pub mod storage {
    /// Default folder name for saved stills
    pub const DEFAULT_SAVE_FOLDER: &str = "CaptureFlow";

    /// Prefix for saved still filenames
    pub const STILL_PREFIX: &str = "IMG_";

    /// Extension for saved stills
    pub const STILL_EXTENSION: &str = "jpg";
}

/// User-facing advisory messages
pub mod advisory {
    /// Shown on the permission denial screen
    pub const PERMISSION_MESSAGE: &str =
        "Camera and storage access are required. Grant both permissions to continue.";
}

/// Synthetic capture backend constants
pub mod synthetic {
    /// Frame width for the synthetic backend
    pub const WIDTH: u32 = 1280;

    /// Frame height for the synthetic backend
    pub const HEIGHT: u32 = 720;

    /// URI scheme prefix for synthetic stills
    pub const URI_PREFIX: &str = "synthetic://still/";
}

/// Timestamped filename for a saved still (e.g. `IMG_20260825_143022.jpg`)
pub fn still_filename() -> String {
    let timestamp = chrono::Local::now().format("%Y%m%d_%H%M%S");
    format!(
        "{}{}.{}",
        storage::STILL_PREFIX,
        timestamp,
        storage::STILL_EXTENSION
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_still_filename_shape() {
        let name = still_filename();
        assert!(name.starts_with(storage::STILL_PREFIX));
        assert!(name.ends_with(storage::STILL_EXTENSION));
        // prefix + YYYYMMDD + underscore + HHMMSS + dot + extension
        assert_eq!(
            name.len(),
            storage::STILL_PREFIX.len() + 15 + 1 + storage::STILL_EXTENSION.len()
        );
    }
}
