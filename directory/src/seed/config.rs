//! Directory configuration loaded via OrthoConfig.

use std::path::PathBuf;

use ortho_config::OrthoConfig;
use serde::Deserialize;

use crate::domain::UserId;

/// Acting user recorded on role changes when none is given.
const DEFAULT_ACTING_USER_ID: u32 = 1;

const fn default_acting_user_id() -> u32 {
    DEFAULT_ACTING_USER_ID
}

/// Configuration values controlling how the directory is seeded and used.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "DIRECTORY")]
pub struct DirectorySettings {
    /// Snapshot file to seed from. The bundled snapshot is used when unset.
    #[serde(default)]
    pub snapshot_path: Option<PathBuf>,
    /// User recorded as the author of role changes made without `--by`.
    #[ortho_config(default = 1)]
    #[serde(default = "default_acting_user_id")]
    pub acting_user_id: u32,
}

impl Default for DirectorySettings {
    fn default() -> Self {
        Self {
            snapshot_path: None,
            acting_user_id: DEFAULT_ACTING_USER_ID,
        }
    }
}

impl DirectorySettings {
    /// Return the configured snapshot path, if any.
    pub fn snapshot_path(&self) -> Option<&std::path::Path> {
        self.snapshot_path.as_deref()
    }

    /// Return the configured acting user.
    pub fn acting_user_id(&self) -> UserId {
        UserId::new(self.acting_user_id)
    }
}
