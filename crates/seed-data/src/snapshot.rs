//! Directory snapshot types and JSON parsing.
//!
//! A snapshot holds the ordered user records and the ordered role history
//! used to initialise the in-memory directory. Snapshots are loaded from JSON
//! and validated before any record is handed to the directory.

use camino::Utf8Path;
use cap_std::{ambient_authority, fs::Dir};
use serde::Deserialize;

use crate::error::SnapshotError;
use crate::records::{RoleHistorySeed, RoleSeed, StatusSeed, UserSeed};
use crate::timestamps::{parse_join_date, parse_timestamp};

/// Current supported snapshot version.
const SUPPORTED_VERSION: u32 = 1;

/// The snapshot bundled with the crate, mirroring the admin dashboard's
/// demonstration data.
const DEFAULT_SNAPSHOT_JSON: &str = include_str!("../fixtures/directory.json");

/// A validated directory snapshot.
///
/// # Example
///
/// ```
/// use seed_data::DirectorySnapshot;
///
/// let json = r#"{"version": 1, "users": [], "roleHistory": []}"#;
///
/// let snapshot = DirectorySnapshot::from_json(json).expect("valid snapshot");
/// assert!(snapshot.users().is_empty());
/// assert!(snapshot.role_history().is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectorySnapshot {
    version: u32,
    users: Vec<UserSeed>,
    role_history: Vec<RoleHistorySeed>,
}

impl DirectorySnapshot {
    /// Parses a snapshot from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotError`] if:
    /// - The JSON is malformed or a role/status value is unknown
    /// - Required fields are missing
    /// - The version is unsupported
    /// - Any join date or timestamp is invalid
    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        let raw: RawSnapshot =
            serde_json::from_str(json).map_err(|e| SnapshotError::ParseError {
                message: e.to_string(),
            })?;

        Self::from_raw(raw)
    }

    /// Loads a snapshot from a JSON file.
    ///
    /// The file is read through a capability handle on its parent directory.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotError::IoError`] if the file cannot be read, or any
    /// error produced by [`DirectorySnapshot::from_json`].
    pub fn from_file(path: &Utf8Path) -> Result<Self, SnapshotError> {
        let io_error = |message: String| SnapshotError::IoError {
            path: path.to_path_buf(),
            message,
        };
        let parent = match path.parent() {
            Some(parent) if !parent.as_str().is_empty() => parent,
            _ => Utf8Path::new("."),
        };
        let file_name = path
            .file_name()
            .ok_or_else(|| io_error("snapshot path must be a file".to_owned()))?;
        let dir = Dir::open_ambient_dir(parent, ambient_authority())
            .map_err(|e| io_error(e.to_string()))?;
        let contents = dir
            .read_to_string(file_name)
            .map_err(|e| io_error(e.to_string()))?;

        Self::from_json(&contents)
    }

    fn from_raw(raw: RawSnapshot) -> Result<Self, SnapshotError> {
        if raw.version != SUPPORTED_VERSION {
            return Err(SnapshotError::UnsupportedVersion {
                expected: SUPPORTED_VERSION,
                actual: raw.version,
            });
        }

        let users = raw
            .users
            .into_iter()
            .enumerate()
            .map(|(index, user)| user.validate(index))
            .collect::<Result<Vec<_>, _>>()?;

        let role_history = raw
            .role_history
            .into_iter()
            .enumerate()
            .map(|(index, entry)| entry.validate(index))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            version: raw.version,
            users,
            role_history,
        })
    }

    /// Returns the snapshot version.
    #[must_use]
    pub const fn version(&self) -> u32 {
        self.version
    }

    /// Returns the seeded users in snapshot order.
    #[must_use]
    pub fn users(&self) -> &[UserSeed] {
        &self.users
    }

    /// Returns the seeded role history in snapshot order.
    #[must_use]
    pub fn role_history(&self) -> &[RoleHistorySeed] {
        &self.role_history
    }

    /// Splits the snapshot into its users and role history.
    #[must_use]
    pub fn into_parts(self) -> (Vec<UserSeed>, Vec<RoleHistorySeed>) {
        (self.users, self.role_history)
    }
}

/// Returns the snapshot bundled with the crate.
///
/// The bundled data holds twelve users and five role history entries.
///
/// # Errors
///
/// Returns [`SnapshotError`] if the bundled JSON fails validation, which
/// only happens if the fixture file is edited into an invalid state.
///
/// # Example
///
/// ```
/// let snapshot = seed_data::default_snapshot().expect("bundled snapshot is valid");
/// assert_eq!(snapshot.users().len(), 12);
/// assert_eq!(snapshot.role_history().len(), 5);
/// ```
pub fn default_snapshot() -> Result<DirectorySnapshot, SnapshotError> {
    DirectorySnapshot::from_json(DEFAULT_SNAPSHOT_JSON)
}

/// Raw JSON representation for deserialization.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawSnapshot {
    version: u32,
    users: Vec<RawUser>,
    role_history: Vec<RawRoleHistoryEntry>,
}

/// Raw JSON representation of a user record.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawUser {
    id: u32,
    name: String,
    email: String,
    role: RoleSeed,
    department: String,
    join_date: String,
    last_active: String,
    status: StatusSeed,
    #[serde(default)]
    notes: Option<String>,
}

impl RawUser {
    fn validate(self, index: usize) -> Result<UserSeed, SnapshotError> {
        let join_date =
            parse_join_date(&self.join_date).ok_or_else(|| SnapshotError::InvalidJoinDate {
                index,
                value: self.join_date.clone(),
            })?;
        let last_active =
            parse_timestamp(&self.last_active).ok_or_else(|| SnapshotError::InvalidLastActive {
                index,
                value: self.last_active.clone(),
            })?;

        Ok(UserSeed {
            id: self.id,
            name: self.name,
            email: self.email,
            role: self.role,
            department: self.department,
            join_date,
            last_active,
            status: self.status,
            notes: self.notes,
        })
    }
}

/// Raw JSON representation of a role history entry.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawRoleHistoryEntry {
    id: u64,
    user_id: u32,
    old_role: RoleSeed,
    new_role: RoleSeed,
    changed_by: u32,
    changed_at: String,
    #[serde(default)]
    reason: Option<String>,
}

impl RawRoleHistoryEntry {
    fn validate(self, index: usize) -> Result<RoleHistorySeed, SnapshotError> {
        let changed_at =
            parse_timestamp(&self.changed_at).ok_or_else(|| SnapshotError::InvalidChangedAt {
                index,
                value: self.changed_at.clone(),
            })?;

        Ok(RoleHistorySeed {
            id: self.id,
            user_id: self.user_id,
            old_role: self.old_role,
            new_role: self.new_role,
            changed_by: self.changed_by,
            changed_at,
            reason: self.reason,
        })
    }
}
