//! Build the in-memory directory from a snapshot at start-up.

use std::path::PathBuf;
use std::sync::Arc;

use camino::Utf8PathBuf;
use mockable::Clock;
use seed_data::{DirectorySnapshot, SnapshotError, default_snapshot};
use thiserror::Error;
use tracing::info;

use crate::domain::{NewUser, RoleHistoryEntry};
use crate::outbound::memory::{DirectoryLoadError, InMemoryUserDirectory};
use crate::seed::config::DirectorySettings;

/// Errors returned while seeding the directory.
#[derive(Debug, Error)]
pub enum StartupSeedingError {
    /// Snapshot path is not valid UTF-8.
    #[error("snapshot path is not valid UTF-8: {}", .path.display())]
    NonUtf8Path {
        /// The offending path.
        path: PathBuf,
    },
    /// Snapshot could not be read or parsed.
    #[error("snapshot error: {0}")]
    Snapshot(#[from] SnapshotError),
    /// Snapshot records violate a directory invariant.
    #[error("directory load error: {0}")]
    Load(#[from] DirectoryLoadError),
}

/// Seed a directory from the configured snapshot, or the bundled one.
///
/// # Errors
///
/// Returns [`StartupSeedingError`] when the snapshot cannot be read, fails
/// validation, or contains duplicate user identifiers.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
///
/// use directory::domain::ports::UsersQuery;
/// use directory::seed::{DirectorySettings, load_directory};
/// use mockable::DefaultClock;
///
/// let directory = load_directory(&DirectorySettings::default(), Arc::new(DefaultClock))
///     .expect("bundled snapshot loads");
/// assert_eq!(directory.compute_stats().total_users(), 12);
/// ```
pub fn load_directory(
    settings: &DirectorySettings,
    clock: Arc<dyn Clock>,
) -> Result<InMemoryUserDirectory, StartupSeedingError> {
    let snapshot = match settings.snapshot_path() {
        Some(path) => {
            let path = Utf8PathBuf::from_path_buf(path.to_path_buf())
                .map_err(|path| StartupSeedingError::NonUtf8Path { path })?;
            info!(path = %path, "loading directory snapshot");
            DirectorySnapshot::from_file(&path)?
        }
        None => {
            info!(source = "bundled", "loading directory snapshot");
            default_snapshot()?
        }
    };

    directory_from_snapshot(snapshot, clock)
}

/// Seed a directory from an already parsed snapshot.
///
/// # Errors
///
/// Returns [`StartupSeedingError::Load`] when two users share an identifier.
pub fn directory_from_snapshot(
    snapshot: DirectorySnapshot,
    clock: Arc<dyn Clock>,
) -> Result<InMemoryUserDirectory, StartupSeedingError> {
    let (users, role_history) = snapshot.into_parts();
    let directory = InMemoryUserDirectory::new(
        users.into_iter().map(NewUser::from),
        role_history.into_iter().map(RoleHistoryEntry::from),
        clock,
    )?;
    Ok(directory)
}
