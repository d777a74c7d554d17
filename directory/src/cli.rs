//! Command-line surface of the `directory` binary.
//!
//! Each invocation seeds a fresh directory, runs one query or role change
//! against it through the domain ports, and renders the result as JSON.

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use mockable::Clock;
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info};

use crate::domain::ports::{RoleChangeCommand, RoleChangeError, RoleChangeRequest, UsersQuery};
use crate::domain::{Role, RoleHistoryEntry, User, UserFilter, UserId, UserStatus};
use crate::seed::{DirectorySettings, StartupSeedingError, load_directory};

/// `directory` command arguments.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "directory",
    about = "Query the user directory and change user roles",
    version
)]
pub struct Cli {
    /// Snapshot file to seed from. Overrides `DIRECTORY_SNAPSHOT_PATH`.
    #[arg(long = "snapshot", value_name = "path", global = true)]
    pub snapshot: Option<PathBuf>,
    /// Operation to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Operations exposed on the command line.
#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Print user totals, active users, and the role distribution.
    Stats,
    /// Print one user together with their role history.
    Show {
        /// User identifier.
        id: u32,
    },
    /// Print the role history of one user.
    History {
        /// User identifier.
        id: u32,
    },
    /// Print the users matching every given filter.
    List {
        /// Case-insensitive text matched against name, email, and department.
        #[arg(long, value_name = "text")]
        search: Option<String>,
        /// Only users holding this role.
        #[arg(long, value_name = "role")]
        role: Option<Role>,
        /// Only users with this status (`active` or `inactive`).
        #[arg(long, value_name = "status")]
        status: Option<UserStatus>,
    },
    /// Change a user's role and print the recorded history entry.
    SetRole {
        /// User identifier.
        id: u32,
        /// Role to assign.
        role: Role,
        /// User making the change. Defaults to the configured acting user.
        #[arg(long = "by", value_name = "id")]
        changed_by: Option<u32>,
        /// Free-text reason stored with the history entry.
        #[arg(long, value_name = "text")]
        reason: Option<String>,
    },
}

/// Failures surfaced by the command line.
#[derive(Debug, Error)]
pub enum CliError {
    /// Settings could not be loaded.
    #[error("configuration error: {message}")]
    Config {
        /// Loader message.
        message: String,
    },
    /// The directory could not be seeded.
    #[error(transparent)]
    Seeding(#[from] StartupSeedingError),
    /// The requested user does not exist.
    #[error("user {user_id} not found")]
    UserNotFound {
        /// Identifier that matched no user.
        user_id: UserId,
    },
    /// The role change was rejected.
    #[error(transparent)]
    RoleChange(#[from] RoleChangeError),
    /// Output could not be rendered.
    #[error("failed to render output: {0}")]
    Render(#[from] serde_json::Error),
    /// Output could not be written.
    #[error("failed to write output: {0}")]
    Output(#[from] std::io::Error),
}

impl Cli {
    /// Apply command-line overrides on top of loaded settings.
    #[must_use]
    pub fn apply_overrides(&self, mut settings: DirectorySettings) -> DirectorySettings {
        if let Some(path) = &self.snapshot {
            settings.snapshot_path = Some(path.clone());
        }
        settings
    }

    /// Seed a directory and run the parsed command against it.
    ///
    /// Returns the pretty-printed JSON output.
    ///
    /// # Errors
    ///
    /// Returns [`CliError`] when seeding fails, a queried user does not
    /// exist, or a role change is rejected.
    pub fn run(
        &self,
        settings: DirectorySettings,
        clock: Arc<dyn Clock>,
    ) -> Result<String, CliError> {
        let settings = self.apply_overrides(settings);
        let mut directory = load_directory(&settings, clock)?;
        execute(&self.command, &mut directory, &settings)
    }
}

/// Run `command` against any directory implementing the ports.
///
/// Returns the pretty-printed JSON output, with fields in declaration order.
///
/// # Errors
///
/// Returns [`CliError::UserNotFound`] when `show` names an unknown user and
/// [`CliError::RoleChange`] when `set-role` does.
pub fn execute<D>(
    command: &Command,
    directory: &mut D,
    settings: &DirectorySettings,
) -> Result<String, CliError>
where
    D: UsersQuery + RoleChangeCommand,
{
    debug!(?command, "executing directory command");
    match command {
        Command::Stats => render(&directory.compute_stats()),
        Command::Show { id } => {
            let user_id = UserId::new(*id);
            let user = directory
                .find_user_by_id(user_id)
                .ok_or(CliError::UserNotFound { user_id })?;
            let details = UserDetails {
                user,
                role_history: directory.find_role_history_for_user(user_id),
            };
            render(&details)
        }
        Command::History { id } => {
            render(&directory.find_role_history_for_user(UserId::new(*id)))
        }
        Command::List {
            search,
            role,
            status,
        } => {
            let filter = build_filter(search.as_deref(), *role, *status);
            render(&directory.list_users(&filter))
        }
        Command::SetRole {
            id,
            role,
            changed_by,
            reason,
        } => {
            let changed_by = changed_by.map_or_else(|| settings.acting_user_id(), UserId::new);
            let mut request = RoleChangeRequest::new(*id, *role, changed_by);
            if let Some(reason) = reason {
                request = request.with_reason(reason.clone());
            }
            let entry = directory.update_user_role(request)?;
            info!(entry_id = %entry.id(), "role change recorded");
            render(&entry)
        }
    }
}

fn render<T: Serialize + ?Sized>(value: &T) -> Result<String, CliError> {
    Ok(serde_json::to_string_pretty(value)?)
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct UserDetails<'a> {
    user: &'a User,
    role_history: Vec<&'a RoleHistoryEntry>,
}

fn build_filter(search: Option<&str>, role: Option<Role>, status: Option<UserStatus>) -> UserFilter {
    let mut filter = UserFilter::default();
    if let Some(term) = search {
        filter = filter.with_search(term);
    }
    if let Some(role) = role {
        filter = filter.with_role(role);
    }
    if let Some(status) = status {
        filter = filter.with_status(status);
    }
    filter
}
