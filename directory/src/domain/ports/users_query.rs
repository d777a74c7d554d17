//! Driving port for directory read queries.
//!
//! Consumers (the command line today, any view layer later) read users,
//! statistics, and role history through this port without knowing how the
//! directory stores them. Every query is a pure read.

use crate::domain::{DirectoryStats, RoleHistoryEntry, User, UserFilter, UserId};

/// Read-side use cases of the user directory.
pub trait UsersQuery {
    /// Summary counts over every user.
    fn compute_stats(&self) -> DirectoryStats;

    /// Look a user up by identifier.
    ///
    /// Returns the live record, so later queries observe role changes made
    /// in between.
    fn find_user_by_id(&self, id: UserId) -> Option<&User>;

    /// Role history entries for `user_id`, in the order they were recorded.
    ///
    /// Unknown users yield an empty list rather than an error.
    fn find_role_history_for_user(&self, user_id: UserId) -> Vec<&RoleHistoryEntry>;

    /// Users matching `filter`, in directory order.
    fn list_users(&self, filter: &UserFilter) -> Vec<&User>;

    /// Every role history entry, in the order it was recorded.
    fn role_history(&self) -> &[RoleHistoryEntry];
}
