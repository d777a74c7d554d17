//! In-memory user directory.
//!
//! Holds the authoritative user collection and the append-only role history
//! for the lifetime of the process that composes it. Reads borrow the
//! directory immutably and the role change borrows it mutably, so the
//! borrow checker rules out interleaved operations.

use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

use mockable::Clock;
use tracing::{debug, info, warn};

use crate::domain::ports::{
    RoleChangeCommand, RoleChangeError, RoleChangeRequest, UsersQuery, define_port_error,
};
use crate::domain::{
    DirectoryStats, NewUser, RoleHistoryEntry, User, UserFilter, UserId, next_history_id,
};

define_port_error! {
    /// Errors raised while building a directory from initial data.
    pub enum DirectoryLoadError {
        /// Two users share an identifier.
        DuplicateUserId { user_id: UserId } => "duplicate user id {user_id} in initial data",
    }
}

/// User directory backed by in-process vectors.
#[derive(Clone)]
pub struct InMemoryUserDirectory {
    users: Vec<User>,
    role_history: Vec<RoleHistoryEntry>,
    clock: Arc<dyn Clock>,
}

impl InMemoryUserDirectory {
    /// Build a directory from initial users and history.
    ///
    /// Order is preserved for both collections. History entries are taken
    /// as given; their user references are not checked.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryLoadError::DuplicateUserId`] when two users share
    /// an identifier.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use directory::domain::ports::UsersQuery;
    /// use directory::outbound::memory::InMemoryUserDirectory;
    /// use mockable::DefaultClock;
    ///
    /// let directory = InMemoryUserDirectory::new(Vec::new(), Vec::new(), Arc::new(DefaultClock))
    ///     .expect("empty directory");
    /// assert_eq!(directory.compute_stats().total_users(), 0);
    /// ```
    pub fn new(
        users: impl IntoIterator<Item = NewUser>,
        role_history: impl IntoIterator<Item = RoleHistoryEntry>,
        clock: Arc<dyn Clock>,
    ) -> Result<Self, DirectoryLoadError> {
        let mut seen = HashSet::new();
        let users = users
            .into_iter()
            .map(|draft| {
                if seen.insert(draft.id) {
                    Ok(User::from(draft))
                } else {
                    Err(DirectoryLoadError::duplicate_user_id(draft.id))
                }
            })
            .collect::<Result<Vec<_>, _>>()?;
        let role_history: Vec<_> = role_history.into_iter().collect();

        info!(
            user_count = users.len(),
            history_count = role_history.len(),
            "user directory initialised"
        );

        Ok(Self {
            users,
            role_history,
            clock,
        })
    }

    /// Every user, in directory order.
    pub fn users(&self) -> &[User] {
        &self.users
    }

    fn position_of(&self, id: UserId) -> Option<usize> {
        self.users.iter().position(|user| user.id() == id)
    }
}

impl fmt::Debug for InMemoryUserDirectory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InMemoryUserDirectory")
            .field("users", &self.users.len())
            .field("role_history", &self.role_history.len())
            .finish_non_exhaustive()
    }
}

impl UsersQuery for InMemoryUserDirectory {
    fn compute_stats(&self) -> DirectoryStats {
        DirectoryStats::from_users(&self.users)
    }

    fn find_user_by_id(&self, id: UserId) -> Option<&User> {
        self.position_of(id).and_then(|index| self.users.get(index))
    }

    fn find_role_history_for_user(&self, user_id: UserId) -> Vec<&RoleHistoryEntry> {
        self.role_history
            .iter()
            .filter(|entry| entry.user_id() == user_id)
            .collect()
    }

    fn list_users(&self, filter: &UserFilter) -> Vec<&User> {
        let matched: Vec<_> = self.users.iter().filter(|user| filter.matches(user)).collect();
        debug!(
            matched = matched.len(),
            total = self.users.len(),
            "listed users"
        );
        matched
    }

    fn role_history(&self) -> &[RoleHistoryEntry] {
        &self.role_history
    }
}

impl RoleChangeCommand for InMemoryUserDirectory {
    fn update_user_role(
        &mut self,
        request: RoleChangeRequest,
    ) -> Result<RoleHistoryEntry, RoleChangeError> {
        let user_id = request.user_id();
        let Some(user) = self
            .position_of(user_id)
            .and_then(|index| self.users.get_mut(index))
        else {
            let err = RoleChangeError::user_not_found(user_id);
            warn!(%user_id, error_code = err.code(), "role change rejected");
            return Err(err);
        };

        let new_role = request.new_role();
        let changed_by = request.changed_by();
        let old_role = user.replace_role(new_role);
        let entry = RoleHistoryEntry::new(
            next_history_id(&self.role_history),
            user_id,
            old_role,
            new_role,
            changed_by,
            self.clock.utc(),
            request.into_reason(),
        );
        self.role_history.push(entry.clone());

        info!(
            %user_id,
            %old_role,
            %new_role,
            %changed_by,
            entry_id = %entry.id(),
            "user role updated"
        );
        Ok(entry)
    }
}
