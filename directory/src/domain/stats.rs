//! Aggregate counts over the directory's users.

use std::collections::BTreeMap;

use serde::Serialize;

use super::{Role, User};

/// Summary counts over a user collection.
///
/// ## Invariants
/// - The values of `role_distribution` sum to `total_users`.
/// - Only roles held by at least one user appear as keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DirectoryStats {
    total_users: usize,
    active_users: usize,
    role_distribution: BTreeMap<Role, usize>,
}

impl DirectoryStats {
    /// Count the given users in a single pass.
    ///
    /// # Examples
    /// ```
    /// use directory::domain::DirectoryStats;
    ///
    /// let stats = DirectoryStats::from_users([]);
    /// assert_eq!(stats.total_users(), 0);
    /// assert!(stats.role_distribution().is_empty());
    /// ```
    pub fn from_users<'a>(users: impl IntoIterator<Item = &'a User>) -> Self {
        users.into_iter().fold(Self::empty(), |mut stats, user| {
            stats.total_users += 1;
            if user.is_active() {
                stats.active_users += 1;
            }
            *stats.role_distribution.entry(user.role()).or_insert(0) += 1;
            stats
        })
    }

    fn empty() -> Self {
        Self {
            total_users: 0,
            active_users: 0,
            role_distribution: BTreeMap::new(),
        }
    }

    /// Number of users.
    pub fn total_users(&self) -> usize {
        self.total_users
    }

    /// Number of users whose status is active.
    pub fn active_users(&self) -> usize {
        self.active_users
    }

    /// Users per role, for roles that are held by someone.
    pub fn role_distribution(&self) -> &BTreeMap<Role, usize> {
        &self.role_distribution
    }

    /// Users holding `role`; zero for roles absent from the distribution.
    pub fn count_for(&self, role: Role) -> usize {
        self.role_distribution.get(&role).copied().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::UserStatus;
    use crate::test_support::sample_user;
    use serde_json::json;

    fn users(roles: &[(Role, UserStatus)]) -> Vec<User> {
        roles
            .iter()
            .zip(1_u32..)
            .map(|(&(role, status), id)| User::from(sample_user(id, role, status)))
            .collect()
    }

    #[test]
    fn counts_totals_and_active_users() {
        let users = users(&[
            (Role::Admin, UserStatus::Active),
            (Role::Employee, UserStatus::Inactive),
            (Role::Employee, UserStatus::Active),
        ]);

        let stats = DirectoryStats::from_users(&users);

        assert_eq!(stats.total_users(), 3);
        assert_eq!(stats.active_users(), 2);
    }

    #[test]
    fn omits_roles_nobody_holds() {
        let users = users(&[
            (Role::Manager, UserStatus::Active),
            (Role::Manager, UserStatus::Active),
        ]);

        let stats = DirectoryStats::from_users(&users);

        assert_eq!(stats.role_distribution().len(), 1);
        assert_eq!(stats.count_for(Role::Manager), 2);
        assert_eq!(stats.count_for(Role::Guest), 0);
        assert!(!stats.role_distribution().contains_key(&Role::Guest));
    }

    #[test]
    fn distribution_sums_to_total() {
        let users = users(&[
            (Role::Admin, UserStatus::Active),
            (Role::Manager, UserStatus::Inactive),
            (Role::Employee, UserStatus::Active),
            (Role::Guest, UserStatus::Inactive),
            (Role::Employee, UserStatus::Active),
        ]);

        let stats = DirectoryStats::from_users(&users);

        assert_eq!(
            stats.role_distribution().values().sum::<usize>(),
            stats.total_users()
        );
    }

    #[test]
    fn serializes_distribution_keyed_by_role_name() {
        let users = users(&[
            (Role::Guest, UserStatus::Active),
            (Role::Admin, UserStatus::Inactive),
        ]);

        let value = serde_json::to_value(DirectoryStats::from_users(&users)).expect("serialize");

        assert_eq!(
            value,
            json!({
                "totalUsers": 2,
                "activeUsers": 1,
                "roleDistribution": { "Admin": 1, "Guest": 1 }
            })
        );
    }
}
