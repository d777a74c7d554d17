//! Conversions from snapshot records into directory domain types.

use seed_data::{RoleHistorySeed, RoleSeed, StatusSeed, UserSeed};

use crate::domain::{HistoryEntryId, NewUser, Role, RoleHistoryEntry, UserId, UserStatus};

impl From<RoleSeed> for Role {
    fn from(value: RoleSeed) -> Self {
        match value {
            RoleSeed::Admin => Self::Admin,
            RoleSeed::Manager => Self::Manager,
            RoleSeed::Employee => Self::Employee,
            RoleSeed::Guest => Self::Guest,
        }
    }
}

impl From<StatusSeed> for UserStatus {
    fn from(value: StatusSeed) -> Self {
        match value {
            StatusSeed::Active => Self::Active,
            StatusSeed::Inactive => Self::Inactive,
        }
    }
}

impl From<UserSeed> for NewUser {
    fn from(value: UserSeed) -> Self {
        Self {
            id: UserId::new(value.id),
            display_name: value.name,
            email: value.email,
            role: value.role.into(),
            department: value.department,
            join_date: value.join_date,
            last_active: value.last_active,
            status: value.status.into(),
            notes: value.notes,
        }
    }
}

impl From<RoleHistorySeed> for RoleHistoryEntry {
    fn from(value: RoleHistorySeed) -> Self {
        Self::new(
            HistoryEntryId::new(value.id),
            UserId::new(value.user_id),
            value.old_role.into(),
            value.new_role.into(),
            UserId::new(value.changed_by),
            value.changed_at,
            value.reason,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use seed_data::default_snapshot;

    #[rstest]
    #[case(RoleSeed::Admin, Role::Admin)]
    #[case(RoleSeed::Manager, Role::Manager)]
    #[case(RoleSeed::Employee, Role::Employee)]
    #[case(RoleSeed::Guest, Role::Guest)]
    fn maps_every_role(#[case] seed: RoleSeed, #[case] expected: Role) {
        assert_eq!(Role::from(seed), expected);
    }

    #[test]
    fn maps_user_fields() {
        let snapshot = default_snapshot().expect("bundled snapshot");
        let seed = snapshot.users().first().cloned().expect("first user");

        let user = NewUser::from(seed.clone());

        assert_eq!(user.id, UserId::new(seed.id));
        assert_eq!(user.display_name, seed.name);
        assert_eq!(user.email, seed.email);
        assert_eq!(user.role, Role::Admin);
        assert_eq!(user.status, UserStatus::Active);
        assert_eq!(user.join_date, seed.join_date);
        assert_eq!(user.last_active, seed.last_active);
        assert_eq!(user.notes, seed.notes);
    }

    #[rstest]
    #[case(StatusSeed::Active, UserStatus::Active)]
    #[case(StatusSeed::Inactive, UserStatus::Inactive)]
    fn maps_every_status(#[case] seed: StatusSeed, #[case] expected: UserStatus) {
        assert_eq!(UserStatus::from(seed), expected);
    }

    #[test]
    fn maps_inactive_user_status() {
        let snapshot = default_snapshot().expect("bundled snapshot");
        let seed = snapshot
            .users()
            .iter()
            .find(|user| user.id == 6)
            .cloned()
            .expect("user 6");

        let user = NewUser::from(seed);

        assert_eq!(user.role, Role::Employee);
        assert_eq!(user.status, UserStatus::Inactive);
    }

    #[test]
    fn maps_history_fields() {
        let snapshot = default_snapshot().expect("bundled snapshot");
        let seed = snapshot
            .role_history()
            .first()
            .cloned()
            .expect("first entry");

        let entry = RoleHistoryEntry::from(seed.clone());

        assert_eq!(entry.id(), HistoryEntryId::new(seed.id));
        assert_eq!(entry.user_id(), UserId::new(seed.user_id));
        assert_eq!(entry.changed_by(), UserId::new(seed.changed_by));
        assert_eq!(entry.changed_at(), seed.changed_at);
        assert_eq!(entry.reason(), seed.reason.as_deref());
    }
}
