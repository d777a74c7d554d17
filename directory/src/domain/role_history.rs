//! Append-only audit records of role transitions.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Role, UserId};

/// Identifier of a role history entry.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct HistoryEntryId(u64);

impl HistoryEntryId {
    /// Wrap a raw identifier.
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Access the raw identifier.
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for HistoryEntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Allocate the identifier for the next entry appended to `log`.
///
/// Identifiers are the log length plus one. This is only unique while
/// entries are never removed or reordered, which the directory guarantees;
/// switching to a durable counter means changing this function alone.
///
/// # Examples
/// ```
/// use directory::domain::{HistoryEntryId, next_history_id};
///
/// assert_eq!(next_history_id(&[]), HistoryEntryId::new(1));
/// ```
pub fn next_history_id(log: &[RoleHistoryEntry]) -> HistoryEntryId {
    let next = u64::try_from(log.len()).map_or(u64::MAX, |len| len.saturating_add(1));
    HistoryEntryId::new(next)
}

/// Immutable record of one role transition.
///
/// ## Invariants
/// - Never mutated or removed once appended to a directory's log.
/// - `user_id` and `changed_by` are weak references: neither is checked
///   against the directory's users.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleHistoryEntry {
    id: HistoryEntryId,
    user_id: UserId,
    old_role: Role,
    new_role: Role,
    changed_by: UserId,
    changed_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    reason: Option<String>,
}

impl RoleHistoryEntry {
    /// Build an entry from its parts.
    pub fn new(
        id: HistoryEntryId,
        user_id: UserId,
        old_role: Role,
        new_role: Role,
        changed_by: UserId,
        changed_at: DateTime<Utc>,
        reason: Option<String>,
    ) -> Self {
        Self {
            id,
            user_id,
            old_role,
            new_role,
            changed_by,
            changed_at,
            reason,
        }
    }

    /// Entry identifier.
    pub fn id(&self) -> HistoryEntryId {
        self.id
    }

    /// User whose role changed.
    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    /// Role before the change.
    pub fn old_role(&self) -> Role {
        self.old_role
    }

    /// Role after the change.
    pub fn new_role(&self) -> Role {
        self.new_role
    }

    /// User who made the change.
    pub fn changed_by(&self) -> UserId {
        self.changed_by
    }

    /// When the change happened.
    pub fn changed_at(&self) -> DateTime<Utc> {
        self.changed_at
    }

    /// Reason given for the change, exactly as supplied.
    pub fn reason(&self) -> Option<&str> {
        self.reason.as_deref()
    }
}
