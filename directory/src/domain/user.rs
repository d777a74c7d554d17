//! Directory user model.

use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::Role;

/// Stable numeric user identifier.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct UserId(u32);

impl UserId {
    /// Wrap a raw identifier.
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Access the raw identifier.
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl From<u32> for UserId {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Activity flag on a user record, independent of role.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserStatus {
    /// The user is active.
    #[default]
    Active,
    /// The user is inactive.
    Inactive,
}

impl UserStatus {
    /// Lowercase name used in serialised output.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
        }
    }
}

impl fmt::Display for UserStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when text does not name a [`UserStatus`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown status '{0}': expected active or inactive")]
pub struct UserStatusParseError(String);

impl std::str::FromStr for UserStatus {
    type Err = UserStatusParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "active" => Ok(Self::Active),
            "inactive" => Ok(Self::Inactive),
            _ => Err(UserStatusParseError(value.to_owned())),
        }
    }
}

/// Field values for a user about to enter the directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    /// Unique identifier.
    pub id: UserId,
    /// Display name.
    pub display_name: String,
    /// Contact email address.
    pub email: String,
    /// Initial role.
    pub role: Role,
    /// Department, free text.
    pub department: String,
    /// Date the user joined.
    pub join_date: NaiveDate,
    /// Last time the user was seen.
    pub last_active: DateTime<Utc>,
    /// Activity status.
    pub status: UserStatus,
    /// Optional free-text notes.
    pub notes: Option<String>,
}

/// Directory member.
///
/// ## Invariants
/// - `id` is unique within a directory (enforced by the directory).
/// - `role` changes only through a role change command, which also records
///   the transition in the role history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    id: UserId,
    display_name: String,
    email: String,
    role: Role,
    department: String,
    join_date: NaiveDate,
    last_active: DateTime<Utc>,
    status: UserStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    notes: Option<String>,
}

impl User {
    /// Stable user identifier.
    pub fn id(&self) -> UserId {
        self.id
    }

    /// Display name.
    pub fn display_name(&self) -> &str {
        self.display_name.as_str()
    }

    /// Contact email address.
    pub fn email(&self) -> &str {
        self.email.as_str()
    }

    /// Current role.
    pub fn role(&self) -> Role {
        self.role
    }

    /// Department, free text.
    pub fn department(&self) -> &str {
        self.department.as_str()
    }

    /// Date the user joined.
    pub fn join_date(&self) -> NaiveDate {
        self.join_date
    }

    /// Last time the user was seen.
    pub fn last_active(&self) -> DateTime<Utc> {
        self.last_active
    }

    /// Activity status.
    pub fn status(&self) -> UserStatus {
        self.status
    }

    /// Whether the status is [`UserStatus::Active`].
    pub fn is_active(&self) -> bool {
        self.status == UserStatus::Active
    }

    /// Optional free-text notes.
    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref()
    }

    /// Replace the role, returning the previous one.
    pub(crate) fn replace_role(&mut self, role: Role) -> Role {
        std::mem::replace(&mut self.role, role)
    }
}

impl From<NewUser> for User {
    fn from(value: NewUser) -> Self {
        let NewUser {
            id,
            display_name,
            email,
            role,
            department,
            join_date,
            last_active,
            status,
            notes,
        } = value;
        Self {
            id,
            display_name,
            email,
            role,
            department,
            join_date,
            last_active,
            status,
            notes,
        }
    }
}

#[cfg(test)]
mod tests;
