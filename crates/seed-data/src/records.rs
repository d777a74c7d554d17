//! Seed record types.
//!
//! These types describe validated snapshot records. They mirror the
//! directory's domain types without depending on them.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Role held by a seeded user.
///
/// Mirrors the directory's `Role` enum without creating a dependency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoleSeed {
    /// Full administrative access.
    Admin,
    /// Team manager.
    Manager,
    /// Regular employee.
    Employee,
    /// Guest account with minimal access.
    Guest,
}

/// Activity status of a seeded user.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusSeed {
    /// The user is active.
    #[default]
    Active,
    /// The user is inactive.
    Inactive,
}

/// A seeded directory user.
///
/// # Example
///
/// ```
/// use chrono::{NaiveDate, TimeZone, Utc};
/// use seed_data::{RoleSeed, StatusSeed, UserSeed};
///
/// let user = UserSeed {
///     id: 7,
///     name: "James Taylor".to_owned(),
///     email: "james.taylor@company.com".to_owned(),
///     role: RoleSeed::Manager,
///     department: "Operations".to_owned(),
///     join_date: NaiveDate::from_ymd_opt(2021, 5, 12).expect("valid date"),
///     last_active: Utc.with_ymd_and_hms(2023, 5, 8, 8, 30, 0).single().expect("valid timestamp"),
///     status: StatusSeed::Active,
///     notes: None,
/// };
///
/// assert_eq!(user.role, RoleSeed::Manager);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSeed {
    /// Numeric user identifier.
    pub id: u32,
    /// Display name.
    pub name: String,
    /// Contact email address.
    pub email: String,
    /// Current role.
    pub role: RoleSeed,
    /// Department, free text.
    pub department: String,
    /// Calendar date the user joined.
    pub join_date: NaiveDate,
    /// Last time the user was seen.
    pub last_active: DateTime<Utc>,
    /// Activity status.
    pub status: StatusSeed,
    /// Optional free-text notes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// A seeded role-change history entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleHistorySeed {
    /// Entry identifier.
    pub id: u64,
    /// Identifier of the user whose role changed.
    pub user_id: u32,
    /// Role before the change.
    pub old_role: RoleSeed,
    /// Role after the change.
    pub new_role: RoleSeed,
    /// Identifier of the user who made the change.
    pub changed_by: u32,
    /// When the change happened.
    pub changed_at: DateTime<Utc>,
    /// Optional reason given for the change.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}
