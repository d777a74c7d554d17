//! Directory roles.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Role assigned to a directory user.
///
/// The set is closed: a [`Role`] value is always one of the four variants,
/// so permissive role updates cannot smuggle in unknown names. Parsing from
/// text happens at the edges (seed data, command line).
///
/// Variants are ordered from most to least privileged; that ordering is
/// also the key order of [`crate::domain::DirectoryStats::role_distribution`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Role {
    /// Full administrative access.
    Admin,
    /// Team manager.
    Manager,
    /// Regular employee.
    Employee,
    /// Guest account.
    Guest,
}

impl Role {
    /// Every role, most privileged first.
    pub const ALL: [Self; 4] = [Self::Admin, Self::Manager, Self::Employee, Self::Guest];

    /// Canonical capitalised name.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "Admin",
            Self::Manager => "Manager",
            Self::Employee => "Employee",
            Self::Guest => "Guest",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when text does not name a [`Role`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown role '{value}': expected one of Admin, Manager, Employee, Guest")]
pub struct RoleParseError {
    value: String,
}

impl RoleParseError {
    /// The rejected input.
    pub fn value(&self) -> &str {
        self.value.as_str()
    }
}

impl FromStr for Role {
    type Err = RoleParseError;

    /// Parses a role name, ignoring ASCII case and surrounding whitespace.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        Self::ALL
            .into_iter()
            .find(|role| role.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| RoleParseError {
                value: value.to_owned(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("Admin", Role::Admin)]
    #[case("manager", Role::Manager)]
    #[case(" EMPLOYEE ", Role::Employee)]
    #[case("guest", Role::Guest)]
    fn parses_role_names(#[case] input: &str, #[case] expected: Role) {
        assert_eq!(input.parse::<Role>(), Ok(expected));
    }

    #[rstest]
    #[case("")]
    #[case("Owner")]
    #[case("Admins")]
    fn rejects_unknown_roles(#[case] input: &str) {
        let err = input.parse::<Role>().expect_err("unknown role");
        assert_eq!(err.value(), input);
    }

    #[test]
    fn display_round_trips_through_parse() {
        for role in Role::ALL {
            assert_eq!(role.to_string().parse::<Role>(), Ok(role));
        }
    }

    #[test]
    fn serializes_as_capitalised_name() {
        let json = serde_json::to_string(&Role::Manager).expect("serialize");
        assert_eq!(json, "\"Manager\"");
    }

    #[test]
    fn orders_most_privileged_first() {
        let mut roles = vec![Role::Guest, Role::Admin, Role::Employee, Role::Manager];
        roles.sort();
        assert_eq!(roles, Role::ALL.to_vec());
    }
}
