//! Criteria for narrowing the user list.

use super::{Role, User, UserStatus};

/// Filter applied when listing users.
///
/// Every criterion that is set must match. The search term matches
/// case-insensitively as a substring of the display name, email, or
/// department; an empty search term matches everything.
///
/// # Examples
/// ```
/// use directory::domain::{Role, UserFilter, UserStatus};
///
/// let filter = UserFilter::default()
///     .with_search("marketing")
///     .with_role(Role::Employee)
///     .with_status(UserStatus::Active);
/// assert_eq!(filter.role(), Some(Role::Employee));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserFilter {
    search: Option<String>,
    role: Option<Role>,
    status: Option<UserStatus>,
}

impl UserFilter {
    /// Restrict to users whose name, email, or department contains `term`.
    #[must_use]
    pub fn with_search(mut self, term: impl Into<String>) -> Self {
        let term = term.into();
        self.search = if term.is_empty() {
            None
        } else {
            Some(term.to_lowercase())
        };
        self
    }

    /// Restrict to users holding `role`.
    #[must_use]
    pub fn with_role(mut self, role: Role) -> Self {
        self.role = Some(role);
        self
    }

    /// Restrict to users with `status`.
    #[must_use]
    pub fn with_status(mut self, status: UserStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Lowercased search term, if any.
    pub fn search(&self) -> Option<&str> {
        self.search.as_deref()
    }

    /// Required role, if any.
    pub fn role(&self) -> Option<Role> {
        self.role
    }

    /// Required status, if any.
    pub fn status(&self) -> Option<UserStatus> {
        self.status
    }

    /// Whether `user` satisfies every criterion.
    pub fn matches(&self, user: &User) -> bool {
        self.matches_search(user)
            && self.role.is_none_or(|role| user.role() == role)
            && self.status.is_none_or(|status| user.status() == status)
    }

    fn matches_search(&self, user: &User) -> bool {
        let Some(term) = self.search.as_deref() else {
            return true;
        };
        [user.display_name(), user.email(), user.department()]
            .into_iter()
            .any(|field| field.to_lowercase().contains(term))
    }
}
