//! Driving port for the directory's single mutation: changing a user's role.

use crate::domain::{Role, RoleHistoryEntry, UserId};

use super::define_port_error;

define_port_error! {
    /// Errors raised when a role change cannot be applied.
    pub enum RoleChangeError {
        /// No user with the requested identifier exists.
        UserNotFound { user_id: UserId } => "user {user_id} not found",
    }
}

/// A requested role change.
///
/// Nothing here is validated against the directory: the new role may equal
/// the current one and `changed_by` need not name an existing user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleChangeRequest {
    user_id: UserId,
    new_role: Role,
    changed_by: UserId,
    reason: Option<String>,
}

impl RoleChangeRequest {
    /// Request that `user_id` be given `new_role` on behalf of `changed_by`.
    pub fn new(user_id: impl Into<UserId>, new_role: Role, changed_by: impl Into<UserId>) -> Self {
        Self {
            user_id: user_id.into(),
            new_role,
            changed_by: changed_by.into(),
            reason: None,
        }
    }

    /// Attach a free-text reason, kept exactly as given (including empty).
    #[must_use]
    pub fn with_reason(mut self, reason: impl Into<String>) -> Self {
        self.reason = Some(reason.into());
        self
    }

    /// User whose role should change.
    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    /// Role to assign.
    pub fn new_role(&self) -> Role {
        self.new_role
    }

    /// User performing the change.
    pub fn changed_by(&self) -> UserId {
        self.changed_by
    }

    /// Reason supplied with the request.
    pub fn reason(&self) -> Option<&str> {
        self.reason.as_deref()
    }

    pub(crate) fn into_reason(self) -> Option<String> {
        self.reason
    }
}

/// Write-side use case of the user directory.
pub trait RoleChangeCommand {
    /// Apply `request`: set the user's role in place and append one entry to
    /// the role history.
    ///
    /// # Errors
    ///
    /// Returns [`RoleChangeError::UserNotFound`] when no user matches; the
    /// users and the history are left untouched.
    fn update_user_role(
        &mut self,
        request: RoleChangeRequest,
    ) -> Result<RoleHistoryEntry, RoleChangeError>;
}
