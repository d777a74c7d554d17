//! Domain primitives, aggregates, and ports.
//!
//! Purpose: Define strongly typed directory entities and the ports through
//! which consumers query users and change roles. Keep types immutable
//! outside the ports and document invariants and serialisation contracts
//! (serde) in each type's Rustdoc.
//!
//! Public surface:
//! - User, NewUser, UserId, UserStatus: directory members.
//! - Role: the closed set of roles.
//! - RoleHistoryEntry, HistoryEntryId, next_history_id: the audit log.
//! - DirectoryStats: aggregate counts.
//! - UserFilter: list filtering criteria.
//! - ports: `UsersQuery` and `RoleChangeCommand`.

pub mod ports;
mod role;
mod role_history;
mod stats;
mod user;
mod user_filter;

pub use self::role::{Role, RoleParseError};
pub use self::role_history::{HistoryEntryId, RoleHistoryEntry, next_history_id};
pub use self::stats::DirectoryStats;
pub use self::user::{NewUser, User, UserId, UserStatus, UserStatusParseError};
pub use self::user_filter::UserFilter;
