//! Domain ports: the traits consumers use to reach the directory.

mod macros;
pub(crate) use macros::define_port_error;

mod role_change_command;
mod users_query;

pub use role_change_command::{RoleChangeCommand, RoleChangeError, RoleChangeRequest};
pub use users_query::UsersQuery;
