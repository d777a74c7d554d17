//! Seed snapshots for the user directory.
//!
//! This crate parses the JSON snapshot that populates the in-memory user
//! directory at start-up: an ordered list of users and an ordered list of
//! role-change history entries. It is deliberately independent of the
//! directory's domain types; the directory converts the seed records at the
//! point of use.
//!
//! # Overview
//!
//! The crate supports:
//!
//! - Loading snapshots from JSON strings or files
//! - Validating the snapshot version, join dates, and timestamps (RFC 3339
//!   or naive `YYYY-MM-DDTHH:MM:SS`, read as UTC)
//! - Shipping the default dashboard snapshot via [`default_snapshot`]
//!
//! # Example
//!
//! ```
//! use seed_data::{DirectorySnapshot, RoleSeed};
//!
//! let json = r#"{
//!     "version": 1,
//!     "users": [{
//!         "id": 1,
//!         "name": "Ada Lovelace",
//!         "email": "ada@company.com",
//!         "role": "Admin",
//!         "department": "IT",
//!         "joinDate": "2020-01-15",
//!         "lastActive": "2023-05-08T09:30:00",
//!         "status": "active"
//!     }],
//!     "roleHistory": []
//! }"#;
//!
//! let snapshot = DirectorySnapshot::from_json(json).expect("valid snapshot");
//! assert_eq!(snapshot.users().len(), 1);
//! assert_eq!(snapshot.users().first().map(|user| user.role), Some(RoleSeed::Admin));
//! ```

mod error;
mod records;
mod snapshot;
mod timestamps;

pub use error::SnapshotError;
pub use records::{RoleHistorySeed, RoleSeed, StatusSeed, UserSeed};
pub use snapshot::{DirectorySnapshot, default_snapshot};
