//! Outbound adapters implementing domain ports.
//!
//! - **memory**: the in-process user directory seeded at start-up
//!
//! Adapters are thin translators between domain types and their backing
//! representation. They contain no business rules beyond what the ports
//! promise.

pub mod memory;
