//! Start-up wiring: configuration and snapshot loading.

mod config;
mod mapping;
mod startup;

pub use config::DirectorySettings;
pub use startup::{StartupSeedingError, directory_from_snapshot, load_directory};
