//! User directory library modules.

pub mod cli;
pub mod domain;
pub mod outbound;
pub mod seed;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
