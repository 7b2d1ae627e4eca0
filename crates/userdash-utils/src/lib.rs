//! Utilities shared by the userdash binaries and tests.

pub mod logging;

pub use logging::{build_filter, init_logging};
