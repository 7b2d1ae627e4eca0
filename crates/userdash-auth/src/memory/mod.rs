//! In-memory collaborators with artificial latency.
//!
//! These stand in for a real backend in demos and tests. Both are cheap to
//! clone; clones share the same store.

mod auth;
mod users;

pub use auth::{InMemoryAuthService, SEED_EMAIL, SEED_PASSWORD};
pub use users::{DEFAULT_BLOB_ORIGIN, InMemoryUserService, seed_activity, seed_profile};
