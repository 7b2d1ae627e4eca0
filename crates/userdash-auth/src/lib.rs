//! Auth and user collaborators for userdash.
//!
//! This crate defines the [`AuthService`] and [`UserService`] traits that the
//! page controllers call, their error types, and in-memory implementations
//! that simulate network latency.
//!
//! ## Example
//!
//! ```
//! use std::sync::Arc;
//! use userdash_auth::{AuthService, InMemoryAuthService, MockLatency};
//!
//! let auth: Arc<dyn AuthService> =
//!     Arc::new(InMemoryAuthService::new().with_latency(MockLatency::none()));
//! # let _ = auth;
//! ```

pub mod errors;
pub mod hasher;
pub mod latency;
pub mod memory;
pub mod service;

pub use errors::{AuthError, AuthResult, UserResult, UserServiceError};
pub use hasher::PasswordDigest;
pub use latency::MockLatency;
pub use memory::{InMemoryAuthService, InMemoryUserService, seed_activity, seed_profile};
pub use service::{AuthService, UserService};
