//! Core building blocks shared by every userdash crate.
//!
//! This crate provides:
//! - Domain types exchanged with the auth and user collaborators ([`types`])
//! - A single-threaded reactive [`Signal`] used by the page controllers
//! - The crate-level [`Error`] type and [`Result`] alias ([`exception`])

pub mod exception;
pub mod reactive;
pub mod types;

pub use exception::{Error, Result};
pub use reactive::{Signal, SubscriptionId};
pub use types::{
	AccountStatus, ActivityEntry, AuthResponse, AuthUser, AvatarFile, DEFAULT_BLOB_ORIGIN,
	DashboardSummary, ProfileDraft, UserProfile,
};
