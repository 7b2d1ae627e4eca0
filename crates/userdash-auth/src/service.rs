//! Collaborator interfaces called by the page controllers.
//!
//! The controllers depend only on these traits. The composition root decides
//! which implementation to inject: the in-memory mocks in [`crate::memory`],
//! an HTTP client, or a test double.

use crate::errors::{AuthResult, UserResult};
use async_trait::async_trait;
use userdash_core::{ActivityEntry, AuthResponse, AvatarFile, ProfileDraft, UserProfile};

/// Authentication backend.
#[async_trait]
pub trait AuthService: Send + Sync {
	/// Signs in an existing account.
	async fn login(&self, email: &str, password: &str) -> AuthResult<AuthResponse>;

	/// Registers a new account.
	async fn signup(&self, email: &str, password: &str) -> AuthResult<AuthResponse>;
}

/// Profile store for the signed-in user.
#[async_trait]
pub trait UserService: Send + Sync {
	async fn get_user(&self) -> UserResult<UserProfile>;

	/// Replaces name and email, returning the stored profile.
	async fn update_user_details(&self, details: ProfileDraft) -> UserResult<UserProfile>;

	/// Stores a new avatar, returning its URL.
	async fn upload_user_avatar(&self, file: AvatarFile) -> UserResult<String>;

	/// Most recent account events, newest first.
	async fn recent_activity(&self) -> UserResult<Vec<ActivityEntry>> {
		Ok(Vec::new())
	}
}
