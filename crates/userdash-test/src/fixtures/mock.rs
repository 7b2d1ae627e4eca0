use async_trait::async_trait;
use mockall::mock;
use userdash_auth::{AuthResult, AuthService, UserResult, UserService};
use userdash_core::{ActivityEntry, AuthResponse, AvatarFile, ProfileDraft, UserProfile};

mock! {
	/// mockall double of [`AuthService`]
	///
	/// ```
	/// use userdash_auth::{AuthError, AuthService};
	/// use userdash_test::MockAuthService;
	///
	/// # tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(async {
	/// let mut auth = MockAuthService::new();
	/// auth.expect_login()
	///     .times(1)
	///     .returning(|_, _| Err(AuthError::without_message()));
	///
	/// assert!(auth.login("user@example.com", "password123").await.is_err());
	/// # });
	/// ```
	pub AuthService {}

	#[async_trait]
	impl AuthService for AuthService {
		async fn login(&self, email: &str, password: &str) -> AuthResult<AuthResponse>;
		async fn signup(&self, email: &str, password: &str) -> AuthResult<AuthResponse>;
	}
}

mock! {
	/// mockall double of [`UserService`]
	pub UserService {}

	#[async_trait]
	impl UserService for UserService {
		async fn get_user(&self) -> UserResult<UserProfile>;
		async fn update_user_details(&self, details: ProfileDraft) -> UserResult<UserProfile>;
		async fn upload_user_avatar(&self, file: AvatarFile) -> UserResult<String>;
		async fn recent_activity(&self) -> UserResult<Vec<ActivityEntry>>;
	}
}
