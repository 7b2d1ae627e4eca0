use crate::errors::{UserResult, UserServiceError};
use crate::latency::{MockLatency, simulate};
use crate::service::UserService;
use async_trait::async_trait;
use parking_lot::RwLock;
use std::sync::Arc;
use userdash_core::{ActivityEntry, AvatarFile, ProfileDraft, UserProfile};
use uuid::Uuid;

pub use userdash_core::DEFAULT_BLOB_ORIGIN;

/// The profile every fresh store starts with.
pub fn seed_profile() -> UserProfile {
	UserProfile {
		name: "Jane Doe".to_string(),
		email: "user@example.com".to_string(),
		avatar: Some(
			"https://ui-avatars.com/api/?name=Jane+Doe&background=0D8ABC&color=fff".to_string(),
		),
		created_at: "2023-01-15".to_string(),
		last_login: "2024-06-01 14:23".to_string(),
	}
}

/// The activity rows every fresh store starts with.
pub fn seed_activity() -> Vec<ActivityEntry> {
	vec![
		ActivityEntry::new(1, "Logged in", "2024-06-01 14:23"),
		ActivityEntry::new(2, "Updated profile", "2024-05-28 09:10"),
		ActivityEntry::new(3, "Changed password", "2024-05-20 16:45"),
	]
}

/// In-memory user store holding a single profile.
///
/// Writes replace the stored value with no isolation: two overlapping
/// updates both succeed and whichever finishes last wins.
///
/// # Examples
///
/// ```
/// use userdash_auth::{InMemoryUserService, MockLatency, UserService};
/// use userdash_core::ProfileDraft;
///
/// # tokio_test_block_on(async {
/// let users = InMemoryUserService::new().with_latency(MockLatency::none());
///
/// let updated = users
///     .update_user_details(ProfileDraft::new("John", "john@example.com"))
///     .await
///     .unwrap();
/// assert_eq!(updated.name, "John");
/// assert_eq!(users.get_user().await.unwrap().name, "John");
/// # });
/// # fn tokio_test_block_on<F: std::future::Future>(f: F) -> F::Output {
/// #     tokio::runtime::Builder::new_current_thread().enable_time().build().unwrap().block_on(f)
/// # }
/// ```
#[derive(Clone)]
pub struct InMemoryUserService {
	profile: Arc<RwLock<UserProfile>>,
	activity: Arc<RwLock<Vec<ActivityEntry>>>,
	latency: MockLatency,
	blob_origin: String,
}

impl InMemoryUserService {
	/// Creates a store seeded with the demo profile and default latency.
	pub fn new() -> Self {
		Self::with_profile(seed_profile())
	}

	pub fn with_profile(profile: UserProfile) -> Self {
		Self {
			profile: Arc::new(RwLock::new(profile)),
			activity: Arc::new(RwLock::new(seed_activity())),
			latency: MockLatency::default(),
			blob_origin: DEFAULT_BLOB_ORIGIN.to_string(),
		}
	}

	pub fn with_latency(mut self, latency: MockLatency) -> Self {
		self.latency = latency;
		self
	}

	pub fn with_activity(self, activity: Vec<ActivityEntry>) -> Self {
		*self.activity.write() = activity;
		self
	}

	pub fn with_blob_origin(mut self, origin: impl Into<String>) -> Self {
		self.blob_origin = origin.into();
		self
	}

	/// Current stored profile, without latency.
	pub fn snapshot(&self) -> UserProfile {
		self.profile.read().clone()
	}

	fn object_url(&self) -> String {
		format!("blob:{}/{}", self.blob_origin, Uuid::new_v4())
	}
}

impl Default for InMemoryUserService {
	fn default() -> Self {
		Self::new()
	}
}

#[async_trait]
impl UserService for InMemoryUserService {
	async fn get_user(&self) -> UserResult<UserProfile> {
		simulate(self.latency.get_user).await;
		Ok(self.snapshot())
	}

	async fn update_user_details(&self, details: ProfileDraft) -> UserResult<UserProfile> {
		simulate(self.latency.update_user).await;

		let mut profile = self.profile.write();
		*profile = profile.with_details(&details);
		tracing::debug!(email = %profile.email, "Stored profile details");
		Ok(profile.clone())
	}

	async fn upload_user_avatar(&self, file: AvatarFile) -> UserResult<String> {
		simulate(self.latency.upload_avatar).await;

		if !file.is_image() {
			tracing::warn!(
				file_name = %file.file_name,
				content_type = %file.content_type,
				"Rejected non-image avatar"
			);
			return Err(UserServiceError::InvalidAvatar(format!(
				"{} is not an image",
				file.file_name
			)));
		}

		let url = self.object_url();
		let mut profile = self.profile.write();
		*profile = profile.with_avatar(url.clone());
		tracing::debug!(file_name = %file.file_name, size = file.len(), url = %url, "Stored avatar");
		Ok(url)
	}

	async fn recent_activity(&self) -> UserResult<Vec<ActivityEntry>> {
		simulate(self.latency.get_user).await;
		Ok(self.activity.read().clone())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::*;
	use std::time::Duration;

	#[fixture]
	fn users() -> InMemoryUserService {
		InMemoryUserService::new().with_latency(MockLatency::none())
	}

	#[rstest]
	#[tokio::test]
	async fn test_get_user_returns_seed(users: InMemoryUserService) {
		let profile = users.get_user().await.unwrap();

		assert_eq!(profile, seed_profile());
	}

	#[rstest]
	#[tokio::test]
	async fn test_update_user_details_keeps_avatar(users: InMemoryUserService) {
		let updated = users
			.update_user_details(ProfileDraft::new("John", "john@example.com"))
			.await
			.unwrap();

		assert_eq!(updated.name, "John");
		assert_eq!(updated.email, "john@example.com");
		assert_eq!(updated.avatar, seed_profile().avatar);
		assert_eq!(users.snapshot(), updated);
	}

	#[rstest]
	#[tokio::test]
	async fn test_upload_avatar_returns_blob_url(users: InMemoryUserService) {
		let file = AvatarFile::new("me.png", "image/png", vec![0u8; 8]);

		let url = users.upload_user_avatar(file).await.unwrap();

		assert!(url.starts_with("blob:http://localhost:3000/"));
		assert_eq!(users.snapshot().avatar.as_deref(), Some(url.as_str()));
		assert_eq!(users.snapshot().name, "Jane Doe");
	}

	#[rstest]
	#[tokio::test]
	async fn test_upload_avatar_urls_are_unique(users: InMemoryUserService) {
		let a = users
			.upload_user_avatar(AvatarFile::new("a.png", "image/png", vec![1]))
			.await
			.unwrap();
		let b = users
			.upload_user_avatar(AvatarFile::new("b.png", "image/png", vec![2]))
			.await
			.unwrap();

		assert_ne!(a, b);
	}

	#[rstest]
	#[tokio::test]
	async fn test_upload_rejects_non_image(users: InMemoryUserService) {
		let file = AvatarFile::new("notes.txt", "text/plain", b"hello".to_vec());

		let result = users.upload_user_avatar(file).await;

		assert!(matches!(result, Err(UserServiceError::InvalidAvatar(_))));
		assert_eq!(users.snapshot().avatar, seed_profile().avatar);
	}

	#[rstest]
	#[tokio::test]
	async fn test_recent_activity(users: InMemoryUserService) {
		let activity = users.recent_activity().await.unwrap();

		assert_eq!(activity.len(), 3);
		assert_eq!(activity[0].action, "Logged in");
	}

	#[rstest]
	#[tokio::test]
	async fn test_clones_share_store(users: InMemoryUserService) {
		let other = users.clone();
		other
			.update_user_details(ProfileDraft::new("Shared", "shared@example.com"))
			.await
			.unwrap();

		assert_eq!(users.snapshot().name, "Shared");
	}

	#[tokio::test(start_paused = true)]
	async fn test_default_latency_delays_get_user() {
		let users = InMemoryUserService::new();
		let start = tokio::time::Instant::now();

		users.get_user().await.unwrap();

		assert!(start.elapsed() >= Duration::from_millis(500));
	}
}
