//! Composition root.
//!
//! [`Dashboard`] owns the collaborators and hands each page a controller
//! wired to them. Pages never construct collaborators themselves.

use crate::profile::ProfileEditController;
use crate::submission::{LoginController, SignupController};
use std::sync::Arc;
use std::time::Duration;
use userdash_auth::{
	AuthService, InMemoryAuthService, InMemoryUserService, MockLatency, UserResult, UserService,
};
use userdash_conf::{DEFAULT_AVATAR_URL, LatencySettings, Settings};
use userdash_core::{AccountStatus, ActivityEntry, DashboardSummary};

/// Collaborators shared by every page of one dashboard session.
///
/// # Examples
///
/// ```
/// use userdash_conf::{LatencySettings, Settings};
/// use userdash_pages::Dashboard;
///
/// let mut settings = Settings::default();
/// settings.mock.latency = LatencySettings::uniform(0);
///
/// let dashboard = Dashboard::from_settings(&settings);
/// let login = dashboard.login_form();
/// assert_eq!(login.title(), "Sign in to your account");
/// ```
#[derive(Clone)]
pub struct Dashboard {
	auth: Arc<dyn AuthService>,
	users: Arc<dyn UserService>,
	default_avatar: String,
}

impl Dashboard {
	pub fn new(auth: Arc<dyn AuthService>, users: Arc<dyn UserService>) -> Self {
		Self {
			auth,
			users,
			default_avatar: DEFAULT_AVATAR_URL.to_string(),
		}
	}

	/// Builds the in-memory collaborators described by `settings`.
	pub fn from_settings(settings: &Settings) -> Self {
		let latency = mock_latency(&settings.mock.latency);

		let auth = match settings.mock.active_seed() {
			Some(seed) => InMemoryAuthService::empty().with_account(&seed.email, &seed.password),
			None => InMemoryAuthService::empty(),
		}
		.with_latency(latency);

		let users = InMemoryUserService::new()
			.with_latency(latency)
			.with_blob_origin(settings.mock.blob_origin.clone());

		tracing::debug!(
			seeded = settings.mock.seed,
			blob_origin = %settings.mock.blob_origin,
			"Built in-memory collaborators"
		);

		Self::new(Arc::new(auth), Arc::new(users))
			.with_default_avatar(settings.profile.default_avatar.clone())
	}

	pub fn with_default_avatar(mut self, url: impl Into<String>) -> Self {
		self.default_avatar = url.into();
		self
	}

	pub fn login_form(&self) -> LoginController {
		LoginController::new(Arc::clone(&self.auth))
	}

	pub fn signup_form(&self) -> SignupController {
		SignupController::new(Arc::clone(&self.auth))
	}

	pub fn profile(&self) -> ProfileEditController {
		ProfileEditController::new(Arc::clone(&self.users))
			.with_default_avatar(self.default_avatar.clone())
	}

	pub async fn recent_activity(&self) -> UserResult<Vec<ActivityEntry>> {
		self.users.recent_activity().await
	}

	pub async fn summary(&self) -> UserResult<DashboardSummary> {
		let activity = self.recent_activity().await?;
		Ok(DashboardSummary {
			recent_activities: activity.len(),
			account_status: AccountStatus::Active,
		})
	}
}

fn mock_latency(settings: &LatencySettings) -> MockLatency {
	MockLatency {
		login: Duration::from_millis(settings.login_ms),
		signup: Duration::from_millis(settings.signup_ms),
		get_user: Duration::from_millis(settings.get_user_ms),
		update_user: Duration::from_millis(settings.update_user_ms),
		upload_avatar: Duration::from_millis(settings.upload_avatar_ms),
	}
}
