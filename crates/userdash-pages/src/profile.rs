//! Profile page: view, edit and avatar upload.

use crate::guard::{catch_panic, restore_on_exit};
use std::sync::Arc;
use userdash_auth::{UserService, UserServiceError};
use userdash_conf::DEFAULT_AVATAR_URL;
use userdash_core::{AvatarFile, ProfileDraft, Signal, UserProfile};
use userdash_forms::Validate;

const SAVE_FAILED: &str = "Failed to update profile. Please try again.";
const UPLOAD_FAILED: &str = "Failed to upload avatar. Please try again.";
const LOAD_FAILED: &str = "Failed to load profile. Please try again.";

/// Banner shown above the profile card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusMessage {
	Success(String),
	Error(String),
}

impl StatusMessage {
	pub fn text(&self) -> &str {
		match self {
			StatusMessage::Success(text) | StatusMessage::Error(text) => text,
		}
	}

	pub fn is_error(&self) -> bool {
		matches!(self, StatusMessage::Error(_))
	}
}

/// Controller for the profile page.
///
/// Saving name/email and uploading an avatar are tracked by separate
/// in-flight flags: each ignores a second request of its own kind, but one
/// may run while the other is pending. Both patch the held profile when they
/// resolve, so the later resolution wins for the fields it carries.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use userdash_auth::{InMemoryUserService, MockLatency};
/// use userdash_core::ProfileDraft;
/// use userdash_pages::ProfileEditController;
///
/// # tokio::runtime::Builder::new_current_thread().enable_time().build().unwrap().block_on(async {
/// let users = Arc::new(InMemoryUserService::new().with_latency(MockLatency::none()));
/// let profile = ProfileEditController::new(users);
/// profile.load().await;
///
/// profile.begin_edit();
/// profile.set_draft_name("John Doe");
/// profile.save().await;
///
/// assert_eq!(profile.display_name(), "John Doe");
/// assert!(!profile.is_editing());
/// # });
/// ```
pub struct ProfileEditController {
	users: Arc<dyn UserService>,
	profile: Signal<Option<UserProfile>>,
	draft: Signal<ProfileDraft>,
	editing: Signal<bool>,
	saving: Signal<bool>,
	uploading_avatar: Signal<bool>,
	status: Signal<Option<StatusMessage>>,
	default_avatar: String,
}

impl ProfileEditController {
	pub fn new(users: Arc<dyn UserService>) -> Self {
		Self {
			users,
			profile: Signal::new(None),
			draft: Signal::new(ProfileDraft::default()),
			editing: Signal::new(false),
			saving: Signal::new(false),
			uploading_avatar: Signal::new(false),
			status: Signal::new(None),
			default_avatar: DEFAULT_AVATAR_URL.to_string(),
		}
	}

	/// Avatar shown while the profile has none.
	pub fn with_default_avatar(mut self, url: impl Into<String>) -> Self {
		self.default_avatar = url.into();
		self
	}

	/// Fetches the profile and seeds the draft from it.
	pub async fn load(&self) {
		match catch_panic(async { self.users.get_user().await }).await {
			Some(Ok(profile)) => {
				tracing::debug!(email = %profile.email, "Profile loaded");
				self.draft.set(profile.draft());
				self.profile.set(Some(profile));
			}
			Some(Err(error)) => {
				tracing::warn!(%error, "Failed to load profile");
				self.status
					.set(Some(StatusMessage::Error(failure_text(&error, LOAD_FAILED))));
			}
			None => {
				tracing::error!("User service panicked while loading profile");
				self.status
					.set(Some(StatusMessage::Error(LOAD_FAILED.to_string())));
			}
		}
	}

	/// Copies the held profile into the draft and enters edit mode.
	pub fn begin_edit(&self) {
		self.reset_draft();
		self.editing.set(true);
	}

	/// Drops draft changes and leaves edit mode.
	pub fn cancel_edit(&self) {
		self.reset_draft();
		self.editing.set(false);
		self.status.set(None);
	}

	pub fn set_draft_name(&self, name: impl Into<String>) {
		let name = name.into();
		self.draft.update(|draft| draft.name = name);
	}

	pub fn set_draft_email(&self, email: impl Into<String>) {
		let email = email.into();
		self.draft.update(|draft| draft.email = email);
	}

	/// Saves the current draft. See [`Self::save_edit`].
	pub async fn save(&self) {
		self.save_edit(self.draft()).await;
	}

	/// Sends `draft` to the user service.
	///
	/// On success the server's profile replaces the held one and edit mode
	/// ends. On failure edit mode is kept and an error status is shown.
	/// Ignored while another save is in flight.
	pub async fn save_edit(&self, draft: ProfileDraft) {
		if self.is_saving() {
			tracing::debug!("Save ignored: already saving");
			return;
		}

		if let Err(error) = draft.validate() {
			self.status.set(Some(StatusMessage::Error(error.to_string())));
			return;
		}

		self.saving.set(true);
		let _reset = restore_on_exit(&self.saving, |saving| *saving, false);
		self.status.set(None);

		let status = match catch_panic(async { self.users.update_user_details(draft).await }).await {
			Some(Ok(updated)) => {
				tracing::info!(email = %updated.email, "Profile updated");
				self.draft.set(updated.draft());
				self.profile.set(Some(updated));
				self.editing.set(false);
				StatusMessage::Success("Profile updated!".to_string())
			}
			Some(Err(error)) => {
				tracing::warn!(%error, "Profile update failed");
				StatusMessage::Error(failure_text(&error, SAVE_FAILED))
			}
			None => {
				tracing::error!("User service panicked while saving profile");
				StatusMessage::Error(SAVE_FAILED.to_string())
			}
		};
		self.saving.set(false);
		self.status.set(Some(status));
	}

	/// Uploads a new avatar and patches only the avatar of the held profile.
	///
	/// Ignored while another upload is in flight.
	pub async fn upload_avatar(&self, file: AvatarFile) {
		if self.is_uploading_avatar() {
			tracing::debug!("Upload ignored: already uploading");
			return;
		}

		self.uploading_avatar.set(true);
		let _reset = restore_on_exit(&self.uploading_avatar, |uploading| *uploading, false);
		let file_name = file.file_name.clone();

		let status = match catch_panic(async { self.users.upload_user_avatar(file).await }).await {
			Some(Ok(url)) => {
				tracing::info!(file_name = %file_name, url = %url, "Avatar updated");
				self.profile.update(|profile| {
					if let Some(profile) = profile {
						profile.avatar = Some(url);
					}
				});
				StatusMessage::Success("Avatar updated!".to_string())
			}
			Some(Err(error)) => {
				tracing::warn!(file_name = %file_name, %error, "Avatar upload failed");
				StatusMessage::Error(failure_text(&error, UPLOAD_FAILED))
			}
			None => {
				tracing::error!(file_name = %file_name, "User service panicked while uploading avatar");
				StatusMessage::Error(UPLOAD_FAILED.to_string())
			}
		};
		self.uploading_avatar.set(false);
		self.status.set(Some(status));
	}

	pub fn profile(&self) -> Option<UserProfile> {
		self.profile.get()
	}

	pub fn draft(&self) -> ProfileDraft {
		self.draft.get()
	}

	pub fn status(&self) -> Option<StatusMessage> {
		self.status.get()
	}

	pub fn is_editing(&self) -> bool {
		self.editing.get()
	}

	pub fn is_saving(&self) -> bool {
		self.saving.get()
	}

	pub fn is_uploading_avatar(&self) -> bool {
		self.uploading_avatar.get()
	}

	pub fn profile_signal(&self) -> &Signal<Option<UserProfile>> {
		&self.profile
	}

	pub fn status_signal(&self) -> &Signal<Option<StatusMessage>> {
		&self.status
	}

	/// The profile's avatar, or the default when it is missing or empty.
	pub fn avatar_url(&self) -> String {
		self.profile
			.with(|profile| {
				profile
					.as_ref()
					.and_then(|p| p.avatar.clone())
					.filter(|avatar| !avatar.is_empty())
			})
			.unwrap_or_else(|| self.default_avatar.clone())
	}

	pub fn display_name(&self) -> String {
		self.profile_field(|p| &p.name)
	}

	pub fn display_email(&self) -> String {
		self.profile_field(|p| &p.email)
	}

	pub fn save_label(&self) -> &'static str {
		if self.is_saving() { "Saving..." } else { "Save" }
	}

	fn profile_field(&self, field: impl Fn(&UserProfile) -> &String) -> String {
		self.profile.with(|profile| match profile {
			Some(p) if !field(p).is_empty() => field(p).clone(),
			_ => "-".to_string(),
		})
	}

	fn reset_draft(&self) {
		let draft = self
			.profile
			.with(|profile| profile.as_ref().map(UserProfile::draft))
			.unwrap_or_default();
		self.draft.set(draft);
	}
}

fn failure_text(error: &UserServiceError, fallback: &str) -> String {
	error.message().unwrap_or_else(|| fallback.to_string())
}
