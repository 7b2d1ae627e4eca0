//! Domain types exchanged between the controllers and their collaborators.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The signed-in user's profile as returned by the user collaborator.
///
/// Serialized with camelCase keys so that JSON payloads match the
/// `{ name, email, avatar?, createdAt, lastLogin }` wire shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
	pub name: String,
	pub email: String,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub avatar: Option<String>,
	pub created_at: String,
	pub last_login: String,
}

impl UserProfile {
	/// Returns a copy with `name` and `email` replaced by the draft's values.
	pub fn with_details(&self, draft: &ProfileDraft) -> Self {
		Self {
			name: draft.name.clone(),
			email: draft.email.clone(),
			..self.clone()
		}
	}

	/// Returns a copy with only the avatar replaced.
	pub fn with_avatar(&self, url: impl Into<String>) -> Self {
		Self {
			avatar: Some(url.into()),
			..self.clone()
		}
	}

	/// Snapshot of the editable fields.
	pub fn draft(&self) -> ProfileDraft {
		ProfileDraft {
			name: self.name.clone(),
			email: self.email.clone(),
		}
	}
}

/// The editable subset of a profile (`{ name, email }`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileDraft {
	pub name: String,
	pub email: String,
}

impl ProfileDraft {
	pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			email: email.into(),
		}
	}
}

/// The authenticated user carried by a successful login or signup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthUser {
	pub email: String,
}

/// Response of `login` / `signup`: `{ user: { email } }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthResponse {
	pub user: AuthUser,
}

impl AuthResponse {
	pub fn for_email(email: impl Into<String>) -> Self {
		Self {
			user: AuthUser {
				email: email.into(),
			},
		}
	}
}

/// Origin used when minting `blob:` URLs for uploaded avatars.
pub const DEFAULT_BLOB_ORIGIN: &str = "http://localhost:3000";

/// A file picked for upload as the user's avatar.
#[derive(Clone, PartialEq, Eq)]
pub struct AvatarFile {
	pub file_name: String,
	pub content_type: String,
	pub bytes: Vec<u8>,
}

impl AvatarFile {
	pub fn new(
		file_name: impl Into<String>,
		content_type: impl Into<String>,
		bytes: impl Into<Vec<u8>>,
	) -> Self {
		Self {
			file_name: file_name.into(),
			content_type: content_type.into(),
			bytes: bytes.into(),
		}
	}

	/// Whether the declared MIME type is an image (`image/*`).
	pub fn is_image(&self) -> bool {
		self.content_type.starts_with("image/")
	}

	pub fn len(&self) -> usize {
		self.bytes.len()
	}

	pub fn is_empty(&self) -> bool {
		self.bytes.is_empty()
	}
}

// Raw bytes are noise in logs and test failures.
impl fmt::Debug for AvatarFile {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("AvatarFile")
			.field("file_name", &self.file_name)
			.field("content_type", &self.content_type)
			.field("len", &self.bytes.len())
			.finish()
	}
}

/// One row of the dashboard's recent-activity list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityEntry {
	pub id: u32,
	pub action: String,
	pub date: String,
}

impl ActivityEntry {
	pub fn new(id: u32, action: impl Into<String>, date: impl Into<String>) -> Self {
		Self {
			id,
			action: action.into(),
			date: date.into(),
		}
	}
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AccountStatus {
	#[default]
	Active,
}

impl fmt::Display for AccountStatus {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			AccountStatus::Active => write!(f, "Active"),
		}
	}
}

/// Quick stats shown above the activity list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardSummary {
	pub recent_activities: usize,
	pub account_status: AccountStatus,
}
