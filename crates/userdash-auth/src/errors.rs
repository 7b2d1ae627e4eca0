//! Error types surfaced by the auth and user collaborators.
//!
//! Both carry an optional human-readable message. Controllers show that
//! message when present and fall back to a generic one otherwise.

use thiserror::Error;

/// Failure of `login` or `signup`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}", .message.as_deref().unwrap_or("Authentication failed"))]
pub struct AuthError {
	/// Message suitable for display, if the service provided one
	pub message: Option<String>,
}

impl AuthError {
	pub fn with_message(message: impl Into<String>) -> Self {
		Self {
			message: Some(message.into()),
		}
	}

	pub fn without_message() -> Self {
		Self { message: None }
	}

	pub fn invalid_credentials() -> Self {
		Self::with_message("Invalid credentials")
	}

	pub fn account_exists() -> Self {
		Self::with_message("An account with this email already exists.")
	}

	/// The display message, ignoring empty strings.
	pub fn message(&self) -> Option<&str> {
		self.message.as_deref().filter(|m| !m.is_empty())
	}
}

pub type AuthResult<T> = Result<T, AuthError>;

/// Failure of a user-profile operation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UserServiceError {
	/// No profile is available for the current session
	#[error("User not found")]
	NotFound,

	/// The uploaded file was rejected
	#[error("Invalid avatar: {0}")]
	InvalidAvatar(String),

	/// Any other backend failure, with its display message
	#[error("{}", .0.as_deref().unwrap_or("User service error"))]
	Backend(Option<String>),
}

impl UserServiceError {
	pub fn backend(message: impl Into<String>) -> Self {
		UserServiceError::Backend(Some(message.into()))
	}

	/// The display message, if the service provided one.
	pub fn message(&self) -> Option<String> {
		match self {
			UserServiceError::Backend(message) => message.clone().filter(|m| !m.is_empty()),
			other => Some(other.to_string()),
		}
	}
}

pub type UserResult<T> = Result<T, UserServiceError>;
