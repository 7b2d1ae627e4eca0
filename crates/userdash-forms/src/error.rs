use serde::{Deserialize, Serialize};
use std::fmt;

/// The forms rendered by the dashboard.
///
/// Used to pick the wording of form-specific messages, since "required"
/// errors name different fields on each form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FormKind {
	Login,
	Signup,
	Profile,
}

impl FormKind {
	/// Message shown when a required field is left empty.
	pub fn missing_fields_message(&self) -> &'static str {
		match self {
			FormKind::Login => "Email and password are required.",
			FormKind::Signup => "All fields are required.",
			FormKind::Profile => "Name and email are required.",
		}
	}
}

impl fmt::Display for FormKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			FormKind::Login => write!(f, "login"),
			FormKind::Signup => write!(f, "signup"),
			FormKind::Profile => write!(f, "profile"),
		}
	}
}

/// Reasons a form is rejected before anything is sent to a collaborator.
///
/// The `Display` text is the inline message rendered above the form.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
	#[error("{}", .form.missing_fields_message())]
	MissingField { form: FormKind },
	#[error("Invalid email address.")]
	InvalidEmail,
	#[error("Password must be at least {min_length} characters.")]
	PasswordTooShort { min_length: usize },
	#[error("Passwords do not match.")]
	PasswordMismatch,
}

pub type FormResult<T> = Result<T, ValidationError>;
