//! Field validators
//!
//! Reusable single-field checks composed by the form validators in
//! [`crate::form`]. Each validator carries an optional custom message used
//! by callers that render the error directly.

use crate::error::{FormResult, ValidationError};
use regex::Regex;
use std::sync::LazyLock;

/// Minimum password length accepted at signup.
pub const MIN_PASSWORD_LENGTH: usize = 6;

// `local-part@domain.tld`:
// - no whitespace or `@` in any part
// - at least one `.` after the `@`
static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("EMAIL_REGEX: invalid regex pattern")
});

/// Validates that a string looks like `local-part@domain.tld`.
///
/// # Examples
///
/// ```
/// use userdash_forms::validators::EmailValidator;
///
/// let validator = EmailValidator::new();
/// assert!(validator.validate("a@b.com").is_ok());
/// assert!(validator.validate("bad-email").is_err());
/// assert!(validator.validate("a b@c.com").is_err());
/// assert!(validator.validate("a@localhost").is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct EmailValidator {
	/// Optional custom error message shown on validation failure
	message: Option<String>,
}

impl EmailValidator {
	pub fn new() -> Self {
		Self { message: None }
	}

	/// Sets a custom message returned by [`EmailValidator::message`].
	pub fn with_message(mut self, message: impl Into<String>) -> Self {
		self.message = Some(message.into());
		self
	}

	/// Returns `true` when the value matches the email pattern.
	pub fn is_valid(&self, value: &str) -> bool {
		EMAIL_REGEX.is_match(value)
	}

	pub fn validate(&self, value: &str) -> FormResult<()> {
		if self.is_valid(value) {
			Ok(())
		} else {
			Err(ValidationError::InvalidEmail)
		}
	}

	/// The message to render for an invalid value.
	pub fn message(&self) -> String {
		self.message
			.clone()
			.unwrap_or_else(|| ValidationError::InvalidEmail.to_string())
	}
}

/// Validates that a string has at least `min_length` characters.
///
/// Length is counted in Unicode scalar values, not bytes.
///
/// # Examples
///
/// ```
/// use userdash_forms::validators::MinLengthValidator;
///
/// let validator = MinLengthValidator::new(6);
/// assert!(validator.validate("abcdef").is_ok());
/// assert!(validator.validate("short").is_err());
/// assert!(validator.validate("pässwd").is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct MinLengthValidator {
	min_length: usize,
	message: Option<String>,
}

impl MinLengthValidator {
	pub fn new(min_length: usize) -> Self {
		Self {
			min_length,
			message: None,
		}
	}

	pub fn with_message(mut self, message: impl Into<String>) -> Self {
		self.message = Some(message.into());
		self
	}

	pub fn min_length(&self) -> usize {
		self.min_length
	}

	pub fn validate(&self, value: &str) -> FormResult<()> {
		if value.chars().count() >= self.min_length {
			Ok(())
		} else {
			Err(ValidationError::PasswordTooShort {
				min_length: self.min_length,
			})
		}
	}

	pub fn message(&self) -> String {
		self.message.clone().unwrap_or_else(|| {
			ValidationError::PasswordTooShort {
				min_length: self.min_length,
			}
			.to_string()
		})
	}
}

impl Default for MinLengthValidator {
	fn default() -> Self {
		Self::new(MIN_PASSWORD_LENGTH)
	}
}

/// Returns `true` if any of the values is the empty string.
///
/// Whitespace-only values count as present.
pub fn any_empty(values: &[&str]) -> bool {
	values.iter().any(|v| v.is_empty())
}
