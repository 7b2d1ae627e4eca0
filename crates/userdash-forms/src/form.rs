//! Form-level validation for login, signup and profile edits.
//!
//! Every check runs in a fixed order and the first failure wins; errors are
//! never accumulated. All functions are pure, so calling them twice with the
//! same input yields the same result.

use crate::error::{FormKind, FormResult, ValidationError};
use crate::validators::{EmailValidator, MinLengthValidator, any_empty};
use std::fmt;
use userdash_core::ProfileDraft;

/// Validates the login form.
///
/// 1. `MissingField` if email or password is empty
/// 2. `InvalidEmail` if the email does not look like `local@domain.tld`
///
/// # Examples
///
/// ```
/// use userdash_forms::{ValidationError, validate_login};
///
/// assert!(validate_login("a@b.com", "x").is_ok());
/// assert!(matches!(
///     validate_login("", "x"),
///     Err(ValidationError::MissingField { .. })
/// ));
/// assert_eq!(validate_login("nope", "x"), Err(ValidationError::InvalidEmail));
/// ```
pub fn validate_login(email: &str, password: &str) -> FormResult<()> {
	if any_empty(&[email, password]) {
		return Err(ValidationError::MissingField {
			form: FormKind::Login,
		});
	}
	EmailValidator::new().validate(email)
}

/// Validates the signup form.
///
/// 1. `MissingField` if any of the three fields is empty
/// 2. `InvalidEmail`
/// 3. `PasswordTooShort` if the password has fewer than six characters
/// 4. `PasswordMismatch` if the confirmation differs
///
/// # Examples
///
/// ```
/// use userdash_forms::{ValidationError, validate_signup};
///
/// assert!(validate_signup("a@b.com", "abcdef", "abcdef").is_ok());
/// assert_eq!(
///     validate_signup("bad-email", "abcdef", "abcdef"),
///     Err(ValidationError::InvalidEmail)
/// );
/// assert_eq!(
///     validate_signup("a@b.com", "abcdef", "abcdeg"),
///     Err(ValidationError::PasswordMismatch)
/// );
/// ```
pub fn validate_signup(email: &str, password: &str, confirm_password: &str) -> FormResult<()> {
	if any_empty(&[email, password, confirm_password]) {
		return Err(ValidationError::MissingField {
			form: FormKind::Signup,
		});
	}
	EmailValidator::new().validate(email)?;
	MinLengthValidator::default().validate(password)?;
	if password != confirm_password {
		return Err(ValidationError::PasswordMismatch);
	}
	Ok(())
}

/// Validates the profile edit form (`name`, `email`).
pub fn validate_profile(name: &str, email: &str) -> FormResult<()> {
	if any_empty(&[name, email]) {
		return Err(ValidationError::MissingField {
			form: FormKind::Profile,
		});
	}
	EmailValidator::new().validate(email)
}

/// A value set that can be checked before submission.
pub trait Validate {
	/// Which form this value set belongs to.
	fn form_kind(&self) -> FormKind;

	fn validate(&self) -> FormResult<()>;
}

/// Login form values.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Credentials {
	pub email: String,
	pub password: String,
}

impl Credentials {
	pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
		Self {
			email: email.into(),
			password: password.into(),
		}
	}
}

impl Validate for Credentials {
	fn form_kind(&self) -> FormKind {
		FormKind::Login
	}

	fn validate(&self) -> FormResult<()> {
		validate_login(&self.email, &self.password)
	}
}

/// Signup form values.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct SignupCredentials {
	pub email: String,
	pub password: String,
	pub confirm_password: String,
}

impl SignupCredentials {
	pub fn new(
		email: impl Into<String>,
		password: impl Into<String>,
		confirm_password: impl Into<String>,
	) -> Self {
		Self {
			email: email.into(),
			password: password.into(),
			confirm_password: confirm_password.into(),
		}
	}
}

impl Validate for SignupCredentials {
	fn form_kind(&self) -> FormKind {
		FormKind::Signup
	}

	fn validate(&self) -> FormResult<()> {
		validate_signup(&self.email, &self.password, &self.confirm_password)
	}
}

impl Validate for ProfileDraft {
	fn form_kind(&self) -> FormKind {
		FormKind::Profile
	}

	fn validate(&self) -> FormResult<()> {
		validate_profile(&self.name, &self.email)
	}
}

// Passwords must never end up in logs or panic messages.
impl fmt::Debug for Credentials {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Credentials")
			.field("email", &self.email)
			.field("password", &"[redacted]")
			.finish()
	}
}

impl fmt::Debug for SignupCredentials {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("SignupCredentials")
			.field("email", &self.email)
			.field("password", &"[redacted]")
			.field("confirm_password", &"[redacted]")
			.finish()
	}
}
