//! Form validation for the userdash login, signup and profile forms.
//!
//! Validation is synchronous and side-effect free. A rejected form never
//! reaches the auth or user collaborators; the [`ValidationError`] text is
//! rendered inline instead.
//!
//! ```
//! use userdash_forms::{Credentials, Validate, ValidationError};
//!
//! let creds = Credentials::new("a@b.com", "x");
//! assert!(creds.validate().is_ok());
//!
//! let creds = Credentials::new("a@b.com", "");
//! assert_eq!(
//!     creds.validate().unwrap_err().to_string(),
//!     "Email and password are required."
//! );
//! # let _ = ValidationError::InvalidEmail;
//! ```

pub mod error;
pub mod form;
pub mod validators;

pub use error::{FormKind, FormResult, ValidationError};
pub use form::{
	Credentials, SignupCredentials, Validate, validate_login, validate_profile, validate_signup,
};
pub use validators::{EmailValidator, MIN_PASSWORD_LENGTH, MinLengthValidator};
