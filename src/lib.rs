//! # userdash
//!
//! The core of an end-user dashboard: login and signup forms, and a profile
//! page where the signed-in user edits their name, email and avatar.
//!
//! The pages talk to two collaborators, [`auth::AuthService`] and
//! [`auth::UserService`]. In-memory implementations with artificial latency
//! ship for demos and tests; a real backend plugs in through the same traits.
//!
//! ## Feature Flags
//!
//! - `minimal` - Form validation only
//! - `full` (default) - Everything below
//! - `forms` - [`forms`]: validators for the login, signup and profile forms
//! - `auth` - [`auth`]: collaborator traits and in-memory implementations
//! - `conf` - [`conf`]: TOML settings with `USERDASH_*` overrides
//! - `logging` - [`utils`]: `tracing` subscriber setup
//! - `pages` - [`pages`]: the page controllers and [`pages::Dashboard`]
//! - `test` - [`test`]: fixtures, mocks and gated collaborators
//!
//! ## Example
//!
//! ```
//! use userdash::prelude::*;
//!
//! # tokio::runtime::Builder::new_current_thread().enable_time().build().unwrap().block_on(async {
//! let mut settings = Settings::default();
//! settings.mock.latency = LatencySettings::uniform(0);
//! let dashboard = Dashboard::from_settings(&settings);
//!
//! let signup = dashboard.signup_form();
//! signup
//!     .submit(SignupCredentials::new("a@b.com", "abcdef", "abcdef"))
//!     .await;
//! assert_eq!(
//!     signup.success_message().as_deref(),
//!     Some("Account created for a@b.com! You can now log in.")
//! );
//!
//! let profile = dashboard.profile();
//! profile.load().await;
//! assert_eq!(profile.display_name(), "Jane Doe");
//! # });
//! ```

pub use userdash_core as core;

#[cfg(feature = "forms")]
pub use userdash_forms as forms;

#[cfg(feature = "auth")]
pub use userdash_auth as auth;

#[cfg(feature = "conf")]
pub use userdash_conf as conf;

#[cfg(feature = "logging")]
pub use userdash_utils as utils;

#[cfg(feature = "pages")]
pub use userdash_pages as pages;

#[cfg(feature = "test")]
pub use userdash_test as test;

/// Commonly used items
pub mod prelude {
	pub use userdash_core::{
		AvatarFile, Error, ProfileDraft, Result, Signal, UserProfile,
	};

	#[cfg(feature = "forms")]
	pub use userdash_forms::{Credentials, SignupCredentials, Validate, ValidationError};

	#[cfg(feature = "auth")]
	pub use userdash_auth::{
		AuthError, AuthService, InMemoryAuthService, InMemoryUserService, MockLatency,
		UserService, UserServiceError,
	};

	#[cfg(feature = "conf")]
	pub use userdash_conf::{LatencySettings, Settings};

	#[cfg(feature = "logging")]
	pub use userdash_utils::init_logging;

	#[cfg(feature = "pages")]
	pub use userdash_pages::{
		Dashboard, FormEvent, LoginController, ProfileEditController, SignupController,
		StatusMessage, SubmissionState,
	};
}
