//! Page controllers for the userdash dashboard.
//!
//! - [`submission`]: the login and signup form state machine
//! - [`profile`]: view/edit of the signed-in user's profile
//! - [`dashboard`]: composition root wiring controllers to collaborators
//!
//! Controllers keep their state in [`userdash_core::Signal`]s and are not
//! `Send`; drive them from a single thread, e.g. a `current_thread` tokio
//! runtime.

pub mod dashboard;
pub mod profile;
pub mod submission;

mod guard;

pub use dashboard::Dashboard;
pub use profile::{ProfileEditController, StatusMessage};
pub use submission::{
	AuthForm, FormEvent, LoginController, SignupController, SubmissionController,
	SubmissionOutcome, SubmissionState,
};
