//! Testing support for userdash.
//!
//! - [`fixtures`]: `rstest` fixtures over the in-memory collaborators and
//!   `mockall` mocks of the collaborator traits
//! - [`gate`]: collaborators that block until the test releases them, for
//!   observing in-flight state
//! - [`logging`]: one-time `tracing` setup for tests

pub mod fixtures;
pub mod gate;
pub mod logging;

pub use fixtures::{
	MockAuthService, MockUserService, auth_service, avatar_file, login_credentials,
	user_service,
};
pub use gate::{Gate, GatedAuthService, GatedUserService};
pub use logging::init_test_logging;
