//! rstest fixtures and collaborator mocks

mod mock;
mod services;

pub use mock::{MockAuthService, MockUserService};
pub use services::{auth_service, avatar_file, login_credentials, user_service};
