use rstest::fixture;
use std::sync::Arc;
use userdash_auth::{InMemoryAuthService, InMemoryUserService, MockLatency};
use userdash_core::AvatarFile;

/// In-memory auth store with the seed account and no latency
#[fixture]
pub fn auth_service() -> Arc<InMemoryAuthService> {
	Arc::new(InMemoryAuthService::new().with_latency(MockLatency::none()))
}

/// In-memory user store with the seed profile and no latency
#[fixture]
pub fn user_service() -> Arc<InMemoryUserService> {
	Arc::new(InMemoryUserService::new().with_latency(MockLatency::none()))
}

/// The seed account's `(email, password)`
#[fixture]
pub fn login_credentials() -> (&'static str, &'static str) {
	("user@example.com", "password123")
}

/// A small PNG upload
#[fixture]
pub fn avatar_file() -> AvatarFile {
	AvatarFile::new(
		"avatar.png",
		"image/png",
		vec![0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a],
	)
}
