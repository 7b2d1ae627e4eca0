//! Shared helpers for the userdash integration tests.

use rstest::fixture;
use std::sync::Arc;
use userdash_auth::{InMemoryAuthService, InMemoryUserService, MockLatency};
use userdash_conf::{LatencySettings, Settings};
use userdash_pages::Dashboard;
use userdash_test::init_test_logging;

/// Default settings with every mock call resolving immediately
pub fn instant_settings() -> Settings {
	let mut settings = Settings::default();
	settings.mock.latency = LatencySettings::uniform(0);
	settings
}

/// Dashboard over zero-latency in-memory collaborators
#[fixture]
pub fn dashboard() -> Dashboard {
	init_test_logging();
	Dashboard::from_settings(&instant_settings())
}

/// Dashboard plus handles on its in-memory stores
pub struct Harness {
	pub dashboard: Dashboard,
	pub auth: Arc<InMemoryAuthService>,
	pub users: Arc<InMemoryUserService>,
}

#[fixture]
pub fn harness() -> Harness {
	init_test_logging();
	let auth = Arc::new(InMemoryAuthService::new().with_latency(MockLatency::none()));
	let users = Arc::new(InMemoryUserService::new().with_latency(MockLatency::none()));
	Harness {
		dashboard: Dashboard::new(auth.clone(), users.clone()),
		auth,
		users,
	}
}
