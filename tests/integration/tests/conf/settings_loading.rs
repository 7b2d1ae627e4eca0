//! Settings files drive the dashboard's collaborators.

use rstest::*;
use serial_test::serial;
use std::io::Write;
use userdash::prelude::*;

#[rstest]
#[serial]
#[tokio::test]
async fn test_settings_file_configures_dashboard() {
	let mut file = tempfile::NamedTempFile::new().unwrap();
	write!(
		file,
		r#"
[mock]
blob_origin = "https://dash.example.com"

[mock.latency]
login_ms = 0
signup_ms = 0
get_user_ms = 0
update_user_ms = 0
upload_avatar_ms = 0

[mock.seed_account]
email = "demo@example.com"
password = "demo-pass"

[profile]
default_avatar = "https://cdn.example.com/blank.png"
"#
	)
	.unwrap();

	let settings = Settings::load(Some(file.path())).unwrap();
	let dashboard = Dashboard::from_settings(&settings);

	let login = dashboard.login_form();
	login
		.submit(Credentials::new("demo@example.com", "demo-pass"))
		.await;
	assert!(login.success_message().is_some());

	let profile = dashboard.profile();
	assert_eq!(profile.avatar_url(), "https://cdn.example.com/blank.png");

	profile.load().await;
	profile
		.upload_avatar(AvatarFile::new("me.png", "image/png", vec![1, 2, 3]))
		.await;
	assert!(
		profile
			.avatar_url()
			.starts_with("blob:https://dash.example.com/")
	);
}

#[rstest]
#[serial]
fn test_latency_override_from_environment() {
	// SAFETY: serialized with other environment-mutating tests
	unsafe {
		std::env::set_var("USERDASH_MOCK_LATENCY_MS", "0");
	}

	let settings = Settings::load(None);

	// SAFETY: serialized with other environment-mutating tests
	unsafe {
		std::env::remove_var("USERDASH_MOCK_LATENCY_MS");
	}
	assert_eq!(settings.unwrap().mock.latency, LatencySettings::uniform(0));
}
