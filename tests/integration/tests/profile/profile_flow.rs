//! Profile page flow against the in-memory user service.

use rstest::*;
use userdash::prelude::*;
use userdash_integration_tests::{Harness, harness};
use userdash_test::avatar_file;

#[rstest]
#[tokio::test]
async fn test_edit_and_save(harness: Harness) {
	let profile = harness.dashboard.profile();
	profile.load().await;

	profile.begin_edit();
	profile.set_draft_name("John Doe");
	profile.set_draft_email("john@example.com");
	assert_eq!(profile.display_name(), "Jane Doe");

	profile.save().await;

	assert!(!profile.is_editing());
	assert_eq!(profile.display_name(), "John Doe");
	assert_eq!(profile.display_email(), "john@example.com");
	assert_eq!(harness.users.snapshot().name, "John Doe");
	assert_eq!(
		profile.status().map(|s| s.text().to_string()).as_deref(),
		Some("Profile updated!")
	);
}

#[rstest]
#[tokio::test]
async fn test_upload_avatar_changes_only_avatar(harness: Harness, avatar_file: AvatarFile) {
	let profile = harness.dashboard.profile();
	profile.load().await;
	let before = profile.profile().unwrap();

	profile.upload_avatar(avatar_file).await;

	let after = profile.profile().unwrap();
	let url = after.avatar.clone().unwrap();
	assert_eq!(after.name, before.name);
	assert_eq!(after.email, before.email);
	assert_eq!(after.created_at, before.created_at);
	assert_eq!(after.last_login, before.last_login);
	assert_eq!(harness.users.snapshot().avatar, Some(url));
}

#[rstest]
#[tokio::test]
async fn test_cancel_discards_draft(harness: Harness) {
	let profile = harness.dashboard.profile();
	profile.load().await;

	profile.begin_edit();
	profile.set_draft_name("Nobody");
	profile.cancel_edit();
	profile.begin_edit();

	assert_eq!(profile.draft().name, "Jane Doe");
	assert_eq!(harness.users.snapshot().name, "Jane Doe");
}

#[rstest]
#[tokio::test]
async fn test_profile_reload_sees_saved_values(harness: Harness) {
	let first = harness.dashboard.profile();
	first.load().await;
	first
		.save_edit(ProfileDraft::new("Second Name", "second@example.com"))
		.await;

	let second = harness.dashboard.profile();
	second.load().await;

	assert_eq!(second.display_name(), "Second Name");
}

#[rstest]
#[tokio::test]
async fn test_summary(harness: Harness) {
	let summary = harness.dashboard.summary().await.unwrap();

	assert_eq!(summary.recent_activities, 3);
	assert_eq!(summary.account_status.to_string(), "Active");
}
