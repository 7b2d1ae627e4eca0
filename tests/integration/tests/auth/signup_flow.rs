//! Signup page flow, including the hand-off to login.

use rstest::*;
use std::sync::Arc;
use userdash::prelude::*;
use userdash_integration_tests::{Harness, harness};
use userdash_test::MockAuthService;

#[rstest]
#[case("bad-email", "abcdef", "abcdef", "Invalid email address.")]
#[case("a@b.com", "short", "short", "Password must be at least 6 characters.")]
#[case("a@b.com", "abcdef", "abcdeg", "Passwords do not match.")]
#[case("a@b.com", "", "abcdef", "All fields are required.")]
#[tokio::test]
async fn test_invalid_signup_is_not_sent(
	#[case] email: &str,
	#[case] password: &str,
	#[case] confirm: &str,
	#[case] expected: &str,
) {
	let mut auth = MockAuthService::new();
	auth.expect_signup().times(0);
	let signup = SignupController::new(Arc::new(auth));

	signup
		.submit(SignupCredentials::new(email, password, confirm))
		.await;

	assert_eq!(
		signup.state(),
		SubmissionState::Failed(expected.to_string())
	);
}

#[rstest]
#[tokio::test]
async fn test_signup_then_login(harness: Harness) {
	let signup = harness.dashboard.signup_form();

	signup
		.submit(SignupCredentials::new("new@example.com", "s3cret!", "s3cret!"))
		.await;

	assert_eq!(
		signup.success_message().as_deref(),
		Some("Account created for new@example.com! You can now log in.")
	);
	assert!(harness.auth.has_account("new@example.com"));

	let login = harness.dashboard.login_form();
	login
		.submit(Credentials::new("new@example.com", "s3cret!"))
		.await;
	assert!(login.success_message().is_some());
}

#[rstest]
#[tokio::test]
async fn test_duplicate_signup_shows_service_message(harness: Harness) {
	let signup = harness.dashboard.signup_form();

	signup
		.submit(SignupCredentials::new(
			"user@example.com",
			"abcdef",
			"abcdef",
		))
		.await;

	assert_eq!(
		signup.error_message().as_deref(),
		Some("An account with this email already exists.")
	);
	assert_eq!(harness.auth.account_count(), 1);
}
