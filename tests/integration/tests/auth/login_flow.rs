//! Login page flow against the in-memory auth service.

use rstest::*;
use std::sync::Arc;
use userdash::prelude::*;
use userdash_core::AuthResponse;
use userdash_integration_tests::{Harness, dashboard, harness};
use userdash_pages::SubmissionOutcome;
use userdash_test::{GatedAuthService, MockAuthService};

#[rstest]
#[tokio::test]
async fn test_login_with_seed_account(dashboard: Dashboard) {
	let login = dashboard.login_form();

	login
		.dispatch(FormEvent::Submit(Credentials::new(
			"user@example.com",
			"password123",
		)))
		.await;

	assert_eq!(
		login.state(),
		SubmissionState::Succeeded(SubmissionOutcome {
			email: "user@example.com".to_string(),
			message: "Welcome, user@example.com! You are now logged in.".to_string(),
		})
	);
}

#[rstest]
#[tokio::test]
async fn test_short_password_is_valid_for_login() {
	let mut auth = MockAuthService::new();
	auth.expect_login()
		.times(1)
		.returning(|email, _| Ok(AuthResponse::for_email(email)));
	let login = LoginController::new(Arc::new(auth));

	login.submit(Credentials::new("a@b.com", "x")).await;

	assert_eq!(
		login.success_message().as_deref(),
		Some("Welcome, a@b.com! You are now logged in.")
	);
}

#[rstest]
#[tokio::test]
async fn test_rejected_credentials_then_retry(dashboard: Dashboard) {
	let login = dashboard.login_form();

	login
		.submit(Credentials::new("user@example.com", "nope"))
		.await;
	assert_eq!(login.error_message().as_deref(), Some("Invalid credentials"));
	assert_eq!(login.submit_label(), "Sign In");

	login.dispatch(FormEvent::FieldEdited).await;
	assert_eq!(login.state(), SubmissionState::Idle);

	login
		.submit(Credentials::new("user@example.com", "password123"))
		.await;
	assert!(login.success_message().is_some());
}

#[rstest]
#[case("", "")]
#[case("user@example.com", "")]
#[case("", "password123")]
#[tokio::test]
async fn test_missing_fields_never_reach_service(#[case] email: &str, #[case] password: &str) {
	let mut auth = MockAuthService::new();
	auth.expect_login().times(0);
	let login = LoginController::new(Arc::new(auth));

	login.submit(Credentials::new(email, password)).await;

	assert_eq!(
		login.error_message().as_deref(),
		Some("Email and password are required.")
	);
}

#[rstest]
#[tokio::test]
async fn test_double_submit_calls_service_once(harness: Harness) {
	let gated = Arc::new(GatedAuthService::new(harness.auth.clone()));
	let gate = gated.gate().clone();
	let login = LoginController::new(gated);
	let credentials = Credentials::new("user@example.com", "password123");

	tokio::join!(
		login.submit(credentials.clone()),
		login.submit(credentials.clone()),
		async {
			gate.entered_at_least(1).await;
			tokio::task::yield_now().await;
			gate.open(2);
		}
	);

	assert_eq!(gate.entered(), 1);
	assert!(matches!(login.state(), SubmissionState::Succeeded(_)));
}

#[rstest]
#[tokio::test]
async fn test_forms_are_independent(dashboard: Dashboard) {
	let first = dashboard.login_form();
	let second = dashboard.login_form();

	first.submit(Credentials::new("bad", "x")).await;

	assert!(first.error_message().is_some());
	assert_eq!(second.state(), SubmissionState::Idle);
}
