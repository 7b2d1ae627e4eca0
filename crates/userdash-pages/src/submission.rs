//! Login and signup form submission.
//!
//! Both forms share one state machine:
//!
//! ```text
//! Idle ──submit──▶ Submitting ──ok──▶ Succeeded
//!   ▲                  │
//!   │                  └──err/panic──▶ Failed
//!   └──────── FieldEdited ◀────────────────┘
//! ```
//!
//! Invalid input goes straight to `Failed` without calling the collaborator.
//! While `Submitting`, further submits are ignored.

use crate::guard::{catch_panic, restore_on_exit};
use futures::future::BoxFuture;
use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;
use userdash_auth::{AuthResult, AuthService};
use userdash_core::{AuthResponse, Signal, SubscriptionId};
use userdash_forms::{Credentials, SignupCredentials, Validate};

/// Result of a successful submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionOutcome {
	/// Email of the authenticated account
	pub email: String,
	/// Message shown by the page
	pub message: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SubmissionState {
	#[default]
	Idle,
	Submitting,
	Succeeded(SubmissionOutcome),
	Failed(String),
}

impl SubmissionState {
	pub fn is_submitting(&self) -> bool {
		matches!(self, SubmissionState::Submitting)
	}

	/// `Succeeded` or `Failed`.
	pub fn is_terminal(&self) -> bool {
		matches!(
			self,
			SubmissionState::Succeeded(_) | SubmissionState::Failed(_)
		)
	}
}

impl fmt::Display for SubmissionState {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			SubmissionState::Idle => write!(f, "idle"),
			SubmissionState::Submitting => write!(f, "submitting"),
			SubmissionState::Succeeded(_) => write!(f, "succeeded"),
			SubmissionState::Failed(_) => write!(f, "failed"),
		}
	}
}

/// User actions a form page feeds into its controller.
#[derive(Debug, Clone)]
pub enum FormEvent<C> {
	/// Any input changed. Clears a finished submission's message.
	FieldEdited,
	/// The submit button was pressed with these values.
	Submit(C),
}

/// A form whose values are sent to the [`AuthService`].
///
/// Implemented for [`Credentials`] (login) and [`SignupCredentials`]
/// (signup); the constants are the page's copy.
pub trait AuthForm: Validate + Clone + 'static {
	/// Page heading
	const TITLE: &'static str;
	/// Submit button text while idle
	const SUBMIT_LABEL: &'static str;
	/// Submit button text while the call is in flight
	const SUBMITTING_LABEL: &'static str;
	/// Shown when the collaborator fails without a message
	const FAILURE_MESSAGE: &'static str;

	fn email(&self) -> &str;

	/// Calls the collaborator operation this form maps to.
	fn send<'a>(&'a self, auth: &'a dyn AuthService) -> BoxFuture<'a, AuthResult<AuthResponse>>;

	fn success_message(email: &str) -> String;
}

impl AuthForm for Credentials {
	const TITLE: &'static str = "Sign in to your account";
	const SUBMIT_LABEL: &'static str = "Sign In";
	const SUBMITTING_LABEL: &'static str = "Signing in...";
	const FAILURE_MESSAGE: &'static str = "Login failed. Please try again.";

	fn email(&self) -> &str {
		&self.email
	}

	fn send<'a>(&'a self, auth: &'a dyn AuthService) -> BoxFuture<'a, AuthResult<AuthResponse>> {
		auth.login(&self.email, &self.password)
	}

	fn success_message(email: &str) -> String {
		format!("Welcome, {}! You are now logged in.", email)
	}
}

impl AuthForm for SignupCredentials {
	const TITLE: &'static str = "Create your account";
	const SUBMIT_LABEL: &'static str = "Sign Up";
	const SUBMITTING_LABEL: &'static str = "Creating account...";
	const FAILURE_MESSAGE: &'static str = "Signup failed. Please try again.";

	fn email(&self) -> &str {
		&self.email
	}

	fn send<'a>(&'a self, auth: &'a dyn AuthService) -> BoxFuture<'a, AuthResult<AuthResponse>> {
		auth.signup(&self.email, &self.password)
	}

	fn success_message(email: &str) -> String {
		format!("Account created for {}! You can now log in.", email)
	}
}

/// State machine behind one login or signup form instance.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use userdash_auth::{InMemoryAuthService, MockLatency};
/// use userdash_forms::Credentials;
/// use userdash_pages::{LoginController, SubmissionState};
///
/// # tokio::runtime::Builder::new_current_thread().enable_time().build().unwrap().block_on(async {
/// let auth = Arc::new(InMemoryAuthService::new().with_latency(MockLatency::none()));
/// let form = LoginController::new(auth);
///
/// form.submit(Credentials::new("user@example.com", "password123")).await;
/// assert_eq!(
///     form.success_message().as_deref(),
///     Some("Welcome, user@example.com! You are now logged in.")
/// );
///
/// form.submit(Credentials::new("user@example.com", "")).await;
/// assert_eq!(
///     form.state(),
///     SubmissionState::Failed("Email and password are required.".to_string())
/// );
/// # });
/// ```
pub struct SubmissionController<C: AuthForm> {
	auth: Arc<dyn AuthService>,
	state: Signal<SubmissionState>,
	_form: PhantomData<fn(C)>,
}

pub type LoginController = SubmissionController<Credentials>;
pub type SignupController = SubmissionController<SignupCredentials>;

impl<C: AuthForm> SubmissionController<C> {
	pub fn new(auth: Arc<dyn AuthService>) -> Self {
		Self {
			auth,
			state: Signal::new(SubmissionState::Idle),
			_form: PhantomData,
		}
	}

	/// Validates `credentials` and, if valid, sends them to the collaborator.
	///
	/// Never fails: every outcome is written to [`Self::state`]. A call made
	/// while another is in flight does nothing.
	pub async fn submit(&self, credentials: C) {
		if self.is_submitting() {
			tracing::debug!(form = %credentials.form_kind(), "Submit ignored: already submitting");
			return;
		}

		if let Err(error) = credentials.validate() {
			tracing::debug!(form = %credentials.form_kind(), %error, "Validation failed");
			self.state.set(SubmissionState::Failed(error.to_string()));
			return;
		}

		self.state.set(SubmissionState::Submitting);
		let _reset = restore_on_exit(
			&self.state,
			SubmissionState::is_submitting,
			SubmissionState::Idle,
		);
		tracing::debug!(form = %credentials.form_kind(), email = %credentials.email(), "Submitting");

		let auth = self.auth.as_ref();
		let next = match catch_panic(async { credentials.send(auth).await }).await {
			Some(Ok(response)) => {
				let email = response.user.email;
				tracing::info!(form = %credentials.form_kind(), email = %email, "Submission succeeded");
				SubmissionState::Succeeded(SubmissionOutcome {
					message: C::success_message(&email),
					email,
				})
			}
			Some(Err(error)) => {
				tracing::warn!(form = %credentials.form_kind(), %error, "Submission failed");
				SubmissionState::Failed(error.message().unwrap_or(C::FAILURE_MESSAGE).to_string())
			}
			None => {
				tracing::error!(form = %credentials.form_kind(), "Auth service panicked");
				SubmissionState::Failed(C::FAILURE_MESSAGE.to_string())
			}
		};
		self.state.set(next);
	}

	/// Feeds one user action into the controller.
	pub async fn dispatch(&self, event: FormEvent<C>) {
		match event {
			FormEvent::FieldEdited => self.field_edited(),
			FormEvent::Submit(credentials) => self.submit(credentials).await,
		}
	}

	/// Returns a finished submission to `Idle`. No effect otherwise.
	pub fn field_edited(&self) {
		if self.state.with(SubmissionState::is_terminal) {
			self.state.set(SubmissionState::Idle);
		}
	}

	pub fn state(&self) -> SubmissionState {
		self.state.get()
	}

	/// The underlying signal, for views that bind to it.
	pub fn state_signal(&self) -> &Signal<SubmissionState> {
		&self.state
	}

	/// Calls `f` with every new state.
	pub fn subscribe<F>(&self, f: F) -> SubscriptionId
	where
		F: Fn(&SubmissionState) + 'static,
	{
		self.state.subscribe(f)
	}

	pub fn is_submitting(&self) -> bool {
		self.state.with(SubmissionState::is_submitting)
	}

	pub fn error_message(&self) -> Option<String> {
		self.state.with(|state| match state {
			SubmissionState::Failed(message) => Some(message.clone()),
			_ => None,
		})
	}

	pub fn success_message(&self) -> Option<String> {
		self.state.with(|state| match state {
			SubmissionState::Succeeded(outcome) => Some(outcome.message.clone()),
			_ => None,
		})
	}

	pub fn submit_label(&self) -> &'static str {
		if self.is_submitting() {
			C::SUBMITTING_LABEL
		} else {
			C::SUBMIT_LABEL
		}
	}

	pub fn title(&self) -> &'static str {
		C::TITLE
	}
}

impl<C: AuthForm> Clone for SubmissionController<C> {
	fn clone(&self) -> Self {
		Self {
			auth: Arc::clone(&self.auth),
			state: self.state.clone(),
			_form: PhantomData,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::*;
	use std::cell::RefCell;
	use std::rc::Rc;
	use userdash_auth::{AuthError, InMemoryAuthService};
	use userdash_test::{
		GatedAuthService, MockAuthService, auth_service, init_test_logging, login_credentials,
	};

	fn failed(message: &str) -> SubmissionState {
		SubmissionState::Failed(message.to_string())
	}

	#[fixture]
	fn login(auth_service: Arc<InMemoryAuthService>) -> LoginController {
		init_test_logging();
		LoginController::new(auth_service)
	}

	#[fixture]
	fn signup(auth_service: Arc<InMemoryAuthService>) -> SignupController {
		init_test_logging();
		SignupController::new(auth_service)
	}

	#[rstest]
	fn test_initial_state(login: LoginController) {
		// Assert
		assert_eq!(login.state(), SubmissionState::Idle);
		assert_eq!(login.submit_label(), "Sign In");
		assert_eq!(login.title(), "Sign in to your account");
		assert_eq!(login.error_message(), None);
	}

	#[rstest]
	#[tokio::test]
	async fn test_login_success(
		login: LoginController,
		login_credentials: (&'static str, &'static str),
	) {
		// Arrange
		let (email, password) = login_credentials;

		// Act
		login.submit(Credentials::new(email, password)).await;

		// Assert
		assert_eq!(
			login.state(),
			SubmissionState::Succeeded(SubmissionOutcome {
				email: "user@example.com".to_string(),
				message: "Welcome, user@example.com! You are now logged in.".to_string(),
			})
		);
	}

	#[rstest]
	#[case("", "password123", "Email and password are required.")]
	#[case("userexample.com", "password123", "Invalid email address.")]
	#[case("user@example.com", "wrong-password", "Invalid credentials")]
	#[tokio::test]
	async fn test_login_failures(
		login: LoginController,
		#[case] email: &str,
		#[case] password: &str,
		#[case] expected: &str,
	) {
		// Act
		login.submit(Credentials::new(email, password)).await;

		// Assert
		assert_eq!(login.state(), failed(expected));
		assert_eq!(login.error_message().as_deref(), Some(expected));
	}

	#[rstest]
	#[tokio::test]
	async fn test_invalid_input_skips_collaborator() {
		// Arrange
		let mut auth = MockAuthService::new();
		auth.expect_signup().times(0);
		let form = SignupController::new(Arc::new(auth));

		// Act
		form.submit(SignupCredentials::new("a@b.com", "abc", "abc"))
			.await;

		// Assert
		assert_eq!(form.state(), failed("Password must be at least 6 characters."));
	}

	#[rstest]
	#[tokio::test]
	async fn test_signup_success_then_duplicate(signup: SignupController) {
		signup
			.submit(SignupCredentials::new("new@example.com", "abcdef", "abcdef"))
			.await;
		assert_eq!(
			signup.success_message().as_deref(),
			Some("Account created for new@example.com! You can now log in.")
		);

		signup
			.submit(SignupCredentials::new("new@example.com", "abcdef", "abcdef"))
			.await;
		assert_eq!(
			signup.state(),
			failed("An account with this email already exists.")
		);
	}

	#[rstest]
	#[case(AuthError::without_message())]
	#[case(AuthError::with_message(""))]
	#[tokio::test]
	async fn test_failure_without_message_uses_fallback(#[case] error: AuthError) {
		// Arrange
		let mut auth = MockAuthService::new();
		auth.expect_login()
			.times(1)
			.returning(move |_, _| Err(error.clone()));
		let form = LoginController::new(Arc::new(auth));

		// Act
		form.submit(Credentials::new("user@example.com", "password123"))
			.await;

		// Assert
		assert_eq!(form.state(), failed("Login failed. Please try again."));
	}

	#[rstest]
	#[tokio::test]
	async fn test_signup_fallback_message() {
		// Arrange
		let mut auth = MockAuthService::new();
		auth.expect_signup()
			.returning(|_, _| Err(AuthError::without_message()));
		let form = SignupController::new(Arc::new(auth));

		// Act
		form.submit(SignupCredentials::new("a@b.com", "abcdef", "abcdef"))
			.await;

		// Assert
		assert_eq!(form.state(), failed("Signup failed. Please try again."));
	}

	#[rstest]
	#[tokio::test]
	async fn test_resubmit_while_submitting_is_ignored(auth_service: Arc<InMemoryAuthService>) {
		// Arrange
		let gated = Arc::new(GatedAuthService::new(auth_service));
		let gate = gated.gate().clone();
		let form = LoginController::new(gated);
		let credentials = Credentials::new("user@example.com", "password123");

		// Act
		tokio::join!(form.submit(credentials.clone()), async {
			gate.entered_at_least(1).await;
			assert!(form.is_submitting());
			assert_eq!(form.submit_label(), "Signing in...");

			form.submit(credentials.clone()).await;
			form.submit(Credentials::new("", "")).await;
			assert_eq!(form.state(), SubmissionState::Submitting);

			gate.open(1);
		});

		// Assert
		assert_eq!(gate.entered(), 1);
		assert!(form.success_message().is_some());
	}

	#[rstest]
	#[tokio::test]
	async fn test_dropped_submit_returns_to_idle(auth_service: Arc<InMemoryAuthService>) {
		let gated = Arc::new(GatedAuthService::new(auth_service));
		let gate = gated.gate().clone();
		let form = LoginController::new(gated);

		tokio::select! {
			_ = form.submit(Credentials::new("user@example.com", "password123")) => {
				panic!("submit completed while the gate was closed");
			}
			_ = gate.entered_at_least(1) => {}
		}

		assert_eq!(form.state(), SubmissionState::Idle);
	}

	struct PanickingAuthService;

	#[async_trait::async_trait]
	impl AuthService for PanickingAuthService {
		async fn login(&self, _email: &str, _password: &str) -> AuthResult<AuthResponse> {
			panic!("connection reset")
		}

		async fn signup(&self, _email: &str, _password: &str) -> AuthResult<AuthResponse> {
			panic!("connection reset")
		}
	}

	#[rstest]
	#[tokio::test]
	async fn test_panicking_collaborator_leaves_failed() {
		// Arrange
		let form = LoginController::new(Arc::new(PanickingAuthService));

		// Act
		form.submit(Credentials::new("user@example.com", "password123"))
			.await;

		// Assert
		assert_eq!(form.state(), failed("Login failed. Please try again."));
	}

	#[rstest]
	#[tokio::test]
	async fn test_field_edited_clears_terminal_state(login: LoginController) {
		login.dispatch(FormEvent::FieldEdited).await;
		assert_eq!(login.state(), SubmissionState::Idle);

		login
			.dispatch(FormEvent::Submit(Credentials::new("bad", "x")))
			.await;
		assert_eq!(login.state(), failed("Invalid email address."));

		login.dispatch(FormEvent::FieldEdited).await;
		assert_eq!(login.state(), SubmissionState::Idle);
	}

	#[rstest]
	#[tokio::test]
	async fn test_subscribers_see_every_transition(login: LoginController) {
		// Arrange
		let seen = Rc::new(RefCell::new(Vec::new()));
		let sink = Rc::clone(&seen);
		login.subscribe(move |state| sink.borrow_mut().push(state.to_string()));

		// Act
		login
			.submit(Credentials::new("user@example.com", "password123"))
			.await;

		// Assert
		assert_eq!(*seen.borrow(), vec!["submitting", "succeeded"]);
	}

	#[rstest]
	fn test_signup_copy(signup: SignupController) {
		assert_eq!(signup.title(), "Create your account");
		assert_eq!(signup.submit_label(), "Sign Up");
	}
}
