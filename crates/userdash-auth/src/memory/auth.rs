use crate::errors::{AuthError, AuthResult};
use crate::hasher::PasswordDigest;
use crate::latency::{MockLatency, simulate};
use crate::service::AuthService;
use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;
use userdash_core::AuthResponse;

/// Demo account present in every fresh store.
pub const SEED_EMAIL: &str = "user@example.com";
pub const SEED_PASSWORD: &str = "password123";

/// In-memory account store.
///
/// `signup` registers an email once; `login` checks the stored password.
/// Nothing survives the process.
///
/// # Examples
///
/// ```
/// use userdash_auth::{AuthService, InMemoryAuthService, MockLatency};
///
/// # tokio::runtime::Builder::new_current_thread().enable_time().build().unwrap().block_on(async {
/// let auth = InMemoryAuthService::new().with_latency(MockLatency::none());
///
/// auth.signup("new@example.com", "abcdef").await.unwrap();
/// let response = auth.login("new@example.com", "abcdef").await.unwrap();
/// assert_eq!(response.user.email, "new@example.com");
///
/// let err = auth.login("new@example.com", "wrong").await.unwrap_err();
/// assert_eq!(err.message(), Some("Invalid credentials"));
/// # });
/// ```
#[derive(Clone)]
pub struct InMemoryAuthService {
	accounts: Arc<RwLock<HashMap<String, PasswordDigest>>>,
	latency: MockLatency,
}

impl InMemoryAuthService {
	/// Creates a store containing the seed account.
	pub fn new() -> Self {
		let service = Self::empty();
		service.insert_account(SEED_EMAIL, SEED_PASSWORD);
		service
	}

	/// Creates a store with no accounts.
	pub fn empty() -> Self {
		Self {
			accounts: Arc::new(RwLock::new(HashMap::new())),
			latency: MockLatency::default(),
		}
	}

	pub fn with_latency(mut self, latency: MockLatency) -> Self {
		self.latency = latency;
		self
	}

	pub fn with_account(self, email: &str, password: &str) -> Self {
		self.insert_account(email, password);
		self
	}

	pub fn has_account(&self, email: &str) -> bool {
		self.accounts.read().contains_key(email)
	}

	pub fn account_count(&self) -> usize {
		self.accounts.read().len()
	}

	fn insert_account(&self, email: &str, password: &str) {
		self.accounts
			.write()
			.insert(email.to_string(), PasswordDigest::new(password));
	}
}

impl Default for InMemoryAuthService {
	fn default() -> Self {
		Self::new()
	}
}

#[async_trait]
impl AuthService for InMemoryAuthService {
	async fn login(&self, email: &str, password: &str) -> AuthResult<AuthResponse> {
		simulate(self.latency.login).await;

		let verified = self
			.accounts
			.read()
			.get(email)
			.is_some_and(|digest| digest.verify(password));
		if !verified {
			tracing::info!(email = %email, "Login rejected");
			return Err(AuthError::invalid_credentials());
		}

		tracing::info!(email = %email, "Login accepted");
		Ok(AuthResponse::for_email(email))
	}

	async fn signup(&self, email: &str, password: &str) -> AuthResult<AuthResponse> {
		simulate(self.latency.signup).await;

		let mut accounts = self.accounts.write();
		if accounts.contains_key(email) {
			tracing::info!(email = %email, "Signup rejected: account exists");
			return Err(AuthError::account_exists());
		}
		accounts.insert(email.to_string(), PasswordDigest::new(password));

		tracing::info!(email = %email, "Account created");
		Ok(AuthResponse::for_email(email))
	}
}
