//! Collaborators that hold every call until the test lets it through.
//!
//! A test starts an operation, waits until the call has reached the
//! collaborator with [`Gate::entered_at_least`], inspects the controller while
//! the call is in flight, and finally calls [`Gate::open`].

use async_trait::async_trait;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::sync::Semaphore;
use userdash_auth::{
	AuthResult, AuthService, InMemoryUserService, MockLatency, UserResult, UserService,
};
use userdash_core::{ActivityEntry, AuthResponse, AvatarFile, ProfileDraft, UserProfile};

/// Counts arrivals and blocks each one until a permit is released.
#[derive(Clone)]
pub struct Gate {
	permits: Arc<Semaphore>,
	entered: Arc<AtomicUsize>,
}

impl Gate {
	pub fn new() -> Self {
		Self {
			permits: Arc::new(Semaphore::new(0)),
			entered: Arc::new(AtomicUsize::new(0)),
		}
	}

	/// Wait for a permit. Called by the gated collaborator.
	pub async fn pass(&self) {
		self.entered.fetch_add(1, Ordering::SeqCst);
		if let Ok(permit) = self.permits.acquire().await {
			permit.forget();
		}
	}

	/// Let `n` waiting (or future) calls through.
	pub fn open(&self, n: usize) {
		self.permits.add_permits(n);
	}

	/// Number of calls that have reached the gate so far.
	pub fn entered(&self) -> usize {
		self.entered.load(Ordering::SeqCst)
	}

	/// Yield until at least `n` calls have reached the gate.
	pub async fn entered_at_least(&self, n: usize) {
		while self.entered() < n {
			tokio::task::yield_now().await;
		}
	}
}

impl Default for Gate {
	fn default() -> Self {
		Self::new()
	}
}

/// [`AuthService`] that waits on a [`Gate`] before delegating.
pub struct GatedAuthService {
	inner: Arc<dyn AuthService>,
	gate: Gate,
}

impl GatedAuthService {
	pub fn new(inner: Arc<dyn AuthService>) -> Self {
		Self {
			inner,
			gate: Gate::new(),
		}
	}

	pub fn gate(&self) -> &Gate {
		&self.gate
	}
}

#[async_trait]
impl AuthService for GatedAuthService {
	async fn login(&self, email: &str, password: &str) -> AuthResult<AuthResponse> {
		self.gate.pass().await;
		self.inner.login(email, password).await
	}

	async fn signup(&self, email: &str, password: &str) -> AuthResult<AuthResponse> {
		self.gate.pass().await;
		self.inner.signup(email, password).await
	}
}

/// [`UserService`] over an [`InMemoryUserService`] with one gate for
/// saves and another for avatar uploads.
///
/// `get_user` and `recent_activity` are not gated.
pub struct GatedUserService {
	inner: InMemoryUserService,
	save_gate: Gate,
	upload_gate: Gate,
}

impl GatedUserService {
	/// Wraps a zero-latency seed store.
	pub fn new() -> Self {
		Self::wrap(InMemoryUserService::new().with_latency(MockLatency::none()))
	}

	pub fn wrap(inner: InMemoryUserService) -> Self {
		Self {
			inner,
			save_gate: Gate::new(),
			upload_gate: Gate::new(),
		}
	}

	pub fn store(&self) -> &InMemoryUserService {
		&self.inner
	}

	pub fn save_gate(&self) -> &Gate {
		&self.save_gate
	}

	pub fn upload_gate(&self) -> &Gate {
		&self.upload_gate
	}
}

impl Default for GatedUserService {
	fn default() -> Self {
		Self::new()
	}
}

#[async_trait]
impl UserService for GatedUserService {
	async fn get_user(&self) -> UserResult<UserProfile> {
		self.inner.get_user().await
	}

	async fn update_user_details(&self, details: ProfileDraft) -> UserResult<UserProfile> {
		self.save_gate.pass().await;
		self.inner.update_user_details(details).await
	}

	async fn upload_user_avatar(&self, file: AvatarFile) -> UserResult<String> {
		self.upload_gate.pass().await;
		self.inner.upload_user_avatar(file).await
	}

	async fn recent_activity(&self) -> UserResult<Vec<ActivityEntry>> {
		self.inner.recent_activity().await
	}
}
