use std::time::Duration;

/// Artificial delays applied by the in-memory collaborators.
///
/// The defaults mimic a slow network so that loading states are visible in
/// a demo; tests use [`MockLatency::none`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MockLatency {
	pub login: Duration,
	pub signup: Duration,
	pub get_user: Duration,
	pub update_user: Duration,
	pub upload_avatar: Duration,
}

impl MockLatency {
	/// Every call resolves immediately.
	pub const fn none() -> Self {
		Self::uniform(Duration::ZERO)
	}

	/// The same delay for every call.
	pub const fn uniform(delay: Duration) -> Self {
		Self {
			login: delay,
			signup: delay,
			get_user: delay,
			update_user: delay,
			upload_avatar: delay,
		}
	}
}

impl Default for MockLatency {
	fn default() -> Self {
		Self {
			login: Duration::from_millis(700),
			signup: Duration::from_millis(700),
			get_user: Duration::from_millis(500),
			update_user: Duration::from_millis(800),
			upload_avatar: Duration::from_millis(1000),
		}
	}
}

pub(crate) async fn simulate(delay: Duration) {
	if !delay.is_zero() {
		tokio::time::sleep(delay).await;
	}
}
