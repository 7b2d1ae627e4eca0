//! Global `tracing` subscriber setup.
//!
//! ```no_run
//! use userdash_conf::Settings;
//! use userdash_utils::init_logging;
//!
//! let settings = Settings::load(None).unwrap();
//! init_logging(&settings.logging);
//! tracing::info!("dashboard ready");
//! ```

use std::sync::Once;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use userdash_conf::LoggingSettings;

static INIT: Once = Once::new();

/// Build the event filter.
///
/// `RUST_LOG` wins when set and parseable. Otherwise `settings.level` is
/// used, and an unparseable level falls back to `info`.
pub fn build_filter(settings: &LoggingSettings) -> EnvFilter {
	EnvFilter::try_from_default_env()
		.or_else(|_| EnvFilter::try_new(&settings.level))
		.unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Install the global fmt subscriber.
///
/// Only the first call has an effect. A subscriber installed elsewhere
/// (e.g. by a test harness) is left in place.
pub fn init_logging(settings: &LoggingSettings) {
	INIT.call_once(|| {
		let layer = tracing_subscriber::fmt::layer()
			.with_target(settings.with_target)
			.with_ansi(settings.ansi);

		let installed = tracing_subscriber::registry()
			.with(build_filter(settings))
			.with(layer)
			.try_init();

		if installed.is_ok() {
			tracing::debug!(level = %settings.level, "Logging initialized");
		}
	});
}
