use crate::env::Env;
use serde::{Deserialize, Serialize};
use std::path::Path;
use userdash_core::{DEFAULT_BLOB_ORIGIN, Error, Result};

/// Avatar shown when the profile has none.
pub const DEFAULT_AVATAR_URL: &str = "https://ui-avatars.com/api/?name=User&background=E5E7EB&color=888";

/// Main settings structure
///
/// Every section has defaults, so a TOML file only needs the keys it
/// changes:
///
/// ```
/// use userdash_conf::Settings;
///
/// let settings = Settings::from_toml_str(r#"
/// [logging]
/// level = "debug"
///
/// [mock.latency]
/// get_user_ms = 0
/// "#).unwrap();
///
/// assert_eq!(settings.logging.level, "debug");
/// assert_eq!(settings.mock.latency.get_user_ms, 0);
/// assert_eq!(settings.mock.latency.update_user_ms, 800);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
	pub logging: LoggingSettings,
	pub mock: MockSettings,
	pub profile: ProfileSettings,
}

/// Logging configuration
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
	/// `tracing` filter directive, e.g. `info` or `userdash_pages=debug`
	pub level: String,
	/// Include the event target (module path) in each line
	pub with_target: bool,
	/// Use ANSI colors
	pub ansi: bool,
}

impl Default for LoggingSettings {
	fn default() -> Self {
		Self {
			level: "info".to_string(),
			with_target: true,
			ansi: true,
		}
	}
}

/// In-memory collaborator configuration
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MockSettings {
	pub latency: LatencySettings,
	/// Whether `seed_account` is registered at startup
	pub seed: bool,
	/// Account present in the auth store at startup
	pub seed_account: SeedAccount,
	/// Origin used for `blob:` avatar URLs
	pub blob_origin: String,
}

impl MockSettings {
	/// The account to register at startup, if seeding is enabled.
	pub fn active_seed(&self) -> Option<&SeedAccount> {
		self.seed.then_some(&self.seed_account)
	}
}

impl Default for MockSettings {
	fn default() -> Self {
		Self {
			latency: LatencySettings::default(),
			seed: true,
			seed_account: SeedAccount::default(),
			blob_origin: DEFAULT_BLOB_ORIGIN.to_string(),
		}
	}
}

/// Artificial delay of each mock call, in milliseconds
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LatencySettings {
	pub login_ms: u64,
	pub signup_ms: u64,
	pub get_user_ms: u64,
	pub update_user_ms: u64,
	pub upload_avatar_ms: u64,
}

impl LatencySettings {
	pub fn uniform(ms: u64) -> Self {
		Self {
			login_ms: ms,
			signup_ms: ms,
			get_user_ms: ms,
			update_user_ms: ms,
			upload_avatar_ms: ms,
		}
	}
}

impl Default for LatencySettings {
	fn default() -> Self {
		Self {
			login_ms: 700,
			signup_ms: 700,
			get_user_ms: 500,
			update_user_ms: 800,
			upload_avatar_ms: 1000,
		}
	}
}

#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedAccount {
	pub email: String,
	pub password: String,
}

impl Default for SeedAccount {
	fn default() -> Self {
		Self {
			email: "user@example.com".to_string(),
			password: "password123".to_string(),
		}
	}
}

impl std::fmt::Debug for SeedAccount {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("SeedAccount")
			.field("email", &self.email)
			.field("password", &"[redacted]")
			.finish()
	}
}

/// Profile page configuration
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileSettings {
	pub default_avatar: String,
}

impl Default for ProfileSettings {
	fn default() -> Self {
		Self {
			default_avatar: DEFAULT_AVATAR_URL.to_string(),
		}
	}
}

impl Settings {
	/// Parse settings from a TOML document
	pub fn from_toml_str(source: &str) -> Result<Self> {
		Ok(toml::from_str(source)?)
	}

	/// Read and parse a TOML settings file
	pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
		let path = path.as_ref();
		let source = std::fs::read_to_string(path).map_err(|source| Error::Io {
			path: path.to_path_buf(),
			source,
		})?;
		Self::from_toml_str(&source)
	}

	/// Load settings the way the application does at startup
	///
	/// 1. Load `.env` into the process environment if present
	/// 2. Read `path` if given, otherwise start from defaults
	/// 3. Apply `USERDASH_*` overrides
	pub fn load(path: Option<&Path>) -> Result<Self> {
		dotenv::dotenv().ok();

		let settings = match path {
			Some(path) => Self::from_file(path)?,
			None => Self::default(),
		};
		settings.apply_env(&Env::new())
	}

	/// Apply environment overrides
	///
	/// - `USERDASH_LOG_LEVEL` replaces `logging.level`
	/// - `USERDASH_MOCK_LATENCY_MS` sets every mock latency to one value
	/// - `USERDASH_DEFAULT_AVATAR` replaces `profile.default_avatar`
	pub fn apply_env<F>(mut self, env: &Env<F>) -> Result<Self>
	where
		F: Fn(&str) -> Option<String>,
	{
		if let Some(level) = env.str("LOG_LEVEL") {
			self.logging.level = level;
		}
		if let Some(ms) = env.u64("MOCK_LATENCY_MS")? {
			self.mock.latency = LatencySettings::uniform(ms);
		}
		if let Some(avatar) = env.str("DEFAULT_AVATAR") {
			self.profile.default_avatar = avatar;
		}
		Ok(self)
	}

	/// Serialize back to TOML
	pub fn to_toml_string(&self) -> Result<String> {
		toml::to_string_pretty(self).map_err(|e| Error::Config(e.to_string()))
	}
}
