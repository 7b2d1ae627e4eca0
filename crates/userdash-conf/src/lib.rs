//! Configuration for userdash.
//!
//! Settings come from an optional TOML file, then `USERDASH_*` environment
//! variables (including those in a `.env` file) override selected keys.
//!
//! ```no_run
//! use userdash_conf::Settings;
//!
//! let settings = Settings::load(Some("userdash.toml".as_ref())).unwrap();
//! println!("log level: {}", settings.logging.level);
//! ```

pub mod env;
pub mod settings;

pub use env::{ENV_PREFIX, Env};
pub use settings::{
	DEFAULT_AVATAR_URL, LatencySettings, LoggingSettings, MockSettings, ProfileSettings,
	SeedAccount, Settings,
};
