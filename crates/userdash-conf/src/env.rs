//! Environment variable lookups with a shared prefix.

use std::env;
use userdash_core::{Error, Result};

/// Prefix of every variable read by [`crate::Settings::apply_env`].
pub const ENV_PREFIX: &str = "USERDASH_";

/// Environment reader with prefix support
///
/// The lookup function is injectable so settings can be tested without
/// touching the process environment.
pub struct Env<F = fn(&str) -> Option<String>> {
	prefix: String,
	lookup: F,
}

impl Env {
	/// Reads from the process environment with the `USERDASH_` prefix.
	pub fn new() -> Self {
		Self {
			prefix: ENV_PREFIX.to_string(),
			lookup: process_env,
		}
	}
}

fn process_env(key: &str) -> Option<String> {
	env::var(key).ok()
}

impl Default for Env {
	fn default() -> Self {
		Self::new()
	}
}

impl<F> Env<F>
where
	F: Fn(&str) -> Option<String>,
{
	/// Reads through `lookup` instead of the process environment.
	pub fn with_lookup(prefix: impl Into<String>, lookup: F) -> Self {
		Self {
			prefix: prefix.into(),
			lookup,
		}
	}

	fn key_name(&self, key: &str) -> String {
		format!("{}{}", self.prefix, key)
	}

	/// Read a string value; empty values count as unset.
	pub fn str(&self, key: &str) -> Option<String> {
		(self.lookup)(&self.key_name(key)).filter(|v| !v.is_empty())
	}

	/// Read an unsigned integer value.
	pub fn u64(&self, key: &str) -> Result<Option<u64>> {
		match self.str(key) {
			Some(val) => val.trim().parse::<u64>().map(Some).map_err(|e| {
				Error::Config(format!("{} must be an integer: {}", self.key_name(key), e))
			}),
			None => Ok(None),
		}
	}
}
