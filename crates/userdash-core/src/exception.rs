//! Crate-level error type.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised outside the controllers' own failure states.
///
/// Controllers never return these; they convert collaborator failures into
/// observable state instead. This type covers configuration loading.
#[derive(Debug, Error)]
pub enum Error {
	/// Reading a configuration file failed
	#[error("Failed to read {path}: {source}")]
	Io {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	/// A configuration document could not be parsed
	#[error("Invalid configuration: {0}")]
	Config(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl From<toml::de::Error> for Error {
	fn from(error: toml::de::Error) -> Self {
		Error::Config(error.to_string())
	}
}
