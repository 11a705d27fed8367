use thiserror::Error;

use crate::types::GLenum;

/// Failure to bring up the entry points, mirroring the GLEW status codes
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InitError {
	#[error("no GL version available, is a context current on this thread?")]
	NoGlVersion,
	#[error("OpenGL 1.1 or later is required, driver reports {0:?}")]
	GlVersion10Only(String),
	#[error("unrecognized GL version string {0:?}")]
	UnrecognizedVersion(String),
}

impl InitError {
	/// Numeric status as `glewInit` would have returned it
	pub fn code(&self) -> GLenum {
		match self {
			InitError::NoGlVersion | InitError::UnrecognizedVersion(_) => 1,
			InitError::GlVersion10Only(_) => 2,
		}
	}
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StringError {
	#[error("string {0:?} contains an interior NUL byte")]
	InteriorNul(String),
}
