//! OpenGL compatibility profile bindings with checked parameter marshaling.
//!
//! Every function forwards to the GL entry point of the same name
//! (`glColor3fv` is [`color3fv`]) after converting slices, arrays and
//! booleans into the native shapes. Call [`init`] with the context's
//! proc-address function once a context is current.
//!
//! All calls assume a GL context is current on the calling thread. Buffers
//! are length-checked where GL fixes the length. Where the length follows
//! from other arguments or from GL state, the function is `unsafe` and its
//! `# Safety` section names the size the caller has to provide.

use std::ffi::c_void;

pub mod error;
pub mod ffi;
pub mod marshal;
pub mod types;
pub mod version;

mod arrays;
mod buffer;
mod eval;
mod immediate;
mod lighting;
mod lists;
mod matrix;
mod pixels;
mod query;
mod shader;
mod state;
mod texture;

#[cfg(any(test, feature = "mock"))]
pub mod mock;

#[cfg(test)]
mod test;

pub use self::{
	arrays::*,
	buffer::*,
	error::{InitError, StringError},
	eval::*,
	ffi::*,
	immediate::*,
	lighting::*,
	lists::*,
	marshal::{from_gl_bool, from_gl_string, gl_bool, to_gl_string, Data, DataMut, Element, Plain},
	matrix::*,
	pixels::*,
	query::*,
	shader::*,
	state::*,
	texture::*,
	types::*,
	version::{GlExtension, GlVersion, VersionType},
};
use self::{marshal::from_gl_string as copy_string, version::at_least};

/// Resolves every entry point through `loader` and detects the context
/// version, like `glewInit`.
///
/// Requires a current context; without one the version query fails with
/// [`InitError::NoGlVersion`].
pub fn init<F>(loader: F) -> Result<GlVersion, InitError>
where
	F: FnMut(&'static str) -> *const c_void,
{
	ffi::load_with(loader);

	if !ffi::GetString::is_loaded() {
		return Err(InitError::NoGlVersion)
	}

	let Some(version_str) = (unsafe { copy_string(ffi::GetString(ffi::VERSION)) }) else {
		return Err(InitError::NoGlVersion)
	};

	let mut version = GlVersion::parse(&version_str)
		.ok_or_else(|| InitError::UnrecognizedVersion(version_str.clone()))?;

	if version.ty == VersionType::GL && (version.major, version.minor) == (1, 0) {
		return Err(InitError::GlVersion10Only(version_str))
	}

	version.extensions = driver_extensions(&version);

	log::info!(target: "classic-gl", "detected {} ({})", version, version_str);
	log::debug!(target: "classic-gl", "driver reports {} extension(s)", version.extensions.len());

	Ok(version)
}

fn driver_extensions(version: &GlVersion) -> Vec<String> {
	let indexed = at_least!(version, gl: 3 . 0, es: 3 . 0)
		&& ffi::GetStringi::is_loaded()
		&& ffi::GetIntegerv::is_loaded();

	if indexed {
		let mut count = 0;
		unsafe { ffi::GetIntegerv(ffi::NUM_EXTENSIONS, &mut count) };

		(0..count.max(0) as GLuint)
			.filter_map(|i| unsafe { copy_string(ffi::GetStringi(ffi::EXTENSIONS, i)) })
			.collect()
	} else {
		unsafe { copy_string(ffi::GetString(ffi::EXTENSIONS)) }
			.map(|list| list.split_whitespace().map(str::to_owned).collect())
			.unwrap_or_default()
	}
}
