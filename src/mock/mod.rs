//! In-process fake OpenGL context.
//!
//! Hand [`MockContextRef::get_proc_address`] to [`crate::init`] and the
//! bindings call into this module instead of a driver. Every call that
//! reaches a mocked entry point is recorded, and misuse of texture and buffer
//! objects is logged with the backtrace of the offending call.
//!
//! Mocked entry points sit behind an `extern "system"` boundary and never
//! unwind; errors are latched and reported by [`MockContextRef::finalize`].

use std::{
	collections::{HashMap, HashSet},
	ffi::CString,
	marker::PhantomData,
	ops::{Deref, DerefMut},
	sync::{Mutex, MutexGuard},
	thread::{self, ThreadId},
};

mod function_mapping;
mod functions;
mod log;
pub mod objects;

#[cfg(test)]
mod test;

use self::objects::{BufferTarget, ObjectManager, TextureTarget};
use crate::{
	ffi,
	types::{GLboolean, GLenum, GLuint},
	version::{GlVersion, VersionType},
};

static INSTANCE: Mutex<Option<MockContextData>> = Mutex::new(None);
static META: Mutex<Option<MockContextMetadata>> = Mutex::new(None);

pub enum ErrorHandling {
	/// Panic on finalize if any errors occured during the context's lifetime
	///
	/// * `warn` - warnings count as errors
	PanicOnFinalize {
		warn: bool,
	},
	DoNotPanic,
}

pub fn new(version: GlVersion, error_handling: ErrorHandling) -> MockContextRef {
	if INSTANCE.lock().unwrap_or_else(|p| p.into_inner()).is_some() {
		panic!("Only one MockContext can exist at a time");
	}

	*META.lock().unwrap_or_else(|p| p.into_inner()) = Some(MockContextMetadata {
		thread: thread::current().id(),
		any_errors: false,
		any_warnings: false,
		error_handling,
	});

	*INSTANCE.lock().unwrap_or_else(|p| p.into_inner()) = Some(MockContextData::new(version));

	MockContextRef(PhantomData)
}

/// Argument as it arrived at a mocked entry point
#[derive(Clone, Debug, PartialEq)]
pub enum Arg {
	Enum(GLenum),
	Int(i64),
	Uint(u64),
	Float(f64),
	Ints(Vec<i64>),
	Uints(Vec<u64>),
	Floats(Vec<f64>),
	Ptr(usize),
	Str(String),
}

#[derive(Clone, Debug, PartialEq)]
pub struct Call {
	pub name: &'static str,
	pub args: Vec<Arg>,
}

impl Call {
	pub fn new(name: &'static str, args: impl Into<Vec<Arg>>) -> Self {
		Self { name, args: args.into() }
	}
}

struct MockContextMetadata {
	thread: ThreadId,
	error_handling: ErrorHandling,
	any_errors: bool,
	any_warnings: bool,
}

/// Strings handed out by `glGetString`, alive as long as the context
struct Strings {
	vendor: CString,
	renderer: CString,
	version: CString,
	extensions: CString,
	extension_list: Vec<CString>,
}

impl Strings {
	fn new(version: &GlVersion) -> Self {
		let version_str = match version.ty {
			VersionType::GL => format!("{}.{}.0 classic-gl mock", version.major, version.minor),
			VersionType::ES => format!("OpenGL ES {}.{} classic-gl mock", version.major, version.minor),
		};

		Self {
			vendor: CString::new("classic-gl").unwrap_or_default(),
			renderer: CString::new("mock context").unwrap_or_default(),
			version: CString::new(version_str).unwrap_or_default(),
			extensions: CString::new(version.extensions.join(" ")).unwrap_or_default(),
			extension_list: version
				.extensions
				.iter()
				.map(|e| CString::new(e.as_str()).unwrap_or_default())
				.collect(),
		}
	}
}

struct MockContextData {
	gl_version: GlVersion,
	strings: Strings,
	error: GLenum,
	calls: Vec<Call>,
	enabled: HashSet<GLenum>,
	clear_color: [f32; 4],
	color_mask: [GLboolean; 4],
	lists: HashSet<GLuint>,
	next_list: GLuint,
	locations: HashMap<String, i32>,
	textures: ObjectManager<TextureTarget>,
	buffers: ObjectManager<BufferTarget>,
}

impl MockContextData {
	fn new(gl_version: GlVersion) -> Self {
		Self {
			strings: Strings::new(&gl_version),
			gl_version,
			error: ffi::NO_ERROR,
			calls: Vec::new(),
			enabled: HashSet::new(),
			clear_color: [0.0; 4],
			color_mask: [ffi::TRUE; 4],
			lists: HashSet::new(),
			next_list: 1,
			locations: HashMap::new(),
			textures: ObjectManager::new("texture"),
			buffers: ObjectManager::new("buffer"),
		}
	}

	fn record(&mut self, name: &'static str, args: impl Into<Vec<Arg>>) {
		let call = Call::new(name, args);
		::log::trace!(target: "classic-gl-mock", "{}{:?}", call.name, call.args);
		self.calls.push(call);
	}

	/// Latches `error` until the next `glGetError`, keeping the first one
	fn set_error(&mut self, error: GLenum) {
		if self.error == ffi::NO_ERROR {
			self.error = error;
		}
	}
}

/// Handle to the active mock context; the context lives until `finalize`
/// or drop.
pub struct MockContextRef(PhantomData<()>);

impl MockContextRef {
	/// Log dangling objects and tear the context down
	pub fn finalize(self) {
		let data = INSTANCE.lock().unwrap_or_else(|p| p.into_inner()).take();
		if let Some(MockContextData { textures, buffers, .. }) = data {
			textures.finalize();
			buffers.finalize();
		}

		let should_panic = {
			let m = meta();
			match m.error_handling {
				ErrorHandling::PanicOnFinalize { warn } => m.any_errors || (warn && m.any_warnings),
				ErrorHandling::DoNotPanic => false,
			}
		};

		*META.lock().unwrap_or_else(|p| p.into_inner()) = None;

		if should_panic {
			panic!("classic-gl mock: errors occured in context");
		}
	}

	/// Calls recorded since creation or the last `take_calls`
	pub fn calls(&self) -> Vec<Call> {
		context().calls.clone()
	}

	pub fn take_calls(&self) -> Vec<Call> {
		std::mem::take(&mut context().calls)
	}

	/// Contents last uploaded to buffer object `name`
	pub fn buffer_contents(&self, name: GLuint) -> Option<Vec<u8>> {
		context().buffers.storage(name).map(<[u8]>::to_vec)
	}

	pub fn gl_version(&self) -> GlVersion {
		context().gl_version.clone()
	}
}

struct MockDataRef<'a>(MutexGuard<'a, Option<MockContextData>>);
struct MockMetaRef<'a>(MutexGuard<'a, Option<MockContextMetadata>>);

fn context<'a>() -> MockDataRef<'a> {
	MockDataRef(INSTANCE.lock().unwrap_or_else(|p| p.into_inner()))
}

fn meta<'a>() -> MockMetaRef<'a> {
	MockMetaRef(META.lock().unwrap_or_else(|p| p.into_inner()))
}

// a failed check below aborts when it happens inside a mocked entry point
impl Deref for MockDataRef<'_> {
	type Target = MockContextData;

	fn deref(&self) -> &Self::Target {
		let context = self.0.as_ref().expect("classic-gl mock: no context");

		if thread::current().id() != meta().thread {
			panic!("classic-gl mock: context accessed off-thread");
		}

		context
	}
}

impl DerefMut for MockDataRef<'_> {
	fn deref_mut(&mut self) -> &mut Self::Target {
		let context = self.0.as_mut().expect("classic-gl mock: no context");

		if thread::current().id() != meta().thread {
			panic!("classic-gl mock: context accessed off-thread");
		}

		context
	}
}

impl Deref for MockMetaRef<'_> {
	type Target = MockContextMetadata;

	fn deref(&self) -> &Self::Target {
		self.0.as_ref().expect("classic-gl mock: no context")
	}
}

impl DerefMut for MockMetaRef<'_> {
	fn deref_mut(&mut self) -> &mut Self::Target {
		self.0.as_mut().expect("classic-gl mock: no context")
	}
}

impl Drop for MockContextRef {
	fn drop(&mut self) {
		// finalize should be called if there was no panic,
		// but in case of a panic, this should clean it up
		if META.lock().unwrap_or_else(|p| p.into_inner()).is_some() {
			::log::warn!(
				target: "classic-gl-mock",
				"MockContextRef dropped without calling finalize - dangling objects will be ignored"
			);
		}

		*META.lock().unwrap_or_else(|p| p.into_inner()) = None;
		*INSTANCE.lock().unwrap_or_else(|p| p.into_inner()) = None;
	}
}
