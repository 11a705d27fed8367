use std::{
	panic::{catch_unwind, AssertUnwindSafe},
	ptr,
	sync::Mutex,
};

use crate::{
	mock::{self, Call, ErrorHandling, MockContextRef},
	version::{GlVersion, VersionType},
	InitError,
};

// tests can't run in parallel when they depend on global function pointers
static TEST_LOCK: Mutex<()> = Mutex::new(());

pub fn test_lock(f: impl FnOnce()) {
	let _lock = TEST_LOCK.lock().unwrap_or_else(|p| p.into_inner());
	f();
}

pub fn init_logger() {
	static INIT: Mutex<bool> = Mutex::new(false);
	let mut lock = INIT.lock().unwrap_or_else(|p| p.into_inner());
	if !*lock {
		let _ =
			env_logger::builder().filter_level(log::LevelFilter::Trace).is_test(true).try_init();
		*lock = true;
	}
}

pub fn gl21() -> GlVersion {
	GlVersion::from_version(VersionType::GL, 2, 1)
}

/// Runs `f` against a fresh mock context loaded through `init`, with the
/// calls `init` made already taken
pub fn test_harness(version: GlVersion, f: impl FnOnce(&MockContextRef)) {
	test_harness_handling(version, ErrorHandling::PanicOnFinalize { warn: true }, f)
}

pub fn test_harness_handling(
	version: GlVersion,
	error_handling: ErrorHandling,
	f: impl FnOnce(&MockContextRef),
) {
	test_lock(|| {
		init_logger();

		let context = mock::new(version, error_handling);
		crate::init(|s| context.get_proc_address(s)).expect("mock context failed to initialize");
		context.take_calls();

		f(&context);

		context.finalize();
	});
}

/// Asserts `f` panics without reaching any mocked entry point
pub fn assert_rejected(context: &MockContextRef, f: impl FnOnce()) {
	let before = context.calls().len();
	let result = catch_unwind(AssertUnwindSafe(f));
	assert!(result.is_err(), "call was not rejected");
	assert_eq!(context.calls().len(), before, "rejected call reached the driver");
}

/// Recorded calls, names only
pub fn names(calls: &[Call]) -> Vec<&'static str> {
	calls.iter().map(|c| c.name).collect()
}

#[test]
fn init_null_loader() {
	test_lock(|| {
		init_logger();
		let err = crate::init(|_| ptr::null()).unwrap_err();
		assert_eq!(err, InitError::NoGlVersion);
		assert_eq!(err.code(), 1);
	})
}

#[test]
fn init_gl_10() {
	test_lock(|| {
		init_logger();
		let context = mock::new(GlVersion::from_version(VersionType::GL, 1, 0), ErrorHandling::DoNotPanic);
		let err = crate::init(|s| context.get_proc_address(s)).unwrap_err();
		assert!(matches!(err, InitError::GlVersion10Only(_)));
		assert_eq!(err.code(), 2);
		context.finalize();
	})
}

#[test]
fn init_legacy_extension_string() {
	test_lock(|| {
		init_logger();
		let context = mock::new(gl21(), ErrorHandling::PanicOnFinalize { warn: true });
		let version = crate::init(|s| context.get_proc_address(s)).unwrap();

		assert_eq!((version.ty, version.major, version.minor), (VersionType::GL, 2, 1));
		assert!(version.is_supported("GL_VERSION_2_0 GL_ARB_vertex_buffer_object"));
		assert!(version.extensions.iter().any(|e| e == "GL_ARB_shader_objects"));
		assert!(!names(&context.calls()).contains(&"glGetStringi"));
		context.finalize();
	})
}

#[test]
fn init_indexed_extensions() {
	test_lock(|| {
		init_logger();
		let context = mock::new(
			GlVersion::from_version(VersionType::GL, 3, 3),
			ErrorHandling::PanicOnFinalize { warn: true },
		);
		let version = crate::init(|s| context.get_proc_address(s)).unwrap();

		assert_eq!(version.extensions, context.gl_version().extensions);
		let calls = names(&context.take_calls());
		assert_eq!(calls.iter().filter(|&&c| c == "glGetStringi").count(), version.extensions.len());
		assert!(calls.contains(&"glGetIntegerv"));
		context.finalize();
	})
}

#[test]
fn init_es() {
	test_lock(|| {
		init_logger();
		let context = mock::new(
			GlVersion::from_version(VersionType::ES, 3, 2),
			ErrorHandling::PanicOnFinalize { warn: true },
		);
		let version = crate::init(|s| context.get_proc_address(s)).unwrap();
		assert_eq!((version.ty, version.major, version.minor), (VersionType::ES, 3, 2));
		assert!(version.is_supported("GL_ES_VERSION_3_0"));
		context.finalize();
	})
}
