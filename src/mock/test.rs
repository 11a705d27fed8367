use std::{panic::catch_unwind, ptr};

use super::{log::error, Arg, Call, ErrorHandling, MockContextRef};
use crate::{
	ffi,
	test::{gl21, init_logger, test_harness, test_harness_handling, test_lock},
	types::GLuint,
	version::{GlVersion, VersionType},
};

fn mk_context() -> MockContextRef {
	super::new(GlVersion::clear(), ErrorHandling::PanicOnFinalize { warn: true })
}

#[test]
#[should_panic]
fn max_one_context() {
	init_logger();
	test_lock(|| {
		let _ctx1 = mk_context();
		let _ctx2 = mk_context();
	})
}

#[test]
fn multiple_contexts() {
	init_logger();
	test_lock(|| {
		let ctx1 = mk_context();
		ctx1.finalize();
		let ctx2 = mk_context();
		ctx2.finalize();
	})
}

#[test]
fn panic_on_finalize() {
	init_logger();
	test_lock(|| {
		let late_panic = catch_unwind(|| {
			let ctx = mk_context();
			let instant = catch_unwind(|| error!("this should not panic"));
			assert!(instant.is_ok(), "paniced on error");
			ctx.finalize();
		})
		.is_err();
		assert!(late_panic, "did not panic with logged error");
	})
}

#[test]
fn do_not_panic() {
	init_logger();
	test_lock(|| {
		let ctx = super::new(GlVersion::clear(), ErrorHandling::DoNotPanic);
		error!("logged and ignored");
		ctx.finalize();
	})
}

#[test]
fn unmocked_functions_are_null() {
	test_lock(|| {
		let ctx = mk_context();
		assert!(ctx.get_proc_address("glMultiDrawElementsIndirectCount").is_null());
		assert!(!ctx.get_proc_address("glGenTextures").is_null());
		assert!(!ctx.get_proc_address("glColor3f").is_null());
		ctx.finalize();
	})
}

#[test]
fn strings() {
	test_harness(GlVersion::from_version(VersionType::ES, 3, 0), |_| {
		assert_eq!(crate::get_string(ffi::VERSION), "OpenGL ES 3.0 classic-gl mock");
		assert_eq!(crate::get_string(ffi::VENDOR), "classic-gl");
		assert_eq!(crate::get_stringi(ffi::EXTENSIONS, 0), "GL_ARB_texture_cube_map");
	})
}

#[test]
fn error_latch() {
	test_harness_handling(gl21(), ErrorHandling::DoNotPanic, |_| unsafe {
		ffi::GetStringi(ffi::VENDOR, 0);
		ffi::GetStringi(ffi::EXTENSIONS, 1000);
		assert_eq!(crate::get_error(), ffi::INVALID_ENUM);
		assert_eq!(crate::get_error(), ffi::NO_ERROR);
	});
}

#[test]
fn create_destroy() {
	test_harness(gl21(), |_| unsafe {
		let mut buffer = 0;
		ffi::GenBuffers(1, &mut buffer);
		ffi::DeleteBuffers(1, &buffer);
	})
}

#[test]
#[should_panic]
fn dangling() {
	test_harness(gl21(), |_| unsafe {
		let mut buffer = 0;
		ffi::GenBuffers(1, &mut buffer);
	})
}

#[test]
#[should_panic]
fn double_free() {
	test_harness(gl21(), |_| unsafe {
		let mut texture = 0;
		ffi::GenTextures(1, &mut texture);
		ffi::DeleteTextures(1, &texture);
		ffi::DeleteTextures(1, &texture);
	})
}

#[test]
#[should_panic]
fn invalid_free() {
	test_harness(gl21(), |_| unsafe {
		let buffer = 42;
		ffi::DeleteBuffers(1, &buffer);
	})
}

#[test]
#[should_panic]
fn gen_negative() {
	test_harness(gl21(), |_| unsafe {
		ffi::GenTextures(-1, ptr::null_mut());
	})
}

#[test]
fn delete_zero_ignored() {
	test_harness(gl21(), |_| unsafe {
		ffi::DeleteTextures(1, &0);
	})
}

#[test]
fn bindings() {
	test_harness(gl21(), |_| unsafe {
		let mut textures: [GLuint; 2] = [0; 2];
		ffi::GenTextures(2, textures.as_mut_ptr());
		ffi::BindTexture(ffi::TEXTURE_2D, textures[1]);

		let mut bound = 0;
		ffi::GetIntegerv(ffi::TEXTURE_BINDING_2D, &mut bound);
		assert_eq!(bound as GLuint, textures[1]);

		// deleting a bound texture reverts the binding to 0
		ffi::DeleteTextures(2, textures.as_ptr());
		ffi::GetIntegerv(ffi::TEXTURE_BINDING_2D, &mut bound);
		assert_eq!(bound, 0);
	})
}

#[test]
#[should_panic]
fn target_requires_version() {
	test_harness(gl21(), |_| unsafe {
		let mut texture = 0;
		ffi::GenTextures(1, &mut texture);
		ffi::BindTexture(ffi::TEXTURE_2D_ARRAY, texture);
		ffi::DeleteTextures(1, &texture);
	})
}

#[test]
#[should_panic]
fn bind_unallocated() {
	test_harness(gl21(), |_| unsafe {
		ffi::BindBuffer(ffi::ARRAY_BUFFER, 7);
	})
}

#[test]
fn buffer_storage() {
	test_harness(gl21(), |context| unsafe {
		let mut buffer = 0;
		ffi::GenBuffers(1, &mut buffer);
		ffi::BindBuffer(ffi::ARRAY_BUFFER, buffer);

		let data = [1u8, 2, 3, 4];
		ffi::BufferData(ffi::ARRAY_BUFFER, 4, data.as_ptr().cast(), ffi::STATIC_DRAW);
		ffi::BufferSubData(ffi::ARRAY_BUFFER, 1, 2, [9u8, 9].as_ptr().cast());
		assert_eq!(context.buffer_contents(buffer), Some(vec![1, 9, 9, 4]));

		ffi::DeleteBuffers(1, &buffer);
		assert_eq!(context.buffer_contents(buffer), None);
	})
}

#[test]
fn recorded_calls() {
	test_harness(gl21(), |context| unsafe {
		ffi::Begin(ffi::TRIANGLES);
		ffi::Vertex2i(1, -2);
		ffi::End();

		assert_eq!(context.take_calls(), vec![
			Call::new("glBegin", [Arg::Enum(ffi::TRIANGLES)]),
			Call::new("glVertex2i", [Arg::Int(1), Arg::Int(-2)]),
			Call::new("glEnd", Vec::new()),
		]);
		assert!(context.calls().is_empty());
	})
}
