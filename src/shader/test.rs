use crate::{
	mock::{Arg, Call},
	test::{assert_rejected, gl21, test_harness},
};

#[test]
fn names_forwarded() {
	test_harness(gl21(), |context| {
		assert_eq!(super::get_uniform_location(3, "tint"), 0);
		assert_eq!(super::get_uniform_location(3, "offset"), 1);
		assert_eq!(super::get_uniform_location(3, "tint"), 0);
		assert_eq!(super::get_attrib_location(3, "gl_Vertex"), -1);
		super::bind_attrib_location(3, 2, "normal");

		assert_eq!(context.take_calls(), vec![
			Call::new("glGetUniformLocation", [Arg::Uint(3), Arg::Str("tint".to_owned())]),
			Call::new("glGetUniformLocation", [Arg::Uint(3), Arg::Str("offset".to_owned())]),
			Call::new("glGetUniformLocation", [Arg::Uint(3), Arg::Str("tint".to_owned())]),
			Call::new("glGetAttribLocation", [Arg::Uint(3), Arg::Str("gl_Vertex".to_owned())]),
			Call::new("glBindAttribLocation", [Arg::Uint(3), Arg::Uint(2), Arg::Str("normal".to_owned())]),
		]);
	})
}

#[test]
fn interior_nul() {
	test_harness(gl21(), |context| {
		assert_rejected(context, || {
			super::get_uniform_location(3, "ti\0nt");
		});
		assert_rejected(context, || super::bind_attrib_location(3, 0, "\0"));
	})
}
