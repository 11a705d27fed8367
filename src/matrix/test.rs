use crate::{
	ffi,
	mock::{Arg, Call},
	test::{gl21, test_harness},
};

#[test]
fn load_matrix() {
	test_harness(gl21(), |context| {
		let mut m = [0.0f32; 16];
		for (i, v) in m.iter_mut().enumerate() {
			*v = i as f32;
		}

		super::matrix_mode(ffi::PROJECTION);
		super::load_matrixf(&m);
		super::load_matrixd(&[1.0; 16]);

		assert_eq!(context.take_calls(), vec![
			Call::new("glMatrixMode", [Arg::Enum(ffi::PROJECTION)]),
			Call::new("glLoadMatrixf", [Arg::Floats((0..16).map(f64::from).collect())]),
			Call::new("glLoadMatrixd", [Arg::Floats(vec![1.0; 16])]),
		]);
	})
}
