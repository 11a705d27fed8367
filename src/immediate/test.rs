use crate::{
	ffi,
	mock::{Arg, Call},
	test::{gl21, test_harness},
};

#[test]
fn triangle() {
	test_harness(gl21(), |context| {
		super::begin(ffi::TRIANGLES);
		super::color3f(1.0, 0.5, 0.0);
		super::vertex3fv(&[0.0, 1.0, 0.0]);
		super::color4ubv(&[255, 128, 0, 1]);
		super::vertex2i(-1, -1);
		super::end();

		assert_eq!(context.take_calls(), vec![
			Call::new("glBegin", [Arg::Enum(ffi::TRIANGLES)]),
			Call::new("glColor3f", [Arg::Float(1.0), Arg::Float(0.5), Arg::Float(0.0)]),
			Call::new("glVertex3fv", [Arg::Floats(vec![0.0, 1.0, 0.0])]),
			Call::new("glColor4ubv", [Arg::Uints(vec![255, 128, 0, 1])]),
			Call::new("glVertex2i", [Arg::Int(-1), Arg::Int(-1)]),
			Call::new("glEnd", Vec::new()),
		]);
	})
}

#[test]
fn edge_flagv_empty() {
	test_harness(gl21(), |context| {
		super::edge_flagv(&[]);
		assert!(context.take_calls().is_empty());
	})
}

#[test]
fn edge_flagv_first() {
	test_harness(gl21(), |context| {
		super::edge_flagv(&[true, false]);
		super::edge_flagv(&[false]);

		assert_eq!(context.take_calls(), vec![
			Call::new("glEdgeFlagv", [Arg::Uint(1)]),
			Call::new("glEdgeFlagv", [Arg::Uint(0)]),
		]);
	})
}

#[test]
fn rect_corners() {
	test_harness(gl21(), |context| {
		super::rectiv(&[0, 0], &[64, 32]);

		assert_eq!(context.take_calls(), vec![Call::new("glRectiv", [
			Arg::Ints(vec![0, 0]),
			Arg::Ints(vec![64, 32]),
		])]);
	})
}
