use crate::{
	ffi,
	test::{assert_rejected, gl21, test_harness},
};

#[test]
fn empty_control_points() {
	test_harness(gl21(), |context| {
		assert_rejected(context, || unsafe { super::map1d(ffi::MAP1_VERTEX_3, 0.0, 1.0, 3, 0, &[]) });
		assert_rejected(context, || unsafe { super::map1f(ffi::MAP1_VERTEX_3, 0.0, 1.0, 3, 0, &[]) });
		assert_rejected(context, || unsafe {
			super::map2f(ffi::MAP2_VERTEX_3, 0.0, 1.0, 3, 0, 0.0, 1.0, 3, 0, &[])
		});
		assert_rejected(context, || unsafe {
			super::map2d(ffi::MAP2_VERTEX_3, 0.0, 1.0, 3, 0, 0.0, 1.0, 3, 0, &[])
		});
	})
}

#[test]
fn empty_map_queries() {
	test_harness(gl21(), |context| {
		assert_rejected(context, || unsafe { super::get_mapdv(ffi::MAP1_VERTEX_3, ffi::ORDER, &mut []) });
		assert_rejected(context, || unsafe { super::get_mapfv(ffi::MAP1_VERTEX_3, ffi::ORDER, &mut []) });
		assert_rejected(context, || unsafe { super::get_mapiv(ffi::MAP1_VERTEX_3, ffi::ORDER, &mut []) });
	})
}
