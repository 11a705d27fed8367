use crate::{
	ffi,
	mock::{Arg, Call},
	test::{assert_rejected, gl21, test_harness},
};

#[test]
fn read_pixels_writes_client_memory() {
	test_harness(gl21(), |context| {
		let mut pixels = vec![0u8; 2 * 2 * 4];
		let addr = pixels.as_ptr() as usize;
		unsafe { super::read_pixels(0, 0, 2, 2, ffi::RGBA, ffi::UNSIGNED_BYTE, &mut pixels) };

		assert!(pixels.iter().all(|&p| p == 0xff));
		assert_eq!(context.take_calls(), vec![Call::new("glReadPixels", [
			Arg::Int(0),
			Arg::Int(0),
			Arg::Int(2),
			Arg::Int(2),
			Arg::Enum(ffi::RGBA),
			Arg::Enum(ffi::UNSIGNED_BYTE),
			Arg::Ptr(addr),
		])]);
	})
}

#[test]
fn read_pixels_empty() {
	test_harness(gl21(), |context| {
		let mut pixels: Vec<u8> = Vec::new();
		assert_rejected(context, || unsafe {
			super::read_pixels(0, 0, 0, 0, ffi::RGBA, ffi::UNSIGNED_BYTE, &mut pixels)
		});
	})
}

#[test]
fn empty_pixel_maps() {
	test_harness(gl21(), |context| {
		assert_rejected(context, || unsafe { super::get_pixel_mapfv(ffi::PIXEL_MAP_R_TO_R, &mut []) });
		assert_rejected(context, || unsafe { super::get_pixel_mapuiv(ffi::PIXEL_MAP_I_TO_I, &mut []) });
		assert_rejected(context, || unsafe { super::get_pixel_mapusv(ffi::PIXEL_MAP_S_TO_S, &mut []) });
	})
}
