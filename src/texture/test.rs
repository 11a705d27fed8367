use super::Texture;
use crate::{
	ffi,
	mock::{Arg, Call},
	test::{assert_rejected, gl21, names, test_harness},
};

#[test]
fn generate_bind_delete() {
	test_harness(gl21(), |context| {
		let mut textures = [Texture::default(); 4];
		super::gen_textures(&mut textures);
		assert_eq!(textures, [Texture(1), Texture(2), Texture(3), Texture(4)]);

		textures[0].bind(ffi::TEXTURE_2D);
		textures[0].unbind(ffi::TEXTURE_2D);
		super::delete_textures(&textures);

		assert_eq!(context.take_calls(), vec![
			Call::new("glGenTextures", [Arg::Int(4)]),
			Call::new("glBindTexture", [Arg::Enum(ffi::TEXTURE_2D), Arg::Uint(1)]),
			Call::new("glBindTexture", [Arg::Enum(ffi::TEXTURE_2D), Arg::Uint(0)]),
			Call::new("glDeleteTextures", [Arg::Int(4), Arg::Uints(vec![1, 2, 3, 4])]),
		]);
	})
}

#[test]
fn single_texture() {
	test_harness(gl21(), |context| {
		let texture = super::gen_texture();
		assert_ne!(texture.id(), 0);
		assert!(super::is_texture(texture));

		super::bind_texture(ffi::TEXTURE_1D, texture);
		texture.delete();
		assert!(!super::is_texture(texture));

		assert_eq!(names(&context.take_calls()), vec![
			"glGenTextures",
			"glIsTexture",
			"glBindTexture",
			"glDeleteTextures",
			"glIsTexture",
		]);
	})
}

#[test]
fn empty_slices_do_nothing() {
	test_harness(gl21(), |context| {
		super::gen_textures(&mut []);
		super::delete_textures(&[]);
		super::prioritize_textures(&[], &[]);
		assert!(!super::are_textures_resident(&[], &mut []));
		assert!(context.take_calls().is_empty());
	})
}

#[test]
fn residency() {
	test_harness(gl21(), |context| {
		let mut textures = [Texture::default(); 2];
		super::gen_textures(&mut textures);

		let mut residences = [false; 2];
		assert!(super::are_textures_resident(&textures, &mut residences));
		// all resident: the status array is left alone
		assert_eq!(residences, [false, false]);

		let mut residences = [false; 3];
		assert!(!super::are_textures_resident(&[textures[1], Texture(99), textures[0]], &mut residences));
		assert_eq!(residences, [true, false, true]);

		assert_rejected(context, || {
			super::are_textures_resident(&textures, &mut [false; 1]);
		});

		super::delete_textures(&textures);
	})
}

#[test]
fn priorities() {
	test_harness(gl21(), |context| {
		assert_rejected(context, || super::prioritize_textures(&[Texture(1), Texture(2)], &[1.0]));

		super::prioritize_textures(&[Texture(1), Texture(2)], &[1.0, 0.5]);
		assert_eq!(context.take_calls(), vec![Call::new("glPrioritizeTextures", [
			Arg::Int(2),
			Arg::Uints(vec![1, 2]),
			Arg::Floats(vec![1.0, 0.5]),
		])]);
	})
}

#[test]
fn tex_env_lengths() {
	test_harness(gl21(), |context| {
		assert_rejected(context, || super::tex_envfv(ffi::TEXTURE_ENV, ffi::TEXTURE_ENV_COLOR, &[0.0; 2]));
		assert_rejected(context, || super::tex_envfv(ffi::TEXTURE_ENV, ffi::TEXTURE_ENV_COLOR, &[0.0; 3]));
		assert_rejected(context, || super::tex_envfv(ffi::TEXTURE_ENV, ffi::TEXTURE_ENV_COLOR, &[0.0]));
		assert_rejected(context, || super::tex_enviv(ffi::TEXTURE_ENV, ffi::TEXTURE_ENV_MODE, &[]));
		assert_rejected(context, || super::tex_enviv(ffi::TEXTURE_ENV, ffi::TEXTURE_ENV_MODE, &[0; 5]));

		let mode = ffi::MODULATE as i32;
		super::tex_envfv(ffi::TEXTURE_ENV, ffi::TEXTURE_ENV_COLOR, &[1.0, 0.0, 0.0, 1.0]);
		super::tex_enviv(ffi::TEXTURE_ENV, ffi::TEXTURE_ENV_MODE, &[mode]);
		super::tex_enviv(ffi::TEXTURE_ENV, ffi::TEXTURE_ENV_MODE, &[mode, 0, 0, 0]);

		assert_eq!(context.take_calls(), vec![
			Call::new("glTexEnvfv", [
				Arg::Enum(ffi::TEXTURE_ENV),
				Arg::Enum(ffi::TEXTURE_ENV_COLOR),
				Arg::Floats(vec![1.0, 0.0, 0.0, 1.0]),
			]),
			Call::new("glTexEnviv", [
				Arg::Enum(ffi::TEXTURE_ENV),
				Arg::Enum(ffi::TEXTURE_ENV_MODE),
				Arg::Ints(vec![mode as i64]),
			]),
			Call::new("glTexEnviv", [
				Arg::Enum(ffi::TEXTURE_ENV),
				Arg::Enum(ffi::TEXTURE_ENV_MODE),
				Arg::Ints(vec![mode as i64]),
			]),
		]);
	})
}

#[test]
fn tex_parameters() {
	test_harness(gl21(), |context| {
		assert_rejected(context, || {
			super::tex_parameterfv(ffi::TEXTURE_2D, ffi::TEXTURE_BORDER_COLOR, &[0.0; 3])
		});
		assert_rejected(context, || super::tex_genfv(ffi::S, ffi::OBJECT_PLANE, &[1.0, 0.0]));
		assert_rejected(context, || {
			super::get_tex_parameteriv(ffi::TEXTURE_2D, ffi::TEXTURE_SWIZZLE_RGBA, &mut [0; 3])
		});
		assert_rejected(context, || {
			super::get_tex_level_parameterfv(ffi::TEXTURE_2D, 0, ffi::TEXTURE_WIDTH, &mut [])
		});

		super::tex_parameteri(ffi::TEXTURE_2D, ffi::TEXTURE_MIN_FILTER, ffi::LINEAR as i32);
		super::tex_parameterfv(ffi::TEXTURE_2D, ffi::TEXTURE_BORDER_COLOR, &[0.0, 0.0, 0.0, 1.0]);
		super::tex_genfv(ffi::S, ffi::OBJECT_PLANE, &[1.0, 0.0, 0.0, 0.0]);

		assert_eq!(context.take_calls(), vec![
			Call::new("glTexParameteri", [
				Arg::Enum(ffi::TEXTURE_2D),
				Arg::Enum(ffi::TEXTURE_MIN_FILTER),
				Arg::Int(ffi::LINEAR as i64),
			]),
			Call::new("glTexParameterfv", [
				Arg::Enum(ffi::TEXTURE_2D),
				Arg::Enum(ffi::TEXTURE_BORDER_COLOR),
				Arg::Floats(vec![0.0, 0.0, 0.0, 1.0]),
			]),
			Call::new("glTexGenfv", [
				Arg::Enum(ffi::S),
				Arg::Enum(ffi::OBJECT_PLANE),
				Arg::Floats(vec![1.0, 0.0, 0.0, 0.0]),
			]),
		]);
	})
}

#[test]
fn tex_image_sources() {
	test_harness(gl21(), |context| {
		let pixels = [0u8; 4 * 4 * 4];
		unsafe {
			super::tex_image2d(ffi::TEXTURE_2D, 0, ffi::RGBA as i32, 4, 4, 0, ffi::RGBA, ffi::UNSIGNED_BYTE, &pixels);
			super::tex_image2d(
				ffi::TEXTURE_2D,
				1,
				ffi::RGBA as i32,
				2,
				2,
				0,
				ffi::RGBA,
				ffi::UNSIGNED_BYTE,
				crate::Data::Null,
			);
		}

		let pointers: Vec<_> = context
			.take_calls()
			.into_iter()
			.map(|call| call.args.last().cloned())
			.collect();
		assert_eq!(pointers, vec![Some(Arg::Ptr(pixels.as_ptr() as usize)), Some(Arg::Ptr(0))]);

		let empty: &[u8] = &[];
		assert_rejected(context, || unsafe {
			super::tex_image2d(ffi::TEXTURE_2D, 0, ffi::RGBA as i32, 0, 0, 0, ffi::RGBA, ffi::UNSIGNED_BYTE, empty)
		});
	})
}
