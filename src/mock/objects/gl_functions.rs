use std::{ffi::c_void, slice};

use crate::{
	ffi,
	mock::{context, function_mapping::gl_functions, log::error, Arg},
	types::{GLboolean, GLenum, GLsizei, GLsizeiptr, GLuint},
};

fn uints(names: &[GLuint]) -> Arg {
	Arg::Uints(names.iter().map(|&n| n as u64).collect())
}

gl_functions! {
	fn glGenTextures(count: GLsizei, textures: *mut GLuint) {
		let mut ctx = context();
		let ctx = &mut *ctx;
		ctx.record("glGenTextures", [Arg::Int(count as i64)]);

		if count < 0 {
			ctx.set_error(ffi::INVALID_VALUE);
			error!("glGenTextures called with invalid texture count {}", count);
		} else if count > 0 {
			ctx.textures.gen(slice::from_raw_parts_mut(textures, count as usize));
		}
	}

	fn glDeleteTextures(count: GLsizei, textures: *const GLuint) {
		let mut ctx = context();
		let ctx = &mut *ctx;

		if count < 0 {
			ctx.record("glDeleteTextures", [Arg::Int(count as i64)]);
			ctx.set_error(ffi::INVALID_VALUE);
			error!("glDeleteTextures called with invalid texture count {}", count);
		} else {
			let names = match count {
				0 => &[][..],
				_ => slice::from_raw_parts(textures, count as usize),
			};
			ctx.record("glDeleteTextures", [Arg::Int(count as i64), uints(names)]);
			ctx.textures.free(names);
		}
	}

	fn glBindTexture(target: GLenum, texture: GLuint) {
		let mut ctx = context();
		let ctx = &mut *ctx;
		ctx.record("glBindTexture", [Arg::Enum(target), Arg::Uint(texture as u64)]);

		if let Some(err) = ctx.textures.bind(&ctx.gl_version, target, texture) {
			ctx.set_error(err);
		}
	}

	fn glIsTexture(texture: GLuint) -> GLboolean {
		let mut ctx = context();
		ctx.record("glIsTexture", [Arg::Uint(texture as u64)]);
		ctx.textures.is(texture) as GLboolean
	}

	// like most drivers, leaves `residences` untouched when everything is resident
	fn glAreTexturesResident(count: GLsizei, textures: *const GLuint, residences: *mut GLboolean) -> GLboolean {
		let mut ctx = context();
		let ctx = &mut *ctx;

		if count <= 0 {
			ctx.record("glAreTexturesResident", [Arg::Int(count as i64)]);
			return ffi::FALSE
		}

		let names = slice::from_raw_parts(textures, count as usize);
		ctx.record("glAreTexturesResident", [Arg::Int(count as i64), uints(names)]);

		if names.iter().all(|&n| ctx.textures.is(n)) {
			return ffi::TRUE
		}

		let residences = slice::from_raw_parts_mut(residences, count as usize);
		for (resident, &name) in residences.iter_mut().zip(names) {
			*resident = ctx.textures.is(name) as GLboolean;
		}
		ffi::FALSE
	}

	fn glPrioritizeTextures(count: GLsizei, textures: *const GLuint, priorities: *const f32) {
		let mut ctx = context();
		if count <= 0 {
			ctx.record("glPrioritizeTextures", [Arg::Int(count as i64)]);
			return
		}

		let names = slice::from_raw_parts(textures, count as usize);
		let priorities = slice::from_raw_parts(priorities, count as usize);
		ctx.record("glPrioritizeTextures", [
			Arg::Int(count as i64),
			uints(names),
			Arg::Floats(priorities.iter().map(|&p| p as f64).collect()),
		]);
	}

	fn glGenBuffers(count: GLsizei, buffers: *mut GLuint) {
		let mut ctx = context();
		let ctx = &mut *ctx;
		ctx.record("glGenBuffers", [Arg::Int(count as i64)]);

		if count < 0 {
			ctx.set_error(ffi::INVALID_VALUE);
			error!("glGenBuffers called with invalid buffer count {}", count);
		} else if count > 0 {
			ctx.buffers.gen(slice::from_raw_parts_mut(buffers, count as usize));
		}
	}

	fn glDeleteBuffers(count: GLsizei, buffers: *const GLuint) {
		let mut ctx = context();
		let ctx = &mut *ctx;

		if count < 0 {
			ctx.record("glDeleteBuffers", [Arg::Int(count as i64)]);
			ctx.set_error(ffi::INVALID_VALUE);
			error!("glDeleteBuffers called with invalid buffer count {}", count);
		} else {
			let names = match count {
				0 => &[][..],
				_ => slice::from_raw_parts(buffers, count as usize),
			};
			ctx.record("glDeleteBuffers", [Arg::Int(count as i64), uints(names)]);
			ctx.buffers.free(names);
		}
	}

	fn glBindBuffer(target: GLenum, buffer: GLuint) {
		let mut ctx = context();
		let ctx = &mut *ctx;
		ctx.record("glBindBuffer", [Arg::Enum(target), Arg::Uint(buffer as u64)]);

		if let Some(err) = ctx.buffers.bind(&ctx.gl_version, target, buffer) {
			ctx.set_error(err);
		}
	}

	fn glIsBuffer(buffer: GLuint) -> GLboolean {
		let mut ctx = context();
		ctx.record("glIsBuffer", [Arg::Uint(buffer as u64)]);
		ctx.buffers.is(buffer) as GLboolean
	}

	fn glBufferData(target: GLenum, size: GLsizeiptr, data: *const c_void, usage: GLenum) {
		let mut ctx = context();
		let ctx = &mut *ctx;
		ctx.record("glBufferData", [
			Arg::Enum(target),
			Arg::Int(size as i64),
			Arg::Ptr(data as usize),
			Arg::Enum(usage),
		]);

		let bound = ctx.buffers.bound(target).unwrap_or(0);
		if bound == 0 || size < 0 {
			ctx.set_error(if size < 0 { ffi::INVALID_VALUE } else { ffi::INVALID_OPERATION });
			error!("glBufferData on target {:#06x} with buffer {} and size {}", target, bound, size);
			return
		}

		let contents = match data.is_null() {
			true => vec![0; size as usize],
			false => slice::from_raw_parts(data as *const u8, size as usize).to_vec(),
		};
		ctx.buffers.set_storage(bound, contents);
	}

	fn glBufferSubData(target: GLenum, offset: isize, size: GLsizeiptr, data: *const c_void) {
		let mut ctx = context();
		let ctx = &mut *ctx;
		ctx.record("glBufferSubData", [
			Arg::Enum(target),
			Arg::Int(offset as i64),
			Arg::Int(size as i64),
			Arg::Ptr(data as usize),
		]);

		let bound = ctx.buffers.bound(target).unwrap_or(0);
		let end = offset.checked_add(size).unwrap_or(-1);
		let len = ctx.buffers.storage(bound).map_or(0, |s| s.len());
		if bound == 0 || offset < 0 || size < 0 || end as usize > len {
			ctx.set_error(ffi::INVALID_VALUE);
			error!("glBufferSubData out of range: {}..{} of {} bytes in buffer {}", offset, end, len, bound);
			return
		}

		let mut contents = ctx.buffers.storage(bound).map(<[u8]>::to_vec).unwrap_or_default();
		contents[offset as usize..end as usize]
			.copy_from_slice(slice::from_raw_parts(data as *const u8, size as usize));
		ctx.buffers.set_storage(bound, contents);
	}
}
