//! Mocked state, parameter and drawing entry points.

use std::{
	ffi::{c_void, CStr},
	ptr, slice,
};

use super::{context, function_mapping::gl_functions, log::error, Arg};
use crate::{
	ffi, lighting, texture,
	types::{GLboolean, GLchar, GLdouble, GLenum, GLfloat, GLint, GLsizei, GLubyte, GLuint},
};

/// Formats reported through `COMPRESSED_TEXTURE_FORMATS`
const COMPRESSED_FORMATS: [GLenum; 2] = [ffi::COMPRESSED_RED_RGTC1, ffi::COMPRESSED_RG_RGTC2];

unsafe fn floats<T: Copy + Into<f64>>(values: *const T, count: usize) -> Arg {
	Arg::Floats(slice::from_raw_parts(values, count).iter().map(|&v| v.into()).collect())
}

unsafe fn ints<T: Copy + Into<i64>>(values: *const T, count: usize) -> Arg {
	Arg::Ints(slice::from_raw_parts(values, count).iter().map(|&v| v.into()).collect())
}

unsafe fn string(name: *const GLchar) -> String {
	CStr::from_ptr(name).to_string_lossy().into_owned()
}

gl_functions! {
	fn glGetString(name: GLenum) -> *const GLubyte {
		let mut ctx = context();
		let ctx = &mut *ctx;
		ctx.record("glGetString", [Arg::Enum(name)]);

		let string = match name {
			ffi::VENDOR => &ctx.strings.vendor,
			ffi::RENDERER => &ctx.strings.renderer,
			ffi::VERSION => &ctx.strings.version,
			ffi::EXTENSIONS => &ctx.strings.extensions,
			_ => {
				ctx.set_error(ffi::INVALID_ENUM);
				error!("glGetString called with invalid name {:#06x}", name);
				return ptr::null()
			},
		};
		string.as_ptr() as *const GLubyte
	}

	fn glGetStringi(name: GLenum, index: GLuint) -> *const GLubyte {
		let mut ctx = context();
		let ctx = &mut *ctx;
		ctx.record("glGetStringi", [Arg::Enum(name), Arg::Uint(index as u64)]);

		if name != ffi::EXTENSIONS {
			ctx.set_error(ffi::INVALID_ENUM);
			error!("glGetStringi called with invalid name {:#06x}", name);
			return ptr::null()
		}

		match ctx.strings.extension_list.get(index as usize) {
			Some(extension) => extension.as_ptr() as *const GLubyte,
			None => {
				ctx.set_error(ffi::INVALID_VALUE);
				error!("glGetStringi index {} out of range", index);
				ptr::null()
			},
		}
	}

	fn glGetError() -> GLenum {
		let mut ctx = context();
		ctx.record("glGetError", Vec::new());
		std::mem::replace(&mut ctx.error, ffi::NO_ERROR)
	}

	fn glGetIntegerv(pname: GLenum, data: *mut GLint) {
		let mut ctx = context();
		let ctx = &mut *ctx;
		ctx.record("glGetIntegerv", [Arg::Enum(pname)]);

		if pname == ffi::COMPRESSED_TEXTURE_FORMATS {
			let data = slice::from_raw_parts_mut(data, COMPRESSED_FORMATS.len());
			for (value, &format) in data.iter_mut().zip(&COMPRESSED_FORMATS) {
				*value = format as GLint;
			}
			return
		}

		let value = match pname {
			ffi::MAJOR_VERSION => Some(ctx.gl_version.major as GLint),
			ffi::MINOR_VERSION => Some(ctx.gl_version.minor as GLint),
			ffi::NUM_EXTENSIONS => Some(ctx.strings.extension_list.len() as GLint),
			ffi::NUM_COMPRESSED_TEXTURE_FORMATS => Some(COMPRESSED_FORMATS.len() as GLint),
			_ => ctx.textures.binding(pname).or_else(|| ctx.buffers.binding(pname)).map(|n| n as GLint),
		};

		match value {
			Some(value) => *data = value,
			None => {
				ctx.set_error(ffi::INVALID_ENUM);
				error!("glGetIntegerv called with unsupported pname {:#06x}", pname);
			},
		}
	}

	fn glGetFloatv(pname: GLenum, data: *mut GLfloat) {
		let mut ctx = context();
		ctx.record("glGetFloatv", [Arg::Enum(pname)]);

		match pname {
			ffi::COLOR_CLEAR_VALUE => slice::from_raw_parts_mut(data, 4).copy_from_slice(&ctx.clear_color),
			_ => {
				ctx.set_error(ffi::INVALID_ENUM);
				error!("glGetFloatv called with unsupported pname {:#06x}", pname);
			},
		}
	}

	fn glGetBooleanv(pname: GLenum, data: *mut GLboolean) {
		let mut ctx = context();
		ctx.record("glGetBooleanv", [Arg::Enum(pname)]);

		match pname {
			ffi::COLOR_WRITEMASK => slice::from_raw_parts_mut(data, 4).copy_from_slice(&ctx.color_mask),
			cap => *data = ctx.enabled.contains(&cap) as GLboolean,
		}
	}

	fn glEnable(cap: GLenum) {
		let mut ctx = context();
		ctx.record("glEnable", [Arg::Enum(cap)]);
		ctx.enabled.insert(cap);
	}

	fn glDisable(cap: GLenum) {
		let mut ctx = context();
		ctx.record("glDisable", [Arg::Enum(cap)]);
		ctx.enabled.remove(&cap);
	}

	fn glIsEnabled(cap: GLenum) -> GLboolean {
		let mut ctx = context();
		ctx.record("glIsEnabled", [Arg::Enum(cap)]);
		ctx.enabled.contains(&cap) as GLboolean
	}

	fn glClearColor(red: GLfloat, green: GLfloat, blue: GLfloat, alpha: GLfloat) {
		let mut ctx = context();
		ctx.record("glClearColor", [
			Arg::Float(red as f64),
			Arg::Float(green as f64),
			Arg::Float(blue as f64),
			Arg::Float(alpha as f64),
		]);
		ctx.clear_color = [red, green, blue, alpha];
	}

	fn glColorMask(red: GLboolean, green: GLboolean, blue: GLboolean, alpha: GLboolean) {
		let mut ctx = context();
		ctx.record("glColorMask", [Arg::Uints(vec![red as u64, green as u64, blue as u64, alpha as u64])]);
		ctx.color_mask = [red, green, blue, alpha];
	}

	fn glFogf(pname: GLenum, param: GLfloat) {
		context().record("glFogf", [Arg::Enum(pname), Arg::Float(param as f64)]);
	}

	fn glFogi(pname: GLenum, param: GLint) {
		context().record("glFogi", [Arg::Enum(pname), Arg::Int(param as i64)]);
	}

	fn glFogfv(pname: GLenum, params: *const GLfloat) {
		let params = floats(params, lighting::fog_param_count(pname));
		context().record("glFogfv", [Arg::Enum(pname), params]);
	}

	fn glFogiv(pname: GLenum, params: *const GLint) {
		let params = ints(params, lighting::fog_param_count(pname));
		context().record("glFogiv", [Arg::Enum(pname), params]);
	}

	fn glLightf(light: GLenum, pname: GLenum, param: GLfloat) {
		context().record("glLightf", [Arg::Enum(light), Arg::Enum(pname), Arg::Float(param as f64)]);
	}

	fn glLightfv(light: GLenum, pname: GLenum, params: *const GLfloat) {
		let params = floats(params, lighting::light_param_count(pname));
		context().record("glLightfv", [Arg::Enum(light), Arg::Enum(pname), params]);
	}

	fn glLightiv(light: GLenum, pname: GLenum, params: *const GLint) {
		let params = ints(params, lighting::light_param_count(pname));
		context().record("glLightiv", [Arg::Enum(light), Arg::Enum(pname), params]);
	}

	fn glLightModelfv(pname: GLenum, params: *const GLfloat) {
		let params = floats(params, lighting::light_model_param_count(pname));
		context().record("glLightModelfv", [Arg::Enum(pname), params]);
	}

	fn glMaterialfv(face: GLenum, pname: GLenum, params: *const GLfloat) {
		let params = floats(params, lighting::material_param_count(pname));
		context().record("glMaterialfv", [Arg::Enum(face), Arg::Enum(pname), params]);
	}

	fn glTexEnvfv(target: GLenum, pname: GLenum, params: *const GLfloat) {
		let params = floats(params, texture::tex_env_param_count(pname));
		context().record("glTexEnvfv", [Arg::Enum(target), Arg::Enum(pname), params]);
	}

	fn glTexEnviv(target: GLenum, pname: GLenum, params: *const GLint) {
		let params = ints(params, texture::tex_env_param_count(pname));
		context().record("glTexEnviv", [Arg::Enum(target), Arg::Enum(pname), params]);
	}

	fn glTexGenfv(coord: GLenum, pname: GLenum, params: *const GLfloat) {
		let params = floats(params, texture::tex_gen_param_count(pname));
		context().record("glTexGenfv", [Arg::Enum(coord), Arg::Enum(pname), params]);
	}

	fn glTexParameteri(target: GLenum, pname: GLenum, param: GLint) {
		context().record("glTexParameteri", [Arg::Enum(target), Arg::Enum(pname), Arg::Int(param as i64)]);
	}

	fn glTexParameterfv(target: GLenum, pname: GLenum, params: *const GLfloat) {
		let params = floats(params, texture::tex_parameter_param_count(pname));
		context().record("glTexParameterfv", [Arg::Enum(target), Arg::Enum(pname), params]);
	}

	fn glTexImage2D(
		target: GLenum,
		level: GLint,
		internalformat: GLint,
		width: GLsizei,
		height: GLsizei,
		border: GLint,
		format: GLenum,
		ty: GLenum,
		pixels: *const c_void,
	) {
		context().record("glTexImage2D", [
			Arg::Enum(target),
			Arg::Int(level as i64),
			Arg::Int(internalformat as i64),
			Arg::Int(width as i64),
			Arg::Int(height as i64),
			Arg::Int(border as i64),
			Arg::Enum(format),
			Arg::Enum(ty),
			Arg::Ptr(pixels as usize),
		]);
	}

	// fills client memory with 0xff so callers can see the write land
	fn glReadPixels(
		x: GLint,
		y: GLint,
		width: GLsizei,
		height: GLsizei,
		format: GLenum,
		ty: GLenum,
		pixels: *mut c_void,
	) {
		let mut ctx = context();
		ctx.record("glReadPixels", [
			Arg::Int(x as i64),
			Arg::Int(y as i64),
			Arg::Int(width as i64),
			Arg::Int(height as i64),
			Arg::Enum(format),
			Arg::Enum(ty),
			Arg::Ptr(pixels as usize),
		]);

		let pack_buffer = ctx.buffers.bound(ffi::PIXEL_PACK_BUFFER).unwrap_or(0);
		if pack_buffer == 0 && format == ffi::RGBA && ty == ffi::UNSIGNED_BYTE && width > 0 && height > 0 {
			slice::from_raw_parts_mut(pixels as *mut u8, width as usize * height as usize * 4).fill(0xff);
		}
	}

	fn glMatrixMode(mode: GLenum) {
		context().record("glMatrixMode", [Arg::Enum(mode)]);
	}

	fn glLoadMatrixf(m: *const GLfloat) {
		let m = floats(m, 16);
		context().record("glLoadMatrixf", [m]);
	}

	fn glLoadMatrixd(m: *const GLdouble) {
		let m = floats(m, 16);
		context().record("glLoadMatrixd", [m]);
	}

	fn glBegin(mode: GLenum) {
		context().record("glBegin", [Arg::Enum(mode)]);
	}

	fn glEnd() {
		context().record("glEnd", Vec::new());
	}

	fn glVertex2i(x: GLint, y: GLint) {
		context().record("glVertex2i", [Arg::Int(x as i64), Arg::Int(y as i64)]);
	}

	fn glVertex3fv(v: *const GLfloat) {
		let v = floats(v, 3);
		context().record("glVertex3fv", [v]);
	}

	fn glColor3f(red: GLfloat, green: GLfloat, blue: GLfloat) {
		context().record("glColor3f", [
			Arg::Float(red as f64),
			Arg::Float(green as f64),
			Arg::Float(blue as f64),
		]);
	}

	fn glColor4ubv(v: *const GLubyte) {
		let v = Arg::Uints(slice::from_raw_parts(v, 4).iter().map(|&c| c as u64).collect());
		context().record("glColor4ubv", [v]);
	}

	fn glEdgeFlagv(flag: *const GLboolean) {
		context().record("glEdgeFlagv", [Arg::Uint(*flag as u64)]);
	}

	fn glRectiv(v1: *const GLint, v2: *const GLint) {
		let (v1, v2) = (ints(v1, 2), ints(v2, 2));
		context().record("glRectiv", [v1, v2]);
	}

	fn glVertexPointer(size: GLint, ty: GLenum, stride: GLsizei, pointer: *const c_void) {
		context().record("glVertexPointer", [
			Arg::Int(size as i64),
			Arg::Enum(ty),
			Arg::Int(stride as i64),
			Arg::Ptr(pointer as usize),
		]);
	}

	fn glDrawElements(mode: GLenum, count: GLsizei, ty: GLenum, indices: *const c_void) {
		context().record("glDrawElements", [
			Arg::Enum(mode),
			Arg::Int(count as i64),
			Arg::Enum(ty),
			Arg::Ptr(indices as usize),
		]);
	}

	fn glGenLists(range: GLsizei) -> GLuint {
		let mut ctx = context();
		ctx.record("glGenLists", [Arg::Int(range as i64)]);

		if range < 0 {
			ctx.set_error(ffi::INVALID_VALUE);
			error!("glGenLists called with invalid range {}", range);
			return 0
		} else if range == 0 {
			return 0
		}

		let first = ctx.next_list;
		ctx.next_list += range as GLuint;
		ctx.lists.extend(first..first + range as GLuint);
		first
	}

	fn glIsList(list: GLuint) -> GLboolean {
		let mut ctx = context();
		ctx.record("glIsList", [Arg::Uint(list as u64)]);
		ctx.lists.contains(&list) as GLboolean
	}

	fn glDeleteLists(list: GLuint, range: GLsizei) {
		let mut ctx = context();
		ctx.record("glDeleteLists", [Arg::Uint(list as u64), Arg::Int(range as i64)]);

		for name in list..list.saturating_add(range.max(0) as GLuint) {
			ctx.lists.remove(&name);
		}
	}

	fn glNewList(list: GLuint, mode: GLenum) {
		let mut ctx = context();
		ctx.record("glNewList", [Arg::Uint(list as u64), Arg::Enum(mode)]);
		ctx.lists.insert(list);
	}

	fn glEndList() {
		context().record("glEndList", Vec::new());
	}

	fn glCallList(list: GLuint) {
		context().record("glCallList", [Arg::Uint(list as u64)]);
	}

	fn glGetUniformLocation(program: GLuint, name: *const GLchar) -> GLint {
		let name = string(name);
		let mut ctx = context();
		ctx.record("glGetUniformLocation", [Arg::Uint(program as u64), Arg::Str(name.clone())]);

		if name.starts_with("gl_") {
			return -1
		}
		let next = ctx.locations.len() as GLint;
		*ctx.locations.entry(name).or_insert(next)
	}

	fn glGetAttribLocation(program: GLuint, name: *const GLchar) -> GLint {
		let name = string(name);
		let mut ctx = context();
		ctx.record("glGetAttribLocation", [Arg::Uint(program as u64), Arg::Str(name.clone())]);

		if name.starts_with("gl_") {
			return -1
		}
		let next = ctx.locations.len() as GLint;
		*ctx.locations.entry(name).or_insert(next)
	}

	fn glBindAttribLocation(program: GLuint, index: GLuint, name: *const GLchar) {
		let name = string(name);
		context().record("glBindAttribLocation", [
			Arg::Uint(program as u64),
			Arg::Uint(index as u64),
			Arg::Str(name),
		]);
	}
}
