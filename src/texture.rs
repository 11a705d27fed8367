//! Texture objects and texture state.

use crate::{
	buffer::Buffer,
	ffi,
	marshal::{check_len_one_of, check_min, check_non_empty, check_same_len, from_gl_bool, gl_bool, gl_len, Data, DataMut},
	types::*,
};

#[cfg(test)]
mod test;

/// Texture object name. Carries no ownership: nothing is deleted on drop and
/// validity is the driver's business.
#[repr(transparent)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Texture(pub GLuint);

impl Texture {
	pub fn id(self) -> GLuint {
		self.0
	}

	pub fn delete(self) {
		log::trace!(target: "classic-gl", "deleting texture {}", self.0);
		unsafe { ffi::DeleteTextures(1, &self.0) }
	}

	pub fn bind(self, target: GLenum) {
		unsafe { ffi::BindTexture(target, self.0) }
	}

	/// Binds texture 0 to `target`, whatever is bound there
	pub fn unbind(self, target: GLenum) {
		unsafe { ffi::BindTexture(target, 0) }
	}
}

impl From<Texture> for GLuint {
	fn from(texture: Texture) -> Self {
		texture.0
	}
}

pub(crate) fn tex_env_param_count(pname: GLenum) -> usize {
	match pname {
		ffi::TEXTURE_ENV_COLOR => 4,
		_ => 1,
	}
}

pub(crate) fn tex_gen_param_count(pname: GLenum) -> usize {
	match pname {
		ffi::OBJECT_PLANE | ffi::EYE_PLANE => 4,
		_ => 1,
	}
}

pub(crate) fn tex_parameter_param_count(pname: GLenum) -> usize {
	match pname {
		ffi::TEXTURE_BORDER_COLOR | ffi::TEXTURE_SWIZZLE_RGBA => 4,
		_ => 1,
	}
}

pub fn gen_texture() -> Texture {
	let mut texture = Texture::default();
	unsafe { ffi::GenTextures(1, &mut texture.0) };
	log::trace!(target: "classic-gl", "generated texture {}", texture.0);
	texture
}

/// Fills `textures` with new names; an empty slice does nothing
pub fn gen_textures(textures: &mut [Texture]) {
	if textures.is_empty() {
		return
	}

	let count = gl_len("glGenTextures", textures);
	unsafe { ffi::GenTextures(count, textures.as_mut_ptr() as *mut GLuint) };
	log::trace!(target: "classic-gl", "generated textures {:?}", textures);
}

pub fn delete_textures(textures: &[Texture]) {
	if textures.is_empty() {
		return
	}

	log::trace!(target: "classic-gl", "deleting textures {:?}", textures);
	let count = gl_len("glDeleteTextures", textures);
	unsafe { ffi::DeleteTextures(count, textures.as_ptr() as *const GLuint) }
}

pub fn bind_texture(target: GLenum, texture: Texture) {
	unsafe { ffi::BindTexture(target, texture.0) }
}

pub fn is_texture(texture: Texture) -> bool {
	from_gl_bool(unsafe { ffi::IsTexture(texture.0) })
}

/// `true` if every texture is resident. Otherwise `residences` receives the
/// per-texture status; when everything is resident the driver may leave it
/// untouched. An empty `textures` returns `false` without a call.
#[track_caller]
pub fn are_textures_resident(textures: &[Texture], residences: &mut [bool]) -> bool {
	if textures.is_empty() {
		return false
	}
	check_same_len("glAreTexturesResident", textures, residences);

	let mut staged: Vec<GLboolean> = residences.iter().map(|&r| gl_bool(r)).collect();
	let all = unsafe {
		ffi::AreTexturesResident(
			gl_len("glAreTexturesResident", textures),
			textures.as_ptr() as *const GLuint,
			staged.as_mut_ptr(),
		)
	};

	for (residence, &value) in residences.iter_mut().zip(&staged) {
		*residence = from_gl_bool(value);
	}
	from_gl_bool(all)
}

#[track_caller]
pub fn prioritize_textures(textures: &[Texture], priorities: &[GLclampf]) {
	check_same_len("glPrioritizeTextures", textures, priorities);
	if textures.is_empty() {
		return
	}

	unsafe {
		ffi::PrioritizeTextures(
			gl_len("glPrioritizeTextures", textures),
			textures.as_ptr() as *const GLuint,
			priorities.as_ptr(),
		)
	}
}

/// Specifies a level of the texture bound to `target`.
///
/// # Safety
///
/// Unless `pixels` is [`Data::Null`] or an offset into the bound
/// `PIXEL_UNPACK_BUFFER`, it must hold the whole image that `width`, `format`,
/// `ty` and the current unpack state describe.
#[allow(clippy::too_many_arguments)]
#[track_caller]
pub unsafe fn tex_image1d<'a>(
	target: GLenum,
	level: GLint,
	internalformat: GLint,
	width: GLsizei,
	border: GLint,
	format: GLenum,
	ty: GLenum,
	pixels: impl Into<Data<'a>>,
) {
	let pixels = pixels.into();
	ffi::TexImage1D(target, level, internalformat, width, border, format, ty, pixels.as_ptr())
}

/// # Safety
///
/// See [`tex_image1d`].
#[allow(clippy::too_many_arguments)]
#[track_caller]
pub unsafe fn tex_image2d<'a>(
	target: GLenum,
	level: GLint,
	internalformat: GLint,
	width: GLsizei,
	height: GLsizei,
	border: GLint,
	format: GLenum,
	ty: GLenum,
	pixels: impl Into<Data<'a>>,
) {
	let pixels = pixels.into();
	ffi::TexImage2D(target, level, internalformat, width, height, border, format, ty, pixels.as_ptr())
}

/// # Safety
///
/// See [`tex_image1d`].
#[allow(clippy::too_many_arguments)]
#[track_caller]
pub unsafe fn tex_image3d<'a>(
	target: GLenum,
	level: GLint,
	internalformat: GLint,
	width: GLsizei,
	height: GLsizei,
	depth: GLsizei,
	border: GLint,
	format: GLenum,
	ty: GLenum,
	pixels: impl Into<Data<'a>>,
) {
	let pixels = pixels.into();
	ffi::TexImage3D(
		target,
		level,
		internalformat,
		width,
		height,
		depth,
		border,
		format,
		ty,
		pixels.as_ptr(),
	)
}

/// # Safety
///
/// See [`tex_image1d`].
#[allow(clippy::too_many_arguments)]
#[track_caller]
pub unsafe fn tex_sub_image1d<'a>(
	target: GLenum,
	level: GLint,
	xoffset: GLint,
	width: GLsizei,
	format: GLenum,
	ty: GLenum,
	pixels: impl Into<Data<'a>>,
) {
	let pixels = pixels.into();
	ffi::TexSubImage1D(target, level, xoffset, width, format, ty, pixels.as_ptr())
}

/// # Safety
///
/// See [`tex_image1d`].
#[allow(clippy::too_many_arguments)]
#[track_caller]
pub unsafe fn tex_sub_image2d<'a>(
	target: GLenum,
	level: GLint,
	xoffset: GLint,
	yoffset: GLint,
	width: GLsizei,
	height: GLsizei,
	format: GLenum,
	ty: GLenum,
	pixels: impl Into<Data<'a>>,
) {
	let pixels = pixels.into();
	ffi::TexSubImage2D(target, level, xoffset, yoffset, width, height, format, ty, pixels.as_ptr())
}

/// # Safety
///
/// See [`tex_image1d`].
#[allow(clippy::too_many_arguments)]
#[track_caller]
pub unsafe fn tex_sub_image3d<'a>(
	target: GLenum,
	level: GLint,
	xoffset: GLint,
	yoffset: GLint,
	zoffset: GLint,
	width: GLsizei,
	height: GLsizei,
	depth: GLsizei,
	format: GLenum,
	ty: GLenum,
	pixels: impl Into<Data<'a>>,
) {
	let pixels = pixels.into();
	ffi::TexSubImage3D(
		target,
		level,
		xoffset,
		yoffset,
		zoffset,
		width,
		height,
		depth,
		format,
		ty,
		pixels.as_ptr(),
	)
}

pub fn copy_tex_image1d(
	target: GLenum,
	level: GLint,
	internalformat: GLenum,
	x: GLint,
	y: GLint,
	width: GLsizei,
	border: GLint,
) {
	unsafe { ffi::CopyTexImage1D(target, level, internalformat, x, y, width, border) }
}

#[allow(clippy::too_many_arguments)]
pub fn copy_tex_image2d(
	target: GLenum,
	level: GLint,
	internalformat: GLenum,
	x: GLint,
	y: GLint,
	width: GLsizei,
	height: GLsizei,
	border: GLint,
) {
	unsafe { ffi::CopyTexImage2D(target, level, internalformat, x, y, width, height, border) }
}

pub fn copy_tex_sub_image1d(target: GLenum, level: GLint, xoffset: GLint, x: GLint, y: GLint, width: GLsizei) {
	unsafe { ffi::CopyTexSubImage1D(target, level, xoffset, x, y, width) }
}

#[allow(clippy::too_many_arguments)]
pub fn copy_tex_sub_image2d(
	target: GLenum,
	level: GLint,
	xoffset: GLint,
	yoffset: GLint,
	x: GLint,
	y: GLint,
	width: GLsizei,
	height: GLsizei,
) {
	unsafe { ffi::CopyTexSubImage2D(target, level, xoffset, yoffset, x, y, width, height) }
}

pub fn tex_envf(target: GLenum, pname: GLenum, param: GLfloat) {
	unsafe { ffi::TexEnvf(target, pname, param) }
}

pub fn tex_envi(target: GLenum, pname: GLenum, param: GLint) {
	unsafe { ffi::TexEnvi(target, pname, param) }
}

/// `params` holds exactly 1 value, or 4 for `TEXTURE_ENV_COLOR`
#[track_caller]
pub fn tex_envfv(target: GLenum, pname: GLenum, params: &[GLfloat]) {
	check_len_one_of("glTexEnvfv", params, &[1, 4]);
	check_min("glTexEnvfv", pname, params, tex_env_param_count(pname));
	unsafe { ffi::TexEnvfv(target, pname, params.as_ptr()) }
}

#[track_caller]
pub fn tex_enviv(target: GLenum, pname: GLenum, params: &[GLint]) {
	check_len_one_of("glTexEnviv", params, &[1, 4]);
	check_min("glTexEnviv", pname, params, tex_env_param_count(pname));
	unsafe { ffi::TexEnviv(target, pname, params.as_ptr()) }
}

pub fn tex_gend(coord: GLenum, pname: GLenum, param: GLdouble) {
	unsafe { ffi::TexGend(coord, pname, param) }
}

pub fn tex_genf(coord: GLenum, pname: GLenum, param: GLfloat) {
	unsafe { ffi::TexGenf(coord, pname, param) }
}

pub fn tex_geni(coord: GLenum, pname: GLenum, param: GLint) {
	unsafe { ffi::TexGeni(coord, pname, param) }
}

#[track_caller]
pub fn tex_gendv(coord: GLenum, pname: GLenum, params: &[GLdouble]) {
	check_min("glTexGendv", pname, params, tex_gen_param_count(pname));
	unsafe { ffi::TexGendv(coord, pname, params.as_ptr()) }
}

#[track_caller]
pub fn tex_genfv(coord: GLenum, pname: GLenum, params: &[GLfloat]) {
	check_min("glTexGenfv", pname, params, tex_gen_param_count(pname));
	unsafe { ffi::TexGenfv(coord, pname, params.as_ptr()) }
}

#[track_caller]
pub fn tex_geniv(coord: GLenum, pname: GLenum, params: &[GLint]) {
	check_min("glTexGeniv", pname, params, tex_gen_param_count(pname));
	unsafe { ffi::TexGeniv(coord, pname, params.as_ptr()) }
}

pub fn tex_parameterf(target: GLenum, pname: GLenum, param: GLfloat) {
	unsafe { ffi::TexParameterf(target, pname, param) }
}

pub fn tex_parameteri(target: GLenum, pname: GLenum, param: GLint) {
	unsafe { ffi::TexParameteri(target, pname, param) }
}

#[track_caller]
pub fn tex_parameterfv(target: GLenum, pname: GLenum, params: &[GLfloat]) {
	check_min("glTexParameterfv", pname, params, tex_parameter_param_count(pname));
	unsafe { ffi::TexParameterfv(target, pname, params.as_ptr()) }
}

#[track_caller]
pub fn tex_parameteriv(target: GLenum, pname: GLenum, params: &[GLint]) {
	check_min("glTexParameteriv", pname, params, tex_parameter_param_count(pname));
	unsafe { ffi::TexParameteriv(target, pname, params.as_ptr()) }
}

/// Loads `values.len()` entries into the pixel map
pub fn pixel_mapfv(map: GLenum, values: &[GLfloat]) {
	unsafe { ffi::PixelMapfv(map, gl_len("glPixelMapfv", values), values.as_ptr()) }
}

pub fn pixel_mapuiv(map: GLenum, values: &[GLuint]) {
	unsafe { ffi::PixelMapuiv(map, gl_len("glPixelMapuiv", values), values.as_ptr()) }
}

pub fn pixel_mapusv(map: GLenum, values: &[GLushort]) {
	unsafe { ffi::PixelMapusv(map, gl_len("glPixelMapusv", values), values.as_ptr()) }
}

#[track_caller]
pub fn get_tex_envfv(target: GLenum, pname: GLenum, params: &mut [GLfloat]) {
	check_min("glGetTexEnvfv", pname, params, tex_env_param_count(pname));
	unsafe { ffi::GetTexEnvfv(target, pname, params.as_mut_ptr()) }
}

#[track_caller]
pub fn get_tex_enviv(target: GLenum, pname: GLenum, params: &mut [GLint]) {
	check_min("glGetTexEnviv", pname, params, tex_env_param_count(pname));
	unsafe { ffi::GetTexEnviv(target, pname, params.as_mut_ptr()) }
}

#[track_caller]
pub fn get_tex_gendv(coord: GLenum, pname: GLenum, params: &mut [GLdouble]) {
	check_min("glGetTexGendv", pname, params, tex_gen_param_count(pname));
	unsafe { ffi::GetTexGendv(coord, pname, params.as_mut_ptr()) }
}

#[track_caller]
pub fn get_tex_genfv(coord: GLenum, pname: GLenum, params: &mut [GLfloat]) {
	check_min("glGetTexGenfv", pname, params, tex_gen_param_count(pname));
	unsafe { ffi::GetTexGenfv(coord, pname, params.as_mut_ptr()) }
}

#[track_caller]
pub fn get_tex_geniv(coord: GLenum, pname: GLenum, params: &mut [GLint]) {
	check_min("glGetTexGeniv", pname, params, tex_gen_param_count(pname));
	unsafe { ffi::GetTexGeniv(coord, pname, params.as_mut_ptr()) }
}

/// # Safety
///
/// Unless `pixels` is an offset into the bound `PIXEL_PACK_BUFFER`, it must
/// hold the whole level in `format` and `ty` under the current pack state.
#[track_caller]
pub unsafe fn get_tex_image<'a>(target: GLenum, level: GLint, format: GLenum, ty: GLenum, pixels: impl Into<DataMut<'a>>) {
	let mut pixels = pixels.into();
	ffi::GetTexImage(target, level, format, ty, pixels.as_mut_ptr())
}

#[track_caller]
pub fn get_tex_level_parameterfv(target: GLenum, level: GLint, pname: GLenum, params: &mut [GLfloat]) {
	check_non_empty("glGetTexLevelParameterfv", params);
	unsafe { ffi::GetTexLevelParameterfv(target, level, pname, params.as_mut_ptr()) }
}

#[track_caller]
pub fn get_tex_level_parameteriv(target: GLenum, level: GLint, pname: GLenum, params: &mut [GLint]) {
	check_non_empty("glGetTexLevelParameteriv", params);
	unsafe { ffi::GetTexLevelParameteriv(target, level, pname, params.as_mut_ptr()) }
}

#[track_caller]
pub fn get_tex_parameterfv(target: GLenum, pname: GLenum, params: &mut [GLfloat]) {
	check_min("glGetTexParameterfv", pname, params, tex_parameter_param_count(pname));
	unsafe { ffi::GetTexParameterfv(target, pname, params.as_mut_ptr()) }
}

#[track_caller]
pub fn get_tex_parameteriv(target: GLenum, pname: GLenum, params: &mut [GLint]) {
	check_min("glGetTexParameteriv", pname, params, tex_parameter_param_count(pname));
	unsafe { ffi::GetTexParameteriv(target, pname, params.as_mut_ptr()) }
}

/// Attaches the storage of `buffer` to the buffer texture bound to `target`
pub fn tex_buffer(target: GLenum, internalformat: GLenum, buffer: Buffer) {
	unsafe { ffi::TexBuffer(target, internalformat, buffer.id()) }
}

pub fn generate_mipmap(target: GLenum) {
	unsafe { ffi::GenerateMipmap(target) }
}
