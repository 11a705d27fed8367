//! Pixel rectangles, pixel storage and transfer modes.
//!
//! Image arguments are [`Data`]/[`DataMut`]: client memory, or with a pixel
//! buffer object bound, an offset into it. Sizes are not checked against
//! `width`, `height`, `format` and `ty`, which makes the image calls unsafe.

use crate::{
	ffi,
	marshal::{check_non_empty, Data, DataMut},
	types::*,
};

#[cfg(test)]
mod test;

/// # Safety
///
/// Unless `bitmap` is null or an offset into the bound `PIXEL_UNPACK_BUFFER`,
/// it must hold `height` rows of `width` bits under the current unpack state.
#[track_caller]
pub unsafe fn bitmap<'a>(
	width: GLsizei,
	height: GLsizei,
	xorig: GLfloat,
	yorig: GLfloat,
	xmove: GLfloat,
	ymove: GLfloat,
	bitmap: impl Into<Data<'a>>,
) {
	let bitmap = bitmap.into();
	ffi::Bitmap(width, height, xorig, yorig, xmove, ymove, bitmap.as_ptr() as *const GLubyte)
}

pub fn copy_pixels(x: GLint, y: GLint, width: GLsizei, height: GLsizei, ty: GLenum) {
	unsafe { ffi::CopyPixels(x, y, width, height, ty) }
}

/// # Safety
///
/// Unless `pixels` is an offset into the bound `PIXEL_UNPACK_BUFFER`, it must
/// hold the rectangle `width`, `height`, `format` and `ty` describe under the
/// current unpack state.
#[track_caller]
pub unsafe fn draw_pixels<'a>(width: GLsizei, height: GLsizei, format: GLenum, ty: GLenum, pixels: impl Into<Data<'a>>) {
	let pixels = pixels.into();
	ffi::DrawPixels(width, height, format, ty, pixels.as_ptr())
}

/// # Safety
///
/// Unless `pixels` is an offset into the bound `PIXEL_PACK_BUFFER`, it must
/// have room for the rectangle `width`, `height`, `format` and `ty` describe
/// under the current pack state.
///
/// Reading into storage that GL does not size has to go through `unsafe`:
///
/// ```compile_fail
/// let mut pixel = 0u8;
/// classic_gl::read_pixels(0, 0, 4, 4, classic_gl::RGBA, classic_gl::UNSIGNED_BYTE, &mut pixel);
/// ```
#[allow(clippy::too_many_arguments)]
#[track_caller]
pub unsafe fn read_pixels<'a>(
	x: GLint,
	y: GLint,
	width: GLsizei,
	height: GLsizei,
	format: GLenum,
	ty: GLenum,
	pixels: impl Into<DataMut<'a>>,
) {
	let mut pixels = pixels.into();
	ffi::ReadPixels(x, y, width, height, format, ty, pixels.as_mut_ptr())
}

pub fn pixel_storef(pname: GLenum, param: GLfloat) {
	unsafe { ffi::PixelStoref(pname, param) }
}

pub fn pixel_storei(pname: GLenum, param: GLint) {
	unsafe { ffi::PixelStorei(pname, param) }
}

pub fn pixel_transferf(pname: GLenum, param: GLfloat) {
	unsafe { ffi::PixelTransferf(pname, param) }
}

pub fn pixel_transferi(pname: GLenum, param: GLint) {
	unsafe { ffi::PixelTransferi(pname, param) }
}

pub fn pixel_zoom(xfactor: GLfloat, yfactor: GLfloat) {
	unsafe { ffi::PixelZoom(xfactor, yfactor) }
}

/// # Safety
///
/// `values` must hold the map's current size (`PIXEL_MAP_*_SIZE`).
#[track_caller]
pub unsafe fn get_pixel_mapfv(map: GLenum, values: &mut [GLfloat]) {
	check_non_empty("glGetPixelMapfv", values);
	ffi::GetPixelMapfv(map, values.as_mut_ptr())
}

/// # Safety
///
/// See [`get_pixel_mapfv`].
#[track_caller]
pub unsafe fn get_pixel_mapuiv(map: GLenum, values: &mut [GLuint]) {
	check_non_empty("glGetPixelMapuiv", values);
	ffi::GetPixelMapuiv(map, values.as_mut_ptr())
}

/// # Safety
///
/// See [`get_pixel_mapfv`].
#[track_caller]
pub unsafe fn get_pixel_mapusv(map: GLenum, values: &mut [GLushort]) {
	check_non_empty("glGetPixelMapusv", values);
	ffi::GetPixelMapusv(map, values.as_mut_ptr())
}
