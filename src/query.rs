//! State queries, strings and errors.

use crate::{
	ffi,
	marshal::{check_min, check_non_empty, from_gl_bool, from_gl_string, gl_bool},
	types::*,
};


/// Values `glGet*v` writes for `pname`
pub(crate) fn state_value_count(pname: GLenum) -> usize {
	match pname {
		ffi::MODELVIEW_MATRIX
		| ffi::PROJECTION_MATRIX
		| ffi::TEXTURE_MATRIX
		| ffi::TRANSPOSE_MODELVIEW_MATRIX
		| ffi::TRANSPOSE_PROJECTION_MATRIX
		| ffi::TRANSPOSE_TEXTURE_MATRIX => 16,
		ffi::COLOR_CLEAR_VALUE
		| ffi::VIEWPORT
		| ffi::SCISSOR_BOX
		| ffi::BLEND_COLOR
		| ffi::COLOR_WRITEMASK
		| ffi::CURRENT_COLOR
		| ffi::CURRENT_SECONDARY_COLOR
		| ffi::CURRENT_RASTER_COLOR
		| ffi::CURRENT_RASTER_POSITION
		| ffi::CURRENT_RASTER_TEXTURE_COORDS
		| ffi::CURRENT_TEXTURE_COORDS
		| ffi::MAP2_GRID_DOMAIN
		| ffi::FOG_COLOR
		| ffi::LIGHT_MODEL_AMBIENT
		| ffi::ACCUM_CLEAR_VALUE => 4,
		ffi::CURRENT_NORMAL => 3,
		ffi::DEPTH_RANGE
		| ffi::MAX_VIEWPORT_DIMS
		| ffi::POLYGON_MODE
		| ffi::MAP1_GRID_DOMAIN
		| ffi::MAP2_GRID_SEGMENTS
		| ffi::ALIASED_LINE_WIDTH_RANGE
		| ffi::ALIASED_POINT_SIZE_RANGE
		// same values as SMOOTH_LINE_WIDTH_RANGE and SMOOTH_POINT_SIZE_RANGE
		| ffi::LINE_WIDTH_RANGE
		| ffi::POINT_SIZE_RANGE => 2,
		_ => 1,
	}
}

/// Like [`state_value_count`], asking the driver for pnames whose length is
/// itself state
fn required_values(pname: GLenum) -> usize {
	let count_pname = match pname {
		ffi::COMPRESSED_TEXTURE_FORMATS => ffi::NUM_COMPRESSED_TEXTURE_FORMATS,
		ffi::PROGRAM_BINARY_FORMATS => ffi::NUM_PROGRAM_BINARY_FORMATS,
		ffi::SHADER_BINARY_FORMATS => ffi::NUM_SHADER_BINARY_FORMATS,
		_ => return state_value_count(pname),
	};

	let mut count = 0;
	unsafe { ffi::GetIntegerv(count_pname, &mut count) };
	count.max(0) as usize
}

/// Staged through a `GLboolean` buffer; entries past what `pname` yields keep
/// their values.
#[track_caller]
pub fn get_booleanv(pname: GLenum, params: &mut [bool]) {
	check_min("glGetBooleanv", pname, params, required_values(pname));

	let mut staged: Vec<GLboolean> = params.iter().map(|&b| gl_bool(b)).collect();
	unsafe { ffi::GetBooleanv(pname, staged.as_mut_ptr()) };

	for (param, &value) in params.iter_mut().zip(&staged) {
		*param = from_gl_bool(value);
	}
}

#[track_caller]
pub fn get_doublev(pname: GLenum, params: &mut [GLdouble]) {
	check_min("glGetDoublev", pname, params, required_values(pname));
	unsafe { ffi::GetDoublev(pname, params.as_mut_ptr()) }
}

#[track_caller]
pub fn get_floatv(pname: GLenum, params: &mut [GLfloat]) {
	check_min("glGetFloatv", pname, params, required_values(pname));
	unsafe { ffi::GetFloatv(pname, params.as_mut_ptr()) }
}

#[track_caller]
pub fn get_integerv(pname: GLenum, params: &mut [GLint]) {
	check_min("glGetIntegerv", pname, params, required_values(pname));
	unsafe { ffi::GetIntegerv(pname, params.as_mut_ptr()) }
}

/// Client array address for `pname`, like `VERTEX_ARRAY_POINTER`
#[track_caller]
pub fn get_pointerv(pname: GLenum, params: &mut [Pointer]) {
	check_non_empty("glGetPointerv", params);
	unsafe { ffi::GetPointerv(pname, params.as_mut_ptr()) }
}

/// Copy of a driver string, empty if the driver returns null
pub fn get_string(name: GLenum) -> String {
	unsafe { from_gl_string(ffi::GetString(name)) }.unwrap_or_default()
}

pub fn get_stringi(name: GLenum, index: GLuint) -> String {
	unsafe { from_gl_string(ffi::GetStringi(name, index)) }.unwrap_or_default()
}

pub fn get_clip_plane(plane: GLenum, equation: &mut [GLdouble; 4]) {
	unsafe { ffi::GetClipPlane(plane, equation.as_mut_ptr()) }
}

pub fn get_polygon_stipple(mask: &mut [GLubyte; 128]) {
	unsafe { ffi::GetPolygonStipple(mask.as_mut_ptr()) }
}

pub fn get_error() -> GLenum {
	unsafe { ffi::GetError() }
}
