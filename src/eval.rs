//! Evaluators: one- and two-dimensional maps and their grids.

use crate::{
	ffi,
	immediate::vector_fns,
	marshal::check_non_empty,
	types::*,
};

#[cfg(test)]
mod test;

/// `points` holds `order` control points spaced `stride` values apart.
///
/// # Safety
///
/// `points` must hold `(order - 1) * stride` values plus one control point
/// of `target`'s dimension.
#[track_caller]
pub unsafe fn map1d(target: GLenum, u1: GLdouble, u2: GLdouble, stride: GLint, order: GLint, points: &[GLdouble]) {
	check_non_empty("glMap1d", points);
	ffi::Map1d(target, u1, u2, stride, order, points.as_ptr())
}

/// # Safety
///
/// See [`map1d`].
#[track_caller]
pub unsafe fn map1f(target: GLenum, u1: GLfloat, u2: GLfloat, stride: GLint, order: GLint, points: &[GLfloat]) {
	check_non_empty("glMap1f", points);
	ffi::Map1f(target, u1, u2, stride, order, points.as_ptr())
}

/// # Safety
///
/// `points` must hold every control point `uorder`, `vorder` and the two
/// strides address, each of `target`'s dimension.
#[allow(clippy::too_many_arguments)]
#[track_caller]
pub unsafe fn map2d(
	target: GLenum,
	u1: GLdouble,
	u2: GLdouble,
	ustride: GLint,
	uorder: GLint,
	v1: GLdouble,
	v2: GLdouble,
	vstride: GLint,
	vorder: GLint,
	points: &[GLdouble],
) {
	check_non_empty("glMap2d", points);
	ffi::Map2d(target, u1, u2, ustride, uorder, v1, v2, vstride, vorder, points.as_ptr())
}

/// # Safety
///
/// See [`map2d`].
#[allow(clippy::too_many_arguments)]
#[track_caller]
pub unsafe fn map2f(
	target: GLenum,
	u1: GLfloat,
	u2: GLfloat,
	ustride: GLint,
	uorder: GLint,
	v1: GLfloat,
	v2: GLfloat,
	vstride: GLint,
	vorder: GLint,
	points: &[GLfloat],
) {
	check_non_empty("glMap2f", points);
	ffi::Map2f(target, u1, u2, ustride, uorder, v1, v2, vstride, vorder, points.as_ptr())
}

pub fn map_grid1d(un: GLint, u1: GLdouble, u2: GLdouble) {
	unsafe { ffi::MapGrid1d(un, u1, u2) }
}

pub fn map_grid1f(un: GLint, u1: GLfloat, u2: GLfloat) {
	unsafe { ffi::MapGrid1f(un, u1, u2) }
}

pub fn map_grid2d(un: GLint, u1: GLdouble, u2: GLdouble, vn: GLint, v1: GLdouble, v2: GLdouble) {
	unsafe { ffi::MapGrid2d(un, u1, u2, vn, v1, v2) }
}

pub fn map_grid2f(un: GLint, u1: GLfloat, u2: GLfloat, vn: GLint, v1: GLfloat, v2: GLfloat) {
	unsafe { ffi::MapGrid2f(un, u1, u2, vn, v1, v2) }
}

vector_fns!(eval_coord, EvalCoord, 1, (u), [d: GLdouble, f: GLfloat]);
vector_fns!(eval_coord, EvalCoord, 2, (u, v), [d: GLdouble, f: GLfloat]);

pub fn eval_mesh1(mode: GLenum, i1: GLint, i2: GLint) {
	unsafe { ffi::EvalMesh1(mode, i1, i2) }
}

pub fn eval_mesh2(mode: GLenum, i1: GLint, i2: GLint, j1: GLint, j2: GLint) {
	unsafe { ffi::EvalMesh2(mode, i1, i2, j1, j2) }
}

pub fn eval_point1(i: GLint) {
	unsafe { ffi::EvalPoint1(i) }
}

pub fn eval_point2(i: GLint, j: GLint) {
	unsafe { ffi::EvalPoint2(i, j) }
}

/// # Safety
///
/// `v` must have room for every value `query` yields for the map; for
/// `COEFF` that is all of its control points.
#[track_caller]
pub unsafe fn get_mapdv(target: GLenum, query: GLenum, v: &mut [GLdouble]) {
	check_non_empty("glGetMapdv", v);
	ffi::GetMapdv(target, query, v.as_mut_ptr())
}

/// # Safety
///
/// See [`get_mapdv`].
#[track_caller]
pub unsafe fn get_mapfv(target: GLenum, query: GLenum, v: &mut [GLfloat]) {
	check_non_empty("glGetMapfv", v);
	ffi::GetMapfv(target, query, v.as_mut_ptr())
}

/// # Safety
///
/// See [`get_mapdv`].
#[track_caller]
pub unsafe fn get_mapiv(target: GLenum, query: GLenum, v: &mut [GLint]) {
	check_non_empty("glGetMapiv", v);
	ffi::GetMapiv(target, query, v.as_mut_ptr())
}
