//! Matrix stacks. Matrices are column-major, 16 elements.

use crate::{ffi, types::*};

#[cfg(test)]
mod test;

pub fn matrix_mode(mode: GLenum) {
	unsafe { ffi::MatrixMode(mode) }
}

pub fn load_identity() {
	unsafe { ffi::LoadIdentity() }
}

pub fn load_matrixd(m: &[GLdouble; 16]) {
	unsafe { ffi::LoadMatrixd(m.as_ptr()) }
}

pub fn load_matrixf(m: &[GLfloat; 16]) {
	unsafe { ffi::LoadMatrixf(m.as_ptr()) }
}

pub fn mult_matrixd(m: &[GLdouble; 16]) {
	unsafe { ffi::MultMatrixd(m.as_ptr()) }
}

pub fn mult_matrixf(m: &[GLfloat; 16]) {
	unsafe { ffi::MultMatrixf(m.as_ptr()) }
}

pub fn push_matrix() {
	unsafe { ffi::PushMatrix() }
}

pub fn pop_matrix() {
	unsafe { ffi::PopMatrix() }
}

pub fn frustum(left: GLdouble, right: GLdouble, bottom: GLdouble, top: GLdouble, z_near: GLdouble, z_far: GLdouble) {
	unsafe { ffi::Frustum(left, right, bottom, top, z_near, z_far) }
}

pub fn ortho(left: GLdouble, right: GLdouble, bottom: GLdouble, top: GLdouble, z_near: GLdouble, z_far: GLdouble) {
	unsafe { ffi::Ortho(left, right, bottom, top, z_near, z_far) }
}

pub fn rotated(angle: GLdouble, x: GLdouble, y: GLdouble, z: GLdouble) {
	unsafe { ffi::Rotated(angle, x, y, z) }
}

pub fn rotatef(angle: GLfloat, x: GLfloat, y: GLfloat, z: GLfloat) {
	unsafe { ffi::Rotatef(angle, x, y, z) }
}

pub fn scaled(x: GLdouble, y: GLdouble, z: GLdouble) {
	unsafe { ffi::Scaled(x, y, z) }
}

pub fn scalef(x: GLfloat, y: GLfloat, z: GLfloat) {
	unsafe { ffi::Scalef(x, y, z) }
}

pub fn translated(x: GLdouble, y: GLdouble, z: GLdouble) {
	unsafe { ffi::Translated(x, y, z) }
}

pub fn translatef(x: GLfloat, y: GLfloat, z: GLfloat) {
	unsafe { ffi::Translatef(x, y, z) }
}
