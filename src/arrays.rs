//! Client-side vertex arrays.
//!
//! The `*_pointer` functions and [`interleaved_arrays`] are unsafe because
//! the driver keeps the address and reads through it at draw time.
//! [`draw_elements`] reads `count` indices from unchecked memory.

use crate::{ffi, marshal::Data, types::*};


/// # Safety
///
/// Unless `pointer` is an offset into the bound `ARRAY_BUFFER`, the storage
/// it refers to must outlive every draw call that reads the color array.
pub unsafe fn color_pointer<'a>(size: GLint, ty: GLenum, stride: GLsizei, pointer: impl Into<Data<'a>>) {
	ffi::ColorPointer(size, ty, stride, pointer.into().as_ptr())
}

/// # Safety
///
/// See [`color_pointer`].
pub unsafe fn edge_flag_pointer<'a>(stride: GLsizei, pointer: impl Into<Data<'a>>) {
	ffi::EdgeFlagPointer(stride, pointer.into().as_ptr())
}

/// # Safety
///
/// See [`color_pointer`].
pub unsafe fn index_pointer<'a>(ty: GLenum, stride: GLsizei, pointer: impl Into<Data<'a>>) {
	ffi::IndexPointer(ty, stride, pointer.into().as_ptr())
}

/// # Safety
///
/// See [`color_pointer`].
pub unsafe fn normal_pointer<'a>(ty: GLenum, stride: GLsizei, pointer: impl Into<Data<'a>>) {
	ffi::NormalPointer(ty, stride, pointer.into().as_ptr())
}

/// # Safety
///
/// See [`color_pointer`].
pub unsafe fn tex_coord_pointer<'a>(size: GLint, ty: GLenum, stride: GLsizei, pointer: impl Into<Data<'a>>) {
	ffi::TexCoordPointer(size, ty, stride, pointer.into().as_ptr())
}

/// # Safety
///
/// See [`color_pointer`].
pub unsafe fn vertex_pointer<'a>(size: GLint, ty: GLenum, stride: GLsizei, pointer: impl Into<Data<'a>>) {
	ffi::VertexPointer(size, ty, stride, pointer.into().as_ptr())
}

/// Sets up and enables the arrays `format` describes in one call.
///
/// # Safety
///
/// See [`color_pointer`].
pub unsafe fn interleaved_arrays<'a>(format: GLenum, stride: GLsizei, pointer: impl Into<Data<'a>>) {
	ffi::InterleavedArrays(format, stride, pointer.into().as_ptr())
}

pub fn enable_client_state(array: GLenum) {
	unsafe { ffi::EnableClientState(array) }
}

pub fn disable_client_state(array: GLenum) {
	unsafe { ffi::DisableClientState(array) }
}

pub fn array_element(i: GLint) {
	unsafe { ffi::ArrayElement(i) }
}

pub fn draw_arrays(mode: GLenum, first: GLint, count: GLsizei) {
	unsafe { ffi::DrawArrays(mode, first, count) }
}

/// `indices` is client memory, or an offset into the bound
/// `ELEMENT_ARRAY_BUFFER`.
///
/// # Safety
///
/// Client memory must hold `count` indices of `ty`, and every index must be
/// within the enabled arrays.
#[track_caller]
pub unsafe fn draw_elements<'a>(mode: GLenum, count: GLsizei, ty: GLenum, indices: impl Into<Data<'a>>) {
	let indices = indices.into();
	ffi::DrawElements(mode, count, ty, indices.as_ptr())
}
