//! Display lists, the selection name stack and feedback.

use crate::{
	ffi,
	marshal::{from_gl_bool, gl_len, Data},
	types::*,
};


pub fn call_list(list: GLuint) {
	unsafe { ffi::CallList(list) }
}

/// Executes `n` lists whose names are read from `lists` as `ty` values.
///
/// # Safety
///
/// `lists` must hold `n` values of `ty`.
#[track_caller]
pub unsafe fn call_lists<'a>(n: GLsizei, ty: GLenum, lists: impl Into<Data<'a>>) {
	let lists = lists.into();
	ffi::CallLists(n, ty, lists.as_ptr())
}

pub fn delete_lists(list: GLuint, range: GLsizei) {
	unsafe { ffi::DeleteLists(list, range) }
}

/// First of `range` contiguous new list names, 0 on failure
pub fn gen_lists(range: GLsizei) -> GLuint {
	unsafe { ffi::GenLists(range) }
}

pub fn is_list(list: GLuint) -> bool {
	from_gl_bool(unsafe { ffi::IsList(list) })
}

pub fn new_list(list: GLuint, mode: GLenum) {
	unsafe { ffi::NewList(list, mode) }
}

pub fn end_list() {
	unsafe { ffi::EndList() }
}

pub fn list_base(base: GLuint) {
	unsafe { ffi::ListBase(base) }
}

pub fn init_names() {
	unsafe { ffi::InitNames() }
}

pub fn load_name(name: GLuint) {
	unsafe { ffi::LoadName(name) }
}

pub fn push_name(name: GLuint) {
	unsafe { ffi::PushName(name) }
}

pub fn pop_name() {
	unsafe { ffi::PopName() }
}

/// Hands `buffer` to the driver for selection hit records. An empty buffer
/// is ignored.
///
/// # Safety
///
/// The driver writes into `buffer` until the render mode leaves `SELECT`;
/// it must stay alive and untouched until then.
pub unsafe fn select_buffer(buffer: &mut [GLuint]) {
	if buffer.is_empty() {
		return
	}

	ffi::SelectBuffer(gl_len("glSelectBuffer", buffer), buffer.as_mut_ptr())
}

/// # Safety
///
/// The driver writes into `buffer` until the render mode leaves `FEEDBACK`;
/// it must stay alive and untouched until then.
pub unsafe fn feedback_buffer(ty: GLenum, buffer: &mut [GLfloat]) {
	ffi::FeedbackBuffer(gl_len("glFeedbackBuffer", buffer), ty, buffer.as_mut_ptr())
}

pub fn pass_through(token: GLfloat) {
	unsafe { ffi::PassThrough(token) }
}

/// Switches render mode, returning the hit or value count of the mode left
pub fn render_mode(mode: GLenum) -> GLint {
	unsafe { ffi::RenderMode(mode) }
}
