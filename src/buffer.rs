//! Buffer objects.

use crate::{
	ffi,
	marshal::{check_non_empty, from_gl_bool, gl_len, Data, Plain},
	types::*,
};


/// Buffer object name, with the same non-owning semantics as
/// [`Texture`](crate::Texture)
#[repr(transparent)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Buffer(pub GLuint);

impl Buffer {
	pub fn id(self) -> GLuint {
		self.0
	}

	pub fn delete(self) {
		log::trace!(target: "classic-gl", "deleting buffer {}", self.0);
		unsafe { ffi::DeleteBuffers(1, &self.0) }
	}

	pub fn bind(self, target: GLenum) {
		unsafe { ffi::BindBuffer(target, self.0) }
	}

	/// Binds buffer 0 to `target`
	pub fn unbind(self, target: GLenum) {
		unsafe { ffi::BindBuffer(target, 0) }
	}
}

impl From<Buffer> for GLuint {
	fn from(buffer: Buffer) -> Self {
		buffer.0
	}
}

pub fn gen_buffer() -> Buffer {
	let mut buffer = Buffer::default();
	unsafe { ffi::GenBuffers(1, &mut buffer.0) };
	log::trace!(target: "classic-gl", "generated buffer {}", buffer.0);
	buffer
}

pub fn gen_buffers(buffers: &mut [Buffer]) {
	if buffers.is_empty() {
		return
	}

	let count = gl_len("glGenBuffers", buffers);
	unsafe { ffi::GenBuffers(count, buffers.as_mut_ptr() as *mut GLuint) };
	log::trace!(target: "classic-gl", "generated buffers {:?}", buffers);
}

pub fn delete_buffers(buffers: &[Buffer]) {
	if buffers.is_empty() {
		return
	}

	log::trace!(target: "classic-gl", "deleting buffers {:?}", buffers);
	let count = gl_len("glDeleteBuffers", buffers);
	unsafe { ffi::DeleteBuffers(count, buffers.as_ptr() as *const GLuint) }
}

pub fn bind_buffer(target: GLenum, buffer: Buffer) {
	unsafe { ffi::BindBuffer(target, buffer.0) }
}

pub fn is_buffer(buffer: Buffer) -> bool {
	from_gl_bool(unsafe { ffi::IsBuffer(buffer.0) })
}

/// Allocates `size` bytes for the buffer bound to `target`, copying from
/// `data` unless it is [`Data::Null`].
///
/// Panics if `data` borrows fewer than `size` bytes, or is an offset.
#[track_caller]
pub fn buffer_data<'a>(target: GLenum, size: GLsizeiptr, data: impl Into<Data<'a>>, usage: GLenum) {
	let data = data.into();
	check_source("glBufferData", size, &data, true);
	unsafe { ffi::BufferData(target, size, data.as_ptr(), usage) }
}

/// Panics unless `data` borrows at least `size` bytes
#[track_caller]
pub fn buffer_sub_data<'a>(target: GLenum, offset: GLintptr, size: GLsizeiptr, data: impl Into<Data<'a>>) {
	let data = data.into();
	check_source("glBufferSubData", size, &data, false);
	unsafe { ffi::BufferSubData(target, offset, size, data.as_ptr()) }
}

/// Uploads all of `data` to the buffer bound to `target`
#[track_caller]
pub fn buffer_slice<T: Plain>(target: GLenum, data: &[T], usage: GLenum) {
	check_non_empty("glBufferData", data);
	buffer_data(target, std::mem::size_of_val(data) as GLsizeiptr, data, usage)
}

// the source is read as client memory, offsets never name a bound buffer here
#[track_caller]
fn check_source(func: &str, size: GLsizeiptr, data: &Data, null_allowed: bool) {
	match (data, data.byte_len()) {
		(_, Some(len)) if size < 0 || size as usize > len => {
			panic!("{}: size {} exceeds the {} byte(s) of data", func, size, len)
		},
		(Data::Null, _) if null_allowed => {},
		(Data::Null | Data::Offset(_), _) => panic!("{}: data has to borrow client memory", func),
		_ => {},
	}
}
