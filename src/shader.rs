//! Program queries taking names. A name containing NUL panics.

use crate::{ffi, marshal::gl_name, types::*};

#[cfg(test)]
mod test;

/// Location of uniform `name` in `program`, -1 if it is not an active uniform
#[track_caller]
pub fn get_uniform_location(program: GLuint, name: &str) -> GLint {
	let name = gl_name("glGetUniformLocation", name);
	unsafe { ffi::GetUniformLocation(program, name.as_ptr()) }
}

#[track_caller]
pub fn get_attrib_location(program: GLuint, name: &str) -> GLint {
	let name = gl_name("glGetAttribLocation", name);
	unsafe { ffi::GetAttribLocation(program, name.as_ptr()) }
}

#[track_caller]
pub fn bind_attrib_location(program: GLuint, index: GLuint, name: &str) {
	let name = gl_name("glBindAttribLocation", name);
	unsafe { ffi::BindAttribLocation(program, index, name.as_ptr()) }
}
