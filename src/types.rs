//! Scalar vocabulary of the native API.
//!
//! These are aliases of the generated registry types, so a value of one of
//! these types can be handed to the raw entry points without conversion.

use std::{ffi::c_void, mem::size_of};

use crate::ffi::types;

pub type GLenum = types::GLenum;
pub type GLbitfield = types::GLbitfield;
pub type GLclampf = types::GLclampf;
pub type GLclampd = types::GLclampd;

pub type GLboolean = types::GLboolean;
pub type GLbyte = types::GLbyte;
pub type GLshort = types::GLshort;
pub type GLint = types::GLint;
pub type GLsizei = types::GLsizei;
pub type GLubyte = types::GLubyte;
pub type GLushort = types::GLushort;
pub type GLuint = types::GLuint;
pub type GLfloat = types::GLfloat;
pub type GLdouble = types::GLdouble;
pub type GLchar = types::GLchar;
pub type GLsizeiptr = types::GLsizeiptr;
pub type GLintptr = types::GLintptr;

/// Untyped native memory address
pub type Pointer = *mut c_void;

// widths are part of the ABI, a clamped float must never widen to 64 bits
const _: () = {
	assert!(size_of::<GLenum>() == 4);
	assert!(size_of::<GLbitfield>() == 4);
	assert!(size_of::<GLclampf>() == 4);
	assert!(size_of::<GLclampd>() == 8);
	assert!(size_of::<GLboolean>() == 1);
	assert!(size_of::<GLbyte>() == 1);
	assert!(size_of::<GLshort>() == 2);
	assert!(size_of::<GLint>() == 4);
	assert!(size_of::<GLsizei>() == 4);
	assert!(size_of::<GLubyte>() == 1);
	assert!(size_of::<GLushort>() == 2);
	assert!(size_of::<GLuint>() == 4);
	assert!(size_of::<GLfloat>() == 4);
	assert!(size_of::<GLdouble>() == 8);
	assert!(size_of::<Pointer>() == size_of::<usize>());
};
