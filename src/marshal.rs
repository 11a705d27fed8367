//! Conversions between Rust values and the shapes the native calls expect.

use std::{
	ffi::{c_char, c_void, CStr, CString},
	marker::PhantomData,
	mem::size_of_val,
	ptr,
};

use crate::{
	error::StringError,
	types::{GLboolean, GLenum, GLsizei, GLubyte},
};

#[cfg(test)]
mod test;

pub fn gl_bool(v: bool) -> GLboolean {
	if v {
		1
	} else {
		0
	}
}

/// Any non-zero encoding counts as true
pub fn from_gl_bool(v: GLboolean) -> bool {
	v != 0
}

mod sealed {
	pub trait Sealed {}
}

/// Native scalar types a single-value buffer argument may point at
pub trait Element: sealed::Sealed + Copy {}

/// Types a slice buffer argument may hold: [`Element`]s and arrays of them.
///
/// Anything owning memory of its own is refused:
///
/// ```compile_fail
/// let names = ["vertex".to_owned()];
/// let _: classic_gl::Data = (&names[..]).into();
/// ```
pub trait Plain: sealed::Sealed + Copy {}

macro_rules! elements {
	($($ty:ty),*) => {
		$(
			impl sealed::Sealed for $ty {}
			impl Element for $ty {}
			impl Plain for $ty {}
		)*
	};
}

elements!(i8, u8, i16, u16, i32, u32, i64, u64, f32, f64);

impl<T: Plain, const N: usize> sealed::Sealed for [T; N] {}
impl<T: Plain, const N: usize> Plain for [T; N] {}

/// Address of borrowed storage, valid for `'a`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Addr<'a> {
	ptr: *const c_void,
	bytes: usize,
	_marker: PhantomData<&'a ()>,
}

impl<'a> Addr<'a> {
	fn of<T: ?Sized>(value: &'a T) -> Self {
		Self {
			ptr: value as *const T as *const c_void,
			bytes: size_of_val(value),
			_marker: PhantomData,
		}
	}

	pub fn as_ptr(&self) -> *const c_void {
		self.ptr
	}

	/// Size of the referenced storage in bytes
	pub fn bytes(&self) -> usize {
		self.bytes
	}
}

/// Read-only bulk data argument.
///
/// `Null` asks the native side to use the bound buffer object with no offset,
/// `Offset` is passed through verbatim (an offset into the bound buffer
/// object, or an address the caller already computed).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Data<'a> {
	#[default]
	Null,
	Offset(usize),
	Single(Addr<'a>),
	Slice(Addr<'a>, usize),
}

impl<'a> Data<'a> {
	/// Address of the first storage unit.
	///
	/// Panics on an empty slice, which has no first element to point at.
	#[track_caller]
	pub fn as_ptr(&self) -> *const c_void {
		match *self {
			Data::Null => ptr::null(),
			Data::Offset(offset) => offset as *const c_void,
			Data::Single(addr) => addr.as_ptr(),
			Data::Slice(_, 0) => panic!("buffer argument is an empty slice"),
			Data::Slice(addr, _) => addr.as_ptr(),
		}
	}

	/// Byte length of borrowed storage, `None` for null and offsets
	pub fn byte_len(&self) -> Option<usize> {
		match self {
			Data::Null | Data::Offset(_) => None,
			Data::Single(addr) | Data::Slice(addr, _) => Some(addr.bytes()),
		}
	}
}

impl<'a, T: Element> From<&'a T> for Data<'a> {
	fn from(value: &'a T) -> Self {
		Data::Single(Addr::of(value))
	}
}

impl<'a, T: Plain> From<&'a [T]> for Data<'a> {
	fn from(values: &'a [T]) -> Self {
		Data::Slice(Addr::of(values), values.len())
	}
}

impl<'a, T: Plain, const N: usize> From<&'a [T; N]> for Data<'a> {
	fn from(values: &'a [T; N]) -> Self {
		Data::Slice(Addr::of(values), N)
	}
}

impl<'a, T: Plain> From<&'a Vec<T>> for Data<'a> {
	fn from(values: &'a Vec<T>) -> Self {
		values.as_slice().into()
	}
}

impl From<usize> for Data<'_> {
	fn from(offset: usize) -> Self {
		Data::Offset(offset)
	}
}

/// Mutable address of borrowed storage, valid for `'a`
#[derive(Debug, PartialEq, Eq)]
pub struct AddrMut<'a> {
	ptr: *mut c_void,
	bytes: usize,
	_marker: PhantomData<&'a mut ()>,
}

impl<'a> AddrMut<'a> {
	fn of<T: ?Sized>(value: &'a mut T) -> Self {
		Self {
			bytes: size_of_val(value),
			ptr: value as *mut T as *mut c_void,
			_marker: PhantomData,
		}
	}

	pub fn as_mut_ptr(&self) -> *mut c_void {
		self.ptr
	}

	pub fn bytes(&self) -> usize {
		self.bytes
	}
}

/// Bulk data argument the native side writes through
#[derive(Debug, Default, PartialEq, Eq)]
pub enum DataMut<'a> {
	#[default]
	Null,
	Offset(usize),
	Single(AddrMut<'a>),
	Slice(AddrMut<'a>, usize),
}

impl<'a> DataMut<'a> {
	#[track_caller]
	pub fn as_mut_ptr(&mut self) -> *mut c_void {
		match self {
			DataMut::Null => ptr::null_mut(),
			DataMut::Offset(offset) => *offset as *mut c_void,
			DataMut::Single(addr) => addr.as_mut_ptr(),
			DataMut::Slice(_, 0) => panic!("buffer argument is an empty slice"),
			DataMut::Slice(addr, _) => addr.as_mut_ptr(),
		}
	}

	pub fn byte_len(&self) -> Option<usize> {
		match self {
			DataMut::Null | DataMut::Offset(_) => None,
			DataMut::Single(addr) | DataMut::Slice(addr, _) => Some(addr.bytes()),
		}
	}
}

impl<'a, T: Element> From<&'a mut T> for DataMut<'a> {
	fn from(value: &'a mut T) -> Self {
		DataMut::Single(AddrMut::of(value))
	}
}

impl<'a, T: Plain> From<&'a mut [T]> for DataMut<'a> {
	fn from(values: &'a mut [T]) -> Self {
		let len = values.len();
		DataMut::Slice(AddrMut::of(values), len)
	}
}

impl<'a, T: Plain, const N: usize> From<&'a mut [T; N]> for DataMut<'a> {
	fn from(values: &'a mut [T; N]) -> Self {
		DataMut::Slice(AddrMut::of(values), N)
	}
}

impl<'a, T: Plain> From<&'a mut Vec<T>> for DataMut<'a> {
	fn from(values: &'a mut Vec<T>) -> Self {
		values.as_mut_slice().into()
	}
}

impl From<usize> for DataMut<'_> {
	fn from(offset: usize) -> Self {
		DataMut::Offset(offset)
	}
}

/// Allocates the NUL-terminated form of `s`; dropping it releases the memory.
pub fn to_gl_string(s: &str) -> Result<CString, StringError> {
	CString::new(s).map_err(|_| StringError::InteriorNul(s.to_owned()))
}

/// Copies a driver-owned NUL-terminated string.
///
/// # Safety
///
/// `ptr` must be null or point to a NUL-terminated string that stays valid
/// for the duration of the call.
pub unsafe fn from_gl_string(ptr: *const GLubyte) -> Option<String> {
	if ptr.is_null() {
		return None
	}

	Some(CStr::from_ptr(ptr as *const c_char).to_string_lossy().into_owned())
}

/// Like [`to_gl_string`] for names handed straight to an entry point
#[track_caller]
pub(crate) fn gl_name(func: &str, name: &str) -> CString {
	match to_gl_string(name) {
		Ok(name) => name,
		Err(err) => panic!("{}: {}", func, err),
	}
}

#[track_caller]
pub(crate) fn check_non_empty<T>(func: &str, params: &[T]) {
	if params.is_empty() {
		panic!("{}: buffer must not be empty", func);
	}
}

#[track_caller]
pub(crate) fn check_min<T>(func: &str, pname: GLenum, params: &[T], required: usize) {
	if params.len() < required {
		panic!(
			"{}: pname {:#06x} requires at least {} element(s), got {}",
			func,
			pname,
			required,
			params.len()
		);
	}
}

#[track_caller]
pub(crate) fn check_len_one_of<T>(func: &str, params: &[T], allowed: &[usize]) {
	if !allowed.contains(&params.len()) {
		panic!("{}: buffer length must be one of {:?}, got {}", func, allowed, params.len());
	}
}

#[track_caller]
pub(crate) fn check_same_len<A, B>(func: &str, a: &[A], b: &[B]) {
	if a.len() != b.len() {
		panic!("{}: parallel buffers differ in length ({} and {})", func, a.len(), b.len());
	}
}

/// Number of elements the native call touches for a slice of `T`, as `GLsizei`
#[track_caller]
pub(crate) fn gl_len<T>(func: &str, values: &[T]) -> GLsizei {
	match values.len().try_into() {
		Ok(len) => len,
		Err(_) => panic!("{}: {} elements exceed the native count range", func, values.len()),
	}
}
