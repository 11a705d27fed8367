use std::{ffi::c_void, ptr};

use super::{functions, objects, MockContextRef};

/// Defines mocked entry points and a `lookup` resolving their GL names.
///
/// Bodies run in an unsafe context since they read raw argument pointers.
macro_rules! gl_functions {
	($(fn $name:ident($($arg:ident: $ty:ty),* $(,)?) $(-> $ret:ty)? $body:block)*) => {
		$(
			#[allow(non_snake_case)]
			extern "system" fn $name($($arg: $ty),*) $(-> $ret)? {
				#[allow(unused_unsafe)]
				unsafe { $body }
			}
		)*

		pub(in crate::mock) fn lookup(func: &str) -> Option<*const ::std::ffi::c_void> {
			match func {
				$(stringify!($name) => Some($name as *const ::std::ffi::c_void),)*
				_ => None,
			}
		}
	};
}

pub(crate) use gl_functions;

impl MockContextRef {
	/// Function supplying addresses of mocked OpenGL functions.
	///
	/// Unmocked names resolve to null, so the bindings report them as not
	/// loaded.
	pub fn get_proc_address(&self, func: &str) -> *const c_void {
		functions::lookup(func)
			.or_else(|| objects::gl_functions::lookup(func))
			.unwrap_or(ptr::null())
	}
}
