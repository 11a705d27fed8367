//! Texture and buffer object tracking for the mock context.

use std::{collections::HashMap, fmt};

use enum_map::{Enum, EnumArray, EnumMap};

use super::log::{debug, error, warning};
use crate::{
	ffi,
	types::{GLenum, GLuint},
	version::GlVersion,
};

pub mod gl_functions;

/// Binding point of an object kind
pub trait Target: EnumArray<GLuint> + Copy + fmt::Display {
	fn from_gl(target: GLenum) -> Option<Self>;
	/// Target whose binding `pname` queries, as `glGetIntegerv` takes it
	fn from_binding(pname: GLenum) -> Option<Self>;
	/// Logs an error when the target is unavailable in `version`
	fn check_version(&self, version: &GlVersion);
}

macro_rules! gl_enum {
	($ename:ident { $($name:ident => $binding:ident ($($ver:tt)*);)* }) => {
		#[derive(Copy, Clone, Debug, PartialEq, Eq, Enum)]
		#[allow(non_camel_case_types)]
		pub enum $ename {
			$($name,)*
		}

		impl Target for $ename {
			fn from_gl(target: GLenum) -> Option<Self> {
				match target {
					$(ffi::$name => Some(Self::$name),)*
					_ => None,
				}
			}

			fn from_binding(pname: GLenum) -> Option<Self> {
				match pname {
					$(ffi::$binding => Some(Self::$name),)*
					_ => None,
				}
			}

			fn check_version(&self, version: &GlVersion) {
				match self {
					$(Self::$name => {
						if !$crate::version::at_least!(version, $($ver)*) {
							error!("GL_{} requires {}", stringify!($name), stringify!($($ver)*));
						}
					})*
				}
			}
		}

		impl fmt::Display for $ename {
			fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
				match self {
					$(Self::$name => f.write_str(concat!("GL_", stringify!($name))),)*
				}
			}
		}
	};
}

gl_enum! {
	TextureTarget {
		TEXTURE_1D => TEXTURE_BINDING_1D(gl: 1 . 1);
		TEXTURE_2D => TEXTURE_BINDING_2D(gl: 1 . 1, es: 2 . 0);
		TEXTURE_3D => TEXTURE_BINDING_3D(gl: 1 . 2, es: 3 . 0);
		TEXTURE_CUBE_MAP => TEXTURE_BINDING_CUBE_MAP(gl: 1 . 3, es: 2 . 0);
		TEXTURE_RECTANGLE => TEXTURE_BINDING_RECTANGLE(gl: 3 . 1);
		TEXTURE_1D_ARRAY => TEXTURE_BINDING_1D_ARRAY(gl: 3 . 0);
		TEXTURE_2D_ARRAY => TEXTURE_BINDING_2D_ARRAY(gl: 3 . 0, es: 3 . 0);
		TEXTURE_BUFFER => TEXTURE_BINDING_BUFFER(gl: 3 . 1, es: 3 . 2);
		TEXTURE_2D_MULTISAMPLE => TEXTURE_BINDING_2D_MULTISAMPLE(gl: 3 . 2, es: 3 . 1);
	}
}

macro_rules! buffer_targets {
	($($name:ident($($ver:tt)*);)*) => {
		paste::paste! {
			gl_enum! {
				BufferTarget {
					$($name => [<$name _BINDING>]($($ver)*);)*
				}
			}
		}
	};
}

buffer_targets! {
	ARRAY_BUFFER(gl: 1 . 5, es: 2 . 0);
	ELEMENT_ARRAY_BUFFER(gl: 1 . 5, es: 2 . 0);
	PIXEL_PACK_BUFFER(gl: 2 . 1, es: 3 . 0);
	PIXEL_UNPACK_BUFFER(gl: 2 . 1, es: 3 . 0);
	COPY_READ_BUFFER(gl: 3 . 1, es: 3 . 0);
	COPY_WRITE_BUFFER(gl: 3 . 1, es: 3 . 0);
	TEXTURE_BUFFER(gl: 3 . 1, es: 3 . 2);
	UNIFORM_BUFFER(gl: 3 . 1, es: 3 . 0);
	DRAW_INDIRECT_BUFFER(gl: 4 . 0, es: 3 . 1);
}

/// Name allocation and binding state for one object kind
pub struct ObjectManager<T: Target> {
	kind: &'static str,
	next_name: GLuint,
	active: HashMap<GLuint, Option<Vec<u8>>>,
	deleted: Vec<GLuint>,
	bound: EnumMap<T, GLuint>,
}

impl<T: Target> ObjectManager<T> {
	pub fn new(kind: &'static str) -> Self {
		Self {
			kind,
			// 0 is reserved for "no object"
			next_name: 1,
			active: HashMap::new(),
			deleted: Vec::new(),
			bound: EnumMap::default(),
		}
	}

	pub fn gen(&mut self, names: &mut [GLuint]) {
		for name in names.iter_mut() {
			*name = self.next_name;
			self.next_name += 1;
			self.active.insert(*name, None);
		}

		debug!("created {} {}(s) {:?}", names.len(), self.kind, names);
	}

	pub fn free(&mut self, names: &[GLuint]) {
		for &name in names {
			if name == 0 {
				// deleting 0 is silently ignored
			} else if self.deleted.contains(&name) {
				warning!("double freed {} {}", self.kind, name);
			} else if self.active.remove(&name).is_none() {
				warning!("attempted to free unallocated {} {}", self.kind, name);
			} else {
				self.deleted.push(name);
				for (_, bound) in self.bound.iter_mut() {
					if *bound == name {
						*bound = 0;
					}
				}
				debug!("freed {} {}", self.kind, name);
			}
		}
	}

	pub fn is(&self, name: GLuint) -> bool {
		self.active.contains_key(&name)
	}

	/// Returns the GL error the call raises, if any
	pub fn bind(&mut self, version: &GlVersion, target: GLenum, name: GLuint) -> Option<GLenum> {
		let Some(target) = T::from_gl(target) else {
			error!("invalid {} target {:#06x}", self.kind, target);
			return Some(ffi::INVALID_ENUM)
		};

		target.check_version(version);

		if name != 0 && !self.active.contains_key(&name) {
			error!("bound unallocated {} {} to {}", self.kind, name, target);
			return Some(ffi::INVALID_OPERATION)
		}

		self.bound[target] = name;
		debug!("bound {} {} to {}", self.kind, name, target);
		None
	}

	/// Object bound to the target `pname` queries, `None` if `pname` is not a
	/// binding query of this kind
	pub fn binding(&self, pname: GLenum) -> Option<GLuint> {
		T::from_binding(pname).map(|target| self.bound[target])
	}

	pub fn bound(&self, target: GLenum) -> Option<GLuint> {
		T::from_gl(target).map(|target| self.bound[target])
	}

	pub fn set_storage(&mut self, name: GLuint, data: Vec<u8>) {
		if let Some(storage) = self.active.get_mut(&name) {
			*storage = Some(data);
		}
	}

	pub fn storage(&self, name: GLuint) -> Option<&[u8]> {
		self.active.get(&name)?.as_deref()
	}

	pub fn finalize(self) {
		if !self.active.is_empty() {
			let mut names = self.active.keys().collect::<Vec<_>>();
			names.sort();
			error!("classic-gl mock context was finalized with dangling {}s {:?}", self.kind, names);
		}
	}
}
