//! Immediate mode: `glBegin`/`glEnd` and the per-vertex attribute families.
//!
//! Every family member is its own function forwarding to its own entry point,
//! `color3ub` to `glColor3ub`, `color3ubv` to `glColor3ubv` and so on. Vector
//! forms take arrays, so their length is fixed by the type.

use crate::{ffi, marshal::gl_bool, types::*};

#[cfg(test)]
mod test;

/// Emits `<func><n><suffix>` and `<func><n><suffix>v` for each listed type
macro_rules! vector_fns {
	($func:ident, $gl:ident, $n:tt, $args:tt, [$($suffix:ident: $ty:ty),+ $(,)?]) => {
		$(vector_fns!(@one $func, $gl, $n, $args, $suffix, $ty);)+
	};
	(@one $func:ident, $gl:ident, $n:tt, ($($arg:ident),+), $suffix:ident, $ty:ty) => {
		paste::paste! {
			pub fn [<$func $n $suffix>]($($arg: $ty),+) {
				unsafe { ffi::[<$gl $n $suffix>]($($arg),+) }
			}

			pub fn [<$func $n $suffix v>](v: &[$ty; $n]) {
				unsafe { ffi::[<$gl $n $suffix v>](v.as_ptr()) }
			}
		}
	};
}

pub(crate) use vector_fns;

pub fn begin(mode: GLenum) {
	unsafe { ffi::Begin(mode) }
}

pub fn end() {
	unsafe { ffi::End() }
}

pub fn edge_flag(flag: bool) {
	unsafe { ffi::EdgeFlag(gl_bool(flag)) }
}

/// Sends `flag[0]`; an empty slice sends nothing
pub fn edge_flagv(flag: &[bool]) {
	if let Some(&first) = flag.first() {
		let staged = gl_bool(first);
		unsafe { ffi::EdgeFlagv(&staged) }
	}
}

vector_fns!(color, Color, 3, (red, green, blue), [
	b: GLbyte,
	d: GLdouble,
	f: GLfloat,
	i: GLint,
	s: GLshort,
	ub: GLubyte,
	ui: GLuint,
	us: GLushort,
]);

vector_fns!(color, Color, 4, (red, green, blue, alpha), [
	b: GLbyte,
	d: GLdouble,
	f: GLfloat,
	i: GLint,
	s: GLshort,
	ub: GLubyte,
	ui: GLuint,
	us: GLushort,
]);

vector_fns!(normal, Normal, 3, (nx, ny, nz), [b: GLbyte, d: GLdouble, f: GLfloat, i: GLint, s: GLshort]);

vector_fns!(vertex, Vertex, 2, (x, y), [d: GLdouble, f: GLfloat, i: GLint, s: GLshort]);
vector_fns!(vertex, Vertex, 3, (x, y, z), [d: GLdouble, f: GLfloat, i: GLint, s: GLshort]);
vector_fns!(vertex, Vertex, 4, (x, y, z, w), [d: GLdouble, f: GLfloat, i: GLint, s: GLshort]);

vector_fns!(raster_pos, RasterPos, 2, (x, y), [d: GLdouble, f: GLfloat, i: GLint, s: GLshort]);
vector_fns!(raster_pos, RasterPos, 3, (x, y, z), [d: GLdouble, f: GLfloat, i: GLint, s: GLshort]);
vector_fns!(raster_pos, RasterPos, 4, (x, y, z, w), [d: GLdouble, f: GLfloat, i: GLint, s: GLshort]);

vector_fns!(tex_coord, TexCoord, 1, (s), [d: GLdouble, f: GLfloat, i: GLint, s: GLshort]);
vector_fns!(tex_coord, TexCoord, 2, (s, t), [d: GLdouble, f: GLfloat, i: GLint, s: GLshort]);
vector_fns!(tex_coord, TexCoord, 3, (s, t, r), [d: GLdouble, f: GLfloat, i: GLint, s: GLshort]);
vector_fns!(tex_coord, TexCoord, 4, (s, t, r, q), [d: GLdouble, f: GLfloat, i: GLint, s: GLshort]);

macro_rules! index_fns {
	($($suffix:ident: $ty:ty),+) => {
		paste::paste! {
			$(
				pub fn [<index $suffix>](c: $ty) {
					unsafe { ffi::[<Index $suffix>](c) }
				}

				pub fn [<index $suffix v>](c: &$ty) {
					unsafe { ffi::[<Index $suffix v>](c) }
				}
			)+
		}
	};
}

index_fns!(d: GLdouble, f: GLfloat, i: GLint, s: GLshort, ub: GLubyte);

macro_rules! rect_fns {
	($($suffix:ident: $ty:ty),+) => {
		paste::paste! {
			$(
				pub fn [<rect $suffix>](x1: $ty, y1: $ty, x2: $ty, y2: $ty) {
					unsafe { ffi::[<Rect $suffix>](x1, y1, x2, y2) }
				}

				/// Opposite corners `v1` and `v2`
				pub fn [<rect $suffix v>](v1: &[$ty; 2], v2: &[$ty; 2]) {
					unsafe { ffi::[<Rect $suffix v>](v1.as_ptr(), v2.as_ptr()) }
				}
			)+
		}
	};
}

rect_fns!(d: GLdouble, f: GLfloat, i: GLint, s: GLshort);
