//! Pipeline state: blending, stencil, depth, clearing, rasterization and
//! attribute stacks.

use crate::{
	ffi,
	marshal::{from_gl_bool, gl_bool},
	types::*,
};


pub fn active_texture(texture: GLenum) {
	unsafe { ffi::ActiveTexture(texture) }
}

pub fn blend_color(red: GLclampf, green: GLclampf, blue: GLclampf, alpha: GLclampf) {
	unsafe { ffi::BlendColor(red, green, blue, alpha) }
}

pub fn blend_equation(mode: GLenum) {
	unsafe { ffi::BlendEquation(mode) }
}

pub fn blend_equation_separate(mode_rgb: GLenum, mode_alpha: GLenum) {
	unsafe { ffi::BlendEquationSeparate(mode_rgb, mode_alpha) }
}

pub fn blend_func(sfactor: GLenum, dfactor: GLenum) {
	unsafe { ffi::BlendFunc(sfactor, dfactor) }
}

pub fn blend_func_separate(src_rgb: GLenum, dst_rgb: GLenum, src_alpha: GLenum, dst_alpha: GLenum) {
	unsafe { ffi::BlendFuncSeparate(src_rgb, dst_rgb, src_alpha, dst_alpha) }
}

pub fn sample_coverage(value: GLclampf, invert: bool) {
	unsafe { ffi::SampleCoverage(value, gl_bool(invert)) }
}

pub fn stencil_func(func: GLenum, reference: GLint, mask: GLuint) {
	unsafe { ffi::StencilFunc(func, reference, mask) }
}

pub fn stencil_func_separate(face: GLenum, func: GLenum, reference: GLint, mask: GLuint) {
	unsafe { ffi::StencilFuncSeparate(face, func, reference, mask) }
}

pub fn stencil_mask(mask: GLuint) {
	unsafe { ffi::StencilMask(mask) }
}

pub fn stencil_mask_separate(face: GLenum, mask: GLuint) {
	unsafe { ffi::StencilMaskSeparate(face, mask) }
}

pub fn stencil_op(fail: GLenum, zfail: GLenum, zpass: GLenum) {
	unsafe { ffi::StencilOp(fail, zfail, zpass) }
}

pub fn stencil_op_separate(face: GLenum, sfail: GLenum, dpfail: GLenum, dppass: GLenum) {
	unsafe { ffi::StencilOpSeparate(face, sfail, dpfail, dppass) }
}

pub fn accum(op: GLenum, value: GLfloat) {
	unsafe { ffi::Accum(op, value) }
}

pub fn alpha_func(func: GLenum, reference: GLclampf) {
	unsafe { ffi::AlphaFunc(func, reference) }
}

pub fn clear(mask: GLbitfield) {
	unsafe { ffi::Clear(mask) }
}

pub fn clear_accum(red: GLfloat, green: GLfloat, blue: GLfloat, alpha: GLfloat) {
	unsafe { ffi::ClearAccum(red, green, blue, alpha) }
}

pub fn clear_color(red: GLclampf, green: GLclampf, blue: GLclampf, alpha: GLclampf) {
	unsafe { ffi::ClearColor(red, green, blue, alpha) }
}

pub fn clear_depth(depth: GLclampd) {
	unsafe { ffi::ClearDepth(depth) }
}

pub fn clear_index(c: GLfloat) {
	unsafe { ffi::ClearIndex(c) }
}

pub fn clear_stencil(s: GLint) {
	unsafe { ffi::ClearStencil(s) }
}

/// Plane equation coefficients `a`, `b`, `c`, `d`
pub fn clip_plane(plane: GLenum, equation: &[GLdouble; 4]) {
	unsafe { ffi::ClipPlane(plane, equation.as_ptr()) }
}

pub fn color_mask(red: bool, green: bool, blue: bool, alpha: bool) {
	unsafe { ffi::ColorMask(gl_bool(red), gl_bool(green), gl_bool(blue), gl_bool(alpha)) }
}

pub fn color_material(face: GLenum, mode: GLenum) {
	unsafe { ffi::ColorMaterial(face, mode) }
}

pub fn cull_face(mode: GLenum) {
	unsafe { ffi::CullFace(mode) }
}

pub fn depth_func(func: GLenum) {
	unsafe { ffi::DepthFunc(func) }
}

pub fn depth_mask(flag: bool) {
	unsafe { ffi::DepthMask(gl_bool(flag)) }
}

pub fn depth_range(z_near: GLclampd, z_far: GLclampd) {
	unsafe { ffi::DepthRange(z_near, z_far) }
}

pub fn enable(cap: GLenum) {
	unsafe { ffi::Enable(cap) }
}

pub fn disable(cap: GLenum) {
	unsafe { ffi::Disable(cap) }
}

pub fn is_enabled(cap: GLenum) -> bool {
	from_gl_bool(unsafe { ffi::IsEnabled(cap) })
}

pub fn draw_buffer(mode: GLenum) {
	unsafe { ffi::DrawBuffer(mode) }
}

pub fn read_buffer(mode: GLenum) {
	unsafe { ffi::ReadBuffer(mode) }
}

pub fn finish() {
	unsafe { ffi::Finish() }
}

pub fn flush() {
	unsafe { ffi::Flush() }
}

pub fn front_face(mode: GLenum) {
	unsafe { ffi::FrontFace(mode) }
}

pub fn hint(target: GLenum, mode: GLenum) {
	unsafe { ffi::Hint(target, mode) }
}

pub fn index_mask(mask: GLuint) {
	unsafe { ffi::IndexMask(mask) }
}

pub fn line_stipple(factor: GLint, pattern: GLushort) {
	unsafe { ffi::LineStipple(factor, pattern) }
}

pub fn line_width(width: GLfloat) {
	unsafe { ffi::LineWidth(width) }
}

pub fn logic_op(opcode: GLenum) {
	unsafe { ffi::LogicOp(opcode) }
}

pub fn point_size(size: GLfloat) {
	unsafe { ffi::PointSize(size) }
}

pub fn polygon_mode(face: GLenum, mode: GLenum) {
	unsafe { ffi::PolygonMode(face, mode) }
}

pub fn polygon_offset(factor: GLfloat, units: GLfloat) {
	unsafe { ffi::PolygonOffset(factor, units) }
}

/// 32x32 stipple pattern, one bit per pixel
pub fn polygon_stipple(mask: &[GLubyte; 128]) {
	unsafe { ffi::PolygonStipple(mask.as_ptr()) }
}

pub fn push_attrib(mask: GLbitfield) {
	unsafe { ffi::PushAttrib(mask) }
}

pub fn pop_attrib() {
	unsafe { ffi::PopAttrib() }
}

pub fn push_client_attrib(mask: GLbitfield) {
	unsafe { ffi::PushClientAttrib(mask) }
}

pub fn pop_client_attrib() {
	unsafe { ffi::PopClientAttrib() }
}

pub fn scissor(x: GLint, y: GLint, width: GLsizei, height: GLsizei) {
	unsafe { ffi::Scissor(x, y, width, height) }
}

pub fn viewport(x: GLint, y: GLint, width: GLsizei, height: GLsizei) {
	unsafe { ffi::Viewport(x, y, width, height) }
}

pub fn shade_model(mode: GLenum) {
	unsafe { ffi::ShadeModel(mode) }
}
