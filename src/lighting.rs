//! Fog, lights, the light model and materials.
//!
//! Vector forms check the buffer against the number of values the pname
//! carries (`FOG_COLOR` needs 4, `SPOT_DIRECTION` 3, scalars 1) before the
//! call, and panic naming the entry point if it is too short.

use crate::{
	ffi,
	marshal::check_min,
	types::*,
};


pub(crate) fn fog_param_count(pname: GLenum) -> usize {
	match pname {
		ffi::FOG_COLOR => 4,
		_ => 1,
	}
}

pub(crate) fn light_param_count(pname: GLenum) -> usize {
	match pname {
		ffi::AMBIENT | ffi::DIFFUSE | ffi::SPECULAR | ffi::POSITION => 4,
		ffi::SPOT_DIRECTION => 3,
		_ => 1,
	}
}

pub(crate) fn light_model_param_count(pname: GLenum) -> usize {
	match pname {
		ffi::LIGHT_MODEL_AMBIENT => 4,
		_ => 1,
	}
}

pub(crate) fn material_param_count(pname: GLenum) -> usize {
	match pname {
		ffi::AMBIENT | ffi::DIFFUSE | ffi::SPECULAR | ffi::EMISSION | ffi::AMBIENT_AND_DIFFUSE => 4,
		ffi::COLOR_INDEXES => 3,
		_ => 1,
	}
}

pub fn fogf(pname: GLenum, param: GLfloat) {
	unsafe { ffi::Fogf(pname, param) }
}

pub fn fogi(pname: GLenum, param: GLint) {
	unsafe { ffi::Fogi(pname, param) }
}

#[track_caller]
pub fn fogfv(pname: GLenum, params: &[GLfloat]) {
	check_min("glFogfv", pname, params, fog_param_count(pname));
	unsafe { ffi::Fogfv(pname, params.as_ptr()) }
}

#[track_caller]
pub fn fogiv(pname: GLenum, params: &[GLint]) {
	check_min("glFogiv", pname, params, fog_param_count(pname));
	unsafe { ffi::Fogiv(pname, params.as_ptr()) }
}

pub fn lightf(light: GLenum, pname: GLenum, param: GLfloat) {
	unsafe { ffi::Lightf(light, pname, param) }
}

pub fn lighti(light: GLenum, pname: GLenum, param: GLint) {
	unsafe { ffi::Lighti(light, pname, param) }
}

#[track_caller]
pub fn lightfv(light: GLenum, pname: GLenum, params: &[GLfloat]) {
	check_min("glLightfv", pname, params, light_param_count(pname));
	unsafe { ffi::Lightfv(light, pname, params.as_ptr()) }
}

#[track_caller]
pub fn lightiv(light: GLenum, pname: GLenum, params: &[GLint]) {
	check_min("glLightiv", pname, params, light_param_count(pname));
	unsafe { ffi::Lightiv(light, pname, params.as_ptr()) }
}

pub fn light_modelf(pname: GLenum, param: GLfloat) {
	unsafe { ffi::LightModelf(pname, param) }
}

pub fn light_modeli(pname: GLenum, param: GLint) {
	unsafe { ffi::LightModeli(pname, param) }
}

#[track_caller]
pub fn light_modelfv(pname: GLenum, params: &[GLfloat]) {
	check_min("glLightModelfv", pname, params, light_model_param_count(pname));
	unsafe { ffi::LightModelfv(pname, params.as_ptr()) }
}

#[track_caller]
pub fn light_modeliv(pname: GLenum, params: &[GLint]) {
	check_min("glLightModeliv", pname, params, light_model_param_count(pname));
	unsafe { ffi::LightModeliv(pname, params.as_ptr()) }
}

pub fn materialf(face: GLenum, pname: GLenum, param: GLfloat) {
	unsafe { ffi::Materialf(face, pname, param) }
}

pub fn materiali(face: GLenum, pname: GLenum, param: GLint) {
	unsafe { ffi::Materiali(face, pname, param) }
}

#[track_caller]
pub fn materialfv(face: GLenum, pname: GLenum, params: &[GLfloat]) {
	check_min("glMaterialfv", pname, params, material_param_count(pname));
	unsafe { ffi::Materialfv(face, pname, params.as_ptr()) }
}

#[track_caller]
pub fn materialiv(face: GLenum, pname: GLenum, params: &[GLint]) {
	check_min("glMaterialiv", pname, params, material_param_count(pname));
	unsafe { ffi::Materialiv(face, pname, params.as_ptr()) }
}

#[track_caller]
pub fn get_lightfv(light: GLenum, pname: GLenum, params: &mut [GLfloat]) {
	check_min("glGetLightfv", pname, params, light_param_count(pname));
	unsafe { ffi::GetLightfv(light, pname, params.as_mut_ptr()) }
}

#[track_caller]
pub fn get_lightiv(light: GLenum, pname: GLenum, params: &mut [GLint]) {
	check_min("glGetLightiv", pname, params, light_param_count(pname));
	unsafe { ffi::GetLightiv(light, pname, params.as_mut_ptr()) }
}

#[track_caller]
pub fn get_materialfv(face: GLenum, pname: GLenum, params: &mut [GLfloat]) {
	check_min("glGetMaterialfv", pname, params, material_param_count(pname));
	unsafe { ffi::GetMaterialfv(face, pname, params.as_mut_ptr()) }
}

#[track_caller]
pub fn get_materialiv(face: GLenum, pname: GLenum, params: &mut [GLint]) {
	check_min("glGetMaterialiv", pname, params, material_param_count(pname));
	unsafe { ffi::GetMaterialiv(face, pname, params.as_mut_ptr()) }
}
