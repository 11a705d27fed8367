use std::{panic::catch_unwind, ptr};

use super::*;

#[test]
fn bool_conversion() {
	assert_eq!(gl_bool(true), 1);
	assert_eq!(gl_bool(false), 0);

	for v in 0..=u8::MAX {
		assert_eq!(from_gl_bool(v), v != 0);
	}
}

#[test]
fn data_null() {
	let data = Data::Null;
	assert!(data.as_ptr().is_null());
	assert_eq!(data.byte_len(), None);
	assert_eq!(Data::default(), Data::Null);
}

#[test]
fn data_offset() {
	let data: Data = 64usize.into();
	assert_eq!(data.as_ptr() as usize, 64);
	assert_eq!(data.byte_len(), None);
}

#[test]
fn data_single() {
	let value = 7.5f32;
	let data: Data = (&value).into();
	assert_eq!(data.as_ptr(), &value as *const f32 as *const c_void);
	assert_eq!(data.byte_len(), Some(4));
}

#[test]
fn data_slices() {
	let values = [1u16, 2, 3];
	let data: Data = (&values).into();
	assert!(matches!(data, Data::Slice(_, 3)));
	assert_eq!(data.as_ptr(), values.as_ptr() as *const c_void);
	assert_eq!(data.byte_len(), Some(6));

	let vec = vec![[0f64; 2]; 5];
	let data: Data = (&vec).into();
	assert!(matches!(data, Data::Slice(_, 5)));
	assert_eq!(data.as_ptr(), vec.as_ptr() as *const c_void);
	assert_eq!(data.byte_len(), Some(80));

	let data: Data = (&values[1..]).into();
	assert_eq!(data.as_ptr(), &values[1] as *const u16 as *const c_void);
}

fn plain<T: Plain>() {}

#[test]
fn plain_elements() {
	plain::<u8>();
	plain::<i64>();
	plain::<[f32; 3]>();
	plain::<[[u16; 2]; 4]>();

	let rows = [[1u8, 2], [3, 4]];
	let data: Data = (&rows[..]).into();
	assert!(matches!(data, Data::Slice(_, 2)));
	assert_eq!(data.byte_len(), Some(4));
}

#[test]
fn data_empty_slice() {
	let empty: &[u8] = &[];
	let data: Data = empty.into();
	assert_eq!(data.byte_len(), Some(0));
	assert!(catch_unwind(|| data.as_ptr()).is_err());

	let mut empty: Vec<u32> = Vec::new();
	let mut data: DataMut = (&mut empty).into();
	assert!(catch_unwind(std::panic::AssertUnwindSafe(|| data.as_mut_ptr())).is_err());
}

#[test]
fn data_mut() {
	let mut values = [0i32; 4];
	let expected = values.as_mut_ptr() as *mut c_void;
	let mut data: DataMut = (&mut values).into();
	assert_eq!(data.as_mut_ptr(), expected);
	assert_eq!(data.byte_len(), Some(16));

	let mut value = 0u8;
	let expected = &mut value as *mut u8 as *mut c_void;
	let mut data: DataMut = (&mut value).into();
	assert_eq!(data.as_mut_ptr(), expected);

	assert!(DataMut::Null.as_mut_ptr().is_null());
	assert_eq!(DataMut::from(12usize).as_mut_ptr() as usize, 12);
}

#[test]
fn string_round_trip() {
	let s = to_gl_string("GL_ARB_multitexture").unwrap();
	let back = unsafe { from_gl_string(s.as_ptr() as *const GLubyte) };
	assert_eq!(back.as_deref(), Some("GL_ARB_multitexture"));

	let empty = to_gl_string("").unwrap();
	assert_eq!(empty.as_bytes_with_nul(), b"\0");
}

#[test]
fn string_interior_nul() {
	assert_eq!(to_gl_string("a\0b"), Err(StringError::InteriorNul("a\0b".to_owned())));
}

#[test]
fn string_null() {
	assert_eq!(unsafe { from_gl_string(ptr::null()) }, None);
}

#[test]
fn guards() {
	check_min("glFogfv", 0x0B66, &[0.0f32; 4], 4);
	check_non_empty("glMap1f", &[0.0f32]);
	check_len_one_of("glTexEnvfv", &[0.0f32], &[1, 4]);
	check_same_len("glPrioritizeTextures", &[1u32, 2], &[0.5f32, 1.0]);

	let short = catch_unwind(|| check_min("glFogfv", 0x0B66, &[0.0f32; 3], 4)).unwrap_err();
	let message = short.downcast_ref::<String>().unwrap();
	assert!(message.contains("glFogfv"));
	assert!(message.contains("0x0b66"));

	assert!(catch_unwind(|| check_non_empty::<f32>("glMap1f", &[])).is_err());
	assert!(catch_unwind(|| check_len_one_of("glTexEnvfv", &[0.0f32; 2], &[1, 4])).is_err());
	assert!(catch_unwind(|| check_same_len("glPrioritizeTextures", &[1u32], &[0.5f32, 1.0])).is_err());
}

#[test]
fn names() {
	assert_eq!(gl_name("glGetUniformLocation", "color").as_bytes(), b"color");
	assert!(catch_unwind(|| gl_name("glGetUniformLocation", "co\0lor")).is_err());
	assert_eq!(gl_len("glSelectBuffer", &[0u32; 3]), 3);
}
