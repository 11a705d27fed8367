//! Raw entry points and constants generated from the Khronos registry.
//!
//! Everything in here is `unsafe` and takes native pointers. The safe
//! wrappers at the crate root are the intended interface; the constants are
//! re-exported there as well.

#![allow(clippy::all, non_upper_case_globals, non_snake_case, unused)]

include!(concat!(env!("OUT_DIR"), "/bindings.rs"));
