use std::{env, fs::File, path::Path};

use gl_generator::{Api, Fallbacks, GlobalGenerator, Profile, Registry};

fn main() {
	let dest = env::var("OUT_DIR").unwrap();
	let mut file = File::create(Path::new(&dest).join("bindings.rs")).unwrap();

	// the fixed-function entry points only exist in the compatibility profile
	let extensions: [&str; 0] = [];
	Registry::new(Api::Gl, (4, 6), Profile::Compatibility, Fallbacks::All, extensions)
		.write_bindings(GlobalGenerator, &mut file)
		.unwrap();
}
