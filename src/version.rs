
use std::fmt;

/// Context version and extensions as reported by the driver
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GlVersion {
	pub ty: VersionType,
	pub major: u8,
	pub minor: u8,
	pub extensions: Vec<String>,
}

impl GlVersion {
	pub fn at_least(&self, gl: Option<(u8, u8)>, es: Option<(u8, u8)>) -> bool {
		match (self.ty, (self.major, self.minor), gl, es) {
			(VersionType::GL, (ma, mi), Some((rma, rmi)), _)
				if ma > rma || (ma == rma && mi >= rmi) =>
				true,
			(VersionType::ES, (ma, mi), _, Some((rma, rmi)))
				if ma > rma || (ma == rma && mi >= rmi) =>
				true,
			_ => false,
		}
	}

	/// Reported by the driver or promoted to core at this version
	pub fn supports(&self, extension: &GlExtension) -> bool {
		self.extensions.iter().any(|e| e == extension.name)
			|| self.at_least(extension.unlock_gl, extension.unlock_es)
	}

	/// `glewIsSupported`: every space separated token has to be available.
	///
	/// Tokens are either `GL_VERSION_<major>_<minor>` (`GL_ES_VERSION_...` for
	/// ES) or extension names.
	pub fn is_supported(&self, names: &str) -> bool {
		names.split_whitespace().all(|name| {
			if let Some(version) = name.strip_prefix("GL_ES_VERSION_") {
				parse_version_token(version).map_or(false, |v| self.at_least(None, Some(v)))
			} else if let Some(version) = name.strip_prefix("GL_VERSION_") {
				parse_version_token(version).map_or(false, |v| self.at_least(Some(v), None))
			} else if let Some(extension) = ext::by_name(name) {
				self.supports(extension)
			} else {
				self.extensions.iter().any(|e| e == name)
			}
		})
	}
}

fn parse_version_token(token: &str) -> Option<(u8, u8)> {
	let (major, minor) = token.split_once('_')?;
	Some((major.parse().ok()?, minor.parse().ok()?))
}

macro_rules! at_least {
	($v:expr, $(gl: $gl_major:literal . $gl_minor:literal)? $(, es: $es_major:literal . $es_minor:literal)?) => {
		$v.at_least(
			$crate::version::at_least!(opt $(($gl_major, $gl_minor))?),
			$crate::version::at_least!(opt $(($es_major, $es_minor))?),
		)
	};
	(opt ) => { None };
	(opt $($expr:tt)+) => { Some($($expr)*) };
}

#[allow(unused_imports)]
pub(crate) use at_least;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum VersionType {
	GL,
	ES,
}

pub struct GlExtension {
	pub name: &'static str,
	pub unlock_gl: Option<(u8, u8)>,
	pub unlock_es: Option<(u8, u8)>,
	pub provided_str: &'static str,
}

impl PartialEq for GlExtension {
	fn eq(&self, other: &Self) -> bool {
		self.name == other.name
	}
}

impl fmt::Debug for GlExtension {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name)
	}
}

impl GlVersion {
	/// Version with the extensions promoted to core at that version, plus
	/// `extensions`
	pub fn new(ty: VersionType, major: u8, minor: u8, extensions: &[&'static GlExtension]) -> Self {
		Self {
			ty,
			major,
			minor,
			extensions: {
				let mut ext: Vec<String> = ext::version_extensions(ty, major, minor)
					.into_iter()
					.map(|e| e.name.to_owned())
					.collect();
				for e in extensions {
					if !ext.iter().any(|n| n == e.name) {
						ext.push(e.name.to_owned());
					}
				}
				ext
			},
		}
	}

	pub fn from_extensions(extensions: &[&'static GlExtension]) -> Self {
		Self::new(VersionType::GL, 0, 0, extensions)
	}

	pub fn from_version(ty: VersionType, major: u8, minor: u8) -> Self {
		Self::new(ty, major, minor, &[])
	}

	pub fn clear() -> Self {
		Self::new(VersionType::GL, 0, 0, &[])
	}

	/// Parses a `GL_VERSION` string, `"4.6.0 NVIDIA 535.54"` or
	/// `"OpenGL ES 3.2 Mesa 23.1"`. Extensions are left empty.
	pub fn parse(version: &str) -> Option<Self> {
		let (ty, rest) = match version.trim_start().strip_prefix("OpenGL ES") {
			Some(rest) => (VersionType::ES, rest.trim_start_matches(|c: char| !c.is_ascii_digit())),
			None => (VersionType::GL, version.trim_start()),
		};

		let number = rest.split(|c: char| !(c.is_ascii_digit() || c == '.')).next()?;
		let mut parts = number.split('.');
		let major = parts.next()?.parse().ok()?;
		let minor = parts.next()?.parse().ok()?;

		Some(Self { ty, major, minor, extensions: Vec::new() })
	}
}

impl fmt::Display for GlVersion {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self.ty {
			VersionType::GL => write!(f, "OpenGL {}.{}", self.major, self.minor),
			VersionType::ES => write!(f, "OpenGL ES {}.{}", self.major, self.minor),
		}
	}
}

pub mod ext {
	use super::{GlExtension, VersionType};

	macro_rules! extensions {
		($($name:ident($(gl: $gl_major:literal . $gl_minor:literal)? $(, es: $es_major:literal . $es_minor:literal)?);)*) => {
			$(
				#[allow(unused, non_upper_case_globals)]
				pub const $name: GlExtension = GlExtension {
					name: concat!("GL_", stringify!($name)),
					unlock_gl: extensions!(opt| $(($gl_major, $gl_minor))?),
					unlock_es: extensions!(opt| $(($es_major, $es_minor))?),
					provided_str: concat!(
						"GL_", stringify!($name)
						$(, concat!(" or OpenGL ", $gl_major, ".", $gl_minor))?
						$(, concat!(" or OpenGL ES ", $es_major, ".", $es_minor))?
					),
				};
			)*

			pub(crate) fn version_extensions(ty: VersionType, major: u8, minor: u8) -> Vec<&'static GlExtension> {
				let mut extensions = Vec::new();
				$(
					match (ty, major, minor) {
						$((VersionType::GL, major, minor) if major > $gl_major || (major == $gl_major && minor >= $gl_minor)
							=> extensions.push(&$name),)?
						$((VersionType::ES, major, minor) if major > $es_major || (major == $es_major && minor >= $es_minor)
							=> extensions.push(&$name),)?
						_ => {},
					}
				)*

				extensions
			}

			/// Known extension by its full `GL_` name
			pub fn by_name(name: &str) -> Option<&'static GlExtension> {
				match name {
					$(n if n == $name.name => Some(&$name),)*
					_ => None,
				}
			}
		};
		(opt| ) => { None };
		(opt| $($expr:tt)+) => { Some($($expr)+) };
	}

	extensions! {
		ARB_multitexture(gl: 1 . 3);
		ARB_texture_cube_map(gl: 1 . 3, es: 2 . 0);
		ARB_vertex_buffer_object(gl: 1 . 5, es: 2 . 0);
		ARB_shader_objects(gl: 2 . 0, es: 2 . 0);
		ARB_texture_non_power_of_two(gl: 2 . 0, es: 3 . 0);
		ARB_framebuffer_object(gl: 3 . 0, es: 3 . 0);
		ARB_texture_rectangle(gl: 3 . 1);
		ARB_texture_buffer_object(gl: 3 . 1, es: 3 . 2);
		ARB_texture_swizzle(gl: 3 . 3, es: 3 . 0);
		ARB_buffer_storage(gl: 4 . 4);
		EXT_texture_filter_anisotropic(gl: 4 . 6);
	}
}
