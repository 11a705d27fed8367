use std::fmt;

use backtrace::{BacktraceFmt, PrintFmt};

// Never panics: these run inside mocked entry points, where unwinding aborts.
macro_rules! error {
	($fmt:literal $(, $($tt:tt)*)?) => {{
		$crate::mock::meta().any_errors = true;
		::log::error!(
			target: "classic-gl-mock",
			concat!($fmt, "\n{:#?}") $(, $($tt)*)?, $crate::mock::log::CurrentBacktrace
		);
	}};
}

macro_rules! warning {
	($fmt:literal $(, $($tt:tt)*)?) => {{
		$crate::mock::meta().any_warnings = true;
		::log::warn!(
			target: "classic-gl-mock",
			concat!($fmt, "\n{:#?}") $(, $($tt)*)?, $crate::mock::log::CurrentBacktrace
		);
	}};
}

macro_rules! debug {
	($($tt:tt)+) => {
		::log::debug!(target: "classic-gl-mock", $($tt)+)
	}
}

pub(crate) use debug;
pub(crate) use error;
pub(crate) use warning;

/// Backtrace of the code that called into the mock, with mock frames and the
/// test runner's frames cut off
pub(crate) struct CurrentBacktrace;

impl fmt::Debug for CurrentBacktrace {
	fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
		let mut pp = move |fmt: &mut fmt::Formatter<'_>, path: backtrace::BytesOrWideString<'_>| {
			let path = path.into_path_buf();
			fmt::Display::fmt(&path.display(), fmt)
		};
		let mut f = BacktraceFmt::new(fmt, PrintFmt::Short, &mut pp);

		f.add_context()?;

		let bt = backtrace::Backtrace::new();
		let mut frames = bt.frames().to_vec();

		let last_mock_frame = frames.iter().enumerate().rev().find_map(|(i, frame)| {
			frame.symbols().iter().find_map(|symbol| {
				let name = format!("{}", symbol.name()?);
				let in_mock = name.starts_with("classic_gl::mock") || name.starts_with("<classic_gl::mock");
				in_mock.then_some(i)
			})
		});
		if let Some(frame) = last_mock_frame {
			frames.drain(..=frame);
		}

		let runner_frame = frames.iter().position(|frame| {
			frame.symbols().iter().any(|symbol| {
				symbol
					.name()
					.map_or(false, |name| format!("{}", name).contains("__rust_begin_short_backtrace"))
			})
		});
		if let Some(frame) = runner_frame {
			frames.drain(frame..);
		}

		for frame in frames {
			f.frame().backtrace_frame(&frame)?;
		}

		f.finish()
	}
}
