//! The Numstream crate writes and reads integers of every width as numbers on
//! text streams.
//!
//! Wrapping a value with [`numeric()`] or a mutable slot with
//! [`numeric_mut()`] gives something that a [`NumericSink`] can write and a
//! [`NumericSource`] can read. One-byte integers are exchanged through a wider
//! intermediate and checked back into range, so they behave exactly like the
//! wider types, instead of being treated as characters. Failures are reported
//! through the stream's sticky failure flag.



//		Global configuration

//	Customisations of the standard linting configuration
#![allow(clippy::items_after_test_module, reason = "Not needed with separated tests")]

//	Lints specifically disabled for unit tests
#![cfg_attr(test, allow(
	non_snake_case,
	clippy::arithmetic_side_effects,
	clippy::cast_lossless,
	clippy::cast_possible_truncation,
	clippy::cast_sign_loss,
	clippy::cognitive_complexity,
	clippy::default_numeric_fallback,
	clippy::expect_used,
	clippy::indexing_slicing,
	clippy::let_underscore_must_use,
	clippy::let_underscore_untyped,
	clippy::missing_assert_message,
	clippy::missing_panics_doc,
	clippy::must_use_candidate,
	clippy::panic,
	clippy::unwrap_in_result,
	clippy::unwrap_used,
	reason = "Not useful in unit tests"
))]



//		Modules

mod class;
mod config;
mod errors;
mod integral;
mod io;
mod narrow;
mod native;
mod stream;
mod text;
mod wrapper;



//		Packages

pub use class::{WidthClass, classify};
pub use config::{Radix, StreamConfig};
pub use errors::StreamError;
pub use integral::Integral;
pub use io::{Printer, Scanner};
pub use native::Native;
pub use stream::{NumericSink, NumericSource, Parse, Render, StreamStatus};
pub use text::TextStream;
pub use wrapper::{Numeric, NumericMut, numeric, numeric_mut};
