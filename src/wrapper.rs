//! The wrappers handed to a stream to write or read an integer.
//!
//! Wrappers are one-shot: they are consumed by the stream operation they are
//! given to, and are not [`Clone`]. The intended use is as a temporary inside
//! the call:
//!
//! ```
//! use numstream::{NumericSink, NumericSource, TextStream, numeric, numeric_mut};
//!
//! let mut stream = TextStream::new();
//! _ = stream.put(numeric(42_u8)).put(numeric(-7_i8));
//! assert_eq!(stream.as_str(), "42-7");
//!
//! let mut value = 0_i8;
//! let mut input = TextStream::from("-100");
//! _ = input.get(numeric_mut(&mut value));
//! assert_eq!(value, -100);
//! ```



//		Modules

#[cfg(test)]
#[path = "tests/wrapper.rs"]
mod tests;



//		Packages

use crate::{
	class::WidthClass,
	errors::StreamError,
	integral::Integral,
	native::Native,
	stream::{NumericSink, NumericSource, Parse, Render, StreamStatus, stream_status},
};
use core::fmt::{Display, Formatter, self};



//		Structs

//		Numeric																	
/// An output-only wrapper around a copy of an integer.
/// 
/// Created by [`numeric()`].
/// 
#[derive(Debug)]
#[must_use = "wrappers do nothing unless passed to a stream"]
pub struct Numeric<N: Integral> {
	/// The value to write.
	value: N,
}

//󰭅		Numeric																	
impl<N: Integral> Numeric<N> {
	//		class																
	/// The behaviour variant the value will be written with.
	#[must_use]
	pub const fn class(&self) -> WidthClass {
		N::CLASS
	}
	
	//		value																
	/// The wrapped value.
	#[must_use]
	pub const fn value(&self) -> N {
		self.value
	}
}

//󰭅		Display																	
impl<N: Integral> Display for Numeric<N> {
	//		fmt																	
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		let mut sink = FormatterSink::new(f);
		self.value.render_into(&mut sink);
		sink.status().map_err(|_| fmt::Error)
	}
}

//󰭅		Render																	
impl<N: Integral> Render for Numeric<N> {
	//		render																
	fn render<S: NumericSink>(self, sink: &mut S) {
		self.value.render_into(sink);
	}
}

//		NumericMut																
/// A read/write wrapper around a mutable reference to an integer.
/// 
/// Created by [`numeric_mut()`]. Parsing writes straight back into the
/// referenced storage.
/// 
#[derive(Debug)]
#[must_use = "wrappers do nothing unless passed to a stream"]
pub struct NumericMut<'a, N: Integral> {
	/// The caller's storage.
	slot: &'a mut N,
}

//󰭅		NumericMut																
impl<N: Integral> NumericMut<'_, N> {
	//		class																
	/// The behaviour variant the value will be written and read with.
	#[must_use]
	pub fn class(&self) -> WidthClass {
		N::CLASS
	}
	
	//		value																
	/// The current value of the referenced storage.
	#[must_use]
	pub fn value(&self) -> N {
		*self.slot
	}
}

//󰭅		Display																	
impl<N: Integral> Display for NumericMut<'_, N> {
	//		fmt																	
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		let mut sink = FormatterSink::new(f);
		self.slot.render_into(&mut sink);
		sink.status().map_err(|_| fmt::Error)
	}
}

//󰭅		Parse																	
impl<N: Integral> Parse for NumericMut<'_, N> {
	//		parse																
	fn parse<S: NumericSource>(self, source: &mut S) {
		N::parse_from(self.slot, source);
	}
}

//󰭅		Render																	
impl<N: Integral> Render for NumericMut<'_, N> {
	//		render																
	fn render<S: NumericSink>(self, sink: &mut S) {
		self.slot.render_into(sink);
	}
}

//		FormatterSink															
/// A sink that writes into a [`Formatter`], used to implement [`Display`] for
/// the wrappers.
/// 
/// Numbers are written with [`Formatter::pad_integral()`], so width, fill,
/// alignment, and the `+` flag are honoured.
/// 
struct FormatterSink<'a, 'b> {
	/// The formatter to write to.
	formatter: &'a mut Formatter<'b>,
	
	/// The failure flag.
	error:     Option<StreamError>,
}

//󰭅		FormatterSink															
impl<'a, 'b> FormatterSink<'a, 'b> {
	//		new																	
	/// Creates a new sink around the given formatter.
	fn new(formatter: &'a mut Formatter<'b>) -> Self {
		Self { formatter, error: None }
	}
}

//󰭅		NumericSink																
impl NumericSink for FormatterSink<'_, '_> {
	//		write_numeric														
	fn write_numeric<N: Native>(&mut self, value: N) {
		if self.error.is_some() {
			return;
		}
		let (negative, magnitude) = value.to_magnitude();
		if self.formatter.pad_integral(!negative, "", &magnitude.to_string()).is_err() {
			self.fail(StreamError::Format);
		}
	}
	
	//		write_text															
	fn write_text(&mut self, text: &str) {
		if self.error.is_some() {
			return;
		}
		if self.formatter.write_str(text).is_err() {
			self.fail(StreamError::Format);
		}
	}
}

stream_status!([] FormatterSink<'_, '_>);



//		Functions

//		numeric																	
/// Wraps an integer for writing to a [`NumericSink`].
/// 
/// The value is copied, so it can be the result of any expression.
/// 
/// # Parameters
/// 
/// * `value` - The integer to write.
/// 
pub const fn numeric<N: Integral>(value: N) -> Numeric<N> {
	Numeric { value }
}

//		numeric_mut																
/// Wraps a mutable integer for reading from a [`NumericSource`], or writing
/// to a [`NumericSink`].
/// 
/// # Parameters
/// 
/// * `slot` - The storage to read into. It is only borrowed for the lifetime
///            of the wrapper.
/// 
pub fn numeric_mut<N: Integral>(slot: &mut N) -> NumericMut<'_, N> {
	NumericMut { slot }
}
