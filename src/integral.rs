//! Per-type selection of rendering and parsing behaviour.



//		Modules

#[cfg(test)]
#[path = "tests/integral.rs"]
mod tests;



//		Packages

use crate::{
	class::{WidthClass, classify},
	narrow,
	native::Sealed,
	stream::{NumericSink, NumericSource},
};
use core::mem::size_of;



//		Traits

//		Integral																
/// A primitive integer that can be written to and read from a numeric
/// stream, whatever its width.
/// 
/// Every primitive integer implements this trait. The implementation for each
/// type is selected at compile time according to its [`WidthClass`]:
/// 
///   - Wide types (two bytes or more) go straight to the stream's native
///     numeric path.
///   - `i8` and `u8` are widened to an `i16` for the exchange, and settled back
///     into range on the way in, so that they are always treated as numbers
///     and never as characters.
/// 
/// Generic code can therefore take any `N: Integral` and rely on the same
/// textual behaviour for all of them.
/// 
pub trait Integral: Copy + Sealed {
	/// The behaviour variant used for this type.
	const CLASS: WidthClass;
	
	//		render_into															
	/// Writes the value to the sink as a number.
	fn render_into<S: NumericSink>(self, sink: &mut S);
	
	//		parse_from															
	/// Reads a number from the source into the slot.
	/// 
	/// Out-of-range input stores the nearest bound and sets the source's
	/// failure flag. See [`WidthClass`] for the unsigned wraparound rule.
	/// 
	fn parse_from<S: NumericSource>(slot: &mut Self, source: &mut S);
}



//		Implementations

macro_rules! integral_wide {
	($($t:ty),* $(,)?) => {$(
		//󰭅		Integral														
		impl Integral for $t {
			const CLASS: WidthClass = classify(size_of::<$t>(), <$t>::MIN != 0);
			
			//		render_into													
			fn render_into<S: NumericSink>(self, sink: &mut S) {
				sink.write_numeric(self);
			}
			
			//		parse_from													
			fn parse_from<S: NumericSource>(slot: &mut Self, source: &mut S) {
				_ = source.read_numeric(slot);
			}
		}
	)*};
}

macro_rules! integral_narrow {
	($($t:ty),* $(,)?) => {$(
		//󰭅		Integral														
		impl Integral for $t {
			const CLASS: WidthClass = classify(size_of::<$t>(), <$t>::MIN != 0);
			
			//		render_into													
			fn render_into<S: NumericSink>(self, sink: &mut S) {
				narrow::render(self, sink);
			}
			
			//		parse_from													
			fn parse_from<S: NumericSource>(slot: &mut Self, source: &mut S) {
				narrow::parse(slot, source);
			}
		}
	)*};
}

integral_wide!(i16, i32, i64, i128, isize, u16, u32, u64, u128, usize);
integral_narrow!(i8, u8);
