//! The native numeric path shared by the reference streams.
//!
//! Only integer types wider than one byte implement [`Native`]. The narrow
//! types deliberately do not, so a one-byte value can never be handed to a
//! stream's native numeric path without first being widened.



//		Modules

#[cfg(test)]
#[path = "tests/native.rs"]
mod tests;



//		Packages

use crate::{
	config::{Radix, StreamConfig},
	errors::StreamError,
	stream::StreamStatus,
};



//		Traits

//		Native																	
/// An integer type that a stream can read and write through its native
/// numeric path.
/// 
/// The conversions go through a sign-and-magnitude representation, which is
/// wide enough for every implementing type and is what the text grammar is
/// built on.
/// 
pub trait Native: Copy + sealed::Sealed {
	/// Whether the type is signed.
	const SIGNED: bool;
	
	/// The smallest value of the type.
	const MIN: Self;
	
	/// The largest value of the type.
	const MAX: Self;
	
	//		to_magnitude														
	/// Splits the value into a negative flag and its absolute value.
	fn to_magnitude(self) -> (bool, u128);
	
	//		from_magnitude														
	/// Builds a value from a sign and an absolute value.
	/// 
	/// Returns the value and whether it was represented exactly. Out-of-range
	/// input is clamped to the nearest bound and reported as inexact.
	/// 
	/// Unsigned types accept a negative sign: a magnitude `m` with `0 < m <=
	/// MAX` wraps around to `MAX - m + 1` and is exact. Larger magnitudes clamp
	/// to `MAX`.
	/// 
	/// # Parameters
	/// 
	/// * `negative`  - Whether a minus sign was present.
	/// * `magnitude` - The absolute value read.
	/// 
	fn from_magnitude(negative: bool, magnitude: u128) -> (Self, bool);
	
	//		to_text																
	/// Renders the value in the given radix, using a leading `-` for negative
	/// values and lowercase digits.
	fn to_text(self, radix: Radix) -> String {
		let (negative, magnitude) = self.to_magnitude();
		let sign                  = if negative { "-" } else { "" };
		match radix {
			Radix::Binary      => format!("{sign}{magnitude:b}"),
			Radix::Octal       => format!("{sign}{magnitude:o}"),
			Radix::Decimal     => format!("{sign}{magnitude}"),
			Radix::Hexadecimal => format!("{sign}{magnitude:x}"),
		}
	}
}

//		Cursor																	
/// A byte source that numbers are scanned from.
pub(crate) trait Cursor {
	//		peek																
	/// Returns the next byte without consuming it, or [`None`] at the end of
	/// the input.
	fn peek(&mut self) -> Result<Option<u8>, StreamError>;
	
	//		advance																
	/// Consumes the byte last returned by [`peek()`](Cursor::peek()).
	fn advance(&mut self);
}



//		Functions

//		scan																	
/// Reads an integer from a cursor using the native text grammar.
/// 
/// Returns the value to store and the failure to record, if any. When no
/// number could be read at all the value is zero.
/// 
/// # Parameters
/// 
/// * `cursor` - The bytes to read from.
/// * `config` - The radix and whitespace settings to apply.
/// 
pub(crate) fn scan<N: Native, C: Cursor>(cursor: &mut C, config: &StreamConfig) -> (N, Option<StreamError>) {
	match scan_parts(cursor, config) {
		Ok((negative, Some(magnitude))) => {
			let (value, exact) = N::from_magnitude(negative, magnitude);
			(value, (!exact).then_some(StreamError::OutOfRange))
		}
		//	Beyond u128, so beyond every type. Unsigned types clamp to MAX either way.
		Ok((negative, None)) => {
			let bound = if negative && N::SIGNED { N::MIN } else { N::MAX };
			(bound, Some(StreamError::OutOfRange))
		}
		Err(err) => (N::from_magnitude(false, 0).0, Some(err)),
	}
}

//		scan_parts																
/// Reads the sign and the magnitude of an integer.
/// 
/// The magnitude is [`None`] if it does not fit in a [`u128`].
/// 
fn scan_parts<C: Cursor>(cursor: &mut C, config: &StreamConfig) -> Result<(bool, Option<u128>), StreamError> {
	if config.skip_whitespace {
		while let Some(byte) = cursor.peek()? {
			if !byte.is_ascii_whitespace() {
				break;
			}
			cursor.advance();
		}
	}
	
	let negative = match cursor.peek()? {
		Some(b'-') => { cursor.advance(); true  },
		Some(b'+') => { cursor.advance(); false },
		Some(_)    => false,
		None       => return Err(StreamError::EndOfInput),
	};
	
	let radix         = config.radix.value();
	let mut magnitude = Some(0_u128);
	let mut found     = false;
	while let Some(byte) = cursor.peek()? {
		let Some(digit) = char::from(byte).to_digit(radix) else {
			break;
		};
		cursor.advance();
		found     = true;
		magnitude = magnitude
			.and_then(|m| m.checked_mul(u128::from(radix)))
			.and_then(|m| m.checked_add(u128::from(digit)))
		;
	}
	
	if !found {
		return Err(match cursor.peek()? {
			Some(_) => StreamError::Malformed,
			None    => StreamError::EndOfInput,
		});
	}
	
	Ok((negative, magnitude))
}

//		read_into																
/// Reads an integer from a stream into a slot, recording any failure on the
/// stream.
/// 
/// Does nothing and returns `false` if the stream has already failed.
/// Otherwise the slot is always written, and the return value says whether
/// the read succeeded.
/// 
/// # Parameters
/// 
/// * `stream` - The stream to read from.
/// * `config` - The radix and whitespace settings to apply.
/// * `slot`   - The storage to read into.
/// 
pub(crate) fn read_into<N, S>(stream: &mut S, config: StreamConfig, slot: &mut N) -> bool
where
	N: Native,
	S: Cursor + StreamStatus,
{
	if !stream.is_ok() {
		return false;
	}
	let (value, err) = scan(stream, &config);
	*slot            = value;
	err.map_or(true, |err| {
		stream.fail(err);
		false
	})
}



//		Implementations

mod sealed {
	/// Restricts [`Native`](super::Native) and [`Integral`](crate::Integral)
	/// to the primitive integers.
	pub trait Sealed {}
	
	impl Sealed for i8    {}
	impl Sealed for i16   {}
	impl Sealed for i32   {}
	impl Sealed for i64   {}
	impl Sealed for i128  {}
	impl Sealed for isize {}
	impl Sealed for u8    {}
	impl Sealed for u16   {}
	impl Sealed for u32   {}
	impl Sealed for u64   {}
	impl Sealed for u128  {}
	impl Sealed for usize {}
}

pub(crate) use sealed::Sealed;

macro_rules! native_signed {
	($($t:ty => $u:ty),* $(,)?) => {$(
		//󰭅		Native															
		impl Native for $t {
			const SIGNED: bool = true;
			const MIN:    Self = <$t>::MIN;
			const MAX:    Self = <$t>::MAX;
			
			//		to_magnitude												
			#[allow(clippy::cast_lossless, reason = "usize has no From impl for u128")]
			fn to_magnitude(self) -> (bool, u128) {
				(self < 0, self.unsigned_abs() as u128)
			}
			
			//		from_magnitude												
			#[allow(
				clippy::cast_lossless,
				clippy::cast_possible_truncation,
				clippy::cast_possible_wrap,
				reason = "Magnitude is checked against the limit first"
			)]
			fn from_magnitude(negative: bool, magnitude: u128) -> (Self, bool) {
				let (bound, limit) = if negative {
					(<$t>::MIN, <$t>::MIN.unsigned_abs())
				} else {
					(<$t>::MAX, <$t>::MAX.unsigned_abs())
				};
				if magnitude > limit as u128 {
					return (bound, false);
				}
				let value = magnitude as $u as $t;
				(if negative { value.wrapping_neg() } else { value }, true)
			}
		}
	)*};
}

macro_rules! native_unsigned {
	($($t:ty),* $(,)?) => {$(
		//󰭅		Native															
		impl Native for $t {
			const SIGNED: bool = false;
			const MIN:    Self = <$t>::MIN;
			const MAX:    Self = <$t>::MAX;
			
			//		to_magnitude												
			#[allow(clippy::cast_lossless, reason = "usize has no From impl for u128")]
			fn to_magnitude(self) -> (bool, u128) {
				(false, self as u128)
			}
			
			//		from_magnitude												
			#[allow(
				clippy::arithmetic_side_effects,
				clippy::cast_lossless,
				clippy::cast_possible_truncation,
				reason = "Magnitude is checked against the limit first"
			)]
			fn from_magnitude(negative: bool, magnitude: u128) -> (Self, bool) {
				if magnitude > <$t>::MAX as u128 {
					return (<$t>::MAX, false);
				}
				let value = magnitude as $t;
				if negative && value != 0 {
					//	Wraps around, e.g. -1 becomes MAX
					(<$t>::MAX - value + 1, true)
				} else {
					(value, true)
				}
			}
		}
	)*};
}

native_signed!(i16 => u16, i32 => u32, i64 => u64, i128 => u128, isize => usize);
native_unsigned!(u16, u32, u64, u128, usize);
