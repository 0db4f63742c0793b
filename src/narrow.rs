//! Emulation of numeric reading and writing for one-byte integers.
//!
//! One-byte values are exchanged with the stream through a signed 16-bit
//! intermediate, which holds every `i8` and every `u8` exactly. On the way back
//! the intermediate is settled into the target type, reproducing the bounds
//! checking the native path performs for wider types.

//	The wraparound arithmetic is bounded by the range checks before it, and we
//	want it to read exactly like the rule it implements.
#![allow(clippy::arithmetic_side_effects, reason = "Guarded by range checks")]



//		Modules

#[cfg(test)]
#[path = "tests/narrow.rs"]
mod tests;



//		Packages

use crate::{
	errors::StreamError,
	stream::{NumericSink, NumericSource},
};



//		Enums

//		Settled																	
/// The outcome of fitting a 16-bit intermediate into a one-byte target.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Settled<N> {
	/// The intermediate was within range and is stored unchanged.
	Exact(N),
	
	/// A negative intermediate wrapped around into the unsigned range. This is
	/// not a failure.
	Wrapped(N),
	
	/// The intermediate was out of range and the nearest bound is stored. The
	/// stream must be marked as failed.
	Clamped(N),
}

//󰭅		Settled																	
impl<N> Settled<N> {
	//		into_value															
	/// The value to store in the target.
	pub(crate) fn into_value(self) -> N {
		match self {
			Self::Exact(value) | Self::Wrapped(value) | Self::Clamped(value) => value,
		}
	}
}



//		Traits

//		Narrow																	
/// A one-byte integer type.
pub(crate) trait Narrow: Copy {
	/// The smallest value, widened.
	const MIN: i16;
	
	/// The largest value, widened.
	const MAX: i16;
	
	//		widen																
	/// Converts to the 16-bit intermediate. Always lossless.
	fn widen(self) -> i16;
	
	//		narrow																
	/// Converts back from the intermediate. Only called with values between
	/// [`MIN`](Narrow::MIN) and [`MAX`](Narrow::MAX).
	fn narrow(value: i16) -> Self;
	
	//		settle																
	/// Fits an intermediate into this type, following the rule for its
	/// signedness.
	fn settle(value: i16) -> Settled<Self>;
}



//		Functions

//		settle_signed															
/// Fits an intermediate into a signed target, clamping at both bounds.
pub(crate) fn settle_signed<N: Narrow>(value: i16) -> Settled<N> {
	if value > N::MAX {
		Settled::Clamped(N::narrow(N::MAX))
	} else if value < N::MIN {
		Settled::Clamped(N::narrow(N::MIN))
	} else {
		Settled::Exact(N::narrow(value))
	}
}

//		settle_unsigned															
/// Fits an intermediate into an unsigned target.
/// 
/// A negative intermediate whose magnitude is at most the target's maximum
/// wraps around to `MAX + value + 1`, so `-1` becomes `MAX`. Any larger
/// magnitude, including exactly `MAX + 1`, clamps to `MAX`, as does a positive
/// value that is too large.
/// 
pub(crate) fn settle_unsigned<N: Narrow>(value: i16) -> Settled<N> {
	if value > N::MAX {
		return Settled::Clamped(N::narrow(N::MAX));
	}
	if value < 0 {
		if value.unsigned_abs() <= N::MAX.unsigned_abs() {
			return Settled::Wrapped(N::narrow(N::MAX + value + 1));
		}
		return Settled::Clamped(N::narrow(N::MAX));
	}
	Settled::Exact(N::narrow(value))
}

//		render																	
/// Writes a one-byte value through the widened intermediate.
pub(crate) fn render<N: Narrow, S: NumericSink>(value: N, sink: &mut S) {
	sink.write_numeric(value.widen());
}

//		parse																	
/// Reads a one-byte value through the widened intermediate.
/// 
/// The intermediate starts out as the current value, so a read the stream
/// refuses leaves the target unchanged. A malformed read stores whatever the
/// stream put into the intermediate, and only the range checks here can add a
/// failure of their own.
/// 
pub(crate) fn parse<N: Narrow, S: NumericSource>(slot: &mut N, source: &mut S) {
	let mut temp = slot.widen();
	_ = source.read_numeric(&mut temp);
	
	let settled = N::settle(temp);
	if matches!(settled, Settled::Clamped(_)) {
		source.fail(StreamError::OutOfRange);
	}
	*slot = settled.into_value();
}



//		Implementations

//󰭅		Narrow																	
impl Narrow for i8 {
	const MIN: i16 = i8::MIN as i16;
	const MAX: i16 = i8::MAX as i16;
	
	//		widen																
	fn widen(self) -> i16 {
		i16::from(self)
	}
	
	//		narrow																
	#[expect(clippy::cast_possible_truncation, reason = "Caller keeps the value in range")]
	fn narrow(value: i16) -> Self {
		value as Self
	}
	
	//		settle																
	fn settle(value: i16) -> Settled<Self> {
		settle_signed(value)
	}
}

//󰭅		Narrow																	
impl Narrow for u8 {
	const MIN: i16 = u8::MIN as i16;
	const MAX: i16 = u8::MAX as i16;
	
	//		widen																
	fn widen(self) -> i16 {
		i16::from(self)
	}
	
	//		narrow																
	#[expect(
		clippy::cast_possible_truncation,
		clippy::cast_sign_loss,
		reason = "Caller keeps the value in range"
	)]
	fn narrow(value: i16) -> Self {
		value as Self
	}
	
	//		settle																
	fn settle(value: i16) -> Settled<Self> {
		settle_unsigned(value)
	}
}
