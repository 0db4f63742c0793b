//! Classification of integer types by byte width and signedness.



//		Modules

#[cfg(test)]
#[path = "tests/class.rs"]
mod tests;



//		Packages

use core::fmt::{Display, Formatter, self};
use serde::{Deserialize, Serialize};



//		Enums

//		WidthClass																
/// The behaviour variant an integer type is rendered and parsed with.
/// 
/// The class is a pure function of the type's byte width and signedness (see
/// [`classify()`]), and is resolved at compile time for every supported type
/// through [`Integral::CLASS`](crate::Integral::CLASS).
/// 
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WidthClass {
	/// Wider than one byte. The stream's native numeric path is used as-is.
	Wide,
	
	/// One byte, signed. Exchanged through a signed 16-bit intermediate and
	/// clamped to the target bounds on the way back.
	NarrowSigned,
	
	/// One byte, unsigned. Exchanged through a signed 16-bit intermediate,
	/// with negative input wrapping around into the unsigned range.
	NarrowUnsigned,
}

//󰭅		WidthClass																
impl WidthClass {
	//		is_narrow															
	/// Whether this class needs the widened intermediate.
	#[must_use]
	pub const fn is_narrow(self) -> bool {
		!matches!(self, Self::Wide)
	}
}

//󰭅		Display																	
impl Display for WidthClass {
	//		fmt																	
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		let name = match *self {
			Self::Wide           => "wide",
			Self::NarrowSigned   => "narrow signed",
			Self::NarrowUnsigned => "narrow unsigned",
		};
		f.write_str(name)
	}
}



//		Functions

//		classify																
/// Determines the behaviour variant for an integer type.
/// 
/// # Parameters
/// 
/// * `bytes`  - The width of the type in bytes.
/// * `signed` - Whether the type is signed.
/// 
#[must_use]
pub const fn classify(bytes: usize, signed: bool) -> WidthClass {
	match (bytes, signed) {
		(1, true)  => WidthClass::NarrowSigned,
		(1, false) => WidthClass::NarrowUnsigned,
		_          => WidthClass::Wide,
	}
}
