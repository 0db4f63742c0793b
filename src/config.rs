//! Configuration for the reference streams.



//		Modules

#[cfg(test)]
#[path = "tests/config.rs"]
mod tests;



//		Packages

use core::fmt::{Display, Formatter, self};
use serde::{Deserialize, Serialize};



//		Structs

//		StreamConfig															
/// Settings that govern how a stream's native numeric path reads and writes
/// text.
/// 
/// Both fields have defaults, so an empty configuration document deserialises
/// to [`StreamConfig::default()`].
/// 
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(default)]
pub struct StreamConfig {
	/// The base numbers are written and read in.
	pub radix:           Radix,
	
	/// Whether leading ASCII whitespace is skipped before reading a number.
	pub skip_whitespace: bool,
}

//󰭅		Default																	
impl Default for StreamConfig {
	//		default																
	fn default() -> Self {
		Self {
			radix:           Radix::Decimal,
			skip_whitespace: true,
		}
	}
}



//		Enums

//		Radix																	
/// The numeric base used by a stream.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Radix {
	/// Base 2.
	Binary,
	
	/// Base 8.
	Octal,
	
	/// Base 10.
	#[default]
	Decimal,
	
	/// Base 16. Digits above 9 are written in lowercase and read in either
	/// case.
	Hexadecimal,
}

//󰭅		Radix																	
impl Radix {
	//		value																
	/// The numeric base as a number.
	#[must_use]
	pub const fn value(self) -> u32 {
		match self {
			Self::Binary      => 2,
			Self::Octal       => 8,
			Self::Decimal     => 10,
			Self::Hexadecimal => 16,
		}
	}
}

//󰭅		Display																	
impl Display for Radix {
	//		fmt																	
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		write!(f, "base {}", self.value())
	}
}
