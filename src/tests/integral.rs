//		Packages

use super::*;
use crate::{
	errors::StreamError,
	stream::StreamStatus,
	text::TextStream,
};
use claims::{assert_none, assert_some_eq};
use core::fmt::Debug;



//		Functions

//		round_trip																
/// Renders a value, parses the text back, and checks nothing changed.
fn round_trip<N: Integral + Debug + Default + PartialEq>(value: N) {
	let mut stream = TextStream::new();
	value.render_into(&mut stream);
	
	let mut parsed = N::default();
	N::parse_from(&mut parsed, &mut stream);
	assert_eq!(parsed, value, "round trip of {value:?} via {:?}", stream.as_str());
	assert_none!(stream.error());
}

//		parse_str																
/// Parses a value of the given type from text, starting from the default.
fn parse_str<N: Integral + Default>(text: &str) -> (N, Option<StreamError>) {
	let mut stream = TextStream::from(text);
	let mut value  = N::default();
	N::parse_from(&mut value, &mut stream);
	(value, stream.error().copied())
}

//		render_str																
fn render_str<N: Integral>(value: N) -> String {
	let mut stream = TextStream::new();
	value.render_into(&mut stream);
	stream.into_string()
}



//		Tests

mod constants {
	use super::*;
	
	//		CLASS																
	#[test]
	fn class__wide() {
		assert_eq!(i16::CLASS,   WidthClass::Wide);
		assert_eq!(i32::CLASS,   WidthClass::Wide);
		assert_eq!(i64::CLASS,   WidthClass::Wide);
		assert_eq!(i128::CLASS,  WidthClass::Wide);
		assert_eq!(isize::CLASS, WidthClass::Wide);
		assert_eq!(u16::CLASS,   WidthClass::Wide);
		assert_eq!(u32::CLASS,   WidthClass::Wide);
		assert_eq!(u64::CLASS,   WidthClass::Wide);
		assert_eq!(u128::CLASS,  WidthClass::Wide);
		assert_eq!(usize::CLASS, WidthClass::Wide);
	}
	#[test]
	fn class__narrow() {
		assert_eq!(i8::CLASS, WidthClass::NarrowSigned);
		assert_eq!(u8::CLASS, WidthClass::NarrowUnsigned);
	}
}

mod rendering {
	use super::*;
	
	//		render_into															
	#[test]
	fn render_into__narrow_is_numeric() {
		assert_eq!(render_str(b'A'),    "65");
		assert_eq!(render_str(42_i8),   "42");
		assert_eq!(render_str(-1_i8),   "-1");
		assert_eq!(render_str(u8::MAX), "255");
	}
	#[test]
	fn render_into__wide() {
		assert_eq!(render_str(-1_i16),    "-1");
		assert_eq!(render_str(u64::MAX),  u64::MAX.to_string());
		assert_eq!(render_str(i128::MIN), i128::MIN.to_string());
	}
}

mod parsing {
	use super::*;
	
	//		parse_from															
	#[test]
	fn parse_from__round_trip_wide() {
		for value in [i16::MIN, -1, 0, 1, i16::MAX] {
			round_trip(value);
		}
		round_trip(i32::MIN);
		round_trip(i64::MAX);
		round_trip(i128::MIN);
		round_trip(isize::MIN);
		round_trip(u16::MAX);
		round_trip(u32::MAX);
		round_trip(u64::MAX);
		round_trip(u128::MAX);
		round_trip(usize::MAX);
	}
	#[test]
	fn parse_from__round_trip_narrow() {
		for value in i8::MIN..=i8::MAX {
			round_trip(value);
		}
		for value in u8::MIN..=u8::MAX {
			round_trip(value);
		}
	}
	#[test]
	fn parse_from__wide_out_of_range() {
		assert_eq!(parse_str::<i16>("40000"),        (i16::MAX, Some(StreamError::OutOfRange)));
		assert_eq!(parse_str::<i16>("-40000"),       (i16::MIN, Some(StreamError::OutOfRange)));
		assert_eq!(parse_str::<u32>("-4294967296"), (u32::MAX, Some(StreamError::OutOfRange)));
	}
	#[test]
	fn parse_from__wide_wraparound() {
		assert_eq!(parse_str::<u16>("-1"),   (u16::MAX, None));
		assert_eq!(parse_str::<u64>("-100"), (u64::MAX - 99, None));
	}
	#[test]
	fn parse_from__narrow_signed() {
		assert_eq!(parse_str::<i8>("42"),   (42,       None));
		assert_eq!(parse_str::<i8>("200"),  (i8::MAX,  Some(StreamError::OutOfRange)));
		assert_eq!(parse_str::<i8>("-200"), (i8::MIN,  Some(StreamError::OutOfRange)));
	}
	#[test]
	fn parse_from__narrow_unsigned() {
		assert_eq!(parse_str::<u8>("-1"),   (255, None));
		assert_eq!(parse_str::<u8>("-100"), (156, None));
		assert_eq!(parse_str::<u8>("-256"), (255, Some(StreamError::OutOfRange)));
		assert_eq!(parse_str::<u8>("-300"), (255, Some(StreamError::OutOfRange)));
		assert_eq!(parse_str::<u8>("300"),  (255, Some(StreamError::OutOfRange)));
	}
	#[test]
	fn parse_from__malformed_same_for_all_widths() {
		assert_eq!(parse_str::<i8>("abc"),   (0, Some(StreamError::Malformed)));
		assert_eq!(parse_str::<u8>("abc"),   (0, Some(StreamError::Malformed)));
		assert_eq!(parse_str::<i32>("abc"),  (0, Some(StreamError::Malformed)));
		assert_eq!(parse_str::<u64>("abc"),  (0, Some(StreamError::Malformed)));
	}
	#[test]
	fn parse_from__failed_stream_untouched() {
		let mut stream = TextStream::from("12");
		stream.fail(StreamError::OutOfRange);
		
		let mut narrow = 3_u8;
		let mut wide   = 4_u32;
		u8::parse_from(&mut narrow, &mut stream);
		u32::parse_from(&mut wide, &mut stream);
		assert_eq!(narrow, 3);
		assert_eq!(wide,   4);
		assert_some_eq!(stream.error(), &StreamError::OutOfRange);
	}
}
