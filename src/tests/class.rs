//		Packages

use super::*;
use claims::assert_ok_eq;
use rubedo::sugar::s;



//		Tests

mod functions {
	use super::*;
	
	//		classify															
	#[test]
	fn classify__wide() {
		for bytes in [2, 4, 8, 16] {
			assert_eq!(classify(bytes, true),  WidthClass::Wide);
			assert_eq!(classify(bytes, false), WidthClass::Wide);
		}
	}
	#[test]
	fn classify__narrow_signed() {
		assert_eq!(classify(1, true), WidthClass::NarrowSigned);
	}
	#[test]
	fn classify__narrow_unsigned() {
		assert_eq!(classify(1, false), WidthClass::NarrowUnsigned);
	}
	#[test]
	fn classify__repeatable() {
		let first = classify(1, false);
		for _ in 0..10 {
			assert_eq!(classify(1, false), first);
		}
	}
}

mod public_methods {
	use super::*;
	
	//		is_narrow															
	#[test]
	fn is_narrow() {
		assert!(!WidthClass::Wide.is_narrow());
		assert!( WidthClass::NarrowSigned.is_narrow());
		assert!( WidthClass::NarrowUnsigned.is_narrow());
	}
}

mod derived_traits {
	use super::*;
	
	//		Deserialize															
	#[test]
	fn deserialize() {
		assert_ok_eq!(serde_json::from_str::<WidthClass>(r#""narrow_unsigned""#), WidthClass::NarrowUnsigned);
	}
	
	//		Serialize															
	#[test]
	fn serialize() {
		assert_ok_eq!(serde_json::to_string(&WidthClass::NarrowSigned), s!(r#""narrow_signed""#));
		assert_ok_eq!(serde_json::to_string(&WidthClass::Wide),         s!(r#""wide""#));
	}
}

mod traits {
	use super::*;
	
	//		Display																
	#[test]
	fn display() {
		assert_eq!(WidthClass::Wide.to_string(),           s!("wide"));
		assert_eq!(WidthClass::NarrowSigned.to_string(),   s!("narrow signed"));
		assert_eq!(WidthClass::NarrowUnsigned.to_string(), s!("narrow unsigned"));
	}
}
