//! An in-memory text stream that can be both written to and read from.



//		Modules

#[cfg(test)]
#[path = "tests/text.rs"]
mod tests;



//		Packages

use crate::{
	config::StreamConfig,
	errors::StreamError,
	native::{Cursor, Native, read_into},
	stream::{NumericSink, NumericSource, stream_status},
};



//		Structs

//		TextStream																
/// A text buffer with a read position.
/// 
/// Writes append to the end of the buffer, and reads consume from the read
/// position onwards, so text written to the stream can be read back from it.
/// The stream carries a sticky failure flag: once an operation fails, further
/// writes and reads do nothing until [`clear()`](crate::StreamStatus::clear()) is
/// called.
/// 
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct TextStream {
	/// The text written so far, or supplied at creation.
	buffer: String,
	
	/// Byte offset of the next byte to read.
	pos:    usize,
	
	/// The radix and whitespace settings.
	config: StreamConfig,
	
	/// The failure flag.
	error:  Option<StreamError>,
}

//󰭅		TextStream																
impl TextStream {
	//		Constructors														
	
	//		new																	
	/// Creates an empty stream with the default configuration.
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}
	
	//		with_config															
	/// Creates an empty stream with the given configuration.
	/// 
	/// # Parameters
	/// 
	/// * `config` - The settings to use.
	/// 
	#[must_use]
	pub fn with_config(config: StreamConfig) -> Self {
		Self { config, ..Self::default() }
	}
	
	//		Public methods														
	
	//		as_str																
	/// The whole buffer, including any text already read.
	#[must_use]
	pub fn as_str(&self) -> &str {
		&self.buffer
	}
	
	//		config																
	/// The current configuration.
	#[must_use]
	pub const fn config(&self) -> &StreamConfig {
		&self.config
	}
	
	//		into_string															
	/// Consumes the stream, returning the whole buffer.
	#[must_use]
	pub fn into_string(self) -> String {
		self.buffer
	}
	
	//		remaining															
	/// The text that has not been read yet.
	#[must_use]
	pub fn remaining(&self) -> &str {
		self.buffer.get(self.pos..).unwrap_or_default()
	}
	
	//		set_config															
	/// Changes the configuration for subsequent operations.
	/// 
	/// # Parameters
	/// 
	/// * `config` - The settings to use.
	/// 
	pub fn set_config(&mut self, config: StreamConfig) {
		self.config = config;
	}
}

//󰭅		Cursor																	
impl Cursor for TextStream {
	//		peek																
	fn peek(&mut self) -> Result<Option<u8>, StreamError> {
		Ok(self.buffer.as_bytes().get(self.pos).copied())
	}
	
	//		advance																
	#[expect(clippy::arithmetic_side_effects, reason = "Bounded by the buffer length")]
	fn advance(&mut self) {
		if self.pos < self.buffer.len() {
			self.pos += 1;
		}
	}
}

//󰭅		From<&str>																
impl From<&str> for TextStream {
	//		from																
	fn from(text: &str) -> Self {
		Self::from(text.to_owned())
	}
}

//󰭅		From<String>															
impl From<String> for TextStream {
	//		from																
	fn from(buffer: String) -> Self {
		Self { buffer, ..Self::default() }
	}
}

//󰭅		NumericSink																
impl NumericSink for TextStream {
	//		write_numeric														
	fn write_numeric<N: Native>(&mut self, value: N) {
		if self.error.is_none() {
			self.buffer.push_str(&value.to_text(self.config.radix));
		}
	}
	
	//		write_text															
	fn write_text(&mut self, text: &str) {
		if self.error.is_none() {
			self.buffer.push_str(text);
		}
	}
}

//󰭅		NumericSource															
impl NumericSource for TextStream {
	//		read_numeric														
	fn read_numeric<N: Native>(&mut self, slot: &mut N) -> bool {
		let config = self.config;
		read_into(self, config, slot)
	}
}

stream_status!([] TextStream);
