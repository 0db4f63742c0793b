//! Streams over [`std::io`] readers and writers.



//		Modules

#[cfg(test)]
#[path = "tests/io.rs"]
mod tests;



//		Packages

use crate::{
	config::StreamConfig,
	errors::StreamError,
	native::{Cursor, Native, read_into},
	stream::{NumericSink, NumericSource, StreamStatus, stream_status},
};
use std::io::{BufRead, ErrorKind as IoErrorKind, Write};



//		Structs

//		Scanner																	
/// A numeric source reading from any buffered reader.
/// 
/// Reader errors put the stream into the failed state with
/// [`StreamError::Io`]. Interrupted reads are retried.
/// 
#[derive(Debug)]
pub struct Scanner<R> {
	/// The underlying reader.
	reader: R,
	
	/// The radix and whitespace settings.
	config: StreamConfig,
	
	/// The failure flag.
	error:  Option<StreamError>,
}

//󰭅		Scanner																	
impl<R: BufRead> Scanner<R> {
	//		new																	
	/// Creates a new scanner with the default configuration.
	/// 
	/// # Parameters
	/// 
	/// * `reader` - The reader to scan.
	/// 
	pub fn new(reader: R) -> Self {
		Self::with_config(reader, StreamConfig::default())
	}
	
	//		with_config															
	/// Creates a new scanner with the given configuration.
	/// 
	/// # Parameters
	/// 
	/// * `reader` - The reader to scan.
	/// * `config` - The settings to use.
	/// 
	pub const fn with_config(reader: R, config: StreamConfig) -> Self {
		Self { reader, config, error: None }
	}
	
	//		into_inner															
	/// Consumes the scanner, returning the reader. Bytes that were looked at
	/// but not consumed remain in the reader's buffer.
	pub fn into_inner(self) -> R {
		self.reader
	}
}

//󰭅		Cursor																	
impl<R: BufRead> Cursor for Scanner<R> {
	//		peek																
	fn peek(&mut self) -> Result<Option<u8>, StreamError> {
		loop {
			match self.reader.fill_buf() {
				Ok(buf)                                            => return Ok(buf.first().copied()),
				Err(err) if err.kind() == IoErrorKind::Interrupted => {},
				Err(err)                                           => return Err(StreamError::Io(err.kind())),
			}
		}
	}
	
	//		advance																
	fn advance(&mut self) {
		self.reader.consume(1);
	}
}

//󰭅		NumericSource															
impl<R: BufRead> NumericSource for Scanner<R> {
	//		read_numeric														
	fn read_numeric<N: Native>(&mut self, slot: &mut N) -> bool {
		let config = self.config;
		read_into(self, config, slot)
	}
}

//		Printer																	
/// A numeric sink writing to any writer.
/// 
/// Writer errors put the stream into the failed state with
/// [`StreamError::Io`]. No buffering is added; wrap the writer in a
/// [`BufWriter`](std::io::BufWriter) if needed.
/// 
#[derive(Debug)]
pub struct Printer<W> {
	/// The underlying writer.
	writer: W,
	
	/// The radix setting.
	config: StreamConfig,
	
	/// The failure flag.
	error:  Option<StreamError>,
}

//󰭅		Printer																	
impl<W: Write> Printer<W> {
	//		new																	
	/// Creates a new printer with the default configuration.
	/// 
	/// # Parameters
	/// 
	/// * `writer` - The writer to print to.
	/// 
	pub fn new(writer: W) -> Self {
		Self::with_config(writer, StreamConfig::default())
	}
	
	//		with_config															
	/// Creates a new printer with the given configuration.
	/// 
	/// # Parameters
	/// 
	/// * `writer` - The writer to print to.
	/// * `config` - The settings to use.
	/// 
	pub const fn with_config(writer: W, config: StreamConfig) -> Self {
		Self { writer, config, error: None }
	}
	
	//		flush																
	/// Flushes the writer. A flush error puts the stream into the failed
	/// state.
	pub fn flush(&mut self) {
		if self.error.is_none() {
			if let Err(err) = self.writer.flush() {
				self.fail(StreamError::Io(err.kind()));
			}
		}
	}
	
	//		into_inner															
	/// Consumes the printer, returning the writer.
	pub fn into_inner(self) -> W {
		self.writer
	}
	
	//		write_bytes															
	/// Writes raw bytes, recording any error.
	fn write_bytes(&mut self, bytes: &[u8]) {
		if self.error.is_none() {
			if let Err(err) = self.writer.write_all(bytes) {
				self.fail(StreamError::Io(err.kind()));
			}
		}
	}
}

//󰭅		NumericSink																
impl<W: Write> NumericSink for Printer<W> {
	//		write_numeric														
	fn write_numeric<N: Native>(&mut self, value: N) {
		let text = value.to_text(self.config.radix);
		self.write_bytes(text.as_bytes());
	}
	
	//		write_text															
	fn write_text(&mut self, text: &str) {
		self.write_bytes(text.as_bytes());
	}
}

stream_status!([R] Scanner<R>, [W] Printer<W>);
