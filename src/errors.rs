//! Contains error types used throughout the library.



//		Packages

use std::io::ErrorKind as IoErrorKind;
use thiserror::Error as ThisError;



//		Enums

//		StreamError																
/// Represents the reasons a stream can enter its failed state.
/// 
/// A [`StreamError`] is never returned directly by the numeric wrappers.
/// Instead it is recorded as the payload of the stream's sticky failure flag,
/// via [`StreamStatus::fail()`](crate::StreamStatus::fail()), and stays there
/// until the caller clears it. This keeps the calling convention identical for
/// every integer width: generic code checks the stream, not the value.
/// 
#[derive(Clone, Copy, Debug, Eq, PartialEq, ThisError)]
#[non_exhaustive]
pub enum StreamError {
	/// The input did not contain an integer at the read position, e.g. it
	/// started with a letter.
	#[error("Malformed integer")]
	Malformed,
	
	/// The input was exhausted before any digit could be read.
	#[error("Unexpected end of input")]
	EndOfInput,
	
	/// The incoming value does not fit into the destination type. The
	/// destination holds the nearest representable bound.
	#[error("Value out of range")]
	OutOfRange,
	
	/// The formatter being rendered into reported an error.
	#[error("Formatter error")]
	Format,
	
	/// The underlying reader or writer reported an error.
	#[error("I/O error: {0}")]
	Io(IoErrorKind),
}
