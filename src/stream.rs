//! The contract between the numeric wrappers and the streams they write to
//! and read from.
//!
//! A stream carries a sticky failure flag. Once set, every further operation
//! on the stream is a no-op until the caller clears the flag. All failures,
//! whether detected by the stream itself or by the wrappers, are reported
//! through that flag rather than through return values.



//		Packages

use crate::{
	errors::StreamError,
	native::Native,
};



//		Traits

//		StreamStatus															
/// Access to a stream's sticky failure flag.
pub trait StreamStatus {
	//		error																
	/// The error the stream failed with, or [`None`] if it is good.
	fn error(&self) -> Option<&StreamError>;
	
	//		fail																
	/// Puts the stream into the failed state.
	/// 
	/// Only the first error is kept. Calling this on a stream that has already
	/// failed has no effect.
	/// 
	/// # Parameters
	/// 
	/// * `error` - The reason for the failure.
	/// 
	fn fail(&mut self, error: StreamError);
	
	//		clear																
	/// Clears the failure flag, making the stream usable again.
	fn clear(&mut self);
	
	//		is_ok																
	/// Whether the stream is in the good state.
	fn is_ok(&self) -> bool {
		self.error().is_none()
	}
	
	//		status																
	/// The failure flag as a [`Result`], for use with `?`.
	/// 
	/// # Errors
	/// 
	/// Returns the recorded error if the stream has failed.
	/// 
	fn status(&self) -> Result<(), StreamError> {
		self.error().map_or(Ok(()), |err| Err(*err))
	}
}

//		NumericSink																
/// A stream that integers can be written to.
pub trait NumericSink: StreamStatus {
	//		write_numeric														
	/// Writes an integer using the stream's native numeric path.
	/// 
	/// Does nothing if the stream has failed.
	/// 
	fn write_numeric<N: Native>(&mut self, value: N);
	
	//		write_text															
	/// Writes text verbatim, e.g. a separator between numbers.
	/// 
	/// Does nothing if the stream has failed.
	/// 
	fn write_text(&mut self, text: &str);
	
	//		put																	
	/// Renders a value into the stream, returning the stream for chaining.
	fn put<R: Render>(&mut self, value: R) -> &mut Self
	where
		Self: Sized,
	{
		value.render(self);
		self
	}
}

//		NumericSource															
/// A stream that integers can be read from.
pub trait NumericSource: StreamStatus {
	//		read_numeric														
	/// Reads an integer using the stream's native numeric path.
	/// 
	/// On malformed input the slot is set to zero. On out-of-range input the
	/// slot is set to the nearest bound. Both set the failure flag. If the
	/// stream had already failed, the slot is left untouched.
	/// 
	/// Returns whether the read succeeded.
	/// 
	fn read_numeric<N: Native>(&mut self, slot: &mut N) -> bool;
	
	//		get																	
	/// Parses a value from the stream, returning the stream for chaining.
	fn get<P: Parse>(&mut self, target: P) -> &mut Self
	where
		Self: Sized,
	{
		target.parse(self);
		self
	}
}

//		Render																	
/// Something that can be written to a [`NumericSink`].
pub trait Render {
	//		render																
	/// Writes the value into the sink.
	fn render<S: NumericSink>(self, sink: &mut S);
}

//		Parse																	
/// Something that can be read from a [`NumericSource`].
pub trait Parse {
	//		parse																
	/// Reads the value from the source.
	fn parse<S: NumericSource>(self, source: &mut S);
}


//		Macros

//		stream_status															
/// Implements [`StreamStatus`] for streams that keep their failure flag in an
/// `error: Option<StreamError>` field.
macro_rules! stream_status {
	($([$($generics:tt)*] $t:ty),* $(,)?) => {$(
		//󰭅		StreamStatus													
		impl<$($generics)*> $crate::stream::StreamStatus for $t {
			//		error														
			fn error(&self) -> Option<&$crate::errors::StreamError> {
				self.error.as_ref()
			}
			
			//		fail														
			fn fail(&mut self, error: $crate::errors::StreamError) {
				_ = self.error.get_or_insert(error);
			}
			
			//		clear														
			fn clear(&mut self) {
				self.error = None;
			}
		}
	)*};
}

pub(crate) use stream_status;
