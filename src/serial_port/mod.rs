//! [`SerialPort`] trait to support reading/writing from different serial port implementations.

use core::time::Duration;
use std::path::Path;

#[cfg(feature = "serial2")]
mod serial2;

/// [`SerialPort`]s are used to communicate with the hardware by reading and writing data.
///
/// The implementor of the trait must configure the serial line for raw input and output:
/// 8 bit characters, 1 stop bit, no parity, no flow control, receiver enabled and
/// modem control lines ignored.
/// A read must block until at least one byte is available or the deadline passes;
/// there is no inter-byte timeout at this level.
pub trait SerialPort: Sized {
	/// The error type returned by the serial port when opening, reading or writing.
	type Error;

	/// A point in time that can be used as a deadline for I/O operations.
	type Instant: Copy;

	/// Open the serial device at the given path for blocking reads and writes,
	/// without becoming its controlling terminal.
	///
	/// The line settings are left untouched so that a failure to open and a failure
	/// to configure stay distinguishable for the caller.
	fn open(path: &Path) -> Result<Self, Self::Error>;

	/// Apply the line settings described above with the given baud rate.
	fn configure(&mut self, baud_rate: u32) -> Result<(), Self::Error>;

	/// Discard data received by the OS but not yet read by the application.
	///
	/// Data queued for transmission is not affected.
	fn discard_input_buffer(&mut self) -> Result<(), Self::Error>;

	/// Read available bytes into the buffer, blocking until at least one byte
	/// is available or the deadline expires.
	fn read(&mut self, buffer: &mut [u8], deadline: &Self::Instant) -> Result<usize, Self::Error>;

	/// Write the buffer to the serial port in a single attempt.
	///
	/// Returns the number of bytes actually accepted by the OS, which may be
	/// less than the buffer length.
	fn write(&mut self, buffer: &[u8]) -> Result<usize, Self::Error>;

	/// Make a deadline that expires after the given timeout.
	fn make_deadline(&self, timeout: Duration) -> Self::Instant;

	/// Check if an error indicates that a deadline expired.
	fn is_timeout_error(error: &Self::Error) -> bool;

	/// Check if an error indicates that a wait was interrupted by a delivered
	/// signal rather than failing.
	fn is_interrupted_error(error: &Self::Error) -> bool;
}
