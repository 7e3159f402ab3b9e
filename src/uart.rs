use core::time::Duration;
use std::path::{Path, PathBuf};

use crate::error::{Error, InvalidArgument, InvalidBusIndex, NotInitialized};
use crate::{BaudRate, Cancel};

/// The number of UART buses exposed by the board.
pub const BUS_COUNT: usize = 6;

/// Device node for each bus index on a stock board.
///
/// The device tree overlay decides which of these actually exist at runtime.
const DEFAULT_PATHS: [&str; BUS_COUNT] = [
	"/dev/ttyO0",
	"/dev/ttyO1",
	"/dev/ttyO2",
	"/dev/ttyO3",
	"/dev/ttyO4",
	"/dev/ttyO5",
];

/// Registry record for one bus.
///
/// The bus is initialized if and only if `port` is `Some`.
struct Slot<SerialPort> {
	path: PathBuf,
	port: Option<SerialPort>,
}

macro_rules! make_uart_struct {
	($($DefaultSerialPort:ty)?) => {
		/// The fixed table of UART buses on the board.
		///
		/// Holds one slot per bus index with its device path and, once the bus has been
		/// opened, the serial port handle. Every operation takes the bus index as its
		/// first argument and validates it before doing anything else.
		///
		/// If the `"serial2"` feature is enabled, the `SerialPort` generic type argument
		/// defaults to [`serial2::SerialPort`].
		/// If it is not enabled, the `SerialPort` argument must always be specified.
		///
		/// Operations on a single bus are not synchronized internally:
		/// use at most one caller per bus index at a time.
		pub struct Uart<SerialPort $(= $DefaultSerialPort)?>
		where
			SerialPort: crate::SerialPort,
		{
			slots: [Slot<SerialPort>; BUS_COUNT],
		}
	};
}

#[cfg(feature = "serial2")]
make_uart_struct!(serial2::SerialPort);

#[cfg(not(feature = "serial2"))]
make_uart_struct!();

impl<SerialPort> std::fmt::Debug for Uart<SerialPort>
where
	SerialPort: crate::SerialPort,
{
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		let mut map = f.debug_map();
		for slot in &self.slots {
			map.entry(&slot.path, &slot.port.is_some());
		}
		map.finish()
	}
}

impl<SerialPort> Default for Uart<SerialPort>
where
	SerialPort: crate::SerialPort,
{
	fn default() -> Self {
		Self::new()
	}
}

impl<SerialPort> Uart<SerialPort>
where
	SerialPort: crate::SerialPort,
{
	/// Make a bus table with the standard device paths (`/dev/ttyO0` to `/dev/ttyO5`).
	///
	/// All buses start out closed.
	pub fn new() -> Self {
		Self::with_paths(DEFAULT_PATHS)
	}

	/// Make a bus table with custom device paths, one per bus index.
	pub fn with_paths<P: Into<PathBuf>>(paths: [P; BUS_COUNT]) -> Self {
		Self {
			slots: paths.map(|path| Slot {
				path: path.into(),
				port: None,
			}),
		}
	}

	/// The device path used for a bus.
	pub fn path(&self, bus: usize) -> Result<&Path, Error<SerialPort::Error>> {
		InvalidBusIndex::check(bus, BUS_COUNT)?;
		Ok(&self.slots[bus].path)
	}

	/// Check whether a bus has been opened.
	pub fn is_open(&self, bus: usize) -> Result<bool, Error<SerialPort::Error>> {
		InvalidBusIndex::check(bus, BUS_COUNT)?;
		Ok(self.slots[bus].port.is_some())
	}

	/// Open a bus at the given baud rate and configure it for raw 8N1 communication.
	///
	/// Any previously open port for this bus is closed first.
	/// Stale input buffered by the OS is discarded, so the first read after opening
	/// only sees bytes that arrived after this call.
	///
	/// Fails with [`Error::DeviceOpenFailed`] if the device node cannot be opened,
	/// which usually means the device tree overlay for this bus is not loaded.
	pub fn open(&mut self, bus: usize, baud_rate: u32) -> Result<(), Error<SerialPort::Error>> {
		InvalidBusIndex::check(bus, BUS_COUNT)?;
		let baud_rate = BaudRate::from_u32(baud_rate)?;

		// Close the bus in case it was already open.
		self.slots[bus].port = None;

		let mut port = SerialPort::open(&self.slots[bus].path).map_err(Error::DeviceOpenFailed)?;
		port.configure(baud_rate.as_u32()).map_err(Error::ConfigurationFailed)?;
		port.discard_input_buffer().map_err(Error::ConfigurationFailed)?;
		self.slots[bus].port = Some(port);
		debug!("opened uart{} at {} baud", bus, baud_rate.as_u32());
		Ok(())
	}

	/// Close a bus.
	///
	/// Closing a bus that was never opened is a no-op, so this is safe to call
	/// unconditionally during cleanup.
	pub fn close(&mut self, bus: usize) -> Result<(), Error<SerialPort::Error>> {
		InvalidBusIndex::check(bus, BUS_COUNT)?;
		if self.slots[bus].port.take().is_some() {
			debug!("closed uart{}", bus);
		}
		Ok(())
	}

	/// Take ownership of an already-open port for a bus.
	///
	/// For callers that need non-standard line settings: configure the port
	/// yourself, then hand it to the registry. Any previously open port for
	/// this bus is closed.
	pub fn install(&mut self, bus: usize, port: SerialPort) -> Result<(), Error<SerialPort::Error>> {
		InvalidBusIndex::check(bus, BUS_COUNT)?;
		self.slots[bus].port = Some(port);
		Ok(())
	}

	/// Borrow the underlying serial port of a bus.
	pub fn port(&self, bus: usize) -> Result<&SerialPort, Error<SerialPort::Error>> {
		InvalidBusIndex::check(bus, BUS_COUNT)?;
		self.slots[bus].port.as_ref().ok_or_else(|| NotInitialized { bus }.into())
	}

	/// Mutably borrow the underlying serial port of a bus.
	///
	/// Use this to do your own reading and writing instead of going through
	/// [`send`][Self::send] and [`read_bytes`][Self::read_bytes].
	pub fn port_mut(&mut self, bus: usize) -> Result<&mut SerialPort, Error<SerialPort::Error>> {
		InvalidBusIndex::check(bus, BUS_COUNT)?;
		self.slots[bus].port.as_mut().ok_or_else(|| NotInitialized { bus }.into())
	}

	/// Discard data received on a bus but not yet read.
	///
	/// Data queued for transmission is not affected.
	pub fn flush(&mut self, bus: usize) -> Result<(), Error<SerialPort::Error>> {
		let port = self.port_mut(bus)?;
		port.discard_input_buffer().map_err(Error::ReadFailed)
	}

	/// Write bytes to a bus in a single attempt.
	///
	/// Returns the number of bytes actually accepted by the OS, which may be less
	/// than `data.len()`; retrying the remainder is up to the caller.
	/// No timeout is applied to writes, so a stalled line can block this call.
	pub fn send(&mut self, bus: usize, data: &[u8]) -> Result<usize, Error<SerialPort::Error>> {
		InvalidBusIndex::check(bus, BUS_COUNT)?;
		InvalidArgument::check_nonzero(data.len())?;
		let port = self.slots[bus].port.as_mut().ok_or(NotInitialized { bus })?;
		let sent = port.write(data).map_err(Error::WriteFailed)?;
		trace!("sent {} of {} bytes on uart{}", sent, data.len(), bus);
		Ok(sent)
	}

	/// Write a single byte to a bus.
	pub fn send_byte(&mut self, bus: usize, byte: u8) -> Result<usize, Error<SerialPort::Error>> {
		self.send(bus, &[byte])
	}

	/// Read exactly `count` bytes from a bus, blocking up to `timeout` in total.
	///
	/// The timeout is a single budget for the whole call: time spent waiting for
	/// one byte is not available again when waiting for the next.
	///
	/// A shorter-than-requested result is not an error. The returned buffer holds
	/// fewer than `count` bytes when the timeout expires, when the wait is
	/// interrupted by a delivered signal, or when `cancel` flips to the exiting
	/// state. Callers that need all `count` bytes must compare the returned length
	/// against the request. Hard I/O errors fail with [`Error::ReadFailed`] and
	/// discard any partial data.
	pub fn read_bytes(
		&mut self,
		bus: usize,
		count: usize,
		timeout: Duration,
		cancel: &Cancel,
	) -> Result<Vec<u8>, Error<SerialPort::Error>> {
		InvalidBusIndex::check(bus, BUS_COUNT)?;
		InvalidArgument::check_nonzero(count)?;
		let port = self.slots[bus].port.as_mut().ok_or(NotInitialized { bus })?;

		// One deadline for the whole call. Each wait below gets the time remaining
		// until this deadline, never a fresh copy of the full timeout, so the total
		// wait across all iterations is bounded by `timeout`.
		let deadline = port.make_deadline(timeout);

		let mut buffer = vec![0; count];
		let mut bytes_read = 0;

		// Stop looping as soon as the process starts shutting down, so callers are
		// never stuck in here during exit.
		while bytes_read < count && !cancel.is_cancelled() {
			match port.read(&mut buffer[bytes_read..], &deadline) {
				// The OS may return fewer bytes than fit in the buffer;
				// loop back around for the rest.
				Ok(read) => bytes_read += read,
				// Nothing (more) arrived in time. Not an error, the caller
				// sees a short result.
				Err(e) if SerialPort::is_timeout_error(&e) => break,
				// Interrupted by a signal, e.g. ctrl-c during shutdown.
				// Same treatment as cancellation: hand back what we have.
				Err(e) if SerialPort::is_interrupted_error(&e) => break,
				Err(e) => return Err(Error::ReadFailed(e)),
			}
		}

		if bytes_read < count {
			trace!("short read on uart{}: {} of {} bytes", bus, bytes_read, count);
		}
		buffer.truncate(bytes_read);
		Ok(buffer)
	}
}
