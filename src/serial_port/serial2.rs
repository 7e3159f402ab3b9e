//! Trait implementation using the `serial2` crate.

use std::path::Path;
use std::time::{Duration, Instant};

impl crate::SerialPort for serial2::SerialPort {
	type Error = std::io::Error;

	type Instant = std::time::Instant;

	fn open(path: &Path) -> Result<Self, Self::Error> {
		serial2::SerialPort::open(path, serial2::KeepSettings)
	}

	fn configure(&mut self, baud_rate: u32) -> Result<(), Self::Error> {
		let mut settings = self.get_configuration()?;
		settings.set_raw();
		settings.set_baud_rate(baud_rate)?;
		settings.set_char_size(serial2::CharSize::Bits8);
		settings.set_stop_bits(serial2::StopBits::One);
		settings.set_parity(serial2::Parity::None);
		settings.set_flow_control(serial2::FlowControl::None);
		self.set_configuration(&settings)?;
		Ok(())
	}

	fn discard_input_buffer(&mut self) -> Result<(), Self::Error> {
		serial2::SerialPort::discard_input_buffer(self)
	}

	fn read(&mut self, buffer: &mut [u8], deadline: &Self::Instant) -> Result<usize, Self::Error> {
		let timeout = deadline
			.checked_duration_since(Instant::now())
			.ok_or(std::io::ErrorKind::TimedOut)?;
		self.set_read_timeout(timeout)?;
		serial2::SerialPort::read(self, buffer)
	}

	fn write(&mut self, buffer: &[u8]) -> Result<usize, Self::Error> {
		serial2::SerialPort::write(self, buffer)
	}

	fn make_deadline(&self, timeout: Duration) -> Self::Instant {
		Instant::now() + timeout
	}

	fn is_timeout_error(error: &Self::Error) -> bool {
		error.kind() == std::io::ErrorKind::TimedOut
	}

	fn is_interrupted_error(error: &Self::Error) -> bool {
		error.kind() == std::io::ErrorKind::Interrupted
	}
}
