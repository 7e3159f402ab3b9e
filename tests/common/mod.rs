#![allow(dead_code)]

use std::collections::VecDeque;
use std::path::Path;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use uart_bus::SerialPort;

/// In-memory serial port.
///
/// Reads block (by polling) until data shows up or the deadline passes,
/// mimicking a tty configured for blocking reads with no inter-byte timeout.
#[derive(Default, Clone)]
pub struct MockSerialPort {
	pub read_buffer: Arc<Mutex<VecDeque<u8>>>,
	pub write_buffer: Arc<Mutex<VecDeque<u8>>>,
	pub baud_rate: Arc<Mutex<Option<u32>>>,
	/// When set, the next read with an empty buffer fails with this error kind.
	pub read_error: Arc<Mutex<Option<std::io::ErrorKind>>>,
}

impl MockSerialPort {
	pub fn new() -> Self {
		Self::default()
	}

	/// The far end of the line: a port whose read buffer is this port's write
	/// buffer and vice versa, as if the two were wired together.
	pub fn remote(&self) -> Self {
		Self {
			read_buffer: self.write_buffer.clone(),
			write_buffer: self.read_buffer.clone(),
			baud_rate: self.baud_rate.clone(),
			read_error: Arc::new(Mutex::new(None)),
		}
	}

	/// Fail the next read that finds no buffered data.
	pub fn inject_read_error(&self, kind: std::io::ErrorKind) {
		*self.read_error.lock().unwrap() = Some(kind);
	}
}

impl SerialPort for MockSerialPort {
	type Error = std::io::Error;

	type Instant = std::time::Instant;

	fn open(_path: &Path) -> Result<Self, Self::Error> {
		Ok(Self::new())
	}

	fn configure(&mut self, baud_rate: u32) -> Result<(), Self::Error> {
		*self.baud_rate.lock().unwrap() = Some(baud_rate);
		Ok(())
	}

	fn discard_input_buffer(&mut self) -> Result<(), Self::Error> {
		self.read_buffer.lock().unwrap().clear();
		Ok(())
	}

	fn read(&mut self, buffer: &mut [u8], deadline: &Self::Instant) -> Result<usize, Self::Error> {
		loop {
			{
				let mut data = self.read_buffer.lock().unwrap();
				if !data.is_empty() {
					let len = buffer.len().min(data.len());
					for (dest, byte) in buffer.iter_mut().zip(data.drain(..len)) {
						*dest = byte;
					}
					return Ok(len);
				}
			}
			if let Some(kind) = self.read_error.lock().unwrap().take() {
				return Err(kind.into());
			}
			if Instant::now() >= *deadline {
				return Err(std::io::ErrorKind::TimedOut.into());
			}
			std::thread::sleep(Duration::from_millis(1));
		}
	}

	fn write(&mut self, buffer: &[u8]) -> Result<usize, Self::Error> {
		let mut data = self.write_buffer.lock().unwrap();
		for &byte in buffer {
			data.push_back(byte);
		}
		Ok(buffer.len())
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

/// Push bytes into the port's read buffer from a background thread,
/// one byte per `interval`.
pub fn trickle_bytes(port: &MockSerialPort, bytes: Vec<u8>, interval: Duration) -> JoinHandle<()> {
	let buffer = Arc::clone(&port.read_buffer);
	std::thread::spawn(move || {
		for byte in bytes {
			std::thread::sleep(interval);
			buffer.lock().unwrap().push_back(byte);
		}
	})
}

pub fn init_logging() {
	let _ = env_logger::builder().is_test(true).try_init();
}
