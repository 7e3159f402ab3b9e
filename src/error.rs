/// An error from one of the UART bus operations.
///
/// `E` is the error type of the underlying [`SerialPort`][crate::SerialPort] implementation
/// (`std::io::Error` for the `serial2` backend).
#[derive(Debug)]
pub enum Error<E> {
	InvalidBusIndex(InvalidBusIndex),
	InvalidBaudRate(InvalidBaudRate),
	InvalidArgument(InvalidArgument),
	NotInitialized(NotInitialized),
	DeviceOpenFailed(E),
	ConfigurationFailed(E),
	WriteFailed(E),
	ReadFailed(E),
}

/// The requested bus index is outside the supported range.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct InvalidBusIndex {
	pub actual: usize,
	pub count: usize,
}

/// The requested baud rate is not one of the standard rates.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct InvalidBaudRate {
	pub actual: u32,
}

/// A transfer was requested with a zero-length buffer or byte count.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct InvalidArgument;

/// The bus has not been opened yet.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct NotInitialized {
	pub bus: usize,
}

impl InvalidBusIndex {
	pub fn check(actual: usize, count: usize) -> Result<(), Self> {
		if actual < count {
			Ok(())
		} else {
			Err(Self { actual, count })
		}
	}
}

impl InvalidArgument {
	pub fn check_nonzero(len: usize) -> Result<(), Self> {
		if len >= 1 {
			Ok(())
		} else {
			Err(Self)
		}
	}
}

impl<E: std::fmt::Debug + std::fmt::Display> std::error::Error for Error<E> {}
impl std::error::Error for InvalidBusIndex {}
impl std::error::Error for InvalidBaudRate {}
impl std::error::Error for InvalidArgument {}
impl std::error::Error for NotInitialized {}

impl<E> From<InvalidBusIndex> for Error<E> {
	fn from(other: InvalidBusIndex) -> Self {
		Self::InvalidBusIndex(other)
	}
}

impl<E> From<InvalidBaudRate> for Error<E> {
	fn from(other: InvalidBaudRate) -> Self {
		Self::InvalidBaudRate(other)
	}
}

impl<E> From<InvalidArgument> for Error<E> {
	fn from(other: InvalidArgument) -> Self {
		Self::InvalidArgument(other)
	}
}

impl<E> From<NotInitialized> for Error<E> {
	fn from(other: NotInitialized) -> Self {
		Self::NotInitialized(other)
	}
}

impl<E: std::fmt::Display> std::fmt::Display for Error<E> {
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
		match self {
			Self::InvalidBusIndex(e) => write!(f, "{}", e),
			Self::InvalidBaudRate(e) => write!(f, "{}", e),
			Self::InvalidArgument(e) => write!(f, "{}", e),
			Self::NotInitialized(e) => write!(f, "{}", e),
			Self::DeviceOpenFailed(e) => write!(f, "failed to open uart device: {}", e),
			Self::ConfigurationFailed(e) => write!(f, "failed to configure uart device: {}", e),
			Self::WriteFailed(e) => write!(f, "failed to write to uart: {}", e),
			Self::ReadFailed(e) => write!(f, "failed to read from uart: {}", e),
		}
	}
}

impl std::fmt::Display for InvalidBusIndex {
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
		write!(
			f,
			"invalid uart bus {}, supported buses are 0 to {}",
			self.actual,
			self.count - 1
		)
	}
}

impl std::fmt::Display for InvalidBaudRate {
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
		write!(f, "invalid baud rate {}, use a standard baud rate", self.actual)
	}
}

impl std::fmt::Display for InvalidArgument {
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
		write!(f, "transfer size must be at least 1 byte")
	}
}

impl std::fmt::Display for NotInitialized {
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
		write!(f, "uart{} has not been initialized", self.bus)
	}
}
