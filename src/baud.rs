use crate::InvalidBaudRate;

/// A standard baud rate accepted by [`Uart::open`][crate::Uart::open].
///
/// Any numeric value outside this set is rejected, not rounded to the nearest rate.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum BaudRate {
	B50,
	B75,
	B110,
	B134,
	B150,
	B200,
	B300,
	B600,
	B1200,
	B1800,
	B2400,
	B4800,
	B9600,
	B19200,
	B38400,
	B57600,
	B115200,
	B230400,
}

impl BaudRate {
	/// Look up the baud rate for a numeric value.
	pub fn from_u32(raw: u32) -> Result<Self, InvalidBaudRate> {
		match raw {
			50 => Ok(Self::B50),
			75 => Ok(Self::B75),
			110 => Ok(Self::B110),
			134 => Ok(Self::B134),
			150 => Ok(Self::B150),
			200 => Ok(Self::B200),
			300 => Ok(Self::B300),
			600 => Ok(Self::B600),
			1200 => Ok(Self::B1200),
			1800 => Ok(Self::B1800),
			2400 => Ok(Self::B2400),
			4800 => Ok(Self::B4800),
			9600 => Ok(Self::B9600),
			19200 => Ok(Self::B19200),
			38400 => Ok(Self::B38400),
			57600 => Ok(Self::B57600),
			115200 => Ok(Self::B115200),
			230400 => Ok(Self::B230400),
			actual => Err(InvalidBaudRate { actual }),
		}
	}

	/// The numeric value of the baud rate.
	pub fn as_u32(self) -> u32 {
		match self {
			Self::B50 => 50,
			Self::B75 => 75,
			Self::B110 => 110,
			Self::B134 => 134,
			Self::B150 => 150,
			Self::B200 => 200,
			Self::B300 => 300,
			Self::B600 => 600,
			Self::B1200 => 1200,
			Self::B1800 => 1800,
			Self::B2400 => 2400,
			Self::B4800 => 4800,
			Self::B9600 => 9600,
			Self::B19200 => 19200,
			Self::B38400 => 38400,
			Self::B57600 => 57600,
			Self::B115200 => 115200,
			Self::B230400 => 230400,
		}
	}
}

impl std::convert::TryFrom<u32> for BaudRate {
	type Error = InvalidBaudRate;

	fn try_from(raw: u32) -> Result<Self, InvalidBaudRate> {
		Self::from_u32(raw)
	}
}

#[cfg(test)]
mod test {
	use super::*;
	use assert2::assert;

	#[test]
	fn test_standard_rates_round_trip() {
		for &raw in &[
			50u32, 75, 110, 134, 150, 200, 300, 600, 1200, 1800, 2400, 4800, 9600, 19200, 38400, 57600, 115200, 230400,
		] {
			assert!(BaudRate::from_u32(raw).unwrap().as_u32() == raw);
		}
	}

	#[test]
	fn test_non_standard_rates_are_rejected() {
		assert!(BaudRate::from_u32(0) == Err(InvalidBaudRate { actual: 0 }));
		assert!(BaudRate::from_u32(9601) == Err(InvalidBaudRate { actual: 9601 }));
		assert!(BaudRate::from_u32(128000) == Err(InvalidBaudRate { actual: 128000 }));
		assert!(BaudRate::from_u32(1000000) == Err(InvalidBaudRate { actual: 1000000 }));
	}
}
