//! Blocking access to the fixed set of UART buses on an embedded Linux board.
//!
//! The [`Uart`] struct holds one slot per bus index and exposes the full lifecycle:
//! open a bus with [`Uart::open`], move bytes with [`Uart::send`] and [`Uart::read_bytes`],
//! and release it again with [`Uart::close`].
//! All calls are blocking; [`Uart::read_bytes`] enforces a total timeout across
//! partial reads and stops early when a shared [`Cancel`] signal fires,
//! so callers are never stuck in a read while the process shuts down.
//!
//! The hardware is reached through the [`SerialPort`] trait.
//! With the default `serial2` feature enabled, [`Uart`] uses [`serial2::SerialPort`]
//! as its backend and no type annotations are needed.

#[macro_use]
mod log;

mod baud;
mod cancel;
mod error;
mod serial_port;
mod uart;

pub use baud::BaudRate;
pub use cancel::Cancel;
pub use error::{Error, InvalidArgument, InvalidBaudRate, InvalidBusIndex, NotInitialized};
pub use serial_port::SerialPort;
pub use uart::{Uart, BUS_COUNT};
