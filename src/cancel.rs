use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Cooperative shutdown signal polled by blocking reads.
///
/// Clones share the same underlying flag, so one handle can be given to a signal
/// handler or supervisor thread while another is passed to [`Uart::read_bytes`][crate::Uart::read_bytes].
/// Once [`cancel()`][Self::cancel] is called, in-progress reads return their partial
/// data at the next loop iteration instead of waiting out their full timeout budget.
///
/// Cancellation is not preemptive: a wait that is already in flight still runs to
/// its own timeout before the flag is observed.
#[derive(Debug, Clone, Default)]
pub struct Cancel {
	cancelled: Arc<AtomicBool>,
}

impl Cancel {
	/// Make a new signal in the "running" state.
	pub fn new() -> Self {
		Self::default()
	}

	/// Flip the signal to "exiting".
	///
	/// There is no way back to the running state; make a new [`Cancel`] instead.
	pub fn cancel(&self) {
		self.cancelled.store(true, Ordering::Relaxed);
	}

	/// Check whether [`cancel()`][Self::cancel] has been called on any clone of this signal.
	pub fn is_cancelled(&self) -> bool {
		self.cancelled.load(Ordering::Relaxed)
	}
}
