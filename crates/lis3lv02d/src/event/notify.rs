//! Signal-style notification fan-out.

use core::cell::RefCell;

use critical_section::Mutex;
use heapless::Vec;

use crate::error::Error;

/// Maximum number of registered notification sinks.
pub const NOTIFY_CAPACITY: usize = 4;

/// Asynchronous notification target fired on every free-fall trigger.
///
/// `notify` runs on the trigger path, possibly in interrupt context. It must
/// return in bounded time without blocking or allocating.
pub trait NotifySink: Sync {
    /// Signals that at least one new event is pending.
    fn notify(&self);
}

pub(crate) struct NotifyRegistry {
    sinks: Mutex<RefCell<Vec<&'static dyn NotifySink, NOTIFY_CAPACITY>>>,
}

impl NotifyRegistry {
    pub(crate) const fn new() -> Self {
        Self {
            sinks: Mutex::new(RefCell::new(Vec::new())),
        }
    }

    /// Adds a sink. Registering the same sink twice is a no-op.
    pub(crate) fn register(&self, sink: &'static dyn NotifySink) -> Result<(), Error> {
        critical_section::with(|cs| {
            let mut sinks = self.sinks.borrow_ref_mut(cs);
            if sinks.iter().any(|known| core::ptr::addr_eq(*known, sink)) {
                return Ok(());
            }
            sinks.push(sink).map_err(|_| Error::ResourceUnavailable)
        })
    }

    /// Removes a sink. Returns false if it was not registered.
    pub(crate) fn deregister(&self, sink: &dyn NotifySink) -> bool {
        critical_section::with(|cs| {
            let mut sinks = self.sinks.borrow_ref_mut(cs);
            let before = sinks.len();
            sinks.retain(|known| !core::ptr::addr_eq(*known, sink));
            sinks.len() != before
        })
    }

    pub(crate) fn clear(&self) {
        critical_section::with(|cs| self.sinks.borrow_ref_mut(cs).clear());
    }

    pub(crate) fn len(&self) -> usize {
        critical_section::with(|cs| self.sinks.borrow_ref(cs).len())
    }

    /// Fires every registered sink outside the critical section.
    ///
    /// A sink deregistered concurrently may still receive this notification.
    pub(crate) fn fire(&self) {
        let sinks = critical_section::with(|cs| self.sinks.borrow_ref(cs).clone());
        for sink in &sinks {
            sink.notify();
        }
    }
}
