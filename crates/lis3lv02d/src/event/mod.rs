//! Free-fall event device.
//!
//! The sensor raises its interrupt line when it detects free fall. Each edge
//! is fed to [`FreefallEvents::trigger`], which bumps a coalescing counter,
//! wakes parked readers and fires registered notification sinks. A single
//! [`FreefallReader`] drains the counter one byte-sized count at a time.
//!
//! ```rust,no_run
//! use ph_lis3lv02d::{FreefallEvents, InterruptLine, OpenMode};
//!
//! static EVENTS: FreefallEvents = FreefallEvents::new();
//!
//! // Interrupt handler:
//! fn on_freefall_irq() {
//!     EVENTS.trigger();
//! }
//!
//! async fn consumer<L: InterruptLine>(line: &mut L) -> Result<(), ph_lis3lv02d::Error> {
//!     let reader = EVENTS.open(line, OpenMode::Blocking)?;
//!     let count = reader.next_event().await?;
//!     # let _ = count;
//!     Ok(())
//! }
//! ```

pub(crate) mod notify;
pub(crate) mod waiters;

pub use notify::{NOTIFY_CAPACITY, NotifySink};
pub use waiters::WAITER_CAPACITY;

use core::convert::Infallible;
use core::future::{Future, poll_fn};
use core::task::{Context, Poll};

use embassy_futures::select::{Either, select};
use embedded_hal_async::digital::Wait;
use portable_atomic::{AtomicBool, AtomicU32, Ordering};

use crate::error::Error;

use notify::NotifyRegistry;
use waiters::{WaiterGuard, WaiterSet};

/// Exclusive interrupt line handed out by the bus collaborator.
pub trait InterruptLine {
    /// Error reported when the line cannot be claimed.
    type Error;

    /// Claims the line and enables edge delivery to the trigger path.
    fn acquire(&mut self) -> Result<(), Self::Error>;

    /// Disables edge delivery and gives the line back.
    fn release(&mut self);
}

/// Read behavior chosen at attach time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum OpenMode {
    /// Reads park until an event arrives.
    #[default]
    Blocking,
    /// Reads fail with [`Error::WouldBlock`] when nothing is pending.
    NonBlocking,
}

/// Shared state of the free-fall event device.
pub struct FreefallEvents {
    count: AtomicU32,
    opened: AtomicBool,
    registered: AtomicBool,
    waiters: WaiterSet,
    sinks: NotifyRegistry,
}

impl Default for FreefallEvents {
    fn default() -> Self {
        Self::new()
    }
}

impl FreefallEvents {
    /// Creates an unregistered, closed event device.
    pub const fn new() -> Self {
        Self {
            count: AtomicU32::new(0),
            opened: AtomicBool::new(false),
            registered: AtomicBool::new(false),
            waiters: WaiterSet::new(),
            sinks: NotifyRegistry::new(),
        }
    }

    /// Records one free-fall edge.
    ///
    /// Safe to call from interrupt context: it never blocks, allocates or
    /// touches the bus. The counter saturates instead of wrapping.
    pub fn trigger(&self) {
        let _ = self
            .count
            .fetch_update(Ordering::AcqRel, Ordering::Relaxed, |n| n.checked_add(1));
        self.waiters.wake_all();
        self.sinks.fire();
    }

    /// Returns the number of events not yet drained.
    pub fn pending(&self) -> u32 {
        self.count.load(Ordering::Acquire)
    }

    /// Returns true while a reader is attached.
    pub fn is_open(&self) -> bool {
        self.opened.load(Ordering::Acquire)
    }

    /// Returns true once an identified driver has enabled the device.
    pub fn is_registered(&self) -> bool {
        self.registered.load(Ordering::Acquire)
    }

    /// Number of parked waiters.
    pub fn waiter_count(&self) -> usize {
        self.waiters.len()
    }

    /// Number of registered notification sinks.
    pub fn notify_sink_count(&self) -> usize {
        self.sinks.len()
    }

    pub(crate) fn set_registered(&self, registered: bool) {
        self.registered.store(registered, Ordering::Release);
    }

    /// Attaches the single reader.
    ///
    /// Resets the counter and claims `line` for the lifetime of the reader.
    pub fn open<'a, L: InterruptLine>(
        &'a self,
        line: &'a mut L,
        mode: OpenMode,
    ) -> Result<FreefallReader<'a, L>, Error> {
        if !self.is_registered() {
            return Err(Error::NotIdentified);
        }
        self.opened
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .map_err(|_| Error::AlreadyOpen)?;
        self.count.store(0, Ordering::Release);
        if line.acquire().is_err() {
            error!("lis3: interrupt line unavailable");
            self.opened.store(false, Ordering::Release);
            return Err(Error::ResourceUnavailable);
        }
        debug!("lis3: freefall reader attached");
        Ok(FreefallReader {
            events: self,
            line,
            mode,
            poll_id: self.waiters.allocate_id(),
        })
    }

    fn take(&self) -> Option<u8> {
        match self.count.swap(0, Ordering::AcqRel) {
            0 => None,
            n => Some(u8::try_from(n).unwrap_or(u8::MAX)),
        }
    }
}

/// Attached reader of the free-fall event device.
///
/// Dropping the reader detaches it: notification sinks are cleared, the
/// interrupt line is released and the device can be opened again.
pub struct FreefallReader<'a, L: InterruptLine> {
    events: &'a FreefallEvents,
    line: &'a mut L,
    mode: OpenMode,
    poll_id: u32,
}

impl<L: InterruptLine> FreefallReader<'_, L> {
    /// Returns the current read mode.
    pub const fn mode(&self) -> OpenMode {
        self.mode
    }

    /// Switches between blocking and non-blocking reads.
    pub fn set_mode(&mut self, mode: OpenMode) {
        self.mode = mode;
    }

    /// Drains the counter into `buf[0]`, clamped to 255.
    ///
    /// Returns the number of bytes written (always 1). In blocking mode this
    /// waits for the next trigger when nothing is pending.
    pub async fn read(&self, buf: &mut [u8]) -> Result<usize, Error> {
        if self.mode == OpenMode::NonBlocking {
            return self.try_read(buf);
        }
        let Some(slot) = buf.first_mut() else {
            return Err(Error::InvalidArgument);
        };
        let guard = WaiterGuard::new(&self.events.waiters);
        let count = poll_fn(|cx| {
            if let Some(count) = self.events.take() {
                return Poll::Ready(count);
            }
            guard.register(cx.waker());
            // A trigger may have landed before the waker was parked.
            match self.events.take() {
                Some(count) => Poll::Ready(count),
                None => Poll::Pending,
            }
        })
        .await;
        *slot = count;
        Ok(1)
    }

    /// Non-blocking read regardless of mode.
    pub fn try_read(&self, buf: &mut [u8]) -> Result<usize, Error> {
        let slot = buf.first_mut().ok_or(Error::InvalidArgument)?;
        *slot = self.events.take().ok_or(Error::WouldBlock)?;
        Ok(1)
    }

    /// Reads one clamped event count.
    pub async fn next_event(&self) -> Result<u8, Error> {
        let mut buf = [0u8; 1];
        self.read(&mut buf).await?;
        Ok(buf[0])
    }

    /// Like [`read`](Self::read), but gives up with [`Error::Interrupted`]
    /// once `cancel` completes. The counter is left untouched on cancel.
    pub async fn read_or_cancel<C: Future>(&self, buf: &mut [u8], cancel: C) -> Result<usize, Error> {
        match select(self.read(buf), cancel).await {
            Either::First(result) => result,
            Either::Second(_) => {
                debug!("lis3: freefall read interrupted");
                Err(Error::Interrupted)
            }
        }
    }

    /// Returns true if a read would complete immediately.
    pub fn is_ready(&self) -> bool {
        self.events.pending() != 0
    }

    /// Readiness check for multiplexed waits.
    ///
    /// When not ready, the waker is parked with the blocking readers and is
    /// woken by the next trigger.
    pub fn poll_ready(&self, cx: &mut Context<'_>) -> Poll<()> {
        if self.is_ready() {
            return Poll::Ready(());
        }
        self.events.waiters.register(self.poll_id, cx.waker());
        if self.is_ready() {
            Poll::Ready(())
        } else {
            Poll::Pending
        }
    }

    /// Waits until an event is pending without draining it.
    pub async fn wait_ready(&self) {
        let guard = WaiterGuard::new(&self.events.waiters);
        poll_fn(|cx| {
            if self.is_ready() {
                return Poll::Ready(());
            }
            guard.register(cx.waker());
            if self.is_ready() {
                Poll::Ready(())
            } else {
                Poll::Pending
            }
        })
        .await;
    }

    /// Registers a sink fired on every trigger while attached.
    pub fn register_notify(&self, sink: &'static dyn NotifySink) -> Result<(), Error> {
        self.events.sinks.register(sink)
    }

    /// Removes a previously registered sink.
    pub fn deregister_notify(&self, sink: &dyn NotifySink) {
        self.events.sinks.deregister(sink);
    }

    /// Detaches the reader.
    pub fn close(self) {}
}

impl<L: InterruptLine> Drop for FreefallReader<'_, L> {
    fn drop(&mut self) {
        self.events.sinks.clear();
        self.events.waiters.remove(self.poll_id);
        self.line.release();
        self.events.opened.store(false, Ordering::Release);
        debug!("lis3: freefall reader detached");
    }
}

/// Turns rising edges on `pin` into [`FreefallEvents::trigger`] calls.
///
/// Runs until the pin reports an error.
pub async fn forward_edges<P: Wait>(events: &FreefallEvents, pin: &mut P) -> Result<Infallible, P::Error> {
    loop {
        pin.wait_for_rising_edge().await?;
        events.trigger();
    }
}
