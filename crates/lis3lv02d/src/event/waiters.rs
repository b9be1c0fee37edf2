//! Wakers of readers blocked on an empty event counter.

use core::cell::RefCell;
use core::task::Waker;

use critical_section::Mutex;
use heapless::Vec;
use portable_atomic::{AtomicU32, Ordering};

/// Maximum number of concurrently parked waiters.
///
/// Parking one more waiter wakes and evicts every parked one so no wakeup
/// is lost. With more than this many waiters pending at once they keep
/// evicting each other on every poll, and the executor spins until the
/// next trigger. Keep the number of concurrent `read`/`wait_ready` futures
/// on one reader at or below this bound.
pub const WAITER_CAPACITY: usize = 4;

type Slots = Vec<(u32, Waker), WAITER_CAPACITY>;

pub(crate) struct WaiterSet {
    next_id: AtomicU32,
    slots: Mutex<RefCell<Slots>>,
}

impl WaiterSet {
    pub(crate) const fn new() -> Self {
        Self {
            next_id: AtomicU32::new(0),
            slots: Mutex::new(RefCell::new(Vec::new())),
        }
    }

    pub(crate) fn allocate_id(&self) -> u32 {
        self.next_id.fetch_add(1, Ordering::Relaxed)
    }

    /// Parks `waker` under `id`, replacing an older waker for the same id.
    ///
    /// When the set is full every parked waiter is woken and evicted; they
    /// register again on their next poll.
    pub(crate) fn register(&self, id: u32, waker: &Waker) {
        let evicted = critical_section::with(|cs| {
            let mut slots = self.slots.borrow_ref_mut(cs);
            if let Some((_, parked)) = slots.iter_mut().find(|(slot_id, _)| *slot_id == id) {
                if !parked.will_wake(waker) {
                    parked.clone_from(waker);
                }
                return None;
            }
            match slots.push((id, waker.clone())) {
                Ok(()) => None,
                Err(entry) => {
                    let evicted = core::mem::take(&mut *slots);
                    // Cannot fail: the set was just emptied.
                    let _ = slots.push(entry);
                    Some(evicted)
                }
            }
        });
        if let Some(evicted) = evicted {
            for (_, waker) in evicted {
                waker.wake();
            }
        }
    }

    pub(crate) fn remove(&self, id: u32) {
        critical_section::with(|cs| {
            self.slots
                .borrow_ref_mut(cs)
                .retain(|(slot_id, _)| *slot_id != id);
        });
    }

    /// Wakes and removes every parked waiter.
    ///
    /// Wakers run after the critical section is left.
    pub(crate) fn wake_all(&self) {
        let parked = critical_section::with(|cs| core::mem::take(&mut *self.slots.borrow_ref_mut(cs)));
        for (_, waker) in parked {
            waker.wake();
        }
    }

    pub(crate) fn len(&self) -> usize {
        critical_section::with(|cs| self.slots.borrow_ref(cs).len())
    }
}

/// Owns one waiter id and unparks it when dropped.
pub(crate) struct WaiterGuard<'a> {
    set: &'a WaiterSet,
    id: u32,
}

impl<'a> WaiterGuard<'a> {
    pub(crate) fn new(set: &'a WaiterSet) -> Self {
        Self {
            set,
            id: set.allocate_id(),
        }
    }

    pub(crate) fn register(&self, waker: &Waker) {
        self.set.register(self.id, waker);
    }
}

impl Drop for WaiterGuard<'_> {
    fn drop(&mut self) {
        self.set.remove(self.id);
    }
}
