//! Scroll-triggered reveal latches.
//!
//! Every content section of the page owns a [`RevealHandle`]: a one-way
//! boolean latch that flips from `false` to `true` the first time the
//! section's visible fraction of the viewport reaches its threshold, and
//! never flips back. The [`RevealObserver`] is the fan-in point: the event
//! loop feeds it intersection samples after each scroll, off the render
//! path, and the observer latches whichever subscriptions qualify.
//!
//! Subscriptions follow acquire/release discipline: [`RevealObserver::observe`]
//! registers, dropping the returned handle unregisters. A sample delivered
//! after the handle is dropped mutates nothing.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

/// Interior observer state shared between the observer and its handles.
struct Inner<K> {
    entries: Vec<Entry<K>>,
    next_id: u64,
}

/// One live subscription: a region, a threshold, and the latch to set.
struct Entry<K> {
    id: u64,
    region: K,
    threshold: f64,
    latch: Rc<Cell<bool>>,
}

/// Fan-in point for intersection samples.
///
/// Single-threaded by design: the UI event loop is the only caller, so the
/// interior state lives behind `Rc<RefCell<_>>` rather than a lock.
pub struct RevealObserver<K> {
    inner: Rc<RefCell<Inner<K>>>,
}

impl<K: Copy + PartialEq> RevealObserver<K> {
    pub fn new() -> Self {
        RevealObserver {
            inner: Rc::new(RefCell::new(Inner {
                entries: Vec::new(),
                next_id: 0,
            })),
        }
    }

    /// Subscribe a region with an intersection threshold in `[0, 1]`.
    ///
    /// Out-of-range thresholds are clamped. The returned handle reads
    /// `false` until a qualifying sample arrives and releases the
    /// subscription when dropped.
    pub fn observe(&self, region: K, threshold: f64) -> RevealHandle<K> {
        let threshold = threshold.clamp(0.0, 1.0);
        let latch = Rc::new(Cell::new(false));
        let mut inner = self.inner.borrow_mut();
        let id = inner.next_id;
        inner.next_id += 1;
        inner.entries.push(Entry {
            id,
            region,
            threshold,
            latch: Rc::clone(&latch),
        });
        RevealHandle {
            latch,
            id,
            inner: Rc::downgrade(&self.inner),
        }
    }

    /// Deliver one intersection sample for `region`.
    ///
    /// Latches every live subscription on that region whose threshold the
    /// ratio meets (the boundary is inclusive) and retires it. Returns
    /// `true` if any latch fired on this delivery, so the caller can stamp
    /// the transition. Samples for unknown regions and samples that arrive
    /// after a latch has fired are no-ops.
    pub fn deliver(&self, region: K, ratio: f64) -> bool {
        let mut inner = self.inner.borrow_mut();
        let mut fired = false;
        inner.entries.retain(|entry| {
            if entry.region == region && ratio >= entry.threshold {
                entry.latch.set(true);
                fired = true;
                false
            } else {
                true
            }
        });
        fired
    }

    /// Number of subscriptions still waiting on their threshold.
    pub fn active_subscriptions(&self) -> usize {
        self.inner.borrow().entries.len()
    }
}

impl<K: Copy + PartialEq> Default for RevealObserver<K> {
    fn default() -> Self {
        Self::new()
    }
}

/// A one-way visibility latch owned by a section.
///
/// Reads are synchronous and cheap. Dropping the handle releases the
/// underlying subscription unconditionally, whether or not the latch ever
/// fired.
pub struct RevealHandle<K> {
    latch: Rc<Cell<bool>>,
    id: u64,
    inner: Weak<RefCell<Inner<K>>>,
}

impl<K> RevealHandle<K> {
    /// A handle with no subscription behind it.
    ///
    /// Used when the target region cannot be resolved at mount time: the
    /// latch stays `false` for the handle's whole lifetime and the section
    /// degrades to its non-animated presentation.
    pub fn detached() -> Self {
        RevealHandle {
            latch: Rc::new(Cell::new(false)),
            id: u64::MAX,
            inner: Weak::new(),
        }
    }

    /// Whether the section has been seen. Monotonic: once `true`, stays
    /// `true` for the lifetime of this handle.
    pub fn is_visible(&self) -> bool {
        self.latch.get()
    }
}

impl<K> Drop for RevealHandle<K> {
    fn drop(&mut self) {
        if let Some(inner) = self.inner.upgrade() {
            inner.borrow_mut().entries.retain(|e| e.id != self.id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_unseen() {
        let observer: RevealObserver<u8> = RevealObserver::new();
        let handle = observer.observe(0, 0.3);
        assert!(!handle.is_visible());
    }

    #[test]
    fn threshold_boundary_is_inclusive() {
        let observer: RevealObserver<u8> = RevealObserver::new();
        let handle = observer.observe(0, 0.3);
        assert!(!observer.deliver(0, 0.29));
        assert!(!handle.is_visible());
        assert!(observer.deliver(0, 0.3));
        assert!(handle.is_visible());
    }

    #[test]
    fn latch_is_monotonic() {
        let observer: RevealObserver<u8> = RevealObserver::new();
        let handle = observer.observe(0, 0.2);
        observer.deliver(0, 1.0);
        observer.deliver(0, 0.0);
        assert!(handle.is_visible());
        // A second delivery below threshold does not re-fire.
        assert!(!observer.deliver(0, 0.0));
    }

    #[test]
    fn firing_retires_the_subscription() {
        let observer: RevealObserver<u8> = RevealObserver::new();
        let _handle = observer.observe(0, 0.2);
        assert_eq!(observer.active_subscriptions(), 1);
        observer.deliver(0, 0.5);
        assert_eq!(observer.active_subscriptions(), 0);
    }

    #[test]
    fn drop_releases_subscription() {
        let observer: RevealObserver<u8> = RevealObserver::new();
        let handle = observer.observe(0, 0.2);
        assert_eq!(observer.active_subscriptions(), 1);
        drop(handle);
        assert_eq!(observer.active_subscriptions(), 0);
        // Late sample after the drop mutates nothing.
        assert!(!observer.deliver(0, 1.0));
    }

    #[test]
    fn regions_are_independent() {
        let observer: RevealObserver<u8> = RevealObserver::new();
        let a = observer.observe(0, 0.3);
        let b = observer.observe(1, 0.3);
        observer.deliver(0, 0.9);
        assert!(a.is_visible());
        assert!(!b.is_visible());
    }

    #[test]
    fn threshold_is_clamped() {
        let observer: RevealObserver<u8> = RevealObserver::new();
        let handle = observer.observe(0, 1.7);
        observer.deliver(0, 1.0);
        assert!(handle.is_visible());
    }

    #[test]
    fn detached_handle_never_fires() {
        let handle: RevealHandle<u8> = RevealHandle::detached();
        assert!(!handle.is_visible());
    }
}
