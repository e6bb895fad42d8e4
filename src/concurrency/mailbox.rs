//! Mailbox: the FIFO queue behind each Active Object.
//!
//! Deliberately not `std::sync::mpsc` — an Active Object's suspension
//! point is a condition-variable wait on an empty mailbox, and `close()`
//! has to wake every waiter so the whole pipeline can drain and exit
//! together. A hand-rolled `Mutex<VecDeque<T>>` plus `Condvar` makes both
//! of those explicit instead of hiding them behind a channel abstraction.

use std::collections::VecDeque;
use std::sync::{Condvar, Mutex};

struct Inner<T> {
    queue: VecDeque<T>,
    closed: bool,
}

/// Multi-producer, single-consumer FIFO queue with blocking receive.
pub struct Mailbox<T> {
    inner: Mutex<Inner<T>>,
    not_empty: Condvar,
}

impl<T> Mailbox<T> {
    pub fn new() -> Self {
        Mailbox {
            inner: Mutex::new(Inner {
                queue: VecDeque::new(),
                closed: false,
            }),
            not_empty: Condvar::new(),
        }
    }

    /// Enqueue one item and wake a waiting consumer. Silently dropped if
    /// the mailbox has already been closed — happens only during shutdown,
    /// when no consumer will ever look at it again.
    pub fn send(&self, item: T) {
        let mut inner = self.inner.lock().unwrap();
        if inner.closed {
            return;
        }
        inner.queue.push_back(item);
        self.not_empty.notify_one();
    }

    /// Block until an item is available or the mailbox is closed and
    /// drained. Returns `None` only in the latter case — the signal an
    /// Active Object's worker loop uses to exit.
    pub fn recv(&self) -> Option<T> {
        let mut inner = self.inner.lock().unwrap();
        loop {
            if let Some(item) = inner.queue.pop_front() {
                return Some(item);
            }
            if inner.closed {
                return None;
            }
            inner = self.not_empty.wait(inner).unwrap();
        }
    }

    /// Mark the mailbox closed and wake every waiter. Items already queued
    /// are still delivered by `recv` before it starts returning `None`.
    pub fn close(&self) {
        let mut inner = self.inner.lock().unwrap();
        inner.closed = true;
        self.not_empty.notify_all();
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.inner.lock().unwrap().queue.len()
    }
}

impl<T> Default for Mailbox<T> {
    fn default() -> Self {
        Self::new()
    }
}
