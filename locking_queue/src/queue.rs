//! The blocking queue and its error type.

use std::collections::VecDeque;
use std::sync::{Condvar, Mutex};
use std::time::Duration;

/// No element was available within the requested wait policy.
///
/// Returned by [`BlockingQueue::try_pop`] when the queue is empty and by
/// [`BlockingQueue::pop_timeout`] when the wait expires. The condition is
/// recoverable; retry and backoff policy is up to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("no element was available within the requested wait policy")]
pub struct QueueEmpty;

/// A thread-safe FIFO queue with blocking consumption.
///
/// All operations take an internal lock for their duration, so a consistent
/// snapshot is observed even under concurrent mutation. Elements are dequeued
/// in the order they were enqueued, globally across all producers. Each `push`
/// wakes at most one consumer blocked in [`pop`](Self::pop) or
/// [`pop_timeout`](Self::pop_timeout).
///
/// Any method panics if another thread panicked while holding the internal
/// lock.
pub struct BlockingQueue<T> {
    items: Mutex<VecDeque<T>>,
    not_empty: Condvar,
}

impl<T> BlockingQueue<T> {
    /// Creates a new, empty queue.
    pub fn new() -> Self {
        BlockingQueue {
            items: Mutex::new(VecDeque::new()),
            not_empty: Condvar::new(),
        }
    }

    /// Returns true if the queue holds no elements.
    pub fn is_empty(&self) -> bool {
        let items = self.items.lock().unwrap();
        items.is_empty()
    }

    /// Returns the number of elements in the queue.
    pub fn len(&self) -> usize {
        let items = self.items.lock().unwrap();
        items.len()
    }

    /// Appends `value` to the back of the queue and wakes one waiting
    /// consumer, if any.
    pub fn push(&self, value: T) {
        let mut items = self.items.lock().unwrap();
        items.push_back(value);
        drop(items);
        self.not_empty.notify_one();
    }

    /// Removes and returns the front element, waiting indefinitely for one to
    /// be pushed if the queue is empty.
    pub fn pop(&self) -> T {
        let mut items = self.items.lock().unwrap();
        while items.is_empty() {
            items = self.not_empty.wait(items).unwrap();
        }
        items.pop_front().unwrap()
    }

    /// Removes and returns the front element, or fails with [`QueueEmpty`]
    /// immediately if the queue is empty. Never waits.
    pub fn try_pop(&self) -> Result<T, QueueEmpty> {
        let mut items = self.items.lock().unwrap();
        items.pop_front().ok_or(QueueEmpty)
    }

    /// Removes and returns the front element, waiting at most `timeout` for
    /// one to be pushed if the queue is empty.
    ///
    /// Expiry is detected once, on wake: a timed-out wait fails with
    /// [`QueueEmpty`] without rechecking the queue. A wake that finds the
    /// queue still empty (another consumer won the race, or the wake was
    /// spurious) waits again with the full `timeout`.
    pub fn pop_timeout(&self, timeout: Duration) -> Result<T, QueueEmpty> {
        let mut items = self.items.lock().unwrap();
        while items.is_empty() {
            let (guard, result) = self.not_empty.wait_timeout(items, timeout).unwrap();
            if result.timed_out() {
                return Err(QueueEmpty);
            }
            items = guard;
        }
        Ok(items.pop_front().unwrap())
    }
}

impl<T: Clone> BlockingQueue<T> {
    /// Creates a new queue holding a copy of `initial`'s contents, in
    /// existing order. `initial` is left untouched.
    pub fn from_contents(initial: &VecDeque<T>) -> Self {
        BlockingQueue {
            items: Mutex::new(initial.clone()),
            not_empty: Condvar::new(),
        }
    }
}

impl<T> Default for BlockingQueue<T> {
    fn default() -> Self {
        BlockingQueue::new()
    }
}

impl<T> From<VecDeque<T>> for BlockingQueue<T> {
    /// Creates a new queue that takes ownership of `initial`'s contents, in
    /// existing order.
    fn from(initial: VecDeque<T>) -> Self {
        BlockingQueue {
            items: Mutex::new(initial),
            not_empty: Condvar::new(),
        }
    }
}

impl<T> FromIterator<T> for BlockingQueue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        BlockingQueue::from(iter.into_iter().collect::<VecDeque<T>>())
    }
}
