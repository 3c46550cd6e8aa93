//! locking_queue is a thread-safe FIFO queue for producer/consumer pipelines.
//!
//! A [`BlockingQueue`] can be pushed to and popped from by any number of
//! threads without external synchronization. Consumers choose between a
//! non-blocking attempt ([`BlockingQueue::try_pop`]), an unconditional wait
//! ([`BlockingQueue::pop`]), and a bounded wait
//! ([`BlockingQueue::pop_timeout`]). The queue itself carries no shared
//! ownership; wrap it in an [`std::sync::Arc`] to share it across threads.

#![deny(missing_docs)]

pub mod queue;

pub use queue::{BlockingQueue, QueueEmpty};
