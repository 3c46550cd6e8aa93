/// Non-blocking consumption with retry and fixed-delay backoff.
///
/// `QueueEmpty` is a recoverable condition; a worker that cannot block may
/// poll with `try_pop` and retry on its own schedule, checking a cancellation
/// flag between attempts.
extern crate locking_queue;

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use locking_queue::BlockingQueue;
use retry::{delay::Fixed, retry};

fn main() {
    let queue = Arc::new(BlockingQueue::<u32>::new());
    let done = Arc::new(AtomicBool::new(false));

    let worker = {
        let queue = queue.clone();
        let done = done.clone();
        thread::spawn(move || {
            let mut received = Vec::new();
            loop {
                match retry(Fixed::from_millis(10).take(20), || queue.try_pop()) {
                    Ok(value) => received.push(value),
                    Err(_) if done.load(Ordering::SeqCst) => break,
                    Err(_) => continue,
                }
            }
            received
        })
    };

    for i in 0..10 {
        queue.push(i);
        thread::sleep(Duration::from_millis(25));
    }
    done.store(true, Ordering::SeqCst);

    let received = worker.join().unwrap();
    println!("worker received: {:?}", received);
    assert_eq!(received, (0..10).collect::<Vec<u32>>());
}
