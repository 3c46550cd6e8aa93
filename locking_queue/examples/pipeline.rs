/// Producer/consumer pipeline over one shared queue.
extern crate locking_queue;

use std::sync::Arc;
use std::thread;
use std::time::Duration;

use clap::Parser;
use locking_queue::BlockingQueue;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Number of producer threads
    #[arg(long, default_value_t = 4)]
    producers: usize,
    /// Number of consumer threads
    #[arg(long, default_value_t = 2)]
    consumers: usize,
    /// Items pushed by each producer
    #[arg(long, default_value_t = 1000)]
    items: usize,
}

fn main() {
    let args = Args::parse();
    let queue = Arc::new(BlockingQueue::<String>::new());

    let mut producers = Vec::new();
    for p in 0..args.producers {
        let queue = queue.clone();
        let items = args.items;
        producers.push(thread::spawn(move || {
            for i in 0..items {
                queue.push(format!("producer-{} item-{}", p, i));
            }
        }));
    }

    let mut consumers = Vec::new();
    for _ in 0..args.consumers {
        let queue = queue.clone();
        consumers.push(thread::spawn(move || {
            let mut handled = 0;
            while queue.pop_timeout(Duration::from_millis(500)).is_ok() {
                handled += 1;
            }
            handled
        }));
    }

    for producer in producers {
        producer.join().unwrap();
    }
    let handled: usize = consumers.into_iter().map(|h| h.join().unwrap()).sum();

    let pushed = args.producers * args.items;
    println!("pushed {} items, consumed {} items", pushed, handled);
    assert_eq!(pushed, handled);
}
