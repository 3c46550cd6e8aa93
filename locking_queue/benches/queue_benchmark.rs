use std::sync::mpsc;
use std::sync::Arc;
use std::thread;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use locking_queue::BlockingQueue;

fn transfer_n_blocking_queue(n: usize) {
    let queue = Arc::new(BlockingQueue::<usize>::new());
    let producer = {
        let queue = queue.clone();
        thread::spawn(move || {
            for i in 0..n {
                queue.push(i);
            }
        })
    };
    let mut total = 0;
    for _ in 0..n {
        total += queue.pop();
    }
    producer.join().unwrap();
    assert_eq!(total, n * (n - 1) / 2);
}

fn transfer_n_mpsc(n: usize) {
    let (tx, rx) = mpsc::channel::<usize>();
    let producer = thread::spawn(move || {
        for i in 0..n {
            tx.send(i).unwrap();
        }
    });
    let mut total = 0;
    for _ in 0..n {
        total += rx.recv().unwrap();
    }
    producer.join().unwrap();
    assert_eq!(total, n * (n - 1) / 2);
}

fn bench_cross_thread_transfer(c: &mut Criterion) {
    let mut group = c.benchmark_group("Transfer");
    let range = [1000, 2000, 4000, 8000];
    for i in range.iter() {
        group.bench_with_input(BenchmarkId::new("BlockingQueue", i), i, |b, i| {
            b.iter(|| transfer_n_blocking_queue(black_box(*i)))
        });
    }
    for i in range.iter() {
        group.bench_with_input(BenchmarkId::new("StdMpsc", i), i, |b, i| {
            b.iter(|| transfer_n_mpsc(black_box(*i)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_cross_thread_transfer);
criterion_main!(benches);
