// src/pool.rs
//
// Bounded worker pool: N threads pull the next index from a shared counter,
// results come back over a channel to the calling thread.

use std::{
    sync::{
        atomic::{AtomicUsize, Ordering},
        mpsc,
    },
    thread,
};

/// Run `job` over every item on at most `workers` threads.
///
/// `on_done` runs on the calling thread, once per item, in completion order.
/// Returns only after every job has finished, so callers can treat the
/// return as a join point.
pub fn run_bounded<T, R, F, D>(items: &[T], workers: usize, job: F, mut on_done: D)
where
    T: Sync,
    R: Send,
    F: Fn(&T) -> R + Sync,
    D: FnMut(&T, R),
{
    if items.is_empty() {
        return;
    }
    let workers = workers.clamp(1, items.len());
    let next = AtomicUsize::new(0);
    let (tx, rx) = mpsc::channel::<(usize, R)>();

    thread::scope(|scope| {
        for _ in 0..workers {
            let tx = tx.clone();
            let next = &next;
            let job = &job;
            scope.spawn(move || {
                loop {
                    let i = next.fetch_add(1, Ordering::Relaxed);
                    if i >= items.len() {
                        break;
                    }
                    let result = job(&items[i]);
                    if tx.send((i, result)).is_err() {
                        break;
                    }
                }
            });
        }
        drop(tx); // workers hold the only senders now

        for (i, result) in rx {
            on_done(&items[i], result);
        }
    });
}
