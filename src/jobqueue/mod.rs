//! Provides a queue of job indices that worker threads pull from. The
//! queue itself is not changed after creation, we simply work through
//! it with an atomic counter to track the index of the next job.

use std::sync::atomic::{AtomicUsize, Ordering};

/// The queue of jobs to be worked on, shared immutably between worker threads.
pub struct JobQueue {
    /// Number of jobs in the queue
    len: usize,
    /// Index of the next job to be worked on
    next: AtomicUsize,
}

impl JobQueue {
    /// Create a queue handing out the indices `0..len`.
    pub fn new(len: usize) -> JobQueue {
        if len == 0 {
            tracing::warn!("this job queue is empty");
        }
        JobQueue {
            len,
            next: AtomicUsize::new(0),
        }
    }
    /// Get the next job in the queue or None if the queue is finished
    pub fn next(&self) -> Option<usize> {
        let i = self.next.fetch_add(1, Ordering::AcqRel);
        if i >= self.len {
            None
        } else {
            Some(i)
        }
    }
    /// Get the length of the queue
    pub fn len(&self) -> usize {
        self.len
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::sync::Mutex;

    #[test]
    fn hands_out_every_job_once() {
        let queue: JobQueue = JobQueue::new(100);
        let seen: Mutex<Vec<usize>> = Mutex::new(Vec::new());
        crossbeam::scope(|scope| {
            for _ in 0..4 {
                let queue = &queue;
                let seen = &seen;
                scope.spawn(move |_| {
                    while let Some(job) = queue.next() {
                        seen.lock().unwrap().push(job);
                    }
                });
            }
        })
        .unwrap();
        let mut seen: Vec<usize> = seen.into_inner().unwrap();
        seen.sort_unstable();
        assert_eq!(seen, (0..100).collect::<Vec<usize>>());
        assert_eq!(queue.next(), None);
        assert_eq!(queue.len(), 100);
    }
}
