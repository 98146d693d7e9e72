#![forbid(unsafe_code)]

//! The serial main queue.
//!
//! A single-threaded FIFO of deferred tasks, standing in for the UI
//! scheduler's main queue. Posting is cheap; nothing runs until the owner
//! drives [`MainQueue::tick`] — typically once per frame, after the
//! declarative layer has finished its render pass.
//!
//! # Invariants
//!
//! 1. Tasks run in posting order.
//! 2. `tick()` runs exactly the tasks that were queued when it started;
//!    tasks posted while a tick is draining run on the next tick. This is
//!    what makes "defer by one tick" mean something under re-entrancy.
//! 3. Dropping one handle never discards queued tasks while another handle
//!    is alive (handles share the queue).
//!
//! # Failure Modes
//!
//! - A task that panics poisons nothing but abandons the rest of its batch.
//! - `run_until_idle` does not terminate if every tick posts new work; the
//!   bridge never does that, but arbitrary tasks can.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::mem;
use std::rc::Rc;

use tracing::trace;

type Task = Box<dyn FnOnce()>;

/// Cloneable handle to a serial task queue. Single-threaded.
#[derive(Clone)]
pub struct MainQueue {
    tasks: Rc<RefCell<VecDeque<Task>>>,
}

impl MainQueue {
    /// Create an empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self {
            tasks: Rc::new(RefCell::new(VecDeque::new())),
        }
    }

    /// Enqueue `task` to run on the next tick.
    pub fn post(&self, task: impl FnOnce() + 'static) {
        self.tasks.borrow_mut().push_back(Box::new(task));
    }

    /// Run every task queued before this call. Returns how many ran.
    pub fn tick(&self) -> usize {
        let batch = mem::take(&mut *self.tasks.borrow_mut());
        let count = batch.len();
        if count > 0 {
            trace!(tasks = count, "main queue tick");
        }
        for task in batch {
            task();
        }
        count
    }

    /// Tick until no work remains. Returns the total number of tasks run.
    pub fn run_until_idle(&self) -> usize {
        let mut total = 0;
        loop {
            let ran = self.tick();
            if ran == 0 {
                return total;
            }
            total += ran;
        }
    }

    /// Number of tasks waiting for the next tick.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.borrow().len()
    }

    /// Whether no tasks are waiting.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.borrow().is_empty()
    }
}

impl Default for MainQueue {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for MainQueue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MainQueue")
            .field("pending", &self.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn tasks_run_in_posting_order() {
        let queue = MainQueue::new();
        let order = Rc::new(RefCell::new(Vec::new()));

        for i in 0..3 {
            let log = Rc::clone(&order);
            queue.post(move || log.borrow_mut().push(i));
        }

        assert_eq!(queue.tick(), 3);
        assert_eq!(*order.borrow(), vec![0, 1, 2]);
    }

    #[test]
    fn tick_on_empty_queue_is_noop() {
        let queue = MainQueue::new();
        assert_eq!(queue.tick(), 0);
        assert!(queue.is_empty());
    }

    #[test]
    fn posting_during_tick_defers_to_next_tick() {
        let queue = MainQueue::new();
        let ran = Rc::new(RefCell::new(Vec::new()));

        let log = Rc::clone(&ran);
        let requeue = queue.clone();
        queue.post(move || {
            log.borrow_mut().push("first");
            let inner_log = Rc::clone(&log);
            requeue.post(move || inner_log.borrow_mut().push("second"));
        });

        assert_eq!(queue.tick(), 1);
        assert_eq!(*ran.borrow(), vec!["first"]);
        assert_eq!(queue.len(), 1, "nested post must wait for the next tick");

        assert_eq!(queue.tick(), 1);
        assert_eq!(*ran.borrow(), vec!["first", "second"]);
    }

    #[test]
    fn run_until_idle_drains_chained_work() {
        let queue = MainQueue::new();
        let hits = Rc::new(RefCell::new(0));

        let count = Rc::clone(&hits);
        let chain = queue.clone();
        queue.post(move || {
            *count.borrow_mut() += 1;
            let inner_count = Rc::clone(&count);
            chain.post(move || *inner_count.borrow_mut() += 1);
        });

        assert_eq!(queue.run_until_idle(), 2);
        assert_eq!(*hits.borrow(), 2);
        assert!(queue.is_empty());
    }

    #[test]
    fn clones_share_the_queue() {
        let queue = MainQueue::new();
        let clone = queue.clone();
        let fired = Rc::new(RefCell::new(false));

        let flag = Rc::clone(&fired);
        clone.post(move || *flag.borrow_mut() = true);

        assert_eq!(queue.len(), 1);
        queue.tick();
        assert!(*fired.borrow());
    }
}
