//! Blocking FIFO task queue
//!
//! Mutex-and-condvar queue used to hand work between the UI thread and
//! worker threads. `dequeue` blocks until an item arrives; `close`
//! wakes every waiter so consumers can terminate cleanly instead of
//! blocking forever on an empty queue.

use std::collections::VecDeque;
use std::sync::{Condvar, Mutex};

/// Thread-safe FIFO queue with blocking removal.
pub struct TaskQueue<T> {
    state: Mutex<State<T>>,
    available: Condvar,
}

struct State<T> {
    items: VecDeque<T>,
    closed: bool,
}

impl<T> TaskQueue<T> {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(State {
                items: VecDeque::new(),
                closed: false,
            }),
            available: Condvar::new(),
        }
    }

    /// Snapshot of emptiness; may be stale as soon as it returns under
    /// concurrent use.
    pub fn is_empty(&self) -> bool {
        self.state.lock().unwrap().items.is_empty()
    }

    /// Append `item` at the tail and wake one blocked consumer.
    ///
    /// Returns `false` (dropping the item) once the queue is closed.
    pub fn enqueue(&self, item: T) -> bool {
        let mut state = self.state.lock().unwrap();
        if state.closed {
            return false;
        }
        state.items.push_back(item);
        self.available.notify_one();
        true
    }

    /// Remove and return the head item, blocking while the queue is
    /// empty and open. Returns `None` once the queue is closed and
    /// drained.
    pub fn dequeue(&self) -> Option<T> {
        let mut state = self.state.lock().unwrap();
        loop {
            if let Some(item) = state.items.pop_front() {
                return Some(item);
            }
            if state.closed {
                return None;
            }
            state = self.available.wait(state).unwrap();
        }
    }

    /// Mark the queue closed and wake every blocked consumer. Items
    /// already queued can still be drained.
    pub fn close(&self) {
        let mut state = self.state.lock().unwrap();
        state.closed = true;
        self.available.notify_all();
    }
}

impl<T> Default for TaskQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;
    use std::time::Duration;

    #[test]
    fn test_empty_on_construction() {
        let queue: TaskQueue<i32> = TaskQueue::new();
        assert!(queue.is_empty());
    }

    #[test]
    fn test_not_empty_after_enqueue() {
        let queue = TaskQueue::new();
        assert!(queue.enqueue(1));
        assert!(!queue.is_empty());
    }

    #[test]
    fn test_fifo_order_single_consumer() {
        let queue = TaskQueue::new();
        for i in 0..10 {
            queue.enqueue(i);
        }
        for i in 0..10 {
            assert_eq!(queue.dequeue(), Some(i));
        }
        assert!(queue.is_empty());
    }

    #[test]
    fn test_dequeue_blocks_until_enqueue() {
        let queue = Arc::new(TaskQueue::new());
        let consumer = {
            let queue = Arc::clone(&queue);
            thread::spawn(move || queue.dequeue())
        };
        // Give the consumer time to block on the empty queue.
        thread::sleep(Duration::from_millis(50));
        queue.enqueue(42);
        assert_eq!(consumer.join().unwrap(), Some(42));
    }

    #[test]
    fn test_close_wakes_blocked_consumers() {
        let queue: Arc<TaskQueue<i32>> = Arc::new(TaskQueue::new());
        let consumers: Vec<_> = (0..3)
            .map(|_| {
                let queue = Arc::clone(&queue);
                thread::spawn(move || queue.dequeue())
            })
            .collect();
        thread::sleep(Duration::from_millis(50));
        queue.close();
        for consumer in consumers {
            assert_eq!(consumer.join().unwrap(), None);
        }
    }

    #[test]
    fn test_enqueue_after_close_is_rejected() {
        let queue = TaskQueue::new();
        queue.close();
        assert!(!queue.enqueue(1));
        assert_eq!(queue.dequeue(), None);
    }

    #[test]
    fn test_close_drains_remaining_items() {
        let queue = TaskQueue::new();
        queue.enqueue("a");
        queue.enqueue("b");
        queue.close();
        assert_eq!(queue.dequeue(), Some("a"));
        assert_eq!(queue.dequeue(), Some("b"));
        assert_eq!(queue.dequeue(), None);
    }
}
