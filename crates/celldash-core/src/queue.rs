//! Unbounded FIFO event queue with a blocking, cancellable pull.
//!
//! The queue decouples event producers (the terminal's input pump, user
//! code) from the engine's single consumer. A linked list under a mutex plus
//! a condition variable; pullers wake at least every 250 ms so cancellation
//! is observed without entangling the condition variable with the
//! cancellation primitive.

use crate::cancel::CancelToken;
use crate::error::{Error, Result};
use crate::event::Event;
use std::collections::VecDeque;
use std::sync::{Arc, Condvar, Mutex};
use std::time::{Duration, Instant};

/// How often a blocked puller re-checks its cancellation token.
const PULL_WAKE_INTERVAL: Duration = Duration::from_millis(250);

#[derive(Debug, Default)]
struct QueueState {
    events: VecDeque<Event>,
    closed: bool,
}

#[derive(Debug, Default)]
struct QueueInner {
    state: Mutex<QueueState>,
    available: Condvar,
}

/// Thread-safe unbounded FIFO of [`Event`]s.
///
/// Clones share the same queue. FIFO order is preserved across concurrent
/// pushers and a single consumer.
#[derive(Debug, Clone, Default)]
pub struct EventQueue {
    inner: Arc<QueueInner>,
}

impl EventQueue {
    /// Create a new, empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an event. Non-blocking; never drops.
    ///
    /// Pushes after [`close`](Self::close) are discarded.
    pub fn push(&self, event: Event) {
        let mut state = self.inner.state.lock().unwrap_or_else(|e| e.into_inner());
        if state.closed {
            return;
        }
        state.events.push_back(event);
        self.inner.available.notify_one();
    }

    /// Remove and return the oldest event. Non-blocking.
    #[must_use]
    pub fn pop(&self) -> Option<Event> {
        let mut state = self.inner.state.lock().unwrap_or_else(|e| e.into_inner());
        state.events.pop_front()
    }

    /// Block until an event is available, the queue is closed, or the token
    /// fires.
    ///
    /// Returns [`Error::Cancelled`] for the latter two; cancellation is
    /// observed within 500 ms.
    pub fn pull(&self, cancel: &CancelToken) -> Result<Event> {
        let mut state = self.inner.state.lock().unwrap_or_else(|e| e.into_inner());
        loop {
            if let Some(event) = state.events.pop_front() {
                return Ok(event);
            }
            if state.closed || cancel.is_cancelled() {
                return Err(Error::Cancelled);
            }
            let (next, _timeout) = self
                .inner
                .available
                .wait_timeout(state, PULL_WAKE_INTERVAL)
                .unwrap_or_else(|e| e.into_inner());
            state = next;
        }
    }

    /// Like [`pull`](Self::pull), but also gives up at `deadline`.
    ///
    /// Returns `Ok(None)` when the deadline passes with no event available.
    pub fn pull_deadline(
        &self,
        cancel: &CancelToken,
        deadline: Instant,
    ) -> Result<Option<Event>> {
        let mut state = self.inner.state.lock().unwrap_or_else(|e| e.into_inner());
        loop {
            if let Some(event) = state.events.pop_front() {
                return Ok(Some(event));
            }
            if state.closed || cancel.is_cancelled() {
                return Err(Error::Cancelled);
            }
            let now = Instant::now();
            if now >= deadline {
                return Ok(None);
            }
            let wait = (deadline - now).min(PULL_WAKE_INTERVAL);
            let (next, _timeout) = self
                .inner
                .available
                .wait_timeout(state, wait)
                .unwrap_or_else(|e| e.into_inner());
            state = next;
        }
    }

    /// Close the queue, waking all pending pullers with
    /// [`Error::Cancelled`]. Idempotent.
    pub fn close(&self) {
        let mut state = self.inner.state.lock().unwrap_or_else(|e| e.into_inner());
        state.closed = true;
        self.inner.available.notify_all();
    }

    /// Number of queued events.
    #[must_use]
    pub fn len(&self) -> usize {
        let state = self.inner.state.lock().unwrap_or_else(|e| e.into_inner());
        state.events.len()
    }

    /// Check if no events are queued.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::{Key, KeyboardEvent};
    use std::thread;

    fn key_event(c: char) -> Event {
        Event::Keyboard(KeyboardEvent::new(Key::Char(c)))
    }

    #[test]
    fn test_push_pop_fifo() {
        let queue = EventQueue::new();
        queue.push(key_event('a'));
        queue.push(key_event('b'));
        queue.push(key_event('c'));

        assert_eq!(queue.pop(), Some(key_event('a')));
        assert_eq!(queue.pop(), Some(key_event('b')));
        assert_eq!(queue.pop(), Some(key_event('c')));
        assert_eq!(queue.pop(), None);
    }

    #[test]
    fn test_pop_empty_returns_none() {
        let queue = EventQueue::new();
        assert_eq!(queue.pop(), None);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_pull_returns_queued_event() {
        let queue = EventQueue::new();
        queue.push(key_event('x'));
        let event = queue.pull(&CancelToken::new()).unwrap();
        assert_eq!(event, key_event('x'));
    }

    #[test]
    fn test_pull_blocks_until_push() {
        let queue = EventQueue::new();
        let consumer = {
            let queue = queue.clone();
            thread::spawn(move || queue.pull(&CancelToken::new()))
        };
        thread::sleep(Duration::from_millis(20));
        queue.push(key_event('z'));
        assert_eq!(consumer.join().unwrap().unwrap(), key_event('z'));
    }

    #[test]
    fn test_pull_observes_cancellation() {
        let queue = EventQueue::new();
        let cancel = CancelToken::new();
        cancel.cancel();

        let start = Instant::now();
        let result = queue.pull(&cancel);
        assert!(matches!(result, Err(Error::Cancelled)));
        // Cancellation before the call is observed without waiting a full
        // wake interval.
        assert!(start.elapsed() < Duration::from_millis(500));
    }

    #[test]
    fn test_pull_cancellation_bound() {
        let queue = EventQueue::new();
        let cancel = CancelToken::new();
        let puller = {
            let queue = queue.clone();
            let cancel = cancel.clone();
            thread::spawn(move || {
                let start = Instant::now();
                let result = queue.pull(&cancel);
                (result, start.elapsed())
            })
        };
        thread::sleep(Duration::from_millis(10));
        cancel.cancel();
        let (result, elapsed) = puller.join().unwrap();
        assert!(matches!(result, Err(Error::Cancelled)));
        assert!(elapsed < Duration::from_millis(500));
    }

    #[test]
    fn test_close_wakes_pullers() {
        let queue = EventQueue::new();
        let pullers: Vec<_> = (0..3)
            .map(|_| {
                let queue = queue.clone();
                thread::spawn(move || queue.pull(&CancelToken::new()))
            })
            .collect();
        thread::sleep(Duration::from_millis(20));
        queue.close();
        for puller in pullers {
            assert!(matches!(puller.join().unwrap(), Err(Error::Cancelled)));
        }
    }

    #[test]
    fn test_close_is_idempotent_and_drops_pushes() {
        let queue = EventQueue::new();
        queue.close();
        queue.close();
        queue.push(key_event('a'));
        assert!(queue.is_empty());
    }

    #[test]
    fn test_pull_deadline_times_out() {
        let queue = EventQueue::new();
        let deadline = Instant::now() + Duration::from_millis(20);
        let result = queue.pull_deadline(&CancelToken::new(), deadline).unwrap();
        assert_eq!(result, None);
    }

    #[test]
    fn test_pull_deadline_returns_event_first() {
        let queue = EventQueue::new();
        queue.push(key_event('e'));
        let deadline = Instant::now() + Duration::from_millis(20);
        let result = queue.pull_deadline(&CancelToken::new(), deadline).unwrap();
        assert_eq!(result, Some(key_event('e')));
    }

    #[test]
    fn test_single_pusher_order_preserved_across_threads() {
        let queue = EventQueue::new();
        let producer = {
            let queue = queue.clone();
            thread::spawn(move || {
                for i in 0..100u32 {
                    queue.push(Event::Error(i.to_string()));
                }
            })
        };
        producer.join().unwrap();

        let mut seen = Vec::new();
        while let Some(Event::Error(n)) = queue.pop() {
            seen.push(n.parse::<u32>().unwrap());
        }
        assert_eq!(seen, (0..100).collect::<Vec<_>>());
    }

    #[test]
    fn test_concurrent_pushers_preserve_per_producer_fifo() {
        let queue = EventQueue::new();
        let producers: Vec<_> = (0..4u32)
            .map(|id| {
                let queue = queue.clone();
                thread::spawn(move || {
                    for i in 0..50u32 {
                        queue.push(Event::Error(format!("{id}:{i}")));
                    }
                })
            })
            .collect();
        for producer in producers {
            producer.join().unwrap();
        }

        let mut last_per_producer = [None::<u32>; 4];
        while let Some(Event::Error(tag)) = queue.pop() {
            let (id, i) = tag.split_once(':').unwrap();
            let id: usize = id.parse().unwrap();
            let i: u32 = i.parse().unwrap();
            if let Some(last) = last_per_producer[id] {
                assert!(i > last, "producer {id} out of order: {i} after {last}");
            }
            last_per_producer[id] = Some(i);
        }
        for last in last_per_producer {
            assert_eq!(last, Some(49));
        }
    }
}
