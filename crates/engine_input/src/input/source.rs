// crates/engine_input/src/input/source.rs

use std::collections::VecDeque;

/// Pull-based supplier of already-queued platform events.
///
/// `poll_event` must never block: it hands out what is pending and returns
/// `None` once the queue is dry.
pub trait EventSource<E> {
    fn poll_event(&mut self) -> Option<E>;
}

/// FIFO reservoir the platform layer fills between frames.
#[derive(Debug, Clone, PartialEq)]
pub struct EventQueue<E> {
    pending: VecDeque<E>,
}

impl<E> EventQueue<E> {
    pub fn new() -> Self {
        Self {
            pending: VecDeque::new(),
        }
    }

    pub fn push(&mut self, event: E) {
        self.pending.push_back(event);
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn clear(&mut self) {
        self.pending.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = &E> {
        self.pending.iter()
    }
}

impl<E> Default for EventQueue<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> FromIterator<E> for EventQueue<E> {
    fn from_iter<I: IntoIterator<Item = E>>(iter: I) -> Self {
        Self {
            pending: iter.into_iter().collect(),
        }
    }
}

impl<E> Extend<E> for EventQueue<E> {
    fn extend<I: IntoIterator<Item = E>>(&mut self, iter: I) {
        self.pending.extend(iter);
    }
}

impl<E> EventSource<E> for EventQueue<E> {
    fn poll_event(&mut self) -> Option<E> {
        self.pending.pop_front()
    }
}

impl<E> EventSource<E> for VecDeque<E> {
    fn poll_event(&mut self) -> Option<E> {
        self.pop_front()
    }
}

/// Adapts any finite iterator into an event source.
#[derive(Debug, Clone)]
pub struct IterSource<I> {
    inner: I,
}

impl<I> IterSource<I> {
    pub fn new<T>(events: T) -> Self
    where
        T: IntoIterator<IntoIter = I>,
    {
        Self {
            inner: events.into_iter(),
        }
    }
}

impl<E, I: Iterator<Item = E>> EventSource<E> for IterSource<I> {
    fn poll_event(&mut self) -> Option<E> {
        self.inner.next()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn queue_drains_in_arrival_order() {
        let mut queue: EventQueue<u32> = [1, 2, 3].into_iter().collect();
        queue.push(4);

        assert_eq!(queue.len(), 4);
        assert_eq!(queue.poll_event(), Some(1));
        assert_eq!(queue.poll_event(), Some(2));
        assert_eq!(queue.poll_event(), Some(3));
        assert_eq!(queue.poll_event(), Some(4));
        assert_eq!(queue.poll_event(), None);
        assert!(queue.is_empty());
    }

    #[test]
    fn iter_source_is_exhausted_once() {
        let mut source = IterSource::new(vec!['a', 'b']);
        assert_eq!(source.poll_event(), Some('a'));
        assert_eq!(source.poll_event(), Some('b'));
        assert_eq!(source.poll_event(), None);
        assert_eq!(source.poll_event(), None);
    }

    #[test]
    fn vecdeque_is_a_source() {
        let mut deque: VecDeque<&str> = VecDeque::from(vec!["first", "second"]);
        assert_eq!(EventSource::poll_event(&mut deque), Some("first"));
        assert_eq!(deque.len(), 1);
    }
}
