//! First-in-first-out hand-off queue.
//!
//! [`Queue`] carries elements from the context that receives protocol lines
//! to the context that displays them. It does no locking of its own: callers
//! sharing it between threads wrap it in a mutex or confine it to one task.

use std::collections::VecDeque;

/// An unbounded, insertion-ordered queue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Queue<T> {
    items: VecDeque<T>,
}

impl<T> Queue<T> {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self {
            items: VecDeque::new(),
        }
    }

    /// Append `element` to the tail. Never fails.
    pub fn offer(&mut self, element: T) {
        self.items.push_back(element);
    }

    /// Remove and return the head, or `None` when the queue is empty.
    pub fn poll(&mut self) -> Option<T> {
        self.items.pop_front()
    }

    /// Borrow the head without removing it.
    pub fn peek(&self) -> Option<&T> {
        self.items.front()
    }

    /// Number of queued elements.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the queue holds no elements.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Poll at most `max` elements, head first.
    ///
    /// Elements not yielded because the iterator was dropped early stay queued.
    pub fn drain_up_to(&mut self, max: usize) -> impl Iterator<Item = T> + '_ {
        let mut remaining = max;
        std::iter::from_fn(move || {
            if remaining == 0 {
                return None;
            }
            remaining -= 1;
            self.poll()
        })
    }
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Extend<T> for Queue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for element in iter {
            self.offer(element);
        }
    }
}

impl<T> FromIterator<T> for Queue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut queue = Self::new();
        queue.extend(iter);
        queue
    }
}
