//! FIFO queue built on singly-linked nodes.
//!
//! Nodes live in an arena owned by the queue and link to each other by slot
//! index. Dequeued slots are recycled, so a queue that is drained and refilled
//! does not keep growing.

/// A queued payload and the slot of the node behind it.
#[derive(Debug, Clone)]
struct QueueNode<T> {
    value: Option<T>,
    next: Option<usize>,
}

/// Unbounded single-threaded FIFO queue.
#[derive(Debug, Clone)]
pub struct Queue<T> {
    /// Node arena. Slots listed in `free` hold no value.
    nodes: Vec<QueueNode<T>>,
    /// Recycled slots.
    free: Vec<usize>,
    /// Oldest node.
    front: Option<usize>,
    /// Newest node.
    back: Option<usize>,
    len: usize,
}

impl<T> Queue<T> {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            free: Vec::new(),
            front: None,
            back: None,
            len: 0,
        }
    }

    /// Create an empty queue with room for `capacity` nodes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
            ..Self::new()
        }
    }

    /// True iff nothing is queued.
    pub fn is_empty(&self) -> bool {
        self.front.is_none()
    }

    /// Number of queued values.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Append `value` at the back in O(1).
    pub fn add(&mut self, value: T) {
        let node = QueueNode {
            value: Some(value),
            next: None,
        };
        let idx = match self.free.pop() {
            Some(idx) => {
                self.nodes[idx] = node;
                idx
            }
            None => {
                self.nodes.push(node);
                self.nodes.len() - 1
            }
        };

        match self.back {
            Some(back) => self.nodes[back].next = Some(idx),
            None => self.front = Some(idx),
        }
        self.back = Some(idx);
        self.len += 1;
    }

    /// Detach and return the front value, or `None` when empty.
    pub fn remove(&mut self) -> Option<T> {
        let idx = self.front?;
        let node = &mut self.nodes[idx];
        let value = node.value.take();
        self.front = node.next.take();
        if self.front.is_none() {
            // Last node left: `back` must not keep pointing at a freed slot.
            self.back = None;
        }
        self.free.push(idx);
        self.len -= 1;
        value
    }

    /// Borrow the front value without removing it.
    pub fn peek(&self) -> Option<&T> {
        self.front.and_then(|idx| self.nodes[idx].value.as_ref())
    }

    /// Drop every queued value and release the arena.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.free.clear();
        self.front = None;
        self.back = None;
        self.len = 0;
    }
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Extend<T> for Queue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.add(value);
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

/// Draining iterator returned by `Queue::into_iter`.
pub struct IntoIter<T> {
    queue: Queue<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.queue.remove()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.queue.len(), Some(self.queue.len()))
    }
}

impl<T> IntoIterator for Queue<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        IntoIter { queue: self }
    }
}
