//! Fixed-capacity FIFO ring buffer.
//!
//! Storage is an inline array plus explicit front/back cursors and a length,
//! so the whole queue is `Copy` and a snapshot is a plain memberwise copy
//! (cursor positions included).

use crate::error::QueueFull;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RingQueue<T: Copy, const N: usize> {
    slots: [Option<T>; N],
    /// Index of the logically oldest element (valid when `len > 0`).
    front: usize,
    /// Index the next enqueue writes to.
    back: usize,
    len: usize,
}

impl<T: Copy, const N: usize> RingQueue<T, N> {
    const NONZERO_CAPACITY: () = assert!(N > 0, "RingQueue capacity must be non-zero");

    pub fn new() -> Self {
        #[allow(clippy::let_unit_value)]
        let () = Self::NONZERO_CAPACITY;
        Self {
            slots: [None; N],
            front: 0,
            back: 0,
            len: 0,
        }
    }

    pub const fn capacity(&self) -> usize {
        N
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_full(&self) -> bool {
        self.len == N
    }

    /// Slot index of the front element.
    pub fn front_index(&self) -> usize {
        self.front
    }

    /// Slot index the next enqueue writes to.
    pub fn back_index(&self) -> usize {
        self.back
    }

    /// Append at the back. Rejected without mutation when full.
    pub fn enqueue(&mut self, item: T) -> Result<(), QueueFull> {
        if self.is_full() {
            return Err(QueueFull { capacity: N });
        }
        self.slots[self.back] = Some(item);
        self.back = (self.back + 1) % N;
        self.len += 1;
        Ok(())
    }

    /// Remove and return the front element.
    pub fn dequeue(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        let item = self.slots[self.front].take();
        debug_assert!(item.is_some(), "occupied slot {} was empty", self.front);
        self.front = (self.front + 1) % N;
        self.len -= 1;
        item
    }

    pub fn front(&self) -> Option<&T> {
        if self.is_empty() {
            return None;
        }
        self.slots[self.front].as_ref()
    }

    pub fn front_mut(&mut self) -> Option<&mut T> {
        if self.is_empty() {
            return None;
        }
        self.slots[self.front].as_mut()
    }

    /// Front-to-back view. The iterator is `Clone`, so a view can be walked
    /// more than once.
    pub fn iter(&self) -> Iter<'_, T, N> {
        Iter {
            queue: self,
            offset: 0,
        }
    }

    /// Reverse the logical order of the occupied elements.
    ///
    /// The ring is rebuilt from slot 0: afterwards `front == 0` and
    /// `back == len % N`.
    pub fn reverse_in_place(&mut self) {
        if self.len <= 1 {
            return;
        }
        let mut reversed = [None; N];
        for (i, item) in self.iter().enumerate() {
            reversed[self.len - 1 - i] = Some(*item);
        }
        self.slots = reversed;
        self.front = 0;
        self.back = self.len % N;
    }
}

impl<T: Copy, const N: usize> Default for RingQueue<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, T: Copy, const N: usize> IntoIterator for &'a RingQueue<T, N> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T, N>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Front-to-back iterator over a [`RingQueue`].
#[derive(Debug, Clone)]
pub struct Iter<'a, T: Copy, const N: usize> {
    queue: &'a RingQueue<T, N>,
    offset: usize,
}

impl<'a, T: Copy, const N: usize> Iterator for Iter<'a, T, N> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.offset >= self.queue.len {
            return None;
        }
        let idx = (self.queue.front + self.offset) % N;
        self.offset += 1;
        self.queue.slots[idx].as_ref()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.queue.len.saturating_sub(self.offset);
        (remaining, Some(remaining))
    }
}

impl<T: Copy, const N: usize> ExactSizeIterator for Iter<'_, T, N> {}
