//! Fixed-capacity LIFO stack backed by an inline `ArrayVec`.

use arrayvec::ArrayVec;

use crate::error::StackFull;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoundedStack<T, const N: usize> {
    /// Occupied prefix, base at index 0, top at the end.
    items: ArrayVec<T, N>,
}

impl<T, const N: usize> BoundedStack<T, N> {
    pub fn new() -> Self {
        Self {
            items: ArrayVec::new(),
        }
    }

    pub const fn capacity(&self) -> usize {
        N
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.items.is_full()
    }

    /// Index of the top element, `None` when empty.
    pub fn top_index(&self) -> Option<usize> {
        self.items.len().checked_sub(1)
    }

    pub fn push(&mut self, item: T) -> Result<(), StackFull> {
        self.items
            .try_push(item)
            .map_err(|_| StackFull { capacity: N })
    }

    pub fn pop(&mut self) -> Option<T> {
        self.items.pop()
    }

    pub fn top(&self) -> Option<&T> {
        self.items.last()
    }

    pub fn top_mut(&mut self) -> Option<&mut T> {
        self.items.last_mut()
    }

    /// Top-to-base view.
    pub fn iter(&self) -> std::iter::Rev<std::slice::Iter<'_, T>> {
        self.items.iter().rev()
    }

    /// Reverse the occupied prefix; the length is unchanged.
    pub fn reverse_in_place(&mut self) {
        self.items.reverse();
    }
}

impl<T, const N: usize> Default for BoundedStack<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a BoundedStack<T, N> {
    type Item = &'a T;
    type IntoIter = std::iter::Rev<std::slice::Iter<'a, T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
