use std::fmt;

use tracing::{debug, trace};

use crate::error::HeapError;
use crate::priority::Prioritized;

/// Binary max-heap keyed on [`Prioritized::priority`].
///
/// Ties are broken by position only: an equal parent is never displaced by a
/// new item, and an equal child is never promoted over its parent or over an
/// equal left sibling. Nothing stronger about the order of equal items holds.
#[derive(Clone)]
pub struct MaxHeap<T: Prioritized> {
    data: Vec<T>,
}

impl<T: Prioritized> Default for MaxHeap<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Prioritized> MaxHeap<T> {
    /// O(1)
    #[inline]
    pub fn new() -> Self {
        Self { data: Vec::new() }
    }

    /// O(1)
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
        }
    }

    /// O(1)
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// O(1)
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// O(1)
    #[inline]
    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    /// O(1)
    #[inline]
    pub fn peek(&self) -> Option<&T> {
        self.data.first()
    }

    pub fn reserve(&mut self, additional: usize) {
        self.data.reserve(additional);
    }

    /// Like [`reserve`](Self::reserve), but reports allocation failure
    /// instead of aborting. The heap is untouched on error.
    pub fn try_reserve(&mut self, additional: usize) -> Result<(), HeapError> {
        self.data.try_reserve(additional).map_err(|source| {
            debug!(len = self.data.len(), additional, "heap reservation failed");
            HeapError::CapacityOverflow {
                len: self.data.len(),
                additional,
                source,
            }
        })
    }

    /// O(log n)
    pub fn insert(&mut self, item: T) {
        self.data.push(item);
        let node = self.sift_up(self.len() - 1);
        trace!(node, len = self.len(), "inserted");
    }

    /// O(log n)
    pub fn extract_max(&mut self) -> Option<T> {
        use std::mem;

        let mut max = self.data.pop()?;
        if let Some(root) = self.data.first_mut() {
            max = mem::replace(root, max);
            self.sift_down(0);
        }
        trace!(len = self.len(), "extracted");

        Some(max)
    }

    #[inline]
    fn priority(&self, node: usize) -> &T::Priority {
        self.data[node].priority()
    }

    /// Returns the index the item came to rest at. O(log n)
    fn sift_up(&mut self, mut node: usize) -> usize {
        while node != 0 {
            let parent = (node - 1) / 2;

            if self.priority(parent) >= self.priority(node) {
                break;
            }
            self.data.swap(parent, node);
            node = parent;
        }

        node
    }

    /// O(log n)
    fn sift_down(&mut self, mut node: usize) {
        let len = self.len();
        loop {
            let left = 2 * node + 1;
            let right = left + 1;

            let mut largest = node;
            if left < len && self.priority(left) > self.priority(largest) {
                largest = left;
            }
            if right < len && self.priority(right) > self.priority(largest) {
                largest = right;
            }

            if largest == node {
                break;
            }
            self.data.swap(node, largest);
            node = largest;
        }
    }
}

impl<T: Prioritized + fmt::Debug> fmt::Debug for MaxHeap<T> {
    // Only the root is observable from outside.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MaxHeap")
            .field("len", &self.len())
            .field("root", &self.peek())
            .finish()
    }
}

impl<T: Prioritized> Extend<T> for MaxHeap<T> {
    fn extend<Iter: IntoIterator<Item = T>>(&mut self, iter: Iter) {
        let iter = iter.into_iter();
        self.reserve(iter.size_hint().0);
        for item in iter {
            self.insert(item);
        }
    }
}

impl<T: Prioritized> std::iter::FromIterator<T> for MaxHeap<T> {
    fn from_iter<Iter: IntoIterator<Item = T>>(iter: Iter) -> Self {
        let mut heap = Self::new();
        heap.extend(iter);
        heap
    }
}

impl<T: Prioritized> From<Vec<T>> for MaxHeap<T> {
    fn from(items: Vec<T>) -> Self {
        items.into_iter().collect()
    }
}
