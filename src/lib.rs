//! A binary max-heap priority queue over items that carry their own priority.
//!
//! ```
//! use prioheap::{Entry, MaxHeap};
//!
//! let mut heap = MaxHeap::new();
//! heap.insert(Entry::new(5, "write"));
//! heap.insert(Entry::new(9, "page"));
//! heap.insert(Entry::new(1, "lint"));
//!
//! assert_eq!(heap.peek().map(|e| e.value), Some("page"));
//! assert_eq!(heap.extract_max().map(|e| e.priority), Some(9));
//! assert_eq!(heap.len(), 2);
//! ```

mod error;
mod heap;
mod priority;

pub use error::HeapError;
pub use heap::MaxHeap;
pub use priority::{Entry, Prioritized};
