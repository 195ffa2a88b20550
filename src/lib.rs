//! Comparator-Driven Priority Heap for Rust
//!
//! This crate provides [`PriorityHeap`], an array-backed binary heap whose ordering
//! is a comparator value supplied at construction instead of an `Ord` bound on
//! the element type. The same heap type therefore backs min-heaps, max-heaps and
//! arbitrary custom priorities.
//!
//! # Features
//!
//! - **PriorityHeap**: O(log n) insert and extract; O(1) peek; snapshot of the heap array
//! - **Comparators**: natural, reversed, by-key and signed-integer comparator adapters
//! - **Queue trait**: `enqueue`/`dequeue` vocabulary shared with other queue containers
//!
//! # Example
//!
//! ```rust
//! use rust_priority_heap::PriorityHeap;
//! use rust_priority_heap::comparator::reverse_order;
//!
//! let mut min = PriorityHeap::min_heap();
//! min.insert_all([5, 10, 1, 23, -10]);
//! assert_eq!(min.extract_all(), vec![-10, 1, 5, 10, 23]);
//!
//! let mut max = PriorityHeap::new(reverse_order);
//! max.insert_all([5, 2, 10]);
//! assert_eq!(max.peek(), Ok(&10));
//! ```

pub mod comparator;
pub mod priority_heap;
pub mod traits;

// Re-export the main types for convenience
pub use priority_heap::PriorityHeap;
pub use traits::{HeapError, Queue};
