//! Common traits for queue-like containers
//!
//! This module provides the error type shared by every fallible queue operation
//! and the [`Queue`] trait, a FIFO-style vocabulary (`enqueue` / `dequeue`) that
//! the priority heap implements so it can be used wherever a queue is expected.
//!
//! For a `Queue` backed by a [`PriorityHeap`](crate::priority_heap::PriorityHeap),
//! "front of the queue" means "highest priority according to the comparator".

use std::fmt;

/// Error type for queue operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HeapError {
    /// The operation needs at least one element but the heap is empty
    EmptyHeap,
}

impl fmt::Display for HeapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeapError::EmptyHeap => write!(f, "cannot take an element from an empty heap"),
        }
    }
}

impl std::error::Error for HeapError {}

/// A queue of elements of type `T`
///
/// Mirrors the classic container interface: elements are enqueued at the back
/// and dequeued from the front. Implementations decide what "front" means; for
/// [`PriorityHeap`](crate::priority_heap::PriorityHeap) it is the element with
/// the highest priority.
///
/// # Example
///
/// ```rust
/// use rust_priority_heap::{PriorityHeap, Queue};
///
/// fn drain<Q: Queue<i32>>(queue: &mut Q) -> Vec<i32> {
///     queue.dequeue_all()
/// }
///
/// let mut heap = PriorityHeap::min_heap();
/// heap.enqueue_all(vec![3, 1, 2]);
/// assert_eq!(drain(&mut heap), vec![1, 2, 3]);
/// ```
pub trait Queue<T> {
    /// Adds an element to the queue
    fn enqueue(&mut self, item: T);

    /// Adds every element of `items`, in iteration order
    fn enqueue_all<I: IntoIterator<Item = T>>(&mut self, items: I);

    /// Removes and returns the element at the front
    ///
    /// # Errors
    /// Returns [`HeapError::EmptyHeap`] if the queue holds no elements.
    fn dequeue(&mut self) -> Result<T, HeapError>;

    /// Removes every element, returning them in dequeue order
    fn dequeue_all(&mut self) -> Vec<T>;

    /// Returns the element at the front without removing it
    ///
    /// # Errors
    /// Returns [`HeapError::EmptyHeap`] if the queue holds no elements.
    fn peek(&self) -> Result<&T, HeapError>;

    /// Returns true if the queue holds no elements
    fn is_empty(&self) -> bool;

    /// Returns the number of elements in the queue
    fn len(&self) -> usize;

    /// Removes every element
    fn clear(&mut self);

    /// Copies the queue's elements into a `Vec` in storage order
    fn to_vec(&self) -> Vec<T>
    where
        T: Clone;
}
