//! Comparator-driven binary heap
//!
//! A binary heap stored as an implicit tree in a `Vec`: the children of index
//! `i` live at `2i + 1` and `2i + 2`, its parent at `(i - 1) / 2`. The ordering
//! is a comparator value supplied at construction, so the same type serves as
//! a min-heap, a max-heap or any custom priority order.
//!
//! # Time Complexity
//!
//! | Operation     | Complexity         |
//! |---------------|--------------------|
//! | `insert`      | O(log n) amortized |
//! | `insert_all`  | O(k log n)         |
//! | `extract`     | O(log n)           |
//! | `extract_all` | O(n log n)         |
//! | `peek`        | O(1)               |
//! | `to_snapshot` | O(n)               |
//!
//! # Example
//!
//! ```rust
//! use rust_priority_heap::PriorityHeap;
//!
//! let mut heap = PriorityHeap::new(|a: &i32, b: &i32| a.cmp(b));
//! heap.insert(5);
//! heap.insert(10);
//! heap.insert(1);
//!
//! assert_eq!(heap.peek(), Ok(&1));
//! assert_eq!(heap.extract(), Ok(1));
//! assert_eq!(heap.len(), 2);
//! assert_eq!(heap.extract_all(), vec![5, 10]);
//! assert!(heap.extract().is_err());
//! ```

use std::cmp::Ordering;
use std::fmt;

use crate::comparator::{natural_order, reverse_order, OrdComparator};
use crate::traits::{HeapError, Queue};

/// A binary heap ordered by a caller-supplied comparator
///
/// `comparator(a, b)` returning `Less` means `a` has the higher priority and
/// leaves the heap before `b`. The root of the heap is always an element that
/// no other element outranks.
///
/// The heap is not stable: elements of equal priority come out in an
/// unspecified order.
#[derive(Clone)]
pub struct PriorityHeap<T, C> {
    comparator: C,
    /// Backing array in heap order
    contents: Vec<T>,
}

impl<T, C> PriorityHeap<T, C>
where
    C: Fn(&T, &T) -> Ordering,
{
    /// Creates an empty heap ordered by `comparator`
    pub fn new(comparator: C) -> Self {
        Self::with_capacity(0, comparator)
    }

    /// Creates an empty heap with room for `capacity` elements before reallocating
    pub fn with_capacity(capacity: usize, comparator: C) -> Self {
        Self {
            comparator,
            contents: Vec::with_capacity(capacity),
        }
    }

    /// Inserts an element, restoring the heap property by sifting it up
    pub fn insert(&mut self, item: T) {
        self.contents.push(item);
        self.sift_up(self.contents.len() - 1);
    }

    /// Inserts every element of `items` one at a time, in iteration order
    ///
    /// No bulk heapify is performed, so the resulting layout is exactly the
    /// one repeated calls to [`insert`](Self::insert) would produce.
    pub fn insert_all<I: IntoIterator<Item = T>>(&mut self, items: I) {
        let before = self.contents.len();
        let items = items.into_iter();
        self.contents.reserve(items.size_hint().0);
        for item in items {
            self.insert(item);
        }
        log::trace!(
            "inserted {} elements, heap size now {}",
            self.contents.len() - before,
            self.contents.len()
        );
    }

    /// Removes and returns the highest-priority element
    ///
    /// # Errors
    /// Returns [`HeapError::EmptyHeap`] if the heap is empty; the heap is left
    /// untouched.
    pub fn extract(&mut self) -> Result<T, HeapError> {
        self.pop_root().ok_or_else(|| {
            log::trace!("extract called on an empty heap");
            HeapError::EmptyHeap
        })
    }

    /// Removes every element, returning them in extraction order
    ///
    /// The result is sorted by the comparator: highest priority first.
    pub fn extract_all(&mut self) -> Vec<T> {
        let mut drained = Vec::with_capacity(self.contents.len());
        while let Some(item) = self.pop_root() {
            drained.push(item);
        }
        log::trace!("drained {} elements", drained.len());
        drained
    }

    /// Consumes the heap, returning its elements in extraction order
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        self.extract_all()
    }

    /// Returns the comparator this heap was built with
    pub fn comparator(&self) -> &C {
        &self.comparator
    }

    fn pop_root(&mut self) -> Option<T> {
        if self.contents.is_empty() {
            return None;
        }

        // The last element takes the root's slot
        let root = self.contents.swap_remove(0);
        if !self.contents.is_empty() {
            self.sift_down(0);
        }

        Some(root)
    }

    /// Move element at index up while it outranks its parent
    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if (self.comparator)(&self.contents[parent], &self.contents[index]).is_gt() {
                self.contents.swap(parent, index);
                index = parent;
            } else {
                break;
            }
        }
    }

    /// Move element at index down while a child outranks it
    ///
    /// The right child is only preferred when it strictly outranks the left one.
    fn sift_down(&mut self, mut index: usize) {
        let len = self.contents.len();
        loop {
            let left = 2 * index + 1;
            if left >= len {
                break;
            }

            let right = left + 1;
            let mut child = left;
            if right < len
                && (self.comparator)(&self.contents[left], &self.contents[right]).is_gt()
            {
                child = right;
            }

            if (self.comparator)(&self.contents[index], &self.contents[child]).is_gt() {
                self.contents.swap(index, child);
                index = child;
            } else {
                break;
            }
        }
    }
}

impl<T, C> PriorityHeap<T, C> {
    /// Returns the highest-priority element without removing it
    ///
    /// # Errors
    /// Returns [`HeapError::EmptyHeap`] if the heap is empty.
    pub fn peek(&self) -> Result<&T, HeapError> {
        self.contents.first().ok_or_else(|| {
            log::trace!("peek called on an empty heap");
            HeapError::EmptyHeap
        })
    }

    /// Returns true if the heap holds no elements
    pub fn is_empty(&self) -> bool {
        self.contents.is_empty()
    }

    /// Returns the number of elements in the heap
    pub fn len(&self) -> usize {
        self.contents.len()
    }

    /// Removes every element, keeping the allocated storage
    pub fn clear(&mut self) {
        log::debug!("clearing heap of {} elements", self.contents.len());
        self.contents.clear();
    }

    /// Returns a copy of the backing array in heap order (not sorted)
    ///
    /// The copy is independent of the heap: later mutations are not reflected.
    pub fn to_snapshot(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.contents.clone()
    }

    /// Iterates over the elements in heap order (not sorted)
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.contents.iter()
    }

    /// Consumes the heap, returning the backing array in heap order
    pub fn into_vec(self) -> Vec<T> {
        self.contents
    }

    /// Returns the number of elements the heap can hold without reallocating
    pub fn capacity(&self) -> usize {
        self.contents.capacity()
    }

    /// Reserves room for at least `additional` more elements
    pub fn reserve(&mut self, additional: usize) {
        self.contents.reserve(additional);
    }

    /// Releases unused backing storage
    pub fn shrink_to_fit(&mut self) {
        self.contents.shrink_to_fit();
    }
}

impl<T: Ord> PriorityHeap<T, OrdComparator<T>> {
    /// Creates an empty heap that yields the smallest element first
    pub fn min_heap() -> Self {
        Self::new(natural_order::<T>)
    }

    /// Creates an empty heap that yields the largest element first
    pub fn max_heap() -> Self {
        Self::new(reverse_order::<T>)
    }
}

impl<T: Ord> Default for PriorityHeap<T, OrdComparator<T>> {
    fn default() -> Self {
        Self::min_heap()
    }
}

impl<T: fmt::Debug, C> fmt::Debug for PriorityHeap<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PriorityHeap")
            .field("contents", &self.contents)
            .finish_non_exhaustive()
    }
}

impl<T, C> Extend<T> for PriorityHeap<T, C>
where
    C: Fn(&T, &T) -> Ordering,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.insert_all(iter);
    }
}

impl<'a, T, C> IntoIterator for &'a PriorityHeap<T, C> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T, C> Queue<T> for PriorityHeap<T, C>
where
    C: Fn(&T, &T) -> Ordering,
{
    fn enqueue(&mut self, item: T) {
        self.insert(item);
    }

    fn enqueue_all<I: IntoIterator<Item = T>>(&mut self, items: I) {
        self.insert_all(items);
    }

    fn dequeue(&mut self) -> Result<T, HeapError> {
        self.extract()
    }

    fn dequeue_all(&mut self) -> Vec<T> {
        self.extract_all()
    }

    fn peek(&self) -> Result<&T, HeapError> {
        PriorityHeap::peek(self)
    }

    fn is_empty(&self) -> bool {
        PriorityHeap::is_empty(self)
    }

    fn len(&self) -> usize {
        PriorityHeap::len(self)
    }

    fn clear(&mut self) {
        PriorityHeap::clear(self);
    }

    fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.to_snapshot()
    }
}
