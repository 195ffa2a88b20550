//! Ready-made comparators
//!
//! A [`PriorityHeap`](crate::PriorityHeap) takes its ordering as a value rather
//! than from an `Ord` bound on the element type. A comparator is any
//! `Fn(&T, &T) -> Ordering` where `Less` means the first argument has the
//! higher priority and leaves the heap first.
//!
//! # Example
//!
//! ```rust
//! use rust_priority_heap::PriorityHeap;
//! use rust_priority_heap::comparator::{by_key, reverse_order};
//!
//! // Max-heap: invert the natural ordering
//! let mut heap = PriorityHeap::new(reverse_order);
//! heap.insert_all([5, 2, 10]);
//! assert_eq!(heap.peek(), Ok(&10));
//!
//! // Order tasks by deadline
//! let mut tasks = PriorityHeap::new(by_key(|task: &(&str, u32)| task.1));
//! tasks.insert(("write report", 5));
//! tasks.insert(("fix build", 1));
//! assert_eq!(tasks.extract(), Ok(("fix build", 1)));
//! ```

use std::cmp::Ordering;

/// Function-pointer comparator, the type used by the `Ord` convenience
/// constructors [`PriorityHeap::min_heap`](crate::PriorityHeap::min_heap) and
/// [`PriorityHeap::max_heap`](crate::PriorityHeap::max_heap)
pub type OrdComparator<T> = fn(&T, &T) -> Ordering;

/// Natural ordering: smaller values have higher priority (min-heap)
pub fn natural_order<T: Ord>(a: &T, b: &T) -> Ordering {
    a.cmp(b)
}

/// Inverted natural ordering: larger values have higher priority (max-heap)
pub fn reverse_order<T: Ord>(a: &T, b: &T) -> Ordering {
    b.cmp(a)
}

/// Orders elements by a key extracted from each one, smallest key first
pub fn by_key<T, K, F>(key: F) -> impl Fn(&T, &T) -> Ordering
where
    K: Ord,
    F: Fn(&T) -> K,
{
    move |a: &T, b: &T| key(a).cmp(&key(b))
}

/// Inverts an existing comparator, turning a min-heap into a max-heap and back
pub fn reversed<T, C>(comparator: C) -> impl Fn(&T, &T) -> Ordering
where
    C: Fn(&T, &T) -> Ordering,
{
    move |a: &T, b: &T| comparator(b, a)
}

/// Adapts a signed three-way comparator into an `Ordering` comparator
///
/// Works with any signed integer result: negative maps to `Less`, zero to
/// `Equal`, positive to `Greater`.
///
/// ```rust
/// use rust_priority_heap::PriorityHeap;
/// use rust_priority_heap::comparator::from_signed;
///
/// let mut heap = PriorityHeap::new(from_signed(|a: &i64, b: &i64| a - b));
/// heap.insert_all([3, -7, 4]);
/// assert_eq!(heap.extract_all(), vec![-7, 3, 4]);
/// ```
pub fn from_signed<T, S, F>(comparator: F) -> impl Fn(&T, &T) -> Ordering
where
    S: Ord + Default,
    F: Fn(&T, &T) -> S,
{
    move |a: &T, b: &T| comparator(a, b).cmp(&S::default())
}
