//! A mergeable max-priority queue backed by a leftist tree.
//!
//! [`LeftistHeap`] keeps the greatest element (under a pluggable ordering) on
//! top and, unlike a binary heap, can absorb another heap in `O(log n)`:
//! [`merge`](LeftistHeap::merge) re-roots the donor's nodes into the receiver
//! without copying or freeing a single element.
//!
//! Orderings are supplied through the [`TryCompare`] trait and are allowed to
//! *fail*. Every operation that consults the comparator upholds the strong
//! guarantee: on failure the error is handed back to the caller and all
//! involved heaps are left exactly as they were.
//!
//! # Examples
//!
//! ```
//! use meldheap::LeftistHeap;
//!
//! let mut heap = LeftistHeap::new();
//! heap.push(1).unwrap();
//! heap.push(5).unwrap();
//! heap.push(2).unwrap();
//!
//! // The greatest element is always on top.
//! assert_eq!(heap.peek(), Ok(&5));
//!
//! // Merging drains the donor into the receiver.
//! let mut donor = LeftistHeap::new();
//! donor.push(4).unwrap();
//! heap.merge(&mut donor).unwrap();
//! assert!(donor.is_empty());
//!
//! assert_eq!(heap.pop(), Ok(5));
//! assert_eq!(heap.pop(), Ok(4));
//! assert_eq!(heap.pop(), Ok(2));
//! assert_eq!(heap.pop(), Ok(1));
//! assert!(heap.is_empty());
//! ```
//!
//! # Optional features
//!
//! - `serde`: `Serialize` and `Deserialize` implementations for
//!   [`LeftistHeap`].

#![no_std]
#![deny(missing_docs)]

extern crate alloc;

#[cfg(test)]
#[macro_use]
mod test_helpers;

pub use crate::leftist_heap::{
    Error, LeftistHeap, NaturalOrder, PushError, ReverseOrder, TryCompare,
};

pub mod leftist_heap;

#[cfg(feature = "serde")]
mod de;
#[cfg(feature = "serde")]
mod ser;
