//! sparseset - Fast sparse sets of signed integers
//!
//! sparseset is a specialised library for compact storage and fast logical
//! set operations (union, intersection, difference) on `isize` values drawn
//! from the full signed range, negatives included. Members are grouped into
//! 256-bit blocks kept in ascending order, so membership, insertion and the
//! set-algebraic operations touch a whole word of 32 or 64 members at a
//! time. For workloads with spatial locality this is both faster and much
//! smaller than a generic hash-based set, and it degrades gracefully when
//! the members are truly scattered.
//!
//! The in-place operation forms ([`SparseSet::union_with`] and friends)
//! mutate the receiver and recycle its blocks; the three-operand forms
//! ([`SparseSet::union`] and friends) overwrite a destination set, reusing
//! whatever blocks it already holds. The `&a | &b` operator sugar allocates
//! a fresh result.
//!
//! Sets are plain single-threaded values: no operation locks, suspends or
//! yields, and sharing a set across threads requires external exclusion.

#![warn(missing_docs)]

mod block;
mod ops;
mod set;


pub use block::BITS_PER_BLOCK;
pub use set::{CheckError, Iter, SparseSet};
