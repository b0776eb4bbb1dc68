//! # ordset
//!
//! An insertion-ordered, index-addressable set with full set algebra.
//!
//! ## Overview
//!
//! This library provides one collection, [`OrderedSet`], for code that needs
//! set algebra (union, intersection, difference, subset tests) and
//! deterministic, index-addressable iteration over the same values — a
//! combination neither a plain hash set nor a plain ordered list offers:
//!
//! - **Uniqueness**: duplicate insertions collapse silently
//! - **Insertion order**: iteration and slicing follow first-seen order
//! - **Positional access**: `set[i]`, `set[a..b]`, `get`, `remove_at`
//! - **Set algebra**: mutating and copy-producing variants via [`SetAlgebra`],
//!   plus `|`/`+`/`&`/`-` operator sugar
//!
//! The algebra lives in a trait so that types embedding an `OrderedSet` can
//! reuse it wholesale: implement two accessors, derive `Clone`, and every
//! copy-producing operation returns your concrete type. See the
//! [`algebra`] module docs for the copy-hook contract.
//!
//! ## Feature Flags
//!
//! - `serde`: `Serialize`/`Deserialize` as a plain sequence
//! - `fxhash`: back the position index with `rustc-hash` instead of the
//!   standard hasher
//!
//! ## Example
//!
//! ```rust
//! use ordset::prelude::*;
//!
//! let mut tracked: OrderedSet<i32> = [1, 2, 3, 2, 1].into_iter().collect();
//! assert_eq!(tracked.as_slice(), &[1, 2, 3]);
//!
//! tracked.remove(&2);
//! assert_eq!(tracked.as_slice(), &[1, 3]);
//!
//! let incoming: OrderedSet<i32> = [3, 4].into_iter().collect();
//! assert_eq!(tracked.union(&incoming).as_slice(), &[1, 3, 4]);
//! assert_eq!(tracked.intersection(&incoming).as_slice(), &[3]);
//! assert_eq!((&tracked - &incoming).as_slice(), &[1]);
//! ```
//!
//! ## Concurrency
//!
//! `OrderedSet` is a plain single-threaded container: no internal locking,
//! no I/O, no suspension points. `&mut` exclusivity rules out structural
//! mutation during iteration at compile time; across threads, serialize
//! access with a lock as for any `std` collection.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports the container and the algebra trait.
///
/// # Usage
///
/// ```rust
/// use ordset::prelude::*;
/// ```
pub mod prelude {
    pub use crate::algebra::SetAlgebra;
    pub use crate::ordered_set::OrderedSet;
}

pub mod algebra;
pub mod ordered_set;

pub use algebra::SetAlgebra;
pub use ordered_set::{OrderedSet, OrderedSetIntoIterator, OrderedSetIterator};
