//! Set algebra over [`OrderedSet`] and types that embed one.
//!
//! This module provides [`SetAlgebra`], the trait carrying union,
//! intersection, difference, and subset tests for every ordered-set-backed
//! type.
//!
//! # The copy hook
//!
//! All of the algebra is written against three primitives of the backing
//! [`OrderedSet`] — insert, remove, contains — plus `Clone`. Each
//! non-mutating operation (`union`, `intersection`, `difference`) is
//! `self.clone()` followed by the matching in-place variant, and nothing
//! else; `Clone::clone` is the single copy routine in the crate. A wrapper
//! type that embeds an `OrderedSet` and derives (or hand-writes) `Clone`
//! over its extra fields therefore inherits the whole algebra, with every
//! copy-producing operation returning the wrapper's own concrete type and
//! carrying its extra fields along.
//!
//! # Compatibility of operands
//!
//! Binary operations accept any other implementor over the same element
//! type. Handing them anything else is a type error, not a runtime check:
//! the `SetAlgebra<Item = …>` bound does the screening at compile time.
//!
//! # Examples
//!
//! ```rust
//! use ordset::prelude::*;
//!
//! #[derive(Clone)]
//! struct Roster {
//!     members: OrderedSet<String>,
//!     team: &'static str,
//! }
//!
//! impl SetAlgebra for Roster {
//!     type Item = String;
//!
//!     fn base(&self) -> &OrderedSet<String> {
//!         &self.members
//!     }
//!
//!     fn base_mut(&mut self) -> &mut OrderedSet<String> {
//!         &mut self.members
//!     }
//! }
//!
//! let red = Roster {
//!     members: ["ada".to_string(), "grace".to_string()].into_iter().collect(),
//!     team: "red",
//! };
//! let blue = Roster {
//!     members: ["grace".to_string(), "edsger".to_string()].into_iter().collect(),
//!     team: "blue",
//! };
//!
//! // `union` returns a Roster, not a bare OrderedSet, and keeps the
//! // receiver's extra fields.
//! let merged = red.union(&blue);
//! assert_eq!(merged.team, "red");
//! assert_eq!(merged.base().len(), 3);
//! ```

use std::hash::Hash;

use crate::ordered_set::OrderedSet;

/// Set algebra for types backed by an [`OrderedSet`].
///
/// Implementors provide access to the backing set; every operation is a
/// provided method. See the [module docs](self) for the copy-hook contract.
pub trait SetAlgebra: Clone {
    /// The element type of the backing set.
    type Item: Clone + Eq + Hash;

    /// Returns the backing ordered set.
    fn base(&self) -> &OrderedSet<Self::Item>;

    /// Returns the backing ordered set for mutation.
    fn base_mut(&mut self) -> &mut OrderedSet<Self::Item>;

    /// Adds every element of `other` not already present, in `other`'s
    /// iteration order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordset::prelude::*;
    ///
    /// let mut set: OrderedSet<i32> = [1, 3].into_iter().collect();
    /// let other: OrderedSet<i32> = [3, 4].into_iter().collect();
    /// set.union_update(&other);
    /// assert_eq!(set.as_slice(), &[1, 3, 4]);
    /// ```
    fn union_update<S>(&mut self, other: &S)
    where
        S: SetAlgebra<Item = Self::Item>,
    {
        for value in other.base().iter() {
            self.base_mut().insert(value.clone());
        }
    }

    /// Removes every element not also present in `other`.
    ///
    /// The scan walks a snapshot of the current elements, since each removal
    /// shifts the backing sequence under the scan.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordset::prelude::*;
    ///
    /// let mut set: OrderedSet<i32> = [1, 2, 3].into_iter().collect();
    /// let other: OrderedSet<i32> = [2, 3, 4].into_iter().collect();
    /// set.intersection_update(&other);
    /// assert_eq!(set.as_slice(), &[2, 3]);
    /// ```
    fn intersection_update<S>(&mut self, other: &S)
    where
        S: SetAlgebra<Item = Self::Item>,
    {
        let snapshot: Vec<Self::Item> = self.base().iter().cloned().collect();
        for value in &snapshot {
            if !other.base().contains(value) {
                self.base_mut().remove(value);
            }
        }
    }

    /// Removes every element of `other` that is present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordset::prelude::*;
    ///
    /// let mut set: OrderedSet<i32> = [1, 2, 3].into_iter().collect();
    /// let other: OrderedSet<i32> = [2, 9].into_iter().collect();
    /// set.difference_update(&other);
    /// assert_eq!(set.as_slice(), &[1, 3]);
    /// ```
    fn difference_update<S>(&mut self, other: &S)
    where
        S: SetAlgebra<Item = Self::Item>,
    {
        for value in other.base().iter() {
            self.base_mut().remove(value);
        }
    }

    /// Returns a new set with the elements of `self` and `other`.
    ///
    /// The result has `self`'s concrete type: elements of `self` first, in
    /// their order, then elements only in `other`, in `other`'s order.
    #[must_use]
    fn union<S>(&self, other: &S) -> Self
    where
        S: SetAlgebra<Item = Self::Item>,
    {
        let mut merged = self.clone();
        merged.union_update(other);
        merged
    }

    /// Returns a new set with the elements present in both `self` and
    /// `other`, in `self`'s order, with `self`'s concrete type.
    #[must_use]
    fn intersection<S>(&self, other: &S) -> Self
    where
        S: SetAlgebra<Item = Self::Item>,
    {
        let mut shared = self.clone();
        shared.intersection_update(other);
        shared
    }

    /// Returns a new set with the elements of `self` not present in `other`,
    /// in `self`'s order, with `self`'s concrete type.
    #[must_use]
    fn difference<S>(&self, other: &S) -> Self
    where
        S: SetAlgebra<Item = Self::Item>,
    {
        let mut remaining = self.clone();
        remaining.difference_update(other);
        remaining
    }

    /// Returns `true` if every element of `self` is in `other`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordset::prelude::*;
    ///
    /// let inner: OrderedSet<i32> = [1, 3].into_iter().collect();
    /// let outer: OrderedSet<i32> = [1, 2, 3].into_iter().collect();
    /// assert!(inner.is_subset(&outer));
    /// assert!(!outer.is_subset(&inner));
    /// ```
    #[must_use]
    fn is_subset<S>(&self, other: &S) -> bool
    where
        S: SetAlgebra<Item = Self::Item>,
    {
        self.base().iter().all(|value| other.base().contains(value))
    }

    /// Returns `true` if every element of `other` is in `self`.
    #[must_use]
    fn is_superset<S>(&self, other: &S) -> bool
    where
        S: SetAlgebra<Item = Self::Item>,
    {
        other.is_subset(self)
    }

    /// Returns `true` if `self` and `other` share no elements.
    #[must_use]
    fn is_disjoint<S>(&self, other: &S) -> bool
    where
        S: SetAlgebra<Item = Self::Item>,
    {
        self.base()
            .iter()
            .all(|value| !other.base().contains(value))
    }
}
