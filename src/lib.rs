// Copyright 2018 Mohammad Rezaei.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
//

//! # An insertion-order preserving integer set
//! A mutable set of distinct `i32` values backed by a manually managed,
//! amortized-growth contiguous array.
//!
//! `IntSet` keeps its elements packed in a single heap allocation, in the
//! order they became members. That makes it a good fit for small sets where
//! a hash set's overhead is not worth paying, and for any use that cares
//! about *when* a value joined the set: iteration always visits the oldest
//! member first.
//!
//! Membership, insertion and removal are O(len); the backing array grows by
//! half plus one when full, so insertion is amortized O(1) on top of the
//! membership scan. Union, intersection and difference build new
//! independent sets with deterministic, insertion-derived order.
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! intset = "0.1.0"
//! ```
//!
//! and this to your crate root:
//!
//! ```rust
//! #[macro_use] extern crate intset;
//! # fn main() {
//! # }
//! ```
//!

pub mod int_set;

/// Creates an [`IntSet`] containing the arguments.
///
/// `intset!` allows `IntSet`s to be defined with the same syntax as array
/// expressions:
///
/// ```
/// # #[macro_use] extern crate intset;
/// # use intset::int_set::IntSet;
/// # fn main() {
/// let set: IntSet = intset![1, 2, 3];
/// assert_eq!(3, set.len());
/// assert!(set.contains(2));
/// # }
/// ```
///
/// Because the result is a set, duplicate arguments collapse to the first
/// occurrence:
///
/// ```
/// # #[macro_use] extern crate intset;
/// # fn main() {
/// let set = intset![1, 2, 1, 3, 2];
/// assert_eq!(&[1, 2, 3], set.as_slice());
/// # }
/// ```
///
/// [`IntSet`]: int_set/struct.IntSet.html
#[macro_export]
macro_rules! intset {
    // count helper: transform any expression into 1
    (@one $x:expr) => (1usize);
    ($($x:expr),*$(,)*) => ({
        let count = 0usize $(+ intset!(@one $x))*;
        let mut set = $crate::int_set::IntSet::with_capacity(count);
        $(set.insert($x);)*
        set
    });
}
