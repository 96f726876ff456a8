// Copyright 2018 Mohammad Rezaei.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
//

//! # `IntSet`: an insertion-order preserving set of integers.

use std::{
    alloc::{self, Layout},
    mem, ptr,
};
use std::fmt;
use std::slice;
use std::iter::FromIterator;
use std::iter::FusedIterator;
use std::ptr::NonNull;
use std::ops::BitAnd;
use std::ops::BitOr;
use std::ops::Sub;

/// The capacity used when none is specified, and the fallback for
/// capacity requests that cannot be honored as given.
const DEFAULT_CAPACITY: usize = 1;

/// A set of distinct `i32` values that remembers insertion order.
///
/// Unlike a hash set, iterating an `IntSet` visits elements in the order
/// they became members: the earliest member first, the latest member last.
/// Removing a value forgets its position; if the value is inserted again
/// later, it counts as the newest member and moves to the end.
///
/// ```
/// use intset::int_set::IntSet;
///
/// let mut set = IntSet::new();
/// set.insert(1);
/// set.insert(2);
/// set.insert(3);
/// set.remove(1);
/// set.insert(1); // 1 is now the newest member
/// assert_eq!(&[2, 3, 1], set.as_slice());
/// ```
///
/// The elements live in a single heap-allocated array, packed at the front
/// with no holes. Membership tests are a linear scan, which for small sets
/// of primitives is hard to beat: no hashing, no tree pointers, perfect
/// cache behavior.
///
/// # Capacity and reallocation
///
/// The capacity of a set is the amount of space allocated for any future
/// elements that will be inserted into the set. This is not to be confused
/// with the *length* of a set, which specifies the number of actual elements
/// within the set. If a set's length exceeds its capacity, its capacity
/// will automatically be increased, but its elements will have to be
/// reallocated.
///
/// Capacity grows by half plus one on overflow (8 becomes 13), which
/// amortizes the reallocation cost across insertions without doubling's
/// memory overhead. The capacity is never zero, even for an empty set.
/// When the number of insertions is known up front, use
/// [`IntSet::with_capacity`] to skip the intermediate reallocations:
///
/// ```
/// use intset::int_set::IntSet;
///
/// let mut set = IntSet::with_capacity(10);
/// assert_eq!(10, set.capacity());
/// for i in 0..10 {
///     set.insert(i);
/// }
/// assert_eq!(10, set.capacity()); // no reallocation happened
/// ```
///
/// # Set operations
///
/// [`union`], [`intersection`] and [`difference`] each build a new
/// independent set, and their result order is deterministic: the invoking
/// set's elements keep their relative order, and for `union` the other
/// set's novel elements follow in the other set's order.
///
/// ```
/// #[macro_use] extern crate intset;
/// # fn main() {
/// let a = intset![1, 2, 3];
/// let b = intset![2, 3, 4];
///
/// assert_eq!(&[1, 2, 3, 4], a.union(&b).as_slice());
/// assert_eq!(&[2, 3], a.intersection(&b).as_slice());
/// assert_eq!(&[1], a.difference(&b).as_slice());
/// # }
/// ```
///
/// The `|`, `&` and `-` operators are also available on references,
/// mirroring the std collections.
///
/// Equality ignores order: two sets are equal when each contains every
/// element of the other.
///
/// ```
/// #[macro_use] extern crate intset;
/// # fn main() {
/// assert_eq!(intset![3, 1, 2], intset![1, 2, 3]);
/// # }
/// ```
///
/// [`union`]: #method.union
/// [`intersection`]: #method.intersection
/// [`difference`]: #method.difference
pub struct IntSet {
    data: NonNull<i32>,
    capacity: usize,
    used: usize,
}

impl IntSet {
    /// Creates an empty `IntSet` with the default capacity.
    ///
    /// # Examples
    ///
    /// ```
    /// use intset::int_set::IntSet;
    ///
    /// let mut set = IntSet::new();
    /// assert!(set.is_empty());
    /// set.insert(17);
    /// set.insert(42);
    /// assert_eq!(2, set.len());
    /// ```
    #[inline]
    pub fn new() -> IntSet {
        IntSet::with_capacity(DEFAULT_CAPACITY)
    }

    /// Creates an empty `IntSet` with the specified capacity.
    ///
    /// The set will be able to hold `capacity` elements without
    /// reallocating. A `capacity` of 0 is not honored as given; the set
    /// never holds a zero-sized allocation, so the default capacity is
    /// used instead.
    ///
    /// # Examples
    ///
    /// ```
    /// use intset::int_set::IntSet;
    ///
    /// let set = IntSet::with_capacity(10);
    /// assert_eq!(0, set.len());
    /// assert_eq!(10, set.capacity());
    ///
    /// // invalid capacity requests fall back to the default
    /// let set = IntSet::with_capacity(0);
    /// assert_eq!(0, set.len());
    /// assert_eq!(1, set.capacity());
    /// ```
    #[inline]
    pub fn with_capacity(capacity: usize) -> IntSet {
        let capacity = if capacity == 0 { DEFAULT_CAPACITY } else { capacity };
        IntSet {
            data: IntSet::allocate_array(capacity),
            capacity,
            used: 0,
        }
    }

    /// Returns the number of elements the set can hold without
    /// reallocating.
    ///
    /// # Examples
    ///
    /// ```
    /// use intset::int_set::IntSet;
    /// let set = IntSet::with_capacity(10);
    /// assert_eq!(10, set.capacity());
    /// ```
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the number of elements in the set.
    ///
    /// # Examples
    ///
    /// ```
    /// use intset::int_set::IntSet;
    ///
    /// let mut set = IntSet::new();
    /// assert_eq!(0, set.len());
    /// set.insert(1);
    /// assert_eq!(1, set.len());
    /// ```
    #[inline]
    pub fn len(&self) -> usize {
        self.used
    }

    /// Returns `true` if the set contains no elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use intset::int_set::IntSet;
    ///
    /// let mut set = IntSet::new();
    /// assert!(set.is_empty());
    /// set.insert(1);
    /// assert!(!set.is_empty());
    /// ```
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.used == 0
    }

    /// Returns `true` if the set contains `value`.
    ///
    /// This is a linear scan of the elements, O(len).
    ///
    /// # Examples
    ///
    /// ```
    /// #[macro_use] extern crate intset;
    /// # fn main() {
    /// let set = intset![1, 2, 3];
    /// assert_eq!(true, set.contains(1));
    /// assert_eq!(false, set.contains(4));
    /// # }
    /// ```
    pub fn contains(&self, value: i32) -> bool {
        self.as_slice().iter().any(|&v| v == value)
    }

    /// Adds `value` to the set.
    ///
    /// If the set did not have this value present, `true` is returned and
    /// the value becomes the newest member.
    ///
    /// If the set did have this value present, `false` is returned and the
    /// membership order is unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use intset::int_set::IntSet;
    ///
    /// let mut set = IntSet::new();
    ///
    /// assert_eq!(true, set.insert(2));
    /// assert_eq!(false, set.insert(2));
    /// assert_eq!(1, set.len());
    /// ```
    pub fn insert(&mut self, value: i32) -> bool {
        if self.contains(value) {
            return false;
        }
        if self.used == self.capacity {
            let new_capacity = self.capacity + self.capacity / 2 + 1;
            self.resize(new_capacity);
        }
        unsafe {
            ptr::write(self.data.as_ptr().add(self.used), value);
        }
        self.used += 1;
        true
    }

    /// Removes `value` from the set. Returns `true` if the value was
    /// present in the set.
    ///
    /// The elements after the removed value shift down to close the gap,
    /// so the remaining elements keep their relative order. Any memory of
    /// the removed value's position is lost; inserting it again appends it
    /// as the newest member.
    ///
    /// # Examples
    ///
    /// ```
    /// use intset::int_set::IntSet;
    ///
    /// let mut set = IntSet::new();
    ///
    /// set.insert(2);
    /// assert_eq!(true, set.remove(2));
    /// assert_eq!(false, set.remove(2));
    /// ```
    pub fn remove(&mut self, value: i32) -> bool {
        let index = match self.as_slice().iter().position(|&v| v == value) {
            Some(index) => index,
            None => return false,
        };
        unsafe {
            let p = self.data.as_ptr().add(index);
            // Shift everything down to fill in that spot.
            ptr::copy(p.add(1), p, self.used - index - 1);
        }
        self.used -= 1;
        true
    }

    /// Clears the set, removing all values.
    ///
    /// Note that this method has no effect on the allocated capacity
    /// of the set.
    ///
    /// # Examples
    ///
    /// ```
    /// use intset::int_set::IntSet;
    ///
    /// let mut set = IntSet::with_capacity(10);
    /// set.insert(1);
    /// set.clear();
    /// assert!(set.is_empty());
    /// assert_eq!(10, set.capacity());
    /// ```
    #[inline]
    pub fn clear(&mut self) {
        self.used = 0;
    }

    /// Returns `true` if the set is a subset of another,
    /// i.e. `other` contains at least all the values in `self`.
    ///
    /// The empty set is a subset of every set.
    ///
    /// # Examples
    ///
    /// ```
    /// #[macro_use] extern crate intset;
    /// use intset::int_set::IntSet;
    /// # fn main() {
    /// let sup = intset![1, 2, 3];
    /// let mut set = IntSet::new();
    ///
    /// assert_eq!(true, set.is_subset(&sup));
    /// set.insert(2);
    /// assert_eq!(true, set.is_subset(&sup));
    /// set.insert(4);
    /// assert_eq!(false, set.is_subset(&sup));
    /// # }
    /// ```
    pub fn is_subset(&self, other: &IntSet) -> bool {
        self.iter().all(|&v| other.contains(v))
    }

    /// Returns `true` if the set is a superset of another,
    /// i.e. `self` contains at least all the values in `other`.
    ///
    /// # Examples
    ///
    /// ```
    /// #[macro_use] extern crate intset;
    /// use intset::int_set::IntSet;
    /// # fn main() {
    /// let sub = intset![1, 2];
    /// let mut set = IntSet::new();
    ///
    /// assert_eq!(false, set.is_superset(&sub));
    ///
    /// set.insert(0);
    /// set.insert(1);
    /// assert_eq!(false, set.is_superset(&sub));
    ///
    /// set.insert(2);
    /// assert_eq!(true, set.is_superset(&sub));
    /// # }
    /// ```
    #[inline]
    pub fn is_superset(&self, other: &IntSet) -> bool {
        other.is_subset(self)
    }

    /// Returns `true` if `self` has no elements in common with `other`.
    /// This is equivalent to checking for an empty intersection.
    ///
    /// # Examples
    ///
    /// ```
    /// #[macro_use] extern crate intset;
    /// use intset::int_set::IntSet;
    /// # fn main() {
    /// let a = intset![1, 2, 3];
    /// let mut b = IntSet::new();
    ///
    /// assert_eq!(true, a.is_disjoint(&b));
    /// b.insert(4);
    /// assert_eq!(true, a.is_disjoint(&b));
    /// b.insert(1);
    /// assert_eq!(false, a.is_disjoint(&b));
    /// # }
    /// ```
    pub fn is_disjoint(&self, other: &IntSet) -> bool {
        self.iter().all(|&v| !other.contains(v))
    }

    /// Returns the union of `self` and `other` as a new `IntSet`.
    ///
    /// Neither operand is mutated. The result holds `self`'s elements in
    /// their original order, followed by the elements of `other` that were
    /// not already present, in `other`'s order.
    ///
    /// # Examples
    ///
    /// ```
    /// #[macro_use] extern crate intset;
    /// # fn main() {
    /// let a = intset![1, 2, 3];
    /// let b = intset![3, 4, 5];
    ///
    /// assert_eq!(&[1, 2, 3, 4, 5], a.union(&b).as_slice());
    /// assert_eq!(&[3, 4, 5, 1, 2], b.union(&a).as_slice());
    /// # }
    /// ```
    pub fn union(&self, other: &IntSet) -> IntSet {
        let mut result = self.clone();
        for &value in other.iter() {
            result.insert(value);
        }
        result
    }

    /// Returns the intersection of `self` and `other` as a new `IntSet`.
    ///
    /// Neither operand is mutated. The result holds the elements present
    /// in both sets, in `self`'s order.
    ///
    /// # Examples
    ///
    /// ```
    /// #[macro_use] extern crate intset;
    /// # fn main() {
    /// let a = intset![1, 2, 3];
    /// let b = intset![4, 2, 3];
    ///
    /// assert_eq!(&[2, 3], a.intersection(&b).as_slice());
    /// # }
    /// ```
    pub fn intersection(&self, other: &IntSet) -> IntSet {
        let mut result = self.clone();
        for &value in self.iter() {
            if !other.contains(value) {
                result.remove(value);
            }
        }
        result
    }

    /// Returns the difference of `self` and `other` as a new `IntSet`,
    /// i.e. the elements of `self` that are not in `other`.
    ///
    /// Neither operand is mutated. The result order is `self`'s order.
    ///
    /// # Examples
    ///
    /// ```
    /// #[macro_use] extern crate intset;
    /// # fn main() {
    /// let a = intset![1, 2, 3];
    /// let b = intset![4, 2, 3];
    ///
    /// assert_eq!(&[1], a.difference(&b).as_slice());
    /// assert_eq!(&[4], b.difference(&a).as_slice());
    /// # }
    /// ```
    pub fn difference(&self, other: &IntSet) -> IntSet {
        let mut result = self.clone();
        for &value in other.iter() {
            result.remove(value);
        }
        result
    }

    /// An iterator visiting all elements in insertion order.
    ///
    /// # Examples
    ///
    /// ```
    /// use intset::int_set::IntSet;
    /// let mut set = IntSet::new();
    /// set.insert(7);
    /// set.insert(22);
    ///
    /// // Prints 7 then 22.
    /// for x in set.iter() {
    ///     println!("{}", x);
    /// }
    /// ```
    #[inline]
    pub fn iter(&self) -> Iter {
        Iter { iter: self.as_slice().iter() }
    }

    /// Extracts a slice containing the elements, in insertion order.
    ///
    /// # Examples
    ///
    /// ```
    /// use intset::int_set::IntSet;
    /// let mut set = IntSet::new();
    /// set.insert(30);
    /// set.insert(10);
    /// set.insert(20);
    /// assert_eq!(&[30, 10, 20], set.as_slice());
    /// ```
    #[inline]
    pub fn as_slice(&self) -> &[i32] {
        unsafe { slice::from_raw_parts(self.data.as_ptr(), self.used) }
    }

    #[inline(always)]
    fn array_layout(capacity: usize) -> Layout {
        Layout::from_size_align(mem::size_of::<i32>() * capacity, mem::align_of::<i32>()).unwrap()
    }

    #[inline(always)]
    fn allocate_array(capacity: usize) -> NonNull<i32> {
        let layout = IntSet::array_layout(capacity);
        unsafe {
            let buffer = alloc::alloc(layout) as *mut i32;
            match NonNull::new(buffer) {
                Some(data) => data,
                // Out of memory is not recoverable here; this aborts.
                None => alloc::handle_alloc_error(layout),
            }
        }
    }

    // Reallocates the backing array to hold `new_capacity` elements,
    // preserving the contents. A request of 0 falls back to the default
    // capacity; a request too small for the current contents is clamped
    // to exactly the current length. Must not be called before the
    // initial allocation exists.
    fn resize(&mut self, new_capacity: usize) {
        let new_capacity = if new_capacity == 0 {
            DEFAULT_CAPACITY
        } else if new_capacity < self.used {
            self.used
        } else {
            new_capacity
        };
        unsafe {
            let new_data = IntSet::allocate_array(new_capacity);
            ptr::copy_nonoverlapping(self.data.as_ptr(), new_data.as_ptr(), self.used);
            alloc::dealloc(self.data.as_ptr() as *mut u8, IntSet::array_layout(self.capacity));
            self.data = new_data;
        }
        self.capacity = new_capacity;
    }
}

impl Drop for IntSet {
    fn drop(&mut self) {
        unsafe {
            alloc::dealloc(self.data.as_ptr() as *mut u8, IntSet::array_layout(self.capacity));
        }
    }
}

impl Clone for IntSet {
    /// Returns a deep copy: an independent set with the same elements in
    /// the same order and the same capacity.
    ///
    /// # Examples
    ///
    /// ```
    /// #[macro_use] extern crate intset;
    /// # fn main() {
    /// let a = intset![1, 2, 3];
    /// let mut b = a.clone();
    /// b.insert(4);
    /// assert_eq!(false, a.contains(4));
    /// # }
    /// ```
    fn clone(&self) -> IntSet {
        let mut set = IntSet::with_capacity(self.capacity);
        unsafe {
            ptr::copy_nonoverlapping(self.data.as_ptr(), set.data.as_ptr(), self.used);
        }
        set.used = self.used;
        set
    }

    fn clone_from(&mut self, source: &IntSet) {
        if self.capacity != source.capacity {
            unsafe {
                let new_data = IntSet::allocate_array(source.capacity);
                alloc::dealloc(self.data.as_ptr() as *mut u8, IntSet::array_layout(self.capacity));
                self.data = new_data;
            }
            self.capacity = source.capacity;
        }
        unsafe {
            ptr::copy_nonoverlapping(source.data.as_ptr(), self.data.as_ptr(), source.used);
        }
        self.used = source.used;
    }
}

// The backing array is exclusively owned, so the set moves between
// threads like the elements would.
unsafe impl Send for IntSet {}

unsafe impl Sync for IntSet {}

impl PartialEq for IntSet {
    fn eq(&self, other: &IntSet) -> bool {
        if self.len() != other.len() {
            return false;
        }

        self.iter().all(|&v| other.contains(v))
    }
}

impl Eq for IntSet {}

impl fmt::Debug for IntSet {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl fmt::Display for IntSet {
    /// Writes the elements in insertion order, separated by two spaces,
    /// with no trailing separator or newline. A diagnostic format, not a
    /// stable serialization.
    ///
    /// # Examples
    ///
    /// ```
    /// #[macro_use] extern crate intset;
    /// # fn main() {
    /// let set = intset![10, 20, 30];
    /// assert_eq!("10  20  30", set.to_string());
    /// # }
    /// ```
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut iter = self.iter();
        if let Some(first) = iter.next() {
            write!(f, "{}", first)?;
            for v in iter {
                write!(f, "  {}", v)?;
            }
        }
        Ok(())
    }
}

impl Default for IntSet {
    /// Creates an empty `IntSet` with the default capacity.
    #[inline]
    fn default() -> IntSet {
        IntSet::new()
    }
}

impl FromIterator<i32> for IntSet {
    fn from_iter<I: IntoIterator<Item = i32>>(iter: I) -> IntSet {
        let mut set = IntSet::new();
        set.extend(iter);
        set
    }
}

impl Extend<i32> for IntSet {
    fn extend<I: IntoIterator<Item = i32>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<'a> Extend<&'a i32> for IntSet {
    fn extend<I: IntoIterator<Item = &'a i32>>(&mut self, iter: I) {
        self.extend(iter.into_iter().cloned());
    }
}

impl<'a> From<&'a [i32]> for IntSet {
    /// Builds a set from a slice, collapsing duplicates.
    ///
    /// # Examples
    ///
    /// ```
    /// use intset::int_set::IntSet;
    /// let set = IntSet::from(&[1, 2, 2, 3][..]);
    /// assert_eq!(3, set.len());
    /// ```
    fn from(slice: &'a [i32]) -> IntSet {
        let mut set = IntSet::with_capacity(slice.len());
        set.extend(slice);
        set
    }
}

impl<'a, 'b> BitOr<&'b IntSet> for &'a IntSet {
    type Output = IntSet;

    /// Returns the union of `self` and `rhs` as a new `IntSet`.
    ///
    /// # Examples
    ///
    /// ```
    /// #[macro_use] extern crate intset;
    /// # fn main() {
    /// let a = intset![1, 2, 3];
    /// let b = intset![3, 4, 5];
    ///
    /// assert_eq!(intset![1, 2, 3, 4, 5], &a | &b);
    /// # }
    /// ```
    fn bitor(self, rhs: &IntSet) -> IntSet {
        self.union(rhs)
    }
}

impl<'a, 'b> BitAnd<&'b IntSet> for &'a IntSet {
    type Output = IntSet;

    /// Returns the intersection of `self` and `rhs` as a new `IntSet`.
    ///
    /// # Examples
    ///
    /// ```
    /// #[macro_use] extern crate intset;
    /// # fn main() {
    /// let a = intset![1, 2, 3];
    /// let b = intset![2, 3, 4];
    ///
    /// assert_eq!(intset![2, 3], &a & &b);
    /// # }
    /// ```
    fn bitand(self, rhs: &IntSet) -> IntSet {
        self.intersection(rhs)
    }
}

impl<'a, 'b> Sub<&'b IntSet> for &'a IntSet {
    type Output = IntSet;

    /// Returns the difference of `self` and `rhs` as a new `IntSet`.
    ///
    /// # Examples
    ///
    /// ```
    /// #[macro_use] extern crate intset;
    /// # fn main() {
    /// let a = intset![1, 2, 3];
    /// let b = intset![3, 4, 5];
    ///
    /// assert_eq!(intset![1, 2], &a - &b);
    /// # }
    /// ```
    fn sub(self, rhs: &IntSet) -> IntSet {
        self.difference(rhs)
    }
}

/// An iterator over the elements of an `IntSet`, in insertion order.
///
/// This struct is created by the [`iter`] method on [`IntSet`].
///
/// [`iter`]: struct.IntSet.html#method.iter
/// [`IntSet`]: struct.IntSet.html
#[derive(Clone)]
pub struct Iter<'a> {
    iter: slice::Iter<'a, i32>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a i32;

    #[inline]
    fn next(&mut self) -> Option<&'a i32> {
        self.iter.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl<'a> DoubleEndedIterator for Iter<'a> {
    #[inline]
    fn next_back(&mut self) -> Option<&'a i32> {
        self.iter.next_back()
    }
}

impl<'a> ExactSizeIterator for Iter<'a> {
    #[inline]
    fn len(&self) -> usize {
        self.iter.len()
    }
}

impl<'a> FusedIterator for Iter<'a> {}

/// An owning iterator over the elements of an `IntSet`, in insertion order.
pub struct IntoIter {
    set: IntSet,
    front: usize,
}

impl Iterator for IntoIter {
    type Item = i32;

    #[inline]
    fn next(&mut self) -> Option<i32> {
        if self.front == self.set.used {
            return None;
        }
        let value = unsafe { ptr::read(self.set.data.as_ptr().add(self.front)) };
        self.front += 1;
        Some(value)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.set.used - self.front;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for IntoIter {
    #[inline]
    fn len(&self) -> usize {
        self.set.used - self.front
    }
}

impl FusedIterator for IntoIter {}

impl<'a> IntoIterator for &'a IntSet {
    type Item = &'a i32;
    type IntoIter = Iter<'a>;

    #[inline]
    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}

impl IntoIterator for IntSet {
    type Item = i32;
    type IntoIter = IntoIter;

    /// Creates a consuming iterator, that is, one that moves each value
    /// out of the set in insertion order.
    ///
    /// # Examples
    ///
    /// ```
    /// #[macro_use] extern crate intset;
    /// # fn main() {
    /// let set = intset![1, 2, 3];
    /// let v: Vec<i32> = set.into_iter().collect();
    /// assert_eq!(vec![1, 2, 3], v);
    /// # }
    /// ```
    #[inline]
    fn into_iter(self) -> IntoIter {
        IntoIter { set: self, front: 0 }
    }
}
