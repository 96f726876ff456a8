// Copyright 2018 Mohammad Rezaei.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
//

#[macro_use]
extern crate intset;
extern crate rand;

use intset::int_set::IntSet;

use rand::{thread_rng, Rng};
use std::collections::HashSet;

#[test]
fn test_new_is_empty() {
    let set = IntSet::new();
    assert_eq!(0, set.len());
    assert!(set.is_empty());
    assert_eq!(1, set.capacity());
}

#[test]
fn test_with_capacity() {
    let set = IntSet::with_capacity(10);
    assert_eq!(0, set.len());
    assert_eq!(10, set.capacity());
}

#[test]
fn test_with_capacity_zero_falls_back() {
    // a zero capacity request behaves exactly like the default
    let set = IntSet::with_capacity(0);
    assert_eq!(0, set.len());
    assert_eq!(IntSet::new().capacity(), set.capacity());
}

#[test]
fn test_insert() {
    let mut set = IntSet::new();
    assert!(set.insert(10));
    assert!(set.insert(20));
    assert_eq!(2, set.len());
    assert!(set.contains(10));
    assert!(set.contains(20));
    assert!(!set.contains(30));
}

#[test]
fn test_insert_duplicate_is_noop() {
    let mut set = IntSet::new();
    assert!(set.insert(10));
    assert!(set.insert(20));
    assert!(!set.insert(10));
    assert_eq!(2, set.len());
    assert_eq!("10  20", set.to_string());
}

#[test]
fn test_insert_negative_and_extremes() {
    let mut set = IntSet::new();
    assert!(set.insert(-1));
    assert!(set.insert(0));
    assert!(set.insert(i32::min_value()));
    assert!(set.insert(i32::max_value()));
    assert_eq!(4, set.len());
    assert!(set.contains(i32::min_value()));
    assert!(set.contains(i32::max_value()));
    assert!(!set.insert(-1));
}

#[test]
fn test_remove() {
    let mut set = intset![1, 2, 3];
    assert!(set.remove(2));
    assert_eq!(2, set.len());
    assert!(!set.contains(2));
    assert!(!set.remove(2));
    assert_eq!(2, set.len());
}

#[test]
fn test_remove_absent() {
    let mut set = IntSet::new();
    assert!(!set.remove(7));
    assert!(set.is_empty());
}

#[test]
fn test_remove_preserves_relative_order() {
    let mut set = intset![1, 2, 3, 4, 5];
    set.remove(3);
    assert_eq!(&[1, 2, 4, 5], set.as_slice());
    set.remove(1);
    assert_eq!(&[2, 4, 5], set.as_slice());
    set.remove(5);
    assert_eq!(&[2, 4], set.as_slice());
}

#[test]
fn test_reinsert_moves_to_end() {
    let mut set = IntSet::new();
    set.insert(1);
    set.insert(2);
    set.insert(3);
    assert!(set.remove(1));
    assert!(set.insert(1));
    assert_eq!("2  3  1", set.to_string());
}

#[test]
fn test_growth_from_capacity_one() {
    let mut set = IntSet::with_capacity(1);
    for i in 0..5 {
        assert!(set.insert(i * 100));
    }
    assert_eq!(5, set.len());
    for i in 0..5 {
        assert!(set.contains(i * 100));
    }
    assert_eq!(&[0, 100, 200, 300, 400], set.as_slice());
}

#[test]
fn test_growth_sequence() {
    // capacity grows by floor(capacity * 1.5) + 1 when full
    let mut set = IntSet::with_capacity(1);
    assert_eq!(1, set.capacity());
    set.insert(1);
    assert_eq!(1, set.capacity());
    set.insert(2);
    assert_eq!(2, set.capacity());
    set.insert(3);
    assert_eq!(4, set.capacity());
    set.insert(4);
    assert_eq!(4, set.capacity());
    set.insert(5);
    assert_eq!(7, set.capacity());
    for i in 6..8 {
        set.insert(i);
    }
    assert_eq!(7, set.capacity());
    set.insert(8);
    assert_eq!(11, set.capacity());
}

#[test]
fn test_growth_many() {
    let mut set = IntSet::with_capacity(1);
    for i in 0..10_000 {
        assert!(set.insert(i));
    }
    assert_eq!(10_000, set.len());
    assert!(set.capacity() >= 10_000);
    assert!(set.contains(0));
    assert!(set.contains(9_999));
}

#[test]
fn test_clear_retains_capacity() {
    let mut set = intset![1, 2, 3, 4, 5];
    let capacity = set.capacity();
    set.clear();
    assert!(set.is_empty());
    assert_eq!(capacity, set.capacity());
    // the buffer is reusable after a clear
    assert!(set.insert(4));
    assert_eq!("4", set.to_string());
    assert_eq!(capacity, set.capacity());
}

#[test]
fn test_clone_independence() {
    let a = intset![1, 2, 3];
    let mut b = a.clone();
    assert!(b.insert(4));
    assert!(!a.contains(4));
    assert!(b.remove(1));
    assert!(a.contains(1));
    assert_eq!(3, a.len());
}

#[test]
fn test_clone_preserves_order_and_capacity() {
    let mut a = IntSet::with_capacity(8);
    a.insert(3);
    a.insert(1);
    a.insert(2);
    let b = a.clone();
    assert_eq!(&[3, 1, 2], b.as_slice());
    assert_eq!(8, b.capacity());
}

#[test]
fn test_clone_from_takes_source_capacity() {
    let mut a = IntSet::with_capacity(2);
    a.insert(9);
    let mut b = IntSet::with_capacity(16);
    b.insert(5);
    b.insert(6);
    a.clone_from(&b);
    assert_eq!(&[5, 6], a.as_slice());
    assert_eq!(16, a.capacity());
    b.insert(7);
    assert!(!a.contains(7));
}

#[test]
fn test_display_dump() {
    let mut set = IntSet::new();
    assert_eq!("", set.to_string());
    set.insert(10);
    assert_eq!("10", set.to_string());
    set.insert(20);
    set.insert(30);
    assert_eq!("10  20  30", set.to_string());
}

#[test]
fn test_debug() {
    let set = intset![1, 2, 3];
    assert_eq!("{1, 2, 3}", format!("{:?}", set));
}

#[test]
fn test_add_scenario() {
    let mut set = IntSet::new();
    assert!(set.insert(10));
    assert!(set.insert(20));
    assert!(!set.insert(10));
    assert_eq!(2, set.len());
    assert_eq!("10  20", set.to_string());
}

#[test]
fn test_algebra_scenario() {
    let a = intset![1, 2, 3];
    let b = intset![2, 3, 4];
    assert_eq!("1  2  3  4", a.union(&b).to_string());
    assert_eq!("2  3", a.intersection(&b).to_string());
    assert_eq!("1", a.difference(&b).to_string());
}

#[test]
fn test_algebra_does_not_mutate_operands() {
    let a = intset![1, 2, 3];
    let b = intset![2, 3, 4];
    let _ = a.union(&b);
    let _ = a.intersection(&b);
    let _ = a.difference(&b);
    assert_eq!(&[1, 2, 3], a.as_slice());
    assert_eq!(&[2, 3, 4], b.as_slice());
}

#[test]
fn test_algebra_with_self() {
    let a = intset![5, 10, 15];
    assert_eq!(a, a.union(&a));
    assert_eq!(a, a.intersection(&a));
    assert!(a.difference(&a).is_empty());
}

#[test]
fn test_algebra_with_empty() {
    let a = intset![1, 2];
    let empty = IntSet::new();
    assert_eq!(a, a.union(&empty));
    assert_eq!(a, empty.union(&a));
    assert!(a.intersection(&empty).is_empty());
    assert_eq!(a, a.difference(&empty));
    assert!(empty.difference(&a).is_empty());
}

#[test]
fn test_union_properties() {
    let a = intset![1, 7, 3];
    let b = intset![3, 9, 1, 11];
    let u = a.union(&b);
    assert!(a.is_subset(&u));
    assert!(b.is_subset(&u));
    for &v in u.iter() {
        assert!(a.contains(v) || b.contains(v));
    }
    // a's elements first, then b's novel elements in b's order
    assert_eq!(&[1, 7, 3, 9, 11], u.as_slice());
}

#[test]
fn test_intersection_is_order_subsequence() {
    let a = intset![5, 4, 3, 2, 1];
    let b = intset![1, 3, 5];
    assert_eq!(&[5, 3, 1], a.intersection(&b).as_slice());
}

#[test]
fn test_operators() {
    let a = intset![1, 2, 3];
    let b = intset![3, 4, 5];
    assert_eq!(intset![1, 2, 3, 4, 5], &a | &b);
    assert_eq!(intset![3], &a & &b);
    assert_eq!(intset![1, 2], &a - &b);
}

#[test]
fn test_subset() {
    let sup = intset![1, 2, 3];
    let mut set = IntSet::new();
    // vacuously true for the empty set
    assert!(set.is_subset(&sup));
    assert!(sup.is_superset(&set));
    set.insert(2);
    assert!(set.is_subset(&sup));
    set.insert(4);
    assert!(!set.is_subset(&sup));
}

#[test]
fn test_is_disjoint() {
    let a = intset![1, 2, 3];
    assert!(a.is_disjoint(&IntSet::new()));
    assert!(a.is_disjoint(&intset![4, 5]));
    assert!(!a.is_disjoint(&intset![5, 3]));
}

#[test]
fn test_equality_ignores_order() {
    let a = intset![1, 2, 3];
    let b = intset![3, 2, 1];
    assert_eq!(a, b);
    assert!(a.is_subset(&b) && b.is_subset(&a));
}

#[test]
fn test_equality_iff_mutual_subset() {
    let a = intset![1, 2];
    let b = intset![1, 2, 3];
    assert_ne!(a, b);
    assert!(a.is_subset(&b));
    assert!(!b.is_subset(&a));
    assert_eq!(IntSet::new(), IntSet::new());
}

#[test]
fn test_iter_in_insertion_order() {
    let set = intset![30, 10, 20];
    let v: Vec<i32> = set.iter().cloned().collect();
    assert_eq!(vec![30, 10, 20], v);
    assert_eq!(3, set.iter().len());
    let back: Vec<i32> = set.iter().rev().cloned().collect();
    assert_eq!(vec![20, 10, 30], back);
}

#[test]
fn test_into_iter() {
    let set = intset![1, 2, 3];
    let mut sum = 0;
    for v in set {
        sum += v;
    }
    assert_eq!(6, sum);
}

#[test]
fn test_from_iterator_collapses_duplicates() {
    let set: IntSet = vec![1, 2, 2, 3, 1].into_iter().collect();
    assert_eq!(&[1, 2, 3], set.as_slice());
}

#[test]
fn test_from_slice() {
    let set = IntSet::from(&[4, 4, 8][..]);
    assert_eq!(&[4, 8], set.as_slice());
}

#[test]
fn test_extend() {
    let mut set = intset![1];
    set.extend(vec![2, 1, 3]);
    assert_eq!(&[1, 2, 3], set.as_slice());
    set.extend(&[3, 4][..]);
    assert_eq!(&[1, 2, 3, 4], set.as_slice());
}

#[test]
fn test_random_against_hashset() {
    let mut rng = thread_rng();
    let mut set = IntSet::new();
    let mut model: HashSet<i32> = HashSet::new();
    for _ in 0..10_000 {
        let value: i32 = rng.gen_range(-50, 50);
        match rng.gen_range(0, 3) {
            0 => assert_eq!(model.insert(value), set.insert(value)),
            1 => assert_eq!(model.remove(&value), set.remove(value)),
            _ => assert_eq!(model.contains(&value), set.contains(value)),
        }
        assert_eq!(model.len(), set.len());
    }
    for &value in model.iter() {
        assert!(set.contains(value));
    }
}

#[test]
fn test_random_order_against_vec() {
    // a Vec kept duplicate-free models the insertion order exactly
    let mut rng = thread_rng();
    let mut set = IntSet::with_capacity(1);
    let mut model: Vec<i32> = Vec::new();
    for _ in 0..5_000 {
        let value: i32 = rng.gen_range(-30, 30);
        if rng.gen_range(0, 2) == 0 {
            if !model.contains(&value) {
                model.push(value);
            }
            set.insert(value);
        } else {
            model.retain(|&v| v != value);
            set.remove(value);
        }
        assert_eq!(model.as_slice(), set.as_slice());
    }
}
