//! Unit tests for the set collection.

use satchel::Set;

// ============================================================================
// CONSTRUCTION AND QUERIES
// ============================================================================

#[test]
fn basic_construction() {
    let set = Set::from([1, 2, 3]);
    assert_eq!(set.len(), 3);
    assert!(set.contains(&1));
    assert!(set.contains(&2));
    assert!(set.contains(&3));
    assert!(!set.contains(&4));
    assert!(!set.is_empty());
}

#[test]
fn empty_set() {
    let set: Set<i32> = Set::new();
    assert_eq!(set.len(), 0);
    assert!(set.is_empty());
    assert!(!set.contains(&1));
}

#[test]
fn to_vec_snapshots_all_elements() {
    let set = Set::from([1, 2, 3]);
    let mut v = set.to_vec();
    v.sort_unstable();
    assert_eq!(v, vec![1, 2, 3]);
    assert!(Set::<i32>::new().to_vec().is_empty());
}

// ============================================================================
// MUTATION
// ============================================================================

#[test]
fn add_returns_whether_already_present() {
    let mut set = Set::new();
    assert!(!set.add(1));
    assert_eq!(set.len(), 1);
    assert!(set.contains(&1));
    assert!(set.add(1));
    assert_eq!(set.len(), 1);
}

#[test]
fn remove_returns_whether_present() {
    let mut set = Set::from([1, 2, 3]);
    assert!(set.remove(&1));
    assert_eq!(set.len(), 2);
    assert!(!set.remove(&1));
    assert!(!set.remove(&4));
    assert_eq!(set.len(), 2);
}

#[test]
fn clear_empties() {
    let mut set = Set::from([1, 2, 3]);
    set.clear();
    assert!(set.is_empty());
}

// ============================================================================
// ALGEBRA
// ============================================================================

#[test]
fn union_adds_all_elements() {
    let mut set1 = Set::from([1, 2, 3]);
    set1.union_with(&Set::from([2, 3, 4]));
    assert_eq!(set1.len(), 4);
    for v in 1..=4 {
        assert!(set1.contains(&v));
    }
}

#[test]
fn intersect_keeps_common_elements() {
    let mut set1 = Set::from([1, 2, 3]);
    set1.intersect_with(&Set::from([2, 3, 4]));
    assert_eq!(set1, Set::from([2, 3]));
}

#[test]
fn subtract_removes_other_elements() {
    let mut set1 = Set::from([1, 2, 3]);
    set1.subtract(&Set::from([2, 3, 4]));
    assert_eq!(set1, Set::from([1]));
}

#[test]
fn is_subset_cases() {
    let set1 = Set::from([1, 2, 3]);
    let set2 = Set::from([2, 3, 4]);
    let set3 = Set::from([1, 2, 3, 4]);
    assert!(!set1.is_subset(&set2));
    assert!(set1.is_subset(&set1));
    assert!(set1.is_subset(&set3));
    // A larger set is never a subset of a smaller one.
    assert!(!set3.is_subset(&set1));
}

#[test]
fn is_equal_requires_same_elements() {
    let set1 = Set::from([1, 2, 3]);
    let set2 = Set::from([2, 3, 4]);
    let set3 = Set::from([1, 2, 3]);
    assert!(!set1.is_equal(&set2));
    assert!(!set2.is_equal(&set3));
    assert!(set1.is_equal(&set3));
    assert_eq!(set1, set3);
    assert_ne!(set1, set2);
}

#[test]
fn clone_is_independent() {
    let set1 = Set::from([1, 2, 3]);
    let mut set2 = set1.clone();
    assert!(set1.is_equal(&set2));

    set2.add(4);
    assert_eq!(set1.len(), 3);
    assert_eq!(set2.len(), 4);
}

// ============================================================================
// HIGHER-ORDER TRANSFORMS
// ============================================================================

#[test]
fn foreach_visits_every_element_once() {
    let set = Set::from([1, 2, 3]);
    let mut sum = 0;
    set.foreach(|v| sum += v);
    assert_eq!(sum, 6);
}

#[test]
fn map_builds_new_set() {
    let set = Set::from([1, 2, 3]);
    let mapped = set.map(|v| v * 100);
    assert_eq!(mapped, Set::from([100, 200, 300]));
}

#[test]
fn map_collapses_collisions() {
    let set = Set::from([1, 2, 3, 4]);
    let parity = set.map(|v| v % 2);
    assert_eq!(parity.len(), 2);
}

#[test]
fn filter_keeps_matching_elements() {
    let set = Set::from([1, 2, 3, 4, 5]);
    let even = set.filter(|v| v % 2 == 0);
    assert_eq!(even, Set::from([2, 4]));
}

// ============================================================================
// SERDE
// ============================================================================

#[test]
fn serde_round_trip() {
    let set = Set::from(["a".to_string(), "b".to_string()]);
    let json = serde_json::to_string(&set).unwrap();
    let back: Set<String> = serde_json::from_str(&json).unwrap();
    assert_eq!(set, back);
}
