//! Higher-order operations over ordered sequences.
//!
//! Every function here is a free generic function over a slice and a
//! closure: the element type and the callable are checked at compile time,
//! so there is no runtime shape validation and no way to hand these
//! functions a non-sequence or a non-unary callable.
//!
//! Forward-scanning operations visit `s[0], s[1], ..` in order. The
//! reverse-scanning pair ([`last_index_of`], [`find_last`]) visits
//! `s[len-1]` down to and including `s[0]`.
//!
//! # Conversions
//!
//! [`to_list`] and [`to_vec`] convert between contiguous slices and
//! [`LinkedList`], preserving element order in both directions, so
//! `to_vec(&to_list(s)) == s` for every slice `s`.

use std::collections::LinkedList;

/// Build an ordered linked list from the given elements, preserving order.
///
/// ```
/// use satchel::seq::as_list;
///
/// let l = as_list([1, 2, 3]);
/// assert_eq!(l.front(), Some(&1));
/// assert_eq!(l.back(), Some(&3));
/// ```
pub fn as_list<T>(elements: impl IntoIterator<Item = T>) -> LinkedList<T> {
    elements.into_iter().collect()
}

/// Convert a slice into a linked list of cloned elements, preserving order.
pub fn to_list<T: Clone>(s: &[T]) -> LinkedList<T> {
    s.iter().cloned().collect()
}

/// Convert a linked list into a vector in forward iteration order.
///
/// An empty list yields an empty vector.
pub fn to_vec<T: Clone>(l: &LinkedList<T>) -> Vec<T> {
    l.iter().cloned().collect()
}

/// Invoke `f` once per element in forward order, for side effects only.
pub fn foreach<T>(s: &[T], mut f: impl FnMut(&T)) {
    for e in s {
        f(e);
    }
}

/// Map every element through `f`, preserving order and length.
pub fn map<T, R>(s: &[T], mut f: impl FnMut(&T) -> R) -> Vec<R> {
    s.iter().map(|e| f(e)).collect()
}

/// True iff some element satisfies `pred`. Short-circuits on the first
/// match, scanning forward.
pub fn exists<T>(s: &[T], mut pred: impl FnMut(&T) -> bool) -> bool {
    s.iter().any(|e| pred(e))
}

/// Elements satisfying `pred`, in their original order.
///
/// Returns an empty vector when nothing matches.
pub fn filter<T: Clone>(s: &[T], mut pred: impl FnMut(&T) -> bool) -> Vec<T> {
    s.iter().filter(|e| pred(e)).cloned().collect()
}

/// Index of the first element satisfying `pred`, scanning forward.
pub fn index_of<T>(s: &[T], mut pred: impl FnMut(&T) -> bool) -> Option<usize> {
    s.iter().position(|e| pred(e))
}

/// Index of the first element satisfying `pred`, scanning backward from
/// the end. Index 0 is included in the scan.
pub fn last_index_of<T>(s: &[T], mut pred: impl FnMut(&T) -> bool) -> Option<usize> {
    s.iter().rposition(|e| pred(e))
}

/// First element satisfying `pred`, scanning forward.
pub fn find<T>(s: &[T], mut pred: impl FnMut(&T) -> bool) -> Option<&T> {
    s.iter().find(|e| pred(e))
}

/// First element satisfying `pred`, scanning backward from the end.
/// Index 0 is included in the scan.
pub fn find_last<T>(s: &[T], mut pred: impl FnMut(&T) -> bool) -> Option<&T> {
    s.iter().rev().find(|e| pred(e))
}
