//! A mutable, unordered, duplicate-free collection with set algebra.
//!
//! [`Set`] wraps [`HashSet`] and adds the in-place algebraic operations
//! ([`union_with`](Set::union_with), [`intersect_with`](Set::intersect_with),
//! [`subtract`](Set::subtract)), subset/equality tests, and higher-order
//! transforms ([`map`](Set::map), [`filter`](Set::filter)) that build new
//! independent sets.
//!
//! Iteration order is unspecified and may differ between calls and
//! platforms; nothing here stabilizes it.
//!
//! `Set` is not safe for concurrent mutation. Callers that share a set
//! across threads must serialize access externally, e.g. behind a mutex.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::collections::hash_set;
use std::collections::HashSet;
use std::hash::Hash;

/// An unordered collection of unique elements.
///
/// Equality and hashing follow the element type's `Eq`/`Hash` impls.
/// Duplicates collapse on construction and on [`add`](Set::add).
///
/// ```
/// use satchel::Set;
///
/// let mut a = Set::from([1, 2, 3]);
/// a.union_with(&Set::from([2, 3, 4]));
/// assert_eq!(a.len(), 4);
/// assert!(a.contains(&4));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Set<T: Eq + Hash> {
    elements: HashSet<T>,
}

impl<T: Eq + Hash> Set<T> {
    /// Create an empty set.
    pub fn new() -> Self {
        Set {
            elements: HashSet::new(),
        }
    }

    /// The number of elements in this set (its cardinality).
    #[inline]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// True if this set contains no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// True if this set contains the given value.
    ///
    /// Expected O(1). Accepts any borrowed form of the element type, so a
    /// `Set<String>` answers `&str` queries.
    #[inline]
    pub fn contains<Q>(&self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.elements.contains(value)
    }

    /// Snapshot of all elements as a vector the caller is free to modify.
    /// Order is unspecified.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.elements.iter().cloned().collect()
    }

    /// Add a value to this set.
    ///
    /// Returns true iff the set ALREADY contained the value — the inverse
    /// of [`HashSet::insert`]. The return answers "did I have it", not
    /// "was it newly added".
    pub fn add(&mut self, value: T) -> bool {
        !self.elements.insert(value)
    }

    /// Remove a value from this set. Returns true iff it was present.
    pub fn remove<Q>(&mut self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.elements.remove(value)
    }

    /// Remove all elements.
    pub fn clear(&mut self) {
        self.elements = HashSet::new();
    }

    /// In place, add every element of `other` into this set.
    pub fn union_with(&mut self, other: &Set<T>)
    where
        T: Clone,
    {
        for e in &other.elements {
            self.elements.insert(e.clone());
        }
    }

    /// In place, remove every element not present in `other`.
    pub fn intersect_with(&mut self, other: &Set<T>) {
        self.elements.retain(|e| other.elements.contains(e));
    }

    /// In place, remove every element present in `other`.
    pub fn subtract(&mut self, other: &Set<T>) {
        self.elements.retain(|e| !other.elements.contains(e));
    }

    /// True iff every element of this set is in `other`.
    ///
    /// Answers false immediately when this set is larger than `other`.
    pub fn is_subset(&self, other: &Set<T>) -> bool {
        if self.len() > other.len() {
            return false;
        }
        self.elements.iter().all(|e| other.elements.contains(e))
    }

    /// True iff both sets have exactly the same elements.
    ///
    /// Requires equal cardinality; also available as `==`.
    pub fn is_equal(&self, other: &Set<T>) -> bool {
        self.len() == other.len() && self.is_subset(other)
    }

    /// Iterate over the elements in unspecified order.
    pub fn iter(&self) -> hash_set::Iter<'_, T> {
        self.elements.iter()
    }

    /// Invoke `f` once per element, order unspecified, side effects only.
    pub fn foreach(&self, mut f: impl FnMut(&T)) {
        for e in &self.elements {
            f(e);
        }
    }

    /// New set containing `f(e)` for every element `e`.
    ///
    /// Results that collide under the target type's equality collapse, so
    /// the output may be smaller than the input.
    pub fn map<R: Eq + Hash>(&self, mut f: impl FnMut(&T) -> R) -> Set<R> {
        Set {
            elements: self.elements.iter().map(|e| f(e)).collect(),
        }
    }

    /// New set containing the elements satisfying `pred`.
    pub fn filter(&self, mut pred: impl FnMut(&T) -> bool) -> Set<T>
    where
        T: Clone,
    {
        Set {
            elements: self
                .elements
                .iter()
                .filter(|e| pred(e))
                .cloned()
                .collect(),
        }
    }
}

impl<T: Eq + Hash> Default for Set<T> {
    fn default() -> Self {
        Set::new()
    }
}

impl<T: Eq + Hash> PartialEq for Set<T> {
    fn eq(&self, other: &Self) -> bool {
        self.is_equal(other)
    }
}

impl<T: Eq + Hash> Eq for Set<T> {}

impl<T: Eq + Hash> FromIterator<T> for Set<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Set {
            elements: iter.into_iter().collect(),
        }
    }
}

impl<T: Eq + Hash, const N: usize> From<[T; N]> for Set<T> {
    fn from(elements: [T; N]) -> Self {
        elements.into_iter().collect()
    }
}

impl<T: Eq + Hash> Extend<T> for Set<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.elements.extend(iter);
    }
}

impl<T: Eq + Hash> IntoIterator for Set<T> {
    type Item = T;
    type IntoIter = hash_set::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.into_iter()
    }
}

impl<'a, T: Eq + Hash> IntoIterator for &'a Set<T> {
    type Item = &'a T;
    type IntoIter = hash_set::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}
