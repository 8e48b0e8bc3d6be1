/*!
# Utilities

Abstractions over the bookkeeping containers used by the traversal and
component algorithms:

- [`Set`]: minimal trait for visited-set-like collections, implemented for
  the dense [`NodeBitSet`] and the sparse `FxHashSet`,
- [`FromCapacity`]: construction from a known capacity, so algorithms can
  pre-size their bookkeeping for the graph at hand.
*/

use std::{
    collections::HashSet,
    hash::{BuildHasher, Hash},
};

use fxhash::FxHashSet;

use crate::node::*;

/// Minimalist trait for a set-like collection.
pub trait Set<T> {
    /// Inserts `value` into the set.
    /// Returns `true` if the element was already present.
    fn insert(&mut self, value: T) -> bool;

    /// Removes `value` from the set.
    /// Returns `true` if the element was present.
    fn remove(&mut self, value: &T) -> bool;

    /// Returns `true` if the set contains `value`.
    fn contains(&self, value: &T) -> bool;

    /// Clears all elements from the set.
    fn clear(&mut self);

    /// Returns the number of elements in the set.
    fn len(&self) -> usize;

    /// Returns `true` if the set is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T, S> Set<T> for HashSet<T, S>
where
    T: Eq + Hash,
    S: BuildHasher,
{
    fn insert(&mut self, value: T) -> bool {
        !HashSet::insert(self, value)
    }

    fn remove(&mut self, value: &T) -> bool {
        HashSet::remove(self, value)
    }

    fn contains(&self, value: &T) -> bool {
        HashSet::contains(self, value)
    }

    fn clear(&mut self) {
        HashSet::clear(self);
    }

    fn len(&self) -> usize {
        HashSet::len(self)
    }
}

impl Set<Node> for NodeBitSet {
    fn insert(&mut self, value: Node) -> bool {
        self.set_bit(value)
    }

    fn remove(&mut self, value: &Node) -> bool {
        self.clear_bit(*value)
    }

    fn contains(&self, value: &Node) -> bool {
        self.get_bit(*value)
    }

    fn clear(&mut self) {
        self.clear_all();
    }

    fn len(&self) -> usize {
        self.cardinality() as usize
    }
}

/// Helper trait for datastructures that can be initialized with capacity.
/// Can be interpreted as reserved space or guaranteed used space.
pub trait FromCapacity: Sized {
    /// Create a new instance with a given capacity
    fn from_capacity(capacity: usize) -> Self {
        Self::from_total_used_capacity(capacity, capacity)
    }

    /// Creates a new instance from the total capacity (ie. max-value) and the
    /// actual capacity that will be used (space-wise). Dense structures size
    /// themselves after `total`, sparse ones after `used`.
    fn from_total_used_capacity(total: usize, used: usize) -> Self;
}

impl FromCapacity for NodeBitSet {
    fn from_total_used_capacity(total: usize, _used: usize) -> Self {
        NodeBitSet::new(total as NumNodes)
    }
}

impl<T> FromCapacity for FxHashSet<T> {
    fn from_total_used_capacity(_total: usize, used: usize) -> Self {
        FxHashSet::with_capacity_and_hasher(used, Default::default())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn exercise_set<S: Set<Node> + FromCapacity>() {
        let mut set = S::from_total_used_capacity(10, 10);
        assert!(set.is_empty());

        assert!(!set.insert(3));
        assert!(set.insert(3));
        assert!(!set.insert(7));

        assert_eq!(set.len(), 2);
        assert!(set.contains(&3));
        assert!(!set.contains(&4));

        assert!(set.remove(&3));
        assert!(!set.remove(&3));
        assert_eq!(set.len(), 1);

        set.clear();
        assert!(set.is_empty());
    }

    #[test]
    fn bitset_as_set() {
        exercise_set::<NodeBitSet>();
    }

    #[test]
    fn hashset_as_set() {
        exercise_set::<FxHashSet<Node>>();
    }
}
