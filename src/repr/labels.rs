use fxhash::FxHashMap;

use super::*;

/// Bidirectional store interning string labels as dense [`Node`] ids.
///
/// Ids are assigned in insertion order starting at `0`, so iterating
/// `0..len()` visits labels in the order they were first added.
#[derive(Clone, Default)]
pub struct LabelStore {
    labels: Vec<Box<str>>,
    index: FxHashMap<Box<str>, Node>,
}

impl LabelStore {
    /// Creates an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty store with space reserved for `n` labels
    pub fn with_capacity(n: NumNodes) -> Self {
        Self {
            labels: Vec::with_capacity(n as usize),
            index: FxHashMap::with_capacity_and_hasher(n as usize, Default::default()),
        }
    }

    /// Returns the number of interned labels
    pub fn len(&self) -> NumNodes {
        self.labels.len() as NumNodes
    }

    /// Returns *true* if no label was interned yet
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Returns the id assigned to `label`, if present
    pub fn get(&self, label: &str) -> Option<Node> {
        self.index.get(label).copied()
    }

    /// Returns the label interned for id `u`.
    /// ** Panics if `u >= len()` **
    pub fn label(&self, u: Node) -> &str {
        &self.labels[u as usize]
    }

    /// Interns `label` and returns `(id, newly_added)`. Idempotent: a label
    /// that is already present keeps its original id.
    pub fn intern(&mut self, label: &str) -> (Node, bool) {
        if let Some(&u) = self.index.get(label) {
            return (u, false);
        }

        let u = self.len();
        self.labels.push(label.into());
        self.index.insert(label.into(), u);
        (u, true)
    }

    /// Iterates over all labels in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.labels.iter().map(Box::as_ref)
    }
}
