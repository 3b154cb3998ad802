//! Provides the `CardTally` structure, an insertion-ordered mapping from card
//! name to total quantity, and the `ExclusionSet` used by `--filter`.

use fxhash::FxBuildHasher;
use indexmap::IndexMap;

/// Card names to remove from both sides of a comparison.
pub type ExclusionSet = fxhash::FxHashSet<String>;

/// A `CardTally` maps each card name to the total number of copies seen.
/// Repeated entries for the same name sum; the map imposes no presentation
/// order (the report sorts).
#[derive(Debug, Default)]
pub struct CardTally {
    cards: IndexMap<String, u32, FxBuildHasher>,
}

impl CardTally {
    /// Creates an empty tally.
    #[must_use]
    pub fn new() -> Self {
        CardTally { cards: IndexMap::default() }
    }

    /// Adds `quantity` copies of `name` to the running total for that name.
    /// The total saturates at `u32::MAX` rather than overflowing.
    pub fn add(&mut self, name: String, quantity: u32) {
        let total = self.cards.entry(name).or_insert(0);
        *total = total.saturating_add(quantity);
    }

    /// The total quantity recorded for `name`, if any.
    #[must_use]
    pub fn quantity(&self, name: &str) -> Option<u32> {
        self.cards.get(name).copied()
    }

    /// Is `name` present in the tally?
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.cards.contains_key(name)
    }

    /// Keeps only the names for which `keep` returns true. Like the
    /// `IndexMap` method this wraps, it's `O(n)` for any number of removals.
    pub fn retain(&mut self, mut keep: impl FnMut(&str) -> bool) {
        self.cards.retain(|name, _quantity| keep(name));
    }

    /// Iterates over `(name, quantity)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.cards.iter().map(|(name, &quantity)| (name.as_str(), quantity))
    }

    /// The number of distinct names in the tally.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Is the tally empty?
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
