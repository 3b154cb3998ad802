//! Houses the `compare` function: given the two tallies (and the names to
//! exclude), work out what's unique to each file and what's in both with
//! different quantities.

use crate::tally::{CardTally, ExclusionSet};

/// The result of comparing two card tallies. Names present in both tallies
/// with equal quantities appear in none of the three fields. Entries are in no
/// particular order; the report sorts them.
#[derive(Debug)]
pub struct Comparison {
    /// Names in the first file only, with the first file's quantity.
    pub unique_to_first: Vec<(String, u32)>,
    /// Names in the second file only, with the second file's quantity.
    pub unique_to_second: Vec<(String, u32)>,
    /// Names in both files with unequal quantities, as `(first, second)`.
    pub differing: Vec<(String, (u32, u32))>,
}

/// Compares two tallies, after removing every name in `exclude` from both.
/// The tallies are taken by value; the caller has no further use for them.
#[must_use]
pub fn compare(mut first: CardTally, mut second: CardTally, exclude: &ExclusionSet) -> Comparison {
    if !exclude.is_empty() {
        first.retain(|name| !exclude.contains(name));
        second.retain(|name| !exclude.contains(name));
    }

    let mut unique_to_first = Vec::new();
    let mut differing = Vec::new();
    for (name, quantity) in first.iter() {
        match second.quantity(name) {
            None => unique_to_first.push((name.to_string(), quantity)),
            Some(other) if other != quantity => {
                differing.push((name.to_string(), (quantity, other)));
            }
            Some(_) => {}
        }
    }

    let unique_to_second = second
        .iter()
        .filter(|(name, _quantity)| !first.contains(name))
        .map(|(name, quantity)| (name.to_string(), quantity))
        .collect();

    Comparison { unique_to_first, unique_to_second, differing }
}
