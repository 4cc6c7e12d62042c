//! Antichain of type sets.
//!
//! `Antichain` maps canonical type keys to the earliest printing seen
//! with that exact type set. Invariant: no stored key's types are a
//! subset of another stored key's types. Candidates dominated by an
//! existing key are rejected; candidates that dominate existing keys
//! subsume them on insert.

use rustc_hash::FxHashMap;

use crate::card::printing::CardPrinting;
use crate::card::sort_key::SortKey;
use crate::card::types::TypeSet;

/// Canonical form of a type set: its tokens, sorted.
///
/// Built once from a working set and never mutated afterwards, so it
/// can serve as a map key.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TypeKey(Vec<String>);

impl TypeKey {
    /// Canonicalize a type set into a sorted key.
    #[must_use]
    pub fn from_set(types: &TypeSet) -> Self {
        let mut tokens: Vec<String> = types.iter().cloned().collect();
        tokens.sort_unstable();
        Self(tokens)
    }

    /// The sorted tokens.
    #[must_use]
    pub fn tokens(&self) -> &[String] {
        &self.0
    }

    /// Number of tokens.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the key holds no tokens.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Subset test on two sorted keys, by a single merge walk.
    /// Equal keys count as subsets.
    #[must_use]
    pub fn is_subset_of(&self, other: &TypeKey) -> bool {
        if self.0.len() > other.0.len() {
            return false;
        }
        let mut theirs = other.0.iter();
        'outer: for token in &self.0 {
            for candidate in theirs.by_ref() {
                if candidate == token {
                    continue 'outer;
                }
            }
            return false;
        }
        true
    }
}

impl<S: Into<String>> FromIterator<S> for TypeKey {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut tokens: Vec<String> = iter.into_iter().map(Into::into).collect();
        tokens.sort_unstable();
        Self(tokens)
    }
}

/// The printing currently representing a type key, with its cached
/// sort key.
#[derive(Clone, Debug)]
pub struct Representative {
    pub card: CardPrinting,
    pub sort_key: SortKey,
}

/// Map from type key to representative printing, maintaining the
/// no-subset invariant across keys.
#[derive(Clone, Debug, Default)]
pub struct Antichain {
    entries: FxHashMap<TypeKey, Representative>,
}

impl Antichain {
    /// Create an empty antichain.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Offer a candidate (key, printing) pair.
    ///
    /// - Exact key match: the stored representative is replaced only
    ///   when the candidate sorts earlier. The key set is unchanged.
    /// - Otherwise the candidate is inserted only if no stored key is
    ///   a superset of it; on insert, every stored key that is a
    ///   subset of the candidate is removed first.
    ///
    /// Returns true when the map changed.
    pub fn offer(&mut self, key: TypeKey, card: &CardPrinting) -> bool {
        let sort_key = SortKey::of(card);

        if let Some(existing) = self.entries.get_mut(&key) {
            if sort_key < existing.sort_key {
                *existing = Representative {
                    card: card.clone(),
                    sort_key,
                };
                return true;
            }
            return false;
        }

        let dominated = self.entries.keys().any(|existing| key.is_subset_of(existing));
        if dominated {
            return false;
        }

        self.entries.retain(|existing, _| !existing.is_subset_of(&key));
        self.entries.insert(
            key,
            Representative {
                card: card.clone(),
                sort_key,
            },
        );
        true
    }

    /// Number of stored keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the antichain is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether a key is currently stored.
    #[must_use]
    pub fn contains(&self, key: &TypeKey) -> bool {
        self.entries.contains_key(key)
    }

    /// Look up the representative for a key.
    #[must_use]
    pub fn get(&self, key: &TypeKey) -> Option<&Representative> {
        self.entries.get(key)
    }

    /// Iterate over stored entries in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&TypeKey, &Representative)> {
        self.entries.iter()
    }

    /// Entries ordered by representative sort key, earliest first.
    #[must_use]
    pub fn entries_sorted(&self) -> Vec<(&TypeKey, &Representative)> {
        let mut entries: Vec<_> = self.entries.iter().collect();
        entries.sort_by(|a, b| a.1.sort_key.cmp(&b.1.sort_key));
        entries
    }

    /// Check the no-subset invariant over all stored key pairs.
    #[must_use]
    pub fn holds_invariant(&self) -> bool {
        let keys: Vec<_> = self.entries.keys().collect();
        for (i, a) in keys.iter().enumerate() {
            for b in &keys[i + 1..] {
                if a.is_subset_of(b) || b.is_subset_of(a) {
                    return false;
                }
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(name: &str, released_at: &str) -> CardPrinting {
        CardPrinting {
            name: name.to_string(),
            released_at: Some(released_at.to_string()),
            set: "tst".to_string(),
            collector_number: "1".to_string(),
            ..CardPrinting::default()
        }
    }

    fn key(tokens: &[&str]) -> TypeKey {
        tokens.iter().copied().collect()
    }

    #[test]
    fn test_type_key_canonical_order() {
        let a = key(&["Wizard", "Creature", "Human"]);
        let b = key(&["Creature", "Human", "Wizard"]);
        assert_eq!(a, b);
        assert_eq!(a.tokens(), ["Creature", "Human", "Wizard"]);
    }

    #[test]
    fn test_subset_walk() {
        assert!(key(&["Creature"]).is_subset_of(&key(&["Creature", "Human"])));
        assert!(key(&[]).is_subset_of(&key(&["Creature"])));
        assert!(key(&["Creature"]).is_subset_of(&key(&["Creature"])));
        assert!(!key(&["Creature", "Human"]).is_subset_of(&key(&["Creature"])));
        assert!(!key(&["Land"]).is_subset_of(&key(&["Creature", "Human"])));
    }

    #[test]
    fn test_superset_subsumes() {
        let mut chain = Antichain::new();
        assert!(chain.offer(key(&["Creature", "Human", "Wizard"]), &card("A", "2000-01-01")));
        assert!(chain.offer(
            key(&["Creature", "Human", "Wizard", "Knight"]),
            &card("B", "2001-01-01")
        ));

        assert_eq!(chain.len(), 1);
        assert!(chain.contains(&key(&["Creature", "Human", "Knight", "Wizard"])));
        assert!(chain.holds_invariant());
    }

    #[test]
    fn test_subset_rejected_either_order() {
        let mut chain = Antichain::new();
        chain.offer(
            key(&["Creature", "Human", "Wizard", "Knight"]),
            &card("B", "2001-01-01"),
        );
        assert!(!chain.offer(key(&["Creature", "Human", "Wizard"]), &card("A", "2000-01-01")));

        assert_eq!(chain.len(), 1);
        assert!(!chain.contains(&key(&["Creature", "Human", "Wizard"])));
    }

    #[test]
    fn test_incomparable_keys_coexist() {
        let mut chain = Antichain::new();
        chain.offer(key(&["Creature", "Human"]), &card("A", "2000-01-01"));
        chain.offer(key(&["Artifact", "Equipment"]), &card("B", "2001-01-01"));

        assert_eq!(chain.len(), 2);
        assert!(chain.holds_invariant());
    }

    #[test]
    fn test_earlier_printing_replaces_representative() {
        let mut chain = Antichain::new();
        let k = key(&["Creature", "Human"]);
        chain.offer(k.clone(), &card("Later", "2010-01-01"));
        assert!(chain.offer(k.clone(), &card("Earlier", "1994-01-01")));
        assert!(!chain.offer(k.clone(), &card("Latest", "2020-01-01")));

        assert_eq!(chain.get(&k).unwrap().card.name, "Earlier");
        assert_eq!(chain.len(), 1);
    }

    #[test]
    fn test_one_superset_removes_many_subsets() {
        let mut chain = Antichain::new();
        chain.offer(key(&["Creature"]), &card("A", "2000-01-01"));
        chain.offer(key(&["Artifact"]), &card("B", "2000-01-01"));
        chain.offer(key(&["Land"]), &card("C", "2000-01-01"));
        assert_eq!(chain.len(), 3);

        chain.offer(key(&["Artifact", "Creature", "Land"]), &card("D", "2002-01-01"));
        assert_eq!(chain.len(), 1);
        assert!(chain.holds_invariant());
    }

    #[test]
    fn test_entries_sorted_by_sort_key() {
        let mut chain = Antichain::new();
        chain.offer(key(&["Creature", "Human"]), &card("New", "2020-01-01"));
        chain.offer(key(&["Artifact", "Equipment"]), &card("Old", "1994-01-01"));

        let names: Vec<_> = chain
            .entries_sorted()
            .into_iter()
            .map(|(_, rep)| rep.card.name.clone())
            .collect();
        assert_eq!(names, ["Old", "New"]);
    }
}
