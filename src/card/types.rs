//! Type-line tokenization and type-set predicates.

use rustc_hash::FxHashSet;

/// A set of type tokens extracted from a type line.
pub type TypeSet = FxHashSet<String>;

/// The five basic land types.
pub const BASIC_LAND_TYPES: [&str; 5] = ["Forest", "Island", "Mountain", "Plains", "Swamp"];

/// Card types that make a card a permanent.
pub const PERMANENT_TYPES: [&str; 6] = [
    "Artifact",
    "Battle",
    "Creature",
    "Enchantment",
    "Land",
    "Planeswalker",
];

/// Extract the set of type tokens from a type line.
///
/// A token is a run of alphanumerics, apostrophes, and hyphens, so
/// "Power-Plant" and "Urza's" stay whole. The one two-word type,
/// "Time Lord", is joined before tokenizing and restored afterwards.
///
/// ```
/// use mtg_reports::card::extract_types;
///
/// let types = extract_types("Legendary Creature — Time Lord");
/// assert!(types.contains("Legendary"));
/// assert!(types.contains("Creature"));
/// assert!(types.contains("Time Lord"));
/// assert!(!types.contains("Time"));
/// ```
#[must_use]
pub fn extract_types(type_line: &str) -> TypeSet {
    let joined = type_line.replace("Time Lord", "Time-Lord");
    let mut types = TypeSet::default();
    let mut word = String::new();

    for ch in joined.chars() {
        if ch.is_alphanumeric() || ch == '\'' || ch == '-' {
            word.push(ch);
        } else if !word.is_empty() {
            types.insert(std::mem::take(&mut word).replace("Time-Lord", "Time Lord"));
        }
    }
    if !word.is_empty() {
        types.insert(word.replace("Time-Lord", "Time Lord"));
    }

    types
}

/// Whether a type set describes a permanent.
#[must_use]
pub fn is_permanent(types: &TypeSet) -> bool {
    PERMANENT_TYPES.iter().any(|ptype| types.contains(*ptype))
}

/// Whether a face counts as having every creature type.
///
/// True for the one printed special case, Mistform Ultimus, and for
/// anything with the Changeling keyword.
#[must_use]
pub fn is_all_creature_types(name: &str, keywords: &[String]) -> bool {
    name == "Mistform Ultimus" || keywords.iter().any(|kw| kw == "Changeling")
}
