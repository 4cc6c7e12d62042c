//! Type vocabularies - the creature-type and land-type word lists.
//!
//! The vocabularies originate outside this crate (the comprehensive
//! rules); here they are plain sets of strings, loaded once before a
//! pass and passed explicitly into engine construction. A missing or
//! unreadable vocabulary file degrades to an empty set with a logged
//! warning - the special-case unions downstream then simply have no
//! effect.

use std::path::Path;

use tracing::warn;

use crate::card::types::{TypeSet, BASIC_LAND_TYPES};

/// The creature-type and land-type vocabularies for one run.
#[derive(Clone, Debug, Default)]
pub struct TypeVocabulary {
    pub creature_types: TypeSet,
    pub land_types: TypeSet,
}

impl TypeVocabulary {
    /// Build from already-loaded sets.
    #[must_use]
    pub fn new(creature_types: TypeSet, land_types: TypeSet) -> Self {
        Self {
            creature_types,
            land_types,
        }
    }

    /// An empty vocabulary. Special-case unions become no-ops.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Load both vocabularies from newline-separated files.
    ///
    /// Either file failing to load yields an empty set for that
    /// vocabulary, never an error.
    #[must_use]
    pub fn load(creature_types_path: &Path, land_types_path: &Path) -> Self {
        Self {
            creature_types: load_types(creature_types_path),
            land_types: load_types(land_types_path),
        }
    }

    /// Land types minus the five basic land types.
    #[must_use]
    pub fn nonbasic_land_types(&self) -> TypeSet {
        self.land_types
            .iter()
            .filter(|land| !BASIC_LAND_TYPES.contains(&land.as_str()))
            .cloned()
            .collect()
    }
}

/// Load a type set from a file with one type per line.
///
/// Blank lines are skipped and surrounding whitespace is trimmed.
/// Failure is non-fatal: a warning is logged and the empty set
/// returned.
#[must_use]
pub fn load_types(path: &Path) -> TypeSet {
    match std::fs::read_to_string(path) {
        Ok(text) => text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect(),
        Err(err) => {
            warn!(path = %path.display(), error = %err, "failed to load type vocabulary");
            TypeSet::default()
        }
    }
}
