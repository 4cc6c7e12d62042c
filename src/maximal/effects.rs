//! Global type-granting effects.
//!
//! Each effect simulates one card's influence on the types another
//! card would carry in play: a predicate over the working type set
//! plus a fixed union of granted tokens. Effects are plain data - an
//! ordered table applied in sequence, where each effect sees the
//! additions of the ones before it. The table order is part of the
//! contract: Mycosynth Lattice can make something an Artifact that
//! March of the Machines then turns into a Creature that Maskwood
//! Nexus then grants every creature type.

use crate::card::types::{is_permanent, TypeSet, BASIC_LAND_TYPES};
use crate::vocab::TypeVocabulary;

/// One named global effect: a conditional union over a type set.
pub struct GlobalEffect {
    name: &'static str,
    apply: Box<dyn Fn(&mut TypeSet) + Send + Sync>,
}

impl GlobalEffect {
    fn new(name: &'static str, apply: impl Fn(&mut TypeSet) + Send + Sync + 'static) -> Self {
        Self {
            name,
            apply: Box::new(apply),
        }
    }

    /// The card this effect models.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Apply the effect to a working type set.
    pub fn apply(&self, types: &mut TypeSet) {
        (self.apply)(types);
    }
}

impl std::fmt::Debug for GlobalEffect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GlobalEffect").field("name", &self.name).finish()
    }
}

fn extend(types: &mut TypeSet, tokens: &[&str]) {
    types.extend(tokens.iter().map(|token| token.to_string()));
}

fn union(types: &mut TypeSet, vocabulary: &TypeSet) {
    types.extend(vocabulary.iter().cloned());
}

/// Build the global-effect table for one vocabulary.
///
/// The returned order is fixed and significant.
#[must_use]
pub fn global_effects(vocab: &TypeVocabulary) -> Vec<GlobalEffect> {
    let creature_types = vocab.creature_types.clone();
    let creature_types_omo = vocab.creature_types.clone();
    let nonbasic_land_types = vocab.nonbasic_land_types();

    vec![
        GlobalEffect::new("In Bolas's Clutches", |types| {
            if is_permanent(types) {
                extend(types, &["Legendary"]);
            }
        }),
        GlobalEffect::new("Rimefeather Owl", |types| {
            if is_permanent(types) {
                extend(types, &["Snow"]);
            }
        }),
        GlobalEffect::new("Enchanted Evening", |types| {
            if is_permanent(types) {
                extend(types, &["Enchantment"]);
            }
        }),
        GlobalEffect::new("Mycosynth Lattice", |types| {
            if is_permanent(types) {
                extend(types, &["Artifact"]);
            }
        }),
        GlobalEffect::new("March of the Machines", |types| {
            if types.contains("Artifact") && !types.contains("Creature") {
                extend(types, &["Creature"]);
            }
        }),
        GlobalEffect::new("Maskwood Nexus", move |types| {
            if types.contains("Creature") {
                union(types, &creature_types);
            }
        }),
        GlobalEffect::new("Life and Limb", |types| {
            if types.contains("Forest") || types.contains("Saproling") {
                extend(types, &["Creature", "Land", "Saproling", "Forest"]);
            }
        }),
        GlobalEffect::new("Prismatic Omen", |types| {
            if types.contains("Land") {
                extend(types, &BASIC_LAND_TYPES);
            }
        }),
        GlobalEffect::new("Omo, Queen of Vesuva", move |types| {
            if types.contains("Land") {
                extend(types, &BASIC_LAND_TYPES);
                union(types, &nonbasic_land_types);
            } else if types.contains("Creature") {
                union(types, &creature_types_omo);
            }
        }),
    ]
}
