//! The maximal-type-set engine.
//!
//! Streams printings one at a time and maintains the antichain of
//! type sets. One engine serves both report variants: constructed
//! plain, or with the global-effect table via `with_effects`
//! (composition, not a separate engine).

use crate::card::printing::{CardPrinting, FaceView};
use crate::card::types::{extract_types, is_all_creature_types, TypeSet};
use crate::maximal::antichain::{Antichain, Representative, TypeKey};
use crate::maximal::effects::{global_effects, GlobalEffect};
use crate::vocab::TypeVocabulary;

/// The one printed card with every nonbasic land type.
const PLANAR_NEXUS: &str = "Planar Nexus";

/// Maximal-type-set engine.
///
/// Holds the vocabularies, an optional effect table, and the
/// antichain under construction.
#[derive(Debug)]
pub struct MaximalTypesEngine {
    creature_types: TypeSet,
    nonbasic_land_types: TypeSet,
    effects: Vec<GlobalEffect>,
    antichain: Antichain,
}

impl MaximalTypesEngine {
    /// Engine over printed types only.
    #[must_use]
    pub fn new(vocab: &TypeVocabulary) -> Self {
        Self {
            creature_types: vocab.creature_types.clone(),
            nonbasic_land_types: vocab.nonbasic_land_types(),
            effects: Vec::new(),
            antichain: Antichain::new(),
        }
    }

    /// Engine that also applies the global-effect table to every face.
    #[must_use]
    pub fn with_effects(vocab: &TypeVocabulary) -> Self {
        Self {
            effects: global_effects(vocab),
            ..Self::new(vocab)
        }
    }

    /// Process one printing: every face of a traditional card is
    /// offered to the antichain.
    pub fn process(&mut self, card: &CardPrinting) {
        if !card.is_traditional() {
            return;
        }
        for face in card.faces() {
            self.process_face(&face, card);
        }
    }

    fn process_face(&mut self, face: &FaceView<'_>, parent: &CardPrinting) {
        let mut types = extract_types(face.type_line);

        // Derived object kinds, not real printings.
        if types.contains("Token") || types.contains("Emblem") {
            return;
        }

        if is_all_creature_types(face.name, face.keywords) {
            types.extend(self.creature_types.iter().cloned());
        }

        if face.name == PLANAR_NEXUS {
            types.extend(self.nonbasic_land_types.iter().cloned());
        }

        for effect in &self.effects {
            effect.apply(&mut types);
        }

        self.antichain.offer(TypeKey::from_set(&types), parent);
    }

    /// The antichain built so far.
    #[must_use]
    pub fn antichain(&self) -> &Antichain {
        &self.antichain
    }

    /// Stored representatives ordered by sort key, earliest first.
    ///
    /// Rows expose the representative's original type line; with an
    /// effect table in play the expanded set was only an intermediate.
    #[must_use]
    pub fn representatives_sorted(&self) -> Vec<&Representative> {
        self.antichain
            .entries_sorted()
            .into_iter()
            .map(|(_, rep)| rep)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::types::BASIC_LAND_TYPES;

    fn card(name: &str, type_line: &str, released_at: &str) -> CardPrinting {
        CardPrinting {
            name: name.to_string(),
            type_line: type_line.to_string(),
            released_at: Some(released_at.to_string()),
            set: "tst".to_string(),
            collector_number: "1".to_string(),
            ..CardPrinting::default()
        }
    }

    fn set_of(words: &[&str]) -> TypeSet {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_superset_wins_either_order() {
        for flip in [false, true] {
            let mut engine = MaximalTypesEngine::new(&TypeVocabulary::empty());
            let wizard = card("Wizard", "Creature — Human Wizard", "2000-01-01");
            let knight = card("Knight", "Creature — Human Wizard Knight", "2005-01-01");

            if flip {
                engine.process(&knight);
                engine.process(&wizard);
            } else {
                engine.process(&wizard);
                engine.process(&knight);
            }

            let reps = engine.representatives_sorted();
            assert_eq!(reps.len(), 1);
            assert_eq!(reps[0].card.name, "Knight");
        }
    }

    #[test]
    fn test_non_traditional_rejected_whole() {
        let mut engine = MaximalTypesEngine::new(&TypeVocabulary::empty());
        let mut silver = card("Joke", "Creature — Human Rogue Assembly-Worker", "2004-01-01");
        silver.border_color = "silver".to_string();
        engine.process(&silver);

        assert!(engine.antichain().is_empty());
    }

    #[test]
    fn test_token_and_emblem_faces_skipped() {
        let mut engine = MaximalTypesEngine::new(&TypeVocabulary::empty());
        engine.process(&card("Some Token", "Token Creature — Soldier", "2015-01-01"));
        engine.process(&card("Some Emblem", "Emblem — Chandra", "2015-01-01"));

        assert!(engine.antichain().is_empty());
    }

    #[test]
    fn test_changeling_unions_creature_vocabulary() {
        let vocab = TypeVocabulary::new(set_of(&["Bear", "Elf", "Shapeshifter"]), TypeSet::default());
        let mut engine = MaximalTypesEngine::new(&vocab);
        let mut changeling = card("Woodland Changeling", "Creature — Shapeshifter", "2007-10-12");
        changeling.keywords = vec!["Changeling".to_string()];
        engine.process(&changeling);

        let expected: TypeKey = ["Bear", "Creature", "Elf", "Shapeshifter"].into_iter().collect();
        assert!(engine.antichain().contains(&expected));
    }

    #[test]
    fn test_mistform_ultimus_by_name() {
        let vocab = TypeVocabulary::new(set_of(&["Illusion", "Bear"]), TypeSet::default());
        let mut engine = MaximalTypesEngine::new(&vocab);
        engine.process(&card(
            "Mistform Ultimus",
            "Legendary Creature — Illusion",
            "2003-05-26",
        ));

        let expected: TypeKey = ["Bear", "Creature", "Illusion", "Legendary"]
            .into_iter()
            .collect();
        assert!(engine.antichain().contains(&expected));
    }

    #[test]
    fn test_planar_nexus_unions_nonbasic_lands() {
        let vocab = TypeVocabulary::new(
            TypeSet::default(),
            set_of(&["Forest", "Island", "Mountain", "Plains", "Swamp", "Gate", "Sphere"]),
        );
        let mut engine = MaximalTypesEngine::new(&vocab);
        engine.process(&card("Planar Nexus", "Land", "2024-02-09"));

        let expected: TypeKey = ["Gate", "Land", "Sphere"].into_iter().collect();
        assert!(engine.antichain().contains(&expected));
        for basic in BASIC_LAND_TYPES {
            // Basic land types come only from Prismatic Omen in the
            // effects-aware variant, never from the printed report.
            assert!(!expected.tokens().contains(&basic.to_string()));
        }
    }

    #[test]
    fn test_faces_processed_independently() {
        let mut engine = MaximalTypesEngine::new(&TypeVocabulary::empty());
        let mut dual = card("Rise // Fall", "Sorcery // Instant", "2010-01-01");
        dual.card_faces = Some(vec![
            crate::card::printing::CardFace {
                name: "Rise".to_string(),
                type_line: "Sorcery".to_string(),
                ..Default::default()
            },
            crate::card::printing::CardFace {
                name: "Fall".to_string(),
                type_line: "Instant".to_string(),
                ..Default::default()
            },
        ]);
        engine.process(&dual);

        // Two incomparable singleton keys, each represented by the
        // parent printing.
        assert_eq!(engine.antichain().len(), 2);
        for rep in engine.representatives_sorted() {
            assert_eq!(rep.card.name, "Rise // Fall");
        }
    }

    #[test]
    fn test_effects_variant_expands_types() {
        let mut engine = MaximalTypesEngine::with_effects(&TypeVocabulary::empty());
        engine.process(&card("Relic", "Artifact", "1994-01-01"));

        let reps = engine.representatives_sorted();
        assert_eq!(reps.len(), 1);
        // The row keeps the original type line, not the expanded set.
        assert_eq!(reps[0].card.type_line, "Artifact");

        let expected: TypeKey = ["Artifact", "Creature", "Enchantment", "Legendary", "Snow"]
            .into_iter()
            .collect();
        assert!(engine.antichain().contains(&expected));
    }

    #[test]
    fn test_plain_and_effects_variants_diverge() {
        let vocab = TypeVocabulary::empty();
        let mut plain = MaximalTypesEngine::new(&vocab);
        let mut effects = MaximalTypesEngine::with_effects(&vocab);

        let instant = card("Shock", "Instant", "1999-01-01");
        let artifact = card("Relic", "Artifact", "1994-01-01");
        for engine in [&mut plain, &mut effects] {
            engine.process(&instant);
            engine.process(&artifact);
        }

        // Printed: {Instant} and {Artifact} are incomparable.
        assert_eq!(plain.antichain().len(), 2);
        // With effects the artifact's expanded set stays incomparable
        // with {Instant} too, but its key is much larger.
        assert_eq!(effects.antichain().len(), 2);
        let expanded: TypeKey = ["Artifact", "Creature", "Enchantment", "Legendary", "Snow"]
            .into_iter()
            .collect();
        assert!(effects.antichain().contains(&expanded));
        assert!(!plain.antichain().contains(&expanded));
    }
}
