//! Maximal-type-set engine integration tests.
//!
//! These tests verify the antichain invariant holds across realistic
//! card sequences and that the global-effect table behaves as one
//! ordered, feed-forward pass.

use mtg_reports::card::types::TypeSet;
use mtg_reports::{CardPrinting, MaximalTypesEngine, TypeKey, TypeVocabulary};

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

/// The invariant survives an arbitrary mix of subsets, supersets,
/// and incomparable sets, in any processing order.
#[test]
fn test_antichain_invariant_across_sequences() {
    let type_lines = [
        "Creature — Human",
        "Creature — Human Wizard",
        "Creature — Human Wizard Knight",
        "Artifact",
        "Artifact — Equipment",
        "Artifact Creature — Construct",
        "Land",
        "Legendary Land",
        "Instant",
        "Legendary Creature — Human Wizard",
    ];

    // Forward, reversed, and an interleaved order.
    let mut orders: Vec<Vec<usize>> = vec![
        (0..type_lines.len()).collect(),
        (0..type_lines.len()).rev().collect(),
    ];
    orders.push(vec![5, 0, 9, 3, 7, 1, 8, 2, 6, 4]);

    for order in orders {
        let mut engine = MaximalTypesEngine::new(&TypeVocabulary::empty());
        for (i, idx) in order.iter().enumerate() {
            let released = format!("200{}-01-01", i % 10);
            engine.process(&card(&format!("Card {idx}"), type_lines[*idx], &released));
            assert!(engine.antichain().holds_invariant());
        }

        // The dominated sets must be gone in every order.
        let chain = engine.antichain();
        assert!(!chain.contains(&["Creature", "Human"].into_iter().collect::<TypeKey>()));
        assert!(!chain.contains(&["Artifact"].into_iter().collect::<TypeKey>()));
        assert!(chain.contains(
            &["Creature", "Human", "Knight", "Wizard"]
                .into_iter()
                .collect::<TypeKey>()
        ));
    }
}

/// Every candidate that was rejected as dominated must still be
/// dominated by something in the final map.
#[test]
fn test_maximality_of_final_map() {
    let cards = [
        card("A", "Creature — Human", "2000-01-01"),
        card("B", "Creature — Human Wizard", "2001-01-01"),
        card("C", "Artifact", "2002-01-01"),
        card("D", "Artifact Creature — Construct", "2003-01-01"),
        card("E", "Creature — Human Wizard Knight", "2004-01-01"),
        card("F", "Instant", "2005-01-01"),
    ];

    let mut engine = MaximalTypesEngine::new(&TypeVocabulary::empty());
    for c in &cards {
        engine.process(c);
    }

    let chain = engine.antichain();
    for c in &cards {
        let key = TypeKey::from_set(&mtg_reports::extract_types(&c.type_line));
        let dominated = chain
            .iter()
            .any(|(stored, _)| key.is_subset_of(stored));
        assert!(dominated, "{} should be dominated by or present in the map", c.name);
    }
}

/// Changeling cards pick up the whole supplied creature vocabulary
/// before insertion.
#[test]
fn test_changeling_dominates_ordinary_creatures() {
    let vocab = TypeVocabulary::new(
        set_of(&["Bear", "Elf", "Human", "Shapeshifter", "Wizard"]),
        TypeSet::default(),
    );
    let mut engine = MaximalTypesEngine::new(&vocab);

    engine.process(&card("Wizards", "Creature — Human Wizard", "2000-01-01"));
    let mut changeling = card("Woodland Changeling", "Creature — Shapeshifter", "2007-10-12");
    changeling.keywords = vec!["Changeling".to_string()];
    engine.process(&changeling);

    // The changeling's set is a strict superset of every plain
    // creature's set, so only it remains.
    let reps = engine.representatives_sorted();
    assert_eq!(reps.len(), 1);
    assert_eq!(reps[0].card.name, "Woodland Changeling");
}

/// An unreadable vocabulary degrades to empty sets and processing
/// continues; the special-case unions just do nothing.
#[test]
fn test_missing_vocabulary_is_non_fatal() {
    let vocab = TypeVocabulary::load(
        std::path::Path::new("/no/such/creatures.txt"),
        std::path::Path::new("/no/such/lands.txt"),
    );
    let mut engine = MaximalTypesEngine::new(&vocab);

    let mut changeling = card("Changeling", "Creature — Shapeshifter", "2007-10-12");
    changeling.keywords = vec!["Changeling".to_string()];
    engine.process(&changeling);

    let expected: TypeKey = ["Creature", "Shapeshifter"].into_iter().collect();
    assert!(engine.antichain().contains(&expected));
}

/// The effect table feeds forward within one pass: Mycosynth Lattice
/// turns an enchantment into an artifact, March of the Machines then
/// makes it a creature, and Maskwood Nexus finally grants it every
/// creature type. Earlier table positions never see later additions.
#[test]
fn test_effect_table_feed_forward_order() {
    let vocab = TypeVocabulary::new(set_of(&["Bear", "Elf"]), TypeSet::default());
    let mut engine = MaximalTypesEngine::with_effects(&vocab);

    engine.process(&card("Glow", "Enchantment", "1997-06-09"));

    let expected: TypeKey = [
        "Artifact",
        "Bear",
        "Creature",
        "Elf",
        "Enchantment",
        "Legendary",
        "Snow",
    ]
    .into_iter()
    .collect();
    assert!(
        engine.antichain().contains(&expected),
        "effects must apply in table order with feed-forward"
    );
}

/// Prismatic Omen and Omo interact: a land gains the basic land
/// types, then Omo grants the rest of the land vocabulary.
#[test]
fn test_land_effects_union_vocabularies() {
    let vocab = TypeVocabulary::new(
        TypeSet::default(),
        set_of(&["Forest", "Island", "Mountain", "Plains", "Swamp", "Gate", "Lair"]),
    );
    let mut engine = MaximalTypesEngine::with_effects(&vocab);
    engine.process(&card("Wastes", "Land", "2016-01-22"));

    let reps = engine.representatives_sorted();
    assert_eq!(reps.len(), 1);
    let (key, _) = engine
        .antichain()
        .iter()
        .next()
        .expect("one entry");
    for land in ["Forest", "Gate", "Lair", "Swamp"] {
        assert!(key.tokens().contains(&land.to_string()), "missing {land}");
    }
}

/// Token and emblem faces never reach the antichain even when their
/// parent card is otherwise traditional.
#[test]
fn test_derived_faces_filtered() {
    let mut engine = MaximalTypesEngine::new(&TypeVocabulary::empty());
    let mut double = card("Spell // Token", "Instant // Token Creature — Goblin", "2020-01-01");
    double.card_faces = Some(vec![
        mtg_reports::CardFace {
            name: "Spell".to_string(),
            type_line: "Instant".to_string(),
            ..Default::default()
        },
        mtg_reports::CardFace {
            name: "Token".to_string(),
            type_line: "Token Creature — Goblin".to_string(),
            ..Default::default()
        },
    ]);
    engine.process(&double);

    let expected: TypeKey = ["Instant"].into_iter().collect();
    assert_eq!(engine.antichain().len(), 1);
    assert!(engine.antichain().contains(&expected));
}

/// Identical type sets keep the earliest printing as representative
/// regardless of arrival order.
#[test]
fn test_representative_is_first_printed() {
    let mut engine = MaximalTypesEngine::new(&TypeVocabulary::empty());

    let mut reprint = card("Grizzly Bears", "Creature — Bear", "2001-04-11");
    reprint.set = "7ed".to_string();
    let mut original = card("Grizzly Bears", "Creature — Bear", "1993-08-05");
    original.set = "lea".to_string();

    engine.process(&reprint);
    engine.process(&original);

    let reps = engine.representatives_sorted();
    assert_eq!(reps.len(), 1);
    assert_eq!(reps[0].card.set, "lea");
}
