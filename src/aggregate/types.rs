//! Maximal-type-set reports.
//!
//! Both reports wrap the same engine; the effects-aware one just
//! constructs it with the global-effect table. Rows expose the
//! representative's printed type line - in the effects-aware report
//! the expanded set was only an intermediate, so its column is named
//! for the original types.

use serde_json::Value;

use crate::card::printing::CardPrinting;
use crate::maximal::engine::MaximalTypesEngine;
use crate::vocab::TypeVocabulary;

use super::{Aggregator, CardLink, ColumnDef, Row};

fn engine_rows(engine: &MaximalTypesEngine, types_field: &str) -> Vec<Row> {
    engine
        .representatives_sorted()
        .into_iter()
        .map(|rep| {
            let card = &rep.card;
            let mut row = Row::new();
            row.insert(types_field.to_string(), Value::from(card.type_line.clone()));
            row.insert("name".to_string(), Value::from(card.name.clone()));
            row.insert("set".to_string(), Value::from(card.set.clone()));
            row.insert(
                "releaseDate".to_string(),
                Value::from(card.released_at.clone().unwrap_or_default()),
            );
            CardLink::of(card).write(&mut row);
            row
        })
        .collect()
}

/// Cards whose printed type combinations no other card dominates.
pub struct MaximalPrintedTypes {
    columns: Vec<ColumnDef>,
    engine: MaximalTypesEngine,
}

impl MaximalPrintedTypes {
    #[must_use]
    pub fn new(vocab: &TypeVocabulary) -> Self {
        Self {
            columns: vec![
                ColumnDef::new("types", "Types"),
                ColumnDef::new("name", "Name"),
                ColumnDef::new("set", "Set"),
                ColumnDef::new("releaseDate", "Release Date"),
            ],
            engine: MaximalTypesEngine::new(vocab),
        }
    }
}

impl Aggregator for MaximalPrintedTypes {
    fn name(&self) -> &str {
        "maximal_printed_types"
    }

    fn display_name(&self) -> &str {
        "Maximal Printed Types"
    }

    fn columns(&self) -> &[ColumnDef] {
        &self.columns
    }

    fn process(&mut self, card: &CardPrinting) {
        self.engine.process(card);
    }

    fn finalize(&mut self) -> Vec<Row> {
        engine_rows(&self.engine, "types")
    }
}

/// Cards whose type combinations stay maximal even with every global
/// type-granting effect in play.
pub struct MaximalTypesWithEffects {
    columns: Vec<ColumnDef>,
    engine: MaximalTypesEngine,
}

impl MaximalTypesWithEffects {
    #[must_use]
    pub fn new(vocab: &TypeVocabulary) -> Self {
        Self {
            columns: vec![
                ColumnDef::new("originalTypes", "Original Types"),
                ColumnDef::new("name", "Name"),
                ColumnDef::new("set", "Set"),
                ColumnDef::new("releaseDate", "Release Date"),
            ],
            engine: MaximalTypesEngine::with_effects(vocab),
        }
    }
}

impl Aggregator for MaximalTypesWithEffects {
    fn name(&self) -> &str {
        "maximal_types_with_effects"
    }

    fn display_name(&self) -> &str {
        "Maximal Types with Global Effects"
    }

    fn columns(&self) -> &[ColumnDef] {
        &self.columns
    }

    fn process(&mut self, card: &CardPrinting) {
        self.engine.process(card);
    }

    fn finalize(&mut self) -> Vec<Row> {
        engine_rows(&self.engine, "originalTypes")
    }
}
